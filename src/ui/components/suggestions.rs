//! The suggestion dropdown: grouped rows, selection highlight and scrolling.

use docsearch_api::Suggestion;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::ui::style::Theme;

/// Message shown when a finished batch produced no suggestions.
pub const NO_RESULTS: &str = "No Results Found.";

/// One rendered line of the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRow {
	/// Group header taken from the label of the suggestion at this index.
	Header(usize),
	/// The suggestion at this index.
	Item(usize),
}

impl ListRow {
	/// Index of the suggestion this row selects, if any.
	pub fn index(self) -> Option<usize> {
		match self {
			Self::Header(_) => None,
			Self::Item(index) => Some(index),
		}
	}
}

/// Lay out suggestions as rows, inserting a header before every labelled entry.
pub fn layout_rows(suggestions: &[Suggestion]) -> Vec<ListRow> {
	let mut rows = Vec::with_capacity(suggestions.len() + 3);
	for (index, suggestion) in suggestions.iter().enumerate() {
		if suggestion.label.is_some() {
			rows.push(ListRow::Header(index));
		}
		rows.push(ListRow::Item(index));
	}
	rows
}

/// First visible row so that the selected item, and its header when it has
/// one, stay inside a window of `height` rows.
pub fn scroll_offset(rows: &[ListRow], selected: Option<usize>, height: usize, previous: usize) -> usize {
	let max_offset = rows.len().saturating_sub(height);
	let mut offset = previous.min(max_offset);
	let position = selected.and_then(|index| rows.iter().position(|row| *row == ListRow::Item(index)));
	let Some(position) = position else {
		return offset;
	};
	let top = match position.checked_sub(1).map(|above| rows[above]) {
		Some(ListRow::Header(_)) => position - 1,
		_ => position,
	};
	if top < offset {
		offset = top;
	} else if position >= offset + height {
		offset = position + 1 - height;
	}
	offset.min(max_offset)
}

/// Number of rows the dropdown needs, borders included.
pub fn dropdown_height(suggestions: &[Suggestion], loading: bool) -> u16 {
	if loading {
		0
	} else if suggestions.is_empty() {
		3
	} else {
		let rows = layout_rows(suggestions).len();
		u16::try_from(rows + 2).unwrap_or(u16::MAX)
	}
}

/// Argument bundle for rendering the dropdown.
pub struct SuggestionListContext<'a> {
	pub suggestions: &'a [Suggestion],
	pub selected: Option<usize>,
	pub loading: bool,
	pub theme: &'a Theme,
}

/// Rows drawn by [`render_suggestions`] and where they were drawn.
#[derive(Debug, Clone, Default)]
pub struct RenderedList {
	pub area: Rect,
	pub rows: Vec<ListRow>,
	pub offset: usize,
}

/// Render the dropdown into `area`.
///
/// Nothing is drawn while loading. `previous_offset` is the scroll position of
/// the last frame.
pub fn render_suggestions(
	frame: &mut Frame,
	area: Rect,
	context: SuggestionListContext<'_>,
	previous_offset: usize,
) -> RenderedList {
	let SuggestionListContext {
		suggestions,
		selected,
		loading,
		theme,
	} = context;

	if loading || area.width == 0 || area.height == 0 {
		return RenderedList::default();
	}

	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.prompt_style());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if suggestions.is_empty() {
		let message = Paragraph::new(Line::from(Span::styled(
			format!(" {NO_RESULTS} "),
			theme.empty_style(),
		)));
		frame.render_widget(message, inner);
		return RenderedList::default();
	}

	let rows = layout_rows(suggestions);
	let height = usize::from(inner.height);
	let offset = scroll_offset(&rows, selected, height, previous_offset);
	let visible: Vec<ListRow> = rows.iter().skip(offset).take(height).copied().collect();

	let buffer = frame.buffer_mut();
	for (line_index, row) in visible.iter().enumerate() {
		let y = inner.y + line_index as u16;
		let row_area = Rect::new(inner.x, y, inner.width, 1);
		match *row {
			ListRow::Header(index) => {
				let label = suggestions[index].label.as_deref().unwrap_or_default();
				let line = Line::from(Span::styled(
					format!(" {}", label.to_uppercase()),
					theme.header_style(),
				));
				buffer.set_line(row_area.x, y, &line, row_area.width);
			}
			ListRow::Item(index) => {
				let suggestion = &suggestions[index];
				let tag = format!(" {} ", suggestion.kind.tag());
				let available = usize::from(row_area.width).saturating_sub(tag.len() + 1);
				let line = Line::from(vec![
					Span::styled(tag, theme.empty_style()),
					Span::raw(truncate_to_width(suggestion.display_text(), available)),
				]);
				buffer.set_line(row_area.x, y, &line, row_area.width);
				if selected == Some(index) {
					buffer.set_style(row_area, theme.row_highlight_style());
				}
			}
		}
	}

	RenderedList {
		area: inner,
		rows: visible,
		offset,
	}
}

/// Cut `text` to at most `width` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, width: usize) -> String {
	let mut used = 0;
	let mut out = String::new();
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width > width {
			if width == 0 {
				return out;
			}
			while used + 1 > width {
				match out.pop() {
					Some(removed) => used -= removed.width().unwrap_or(0),
					None => return out,
				}
			}
			out.push('…');
			return out;
		}
		used += ch_width;
		out.push(ch);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use docsearch_api::merge_groups;
	use ratatui::{Terminal, backend::TestBackend};

	fn suggestions(counts: [usize; 3]) -> Vec<Suggestion> {
		let kinds = ["object", "genobject_dsp", "tutorial"];
		let groups = [0, 1, 2].map(|group| {
			(0..counts[group])
				.map(|index| {
					Suggestion::new(kinds[group], format!("{}{index}", &kinds[group][..3]))
						.with_title(format!("Title {index}"))
				})
				.collect::<Vec<_>>()
		});
		merge_groups(groups)
	}

	#[test]
	fn headers_precede_labelled_items() {
		let rows = layout_rows(&suggestions([2, 1, 0]));
		assert_eq!(
			rows,
			vec![
				ListRow::Header(0),
				ListRow::Item(0),
				ListRow::Item(1),
				ListRow::Header(2),
				ListRow::Item(2),
			]
		);
		assert_eq!(rows[0].index(), None);
		assert_eq!(rows[4].index(), Some(2));
	}

	#[test]
	fn scrolling_keeps_selection_and_header_visible() {
		let rows = layout_rows(&suggestions([5, 5, 0]));
		// rows: H0 I0..I4 H5 I5..I9 => 12 rows
		assert_eq!(scroll_offset(&rows, None, 4, 0), 0);
		assert_eq!(scroll_offset(&rows, Some(4), 4, 0), 2);
		assert_eq!(scroll_offset(&rows, Some(5), 4, 2), 4);
		assert_eq!(scroll_offset(&rows, Some(0), 4, 5), 0);
		assert_eq!(scroll_offset(&rows, None, 4, 99), 8);
	}

	#[test]
	fn truncation_respects_display_width() {
		assert_eq!(truncate_to_width("cycle~", 10), "cycle~");
		assert_eq!(truncate_to_width("jit.gl.gridshape", 8), "jit.gl.…");
		assert_eq!(truncate_to_width("abc", 0), "");
	}

	fn render(counts: [usize; 3], selected: Option<usize>, height: u16) -> (Vec<String>, RenderedList) {
		let items = suggestions(counts);
		let theme = Theme::default();
		let mut terminal = Terminal::new(TestBackend::new(30, height)).unwrap();
		let mut rendered = RenderedList::default();
		terminal
			.draw(|frame| {
				rendered = render_suggestions(
					frame,
					frame.area(),
					SuggestionListContext {
						suggestions: &items,
						selected,
						loading: false,
						theme: &theme,
					},
					0,
				);
			})
			.unwrap();
		let buffer = terminal.backend().buffer();
		let lines = (0..buffer.area.height)
			.map(|y| {
				(0..buffer.area.width)
					.map(|x| buffer[(x, y)].symbol())
					.collect::<String>()
					.trim_end()
					.to_string()
			})
			.collect();
		(lines, rendered)
	}

	#[test]
	fn grouped_list_renders_headers_and_tags() {
		let (lines, rendered) = render([2, 1, 1], Some(1), 9);
		insta::assert_snapshot!(lines.join("\n"), @r"
		┌────────────────────────────┐
		│ OBJECT                     │
		│ obj obj0                   │
		│ obj obj1                   │
		│ GEN OBJECT                 │
		│ gen gen0                   │
		│ DOCUMENTATION              │
		│ tut Title 0                │
		└────────────────────────────┘
		");
		assert_eq!(rendered.rows.len(), 7);
		assert_eq!(rendered.area, Rect::new(1, 1, 28, 7));
	}

	#[test]
	fn empty_results_render_message() {
		let (lines, rendered) = render([0, 0, 0], None, 3);
		assert!(lines[1].contains(NO_RESULTS));
		assert!(rendered.rows.is_empty());
	}

	#[test]
	fn loading_renders_nothing() {
		let items = suggestions([1, 0, 0]);
		let theme = Theme::default();
		let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
		terminal
			.draw(|frame| {
				let rendered = render_suggestions(
					frame,
					frame.area(),
					SuggestionListContext {
						suggestions: &items,
						selected: None,
						loading: true,
						theme: &theme,
					},
					0,
				);
				assert!(rendered.rows.is_empty());
			})
			.unwrap();
		let buffer = terminal.backend().buffer();
		assert!(buffer.content.iter().all(|cell| cell.symbol() == " "));
	}
}
