use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

/// Label of the submit button at the end of the search bar.
pub const SEARCH_BUTTON: &str = "[ Search ]";

const PROMPT_SYMBOL: &str = "> ";

/// Argument bundle for rendering the search bar.
pub struct InputContext<'a> {
	/// The search input widget.
	pub search_input: &'a SearchInput<'a>,
	/// Placeholder text shown when input is empty.
	pub placeholder: &'a str,
	/// Rendering area, a single row.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Loading indicator state for the search bar.
pub struct ProgressState<'a> {
	pub loading: bool,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
}

/// Where the search bar placed its interactive parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptAreas {
	pub input: Rect,
	pub button: Rect,
}

/// Render the prompt symbol, the query editor, the spinner and the button.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>, progress: ProgressState<'_>) -> PromptAreas {
	let InputContext {
		search_input,
		placeholder,
		area,
		theme,
	} = input;
	let ProgressState {
		loading,
		throbber_state,
	} = progress;

	if area.width == 0 || area.height == 0 {
		return PromptAreas::default();
	}

	let [symbol_area, input_area, spinner_area, button_area] = split_bar(area);

	let buffer = frame.buffer_mut();
	buffer.set_line(
		symbol_area.left(),
		symbol_area.top(),
		&Line::from(Span::styled(PROMPT_SYMBOL, theme.prompt_style())),
		symbol_area.width,
	);

	search_input.render_textarea(frame, input_area);
	if search_input.text().is_empty() {
		render_placeholder(frame, input_area, placeholder, theme);
	}

	if loading {
		render_spinner(frame, spinner_area, throbber_state, theme);
	}

	frame.buffer_mut().set_line(
		button_area.left(),
		button_area.top(),
		&Line::from(Span::styled(SEARCH_BUTTON, theme.highlight_style())),
		button_area.width,
	);

	PromptAreas {
		input: input_area,
		button: button_area,
	}
}

/// Split the bar into prompt symbol, editor, spinner and button columns.
fn split_bar(area: Rect) -> [Rect; 4] {
	let symbol_width = (PROMPT_SYMBOL.len() as u16).min(area.width);
	let button_width = (SEARCH_BUTTON.len() as u16).min(area.width - symbol_width);
	let spinner_width = 2u16.min(area.width - symbol_width - button_width);
	let input_width = area.width - symbol_width - button_width - spinner_width;

	let symbol = Rect::new(area.x, area.y, symbol_width, 1);
	let input = Rect::new(symbol.right(), area.y, input_width, 1);
	let spinner = Rect::new(input.right(), area.y, spinner_width, 1);
	let button = Rect::new(spinner.right(), area.y, button_width, 1);
	[symbol, input, spinner, button]
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	let available_width = area.width as usize;
	// Skip the first column so the cursor stays visible over the placeholder.
	let display_text: String = text.chars().take(available_width.saturating_sub(1)).collect();
	frame.buffer_mut().set_line(
		area.left().saturating_add(1),
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		area.width.saturating_sub(1),
	);
}

fn render_spinner(frame: &mut Frame, area: Rect, throbber_state: &ThrobberState, theme: &Theme) {
	if area.width == 0 {
		return;
	}
	let muted_style = theme.empty_style();
	let spinner = Throbber::default()
		.style(muted_style)
		.throbber_style(muted_style);
	let line = Line::from(spinner.to_symbol_span(throbber_state));
	frame
		.buffer_mut()
		.set_line(area.left(), area.top(), &line, area.width);
}
