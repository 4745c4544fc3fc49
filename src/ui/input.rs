//! Single-line query editor backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// The text field of the search bar.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		Self {
			textarea: Self::build(initial.into()),
		}
	}

	fn build(text: String) -> TextArea<'a> {
		let mut textarea = TextArea::new(vec![text]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		textarea
	}

	/// Current query text.
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key press to the editor. Returns `true` if the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.textarea.input(key)
	}

	/// Replace the text and move the cursor to its end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.textarea = Self::build(text.into());
	}

	pub fn clear(&mut self) {
		self.set_text(String::new());
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
