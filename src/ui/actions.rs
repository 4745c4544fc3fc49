use std::time::Instant;

use anyhow::Result;
use ratatui::crossterm::event::{
	Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use super::state::{LoadStatus, contains};
use crate::outcome::SearchOutcome;

/// Selection after moving down: wraps from the last row back to no selection.
pub(crate) fn next_index(selected: Option<usize>, len: usize) -> Option<usize> {
	match selected {
		None if len > 0 => Some(0),
		Some(index) if index + 1 < len => Some(index + 1),
		_ => None,
	}
}

/// Selection after moving up: wraps from no selection to the last row.
pub(crate) fn previous_index(selected: Option<usize>, len: usize) -> Option<usize> {
	match selected {
		None => len.checked_sub(1),
		Some(0) => None,
		Some(index) => Some(index - 1).filter(|previous| *previous < len),
	}
}

impl<'a> App<'a> {
	pub(crate) fn handle_event(&mut self, event: Event, now: Instant) -> Result<Option<SearchOutcome>> {
		match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
			Event::Mouse(mouse) => self.handle_mouse(mouse),
			Event::Resize(_, height) => {
				self.handle_resize(height);
				Ok(None)
			}
			Event::FocusGained => {
				self.focused = true;
				Ok(None)
			}
			Event::FocusLost => {
				self.focused = false;
				Ok(None)
			}
			_ => Ok(None),
		}
	}

	pub(crate) fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<Option<SearchOutcome>> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Ok(Some(SearchOutcome::cancelled(self.query())));
		}

		let has_query = !self.query().is_empty();
		match key.code {
			KeyCode::Esc if has_query => self.clear_query(),
			KeyCode::Esc => return Ok(Some(SearchOutcome::cancelled(""))),
			KeyCode::Enter => return self.submit(),
			KeyCode::Up if has_query => {
				self.selected = previous_index(self.selected, self.suggestions.len());
			}
			KeyCode::Down if has_query => {
				self.selected = next_index(self.selected, self.suggestions.len());
			}
			KeyCode::Up | KeyCode::Down => {}
			_ => {
				if self.search_input.input(key) {
					self.on_query_changed(now);
				}
			}
		}
		Ok(None)
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Option<SearchOutcome>> {
		let MouseEvent { kind, column, row, .. } = mouse;
		match kind {
			MouseEventKind::Moved => {
				if let Some(index) = self.hit_areas.suggestion_at(column, row) {
					self.selected = self.valid_index(index);
				}
			}
			MouseEventKind::Down(MouseButton::Left) => {
				if contains(self.hit_areas.button, column, row) {
					return self.submit();
				}
				if let Some(index) = self.hit_areas.suggestion_at(column, row) {
					self.focused = true;
					self.selected = self.valid_index(index);
					if self.selected.is_some() {
						return self.navigate_to_selection();
					}
					return Ok(None);
				}
				self.focused = contains(self.hit_areas.input, column, row);
			}
			_ => {}
		}
		Ok(None)
	}

	/// Navigate like pressing Enter. An empty query does nothing.
	pub(crate) fn submit(&mut self) -> Result<Option<SearchOutcome>> {
		self.navigate_to_selection()
	}

	/// Clear the query text while keeping the loaded suggestions.
	fn clear_query(&mut self) {
		self.search_input.clear();
		self.search.clear_pending();
		if !self.search.is_in_flight() {
			self.load_status = LoadStatus::Loaded;
		}
	}

	fn valid_index(&self, index: Option<usize>) -> Option<usize> {
		index.filter(|index| *index < self.suggestions.len())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn down_wraps_from_last_to_none() {
		assert_eq!(next_index(None, 3), Some(0));
		assert_eq!(next_index(Some(1), 3), Some(2));
		assert_eq!(next_index(Some(2), 3), None);
		assert_eq!(next_index(None, 0), None);
	}

	#[test]
	fn up_wraps_from_none_to_last() {
		assert_eq!(previous_index(None, 3), Some(2));
		assert_eq!(previous_index(Some(2), 3), Some(1));
		assert_eq!(previous_index(Some(0), 3), None);
		assert_eq!(previous_index(None, 0), None);
	}
}
