//! Core state container for the search bar and its suggestion dropdown.

use std::sync::Arc;

use anyhow::Result;
use docsearch_api::{Navigation, SearchBackend, Suggestion};
use ratatui::layout::Rect;
use throbber_widgets_tui::ThrobberState;

use super::SearchRuntime;
use crate::outcome::SearchOutcome;
use crate::search;
use crate::ui::components::ListRow;
use crate::ui::config::UiConfig;
use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.search.shutdown();
	}
}

/// Whether the dropdown is waiting for a search batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
	#[default]
	Loaded,
	Loading,
}

/// Screen regions recorded by the last draw, used for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitAreas {
	pub input: Rect,
	pub button: Rect,
	/// Inner area of the suggestion list; empty when no list is shown.
	pub list: Rect,
	/// Rows drawn in `list`, top to bottom.
	pub rows: Vec<ListRow>,
	/// Scroll position of the list in the last frame.
	pub offset: usize,
}

impl HitAreas {
	/// Resolve a position inside the list to a suggestion index.
	///
	/// Returns `None` when the position is outside the list and `Some(None)`
	/// for rows that do not carry an index, such as group headers.
	pub(crate) fn suggestion_at(&self, column: u16, row: u16) -> Option<Option<usize>> {
		if !contains(self.list, column, row) {
			return None;
		}
		let offset = usize::from(row - self.list.y);
		Some(self.rows.get(offset).and_then(|row| row.index()))
	}
}

pub(crate) fn contains(area: Rect, column: u16, row: u16) -> bool {
	column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// State of the interactive search bar.
///
/// Mirrors what the user sees: the query text, the suggestions of the most
/// recent batch, the highlighted row, and whether the dropdown may be shown.
pub struct App<'a> {
	pub search_input: SearchInput<'a>,
	pub suggestions: Vec<Suggestion>,
	pub show_results: bool,
	/// Highlighted suggestion; always `None` or a valid index into `suggestions`.
	pub selected: Option<usize>,
	pub load_status: LoadStatus,
	/// Cleared when the terminal loses focus; the dropdown is hidden meanwhile.
	pub focused: bool,
	/// Height limit of the dropdown in rows.
	pub max_height: u16,
	pub theme: Theme,
	pub(crate) config: UiConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) hit_areas: HitAreas,
	pub(in crate::ui) search: SearchRuntime,
}

impl<'a> App<'a> {
	/// Construct an [`App`] that sends its searches to `backend`.
	pub fn new(config: UiConfig, backend: Arc<dyn SearchBackend>) -> Self {
		let (search_tx, search_rx) = search::spawn(backend);
		let search = SearchRuntime::new(search_tx, search_rx, config.debounce);
		Self {
			search_input: SearchInput::new(config.initial_query.clone()),
			suggestions: Vec::new(),
			show_results: false,
			selected: None,
			load_status: LoadStatus::Loaded,
			focused: true,
			max_height: u16::MAX,
			theme: config.theme,
			config,
			throbber_state: ThrobberState::default(),
			hit_areas: HitAreas::default(),
			search,
		}
	}

	/// Current query text.
	pub fn query(&self) -> &str {
		self.search_input.text()
	}

	/// Whether the dropdown is currently visible.
	pub fn dropdown_visible(&self) -> bool {
		self.show_results && !self.query().is_empty() && self.focused
	}

	pub fn selected_suggestion(&self) -> Option<&Suggestion> {
		self.selected.and_then(|index| self.suggestions.get(index))
	}

	/// Size the dropdown to two thirds of the terminal height.
	pub(crate) fn handle_resize(&mut self, height: u16) {
		self.max_height = height - height / 3;
	}

	/// Drop a selection that no longer points into the suggestion list.
	pub(crate) fn ensure_selection(&mut self) {
		if self.selected.is_some_and(|index| index >= self.suggestions.len()) {
			self.selected = None;
		}
	}

	/// Navigate to the generic search page, or to the selected suggestion.
	///
	/// Does nothing for an empty query or a selection outside the list.
	pub(crate) fn navigate_to_selection(&self) -> Result<Option<SearchOutcome>> {
		let query = self.query().to_string();
		if query.is_empty() {
			return Ok(None);
		}
		match self.selected {
			None => self.finish(Navigation::search_page(query), None).map(Some),
			Some(index) => match self.suggestions.get(index).cloned() {
				Some(suggestion) => {
					let navigation = Navigation::to_suggestion(&suggestion, query);
					self.finish(navigation, Some(suggestion)).map(Some)
				}
				None => Ok(None),
			},
		}
	}

	fn finish(&self, navigation: Navigation, selection: Option<Suggestion>) -> Result<SearchOutcome> {
		let url = navigation.href(&self.config.site_url, &self.config.section)?;
		log::info!("navigating to {url}");
		Ok(SearchOutcome {
			accepted: true,
			query: navigation.query.clone(),
			navigation: Some(navigation),
			url: Some(url.to_string()),
			selection,
		})
	}
}
