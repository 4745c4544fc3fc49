use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use log::{debug, warn};

use super::App;
use super::state::LoadStatus;
use crate::search::SearchResult;

impl<'a> App<'a> {
	/// React to an edit of the query text.
	///
	/// A non-empty query shows the loading state at once and restarts the
	/// debounce timer. An empty query settles immediately without searching.
	pub(crate) fn on_query_changed(&mut self, now: Instant) {
		self.selected = None;
		let query = self.query().to_string();
		if query.is_empty() {
			self.search.clear_pending();
			self.load_status = LoadStatus::Loaded;
		} else {
			self.load_status = LoadStatus::Loading;
			self.search.schedule(query, now);
		}
	}

	/// Fire the debounced search once typing has paused.
	pub(crate) fn tick(&mut self, now: Instant) {
		if let Some(query) = self.search.take_due(now) {
			self.show_results = true;
			self.request_search(query);
		}
	}

	/// Cancel the outstanding batch and search for `query`.
	pub(crate) fn request_search(&mut self, query: String) {
		debug!("searching for {query:?}");
		self.search.issue_search(query);
	}

	/// Drain any search results waiting on the receiver channel.
	pub(crate) fn pump_search_results(&mut self) {
		loop {
			match self.search.try_recv() {
				Ok(result) => self.handle_search_result(result),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	/// Apply a search result if it belongs to the most recent batch.
	fn handle_search_result(&mut self, result: SearchResult) {
		if !self.search.matches_latest(result.id) {
			debug!("ignoring stale results for {:?}", result.query);
			return;
		}
		self.search.record_completion();

		match result.outcome {
			Ok(suggestions) => {
				debug!("{} suggestions for {:?}", suggestions.len(), result.query);
				self.suggestions = suggestions;
				self.load_status = LoadStatus::Loaded;
				self.ensure_selection();
			}
			Err(err) if err.is_cancelled() => {
				debug!("search for {:?} was cancelled", result.query);
			}
			Err(err) => {
				warn!("error getting results from server: {err}");
			}
		}
	}
}
