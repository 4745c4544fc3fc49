use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use docsearch_api::CancelSource;

use crate::search::{SearchCommand, SearchResult};

/// A query waiting for typing to pause.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingQuery {
	query: String,
	deadline: Instant,
}

/// Trailing debounce in front of the search worker, plus the generation
/// bookkeeping that decides which worker results may still be applied.
pub(crate) struct SearchRuntime {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchResult>,
	cancel: CancelSource,
	debounce: Duration,
	pending: Option<PendingQuery>,
	current_batch: Option<u64>,
	in_flight: bool,
	issued: u64,
}

impl SearchRuntime {
	pub(crate) fn new(tx: Sender<SearchCommand>, rx: Receiver<SearchResult>, debounce: Duration) -> Self {
		Self {
			tx,
			rx,
			cancel: CancelSource::new(),
			debounce,
			pending: None,
			current_batch: None,
			in_flight: false,
			issued: 0,
		}
	}

	pub(crate) fn shutdown(&mut self) {
		self.cancel.cancel();
		let _ = self.tx.send(SearchCommand::Shutdown);
	}

	/// Restart the debounce timer for `query`.
	pub(crate) fn schedule(&mut self, query: String, now: Instant) {
		self.pending = Some(PendingQuery {
			query,
			deadline: now + self.debounce,
		});
	}

	/// Forget any query still waiting on the debounce timer.
	pub(crate) fn clear_pending(&mut self) {
		self.pending = None;
	}

	pub(crate) fn has_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Take the pending query once its deadline has passed.
	pub(crate) fn take_due(&mut self, now: Instant) -> Option<String> {
		let due = self
			.pending
			.as_ref()
			.is_some_and(|pending| pending.deadline <= now);
		if due {
			self.pending.take().map(|pending| pending.query)
		} else {
			None
		}
	}

	/// Cancel the outstanding batch and send a new one for `query`.
	pub(crate) fn issue_search(&mut self, query: String) {
		let token = self.cancel.issue();
		self.current_batch = Some(token.id());
		self.in_flight = true;
		self.issued = self.issued.saturating_add(1);
		let _ = self.tx.send(SearchCommand::Query { token, query });
	}

	pub(crate) fn matches_latest(&self, batch_id: u64) -> bool {
		Some(batch_id) == self.current_batch && self.cancel.current() == batch_id
	}

	pub(crate) fn record_completion(&mut self) {
		self.in_flight = false;
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	/// Number of batches sent to the worker so far.
	pub(crate) fn issued_batches(&self) -> u64 {
		self.issued
	}

	pub(crate) fn try_recv(&mut self) -> Result<SearchResult, TryRecvError> {
		self.rx.try_recv()
	}
}
