//! Background search dispatch.
//!
//! The worker receives batch requests from the UI thread and runs each batch
//! on its own thread. Batches whose cancellation token has been superseded
//! are dropped before they reach the UI.

mod commands;
mod worker;

pub(crate) use commands::{SearchCommand, SearchResult};
pub(crate) use worker::spawn;

use docsearch_api::{ApiError, CancelSource, SearchBackend, Suggestion, search_all};

/// Run a single batch synchronously, outside the interactive UI.
pub fn search_once(backend: &dyn SearchBackend, query: &str) -> Result<Vec<Suggestion>, ApiError> {
	let mut source = CancelSource::new();
	let token = source.issue();
	search_all(backend, query, &token)
}
