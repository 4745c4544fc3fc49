use docsearch_api::{ApiError, CancelToken, Suggestion};

/// Commands understood by the background search worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
	/// Run one batch of group searches for `query`.
	Query {
		/// Cancelled as soon as a newer batch is issued.
		token: CancelToken,
		query: String,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Merged answer of one batch, tagged with the batch generation.
#[derive(Debug)]
pub(crate) struct SearchResult {
	pub id: u64,
	pub query: String,
	pub outcome: Result<Vec<Suggestion>, ApiError>,
}
