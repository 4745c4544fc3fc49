use thiserror::Error;

use crate::aggregate::ResultGroup;

/// Errors produced while querying the documentation search endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The configured base URL cannot carry path segments.
	#[error("'{0}' cannot be used as a base URL")]
	InvalidBaseUrl(String),

	/// The HTTP client could not be constructed.
	#[error("failed to build HTTP client: {0}")]
	Client(#[source] reqwest::Error),

	/// The request could not be sent or its body could not be read.
	#[error("{group:?} search request failed: {source}")]
	Request {
		group: ResultGroup,
		#[source]
		source: reqwest::Error,
	},

	/// The endpoint answered with a non-success status code.
	#[error("{group:?} search returned HTTP {status}")]
	Status {
		group: ResultGroup,
		status: reqwest::StatusCode,
	},

	/// The response body was not a valid search response.
	#[error("{group:?} search returned an unreadable body: {source}")]
	Decode {
		group: ResultGroup,
		#[source]
		source: reqwest::Error,
	},

	/// A newer batch superseded the request before it completed.
	#[error("search batch was cancelled")]
	Cancelled,
}

impl ApiError {
	/// Whether the error only reflects a superseded batch.
	#[must_use]
	pub fn is_cancelled(&self) -> bool {
		matches!(self, Self::Cancelled)
	}
}
