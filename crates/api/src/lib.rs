//! Headless core of `docsearch`: the suggestion model, result aggregation,
//! route resolution, batch cancellation and the search backends.

pub mod aggregate;
pub mod backend;
pub mod cancel;
pub mod client;
pub mod error;
pub mod routing;
pub mod types;

pub use aggregate::{MAX_PER_GROUP, ResultGroup, merge_groups};
pub use backend::{SearchBackend, search_all};
pub use cancel::{CancelSource, CancelToken};
pub use client::HttpBackend;
pub use error::ApiError;
pub use reqwest::Url;
pub use routing::{Navigation, SEARCH_PAGE_PATH, suggestion_path};
pub use types::{GenDomain, SearchResponse, Suggestion, SuggestionKind};
