//! Terminal autocomplete search over a documentation site.
//!
//! The root module re-exports the UI entry points together with the search
//! client types so that embedders can run the search bar against their own
//! [`SearchBackend`].

pub mod app_dirs;
pub mod logging;
mod outcome;
pub mod search;
pub mod ui;

pub use docsearch_api::{
	HttpBackend, Navigation, ResultGroup, SearchBackend, Suggestion, SuggestionKind,
};
pub use outcome::SearchOutcome;
pub use search::search_once;
pub use ui::style::Theme;
pub use ui::{App, UiConfig, run};
