mod kind;
mod suggestion;

pub use kind::{GenDomain, SuggestionKind};
pub use suggestion::{SearchResponse, Suggestion};
