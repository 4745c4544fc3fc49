//! UI building blocks shared across rendering and state modules.

/// Search bar with prompt, spinner and submit button.
pub mod prompt;
/// Grouped suggestion dropdown.
pub mod suggestions;

pub use prompt::{InputContext, ProgressState, PromptAreas, SEARCH_BUTTON, render_input};
pub use suggestions::{
	ListRow, NO_RESULTS, RenderedList, SuggestionListContext, dropdown_height, layout_rows,
	render_suggestions,
};
