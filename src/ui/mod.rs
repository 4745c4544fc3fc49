//! Interactive terminal UI for the documentation search bar.
//!
//! [`run`] drives the event loop. The remaining submodules hold the state
//! machine behind the search bar, the debounce in front of the search worker,
//! rendering, and the widgets and themes that draw it.

mod actions;
pub mod components;
mod config;
pub mod input;
mod render;
mod runtime;
mod search;
mod state;
pub mod style;

pub use config::{DEFAULT_DEBOUNCE, DEFAULT_SECTION, DEFAULT_SITE_URL, UiConfig};
pub use runtime::run;
pub use state::{App, LoadStatus};
