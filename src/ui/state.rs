mod app;
mod search_runtime;

pub use app::{App, LoadStatus};
pub(crate) use app::contains;
pub(crate) use search_runtime::SearchRuntime;
