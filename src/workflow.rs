use std::sync::Arc;

use anyhow::{Context, Result, ensure};
use docsearch::{HttpBackend, SearchBackend, SearchOutcome, Suggestion, UiConfig, search_once};

use crate::settings::ResolvedConfig;

/// Connects the resolved configuration to a search backend and runs either
/// the interactive search bar or a single batch.
pub(crate) struct SearchWorkflow {
	backend: Arc<dyn SearchBackend>,
	ui: UiConfig,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			api_url,
			timeout,
			ui,
			..
		} = config;
		let backend = HttpBackend::new(api_url, ui.section.clone(), timeout)
			.context("failed to set up the search client")?;
		Ok(Self {
			backend: Arc::new(backend),
			ui,
		})
	}

	pub(crate) fn ui(&self) -> &UiConfig {
		&self.ui
	}

	/// Run the interactive search bar until the user navigates or quits.
	pub(crate) fn run(self) -> Result<SearchOutcome> {
		log::info!("starting search against section {}", self.ui.section);
		docsearch::run(self.ui, self.backend)
	}

	/// Search for the initial query once, without a terminal UI.
	pub(crate) fn once(&self) -> Result<Vec<Suggestion>> {
		let query = &self.ui.initial_query;
		ensure!(!query.is_empty(), "a non-empty query is needed to search once");
		search_once(self.backend.as_ref(), query)
			.with_context(|| format!("search for '{query}' failed"))
	}
}
