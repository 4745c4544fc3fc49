use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  API: {}", config.api_url);
	let _ = writeln!(out, "  Site: {}", config.ui.site_url);
	let _ = writeln!(out, "  Section: {}", config.ui.section);
	let _ = writeln!(out, "  Request timeout: {} ms", config.timeout.as_millis());
	let _ = writeln!(out, "  Debounce: {} ms", config.ui.debounce.as_millis());
	let _ = writeln!(out, "  UI theme: {}", config.theme_name);
	let _ = writeln!(out, "  Placeholder: {}", config.ui.placeholder);
	if !config.ui.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.ui.initial_query);
	}
	out
}
