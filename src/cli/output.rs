use anyhow::Result;
use docsearch::{Navigation, SearchOutcome, Suggestion};
use docsearch_api::Url;
use serde::Serialize;

use super::OutputFormat;

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.url {
		Some(url) => println!("{url}"),
		None => println!("No selection"),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// A suggestion as printed by `--once --format json`: the wire fields plus
/// the page it links to.
#[derive(Serialize)]
struct LinkedSuggestion<'a> {
	#[serde(flatten)]
	suggestion: &'a Suggestion,
	url: &'a str,
}

/// Format one batch of suggestions together with the page each one links to.
pub(crate) fn format_suggestions(
	suggestions: &[Suggestion],
	query: &str,
	site: &Url,
	section: &str,
	format: OutputFormat,
) -> Result<String> {
	let mut entries = Vec::with_capacity(suggestions.len());
	for suggestion in suggestions {
		let url = Navigation::to_suggestion(suggestion, query).href(site, section)?;
		entries.push((suggestion, url));
	}

	match format {
		OutputFormat::Plain => {
			let mut out = String::new();
			for (suggestion, url) in entries {
				if let Some(label) = &suggestion.label {
					out.push_str(&format!("{}\n", label.to_uppercase()));
				}
				out.push_str(&format!(
					"  {:<4}{}\t{url}\n",
					suggestion.kind.tag(),
					suggestion.display_text()
				));
			}
			if out.is_empty() {
				out.push_str("No Results Found.\n");
			}
			Ok(out)
		}
		OutputFormat::Json => {
			let payload: Vec<_> = entries
				.iter()
				.map(|(suggestion, url)| LinkedSuggestion {
					suggestion,
					url: url.as_str(),
				})
				.collect();
			Ok(serde_json::to_string_pretty(&payload)?)
		}
	}
}

pub(crate) fn print_suggestions(
	suggestions: &[Suggestion],
	query: &str,
	site: &Url,
	section: &str,
	format: OutputFormat,
) -> Result<()> {
	let text = format_suggestions(suggestions, query, site, section, format)?;
	print!("{text}");
	if format == OutputFormat::Json {
		println!();
	}
	Ok(())
}
