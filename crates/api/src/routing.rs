//! Resolution of suggestions to documentation page routes.

use reqwest::Url;
use serde::Serialize;

use crate::error::ApiError;
use crate::types::{Suggestion, SuggestionKind};

/// Path of the generic object search results page.
pub const SEARCH_PAGE_PATH: &str = "/search/objects/";

/// Compute the page path for a suggestion, relative to the site section.
pub fn suggestion_path(suggestion: &Suggestion) -> String {
	let name = &suggestion.name;
	match &suggestion.kind {
		SuggestionKind::Object => format!("/refpages/{name}"),
		SuggestionKind::GenObject(domain) => {
			format!("/refpages/{}_{name}", domain.page_prefix())
		}
		SuggestionKind::Tutorial => format!("/tutorials/{name}"),
		SuggestionKind::Vignette | SuggestionKind::Other(_) => format!("/vignettes/{name}"),
	}
}

/// A navigation request: a page path plus the text the user searched for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
	pub path: String,
	/// Carried to the target page as the `q` query parameter.
	pub query: String,
}

impl Navigation {
	/// Navigate to the detail page of `suggestion`.
	pub fn to_suggestion(suggestion: &Suggestion, query: impl Into<String>) -> Self {
		Self {
			path: suggestion_path(suggestion),
			query: query.into(),
		}
	}

	/// Navigate to the generic search page with the raw query.
	pub fn search_page(query: impl Into<String>) -> Self {
		Self {
			path: SEARCH_PAGE_PATH.to_string(),
			query: query.into(),
		}
	}

	/// Build the absolute URL of the target page under `site`/`section`.
	pub fn href(&self, site: &Url, section: &str) -> Result<Url, ApiError> {
		let mut url = site.clone();
		url.set_query(None);
		url.set_fragment(None);
		{
			let mut segments = url
				.path_segments_mut()
				.map_err(|()| ApiError::InvalidBaseUrl(site.to_string()))?;
			segments.pop_if_empty().push(section);
			segments.extend(self.path.trim_start_matches('/').split('/'));
		}
		url.query_pairs_mut().append_pair("q", &self.query);
		Ok(url)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn site() -> Url {
		Url::parse("https://docs.example.com").unwrap()
	}

	#[test]
	fn objects_route_to_refpages() {
		let suggestion = Suggestion::new("object", "cycle~");
		assert_eq!(suggestion_path(&suggestion), "/refpages/cycle~");
	}

	#[test]
	fn gen_objects_carry_their_domain_prefix() {
		let cases = [
			("genobject_common", "/refpages/gen_common_foo"),
			("genobject_dsp", "/refpages/gen_dsp_foo"),
			("genobject_jit", "/refpages/gen_jit_foo"),
			("genobject_other", "/refpages/gen_jit_foo"),
			("genobject_gl", "/refpages/gen_jit_foo"),
			("genobject", "/refpages/gen_jit_foo"),
		];
		for (kind, expected) in cases {
			assert_eq!(suggestion_path(&Suggestion::new(kind, "foo")), expected, "{kind}");
		}
	}

	#[test]
	fn documents_route_by_kind() {
		assert_eq!(
			suggestion_path(&Suggestion::new("tutorial", "basics")),
			"/tutorials/basics"
		);
		assert_eq!(suggestion_path(&Suggestion::new("vignette", "mc")), "/vignettes/mc");
		assert_eq!(suggestion_path(&Suggestion::new("guide", "x")), "/vignettes/x");
	}

	#[test]
	fn search_page_href_keeps_trailing_slash() {
		let href = Navigation::search_page("cycle").href(&site(), "max8").unwrap();
		assert_eq!(href.as_str(), "https://docs.example.com/max8/search/objects/?q=cycle");
	}

	#[test]
	fn suggestion_href_encodes_query() {
		let suggestion = Suggestion::new("genobject_dsp", "foo");
		let href = Navigation::to_suggestion(&suggestion, "foo bar&baz")
			.href(&site(), "max8")
			.unwrap();
		assert_eq!(
			href.as_str(),
			"https://docs.example.com/max8/refpages/gen_dsp_foo?q=foo+bar%26baz"
		);
	}

	#[test]
	fn href_respects_site_subpath() {
		let site = Url::parse("https://example.com/docs/").unwrap();
		let href = Navigation::search_page("a").href(&site, "max8").unwrap();
		assert_eq!(href.as_str(), "https://example.com/docs/max8/search/objects/?q=a");
	}
}
