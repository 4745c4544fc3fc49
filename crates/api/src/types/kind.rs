use std::fmt;

use serde::{Deserialize, Serialize};

/// Code-generation domain of a gen object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenDomain {
	Common,
	Dsp,
	Jit,
	/// Unrecognised sub-kind, holding the full kind string. Routed as jit.
	Other(String),
}

impl GenDomain {
	/// Prefix used when building the reference page slug for this domain.
	#[must_use]
	pub fn page_prefix(&self) -> &'static str {
		match self {
			Self::Common => "gen_common",
			Self::Dsp => "gen_dsp",
			Self::Jit | Self::Other(_) => "gen_jit",
		}
	}
}

/// The kind of documentation entity a suggestion points at.
///
/// Kinds arrive as plain strings from the search endpoints. Anything starting
/// with `genobject` is a gen object; gen sub-kinds other than `common` and
/// `dsp` belong to the jit domain. Unknown kinds and unknown gen sub-kinds
/// keep their wire string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SuggestionKind {
	Object,
	GenObject(GenDomain),
	Tutorial,
	Vignette,
	Other(String),
}

impl SuggestionKind {
	/// Whether the suggestion is displayed by its title rather than its name.
	#[must_use]
	pub fn is_document(&self) -> bool {
		matches!(self, Self::Tutorial | Self::Vignette)
	}

	/// Short tag shown in place of the kind icon.
	#[must_use]
	pub fn tag(&self) -> &'static str {
		match self {
			Self::Object => "obj",
			Self::GenObject(_) => "gen",
			Self::Tutorial => "tut",
			Self::Vignette | Self::Other(_) => "doc",
		}
	}

	/// Wire representation of the kind.
	#[must_use]
	pub fn as_str(&self) -> &str {
		match self {
			Self::Object => "object",
			Self::GenObject(GenDomain::Common) => "genobject_common",
			Self::GenObject(GenDomain::Dsp) => "genobject_dsp",
			Self::GenObject(GenDomain::Jit) => "genobject_jit",
			Self::GenObject(GenDomain::Other(raw)) => raw,
			Self::Tutorial => "tutorial",
			Self::Vignette => "vignette",
			Self::Other(raw) => raw,
		}
	}
}

impl From<&str> for SuggestionKind {
	fn from(raw: &str) -> Self {
		match raw {
			"object" => Self::Object,
			"tutorial" => Self::Tutorial,
			"vignette" => Self::Vignette,
			"genobject_common" => Self::GenObject(GenDomain::Common),
			"genobject_dsp" => Self::GenObject(GenDomain::Dsp),
			"genobject_jit" => Self::GenObject(GenDomain::Jit),
			other if other.starts_with("genobject") => {
				Self::GenObject(GenDomain::Other(other.to_string()))
			}
			other => Self::Other(other.to_string()),
		}
	}
}

impl From<String> for SuggestionKind {
	fn from(raw: String) -> Self {
		Self::from(raw.as_str())
	}
}

impl From<SuggestionKind> for String {
	fn from(kind: SuggestionKind) -> Self {
		match kind {
			SuggestionKind::Other(raw) | SuggestionKind::GenObject(GenDomain::Other(raw)) => raw,
			known => known.as_str().to_string(),
		}
	}
}

impl fmt::Display for SuggestionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_kinds_parse() {
		assert_eq!(SuggestionKind::from("object"), SuggestionKind::Object);
		assert_eq!(SuggestionKind::from("tutorial"), SuggestionKind::Tutorial);
		assert_eq!(SuggestionKind::from("vignette"), SuggestionKind::Vignette);
		assert_eq!(
			SuggestionKind::from("genobject_dsp"),
			SuggestionKind::GenObject(GenDomain::Dsp)
		);
		assert_eq!(
			SuggestionKind::from("genobject_common"),
			SuggestionKind::GenObject(GenDomain::Common)
		);
	}

	#[test]
	fn unknown_gen_subkinds_route_as_jit() {
		assert_eq!(
			SuggestionKind::from("genobject_jit"),
			SuggestionKind::GenObject(GenDomain::Jit)
		);
		let kind = SuggestionKind::from("genobject_gl");
		assert_eq!(kind, SuggestionKind::GenObject(GenDomain::Other("genobject_gl".into())));
		match &kind {
			SuggestionKind::GenObject(domain) => assert_eq!(domain.page_prefix(), "gen_jit"),
			other => panic!("expected a gen object, got {other:?}"),
		}
		assert_eq!(kind.tag(), "gen");
	}

	#[test]
	fn unknown_gen_subkinds_keep_their_wire_string() {
		let kind: SuggestionKind = serde_json::from_str(r#""genobject_gl""#).unwrap();
		assert_eq!(serde_json::to_string(&kind).unwrap(), r#""genobject_gl""#);
		assert_eq!(kind.to_string(), "genobject_gl");

		let bare = SuggestionKind::from("genobject");
		assert_eq!(String::from(bare), "genobject");
	}

	#[test]
	fn unknown_kinds_are_preserved() {
		let kind = SuggestionKind::from("guide");
		assert_eq!(kind, SuggestionKind::Other("guide".into()));
		assert_eq!(String::from(kind), "guide");
	}
}
