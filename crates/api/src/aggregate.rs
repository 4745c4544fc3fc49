//! Merging of the per-group search responses into a single suggestion list.

use crate::types::Suggestion;

/// Maximum number of suggestions kept from each group.
pub const MAX_PER_GROUP: usize = 5;

/// One of the three searchable collections on the documentation site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultGroup {
	Objects,
	GenObjects,
	Docs,
}

impl ResultGroup {
	/// Groups in the order their results are presented.
	pub const ALL: [ResultGroup; 3] = [Self::Objects, Self::GenObjects, Self::Docs];

	/// Path segment of the group's search endpoint.
	#[must_use]
	pub const fn endpoint(self) -> &'static str {
		match self {
			Self::Objects => "objects",
			Self::GenObjects => "gen",
			Self::Docs => "docs",
		}
	}

	/// Header shown above the first suggestion of the group.
	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Objects => "Object",
			Self::GenObjects => "Gen Object",
			Self::Docs => "Documentation",
		}
	}
}

/// Truncate each group to [`MAX_PER_GROUP`], label its first entry and
/// concatenate the groups in [`ResultGroup::ALL`] order.
pub fn merge_groups(groups: [Vec<Suggestion>; 3]) -> Vec<Suggestion> {
	let total = groups
		.iter()
		.map(|group| group.len().min(MAX_PER_GROUP))
		.sum();
	let mut merged = Vec::with_capacity(total);
	for (group, results) in ResultGroup::ALL.into_iter().zip(groups) {
		let start = merged.len();
		merged.extend(results.into_iter().take(MAX_PER_GROUP));
		if let Some(first) = merged.get_mut(start) {
			first.label = Some(group.label().to_string());
		}
	}
	merged
}
