//! The search backend seam and the batch dispatcher built on top of it.

use std::panic;
use std::thread;

use crate::aggregate::{ResultGroup, merge_groups};
use crate::cancel::CancelToken;
use crate::error::ApiError;
use crate::types::Suggestion;

/// Something that can answer a search query for a single result group.
pub trait SearchBackend: Send + Sync {
	/// Return the raw, untruncated results of `group` for `query`.
	fn search(&self, group: ResultGroup, query: &str) -> Result<Vec<Suggestion>, ApiError>;
}

/// Query every [`ResultGroup`] concurrently and merge the answers.
///
/// Fails if any group fails or if `token` is cancelled before, during or after
/// the requests; a cancelled batch never yields suggestions.
pub fn search_all<B>(backend: &B, query: &str, token: &CancelToken) -> Result<Vec<Suggestion>, ApiError>
where
	B: SearchBackend + ?Sized,
{
	token.check()?;

	let [objects, gen_objects, docs] = thread::scope(|scope| {
		ResultGroup::ALL
			.map(|group| {
				scope.spawn(move || {
					token.check()?;
					backend.search(group, query)
				})
			})
			.map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
	});

	let groups = [objects?, gen_objects?, docs?];
	token.check()?;
	Ok(merge_groups(groups))
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use super::*;
	use crate::cancel::CancelSource;

	#[derive(Default)]
	struct RecordingBackend {
		calls: Mutex<Vec<(ResultGroup, String)>>,
		fail_group: Option<ResultGroup>,
	}

	impl SearchBackend for RecordingBackend {
		fn search(&self, group: ResultGroup, query: &str) -> Result<Vec<Suggestion>, ApiError> {
			self.calls.lock().unwrap().push((group, query.to_string()));
			if self.fail_group == Some(group) {
				return Err(ApiError::InvalidBaseUrl("offline".into()));
			}
			let kind = match group {
				ResultGroup::Objects => "object",
				ResultGroup::GenObjects => "genobject_common",
				ResultGroup::Docs => "vignette",
			};
			Ok((0..6)
				.map(|index| Suggestion::new(kind, format!("{query}{index}")))
				.collect())
		}
	}

	#[test]
	fn all_groups_are_queried_and_merged() {
		let backend = RecordingBackend::default();
		let mut source = CancelSource::new();
		let token = source.issue();

		let merged = search_all(&backend, "cyc", &token).unwrap();

		assert_eq!(merged.len(), 15);
		assert_eq!(merged[0].label.as_deref(), Some("Object"));
		assert_eq!(merged[5].label.as_deref(), Some("Gen Object"));
		assert_eq!(merged[10].label.as_deref(), Some("Documentation"));

		let mut calls = backend.calls.lock().unwrap().clone();
		calls.sort_by_key(|(group, _)| group.endpoint());
		assert_eq!(calls.len(), 3);
		assert!(calls.iter().all(|(_, query)| query == "cyc"));
	}

	#[test]
	fn one_failing_group_fails_the_batch() {
		let backend = RecordingBackend {
			fail_group: Some(ResultGroup::Docs),
			..RecordingBackend::default()
		};
		let mut source = CancelSource::new();
		let token = source.issue();
		assert!(search_all(&backend, "x", &token).is_err());
	}

	#[test]
	fn cancelled_token_issues_no_requests() {
		let backend = RecordingBackend::default();
		let mut source = CancelSource::new();
		let stale = source.issue();
		let _fresh = source.issue();

		let error = search_all(&backend, "x", &stale).unwrap_err();
		assert!(error.is_cancelled());
		assert!(backend.calls.lock().unwrap().is_empty());
	}
}
