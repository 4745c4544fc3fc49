//! Generation-based cancellation for search batches.
//!
//! A [`CancelSource`] hands out one [`CancelToken`] per batch. Issuing a new
//! token advances the shared generation counter, which cancels every token
//! issued before it. Completions carrying a stale token are discarded.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ApiError;

/// Issues cancellation tokens for successive search batches.
#[derive(Debug, Default)]
pub struct CancelSource {
	latest: Arc<AtomicU64>,
	next_id: u64,
}

impl CancelSource {
	pub fn new() -> Self {
		Self::default()
	}

	/// Start a new generation, cancelling all previously issued tokens.
	pub fn issue(&mut self) -> CancelToken {
		let id = self.advance();
		CancelToken {
			id,
			latest: Arc::clone(&self.latest),
		}
	}

	/// Cancel every outstanding token without issuing a new one.
	pub fn cancel(&mut self) {
		self.advance();
	}

	/// Identifier of the current generation.
	#[must_use]
	pub fn current(&self) -> u64 {
		self.latest.load(Ordering::Acquire)
	}

	fn advance(&mut self) -> u64 {
		self.next_id = self.next_id.saturating_add(1);
		self.latest.store(self.next_id, Ordering::Release);
		self.next_id
	}
}

/// Handle carried by every request of a batch.
#[derive(Debug, Clone)]
pub struct CancelToken {
	id: u64,
	latest: Arc<AtomicU64>,
}

impl CancelToken {
	/// Generation this token belongs to.
	#[must_use]
	pub fn id(&self) -> u64 {
		self.id
	}

	#[must_use]
	pub fn is_cancelled(&self) -> bool {
		self.latest.load(Ordering::Acquire) != self.id
	}

	/// Return [`ApiError::Cancelled`] once a newer generation exists.
	pub fn check(&self) -> Result<(), ApiError> {
		if self.is_cancelled() {
			Err(ApiError::Cancelled)
		} else {
			Ok(())
		}
	}
}
