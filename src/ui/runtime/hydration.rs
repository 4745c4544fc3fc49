use std::thread;
use std::time::{Duration, Instant};

use crate::ui::App;
use crate::ui::state::LoadStatus;

impl<'a> App<'a> {
	/// Search for a query supplied at startup without waiting for the debounce,
	/// giving the first batch a short head start before the first frame.
	pub(crate) fn hydrate_initial_results(&mut self, timeout: Duration) {
		let query = self.query().to_string();
		if query.is_empty() {
			return;
		}

		self.show_results = true;
		self.load_status = LoadStatus::Loading;
		self.request_search(query);

		let deadline = Instant::now() + timeout;
		while Instant::now() < deadline {
			self.pump_search_results();
			if !self.search.is_in_flight() {
				break;
			}
			thread::sleep(Duration::from_millis(10));
		}
	}
}
