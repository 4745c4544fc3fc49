use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use docsearch_api::{CancelToken, SearchBackend, search_all};
use log::debug;

use super::commands::{SearchCommand, SearchResult};

/// Launches the background search worker thread and returns its channels.
pub(crate) fn spawn(
	backend: Arc<dyn SearchBackend>,
) -> (Sender<SearchCommand>, Receiver<SearchResult>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();

	thread::spawn(move || worker_loop(&backend, command_rx, result_tx));

	(command_tx, result_rx)
}

fn worker_loop(
	backend: &Arc<dyn SearchBackend>,
	command_rx: Receiver<SearchCommand>,
	result_tx: Sender<SearchResult>,
) {
	while let Ok(command) = command_rx.recv() {
		match command {
			SearchCommand::Query { token, query } => {
				dispatch_batch(Arc::clone(backend), token, query, result_tx.clone());
			}
			SearchCommand::Shutdown => break,
		}
	}
}

/// Run a batch on its own thread so a slow batch never delays its successor.
fn dispatch_batch(
	backend: Arc<dyn SearchBackend>,
	token: CancelToken,
	query: String,
	result_tx: Sender<SearchResult>,
) {
	thread::spawn(move || {
		let outcome = search_all(backend.as_ref(), &query, &token);
		if token.is_cancelled() {
			debug!("dropping results of superseded batch {} ({query:?})", token.id());
			return;
		}
		let _ = result_tx.send(SearchResult {
			id: token.id(),
			query,
			outcome,
		});
	});
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::time::Duration;

	use docsearch_api::{ApiError, CancelSource, ResultGroup, Suggestion};

	use super::*;

	/// Blocks queries equal to `hold` until the gate channel yields.
	struct GatedBackend {
		hold: String,
		gate: Mutex<Receiver<()>>,
	}

	impl SearchBackend for GatedBackend {
		fn search(&self, group: ResultGroup, query: &str) -> Result<Vec<Suggestion>, ApiError> {
			if query == self.hold && group == ResultGroup::Objects {
				let _ = self.gate.lock().unwrap().recv();
			}
			Ok(vec![Suggestion::new("object", format!("{query}-{}", group.endpoint()))])
		}
	}

	fn gated(hold: &str) -> (Arc<dyn SearchBackend>, Sender<()>) {
		let (gate_tx, gate_rx) = mpsc::channel();
		let backend = GatedBackend {
			hold: hold.to_string(),
			gate: Mutex::new(gate_rx),
		};
		(Arc::new(backend), gate_tx)
	}

	#[test]
	fn results_carry_their_batch_id() {
		let (backend, _gate) = gated("never");
		let (command_tx, result_rx) = spawn(backend);
		let mut source = CancelSource::new();
		let token = source.issue();
		let id = token.id();

		command_tx
			.send(SearchCommand::Query {
				token,
				query: "cycle".into(),
			})
			.unwrap();

		let result = result_rx.recv_timeout(Duration::from_secs(2)).unwrap();
		assert_eq!(result.id, id);
		assert_eq!(result.query, "cycle");
		let suggestions = result.outcome.unwrap();
		assert_eq!(suggestions.len(), 3);
		assert_eq!(suggestions[0].name, "cycle-objects");

		command_tx.send(SearchCommand::Shutdown).unwrap();
	}

	#[test]
	fn superseded_batch_is_never_reported() {
		let (backend, gate) = gated("slow");
		let (command_tx, result_rx) = spawn(backend);
		let mut source = CancelSource::new();

		command_tx
			.send(SearchCommand::Query {
				token: source.issue(),
				query: "slow".into(),
			})
			.unwrap();
		let fresh = source.issue();
		let fresh_id = fresh.id();
		command_tx
			.send(SearchCommand::Query {
				token: fresh,
				query: "fast".into(),
			})
			.unwrap();

		let result = result_rx.recv_timeout(Duration::from_secs(2)).unwrap();
		assert_eq!(result.id, fresh_id);
		assert_eq!(result.query, "fast");

		gate.send(()).unwrap();
		assert!(result_rx.recv_timeout(Duration::from_millis(300)).is_err());

		command_tx.send(SearchCommand::Shutdown).unwrap();
	}
}
