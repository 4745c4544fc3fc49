//! Blocking HTTP implementation of [`SearchBackend`].

use std::time::Duration;

use log::debug;
use reqwest::Url;
use reqwest::blocking::Client;

use crate::aggregate::ResultGroup;
use crate::backend::SearchBackend;
use crate::error::ApiError;
use crate::types::{SearchResponse, Suggestion};

/// Queries `<base>/api/<section>/<group>/search/<query>`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
	client: Client,
	base: Url,
	section: String,
}

impl HttpBackend {
	pub fn new(base: Url, section: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
		if base.cannot_be_a_base() {
			return Err(ApiError::InvalidBaseUrl(base.to_string()));
		}
		let client = Client::builder()
			.timeout(timeout)
			.user_agent(concat!("docsearch/", env!("CARGO_PKG_VERSION")))
			.build()
			.map_err(ApiError::Client)?;
		Ok(Self {
			client,
			base,
			section: section.into(),
		})
	}

	/// URL of the search endpoint of `group`, with `query` encoded as a single
	/// path segment.
	pub fn endpoint(&self, group: ResultGroup, query: &str) -> Result<Url, ApiError> {
		let mut url = self.base.clone();
		url.set_query(None);
		url.set_fragment(None);
		url.path_segments_mut()
			.map_err(|()| ApiError::InvalidBaseUrl(self.base.to_string()))?
			.pop_if_empty()
			.extend(["api", self.section.as_str(), group.endpoint(), "search", query]);
		Ok(url)
	}
}

impl SearchBackend for HttpBackend {
	fn search(&self, group: ResultGroup, query: &str) -> Result<Vec<Suggestion>, ApiError> {
		let url = self.endpoint(group, query)?;
		debug!("GET {url}");

		let response = self
			.client
			.get(url)
			.send()
			.map_err(|source| ApiError::Request { group, source })?;

		let status = response.status();
		if !status.is_success() {
			return Err(ApiError::Status { group, status });
		}

		let body: SearchResponse = response
			.json()
			.map_err(|source| ApiError::Decode { group, source })?;
		Ok(body.results)
	}
}

#[cfg(test)]
mod tests {
	use std::io::{BufRead, BufReader, Write};
	use std::net::TcpListener;
	use std::thread::{self, JoinHandle};

	use super::*;

	fn backend(base: &str) -> HttpBackend {
		HttpBackend::new(Url::parse(base).unwrap(), "max8", Duration::from_secs(1)).unwrap()
	}

	/// Answer a single request with `status` and `body`, returning the
	/// request line the server saw.
	fn serve_once(status: &'static str, body: &'static str) -> (HttpBackend, JoinHandle<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let addr = listener.local_addr().unwrap();
		let handle = thread::spawn(move || {
			let (stream, _) = listener.accept().unwrap();
			let mut reader = BufReader::new(stream);
			let mut request_line = String::new();
			reader.read_line(&mut request_line).unwrap();
			let mut header = String::new();
			while reader.read_line(&mut header).unwrap() > 0 && header != "\r\n" {
				header.clear();
			}
			let mut stream = reader.into_inner();
			write!(
				stream,
				"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len()
			)
			.unwrap();
			stream.flush().unwrap();
			request_line.trim_end().to_string()
		});
		(backend(&format!("http://{addr}")), handle)
	}

	#[test]
	fn successful_responses_decode_results() {
		let (backend, server) = serve_once(
			"200 OK",
			r#"{"results":[{"kind":"object","name":"cycle~","iconURL":"/i.svg"}]}"#,
		);
		let results = backend.search(ResultGroup::Objects, "cyc").unwrap();
		assert_eq!(server.join().unwrap(), "GET /api/max8/objects/search/cyc HTTP/1.1");
		assert_eq!(results.len(), 1);
		assert_eq!(results[0].name, "cycle~");
		assert_eq!(results[0].icon_url, "/i.svg");
	}

	#[test]
	fn error_statuses_are_reported_with_their_group() {
		let (backend, server) = serve_once("503 Service Unavailable", "");
		let error = backend.search(ResultGroup::Docs, "cyc").unwrap_err();
		server.join().unwrap();
		match error {
			ApiError::Status { group, status } => {
				assert_eq!(group, ResultGroup::Docs);
				assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE);
			}
			other => panic!("expected a status error, got {other:?}"),
		}
	}

	#[test]
	fn malformed_bodies_are_decode_errors() {
		let (backend, server) = serve_once("200 OK", r#"{"results":"#);
		let error = backend.search(ResultGroup::GenObjects, "cyc").unwrap_err();
		server.join().unwrap();
		assert!(
			matches!(error, ApiError::Decode { group: ResultGroup::GenObjects, .. }),
			"{error:?}"
		);
	}

	#[test]
	fn endpoints_follow_group_layout() {
		let backend = backend("https://docs.example.com");
		let url = backend.endpoint(ResultGroup::GenObjects, "cycle").unwrap();
		assert_eq!(url.as_str(), "https://docs.example.com/api/max8/gen/search/cycle");
	}

	#[test]
	fn query_is_a_single_encoded_segment() {
		let backend = backend("https://docs.example.com/");
		let url = backend.endpoint(ResultGroup::Docs, "a/b c?").unwrap();
		assert_eq!(url.as_str(), "https://docs.example.com/api/max8/docs/search/a%2Fb%20c%3F");
	}

	#[test]
	fn non_base_urls_are_rejected() {
		let url = Url::parse("mailto:docs@example.com").unwrap();
		let error = HttpBackend::new(url, "max8", Duration::from_secs(1)).unwrap_err();
		assert!(matches!(error, ApiError::InvalidBaseUrl(_)));
	}
}
