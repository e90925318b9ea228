//! Network and timer seams.
//!
//! Both traits return boxed local futures: the controller runs on the single
//! browser thread and never needs `Send`.

use std::time::Duration;

use futures::future::LocalBoxFuture;

use crate::error::TransportError;
use crate::surface::FormData;

/// One submission as handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
	/// Target URL.
	pub action: String,
	/// Upper-case HTTP method.
	pub method: String,
	/// Request headers, `Accept` included.
	pub headers: Vec<(String, String)>,
	/// Form field data.
	pub fields: FormData,
}

impl SubmitRequest {
	/// Whether this method sends the fields in the URL instead of a body.
	pub fn fields_in_query(&self) -> bool {
		self.method == "GET"
	}

	/// Returns the value of header `name`, compared case-insensitively.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}

/// Whatever came back from the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
	pub status: u16,
	pub body: String,
}

impl TransportResponse {
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self {
			status,
			body: body.into(),
		}
	}

	/// `true` for any 2xx status.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Extracts the `error` string from a JSON body.
	///
	/// Bodies that are not JSON objects, or whose `error` is missing, empty or
	/// not a string, yield `None`.
	///
	/// # Examples
	///
	/// ```
	/// use contact_form_core::TransportResponse;
	///
	/// let response = TransportResponse::new(400, r#"{"error":"Duplicate"}"#);
	/// assert_eq!(response.error_message().as_deref(), Some("Duplicate"));
	///
	/// let response = TransportResponse::new(500, "<html>Internal Server Error</html>");
	/// assert_eq!(response.error_message(), None);
	/// ```
	pub fn error_message(&self) -> Option<String> {
		let body: serde_json::Value = match serde_json::from_str(&self.body) {
			Ok(body) => body,
			Err(_err) => {
				crate::debug_log!(
					"ignoring unparseable error body (status {}): {}",
					self.status,
					_err
				);
				return None;
			}
		};
		body.as_object()?
			.get("error")?
			.as_str()
			.filter(|message| !message.is_empty())
			.map(str::to_string)
	}
}

/// Sends one [`SubmitRequest`].
///
/// Implementations resolve with `Ok` for every HTTP response, whatever its
/// status, and with `Err` only when no response was obtained.
pub trait Transport {
	fn send(&self, request: SubmitRequest)
	-> LocalBoxFuture<'static, Result<TransportResponse, TransportError>>;
}

/// Delays used for the self-clearing success status.
pub trait Timer {
	fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()>;
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(200, true)]
	#[case(201, true)]
	#[case(204, true)]
	#[case(299, true)]
	#[case(199, false)]
	#[case(302, false)]
	#[case(400, false)]
	#[case(500, false)]
	fn test_is_success(#[case] status: u16, #[case] expected: bool) {
		assert_eq!(TransportResponse::new(status, "").is_success(), expected);
	}

	#[rstest]
	#[case(r#"{"error":"Duplicate"}"#, Some("Duplicate"))]
	#[case(r#"{"error":"Límite alcanzado","code":429}"#, Some("Límite alcanzado"))]
	#[case(r#"{"error":""}"#, None)]
	#[case(r#"{"error":null}"#, None)]
	#[case(r#"{"error":42}"#, None)]
	#[case(r#"{"detail":"nope"}"#, None)]
	#[case("null", None)]
	#[case("[]", None)]
	#[case(r#"["Duplicate"]"#, None)]
	#[case(r#"{"error":"Duplicate","error":"Ya recibido"}"#, Some("Ya recibido"))]
	#[case("", None)]
	#[case("Bad Gateway", None)]
	fn test_error_message(#[case] body: &str, #[case] expected: Option<&str>) {
		let response = TransportResponse::new(400, body);
		assert_eq!(response.error_message().as_deref(), expected);
	}

	#[rstest]
	fn test_request_header_lookup_is_case_insensitive() {
		let request = SubmitRequest {
			action: "/contact".to_string(),
			method: "POST".to_string(),
			headers: vec![("Accept".to_string(), "application/json".to_string())],
			fields: Vec::new(),
		};
		assert_eq!(request.header("accept"), Some("application/json"));
		assert_eq!(request.header("X-CSRFToken"), None);
		assert!(!request.fields_in_query());
	}

	#[rstest]
	#[case("GET", true)]
	#[case("POST", false)]
	#[case("DELETE", false)]
	fn test_only_get_sends_fields_in_query(#[case] method: &str, #[case] expected: bool) {
		let request = SubmitRequest {
			action: "/contact".to_string(),
			method: method.to_string(),
			headers: Vec::new(),
			fields: Vec::new(),
		};
		assert_eq!(request.fields_in_query(), expected);
	}
}
