//! `fetch`-backed [`Transport`](contact_form_core::Transport).
//!
//! Field data goes in a `FormData` body, or in the query string for `GET`.
//! The browser picks the multipart boundary, so no `Content-Type` is
//! set here.

use contact_form_core::{FormData, TransportError};

/// URL a submission is sent to.
///
/// Body-carrying methods use `action` unchanged. For query methods the fields
/// are url-encoded and appended, after any query `action` already has.
///
/// # Examples
///
/// ```
/// use contact_form_pages::fetch::request_url;
///
/// let fields = vec![("name".to_string(), "Jo Doe".to_string())];
/// assert_eq!(request_url("/contact", &fields, true).unwrap(), "/contact?name=Jo+Doe");
/// assert_eq!(request_url("/contact?src=ad", &fields, true).unwrap(), "/contact?src=ad&name=Jo+Doe");
/// assert_eq!(request_url("/contact", &fields, false).unwrap(), "/contact");
/// ```
pub fn request_url(
	action: &str,
	fields: &FormData,
	fields_in_query: bool,
) -> Result<String, TransportError> {
	if !fields_in_query || fields.is_empty() {
		return Ok(action.to_string());
	}

	let query = serde_urlencoded::to_string(fields)
		.map_err(|err| TransportError::Request(err.to_string()))?;
	let (base, fragment) = match action.split_once('#') {
		Some((base, fragment)) => (base, Some(fragment)),
		None => (action, None),
	};
	let separator = if !base.contains('?') {
		"?"
	} else if base.ends_with(['?', '&']) {
		""
	} else {
		"&"
	};

	let mut url = format!("{base}{separator}{query}");
	if let Some(fragment) = fragment {
		url.push('#');
		url.push_str(fragment);
	}
	Ok(url)
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::FetchTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
	use contact_form_core::{
		SubmitRequest, Transport, TransportError, TransportResponse, debug_log,
	};
	use futures::future::{FutureExt, LocalBoxFuture};
	use gloo_net::http::{Method, RequestBuilder};
	use web_sys::AbortController;

	use super::request_url;
	use crate::csrf::csrf_header;
	use crate::js_error_message;

	/// Sends submissions with the browser's `fetch`.
	///
	/// Dropping the send future (a cancelled [`SubmitTask`]) aborts the
	/// request.
	///
	/// [`SubmitTask`]: contact_form_core::SubmitTask
	#[derive(Debug, Clone, Default)]
	pub struct FetchTransport {
		csrf: bool,
	}

	impl FetchTransport {
		pub fn new() -> Self {
			Self::default()
		}

		/// Attach `X-CSRFToken` when the page carries a token.
		pub fn with_csrf(mut self, enabled: bool) -> Self {
			self.csrf = enabled;
			self
		}
	}

	impl Transport for FetchTransport {
		fn send(
			&self,
			request: SubmitRequest,
		) -> LocalBoxFuture<'static, Result<TransportResponse, TransportError>> {
			let csrf = self.csrf;
			async move {
				let abort = AbortOnDrop::new()?;
				let method = Method::from_bytes(request.method.as_bytes())
					.map_err(|err| TransportError::Request(err.to_string()))?;
				let in_query = request.fields_in_query();
				let url = request_url(&request.action, &request.fields, in_query)?;

				let mut builder = RequestBuilder::new(&url)
					.method(method)
					.abort_signal(Some(&abort.0.signal()));
				for (name, value) in &request.headers {
					builder = builder.header(name, value);
				}
				if csrf && let Some((name, token)) = csrf_header() {
					builder = builder.header(name, &token);
				}

				let prepared = if in_query {
					builder.build()
				} else {
					builder.body(form_body(&request)?)
				}
				.map_err(|err| TransportError::Request(err.to_string()))?;

				let response = prepared
					.send()
					.await
					.map_err(|err| TransportError::Network(err.to_string()))?;
				let status = response.status();
				let body = response.text().await.unwrap_or_else(|_err| {
					debug_log!("could not read response body (status {}): {}", status, _err);
					String::new()
				});

				Ok(TransportResponse::new(status, body))
			}
			.boxed_local()
		}
	}

	fn form_body(request: &SubmitRequest) -> Result<web_sys::FormData, TransportError> {
		let data = web_sys::FormData::new()
			.map_err(|err| TransportError::Request(js_error_message(&err)))?;
		for (name, value) in &request.fields {
			data.append_with_str(name, value)
				.map_err(|err| TransportError::Request(js_error_message(&err)))?;
		}
		Ok(data)
	}

	/// Aborts the underlying fetch when the send future is dropped early.
	struct AbortOnDrop(AbortController);

	impl AbortOnDrop {
		fn new() -> Result<Self, TransportError> {
			AbortController::new()
				.map(Self)
				.map_err(|err| TransportError::Request(js_error_message(&err)))
		}
	}

	impl Drop for AbortOnDrop {
		fn drop(&mut self) {
			// No-op once the response body has been read.
			self.0.abort();
		}
	}
}
