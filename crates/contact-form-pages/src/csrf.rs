//! CSRF token lookup for contact form submissions.
//!
//! When `csrf` is enabled in the settings, the fetch transport sends the token
//! found on the page in the `X-CSRFToken` header. Sources, in order:
//! 1. **Cookie**: `csrftoken`
//! 2. **Meta tag**: `<meta name="csrf-token" content="...">`

/// The cookie name holding the CSRF token.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// The meta tag name holding the CSRF token.
pub const CSRF_META_NAME: &str = "csrf-token";

/// The header name the token is sent in.
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// Retrieves the CSRF token from the page.
///
/// Returns `None` if neither source has a non-empty token.
#[cfg(target_arch = "wasm32")]
pub fn csrf_token() -> Option<String> {
	token_from_cookie().or_else(token_from_meta)
}

/// Retrieves the CSRF token (non-WASM stub).
#[cfg(not(target_arch = "wasm32"))]
pub fn csrf_token() -> Option<String> {
	None
}

/// Header to attach to a submission, if a token is available.
pub fn csrf_header() -> Option<(&'static str, String)> {
	csrf_token().map(|token| (CSRF_HEADER_NAME, token))
}

#[cfg(target_arch = "wasm32")]
fn token_from_cookie() -> Option<String> {
	use wasm_bindgen::JsCast;
	use web_sys::{HtmlDocument, window};

	let document = window()?.document()?;
	let html_doc = document.dyn_ref::<HtmlDocument>()?;
	let cookie_str = html_doc.cookie().ok()?;

	parse_cookie_value(&cookie_str, CSRF_COOKIE_NAME)
}

#[cfg(target_arch = "wasm32")]
fn token_from_meta() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let selector = format!("meta[name=\"{}\"]", CSRF_META_NAME);
	let meta = document.query_selector(&selector).ok()??;
	meta.get_attribute("content")
		.filter(|token| !token.trim().is_empty())
}

/// Parses a cookie value from a `document.cookie` string.
///
/// The format is `"name1=value1; name2=value2; ..."`. Empty values count as
/// absent.
pub fn parse_cookie_value(cookie_str: &str, name: &str) -> Option<String> {
	cookie_str
		.split(';')
		.filter_map(|part| part.split_once('='))
		.find(|(key, _)| key.trim() == name)
		.map(|(_, value)| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("sessionid=abc123; csrftoken=xyz789; other=value", Some("xyz789"))]
	#[case(" csrftoken = token123 ; other = value ", Some("token123"))]
	#[case("csrftoken=a=b", Some("a=b"))]
	#[case("csrftoken=", None)]
	#[case("xcsrftoken=nope", None)]
	#[case("", None)]
	fn test_parse_cookie_value(#[case] cookies: &str, #[case] expected: Option<&str>) {
		assert_eq!(
			parse_cookie_value(cookies, CSRF_COOKIE_NAME).as_deref(),
			expected
		);
	}

	#[rstest]
	fn test_no_header_off_browser() {
		assert_eq!(csrf_header(), None);
	}
}
