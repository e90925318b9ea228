//! Error types.
//!
//! Validation failures are not errors: they are reported through
//! [`ValidationReport`](crate::ValidationReport) and shown inline. The types
//! here cover wiring problems, bad settings and transport failures.

/// Errors raised while binding or driving the contact form.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ContactFormError {
	#[error("Required element #{id} not found")]
	MissingElement { id: String },

	#[error("Element #{id} is not a {expected}")]
	UnexpectedElement { id: String, expected: &'static str },

	#[error("Element #{id} is not inside form #{form}")]
	OutsideForm { id: String, form: String },

	#[error("DOM operation failed: {0}")]
	Dom(String),

	#[error(transparent)]
	Settings(#[from] SettingsError),

	#[error("A submission is already in flight")]
	AlreadySubmitting,
}

/// Result alias used throughout the crate.
pub type ContactFormResult<T> = Result<T, ContactFormError>;

/// Invalid [`ContactFormSettings`](crate::ContactFormSettings).
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Invalid settings JSON: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Invalid value for '{key}': {message}")]
	InvalidValue { key: String, message: String },

	#[error("Element id '{0}' is used more than once")]
	DuplicateId(String),
}

/// Failure to obtain any HTTP response.
///
/// A response with a non-2xx status is not a transport error; it is a
/// rejection and is handled by the controller.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
	/// The request was sent but never completed (offline, DNS, CORS, reset).
	#[error("Network error: {0}")]
	Network(String),

	/// The request could not be built.
	#[error("Request error: {0}")]
	Request(String),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_missing_element_message() {
		let err = ContactFormError::MissingElement {
			id: "contact-form".to_string(),
		};
		assert_eq!(err.to_string(), "Required element #contact-form not found");
	}

	#[rstest]
	fn test_settings_error_is_transparent() {
		let err: ContactFormError = SettingsError::DuplicateId("name".to_string()).into();
		assert_eq!(err.to_string(), "Element id 'name' is used more than once");
	}

	#[rstest]
	fn test_json_error_converts() {
		let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		let err = SettingsError::from(json_err);
		assert!(err.to_string().starts_with("Invalid settings JSON"));
	}
}
