//! Contact form settings.
//!
//! Settings are plain serde data with a default for every key, so a page can
//! override only what it needs:
//!
//! ```json
//! {
//!     "elements": { "form": "support-form" },
//!     "messages": { "sent": "¡Gracias! Te responderemos pronto." },
//!     "success_clear_delay_ms": 8000
//! }
//! ```

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::field::ContactField;
use crate::messages::Messages;

/// HTTP methods a contact form may submit with.
pub const ALLOWED_METHODS: [&str; 5] = ["GET", "POST", "PUT", "PATCH", "DELETE"];

/// Ids of the elements the controller binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementIds {
	pub form: String,
	pub submit: String,
	pub name: String,
	pub email: String,
	pub phone: String,
	pub subject: String,
	pub message: String,
}

impl Default for ElementIds {
	fn default() -> Self {
		Self {
			form: "contact-form".to_string(),
			submit: "submit".to_string(),
			name: ContactField::Name.as_str().to_string(),
			email: ContactField::Email.as_str().to_string(),
			phone: ContactField::Phone.as_str().to_string(),
			subject: ContactField::Subject.as_str().to_string(),
			message: ContactField::Message.as_str().to_string(),
		}
	}
}

impl ElementIds {
	/// Id of the element backing `field`.
	pub fn field(&self, field: ContactField) -> &str {
		match field {
			ContactField::Name => &self.name,
			ContactField::Email => &self.email,
			ContactField::Phone => &self.phone,
			ContactField::Subject => &self.subject,
			ContactField::Message => &self.message,
		}
	}

	fn entries(&self) -> [(&'static str, &str); 7] {
		[
			("elements.form", &self.form),
			("elements.submit", &self.submit),
			("elements.name", &self.name),
			("elements.email", &self.email),
			("elements.phone", &self.phone),
			("elements.subject", &self.subject),
			("elements.message", &self.message),
		]
	}
}

/// Everything the controller can be configured with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactFormSettings {
	/// Element ids to bind.
	pub elements: ElementIds,
	/// Hint and status texts.
	pub messages: Messages,
	/// Method used when the form has no usable `method` attribute.
	pub default_method: String,
	/// Value of the `Accept` request header.
	pub accept: String,
	/// How long the success status stays visible, in milliseconds.
	pub success_clear_delay_ms: u64,
	/// Send an `X-CSRFToken` header when a token is available on the page.
	pub csrf: bool,
}

impl Default for ContactFormSettings {
	fn default() -> Self {
		Self {
			elements: ElementIds::default(),
			messages: Messages::default(),
			default_method: "POST".to_string(),
			accept: "application/json".to_string(),
			success_clear_delay_ms: 5_000,
			csrf: false,
		}
	}
}

impl ContactFormSettings {
	/// Parses and validates settings from JSON.
	///
	/// # Examples
	///
	/// ```
	/// use contact_form_core::ContactFormSettings;
	///
	/// let settings = ContactFormSettings::from_json(r#"{"success_clear_delay_ms": 8000}"#).unwrap();
	/// assert_eq!(settings.success_clear_delay_ms, 8000);
	/// assert_eq!(settings.elements.form, "contact-form");
	///
	/// assert!(ContactFormSettings::from_json(r#"{"default_method": "BREW"}"#).is_err());
	/// ```
	pub fn from_json(json: &str) -> Result<Self, SettingsError> {
		let settings: Self = serde_json::from_str(json)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Checks ids are non-empty and distinct and the default method is allowed.
	pub fn validate(&self) -> Result<(), SettingsError> {
		let mut seen = HashSet::new();
		for (key, id) in self.elements.entries() {
			if id.trim().is_empty() {
				return Err(SettingsError::InvalidValue {
					key: key.to_string(),
					message: "element id must not be empty".to_string(),
				});
			}
			if !seen.insert(id) {
				return Err(SettingsError::DuplicateId(id.to_string()));
			}
		}

		if normalize_method(&self.default_method).is_none() {
			return Err(SettingsError::InvalidValue {
				key: "default_method".to_string(),
				message: format!(
					"'{}' is not one of {}",
					self.default_method,
					ALLOWED_METHODS.join(", ")
				),
			});
		}

		if self.accept.trim().is_empty() {
			return Err(SettingsError::InvalidValue {
				key: "accept".to_string(),
				message: "accept header must not be empty".to_string(),
			});
		}

		Ok(())
	}

	/// Delay before a success status is cleared.
	pub fn success_clear_delay(&self) -> Duration {
		Duration::from_millis(self.success_clear_delay_ms)
	}

	/// Picks the request method from the form's `method` attribute.
	///
	/// Missing, empty or unsupported attributes fall back to
	/// [`default_method`](Self::default_method).
	///
	/// # Examples
	///
	/// ```
	/// use contact_form_core::ContactFormSettings;
	///
	/// let settings = ContactFormSettings::default();
	/// assert_eq!(settings.resolve_method(None), "POST");
	/// assert_eq!(settings.resolve_method(Some("put")), "PUT");
	/// assert_eq!(settings.resolve_method(Some("dialog")), "POST");
	/// ```
	pub fn resolve_method(&self, attribute: Option<&str>) -> String {
		attribute
			.and_then(normalize_method)
			.or_else(|| normalize_method(&self.default_method))
			.unwrap_or_else(|| "POST".to_string())
	}
}

fn normalize_method(method: &str) -> Option<String> {
	let upper = method.trim().to_ascii_uppercase();
	ALLOWED_METHODS.contains(&upper.as_str()).then_some(upper)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults_match_markup_contract() {
		let settings = ContactFormSettings::default();
		assert_eq!(settings.elements.form, "contact-form");
		assert_eq!(settings.elements.submit, "submit");
		for field in ContactField::ALL {
			assert_eq!(settings.elements.field(field), field.as_str());
		}
		assert_eq!(settings.success_clear_delay(), Duration::from_secs(5));
		assert_eq!(settings.accept, "application/json");
		assert!(settings.validate().is_ok());
	}

	#[rstest]
	fn test_empty_json_yields_defaults() {
		let settings = ContactFormSettings::from_json("{}").unwrap();
		assert_eq!(settings, ContactFormSettings::default());
	}

	#[rstest]
	fn test_nested_partial_override() {
		let settings = ContactFormSettings::from_json(
			r#"{"elements": {"form": "support"}, "messages": {"sending_label": "Sending..."}}"#,
		)
		.unwrap();
		assert_eq!(settings.elements.form, "support");
		assert_eq!(settings.elements.email, "email");
		assert_eq!(settings.messages.sending_label, "Sending...");
	}

	#[rstest]
	fn test_duplicate_ids_rejected() {
		let err = ContactFormSettings::from_json(r#"{"elements": {"phone": "email"}}"#).unwrap_err();
		assert!(matches!(err, SettingsError::DuplicateId(id) if id == "email"));
	}

	#[rstest]
	fn test_blank_id_rejected() {
		let err = ContactFormSettings::from_json(r#"{"elements": {"submit": "  "}}"#).unwrap_err();
		assert!(matches!(
			err,
			SettingsError::InvalidValue { ref key, .. } if key == "elements.submit"
		));
	}

	#[rstest]
	#[case("post", true)]
	#[case("GET", true)]
	#[case("Patch", true)]
	#[case("TRACE", false)]
	#[case("", false)]
	fn test_default_method_validation(#[case] method: &str, #[case] ok: bool) {
		let settings = ContactFormSettings {
			default_method: method.to_string(),
			..ContactFormSettings::default()
		};
		assert_eq!(settings.validate().is_ok(), ok);
	}

	#[rstest]
	#[case(None, "POST")]
	#[case(Some(""), "POST")]
	#[case(Some("get"), "GET")]
	#[case(Some(" delete "), "DELETE")]
	#[case(Some("dialog"), "POST")]
	fn test_resolve_method(#[case] attribute: Option<&str>, #[case] expected: &str) {
		let settings = ContactFormSettings::default();
		assert_eq!(settings.resolve_method(attribute), expected);
	}

	#[rstest]
	fn test_unknown_top_level_key_rejected() {
		let err = ContactFormSettings::from_json(r#"{"retries": 3}"#).unwrap_err();
		assert!(matches!(err, SettingsError::Json(_)));
	}
}
