//! The five contact form fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validators;

/// One user-editable input that takes part in validation.
///
/// The declaration order is the fixed validation order, so `Ord` and
/// [`ContactField::ALL`] agree: name, email, phone, subject, message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
	/// Sender name
	Name,
	/// Reply address
	Email,
	/// Contact phone number
	Phone,
	/// Selected subject
	Subject,
	/// Free-form message body
	Message,
}

impl ContactField {
	/// All fields in validation order.
	pub const ALL: [ContactField; 5] = [
		ContactField::Name,
		ContactField::Email,
		ContactField::Phone,
		ContactField::Subject,
		ContactField::Message,
	];

	/// Returns the canonical lowercase name, which is also the default element id.
	///
	/// # Examples
	///
	/// ```
	/// use contact_form_core::ContactField;
	///
	/// assert_eq!(ContactField::Phone.as_str(), "phone");
	/// ```
	pub const fn as_str(self) -> &'static str {
		match self {
			ContactField::Name => "name",
			ContactField::Email => "email",
			ContactField::Phone => "phone",
			ContactField::Subject => "subject",
			ContactField::Message => "message",
		}
	}

	/// Applies this field's rule to a raw value.
	///
	/// `None` stands for a control that reported no value at all and is
	/// rejected by every rule.
	///
	/// # Examples
	///
	/// ```
	/// use contact_form_core::ContactField;
	///
	/// assert!(ContactField::Name.is_valid(Some("Jo")));
	/// assert!(!ContactField::Subject.is_valid(None));
	/// ```
	pub fn is_valid(self, value: Option<&str>) -> bool {
		let Some(value) = value else {
			return false;
		};
		match self {
			ContactField::Name => validators::is_valid_name(value),
			ContactField::Email => validators::is_valid_email(value),
			ContactField::Phone => validators::is_valid_phone(value),
			ContactField::Subject => validators::is_valid_subject(value),
			ContactField::Message => validators::is_valid_message(value),
		}
	}
}

impl fmt::Display for ContactField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when parsing an unknown field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown contact field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for ContactField {
	type Err = UnknownField;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ContactField::ALL
			.into_iter()
			.find(|field| field.as_str() == s)
			.ok_or_else(|| UnknownField(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_all_is_in_validation_order() {
		let mut sorted = ContactField::ALL;
		sorted.sort();
		assert_eq!(sorted, ContactField::ALL);
		assert_eq!(ContactField::ALL[0], ContactField::Name);
		assert_eq!(ContactField::ALL[4], ContactField::Message);
	}

	#[rstest]
	#[case("name", ContactField::Name)]
	#[case("email", ContactField::Email)]
	#[case("phone", ContactField::Phone)]
	#[case("subject", ContactField::Subject)]
	#[case("message", ContactField::Message)]
	fn test_parse_and_display_agree(#[case] name: &str, #[case] field: ContactField) {
		assert_eq!(name.parse::<ContactField>().unwrap(), field);
		assert_eq!(field.to_string(), name);
	}

	#[rstest]
	fn test_parse_unknown_field() {
		let err = "address".parse::<ContactField>().unwrap_err();
		assert_eq!(err, UnknownField("address".to_string()));
	}

	#[rstest]
	fn test_missing_value_is_invalid_for_every_field() {
		for field in ContactField::ALL {
			assert!(!field.is_valid(None), "{field} accepted a missing value");
		}
	}

	#[rstest]
	fn test_serde_uses_lowercase_names() {
		let json = serde_json::to_string(&ContactField::Subject).unwrap();
		assert_eq!(json, "\"subject\"");
		let field: ContactField = serde_json::from_str("\"email\"").unwrap();
		assert_eq!(field, ContactField::Email);
	}
}
