//! Field rules for the contact form.
//!
//! Each rule is a pure function of the field's current text. Lengths are
//! counted in characters after trimming surrounding whitespace.
//!
//! These checks only improve the user experience. The receiving endpoint must
//! validate again.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Minimum trimmed length of the sender name.
pub const NAME_MIN_CHARS: usize = 2;

/// Minimum trimmed length of the message body.
pub const MESSAGE_MIN_CHARS: usize = 10;

// local@domain.tld where every part is free of whitespace and '@'.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// Separators people type inside phone numbers: whitespace, hyphens, parentheses.
static PHONE_SEPARATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"[\s\-()]").expect("PHONE_SEPARATOR_REGEX: invalid regex pattern")
});

// Optional leading '+' then 7 to 15 ASCII digits.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\+?[0-9]{7,15}$").expect("PHONE_REGEX: invalid regex pattern")
});

/// A name is valid when it has at least two characters once trimmed.
///
/// # Examples
///
/// ```
/// use contact_form_core::validators::is_valid_name;
///
/// assert!(is_valid_name("Jo"));
/// assert!(!is_valid_name("  J "));
/// ```
pub fn is_valid_name(value: &str) -> bool {
	value.trim().chars().count() >= NAME_MIN_CHARS
}

/// Checks the `local@domain.tld` shape.
///
/// The whole value is matched, so surrounding whitespace makes it invalid.
///
/// # Examples
///
/// ```
/// use contact_form_core::validators::is_valid_email;
///
/// assert!(is_valid_email("a@b.co"));
/// assert!(!is_valid_email("not-an-email"));
/// assert!(!is_valid_email("a b@c.io"));
/// ```
pub fn is_valid_email(value: &str) -> bool {
	EMAIL_REGEX.is_match(value)
}

/// Removes the separators accepted inside a phone number.
///
/// # Examples
///
/// ```
/// use contact_form_core::validators::normalize_phone;
///
/// assert_eq!(normalize_phone("+503 (7000) 00-00"), "+50370000000");
/// ```
pub fn normalize_phone(value: &str) -> Cow<'_, str> {
	PHONE_SEPARATOR_REGEX.replace_all(value, "")
}

/// Phone numbers are an optional `+` followed by 7 to 15 digits once
/// separators are stripped.
///
/// # Examples
///
/// ```
/// use contact_form_core::validators::is_valid_phone;
///
/// assert!(is_valid_phone("+503 7000-0000"));
/// assert!(is_valid_phone("(555) 123-4567"));
/// assert!(!is_valid_phone("12345"));
/// assert!(!is_valid_phone("555-CALL-NOW"));
/// ```
pub fn is_valid_phone(value: &str) -> bool {
	PHONE_REGEX.is_match(&normalize_phone(value))
}

/// A subject is valid when something other than whitespace was chosen.
pub fn is_valid_subject(value: &str) -> bool {
	!value.trim().is_empty()
}

/// A message needs at least ten characters once trimmed.
pub fn is_valid_message(value: &str) -> bool {
	value.trim().chars().count() >= MESSAGE_MIN_CHARS
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	#[case("Jo", true)]
	#[case("José", true)]
	#[case("  Al  ", true)]
	#[case("J", false)]
	#[case(" J ", false)]
	#[case("", false)]
	#[case("\t\n", false)]
	// Two characters, four bytes
	#[case("Ñá", true)]
	fn test_name_rule(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(is_valid_name(value), expected);
	}

	#[rstest]
	#[case("a@b.co", true)]
	#[case("first.last@mail.example.org", true)]
	#[case("user+tag@domain.io", true)]
	#[case("not-an-email", false)]
	#[case("a@b", false)]
	#[case("@b.co", false)]
	#[case("a@.co", false)]
	#[case("a@b.", false)]
	#[case("a@@b.co", false)]
	#[case(" a@b.co", false)]
	#[case("a@b.co ", false)]
	#[case("", false)]
	fn test_email_rule(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(is_valid_email(value), expected);
	}

	#[rstest]
	#[case("+503 7000-0000", true)]
	#[case("70000000", true)]
	#[case("(503) 7000 0000", true)]
	#[case("1234567", true)]
	#[case("123456789012345", true)]
	#[case("+123456789012345", true)]
	#[case("123456", false)]
	#[case("1234567890123456", false)]
	#[case("++5037000000", false)]
	#[case("503+7000000", false)]
	#[case("7000.0000", false)]
	#[case("", false)]
	// Non-ASCII digits are not phone digits
	#[case("٧٠٠٠٠٠٠٠", false)]
	fn test_phone_rule(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(is_valid_phone(value), expected);
	}

	#[rstest]
	#[case("Support", true)]
	#[case(" x ", true)]
	#[case("", false)]
	#[case("   ", false)]
	fn test_subject_rule(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(is_valid_subject(value), expected);
	}

	#[rstest]
	#[case("Hello there!!", true)]
	#[case("0123456789", true)]
	#[case("012345678", false)]
	#[case("   012345678   ", false)]
	#[case("", false)]
	fn test_message_rule(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(is_valid_message(value), expected);
	}

	proptest! {
		#[test]
		fn prop_name_valid_iff_two_trimmed_chars(value in "\\PC{0,12}") {
			prop_assert_eq!(is_valid_name(&value), value.trim().chars().count() >= 2);
		}

		#[test]
		fn prop_message_valid_iff_ten_trimmed_chars(value in "[ a-zA-Z0-9!?]{0,20}") {
			prop_assert_eq!(is_valid_message(&value), value.trim().chars().count() >= 10);
		}

		#[test]
		fn prop_subject_valid_iff_not_blank(value in "[ \\ta-z]{0,6}") {
			prop_assert_eq!(is_valid_subject(&value), !value.trim().is_empty());
		}

		#[test]
		fn prop_phone_digit_count_bounds(digits in "[0-9]{1,20}", plus in any::<bool>()) {
			let raw = if plus { format!("+{digits}") } else { digits.clone() };
			let expected = (7..=15).contains(&digits.len());
			prop_assert_eq!(is_valid_phone(&raw), expected);
		}

		#[test]
		fn prop_phone_ignores_separators(digits in "[0-9]{7,15}", sep in "[ ()\\-]{0,3}") {
			let spaced = format!("{sep}{}{sep}{}{sep}", &digits[..3], &digits[3..]);
			prop_assert!(is_valid_phone(&spaced));
		}

		#[test]
		fn prop_email_without_at_is_invalid(value in "[a-z.]{0,20}") {
			prop_assert!(!is_valid_email(&value));
		}

		#[test]
		fn prop_well_formed_email_is_valid(
			local in "[a-z0-9._+]{1,10}",
			domain in "[a-z0-9-]{1,10}",
			tld in "[a-z]{2,4}",
		) {
			let email = format!("{local}@{domain}.{tld}");
			prop_assert!(is_valid_email(&email));
		}
	}
}
