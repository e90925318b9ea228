//! User-facing texts.
//!
//! Defaults are the Spanish texts the form ships with. Every text can be
//! replaced through [`ContactFormSettings`](crate::ContactFormSettings).

use serde::{Deserialize, Serialize};

use crate::field::ContactField;

/// Hint and status texts shown by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Messages {
	/// Hint under an invalid name.
	pub name_hint: String,
	/// Hint under an invalid email.
	pub email_hint: String,
	/// Hint under an invalid phone number.
	pub phone_hint: String,
	/// Hint under a missing subject.
	pub subject_hint: String,
	/// Hint under a short message.
	pub message_hint: String,
	/// Status shown when a submit attempt fails validation.
	pub invalid_form: String,
	/// Status shown after a 2xx response.
	pub sent: String,
	/// Status shown after a rejection that carried no usable error text.
	pub rejected: String,
	/// Status shown when no response was received at all.
	pub network_failure: String,
	/// Submit control label while the request is in flight.
	pub sending_label: String,
}

impl Default for Messages {
	fn default() -> Self {
		Self {
			name_hint: "Ingrese un nombre válido (mínimo 2 caracteres).".to_string(),
			email_hint: "Ingrese un correo electrónico válido.".to_string(),
			phone_hint: "Ingrese un número válido (ej: +503 7000-0000).".to_string(),
			subject_hint: "Seleccione un asunto.".to_string(),
			message_hint: "El mensaje debe tener al menos 10 caracteres.".to_string(),
			invalid_form: "Por favor corrige los campos en rojo.".to_string(),
			sent: "Mensaje enviado correctamente. Gracias.".to_string(),
			rejected: "Error al enviar. Intenta nuevamente.".to_string(),
			network_failure: "No se pudo enviar. Verifique su conexión.".to_string(),
			sending_label: "Enviando...".to_string(),
		}
	}
}

impl Messages {
	/// Returns the hint shown under `field` when it fails its rule.
	///
	/// # Examples
	///
	/// ```
	/// use contact_form_core::{ContactField, Messages};
	///
	/// let messages = Messages::default();
	/// assert_eq!(
	///     messages.hint(ContactField::Email),
	///     "Ingrese un correo electrónico válido."
	/// );
	/// ```
	pub fn hint(&self, field: ContactField) -> &str {
		match field {
			ContactField::Name => &self.name_hint,
			ContactField::Email => &self.email_hint,
			ContactField::Phone => &self.phone_hint,
			ContactField::Subject => &self.subject_hint,
			ContactField::Message => &self.message_hint,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(ContactField::Name, "Ingrese un nombre válido (mínimo 2 caracteres).")]
	#[case(ContactField::Email, "Ingrese un correo electrónico válido.")]
	#[case(ContactField::Phone, "Ingrese un número válido (ej: +503 7000-0000).")]
	#[case(ContactField::Subject, "Seleccione un asunto.")]
	#[case(ContactField::Message, "El mensaje debe tener al menos 10 caracteres.")]
	fn test_default_hints(#[case] field: ContactField, #[case] expected: &str) {
		assert_eq!(Messages::default().hint(field), expected);
	}

	#[rstest]
	fn test_partial_override_keeps_other_defaults() {
		let messages: Messages =
			serde_json::from_str(r#"{"sent": "Thanks!", "email_hint": "Bad email"}"#).unwrap();
		assert_eq!(messages.sent, "Thanks!");
		assert_eq!(messages.hint(ContactField::Email), "Bad email");
		assert_eq!(messages.rejected, Messages::default().rejected);
	}

	#[rstest]
	fn test_unknown_message_key_is_rejected() {
		let result = serde_json::from_str::<Messages>(r#"{"farewell": "bye"}"#);
		assert!(result.is_err());
	}
}
