//! Facade re-export tests
//!
//! The root crate must expose the whole submit flow through its prelude and
//! `testing` re-export.

use contact_form::prelude::*;
use contact_form::testing::{MemorySurface, ScriptedTransport};
use futures::executor::block_on;
use rstest::rstest;

#[rstest]
#[case(200, Some("Mensaje enviado correctamente. Gracias."))]
#[case(400, Some("Error al enviar. Intenta nuevamente."))]
fn test_submit_through_facade(#[case] status: u16, #[case] expected: Option<&str>) {
	let controller =
		FormController::new(MemorySurface::new(), ContactFormSettings::default()).unwrap();
	controller.surface().fill_valid();
	let transport = ScriptedTransport::new();
	transport.push_response(status, "");

	block_on(controller.submit(&transport)).unwrap();

	assert_eq!(controller.surface().status_text().as_deref(), expected);
}

#[rstest]
fn test_field_rules_reachable_from_root() {
	assert!(contact_form::validators::is_valid_phone("+503 7000-0000"));
	assert_eq!("subject".parse::<ContactField>().unwrap(), ContactField::Subject);
}
