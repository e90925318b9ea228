//! Contact form core
//!
//! Platform-neutral half of the contact form: the five field rules, the
//! user-facing texts, settings and the [`FormController`] that drives a
//! [`FormSurface`] (the page) and a [`Transport`] (the endpoint).
//!
//! ## Architecture
//!
//! ```text
//!                 ┌──────────────────┐
//!  input/change ─▶│  FormController  │──▶ FormSurface (hints, status, submit control)
//!  submit ───────▶│                  │──▶ Transport   (one HTTP request)
//!                 │                  │──▶ Timer       (success status expiry)
//!                 └──────────────────┘
//! ```
//!
//! The browser implementations of the three seams live in
//! `contact-form-pages`. The `testing` module (feature `testing`) has in-memory
//! ones.
//!
//! ## Example
//!
//! ```
//! use contact_form_core::testing::{MemorySurface, ScriptedTransport};
//! use contact_form_core::{ContactField, ContactFormSettings, FormController, SubmitOutcome};
//! use futures::executor::block_on;
//!
//! let controller = FormController::new(MemorySurface::new(), ContactFormSettings::default())?;
//! controller.surface().fill_valid();
//! controller.surface().set_value(ContactField::Email, "not-an-email");
//!
//! let transport = ScriptedTransport::new();
//! let outcome = block_on(controller.submit(&transport))?;
//!
//! assert_eq!(outcome, SubmitOutcome::Invalid { first_invalid: ContactField::Email });
//! assert!(transport.requests().is_empty());
//! # Ok::<(), contact_form_core::ContactFormError>(())
//! ```

pub mod controller;
pub mod error;
pub mod field;
pub mod logging;
pub mod messages;
pub mod settings;
pub mod surface;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod transport;
pub mod validators;

pub use controller::{
	FormController, StatusToken, SubmitHandle, SubmitOutcome, SubmitTask, ValidationReport,
};
pub use error::{ContactFormError, ContactFormResult, SettingsError, TransportError};
pub use field::{ContactField, UnknownField};
pub use messages::Messages;
pub use settings::{ALLOWED_METHODS, ContactFormSettings, ElementIds};
pub use surface::{FormData, FormSurface, StatusKind};
pub use transport::{SubmitRequest, Timer, Transport, TransportResponse};

#[doc(hidden)]
pub mod __private {
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
