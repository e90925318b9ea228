//! # Contact Form
//!
//! Client-side validation and asynchronous submission for a five-field
//! contact form (name, email, phone, subject, message).
//!
//! The form validates every field on submit, marks invalid fields with an
//! inline hint and `aria-invalid`, focuses the first one, and otherwise sends
//! the form data with `fetch`. A single status region reports the result.
//! Editing a field removes its hint right away.
//!
//! ## Crates
//!
//! - `contact-form-core`: field rules, texts, settings and the
//!   platform-neutral [`FormController`]. Runs and tests natively.
//! - `contact-form-pages` (feature `pages`, default): the `web-sys` DOM
//!   surface, the `gloo-net` transport and the `mountContactForm` export.
//!
//! ## Feature Flags
//!
//! - `pages` (default) - Browser bindings
//! - `console_error_panic_hook` - Readable panics in the browser console
//! - `debug-log` - Verbose controller tracing in debug builds
//! - `testing` - In-memory surface, transport and timer
//!
//! ## Quick Example
//!
//! ```rust
//! use contact_form::prelude::*;
//! use contact_form::testing::{MemorySurface, ScriptedTransport};
//! use futures::executor::block_on;
//!
//! let controller = FormController::new(MemorySurface::new(), ContactFormSettings::default())?;
//! controller.surface().fill_valid();
//!
//! let transport = ScriptedTransport::new();
//! transport.push_response(400, r#"{"error":"Duplicate"}"#);
//!
//! let outcome = block_on(controller.submit(&transport))?;
//! assert!(matches!(outcome, SubmitOutcome::Rejected { ref message, .. } if message == "Duplicate"));
//! assert_eq!(controller.surface().status_text().as_deref(), Some("Duplicate"));
//! # Ok::<(), ContactFormError>(())
//! ```
//!
//! In the browser:
//!
//! ```rust,ignore
//! use contact_form::pages::mount;
//!
//! // `None` mounts `#contact-form`; pages without it are left alone.
//! if let Some(mounted) = mount(None)? {
//!     assert!(!mounted.controller().is_submitting());
//! }
//! ```

pub use contact_form_core::{
	controller, error, field, logging, messages, settings, surface, transport, validators,
};
#[cfg(feature = "testing")]
pub use contact_form_core::testing;

#[cfg(feature = "pages")]
pub mod pages;

pub use contact_form_core::{
	ALLOWED_METHODS, ContactField, ContactFormError, ContactFormResult, ContactFormSettings,
	ElementIds, FormController, FormData, FormSurface, Messages, SettingsError, StatusKind,
	StatusToken, SubmitHandle, SubmitOutcome, SubmitRequest, SubmitTask, Timer, Transport,
	TransportError, TransportResponse, UnknownField, ValidationReport,
};
pub use contact_form_core::{debug_log, error_log, info_log, warn_log};

/// Commonly used types
pub mod prelude {
	pub use crate::{
		ContactField, ContactFormError, ContactFormResult, ContactFormSettings, FormController,
		FormSurface, StatusKind, SubmitOutcome, Timer, Transport, TransportResponse,
	};

	#[cfg(all(feature = "pages", target_arch = "wasm32"))]
	pub use crate::pages::{DomSurface, FetchTransport, TimeoutTimer, mount};
}
