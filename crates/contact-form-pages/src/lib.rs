//! Browser bindings for the contact form.
//!
//! Implements the seams of [`contact_form_core`] on top of `web-sys`:
//!
//! - [`dom`]: `DomSurface`, the form as a [`FormSurface`](contact_form_core::FormSurface)
//! - [`fetch`]: `FetchTransport`, submission through `fetch` via `gloo-net`
//! - [`timer`]: `TimeoutTimer`, `setTimeout` via `gloo-timers`
//! - [`csrf`]: token lookup for the optional `X-CSRFToken` header
//! - [`mount`]: settings from `data-contact-form`, listener wiring and the
//!   `mountContactForm` export
//!
//! The browser types only exist on `wasm32`. The pure helpers around them
//! (URL building, cookie parsing, settings parsing, styles) compile
//! everywhere.

pub mod csrf;
pub mod dom;
pub mod fetch;
pub mod mount;
pub mod timer;

pub use contact_form_core::{
	ContactField, ContactFormError, ContactFormResult, ContactFormSettings, FormController,
	SubmitOutcome,
};

#[cfg(target_arch = "wasm32")]
pub use dom::{DomHint, DomSurface};
#[cfg(target_arch = "wasm32")]
pub use fetch::FetchTransport;
#[cfg(target_arch = "wasm32")]
pub use mount::{MountedForm, mount, mount_with};
#[cfg(target_arch = "wasm32")]
pub use timer::TimeoutTimer;

/// Best-effort text of a thrown JavaScript value.
#[cfg(target_arch = "wasm32")]
pub(crate) fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
	use wasm_bindgen::JsCast;

	if let Some(text) = value.as_string() {
		return text;
	}
	match value.dyn_ref::<js_sys::Error>() {
		Some(error) => String::from(error.message()),
		None => format!("{value:?}"),
	}
}
