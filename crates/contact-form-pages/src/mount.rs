//! Wiring the controller into the page.
//!
//! ```text
//! mount()
//!   ├─ form missing ─────────────▶ Ok(None), nothing wired
//!   ├─ data-contact-form JSON ───▶ ContactFormSettings
//!   ├─ DomSurface::bind
//!   └─ listeners
//!        submit        ─▶ preventDefault + spawn_local(submit_task)
//!        input/change  ─▶ field_edited(field)
//! ```
//!
//! From JavaScript:
//!
//! ```js
//! import init, { mountContactForm } from "./contact_form_pages.js";
//!
//! await init();
//! document.addEventListener("DOMContentLoaded", () => mountContactForm());
//! ```

use contact_form_core::{ContactFormResult, ContactFormSettings};

/// Attribute on the form element holding the settings JSON.
pub const SETTINGS_ATTRIBUTE: &str = "data-contact-form";

/// Builds the settings for a form whose settings attribute is `raw`.
///
/// A missing or blank attribute means defaults. `form_id` always wins over
/// `elements.form` from the JSON, since it is the element the attribute was
/// read from.
pub fn settings_from_attribute(
	raw: Option<&str>,
	form_id: &str,
) -> ContactFormResult<ContactFormSettings> {
	let mut settings = match raw {
		Some(json) if !json.trim().is_empty() => ContactFormSettings::from_json(json)?,
		_ => ContactFormSettings::default(),
	};
	settings.elements.form = form_id.to_string();
	settings.validate()?;
	Ok(settings)
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::{MountedForm, mount, mount_contact_form, mount_with};

#[cfg(target_arch = "wasm32")]
mod browser {
	use contact_form_core::{
		ContactField, ContactFormError, ContactFormResult, ContactFormSettings, ElementIds,
		FormController, debug_log, info_log, warn_log,
	};
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;
	use web_sys::{Document, EventTarget};

	use super::{SETTINGS_ATTRIBUTE, settings_from_attribute};
	use crate::dom::DomSurface;
	use crate::fetch::FetchTransport;
	use crate::js_error_message;
	use crate::timer::TimeoutTimer;

	/// A contact form with its listeners attached.
	///
	/// The listeners live as long as the page; dropping this value only drops
	/// the caller's handle on the controller.
	#[derive(Clone)]
	pub struct MountedForm {
		controller: FormController<DomSurface>,
	}

	impl MountedForm {
		pub fn controller(&self) -> &FormController<DomSurface> {
			&self.controller
		}
	}

	/// Mounts the form with id `form_id` (default `contact-form`).
	///
	/// Returns `Ok(None)` when the page has no such form, so pages without a
	/// contact form can load the module unconditionally.
	pub fn mount(form_id: Option<&str>) -> ContactFormResult<Option<MountedForm>> {
		let default_ids = ElementIds::default();
		let form_id = form_id.unwrap_or(default_ids.form.as_str());

		let Some(document) = web_sys::window().and_then(|window| window.document()) else {
			warn_log!("no document available; contact form not mounted");
			return Ok(None);
		};
		let Some(form) = document.get_element_by_id(form_id) else {
			debug_log!("no #{} on this page; contact form not mounted", form_id);
			return Ok(None);
		};

		let raw = form.get_attribute(SETTINGS_ATTRIBUTE);
		let settings = settings_from_attribute(raw.as_deref(), form_id)?;
		mount_with(&document, settings).map(Some)
	}

	/// Mounts with explicit settings. The form must exist.
	pub fn mount_with(
		document: &Document,
		settings: ContactFormSettings,
	) -> ContactFormResult<MountedForm> {
		let surface = DomSurface::bind(document, &settings.elements)?;
		let controller = FormController::new(surface, settings)?;

		attach_submit_listener(&controller)?;
		for field in ContactField::ALL {
			attach_edit_listeners(&controller, field)?;
		}

		info_log!(
			"contact form #{} mounted",
			controller.settings().elements.form
		);
		Ok(MountedForm { controller })
	}

	/// JavaScript entry point.
	///
	/// Resolves to `true` when a form was mounted and `false` when the page
	/// has none. Binding or settings errors are thrown as strings.
	#[wasm_bindgen(js_name = mountContactForm)]
	pub fn mount_contact_form(form_id: Option<String>) -> Result<bool, JsValue> {
		#[cfg(feature = "console_error_panic_hook")]
		console_error_panic_hook::set_once();

		match mount(form_id.as_deref()) {
			Ok(mounted) => Ok(mounted.is_some()),
			Err(err) => {
				contact_form_core::error_log!("contact form not mounted: {}", err);
				Err(JsValue::from_str(&err.to_string()))
			}
		}
	}

	fn attach_submit_listener(controller: &FormController<DomSurface>) -> ContactFormResult<()> {
		let form: EventTarget = controller.surface().form().clone().into();
		let csrf = controller.settings().csrf;
		let controller = controller.clone();

		let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
			event.prevent_default();

			let transport = FetchTransport::new().with_csrf(csrf);
			let task = controller.submit_task(transport, TimeoutTimer, |result| match result {
				Ok(_outcome) => debug_log!("submit finished: {:?}", _outcome),
				Err(ContactFormError::AlreadySubmitting) => {
					debug_log!("submit ignored while a request is pending")
				}
				Err(_err) => warn_log!("submit failed: {}", _err),
			});
			wasm_bindgen_futures::spawn_local(task);
		}) as Box<dyn FnMut(_)>);

		form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
			.map_err(|err| ContactFormError::Dom(js_error_message(&err)))?;
		closure.forget(); // Keep closure alive
		Ok(())
	}

	fn attach_edit_listeners(
		controller: &FormController<DomSurface>,
		field: ContactField,
	) -> ContactFormResult<()> {
		let Some(element) = controller.surface().field_element(field) else {
			return Ok(());
		};
		let target: EventTarget = element.clone().into();

		for event_name in ["input", "change"] {
			let controller = controller.clone();
			let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
				controller.field_edited(field);
			}) as Box<dyn FnMut(_)>);

			target
				.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
				.map_err(|err| ContactFormError::Dom(js_error_message(&err)))?;
			closure.forget(); // Keep closure alive
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use contact_form_core::{ContactFormError, SettingsError};
	use rstest::rstest;

	#[rstest]
	#[case(None)]
	#[case(Some(""))]
	#[case(Some("   "))]
	fn test_missing_attribute_uses_defaults(#[case] raw: Option<&str>) {
		let settings = settings_from_attribute(raw, "contact-form").unwrap();
		assert_eq!(settings, ContactFormSettings::default());
	}

	#[rstest]
	fn test_attribute_overrides_and_form_id_wins() {
		let raw = r#"{"elements": {"form": "elsewhere"}, "csrf": true, "success_clear_delay_ms": 8000}"#;
		let settings = settings_from_attribute(Some(raw), "support-form").unwrap();
		assert_eq!(settings.elements.form, "support-form");
		assert!(settings.csrf);
		assert_eq!(settings.success_clear_delay_ms, 8000);
	}

	#[rstest]
	#[case(r#"{"default_method": "BREW"}"#)]
	#[case(r#"{"colour": "red"}"#)]
	#[case("{not json")]
	fn test_bad_attribute_is_a_settings_error(#[case] raw: &str) {
		let result = settings_from_attribute(Some(raw), "contact-form");
		assert!(matches!(result, Err(ContactFormError::Settings(_))));
	}

	#[rstest]
	fn test_form_id_colliding_with_field_id_is_rejected() {
		let result = settings_from_attribute(None, "email");
		assert!(matches!(
			result,
			Err(ContactFormError::Settings(SettingsError::DuplicateId(id))) if id == "email"
		));
	}
}
