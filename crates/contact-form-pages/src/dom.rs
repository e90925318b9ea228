//! The contact form as seen through `web-sys`.
//!
//! [`DomSurface`] binds to the elements named in [`ElementIds`], creates the
//! status region at bind time and renders hints as `div.field-hint` siblings
//! placed right after their field.
//!
//! DOM calls that fail after binding are logged and skipped so the form stays
//! usable.

use contact_form_core::StatusKind;

/// Class of every hint element.
pub const HINT_CLASS: &str = "field-hint";

/// Inline style properties of a hint element.
pub const HINT_STYLE: [(&str, &str); 3] = [
	("color", "crimson"),
	("font-size", "0.85rem"),
	("margin-top", "4px"),
];

/// Inline style properties of the status region.
pub const STATUS_STYLE: [(&str, &str); 2] = [("margin-top", "12px"), ("font-size", "0.95rem")];

/// Text color of the status region for `kind`.
pub fn status_color(kind: StatusKind) -> &'static str {
	match kind {
		StatusKind::Success => "green",
		StatusKind::Error => "crimson",
	}
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::{DomHint, DomSurface};

#[cfg(target_arch = "wasm32")]
mod browser {
	use std::collections::BTreeMap;

	use contact_form_core::{
		ContactField, ContactFormError, ContactFormResult, ElementIds, FormData, FormSurface,
		StatusKind, warn_log,
	};
	use wasm_bindgen::{JsCast, JsValue};
	use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

	use super::{HINT_CLASS, HINT_STYLE, STATUS_STYLE, status_color};
	use crate::js_error_message;

	/// A rendered hint. Empty when the element could not be created.
	#[derive(Debug)]
	pub struct DomHint(Option<HtmlElement>);

	/// The bound contact form.
	#[derive(Debug)]
	pub struct DomSurface {
		document: Document,
		form: HtmlFormElement,
		submit: HtmlElement,
		fields: BTreeMap<ContactField, HtmlElement>,
		status: HtmlElement,
	}

	impl DomSurface {
		/// Looks up every element in `ids` and creates the status region.
		///
		/// Fails when an element is missing, when the form id is not a
		/// `<form>`, or when a field lives outside the form. Nothing is added
		/// to the page on failure.
		pub fn bind(document: &Document, ids: &ElementIds) -> ContactFormResult<Self> {
			let form = lookup(document, &ids.form)?
				.dyn_into::<HtmlFormElement>()
				.map_err(|_| ContactFormError::UnexpectedElement {
					id: ids.form.clone(),
					expected: "form",
				})?;
			let submit = lookup_html(document, &ids.submit)?;

			let mut fields = BTreeMap::new();
			for field in ContactField::ALL {
				let id = ids.field(field);
				let element = lookup_html(document, id)?;
				let node: &web_sys::Node = element.as_ref();
				if !form.contains(Some(node)) {
					return Err(ContactFormError::OutsideForm {
						id: id.to_string(),
						form: ids.form.clone(),
					});
				}
				fields.insert(field, element);
			}

			let status = create_html(document, "div")?;
			for (name, value) in [("role", "status"), ("aria-live", "polite")] {
				status
					.set_attribute(name, value)
					.map_err(|err| ContactFormError::Dom(js_error_message(&err)))?;
			}
			apply_style(&status, &STATUS_STYLE);
			form.append_with_node_1(&status)
				.map_err(|err| ContactFormError::Dom(js_error_message(&err)))?;

			Ok(Self {
				document: document.clone(),
				form,
				submit,
				fields,
				status,
			})
		}

		pub fn form(&self) -> &HtmlFormElement {
			&self.form
		}

		/// The element backing `field`.
		pub fn field_element(&self, field: ContactField) -> Option<&HtmlElement> {
			self.fields.get(&field)
		}

		/// The status region created at bind time.
		pub fn status_element(&self) -> &HtmlElement {
			&self.status
		}

		fn is_input_submit(&self) -> bool {
			self.submit.tag_name().eq_ignore_ascii_case("input")
		}
	}

	impl FormSurface for DomSurface {
		type Hint = DomHint;

		fn field_value(&self, field: ContactField) -> Option<String> {
			let element = self.fields.get(&field)?;
			js_sys::Reflect::get(element, &JsValue::from_str("value"))
				.ok()
				.and_then(|value| value.as_string())
		}

		fn set_invalid(&self, field: ContactField, invalid: bool) {
			let Some(element) = self.fields.get(&field) else {
				return;
			};
			let result = if invalid {
				element.set_attribute("aria-invalid", "true")
			} else {
				element.remove_attribute("aria-invalid")
			};
			if let Err(_err) = result {
				warn_log!(
					"could not update aria-invalid on {}: {}",
					field,
					js_error_message(&_err)
				);
			}
		}

		fn attach_hint(&self, field: ContactField, message: &str) -> DomHint {
			let Some(element) = self.fields.get(&field) else {
				return DomHint(None);
			};
			let hint = match create_html(&self.document, "div") {
				Ok(hint) => hint,
				Err(_err) => {
					warn_log!("could not create hint for {}: {}", field, _err);
					return DomHint(None);
				}
			};
			hint.set_class_name(HINT_CLASS);
			apply_style(&hint, &HINT_STYLE);
			hint.set_text_content(Some(message));
			if let Err(_err) = element.after_with_node_1(&hint) {
				warn_log!(
					"could not insert hint for {}: {}",
					field,
					js_error_message(&_err)
				);
				return DomHint(None);
			}
			DomHint(Some(hint))
		}

		fn update_hint(&self, hint: &DomHint, message: &str) {
			if let Some(element) = &hint.0 {
				element.set_text_content(Some(message));
			}
		}

		fn detach_hint(&self, hint: DomHint) {
			if let Some(element) = hint.0 {
				element.remove();
			}
		}

		fn focus(&self, field: ContactField) {
			if let Some(element) = self.fields.get(&field)
				&& let Err(_err) = element.focus()
			{
				warn_log!("could not focus {}: {}", field, js_error_message(&_err));
			}
		}

		fn show_status(&self, kind: StatusKind, text: &str) {
			self.status.set_text_content(Some(text));
			if let Err(_err) = self
				.status
				.style()
				.set_property("color", status_color(kind))
			{
				warn_log!("could not color status: {}", js_error_message(&_err));
			}
		}

		fn clear_status(&self) {
			self.status.set_text_content(Some(""));
			if let Err(_err) = self.status.style().remove_property("color") {
				warn_log!("could not reset status color: {}", js_error_message(&_err));
			}
		}

		fn submit_label(&self) -> Option<String> {
			if self.is_input_submit() {
				self.submit.get_attribute("value")
			} else {
				self.submit.text_content()
			}
		}

		fn set_submit_label(&self, label: &str) {
			if self.is_input_submit() {
				if let Err(_err) = self.submit.set_attribute("value", label) {
					warn_log!("could not relabel submit: {}", js_error_message(&_err));
				}
			} else {
				self.submit.set_text_content(Some(label));
			}
		}

		fn clear_submit_label(&self) {
			if self.is_input_submit() {
				if let Err(_err) = self.submit.remove_attribute("value") {
					warn_log!("could not reset submit label: {}", js_error_message(&_err));
				}
			} else {
				self.submit.set_text_content(None);
			}
		}

		fn set_submit_disabled(&self, disabled: bool) {
			if let Err(_err) = js_sys::Reflect::set(
				&self.submit,
				&JsValue::from_str("disabled"),
				&JsValue::from_bool(disabled),
			) {
				warn_log!("could not toggle submit: {}", js_error_message(&_err));
			}
		}

		fn reset(&self) {
			self.form.reset();
		}

		fn form_data(&self) -> FormData {
			let data = match web_sys::FormData::new_with_form(&self.form) {
				Ok(data) => data,
				Err(_err) => {
					warn_log!("could not read form data: {}", js_error_message(&_err));
					return FormData::new();
				}
			};
			let entries = match js_sys::try_iter(&data) {
				Ok(Some(entries)) => entries,
				_ => return FormData::new(),
			};

			entries
				.filter_map(Result::ok)
				.filter_map(|entry| {
					let entry: js_sys::Array = entry.dyn_into().ok()?;
					// File inputs yield Blob values; only text travels.
					Some((entry.get(0).as_string()?, entry.get(1).as_string()?))
				})
				.collect()
		}

		fn action(&self) -> String {
			self.form.action()
		}

		fn method(&self) -> Option<String> {
			self.form.get_attribute("method")
		}
	}

	fn lookup(document: &Document, id: &str) -> ContactFormResult<Element> {
		document
			.get_element_by_id(id)
			.ok_or_else(|| ContactFormError::MissingElement { id: id.to_string() })
	}

	fn lookup_html(document: &Document, id: &str) -> ContactFormResult<HtmlElement> {
		lookup(document, id)?
			.dyn_into::<HtmlElement>()
			.map_err(|_| ContactFormError::UnexpectedElement {
				id: id.to_string(),
				expected: "HTML element",
			})
	}

	fn create_html(document: &Document, tag: &str) -> ContactFormResult<HtmlElement> {
		document
			.create_element(tag)
			.map_err(|err| ContactFormError::Dom(js_error_message(&err)))?
			.dyn_into::<HtmlElement>()
			.map_err(|_| ContactFormError::Dom(format!("<{tag}> is not an HTML element")))
	}

	fn apply_style(element: &HtmlElement, properties: &[(&str, &str)]) {
		let style = element.style();
		for (name, value) in properties {
			if let Err(_err) = style.set_property(name, value) {
				warn_log!("could not set {}: {}", name, js_error_message(&_err));
			}
		}
	}
}
