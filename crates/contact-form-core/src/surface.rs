//! The view the controller drives.
//!
//! [`FormSurface`] is the DOM contract: five fields, a submit control, a status
//! region and hints created on demand. The browser implementation lives in
//! `contact-form-pages`; `testing::MemorySurface` is the in-memory one.
//!
//! Surface methods do not fail. Implementations log DOM errors and carry on,
//! because nothing a surface does may leave the form unusable.

use crate::field::ContactField;

/// Semantic category of the status region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
	Success,
	Error,
}

/// Name/value pairs collected from the form, in document order.
pub type FormData = Vec<(String, String)>;

/// Operations the controller needs from the page.
///
/// Hints are handed back to the controller as [`Self::Hint`] values; the
/// controller owns the association between a field and its hint and is the
/// only caller that creates or removes them.
pub trait FormSurface {
	/// Handle to a rendered hint.
	type Hint;

	/// Current value of `field`, or `None` when the control reports none.
	fn field_value(&self, field: ContactField) -> Option<String>;

	/// Sets or removes the `aria-invalid` marking on `field`.
	fn set_invalid(&self, field: ContactField, invalid: bool);

	/// Renders a new hint next to `field`.
	fn attach_hint(&self, field: ContactField, message: &str) -> Self::Hint;

	/// Replaces the text of an existing hint.
	fn update_hint(&self, hint: &Self::Hint, message: &str);

	/// Removes a hint from the page.
	fn detach_hint(&self, hint: Self::Hint);

	/// Moves input focus to `field`.
	fn focus(&self, field: ContactField);

	/// Shows `text` in the status region.
	fn show_status(&self, kind: StatusKind, text: &str);

	/// Empties the status region.
	fn clear_status(&self);

	/// Current label of the submit control.
	///
	/// `None` when the control carries no label of its own, such as an
	/// `<input type="submit">` without a `value`, which shows the browser's
	/// default text.
	fn submit_label(&self) -> Option<String>;

	/// Replaces the label of the submit control.
	fn set_submit_label(&self, label: &str);

	/// Drops the control's own label so the browser default shows again.
	fn clear_submit_label(&self);

	/// Enables or disables the submit control.
	fn set_submit_disabled(&self, disabled: bool);

	/// Restores every control to its initial value.
	fn reset(&self);

	/// Collects the data the form would submit natively.
	fn form_data(&self) -> FormData;

	/// Submission target.
	fn action(&self) -> String;

	/// Raw `method` attribute, if any.
	fn method(&self) -> Option<String>;
}
