//! The contact form controller.
//!
//! ## Flow
//!
//! ```text
//! input/change ──▶ field_edited()   clears that field's hint + the status
//!
//! submit ──▶ validate_all() ──invalid──▶ error status, focus first invalid
//!                 │
//!               valid
//!                 ▼
//!         submit control disabled, label "Enviando..."
//!                 │
//!         Transport::send ──2xx──────▶ success status, reset, clear hints
//!                 │        ──non-2xx──▶ server `error` text or generic status
//!                 │        ──Err──────▶ connectivity status
//!                 ▼
//!         submit control restored (always)
//! ```
//!
//! The controller is single-threaded: it is cheap to clone, every clone shares
//! the same state, and it is driven from the browser event loop.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use futures::future::{AbortHandle, Abortable, Aborted, LocalBoxFuture};

use crate::error::{ContactFormError, ContactFormResult};
use crate::field::ContactField;
use crate::settings::ContactFormSettings;
use crate::surface::{FormSurface, StatusKind};
use crate::transport::{SubmitRequest, Timer, Transport};
use crate::{debug_log, info_log, warn_log};

/// Result of a full validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
	/// Invalid fields in validation order.
	pub invalid: Vec<ContactField>,
}

impl ValidationReport {
	/// `true` when every field passed its rule.
	pub fn is_valid(&self) -> bool {
		self.invalid.is_empty()
	}

	/// The field to focus: first invalid one in validation order.
	pub fn first_invalid(&self) -> Option<ContactField> {
		self.invalid.first().copied()
	}
}

/// Identifies one message shown in the status region.
///
/// Every show or clear replaces the token, so a token only matches while its
/// message is still on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusToken(u64);

/// How one submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// Validation failed; nothing was sent.
	Invalid { first_invalid: ContactField },
	/// The endpoint answered 2xx. `token` identifies the success status.
	Sent { status: u16, token: StatusToken },
	/// The endpoint answered with any other status.
	Rejected {
		status: u16,
		message: String,
		/// Whether `message` came from the response body.
		from_server: bool,
	},
	/// No response was obtained.
	Unreachable { reason: String },
	/// The submission task was cancelled before it finished.
	Cancelled,
}

struct Shared<S: FormSurface> {
	surface: S,
	settings: ContactFormSettings,
	hints: RefCell<BTreeMap<ContactField, S::Hint>>,
	in_flight: Cell<bool>,
	status_generation: Cell<u64>,
}

/// Owns the status region, the field hints and the submission state of one
/// contact form.
pub struct FormController<S: FormSurface> {
	shared: Rc<Shared<S>>,
}

impl<S: FormSurface> Clone for FormController<S> {
	fn clone(&self) -> Self {
		Self {
			shared: Rc::clone(&self.shared),
		}
	}
}

impl<S: FormSurface> FormController<S> {
	/// Creates a controller for `surface`.
	///
	/// Fails when `settings` do not validate.
	pub fn new(surface: S, settings: ContactFormSettings) -> ContactFormResult<Self> {
		settings.validate()?;
		Ok(Self {
			shared: Rc::new(Shared {
				surface,
				settings,
				hints: RefCell::new(BTreeMap::new()),
				in_flight: Cell::new(false),
				status_generation: Cell::new(0),
			}),
		})
	}

	pub fn surface(&self) -> &S {
		&self.shared.surface
	}

	pub fn settings(&self) -> &ContactFormSettings {
		&self.shared.settings
	}

	/// Whether a submission is waiting for its response.
	pub fn is_submitting(&self) -> bool {
		self.shared.in_flight.get()
	}

	/// Whether `field` currently shows a hint.
	pub fn has_hint(&self, field: ContactField) -> bool {
		self.shared.hints.borrow().contains_key(&field)
	}

	/// Re-checks all five fields in validation order.
	///
	/// Clears the status region first. Invalid fields get their hint (created
	/// or updated) and `aria-invalid`; valid fields lose both.
	pub fn validate_all(&self) -> ValidationReport {
		self.clear_status();

		let mut invalid = Vec::new();
		for field in ContactField::ALL {
			let value = self.shared.surface.field_value(field);
			if field.is_valid(value.as_deref()) {
				self.clear_field_error(field);
			} else {
				self.show_field_error(field);
				invalid.push(field);
			}
		}

		debug_log!("validation pass: invalid = {:?}", invalid);
		ValidationReport { invalid }
	}

	/// Live correction: the user touched `field`.
	///
	/// Drops the field's hint and the status whatever the new value is;
	/// re-validation waits for the next submit.
	pub fn field_edited(&self, field: ContactField) {
		self.clear_field_error(field);
		self.clear_status();
	}

	/// Shows `text` in the status region.
	pub fn show_status(&self, kind: StatusKind, text: &str) -> StatusToken {
		let token = self.next_status_token();
		self.shared.surface.show_status(kind, text);
		token
	}

	/// Empties the status region.
	pub fn clear_status(&self) {
		self.next_status_token();
		self.shared.surface.clear_status();
	}

	/// Clears the status region if `token` is still the message on screen.
	///
	/// Returns whether it cleared anything.
	pub fn expire_status(&self, token: StatusToken) -> bool {
		if self.shared.status_generation.get() != token.0 {
			debug_log!("status changed since {:?}; leaving it in place", token);
			return false;
		}
		self.clear_status();
		true
	}

	/// Runs one submit attempt against `transport`.
	///
	/// Returns [`ContactFormError::AlreadySubmitting`] when another attempt
	/// is in flight. Every other path yields an outcome, and the submit control
	/// is restored when this future completes or is dropped.
	pub async fn submit<T>(&self, transport: &T) -> ContactFormResult<SubmitOutcome>
	where
		T: Transport + ?Sized,
	{
		if self.is_submitting() {
			warn_log!("submit ignored: a submission is already in flight");
			return Err(ContactFormError::AlreadySubmitting);
		}

		let messages = &self.shared.settings.messages;
		self.clear_status();

		let report = self.validate_all();
		if let Some(first_invalid) = report.first_invalid() {
			self.show_status(StatusKind::Error, &messages.invalid_form);
			self.shared.surface.focus(first_invalid);
			debug_log!("submit blocked by validation, focusing {}", first_invalid);
			return Ok(SubmitOutcome::Invalid { first_invalid });
		}

		let request = self.build_request();
		let _busy = BusyGuard::engage(self);
		info_log!("submitting contact form: {} {}", request.method, request.action);

		let outcome = match transport.send(request).await {
			Ok(response) if response.is_success() => {
				let token = self.show_status(StatusKind::Success, &messages.sent);
				self.shared.surface.reset();
				self.clear_all_field_errors();
				info_log!("contact form accepted with status {}", response.status);
				SubmitOutcome::Sent {
					status: response.status,
					token,
				}
			}
			Ok(response) => {
				let server_message = response.error_message();
				let from_server = server_message.is_some();
				let message = server_message.unwrap_or_else(|| messages.rejected.clone());
				self.show_status(StatusKind::Error, &message);
				warn_log!(
					"contact form rejected with status {}: {}",
					response.status,
					message
				);
				SubmitOutcome::Rejected {
					status: response.status,
					message,
					from_server,
				}
			}
			Err(err) => {
				self.show_status(StatusKind::Error, &messages.network_failure);
				warn_log!("contact form could not be sent: {}", err);
				SubmitOutcome::Unreachable {
					reason: err.to_string(),
				}
			}
		};

		Ok(outcome)
	}

	/// Wraps [`submit`](Self::submit) in a cancellable task.
	///
	/// `on_complete` receives the result once the attempt ends (a cancelled
	/// attempt reports [`SubmitOutcome::Cancelled`]). After a successful send
	/// the task then waits the configured delay on `timer` and expires the
	/// success status.
	pub fn submit_task<T, M, F>(&self, transport: T, timer: M, on_complete: F) -> SubmitTask
	where
		S: 'static,
		T: Transport + 'static,
		M: Timer + 'static,
		F: FnOnce(&ContactFormResult<SubmitOutcome>) + 'static,
	{
		let (handle, registration) = AbortHandle::new_pair();
		let controller = self.clone();
		let delay = self.shared.settings.success_clear_delay();

		let future = async move {
			let attempt = {
				let controller = controller.clone();
				async move { controller.submit(&transport).await }
			};
			let result = match Abortable::new(attempt, registration).await {
				Ok(result) => result,
				Err(Aborted) => {
					info_log!("contact form submission cancelled");
					Ok(SubmitOutcome::Cancelled)
				}
			};

			let sent_token = match &result {
				Ok(SubmitOutcome::Sent { token, .. }) => Some(*token),
				_ => None,
			};
			on_complete(&result);

			if let Some(token) = sent_token {
				timer.sleep(delay).await;
				controller.expire_status(token);
			}
		};

		SubmitTask {
			future: Box::pin(future),
			handle: SubmitHandle(handle),
		}
	}

	fn build_request(&self) -> SubmitRequest {
		let surface = &self.shared.surface;
		let settings = &self.shared.settings;
		SubmitRequest {
			action: surface.action(),
			method: settings.resolve_method(surface.method().as_deref()),
			headers: vec![("Accept".to_string(), settings.accept.clone())],
			fields: surface.form_data(),
		}
	}

	fn show_field_error(&self, field: ContactField) {
		let surface = &self.shared.surface;
		let message = self.shared.settings.messages.hint(field);
		surface.set_invalid(field, true);

		let mut hints = self.shared.hints.borrow_mut();
		match hints.get(&field) {
			Some(hint) => surface.update_hint(hint, message),
			None => {
				let hint = surface.attach_hint(field, message);
				hints.insert(field, hint);
			}
		}
	}

	fn clear_field_error(&self, field: ContactField) {
		let surface = &self.shared.surface;
		surface.set_invalid(field, false);
		let hint = self.shared.hints.borrow_mut().remove(&field);
		if let Some(hint) = hint {
			surface.detach_hint(hint);
		}
	}

	fn clear_all_field_errors(&self) {
		for field in ContactField::ALL {
			self.clear_field_error(field);
		}
	}

	fn next_status_token(&self) -> StatusToken {
		let next = self.shared.status_generation.get().wrapping_add(1);
		self.shared.status_generation.set(next);
		StatusToken(next)
	}
}

/// Holds the submit control in its "sending" state.
struct BusyGuard<'a, S: FormSurface> {
	controller: &'a FormController<S>,
	original_label: Option<String>,
}

impl<'a, S: FormSurface> BusyGuard<'a, S> {
	fn engage(controller: &'a FormController<S>) -> Self {
		let surface = &controller.shared.surface;
		let original_label = surface.submit_label();
		controller.shared.in_flight.set(true);
		surface.set_submit_disabled(true);
		surface.set_submit_label(&controller.shared.settings.messages.sending_label);
		Self {
			controller,
			original_label,
		}
	}
}

impl<S: FormSurface> Drop for BusyGuard<'_, S> {
	fn drop(&mut self) {
		let shared = &self.controller.shared;
		shared.surface.set_submit_disabled(false);
		match self.original_label.as_deref() {
			Some(label) => shared.surface.set_submit_label(label),
			None => shared.surface.clear_submit_label(),
		}
		shared.in_flight.set(false);
	}
}

/// A submission running as a future.
///
/// Spawn it on the local executor (`wasm_bindgen_futures::spawn_local` in the
/// browser). Use [`handle`](Self::handle) to cancel it.
pub struct SubmitTask {
	future: LocalBoxFuture<'static, ()>,
	handle: SubmitHandle,
}

impl SubmitTask {
	pub fn handle(&self) -> SubmitHandle {
		self.handle.clone()
	}
}

impl Future for SubmitTask {
	type Output = ();

	fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
		self.future.as_mut().poll(cx)
	}
}

/// Cancels a [`SubmitTask`].
#[derive(Debug, Clone)]
pub struct SubmitHandle(AbortHandle);

impl SubmitHandle {
	/// Cancels the request if it is still pending.
	///
	/// The submit control is restored and `on_complete` sees
	/// [`SubmitOutcome::Cancelled`]. Once the response is in, cancelling has
	/// no effect.
	pub fn cancel(&self) {
		self.0.abort();
	}

	pub fn is_cancelled(&self) -> bool {
		self.0.is_aborted()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{MemorySurface, ScriptedTransport};
	use futures::executor::block_on;
	use rstest::rstest;

	fn controller() -> FormController<MemorySurface> {
		FormController::new(MemorySurface::new(), ContactFormSettings::default()).unwrap()
	}

	#[rstest]
	fn test_invalid_settings_rejected() {
		let settings = ContactFormSettings {
			default_method: "BREW".to_string(),
			..ContactFormSettings::default()
		};
		let result = FormController::new(MemorySurface::new(), settings);
		assert!(matches!(result, Err(ContactFormError::Settings(_))));
	}

	#[rstest]
	fn test_empty_form_reports_every_field_in_order() {
		let controller = controller();
		let report = controller.validate_all();
		assert!(!report.is_valid());
		assert_eq!(report.invalid, ContactField::ALL.to_vec());
		assert_eq!(report.first_invalid(), Some(ContactField::Name));
	}

	#[rstest]
	fn test_repeated_passes_keep_one_hint_per_field() {
		let controller = controller();
		controller.validate_all();
		controller.validate_all();
		controller.validate_all();
		for field in ContactField::ALL {
			assert_eq!(controller.surface().hints_for(field).len(), 1);
		}
	}

	#[rstest]
	fn test_status_token_expires_only_current_message() {
		let controller = controller();
		let first = controller.show_status(StatusKind::Success, "ok");
		let second = controller.show_status(StatusKind::Error, "later");
		assert!(!controller.expire_status(first));
		assert_eq!(controller.surface().status_text(), Some("later".to_string()));
		assert!(controller.expire_status(second));
		assert_eq!(controller.surface().status_text(), None);
	}

	#[rstest]
	fn test_busy_guard_restores_on_drop() {
		let controller = controller();
		controller.surface().set_submit_label("Enviar");
		{
			let _guard = BusyGuard::engage(&controller);
			assert!(controller.is_submitting());
			assert!(controller.surface().submit_disabled());
			assert_eq!(controller.surface().submit_label().as_deref(), Some("Enviando..."));
		}
		assert!(!controller.is_submitting());
		assert!(!controller.surface().submit_disabled());
		assert_eq!(controller.surface().submit_label().as_deref(), Some("Enviar"));
	}

	#[rstest]
	fn test_busy_guard_clears_label_that_was_never_set() {
		let controller = controller();
		controller.surface().clear_submit_label();
		{
			let _guard = BusyGuard::engage(&controller);
			assert_eq!(controller.surface().submit_label().as_deref(), Some("Enviando..."));
		}
		assert_eq!(controller.surface().submit_label(), None);
	}

	#[rstest]
	fn test_request_uses_form_method_and_accept_header() {
		let controller = controller();
		let surface = controller.surface();
		surface.fill_valid();
		surface.set_method(Some("put"));
		surface.set_action("/api/contact");
		let transport = ScriptedTransport::new();
		transport.push_response(204, "");

		block_on(controller.submit(&transport)).unwrap();

		let requests = transport.requests();
		assert_eq!(requests.len(), 1);
		assert_eq!(requests[0].method, "PUT");
		assert_eq!(requests[0].action, "/api/contact");
		assert_eq!(requests[0].header("Accept"), Some("application/json"));
	}
}
