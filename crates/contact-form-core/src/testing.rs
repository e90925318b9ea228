//! In-memory doubles for the controller seams.
//!
//! [`MemorySurface`] behaves like the browser form without a DOM,
//! [`ScriptedTransport`] replays queued responses and [`ManualTimer`] lets a
//! test decide when delays elapse. All three are `Clone` and share state
//! between clones, so a test can keep a copy after handing one to the
//! controller.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};

use crate::error::TransportError;
use crate::field::ContactField;
use crate::surface::{FormData, FormSurface, StatusKind};
use crate::transport::{SubmitRequest, Timer, Transport, TransportResponse};

/// Values that pass every field rule.
pub const VALID_VALUES: [(ContactField, &str); 5] = [
	(ContactField::Name, "Jo"),
	(ContactField::Email, "a@b.co"),
	(ContactField::Phone, "+503 7000-0000"),
	(ContactField::Subject, "Support"),
	(ContactField::Message, "Hello there!!"),
];

/// Handle to a hint rendered by [`MemorySurface`].
#[derive(Debug, PartialEq, Eq)]
pub struct MemoryHint(u64);

#[derive(Debug, Default)]
struct SurfaceState {
	values: BTreeMap<ContactField, Option<String>>,
	extra_fields: Vec<(String, String)>,
	invalid: BTreeSet<ContactField>,
	hints: BTreeMap<u64, (ContactField, String)>,
	next_hint: u64,
	status: Option<(StatusKind, String)>,
	focused: Vec<ContactField>,
	submit_label: Option<String>,
	submit_disabled: bool,
	action: String,
	method: Option<String>,
	resets: usize,
}

/// A form held in memory.
///
/// Fields start empty (`Some("")`), the submit label is `Enviar` and the form
/// posts to `/contact` with no `method` attribute.
#[derive(Debug, Clone)]
pub struct MemorySurface {
	state: Rc<RefCell<SurfaceState>>,
}

impl Default for MemorySurface {
	fn default() -> Self {
		Self::new()
	}
}

impl MemorySurface {
	pub fn new() -> Self {
		let values = ContactField::ALL
			.into_iter()
			.map(|field| (field, Some(String::new())))
			.collect();
		Self {
			state: Rc::new(RefCell::new(SurfaceState {
				values,
				submit_label: Some("Enviar".to_string()),
				action: "/contact".to_string(),
				..SurfaceState::default()
			})),
		}
	}

	/// Types `value` into `field`.
	pub fn set_value(&self, field: ContactField, value: impl Into<String>) {
		self.state
			.borrow_mut()
			.values
			.insert(field, Some(value.into()));
	}

	/// Makes `field` report no value at all.
	pub fn clear_value(&self, field: ContactField) {
		self.state.borrow_mut().values.insert(field, None);
	}

	/// Fills every field with [`VALID_VALUES`].
	pub fn fill_valid(&self) {
		for (field, value) in VALID_VALUES {
			self.set_value(field, value);
		}
	}

	pub fn value(&self, field: ContactField) -> Option<String> {
		self.state.borrow().values.get(&field).cloned().flatten()
	}

	/// Adds a named control outside the five fields (hidden input, honeypot).
	pub fn add_extra_field(&self, name: impl Into<String>, value: impl Into<String>) {
		self.state
			.borrow_mut()
			.extra_fields
			.push((name.into(), value.into()));
	}

	pub fn set_action(&self, action: impl Into<String>) {
		self.state.borrow_mut().action = action.into();
	}

	pub fn set_method(&self, method: Option<&str>) {
		self.state.borrow_mut().method = method.map(str::to_string);
	}

	/// Texts of every hint currently rendered for `field`.
	pub fn hints_for(&self, field: ContactField) -> Vec<String> {
		self.state
			.borrow()
			.hints
			.values()
			.filter(|(owner, _)| *owner == field)
			.map(|(_, text)| text.clone())
			.collect()
	}

	/// Total number of rendered hints.
	pub fn hint_count(&self) -> usize {
		self.state.borrow().hints.len()
	}

	pub fn is_invalid(&self, field: ContactField) -> bool {
		self.state.borrow().invalid.contains(&field)
	}

	pub fn status(&self) -> Option<(StatusKind, String)> {
		self.state.borrow().status.clone()
	}

	pub fn status_text(&self) -> Option<String> {
		self.status().map(|(_, text)| text)
	}

	/// Most recently focused field.
	pub fn focused(&self) -> Option<ContactField> {
		self.state.borrow().focused.last().copied()
	}

	pub fn submit_disabled(&self) -> bool {
		self.state.borrow().submit_disabled
	}

	/// How many times the form was reset.
	pub fn reset_count(&self) -> usize {
		self.state.borrow().resets
	}
}

impl FormSurface for MemorySurface {
	type Hint = MemoryHint;

	fn field_value(&self, field: ContactField) -> Option<String> {
		self.value(field)
	}

	fn set_invalid(&self, field: ContactField, invalid: bool) {
		let mut state = self.state.borrow_mut();
		if invalid {
			state.invalid.insert(field);
		} else {
			state.invalid.remove(&field);
		}
	}

	fn attach_hint(&self, field: ContactField, message: &str) -> MemoryHint {
		let mut state = self.state.borrow_mut();
		state.next_hint += 1;
		let id = state.next_hint;
		state.hints.insert(id, (field, message.to_string()));
		MemoryHint(id)
	}

	fn update_hint(&self, hint: &MemoryHint, message: &str) {
		if let Some((_, text)) = self.state.borrow_mut().hints.get_mut(&hint.0) {
			*text = message.to_string();
		}
	}

	fn detach_hint(&self, hint: MemoryHint) {
		self.state.borrow_mut().hints.remove(&hint.0);
	}

	fn focus(&self, field: ContactField) {
		self.state.borrow_mut().focused.push(field);
	}

	fn show_status(&self, kind: StatusKind, text: &str) {
		self.state.borrow_mut().status = Some((kind, text.to_string()));
	}

	fn clear_status(&self) {
		self.state.borrow_mut().status = None;
	}

	fn submit_label(&self) -> Option<String> {
		self.state.borrow().submit_label.clone()
	}

	fn set_submit_label(&self, label: &str) {
		self.state.borrow_mut().submit_label = Some(label.to_string());
	}

	fn clear_submit_label(&self) {
		self.state.borrow_mut().submit_label = None;
	}

	fn set_submit_disabled(&self, disabled: bool) {
		self.state.borrow_mut().submit_disabled = disabled;
	}

	fn reset(&self) {
		let mut state = self.state.borrow_mut();
		for value in state.values.values_mut() {
			*value = Some(String::new());
		}
		state.resets += 1;
	}

	fn form_data(&self) -> FormData {
		let state = self.state.borrow();
		let mut data: FormData = state
			.values
			.iter()
			.filter_map(|(field, value)| {
				value
					.as_ref()
					.map(|value| (field.as_str().to_string(), value.clone()))
			})
			.collect();
		data.extend(state.extra_fields.iter().cloned());
		data
	}

	fn action(&self) -> String {
		self.state.borrow().action.clone()
	}

	fn method(&self) -> Option<String> {
		self.state.borrow().method.clone()
	}
}

type TransportResult = Result<TransportResponse, TransportError>;

enum Scripted {
	Ready(TransportResult),
	Pending(oneshot::Receiver<TransportResult>),
}

/// Completes a response queued with [`ScriptedTransport::push_pending`].
#[derive(Debug)]
pub struct PendingResponse(oneshot::Sender<TransportResult>);

impl PendingResponse {
	pub fn resolve(self, result: TransportResult) {
		// The receiver is gone when the submission was cancelled.
		let _ = self.0.send(result);
	}
}

/// Replays queued results in order and records every request.
///
/// Sending with an empty queue fails with a network error.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
	queue: Rc<RefCell<VecDeque<Scripted>>>,
	requests: Rc<RefCell<Vec<SubmitRequest>>>,
}

impl ScriptedTransport {
	pub fn new() -> Self {
		Self::default()
	}

	/// Queues an HTTP response.
	pub fn push_response(&self, status: u16, body: impl Into<String>) {
		self.push_result(Ok(TransportResponse::new(status, body)));
	}

	/// Queues a transport failure.
	pub fn push_network_error(&self, reason: impl Into<String>) {
		self.push_result(Err(TransportError::Network(reason.into())));
	}

	pub fn push_result(&self, result: TransportResult) {
		self.queue.borrow_mut().push_back(Scripted::Ready(result));
	}

	/// Queues a response the test resolves later.
	pub fn push_pending(&self) -> PendingResponse {
		let (tx, rx) = oneshot::channel();
		self.queue.borrow_mut().push_back(Scripted::Pending(rx));
		PendingResponse(tx)
	}

	/// Requests sent so far.
	pub fn requests(&self) -> Vec<SubmitRequest> {
		self.requests.borrow().clone()
	}
}

impl Transport for ScriptedTransport {
	fn send(&self, request: SubmitRequest) -> LocalBoxFuture<'static, TransportResult> {
		self.requests.borrow_mut().push(request);
		match self.queue.borrow_mut().pop_front() {
			Some(Scripted::Ready(result)) => futures::future::ready(result).boxed_local(),
			Some(Scripted::Pending(rx)) => async move {
				rx.await.unwrap_or_else(|_| {
					Err(TransportError::Network("scripted response dropped".to_string()))
				})
			}
			.boxed_local(),
			None => futures::future::ready(Err(TransportError::Network(
				"no scripted response".to_string(),
			)))
			.boxed_local(),
		}
	}
}

/// A timer whose delays elapse only when the test says so.
#[derive(Clone, Default)]
pub struct ManualTimer {
	pending: Rc<RefCell<Vec<(Duration, oneshot::Sender<()>)>>>,
	requested: Rc<RefCell<Vec<Duration>>>,
}

impl ManualTimer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Every delay requested so far, elapsed or not.
	pub fn requested(&self) -> Vec<Duration> {
		self.requested.borrow().clone()
	}

	/// Number of sleeps still waiting.
	pub fn pending(&self) -> usize {
		self.pending.borrow().len()
	}

	/// Lets every pending sleep finish.
	pub fn elapse_all(&self) {
		for (_, tx) in self.pending.borrow_mut().drain(..) {
			let _ = tx.send(());
		}
	}
}

impl Timer for ManualTimer {
	fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()> {
		let (tx, rx) = oneshot::channel();
		self.requested.borrow_mut().push(delay);
		self.pending.borrow_mut().push((delay, tx));
		async move {
			let _ = rx.await;
		}
		.boxed_local()
	}
}
