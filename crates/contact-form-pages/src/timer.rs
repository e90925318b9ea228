//! `setTimeout`-backed [`Timer`](contact_form_core::Timer).

use std::time::Duration;

/// Milliseconds to pass to `setTimeout`, saturating at `u32::MAX`.
pub fn timeout_millis(delay: Duration) -> u32 {
	u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(target_arch = "wasm32")]
pub use self::browser::TimeoutTimer;

#[cfg(target_arch = "wasm32")]
mod browser {
	use std::time::Duration;

	use contact_form_core::Timer;
	use futures::future::{FutureExt, LocalBoxFuture};
	use gloo_timers::future::TimeoutFuture;

	use super::timeout_millis;

	/// Sleeps on the browser event loop.
	#[derive(Debug, Clone, Copy, Default)]
	pub struct TimeoutTimer;

	impl Timer for TimeoutTimer {
		fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()> {
			TimeoutFuture::new(timeout_millis(delay)).boxed_local()
		}
	}
}
