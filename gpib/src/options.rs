//! Per-handle configuration
use ::core::fmt;
use ::core::time::Duration;
use ::std::sync::Arc;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

type ActivityFn = dyn Fn(bool) + Send + Sync;

/// Configuration for GPIB communication with a board or device.
///
/// Devices inherit the options of the board they are opened on; pass a
/// modified copy to [`Board::device_with_options`] to override them per
/// device.
///
/// [`Board::device_with_options`]: crate::Board::device_with_options
#[derive(Clone)]
pub struct Options {
	pub(crate) timeout: Duration,
	pub(crate) read_eos: Option<u8>,
	pub(crate) activity: Option<Arc<ActivityFn>>,
}

impl Default for Options {
	fn default() -> Options {
		Options {
			timeout: DEFAULT_TIMEOUT,
			read_eos: None,
			activity: None,
		}
	}
}

impl Options {
	pub fn new() -> Options {
		Options::default()
	}

	/// Sets the timeout for GPIB operations. It defaults to 10 s and
	/// may be changed at runtime with
	/// [`Device::set_timeout`](crate::Device::set_timeout).
	///
	/// The duration is rounded up to one of the discrete values in
	/// <https://linux-gpib.sourceforge.io/doc_html/reference-function-ibtmo.html>;
	/// zero disables the timeout.
	pub fn timeout(mut self, d: Duration) -> Options {
		self.timeout = d;
		self
	}

	/// Terminate reads when the given byte is received. Without this,
	/// the default, reads are terminated when the remote device asserts
	/// EOI.
	pub fn read_eos(mut self, byte: u8) -> Options {
		self.read_eos = Some(byte);
		self
	}

	/// Registers a callback informed of activity on the bus, called
	/// with `true` when an operation starts and `false` when it ends.
	/// This can be used to control an indicator lamp, for example.
	pub fn activity(mut self, f: impl Fn(bool) + Send + Sync + 'static) -> Options {
		self.activity = Some(Arc::new(f));
		self
	}

	/// Fires the activity callback, returning a guard that fires the
	/// "ended" edge when dropped.
	pub(crate) fn signal_activity(&self) -> ActivityGuard {
		match &self.activity {
			Some(f) => {
				f(true);
				ActivityGuard(Some(Arc::clone(f)))
			}
			None => ActivityGuard(None),
		}
	}
}

impl fmt::Debug for Options {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Options")
			.field("timeout", &self.timeout)
			.field("read_eos", &self.read_eos)
			.field("activity", &self.activity.is_some())
			.finish()
	}
}

pub(crate) struct ActivityGuard(Option<Arc<ActivityFn>>);

impl Drop for ActivityGuard {
	fn drop(&mut self) {
		if let Some(f) = &self.0 {
			f(false);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ::std::sync::atomic::{AtomicUsize, Ordering};

	#[test]
	fn defaults() {
		let o = Options::new();
		assert_eq!(o.timeout, Duration::from_secs(10));
		assert_eq!(o.read_eos, None);
		assert!(o.activity.is_none());
	}

	#[test]
	fn activity_guard_fires_both_edges() {
		static EDGES: AtomicUsize = AtomicUsize::new(0);
		let o = Options::new().activity(|on| {
			EDGES.fetch_add(if on { 1 } else { 10 }, Ordering::SeqCst);
		});
		{
			let _g = o.signal_activity();
			assert_eq!(EDGES.load(Ordering::SeqCst), 1);
		}
		assert_eq!(EDGES.load(Ordering::SeqCst), 11);
	}
}
