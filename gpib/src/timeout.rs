//! Duration to timeout-code quantization
use ::core::time::Duration;

use ::gpib_sys as sys;
use ::libc::c_int;

/// Returns a timeout code not shorter than the specified duration. The
/// effective timeout may be longer, up to the library maximum; zero
/// disables the timeout entirely.
///
/// The discrete values are listed in
/// <https://linux-gpib.sourceforge.io/doc_html/reference-function-ibtmo.html>.
pub(crate) fn code(d: Duration) -> c_int {
	const TABLE: [(Duration, c_int); 17] = [
		(Duration::ZERO, sys::TNONE),
		(Duration::from_micros(10), sys::T10us),
		(Duration::from_micros(30), sys::T30us),
		(Duration::from_micros(100), sys::T100us),
		(Duration::from_micros(300), sys::T300us),
		(Duration::from_millis(1), sys::T1ms),
		(Duration::from_millis(3), sys::T3ms),
		(Duration::from_millis(10), sys::T10ms),
		(Duration::from_millis(30), sys::T30ms),
		(Duration::from_millis(100), sys::T100ms),
		(Duration::from_millis(300), sys::T300ms),
		(Duration::from_secs(1), sys::T1s),
		(Duration::from_secs(3), sys::T3s),
		(Duration::from_secs(10), sys::T10s),
		(Duration::from_secs(30), sys::T30s),
		(Duration::from_secs(100), sys::T100s),
		(Duration::from_secs(300), sys::T300s),
	];
	for (limit, code) in TABLE {
		if d <= limit {
			return code;
		}
	}
	sys::T1000s
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_disables() {
		assert_eq!(code(Duration::ZERO), sys::TNONE);
	}

	#[test]
	fn exact_values_map_to_their_code() {
		assert_eq!(code(Duration::from_micros(10)), sys::T10us);
		assert_eq!(code(Duration::from_millis(1)), sys::T1ms);
		assert_eq!(code(Duration::from_secs(10)), sys::T10s);
	}

	#[test]
	fn rounds_up_between_steps() {
		assert_eq!(code(Duration::from_micros(1)), sys::T10us);
		assert_eq!(code(Duration::from_millis(2)), sys::T3ms);
		assert_eq!(code(Duration::from_secs(11)), sys::T30s);
	}

	#[test]
	fn saturates_at_the_maximum() {
		assert_eq!(code(Duration::from_secs(301)), sys::T1000s);
		assert_eq!(code(Duration::from_secs(100_000)), sys::T1000s);
	}
}
