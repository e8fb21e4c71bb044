//! Communication over the IEEE-488 (GPIB) bus
//!
//! A safe interface to the [linux-gpib] C library. Open a [`Board`],
//! then open one [`Device`] per instrument; all calls into the library
//! are serialized by a process-wide bus lock so that the library's
//! status globals are read race-free. The raw C surface lives in the
//! `gpib-sys` crate.
//!
//! To use it you must install <https://linux-gpib.sourceforge.io/>.
//!
//! [linux-gpib]: https://linux-gpib.sourceforge.io/
use ::std::ffi::CStr;

use ::gpib_sys as sys;

pub mod addr;
pub mod board;
pub mod device;
pub mod error;
pub mod options;
pub mod status;

mod registry;
mod timeout;

pub use self::addr::Address;
pub use self::board::Board;
pub use self::device::Device;
pub use self::error::{Error, IberrCode, Result};
pub use self::options::Options;
pub use self::status::{LineStatus, Status};

/// Returns the linux-gpib library version string.
pub fn library_version() -> String {
	let _bus = registry::lock();
	version_locked()
}

/// Version lookup for callers that already hold the bus lock.
pub(crate) fn version_locked() -> String {
	let mut p: *mut sys::c_char = ::core::ptr::null_mut();
	unsafe { sys::ibvers(&mut p) };
	if p.is_null() {
		return String::new();
	}
	unsafe { CStr::from_ptr(p) }.to_string_lossy().into_owned()
}
