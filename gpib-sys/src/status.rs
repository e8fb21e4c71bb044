//! The library's status globals
//!
//! linux-gpib updates `ibsta`, `iberr`, `ibcnt` and `ibcntl` after every
//! call, so they are declared `static mut`. They are process-wide and
//! not synchronized; the `ThreadIb*` accessors below return per-thread
//! copies maintained by the library.
use ::libc::{c_int, c_long};

#[link(name = "gpib")]
extern "C" {
	/// Status word of the most recent call.
	pub static mut ibsta: c_int;
	/// Error code of the most recent failing call.
	pub static mut iberr: c_int;
	/// Byte count of the most recent I/O call (errno after EDVR/EFSO).
	pub static mut ibcnt: c_int;
	/// Long variant of `ibcnt`.
	pub static mut ibcntl: c_long;

	pub fn ThreadIbsta() -> c_int;
	pub fn ThreadIberr() -> c_int;
	pub fn ThreadIbcnt() -> c_int;
	pub fn ThreadIbcntl() -> c_long;
}
