//! Read-only view onto the library's status globals
//!
//! One pure wrapper function per value: the globals themselves stay
//! owned by linux-gpib, which overwrites them on every call. None of
//! these functions block, lock, allocate or fail; each is a plain read
//! of whatever the library last stored. Reading while another thread is
//! in a bus call observes whatever the library exhibits, so the
//! [`Board`](crate::Board)/[`Device`](crate::Device) layer only reads
//! them while holding the bus lock.
use ::core::fmt;
use ::core::ptr::addr_of;

use ::gpib_sys as sys;
use ::libc::{c_int, c_long};

/// Returns the number of bytes sent or received by the last I/O
/// operation. It is also set to the value of errno after EDVR or EFSO
/// errors.
pub fn ibcnt() -> c_int {
	unsafe { addr_of!(sys::ibcnt).read() }
}

/// Returns the long variant of [`ibcnt`].
pub fn ibcntl() -> c_long {
	unsafe { addr_of!(sys::ibcntl).read() }
}

/// Returns the last error code. The meaning of each possible value is
/// summarized in
/// <https://linux-gpib.sourceforge.io/doc_html/reference-globals-iberr.html>.
pub fn iberr() -> c_int {
	unsafe { addr_of!(sys::iberr).read() }
}

/// Returns the last status word. The meaning of the bits is summarized
/// in
/// <https://linux-gpib.sourceforge.io/doc_html/reference-globals-ibsta.html>.
pub fn ibsta() -> Status {
	Status::from_bits_retain(unsafe { addr_of!(sys::ibsta).read() })
}

/// Returns the reserved address that terminates address lists and
/// signals "no secondary address".
pub const fn noaddr() -> sys::Addr4882_t {
	sys::NOADDR
}

/// Returns the reserved termination value that makes 488.2 reads stop
/// only on the END message.
pub const fn stopend() -> c_int {
	sys::STOPend
}

bitflags::bitflags! {
	/// The `ibsta` status word.
	#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
	pub struct Status: c_int {
		const ERR = sys::ERR;
		const TIMO = sys::TIMO;
		const END = sys::END;
		const SRQI = sys::SRQI;
		const RQS = sys::RQS;
		const SPOLL = sys::SPOLL;
		const EVENT = sys::EVENT;
		const CMPL = sys::CMPL;
		const LOK = sys::LOK;
		const REM = sys::REM;
		const CIC = sys::CIC;
		const ATN = sys::ATN;
		const TACS = sys::TACS;
		const LACS = sys::LACS;
		const DTAS = sys::DTAS;
		const DCAS = sys::DCAS;
	}
}

impl Status {
	pub fn is_err(&self) -> bool {
		self.contains(Status::ERR)
	}

	pub fn is_timeout(&self) -> bool {
		self.contains(Status::TIMO)
	}
}

/// Names the set bits from most- to least-significant, e.g. `ERR TIMO CMPL`.
impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut sep = "";
		for (name, _) in self.iter_names() {
			f.write_str(sep)?;
			f.write_str(name)?;
			sep = " ";
		}
		Ok(())
	}
}

/// Bus control-line snapshot from `iblines`.
///
/// The low byte says which lines the board can monitor, the high byte
/// carries their current state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LineStatus(pub c_int);

impl LineStatus {
	const LINES: [(c_int, c_int, &'static str, &'static str); 8] = [
		(sys::ValidEOI, sys::BusEOI, "eoi", "EOI"),
		(sys::ValidATN, sys::BusATN, "atn", "ATN"),
		(sys::ValidSRQ, sys::BusSRQ, "srq", "SRQ"),
		(sys::ValidREN, sys::BusREN, "ren", "REN"),
		(sys::ValidIFC, sys::BusIFC, "ifc", "IFC"),
		(sys::ValidNRFD, sys::BusNRFD, "nrfd", "NRFD"),
		(sys::ValidNDAC, sys::BusNDAC, "ndac", "NDAC"),
		(sys::ValidDAV, sys::BusDAV, "dav", "DAV"),
	];

	/// Whether the board can monitor the given `Valid*` line.
	pub fn can_monitor(&self, valid: c_int) -> bool {
		self.0 & valid != 0
	}

	/// Whether the given `Bus*` line is currently asserted.
	pub fn is_asserted(&self, bus: c_int) -> bool {
		self.0 & bus != 0
	}
}

/// Renders the raw value in hex, then each monitorable line: uppercase
/// when asserted, lowercase when not.
impl fmt::Display for LineStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:x}", self.0)?;
		for &(valid, bit, unset, set) in &Self::LINES {
			if self.0 & valid != 0 {
				f.write_str(" ")?;
				f.write_str(if self.0 & bit != 0 { set } else { unset })?;
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sentinels_match_published_values() {
		assert_eq!(noaddr(), 0xffff);
		assert_eq!(stopend(), 0x100);
	}

	#[test]
	fn status_names_high_bits_first() {
		let s = Status::from_bits_retain(sys::ERR | sys::TIMO | sys::CMPL);
		assert_eq!(s.to_string(), "ERR TIMO CMPL");
		assert!(s.is_err());
		assert!(s.is_timeout());
	}

	#[test]
	fn status_empty_formats_empty() {
		assert_eq!(Status::empty().to_string(), "");
	}

	#[test]
	fn line_status_renders_valid_lines() {
		// All lines monitorable, only SRQ and DAV asserted.
		let l = LineStatus(sys::ValidALL | sys::BusSRQ | sys::BusDAV);
		assert_eq!(l.to_string(), "21ff eoi atn SRQ ren ifc nrfd ndac DAV");
		assert!(l.can_monitor(sys::ValidSRQ));
		assert!(l.is_asserted(sys::BusSRQ));
		assert!(!l.is_asserted(sys::BusEOI));
	}

	#[test]
	fn line_status_skips_unmonitorable_lines() {
		let l = LineStatus(sys::ValidNDAC | sys::BusNDAC | sys::BusEOI);
		assert_eq!(l.to_string(), "8202 NDAC");
	}
}
