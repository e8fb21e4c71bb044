//! GPIB device addressing
use ::core::fmt;

use ::gpib_sys as sys;
use ::libc::c_uint;

/// A GPIB device address, composed of a primary and a secondary
/// address. If the secondary address is zero, as is the case with many
/// devices, the packed value equals the primary address.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(sys::Addr4882_t);

impl Address {
	/// An address with no secondary part.
	pub const fn new(pad: u8) -> Address {
		Address::with_secondary(pad, 0)
	}

	/// Combine a primary and secondary address.
	pub const fn with_secondary(pad: u8, sad: u8) -> Address {
		Address(sys::MakeAddr(pad as c_uint, sad as c_uint))
	}

	/// Reinterpret a packed `Addr4882_t`.
	pub const fn from_packed(raw: sys::Addr4882_t) -> Address {
		Address(raw)
	}

	/// Returns the primary address.
	pub const fn primary(self) -> u8 {
		sys::GetPAD(self.0) as u8
	}

	/// Returns the secondary address.
	pub const fn secondary(self) -> u8 {
		sys::GetSAD(self.0) as u8
	}

	/// Returns the packed form passed to the C calls.
	pub const fn packed(self) -> sys::Addr4882_t {
		self.0
	}
}

impl From<u8> for Address {
	fn from(pad: u8) -> Address {
		Address::new(pad)
	}
}

impl fmt::Display for Address {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.secondary() == 0 {
			write!(f, "{}", self.primary())
		} else {
			write!(f, "{}/{}", self.primary(), self.secondary())
		}
	}
}

impl fmt::Debug for Address {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn primary_only_packs_to_itself() {
		let a = Address::new(22);
		assert_eq!(a.packed(), 22);
		assert_eq!(a.primary(), 22);
		assert_eq!(a.secondary(), 0);
		assert_eq!(a.to_string(), "22");
	}

	#[test]
	fn secondary_lands_in_high_byte() {
		let a = Address::with_secondary(9, 0x67);
		assert_eq!(a.packed(), 0x6709);
		assert_eq!(a.primary(), 9);
		assert_eq!(a.secondary(), 0x67);
		assert_eq!(a.to_string(), "9/103");
	}

	#[test]
	fn round_trips_through_packed_form() {
		let a = Address::with_secondary(3, 0x61);
		assert_eq!(Address::from_packed(a.packed()), a);
	}
}
