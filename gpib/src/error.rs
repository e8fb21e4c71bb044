//! Error taxonomy for bus operations
use ::core::fmt;
use ::std::io;

use ::gpib_sys as sys;
use ::libc::c_int;

use crate::addr::Address;
use crate::status;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Time limit on an I/O or wait call exceeded (`TIMO`).
	#[error("timed out")]
	Timeout,
	/// A failing call with a named `iberr` code.
	#[error("{0}")]
	Bus(IberrCode),
	/// `EDVR`: an OS error surfaced through the driver; errno taken
	/// from `ibcnt`.
	#[error("EDVR: {0}")]
	Driver(#[source] io::Error),
	/// `EFSO`: a file system operation failed; errno taken from `ibcnt`.
	#[error("EFSO: {0}")]
	FileSystem(#[source] io::Error),
	#[error("board in use: {0}")]
	BoardInUse(c_int),
	#[error("device already in use: {0}")]
	DeviceInUse(Address),
	#[error("already closed")]
	Closed,
	#[error("board does not support monitoring NDAC")]
	NdacNotSupported,
	#[error("ibdev failed without setting an error")]
	OpenFailed,
}

impl Error {
	/// Returns `Ok(())` unless `ibsta` has the `TIMO` or `ERR` bit set.
	///
	/// For non-timeout errors this reads the `iberr` and `ibcnt`
	/// globals, so it must be called before any further library call
	/// overwrites them.
	pub fn from_ibsta(ibsta: c_int) -> Result<()> {
		if ibsta & sys::TIMO != 0 {
			return Err(Error::Timeout);
		}
		if ibsta & sys::ERR != 0 {
			return Err(match status::iberr() {
				sys::EDVR => Error::Driver(io::Error::from_raw_os_error(status::ibcnt())),
				sys::EFSO => Error::FileSystem(io::Error::from_raw_os_error(status::ibcnt())),
				code => Error::Bus(IberrCode(code)),
			});
		}
		Ok(())
	}
}

impl From<Error> for io::Error {
	fn from(e: Error) -> io::Error {
		let kind = match &e {
			Error::Timeout => io::ErrorKind::TimedOut,
			Error::Closed => io::ErrorKind::NotConnected,
			_ => io::ErrorKind::Other,
		};
		io::Error::new(kind, e)
	}
}

/// A raw `iberr` code that knows its mnemonic.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct IberrCode(pub c_int);

impl IberrCode {
	pub fn as_str(&self) -> Option<&'static str> {
		macro_rules! v {
			( $($name:ident)* ) => {
				match self.0 {
				$( sys::$name => Some(stringify!($name)), )*
				_ => None,
				}
			};
		}
		v! {
			EDVR
			ECIC
			ENOL
			EADR
			EARG
			ESAC
			EABO
			ENEB
			EDMA
			EOIP
			ECAP
			EFSO
			EBUS
			ESTB
			ESRQ
			ETAB
		}
	}
}

impl fmt::Display for IberrCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.as_str() {
			Some(s) => f.write_str(s),
			None => write!(f, "iberr {}", self.0),
		}
	}
}

impl fmt::Debug for IberrCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ok_and_timeout_paths() {
		assert!(Error::from_ibsta(sys::CMPL | sys::CIC).is_ok());
		assert!(matches!(
			Error::from_ibsta(sys::ERR | sys::TIMO | sys::CMPL),
			Err(Error::Timeout)
		));
	}

	#[test]
	fn timeout_maps_to_io_timed_out() {
		let e = io::Error::from(Error::Timeout);
		assert_eq!(e.kind(), io::ErrorKind::TimedOut);
	}

	#[test]
	fn iberr_mnemonics() {
		assert_eq!(IberrCode(sys::ECIC).to_string(), "ECIC");
		assert_eq!(IberrCode(sys::ETAB).to_string(), "ETAB");
		assert_eq!(IberrCode(99).to_string(), "iberr 99");
	}

	#[test]
	fn bus_error_displays_mnemonic() {
		assert_eq!(Error::Bus(IberrCode(sys::ENOL)).to_string(), "ENOL");
	}
}
