//! GPIB interface boards
use ::std::sync::Arc;

use ::gpib_sys as sys;
use ::libc::{c_int, c_short};
use ::tracing::{debug, warn};

use crate::addr::Address;
use crate::device::Device;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::{registry, timeout, version_locked};

/// A GPIB interface board.
///
/// At most one `Board` per index can be open at a time; the index is
/// released again once the board handle and all devices opened through
/// it are gone.
pub struct Board {
	shared: Arc<BoardShared>,
}

pub(crate) struct BoardShared {
	pub(crate) index: c_int,
	pub(crate) options: Options,
}

impl Drop for BoardShared {
	fn drop(&mut self) {
		registry::lock().release_board(self.index);
	}
}

impl Board {
	/// Opens board `index` with default options. Index 0 corresponds to
	/// `/dev/gpib0`.
	pub fn open(index: c_int) -> Result<Board> {
		Board::with_options(index, Options::new())
	}

	pub fn with_options(index: c_int, options: Options) -> Result<Board> {
		let mut bus = registry::lock();
		bus.claim_board(index)?;
		debug!(board = index, version = %version_locked(), "opened board");
		Ok(Board {
			shared: Arc::new(BoardShared { index, options }),
		})
	}

	/// Returns the board index.
	pub fn index(&self) -> c_int {
		self.shared.index
	}

	/// Returns the options devices will inherit.
	pub fn options(&self) -> &Options {
		&self.shared.options
	}

	/// Opens a connection to the device at `addr`, inheriting the
	/// board's options.
	pub fn device(&self, addr: impl Into<Address>) -> Result<Device> {
		self.open_device(addr.into(), self.shared.options.clone())
	}

	/// Opens a connection to the device at `addr` with its own options.
	pub fn device_with_options(&self, addr: impl Into<Address>, options: Options) -> Result<Device> {
		self.open_device(addr.into(), options)
	}

	fn open_device(&self, addr: Address, options: Options) -> Result<Device> {
		let index = self.shared.index;
		let eos = match options.read_eos {
			Some(byte) => sys::BIN | sys::REOS | byte as c_int,
			None => 0,
		};

		let mut bus = registry::lock();
		if bus.device_in_use(index, addr) {
			return Err(Error::DeviceInUse(addr));
		}

		let _activity = self.shared.options.signal_activity();

		// The first device on a board puts the bus into remote mode.
		if bus.device_count(index) == 0 {
			Error::from_ibsta(unsafe { sys::ibsre(index, 1) }).map_err(|e| {
				warn!(board = index, error = %e, "failed to enable remote mode");
				e
			})?;
		}

		let pad = addr.primary() as c_int;
		let sad = addr.secondary() as c_int;
		let tmo = timeout::code(options.timeout);
		let ud = unsafe { sys::ibdev(index, pad, sad, tmo, 1 /*eoi*/, eos) };
		if ud == -1 {
			return Err(match Error::from_ibsta(crate::status::ibsta().bits()) {
				Err(e) => {
					warn!(board = index, %addr, pad, sad, error = %e, "failed to open address");
					e
				}
				Ok(()) => {
					warn!(board = index, %addr, pad, sad, "failed to open address: unknown error");
					Error::OpenFailed
				}
			});
		}

		bus.claim_device(index, addr);

		debug!(board = index, %addr, pad, sad, ud, "opened address");
		Ok(Device::new(Arc::clone(&self.shared), addr, ud, options))
	}

	/// Returns the addresses of all devices on the bus.
	///
	/// Probes primary addresses 1 through 30; address 0 is the
	/// controller.
	pub fn enumerate(&self) -> Result<Vec<Address>> {
		let index = self.shared.index;
		let _bus = registry::lock();
		let _activity = self.shared.options.signal_activity();

		let started = ::std::time::Instant::now();

		// Interface clear, so that all devices untalk and unlisten.
		// Some older devices like the HP 3478A, if previously addressed
		// as talker, will write data to the bus as soon as another
		// device is addressed as a listener by ibln.
		Error::from_ibsta(unsafe { sys::ibsic(index) }).map_err(|e| {
			warn!(board = index, error = %e, "ibsic failed");
			e
		})?;

		// Enumeration needs a board that can watch NDAC.
		let mut lines: c_short = 0;
		Error::from_ibsta(unsafe { sys::iblines(index, &mut lines) }).map_err(|e| {
			warn!(board = index, error = %e, "iblines failed");
			e
		})?;
		if lines as c_int & sys::ValidNDAC == 0 {
			warn!(board = index, "board does not support monitoring NDAC");
			return Err(Error::NdacNotSupported);
		}

		let mut found = Vec::new();
		for pad in 1..=30u8 {
			let mut listener: c_short = 0;
			Error::from_ibsta(unsafe { sys::ibln(index, pad as c_int, 0, &mut listener) })
				.map_err(|e| {
					warn!(board = index, pad, error = %e, "ibln failed");
					e
				})?;
			if listener != 0 {
				debug!(board = index, pad, "found device");
				found.push(Address::new(pad));
			}
		}

		debug!(
			board = index,
			count = found.len(),
			elapsed = ?started.elapsed(),
			"enumeration finished"
		);
		Ok(found)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ::serial_test::serial;

	#[test]
	#[serial]
	fn board_index_is_exclusive() {
		let b = Board::open(14).unwrap();
		assert!(matches!(Board::open(14), Err(Error::BoardInUse(14))));
		drop(b);
		let _b = Board::open(14).unwrap();
	}

	#[test]
	#[serial]
	fn distinct_indices_coexist() {
		let _a = Board::open(12).unwrap();
		let _b = Board::open(13).unwrap();
	}
}
