//! Connections to individual GPIB devices
use ::core::time::Duration;
use ::std::io;
use ::std::sync::Arc;
use ::std::time::Instant;

use ::gpib_sys as sys;
use ::libc::{c_char, c_int, c_long, c_short};
use ::tracing::{debug, warn};

use crate::addr::Address;
use crate::board::BoardShared;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::{registry, status, timeout};

const MAX_LOG_DATA: usize = 60;
const MIN_LOG_HIDE: usize = 20; // must be smaller than MAX_LOG_DATA

/// A connection to a single GPIB device.
///
/// All methods acquire the global bus lock for the duration of their
/// execution, making it safe to use multiple devices each from a
/// different thread. Dropping a device closes it.
pub struct Device {
	board: Arc<BoardShared>,
	addr: Address,
	ud: c_int,
	options: Options,
	closed: bool,
}

impl Device {
	pub(crate) fn new(board: Arc<BoardShared>, addr: Address, ud: c_int, options: Options) -> Device {
		Device {
			board,
			addr,
			ud,
			options,
			closed: false,
		}
	}

	/// Returns the address this device was opened on.
	pub fn address(&self) -> Address {
		self.addr
	}

	fn ensure_open(&self) -> Result<()> {
		if self.closed {
			return Err(Error::Closed);
		}
		Ok(())
	}

	/// Gets data from the device. Returns the number of bytes received.
	pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
		let _bus = registry::lock();
		self.ensure_open()?;
		let _activity = self.options.signal_activity();

		let started = Instant::now();
		let sta = unsafe { sys::ibrd(self.ud, buf.as_mut_ptr().cast(), buf.len() as c_long) };
		let took = started.elapsed();
		Error::from_ibsta(sta).map_err(|e| {
			warn!(addr = %self.addr, ud = self.ud, error = %e, "read failed");
			e
		})?;
		let n = status::ibcnt() as usize;

		debug!(addr = %self.addr, data = %fmt_data(&buf[..n]), took = ?took, "read");
		Ok(n)
	}

	/// Sends data to the device. Returns the number of bytes sent.
	pub fn write(&mut self, buf: &[u8]) -> Result<usize> {
		let _bus = registry::lock();
		self.ensure_open()?;
		let _activity = self.options.signal_activity();

		let started = Instant::now();
		let sta = unsafe { sys::ibwrt(self.ud, buf.as_ptr().cast(), buf.len() as c_long) };
		let took = started.elapsed();
		Error::from_ibsta(sta).map_err(|e| {
			warn!(addr = %self.addr, ud = self.ud, error = %e, "write failed");
			e
		})?;
		let n = status::ibcnt() as usize;

		debug!(addr = %self.addr, data = %fmt_data(buf), took = ?took, "wrote");
		Ok(n)
	}

	/// Issues a GPIB device clear command.
	pub fn clear(&mut self) -> Result<()> {
		let _bus = registry::lock();
		self.ensure_open()?;
		let _activity = self.options.signal_activity();

		debug!(addr = %self.addr, "clearing device");
		Error::from_ibsta(unsafe { sys::ibclr(self.ud) }).map_err(|e| {
			warn!(addr = %self.addr, ud = self.ud, error = %e, "clear failed");
			e
		})?;

		// Wait for the device to unassert "not ready for data". Some
		// devices will cause a timeout if a write is attempted
		// immediately after the device is cleared.
		let cleared = Instant::now();
		loop {
			::std::thread::sleep(Duration::from_millis(50));
			let mut lines: c_short = 0;
			let sta = unsafe { sys::iblines(self.board.index, &mut lines) };
			Error::from_ibsta(sta).map_err(|e| {
				warn!(addr = %self.addr, ud = self.ud, error = %e, "iblines failed after clear");
				e
			})?;
			let lines = lines as c_int;
			if lines & sys::ValidNRFD == 0 {
				// The board cannot watch NRFD, so we won't be able to
				// tell when the device is ready. Use a generous delay.
				::std::thread::sleep(Duration::from_secs(1));
				break;
			}
			if lines & sys::BusNRFD == 0 {
				// The device is ready.
				break;
			}
			if !self.options.timeout.is_zero() && cleared.elapsed() > self.options.timeout {
				warn!(addr = %self.addr, ud = self.ud, "timed out after clear");
				return Err(Error::Timeout);
			}
		}

		Ok(())
	}

	/// Sends a GET (group execute trigger) command to the device.
	pub fn trigger(&mut self) -> Result<()> {
		let _bus = registry::lock();
		self.ensure_open()?;
		let _activity = self.options.signal_activity();

		debug!(addr = %self.addr, "triggering device");
		Error::from_ibsta(unsafe { sys::ibtrg(self.ud) }).map_err(|e| {
			warn!(addr = %self.addr, ud = self.ud, error = %e, "trigger failed");
			e
		})
	}

	/// Gets the status byte from the device via serial poll.
	pub fn serial_poll(&mut self) -> Result<u8> {
		let _bus = registry::lock();
		self.ensure_open()?;
		let _activity = self.options.signal_activity();

		let started = Instant::now();
		let mut spr: c_char = 0;
		let sta = unsafe { sys::ibrsp(self.ud, &mut spr) };
		let took = started.elapsed();
		Error::from_ibsta(sta).map_err(|e| {
			warn!(addr = %self.addr, ud = self.ud, error = %e, "serial poll failed");
			e
		})?;

		let spr = spr as u8;
		let hex = format!("{spr:02X}");
		debug!(addr = %self.addr, status = %hex, took = ?took, "polled");
		Ok(spr)
	}

	/// Changes the timeout for future GPIB operations.
	///
	/// The duration is rounded up to one of the discrete values in
	/// <https://linux-gpib.sourceforge.io/doc_html/reference-function-ibtmo.html>.
	pub fn set_timeout(&mut self, t: Duration) -> Result<()> {
		let _bus = registry::lock();
		self.ensure_open()?;
		let _activity = self.options.signal_activity();

		debug!(addr = %self.addr, timeout = ?t, "setting timeout");
		Error::from_ibsta(unsafe { sys::ibtmo(self.ud, timeout::code(t)) }).map_err(|e| {
			warn!(addr = %self.addr, ud = self.ud, error = %e, "set_timeout failed");
			e
		})?;
		self.options.timeout = t;
		Ok(())
	}

	/// Releases resources associated with the device. Called implicitly
	/// on drop; calling it twice is an error.
	pub fn close(&mut self) -> Result<()> {
		let mut bus = registry::lock();
		if self.closed {
			return Err(Error::Closed);
		}
		let _activity = self.options.signal_activity();

		self.closed = true;
		bus.release_device(self.board.index, self.addr);

		debug!(addr = %self.addr, "closing address");
		Error::from_ibsta(unsafe { sys::ibonl(self.ud, 0) }).map_err(|e| {
			warn!(addr = %self.addr, ud = self.ud, error = %e, "close failed");
			e
		})?;

		// The last device on the board takes the bus out of remote mode.
		if bus.device_count(self.board.index) == 0 {
			Error::from_ibsta(unsafe { sys::ibsre(self.board.index, 0) }).map_err(|e| {
				warn!(board = self.board.index, error = %e, "failed to disable remote mode");
				e
			})?;
		}

		Ok(())
	}
}

impl Drop for Device {
	fn drop(&mut self) {
		if !self.closed {
			let _ = self.close();
		}
	}
}

impl io::Read for Device {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		Device::read(self, buf).map_err(io::Error::from)
	}
}

impl io::Write for Device {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		Device::write(self, buf).map_err(io::Error::from)
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Returns a possibly shortened representation of the input data for
/// logging.
fn fmt_data(b: &[u8]) -> String {
	if b.len() > MAX_LOG_DATA {
		format!(
			"\"{}\"...({} bytes total)",
			b[..MAX_LOG_DATA - MIN_LOG_HIDE].escape_ascii(),
			b.len()
		)
	} else {
		format!("\"{}\"", b.escape_ascii())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fmt_data_truncates_long_payloads() {
		for (input, want) in [
			("0123456789", "\"0123456789\""),
			(
				"0123456789----------0123456789----------0123456789----------",
				"\"0123456789----------0123456789----------0123456789----------\"",
			),
			(
				"0123456789----------0123456789----------0123456789----------0",
				"\"0123456789----------0123456789----------\"...(61 bytes total)",
			),
		] {
			assert_eq!(fmt_data(input.as_bytes()), want);
		}
	}

	#[test]
	fn fmt_data_escapes_control_bytes() {
		assert_eq!(fmt_data(b"*IDN?\n"), "\"*IDN?\\n\"");
	}
}
