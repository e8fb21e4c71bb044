//! The process-wide bus lock and open-handle bookkeeping
//!
//! The library calls are not safe for concurrent use: every call
//! overwrites the shared `ibsta`/`iberr`/`ibcnt` globals. All board and
//! device operations therefore run under this single lock, which also
//! tracks which board indices and device addresses are open so that
//! duplicate handles are refused.
use ::std::collections::{BTreeMap, BTreeSet};
use ::std::sync::{Mutex, MutexGuard, PoisonError};

use ::gpib_sys as sys;
use ::libc::c_int;

use crate::addr::Address;
use crate::error::{Error, Result};

static BUS: Mutex<Registry> = Mutex::new(Registry {
	boards: BTreeMap::new(),
});

pub(crate) fn lock() -> MutexGuard<'static, Registry> {
	// The bookkeeping stays consistent even if a holder panicked.
	BUS.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) struct Registry {
	boards: BTreeMap<c_int, BTreeSet<sys::Addr4882_t>>,
}

impl Registry {
	pub fn claim_board(&mut self, index: c_int) -> Result<()> {
		if self.boards.contains_key(&index) {
			return Err(Error::BoardInUse(index));
		}
		self.boards.insert(index, BTreeSet::new());
		Ok(())
	}

	pub fn release_board(&mut self, index: c_int) {
		self.boards.remove(&index);
	}

	pub fn device_in_use(&self, index: c_int, addr: Address) -> bool {
		self.boards
			.get(&index)
			.is_some_and(|devs| devs.contains(&addr.packed()))
	}

	pub fn device_count(&self, index: c_int) -> usize {
		self.boards.get(&index).map_or(0, BTreeSet::len)
	}

	pub fn claim_device(&mut self, index: c_int, addr: Address) {
		if let Some(devs) = self.boards.get_mut(&index) {
			devs.insert(addr.packed());
		}
	}

	pub fn release_device(&mut self, index: c_int, addr: Address) {
		if let Some(devs) = self.boards.get_mut(&index) {
			devs.remove(&addr.packed());
		}
	}
}
