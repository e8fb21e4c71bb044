//! The linux-gpib call surface
//!
//! Signatures match `<gpib/ib.h>`. The traditional `ib*` calls return
//! the new `ibsta` status word (except `ibdev`/`ibfind`, which return a
//! descriptor); the IEEE 488.2 calls return nothing and leave their
//! outcome in the status globals. Address lists passed to the 488.2
//! calls must be terminated with `NOADDR`.
use ::core::ffi::c_void;
use ::libc::{c_char, c_int, c_long, c_short};

use crate::addr::Addr4882_t;

// Traditional API
#[link(name = "gpib")]
extern "C" {
	pub fn ibask(ud: c_int, option: c_int, value: *mut c_int) -> c_int;
	pub fn ibbna(ud: c_int, board_name: *const c_char) -> c_int;
	pub fn ibcac(ud: c_int, synchronous: c_int) -> c_int;
	pub fn ibclr(ud: c_int) -> c_int;
	pub fn ibcmd(ud: c_int, cmd: *const c_void, cnt: c_long) -> c_int;
	pub fn ibcmda(ud: c_int, cmd: *const c_void, cnt: c_long) -> c_int;
	pub fn ibconfig(ud: c_int, option: c_int, value: c_int) -> c_int;
	pub fn ibdev(
		board_index: c_int,
		pad: c_int,
		sad: c_int,
		timo: c_int,
		send_eoi: c_int,
		eosmode: c_int,
	) -> c_int;
	pub fn ibdma(ud: c_int, v: c_int) -> c_int;
	pub fn ibeot(ud: c_int, v: c_int) -> c_int;
	pub fn ibeos(ud: c_int, v: c_int) -> c_int;
	pub fn ibevent(ud: c_int, event: *mut c_short) -> c_int;
	pub fn ibfind(dev: *const c_char) -> c_int;
	pub fn ibgts(ud: c_int, shadow_handshake: c_int) -> c_int;
	pub fn ibist(ud: c_int, ist: c_int) -> c_int;
	pub fn iblines(ud: c_int, line_status: *mut c_short) -> c_int;
	pub fn ibln(ud: c_int, pad: c_int, sad: c_int, found_listener: *mut c_short) -> c_int;
	pub fn ibloc(ud: c_int) -> c_int;
	pub fn ibonl(ud: c_int, onl: c_int) -> c_int;
	pub fn ibpad(ud: c_int, v: c_int) -> c_int;
	pub fn ibpct(ud: c_int) -> c_int;
	pub fn ibppc(ud: c_int, v: c_int) -> c_int;
	pub fn ibrd(ud: c_int, buf: *mut c_void, count: c_long) -> c_int;
	pub fn ibrda(ud: c_int, buf: *mut c_void, count: c_long) -> c_int;
	pub fn ibrdf(ud: c_int, file_path: *const c_char) -> c_int;
	pub fn ibrpp(ud: c_int, ppr: *mut c_char) -> c_int;
	pub fn ibrsc(ud: c_int, v: c_int) -> c_int;
	pub fn ibrsp(ud: c_int, spr: *mut c_char) -> c_int;
	pub fn ibrsv(ud: c_int, v: c_int) -> c_int;
	pub fn ibsad(ud: c_int, v: c_int) -> c_int;
	pub fn ibsic(ud: c_int) -> c_int;
	pub fn ibspb(ud: c_int, sp_bytes: *mut c_short) -> c_int;
	pub fn ibsre(ud: c_int, v: c_int) -> c_int;
	pub fn ibstop(ud: c_int) -> c_int;
	pub fn ibtmo(ud: c_int, v: c_int) -> c_int;
	pub fn ibtrg(ud: c_int) -> c_int;
	pub fn ibvers(version: *mut *mut c_char);
	pub fn ibwait(ud: c_int, mask: c_int) -> c_int;
	pub fn ibwrt(ud: c_int, buf: *const c_void, count: c_long) -> c_int;
	pub fn ibwrta(ud: c_int, buf: *const c_void, count: c_long) -> c_int;
	pub fn ibwrtf(ud: c_int, file_path: *const c_char) -> c_int;
}

// IEEE 488.2 multi-device API
#[link(name = "gpib")]
extern "C" {
	pub fn AllSPoll(board_desc: c_int, addressList: *const Addr4882_t, resultList: *mut c_short);
	pub fn DevClear(board_desc: c_int, address: Addr4882_t);
	pub fn DevClearList(board_desc: c_int, addressList: *const Addr4882_t);
	pub fn EnableLocal(board_desc: c_int, addressList: *const Addr4882_t);
	pub fn EnableRemote(board_desc: c_int, addressList: *const Addr4882_t);
	pub fn FindLstn(
		board_desc: c_int,
		padList: *const Addr4882_t,
		resultList: *mut Addr4882_t,
		maxNumResults: c_int,
	);
	pub fn FindRQS(board_desc: c_int, addressList: *const Addr4882_t, result: *mut c_short);
	pub fn PassControl(board_desc: c_int, address: Addr4882_t);
	pub fn PPoll(board_desc: c_int, result: *mut c_short);
	pub fn PPollConfig(board_desc: c_int, address: Addr4882_t, dataLine: c_int, lineSense: c_int);
	pub fn PPollUnconfig(board_desc: c_int, addressList: *const Addr4882_t);
	pub fn RcvRespMsg(board_desc: c_int, buffer: *mut c_void, count: c_long, termination: c_int);
	pub fn ReadStatusByte(board_desc: c_int, address: Addr4882_t, result: *mut c_short);
	pub fn Receive(
		board_desc: c_int,
		address: Addr4882_t,
		buffer: *mut c_void,
		count: c_long,
		termination: c_int,
	);
	pub fn ReceiveSetup(board_desc: c_int, address: Addr4882_t);
	pub fn ResetSys(board_desc: c_int, addressList: *const Addr4882_t);
	pub fn Send(
		board_desc: c_int,
		address: Addr4882_t,
		buffer: *const c_void,
		count: c_long,
		eot_mode: c_int,
	);
	pub fn SendCmds(board_desc: c_int, cmds: *const c_void, count: c_long);
	pub fn SendDataBytes(board_desc: c_int, buffer: *const c_void, count: c_long, eotmode: c_int);
	pub fn SendIFC(board_desc: c_int);
	pub fn SendLLO(board_desc: c_int);
	pub fn SendList(
		board_desc: c_int,
		addressList: *const Addr4882_t,
		buffer: *const c_void,
		count: c_long,
		eotmode: c_int,
	);
	pub fn SendSetup(board_desc: c_int, addressList: *const Addr4882_t);
	pub fn SetRWLS(board_desc: c_int, addressList: *const Addr4882_t);
	pub fn TestSRQ(board_desc: c_int, result: *mut c_short);
	pub fn TestSys(board_desc: c_int, addressList: *const Addr4882_t, resultList: *mut c_short);
	pub fn Trigger(board_desc: c_int, address: Addr4882_t);
	pub fn TriggerList(board_desc: c_int, addressList: *const Addr4882_t);
	pub fn WaitSRQ(board_desc: c_int, result: *mut c_short);
}
