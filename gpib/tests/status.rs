use gpib::{status, Address, Error, IberrCode, LineStatus, Options, Status};

#[test]
fn sentinel_accessors_are_stable() {
	// Published linux-gpib values, identical on every call.
	for _ in 0..3 {
		assert_eq!(status::noaddr(), 0xffff);
		assert_eq!(status::stopend(), 0x100);
	}
}

#[test]
fn status_display_names_bits() {
	let s = Status::ERR | Status::END | Status::CMPL | Status::CIC;
	assert_eq!(s.to_string(), "ERR END CMPL CIC");
}

#[test]
fn line_status_display() {
	let l = LineStatus(0x21ff);
	assert_eq!(l.to_string(), "21ff eoi atn SRQ ren ifc nrfd ndac DAV");
}

#[test]
fn address_packing() {
	assert_eq!(Address::new(22).to_string(), "22");
	assert_eq!(Address::with_secondary(9, 103).packed(), 0x6709);
	assert_eq!(Address::from(7u8), Address::new(7));
}

#[test]
fn errors_format_like_the_library_documents() {
	assert_eq!(Error::Timeout.to_string(), "timed out");
	assert_eq!(Error::Bus(IberrCode(2)).to_string(), "ENOL");
	assert_eq!(Error::BoardInUse(1).to_string(), "board in use: 1");
	assert_eq!(
		Error::DeviceInUse(Address::new(22)).to_string(),
		"device already in use: 22"
	);
}

#[test]
fn options_builder_chains() {
	let o = Options::new()
		.timeout(std::time::Duration::from_secs(1))
		.read_eos(b'\n');
	// Builder output is observable through Debug only; the fields feed
	// ibdev at open time.
	let dbg = format!("{o:?}");
	assert!(dbg.contains("read_eos: Some(10)"), "{dbg}");
	assert!(dbg.contains("1s"), "{dbg}");
}
