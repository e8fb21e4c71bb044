//! Queries the identification string of a GPIB device.
//!
//! Works for SCPI devices that support the `*IDN?` query:
//!
//! ```text
//! $ gpib-identify --address 22
//! HEWLETT-PACKARD,34401A,0,10-5-2
//! ```
use ::std::io::{BufRead, BufReader, Write};

use ::anyhow::Context;
use ::clap::Parser;
use ::tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Query the identification string of a GPIB device")]
struct Args {
	/// Turn on logging. Without this, only the result or first error is
	/// printed.
	#[arg(long)]
	verbose: bool,

	/// The board number. Zero corresponds to /dev/gpib0.
	#[arg(long, default_value_t = 0)]
	board: i32,

	/// The primary address of the GPIB device to query.
	#[arg(long)]
	address: u8,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	if args.verbose {
		tracing_subscriber::fmt()
			.with_env_filter(
				EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
			)
			.with_writer(::std::io::stderr)
			.init();
	}

	let board = gpib::Board::open(args.board).context("failed to open board")?;
	let mut device = board
		.device(gpib::Address::new(args.address))
		.context("failed to open device")?;

	device
		.write_all(b"*IDN?\n")
		.context("failed to write to device")?;

	let mut line = String::new();
	BufReader::new(&mut device)
		.read_line(&mut line)
		.context("failed to read from device")?;

	println!("{}", line.trim());
	Ok(())
}
