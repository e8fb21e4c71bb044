//! Constants from `gpib_user.h` (linux-gpib 4.x)
use ::libc::c_int;

pub const GPIB_MAX_NUM_BOARDS: c_int = 16;
pub const GPIB_MAX_NUM_DESCRIPTORS: c_int = 0x1000;

// ibsta status bits (returned by all functions)
pub const DCAS: c_int = 1 << 0; // device clear state
pub const DTAS: c_int = 1 << 1; // device trigger state
pub const LACS: c_int = 1 << 2; // board is addressed as listener
pub const TACS: c_int = 1 << 3; // board is addressed as talker
pub const ATN: c_int = 1 << 4; // attention is asserted
pub const CIC: c_int = 1 << 5; // board is controller-in-charge
pub const REM: c_int = 1 << 6; // remote state
pub const LOK: c_int = 1 << 7; // lockout state
pub const CMPL: c_int = 1 << 8; // I/O is complete
pub const EVENT: c_int = 1 << 9; // DCAS, DTAS, or IFC has occurred
pub const SPOLL: c_int = 1 << 10; // board serial polled by busmaster
pub const RQS: c_int = 1 << 11; // device requesting service
pub const SRQI: c_int = 1 << 12; // SRQ is asserted
pub const END: c_int = 1 << 13; // EOI or EOS encountered
pub const TIMO: c_int = 1 << 14; // time limit exceeded
pub const ERR: c_int = 1 << 15; // call terminated on error

// iberr error codes
pub const EDVR: c_int = 0; // system error
pub const ECIC: c_int = 1; // not CIC
pub const ENOL: c_int = 2; // no listeners
pub const EADR: c_int = 3; // CIC and not addressed before I/O
pub const EARG: c_int = 4; // bad argument to function call
pub const ESAC: c_int = 5; // not SAC
pub const EABO: c_int = 6; // I/O operation was aborted
pub const ENEB: c_int = 7; // non-existent board
pub const EDMA: c_int = 8; // DMA hardware error detected
pub const EOIP: c_int = 10; // new I/O attempted with old I/O in progress
pub const ECAP: c_int = 11; // no capability for intended operation
pub const EFSO: c_int = 12; // file system operation error
pub const EBUS: c_int = 14; // bus error
pub const ESTB: c_int = 15; // lost serial poll bytes
pub const ESRQ: c_int = 16; // SRQ stuck on
pub const ETAB: c_int = 20; // table overflow

// timeout codes for ibtmo
pub const TNONE: c_int = 0; // infinite timeout (disabled)
pub const T10us: c_int = 1;
pub const T30us: c_int = 2;
pub const T100us: c_int = 3;
pub const T300us: c_int = 4;
pub const T1ms: c_int = 5;
pub const T3ms: c_int = 6;
pub const T10ms: c_int = 7;
pub const T30ms: c_int = 8;
pub const T100ms: c_int = 9;
pub const T300ms: c_int = 10;
pub const T1s: c_int = 11;
pub const T3s: c_int = 12;
pub const T10s: c_int = 13;
pub const T30s: c_int = 14;
pub const T100s: c_int = 15;
pub const T300s: c_int = 16;
pub const T1000s: c_int = 17; // maximum

// end-of-string modes for ibeos
pub const REOS: c_int = 0x0400; // terminate reads on EOS
pub const XEOS: c_int = 0x0800; // assert EOI when EOS char is sent
pub const BIN: c_int = 0x1000; // do 8-bit compare on EOS
pub const EOS_MASK: c_int = 0x1c00;

// bus control line bit vector from iblines
pub const ValidDAV: c_int = 0x01;
pub const ValidNDAC: c_int = 0x02;
pub const ValidNRFD: c_int = 0x04;
pub const ValidIFC: c_int = 0x08;
pub const ValidREN: c_int = 0x10;
pub const ValidSRQ: c_int = 0x20;
pub const ValidATN: c_int = 0x40;
pub const ValidEOI: c_int = 0x80;
pub const ValidALL: c_int = 0xff;
pub const BusDAV: c_int = 0x0100;
pub const BusNDAC: c_int = 0x0200;
pub const BusNRFD: c_int = 0x0400;
pub const BusIFC: c_int = 0x0800;
pub const BusREN: c_int = 0x1000;
pub const BusSRQ: c_int = 0x2000;
pub const BusATN: c_int = 0x4000;
pub const BusEOI: c_int = 0x8000;

// GPIB command bytes
pub const GTL: c_int = 0x01; // go to local
pub const SDC: c_int = 0x04; // selected device clear
pub const PPC: c_int = 0x05; // parallel poll configure
pub const GET: c_int = 0x08; // group execute trigger
pub const TCT: c_int = 0x09; // take control
pub const LLO: c_int = 0x11; // local lockout
pub const DCL: c_int = 0x14; // device clear
pub const PPU: c_int = 0x15; // parallel poll unconfigure
pub const SPE: c_int = 0x18; // serial poll enable
pub const SPD: c_int = 0x19; // serial poll disable
pub const LAD: c_int = 0x20; // or'ed in to obtain listen address
pub const UNL: c_int = 0x3f; // unlisten
pub const TAD: c_int = 0x40; // or'ed in to obtain talk address
pub const UNT: c_int = 0x5f; // untalk
pub const SAD: c_int = 0x60; // secondary address base
pub const PPE: c_int = 0x60; // parallel poll enable base
pub const PPD: c_int = 0x70; // parallel poll disable

// parallel poll enable bits
pub const PPC_DISABLE: c_int = 0x10;
pub const PPC_SENSE: c_int = 0x08;
pub const PPC_DIO_MASK: c_int = 0x07;

// ibask options
pub const IbaPAD: c_int = 0x1;
pub const IbaSAD: c_int = 0x2;
pub const IbaTMO: c_int = 0x3;
pub const IbaEOT: c_int = 0x4;
pub const IbaPPC: c_int = 0x5; // board only
pub const IbaREADDR: c_int = 0x6; // device only
pub const IbaAUTOPOLL: c_int = 0x7; // board only
pub const IbaCICPROT: c_int = 0x8; // board only
pub const IbaIRQ: c_int = 0x9; // board only
pub const IbaSC: c_int = 0xa; // board only
pub const IbaSRE: c_int = 0xb; // board only
pub const IbaEOSrd: c_int = 0xc;
pub const IbaEOSwrt: c_int = 0xd;
pub const IbaEOScmp: c_int = 0xe;
pub const IbaEOSchar: c_int = 0xf;
pub const IbaPP2: c_int = 0x10; // board only
pub const IbaTIMING: c_int = 0x11; // board only
pub const IbaDMA: c_int = 0x12; // board only
pub const IbaReadAdjust: c_int = 0x13;
pub const IbaWriteAdjust: c_int = 0x14;
pub const IbaEventQueue: c_int = 0x15; // board only
pub const IbaSPollBit: c_int = 0x16; // board only
pub const IbaSpollBit: c_int = 0x16; // board only
pub const IbaSendLLO: c_int = 0x17; // board only
pub const IbaSPollTime: c_int = 0x18; // device only
pub const IbaPPollTime: c_int = 0x19; // board only
pub const IbaEndBitIsNormal: c_int = 0x1a;
pub const IbaUnAddr: c_int = 0x1b; // device only
pub const IbaHSCableLength: c_int = 0x1f; // board only
pub const IbaIst: c_int = 0x20; // board only
pub const IbaRsv: c_int = 0x21; // board only
pub const IbaBNA: c_int = 0x200; // device only
pub const Iba7BitEOS: c_int = 0x1000; // board only, linux-gpib extension

// ibconfig options
pub const IbcPAD: c_int = 0x1;
pub const IbcSAD: c_int = 0x2;
pub const IbcTMO: c_int = 0x3;
pub const IbcEOT: c_int = 0x4;
pub const IbcPPC: c_int = 0x5; // board only
pub const IbcREADDR: c_int = 0x6; // device only
pub const IbcAUTOPOLL: c_int = 0x7; // board only
pub const IbcCICPROT: c_int = 0x8; // board only
pub const IbcIRQ: c_int = 0x9; // board only
pub const IbcSC: c_int = 0xa; // board only
pub const IbcSRE: c_int = 0xb; // board only
pub const IbcEOSrd: c_int = 0xc;
pub const IbcEOSwrt: c_int = 0xd;
pub const IbcEOScmp: c_int = 0xe;
pub const IbcEOSchar: c_int = 0xf;
pub const IbcPP2: c_int = 0x10; // board only
pub const IbcTIMING: c_int = 0x11; // board only
pub const IbcDMA: c_int = 0x12; // board only
pub const IbcReadAdjust: c_int = 0x13;
pub const IbcWriteAdjust: c_int = 0x14;
pub const IbcEventQueue: c_int = 0x15; // board only
pub const IbcSPollBit: c_int = 0x16; // board only
pub const IbcSpollBit: c_int = 0x16; // board only
pub const IbcSendLLO: c_int = 0x17; // board only
pub const IbcSPollTime: c_int = 0x18; // device only
pub const IbcPPollTime: c_int = 0x19; // board only
pub const IbcEndBitIsNormal: c_int = 0x1a;
pub const IbcUnAddr: c_int = 0x1b; // device only
pub const IbcHSCableLength: c_int = 0x1f; // board only
pub const IbcIst: c_int = 0x20; // board only
pub const IbcRsv: c_int = 0x21; // board only
pub const IbcBNA: c_int = 0x200; // device only

// T1 delays
pub const T1_DELAY_2000ns: c_int = 1;
pub const T1_DELAY_500ns: c_int = 2;
pub const T1_DELAY_350ns: c_int = 3;

// board events from ibevent
pub const EventNone: c_int = 0;
pub const EventDevTrg: c_int = 1;
pub const EventDevClr: c_int = 2;
pub const EventIFC: c_int = 3;

// status byte bits
pub const IbStbRQS: c_int = 0x40; // IEEE 488.1 & 2
pub const IbStbESB: c_int = 0x20; // IEEE 488.2 only
pub const IbStbMAV: c_int = 0x10; // IEEE 488.2 only

// secondary address specials
pub const NO_SAD: c_int = 0;
pub const ALL_SAD: c_int = -1;

// EOT modes for 488.2 sends
pub const NULLend: c_int = 0;
pub const DABend: c_int = 1;
pub const NLend: c_int = 2;

/// Termination condition for 488.2 reads: stop only when the END
/// message is received. Defined as a static constant in `<gpib/ib.h>`,
/// not an exported symbol.
pub const STOPend: c_int = 0x100;
