//! Raw linux-gpib C API definitions
//!
//! Declarations for everything `<gpib/ib.h>` exports: the traditional
//! `ib*` calls, the IEEE 488.2 multi-device calls, the status globals
//! and the `gpib_user.h` constants. Values that the header only defines
//! as macros (`MakeAddr`, `GetPAD`, `GetSAD`, `NOADDR`, `STOPend`) are
//! not link-visible and are re-expressed here as `const fn`s/`const`s.
//!
//! Nothing in this crate takes the library's global lock; see the `gpib`
//! crate for a safe interface.
#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]
#![allow(non_snake_case)]

pub mod addr;
pub mod consts;
pub mod ib;
pub mod status;

pub use ::core::ffi::c_void;
pub use ::libc::{c_char, c_int, c_long, c_short, c_uint};

pub use self::addr::{Addr4882_t, GetPAD, GetSAD, MakeAddr, NOADDR};
pub use self::consts::*;
pub use self::ib::*;
pub use self::status::*;
