//! Register values and their stored layouts.

mod encoding;
mod value;


pub use encoding::{Encoding, RawReg};
pub use value::{Pointer, Reg, SIGNAL_OFFSET};
