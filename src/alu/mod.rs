//! Arithmetic logic unit.
//!
//! Every operation takes its operands and the status register of the CPU,
//! returns the 8 bits result and updates the flags the hardware updates.
//! The `decimal`, `interrupt` and break flags are only ever read here: they
//! are set by SED/CLD, SEI/CLI and PHP/PLP, never by the ALU.
//!
//! ```
//! use emu6502::{alu, StatusRegister};
//!
//! let mut status = StatusRegister::new();
//! assert_eq!(0xa0, alu::add(0x50, 0x50, &mut status));
//! assert!(status.overflow);
//!
//! status.decimal = true;
//! status.carry = false;
//! assert_eq!(0x00, alu::add(0x50, 0x50, &mut status));
//! assert!(status.carry);
//! ```
mod arithmetic;
mod logical;
mod shift;

pub use arithmetic::{add, subtract};
pub use logical::{logical_and, logical_or, logical_xor};
pub use shift::{rotate_left, rotate_right, shift_left, shift_right};
