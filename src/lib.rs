//! MOS 6502 core: opcode decoding, arithmetic logic unit and a clock driven
//! fetch loop.
//!
//! ```
//! use emu6502::{decode_addressing, decode_instruction, AddressingMode, Instruction};
//!
//! assert_eq!(Some(Instruction::JMP), decode_instruction(0x6c));
//! assert_eq!(Some(AddressingMode::Indirect), decode_addressing(0x6c));
//! assert_eq!(None, decode_instruction(0x02));
//! ```
mod addressing_mode;
pub mod alu;
mod config;
mod cpu_instruction;
pub mod memory;
mod processing_unit;
pub mod pulse;
mod registers;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use addressing_mode::{resolve_relative, AddressingMode};
pub use config::{parse_address, ConfigError, MachineConfig};
pub use cpu_instruction::{
    decode, decode_addressing, decode_instruction, disassemble, CPUInstruction, DisassemblyLine,
    Instruction, INTERRUPT_VECTOR_ADDR, NMI_VECTOR_ADDR, OPCODE_TABLE, RESET_VECTOR_ADDR,
};
pub use memory::{AddressableIO, Memory, MemoryError, MemoryImage, MemoryPreset, RomMasks};
pub use processing_unit::{CPUHandle, CPUState, CPU, FREQUENCY_WINDOW};
pub use pulse::{Clock, ManualPulse, ManualTrigger, PulseOff, PulseOn, PulseSource};
pub use registers::{Registers, StatusRegister, STACK_BASE_ADDR};
