pub const NMI_VECTOR_ADDR: u16 = 0xfffa;
pub const RESET_VECTOR_ADDR: u16 = 0xfffc;
pub const INTERRUPT_VECTOR_ADDR: u16 = 0xfffe;

#[allow(clippy::module_inception)]
mod cpu_instruction;
mod decoder;
mod instruction;

pub use cpu_instruction::{disassemble, CPUInstruction, DisassemblyLine};
pub use decoder::{decode, decode_addressing, decode_instruction, OPCODE_TABLE};
pub use instruction::Instruction;
