use super::decoder::decode;
use super::instruction::Instruction;
use crate::addressing_mode::AddressingMode;
use crate::memory::AddressableIO;
use std::fmt;

/// A decoded instruction as it sits in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CPUInstruction {
    pub address: u16,
    pub opcode: u8,
    pub instruction: Instruction,
    pub addressing_mode: AddressingMode,
    pub operands: Vec<u8>,
}

impl CPUInstruction {
    /// Decodes the instruction at `address`, `None` for an illegal opcode.
    /// Operand addresses wrap at 0xFFFF.
    pub fn read(address: u16, memory: &impl AddressableIO) -> Option<CPUInstruction> {
        let opcode = memory.read(address);
        let (instruction, addressing_mode) = decode(opcode)?;
        let operands = (1..=addressing_mode.operand_len() as u16)
            .map(|offset| memory.read(address.wrapping_add(offset)))
            .collect();

        Some(CPUInstruction {
            address,
            opcode,
            instruction,
            addressing_mode,
            operands,
        })
    }

    /// Opcode plus operands.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        1 + self.operands.len()
    }
}

fn byte_sequence(bytes: &[u8]) -> String {
    let hex: Vec<String> = bytes.iter().map(|byte| format!("{:02x}", byte)).collect();

    format!("({})", hex.join(" "))
}

impl fmt::Display for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = vec![self.opcode];
        bytes.extend_from_slice(&self.operands);

        write!(
            f,
            "#0x{:04X}: {: <14}{: <4} {}",
            self.address,
            byte_sequence(&bytes),
            self.instruction,
            self.addressing_mode.format_operands(self.address, &self.operands)
        )
    }
}

/// One line of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisassemblyLine {
    Instruction(CPUInstruction),
    Illegal { address: u16, opcode: u8 },
}

impl DisassemblyLine {
    pub fn address(&self) -> u16 {
        match self {
            DisassemblyLine::Instruction(instruction) => instruction.address,
            DisassemblyLine::Illegal { address, .. } => *address,
        }
    }

    /// Number of bytes this line spans.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            DisassemblyLine::Instruction(instruction) => instruction.len(),
            DisassemblyLine::Illegal { .. } => 1,
        }
    }
}

impl fmt::Display for DisassemblyLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisassemblyLine::Instruction(instruction) => fmt::Display::fmt(instruction, f),
            DisassemblyLine::Illegal { address, opcode } => write!(
                f,
                "#0x{:04X}: {: <14}???",
                address,
                byte_sequence(&[*opcode])
            ),
        }
    }
}

/// Decodes `count` consecutive instructions from `start`. An illegal opcode
/// yields a one byte `???` line and decoding goes on with the next byte.
pub fn disassemble(memory: &impl AddressableIO, start: u16, count: usize) -> Vec<DisassemblyLine> {
    let mut lines = Vec::with_capacity(count);
    let mut address = start;

    for _ in 0..count {
        let line = match CPUInstruction::read(address, memory) {
            Some(instruction) => DisassemblyLine::Instruction(instruction),
            None => DisassemblyLine::Illegal {
                address,
                opcode: memory.read(address),
            },
        };
        address = address.wrapping_add(line.len() as u16);
        lines.push(line);
    }

    lines
}
