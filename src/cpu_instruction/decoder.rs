//! Opcode decoding.
//!
//! An opcode splits into three fields, `aaabbbcc`, following the layout of
//! the decode PLA of the 6502:
//!
//! - `c` (bits 1-0) selects the instruction group,
//! - `a` (bits 7-5) selects the operation inside the group,
//! - `b` (bits 4-2) selects the addressing mode.
//!
//! Branches, stack operations, flag instructions and a handful of immediate
//! modes are exceptions to that grid. Both rule sets below are evaluated at
//! compile time to fill [`OPCODE_TABLE`], decoding at run time is a lookup.
use super::instruction::Instruction;
use crate::addressing_mode::AddressingMode;

use AddressingMode::*;
use Instruction::*;

const fn fields(opcode: u8) -> (u8, u8, u8) {
    ((opcode & 0xe0) >> 5, (opcode & 0x1c) >> 2, opcode & 0x03)
}

/// Addressing mode rules: `(b, c)` first, then the `a` exceptions.
const fn addressing_rule(opcode: u8) -> Option<AddressingMode> {
    let (a, b, c) = fields(opcode);

    match (b, c) {
        (0, 0) => match a {
            0 | 2 | 3 => Some(Implicit),
            1 => Some(Absolute),
            5..=7 => Some(Immediate),
            _ => None,
        },
        (0, 1) => Some(IndexedIndirect),
        (0, 2) => match a {
            5 => Some(Immediate),
            _ => None,
        },
        (1, 0) => match a {
            0 | 2 | 3 => None,
            _ => Some(ZeroPage),
        },
        (1, 1) | (1, 2) => Some(ZeroPage),
        (2, 0) => Some(Implicit),
        (2, 1) => match a {
            4 => None,
            _ => Some(Immediate),
        },
        (2, 2) => match a {
            0..=3 => Some(Accumulator),
            _ => Some(Implicit),
        },
        (3, 0) => match a {
            0 => None,
            3 => Some(Indirect),
            _ => Some(Absolute),
        },
        (3, 1) | (3, 2) => Some(Absolute),
        (4, 0) => Some(Relative),
        (4, 1) => Some(IndirectIndexed),
        (5, 0) => match a {
            4 | 5 => Some(ZeroPageX),
            _ => None,
        },
        (5, 1) => Some(ZeroPageX),
        (5, 2) => match a {
            4 | 5 => Some(ZeroPageY),
            _ => Some(ZeroPageX),
        },
        (6, 0) => Some(Implicit),
        (6, 1) => Some(AbsoluteY),
        (6, 2) => match a {
            4 | 5 => Some(Implicit),
            _ => None,
        },
        (7, 0) => match a {
            5 => Some(AbsoluteX),
            _ => None,
        },
        (7, 1) => Some(AbsoluteX),
        (7, 2) => match a {
            4 => None,
            5 => Some(AbsoluteY),
            _ => Some(AbsoluteX),
        },
        // c == 3 holds no documented opcode
        _ => None,
    }
}

/// Instruction rules: `(c, a)` first, then the `b` exceptions.
const fn instruction_rule(opcode: u8) -> Option<Instruction> {
    let (a, b, c) = fields(opcode);

    match c {
        0 => control_instruction(a, b),
        1 => match (a, b) {
            (0, _) => Some(ORA),
            (1, _) => Some(AND),
            (2, _) => Some(EOR),
            (3, _) => Some(ADC),
            // STA has no immediate mode
            (4, 2) => None,
            (4, _) => Some(STA),
            (5, _) => Some(LDA),
            (6, _) => Some(CMP),
            _ => Some(SBC),
        },
        2 => read_modify_write_instruction(a, b),
        _ => None,
    }
}

/*
 * c == 0: branches (b == 4), flag and stack instructions (b == 2, b == 6),
 * jumps and the Y register operations.
 */
const fn control_instruction(a: u8, b: u8) -> Option<Instruction> {
    match (a, b) {
        (_, 4) => Some(match a {
            0 => BPL,
            1 => BMI,
            2 => BVC,
            3 => BVS,
            4 => BCC,
            5 => BCS,
            6 => BNE,
            _ => BEQ,
        }),
        (_, 6) => Some(match a {
            0 => CLC,
            1 => SEC,
            2 => CLI,
            3 => SEI,
            4 => TYA,
            5 => CLV,
            6 => CLD,
            _ => SED,
        }),
        (_, 2) => Some(match a {
            0 => PHP,
            1 => PLP,
            2 => PHA,
            3 => PLA,
            4 => DEY,
            5 => TAY,
            6 => INY,
            _ => INX,
        }),
        (0, 0) => Some(BRK),
        (1, 0) => Some(JSR),
        (2, 0) => Some(RTI),
        (3, 0) => Some(RTS),
        (1, 1) | (1, 3) => Some(BIT),
        (2, 3) | (3, 3) => Some(JMP),
        (4, 1) | (4, 3) | (4, 5) => Some(STY),
        (5, 0) | (5, 1) | (5, 3) | (5, 5) | (5, 7) => Some(LDY),
        (6, 0) | (6, 1) | (6, 3) => Some(CPY),
        (7, 0) | (7, 1) | (7, 3) => Some(CPX),
        _ => None,
    }
}

/*
 * c == 2: shifts, rotations, increments and the X register operations.
 * b == 0, 4 and 6 are empty except for the X register rows.
 */
const fn read_modify_write_instruction(a: u8, b: u8) -> Option<Instruction> {
    match (a, b) {
        (4, 1) | (4, 3) | (4, 5) => Some(STX),
        (4, 2) => Some(TXA),
        (4, 6) => Some(TXS),
        (5, 0) | (5, 1) | (5, 3) | (5, 5) | (5, 7) => Some(LDX),
        (5, 2) => Some(TAX),
        (5, 6) => Some(TSX),
        (4, _) | (5, _) => None,
        (_, 0) | (_, 4) | (_, 6) => None,
        (6, 2) => Some(DEX),
        (7, 2) => Some(NOP),
        (0, _) => Some(ASL),
        (1, _) => Some(ROL),
        (2, _) => Some(LSR),
        (3, _) => Some(ROR),
        (6, _) => Some(DEC),
        _ => Some(INC),
    }
}

/// Both rule sets must agree on which opcodes are illegal.
const fn rules_agree() -> bool {
    let mut opcode: usize = 0;
    while opcode < 256 {
        let addressing = addressing_rule(opcode as u8);
        let instruction = instruction_rule(opcode as u8);
        if addressing.is_some() != instruction.is_some() {
            return false;
        }
        opcode += 1;
    }

    true
}

const _: () = assert!(
    rules_agree(),
    "addressing and instruction decode rules disagree on the illegal opcodes"
);

const fn build_table() -> [Option<(Instruction, AddressingMode)>; 256] {
    let mut table: [Option<(Instruction, AddressingMode)>; 256] = [None; 256];
    let mut opcode: usize = 0;
    while opcode < 256 {
        table[opcode] = match (instruction_rule(opcode as u8), addressing_rule(opcode as u8)) {
            (Some(instruction), Some(addressing_mode)) => Some((instruction, addressing_mode)),
            _ => None,
        };
        opcode += 1;
    }

    table
}

/// Every opcode, `None` for the 105 illegal ones.
pub static OPCODE_TABLE: [Option<(Instruction, AddressingMode)>; 256] = build_table();

pub fn decode(opcode: u8) -> Option<(Instruction, AddressingMode)> {
    OPCODE_TABLE[opcode as usize]
}

pub fn decode_addressing(opcode: u8) -> Option<AddressingMode> {
    decode(opcode).map(|(_, addressing_mode)| addressing_mode)
}

pub fn decode_instruction(opcode: u8) -> Option<Instruction> {
    decode(opcode).map(|(instruction, _)| instruction)
}
