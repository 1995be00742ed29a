use std::fmt;

/*
 * AddressingMode
 * The way an instruction computes its operand, its address or its value.
 * The 6502 is not orthogonal, the modes available depend on the instruction
 * and both index registers are not interchangeable.
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum AddressingMode {
    /// Operates directly on the accumulator, written `A`.
    Accumulator,
    /// Full 16 bits address.
    Absolute,
    /// 16 bits address plus the X register.
    AbsoluteX,
    /// 16 bits address plus the Y register.
    AbsoluteY,
    /// The operand is implied by the instruction (CLC, RTS…).
    Implicit,
    /// 8 bits constant, written `#`.
    Immediate,
    /// JMP only: the 16 bits operand points to the target address.
    Indirect,
    /// Zero page address plus X (with zero page wrap around) points to the
    /// target address.
    IndexedIndirect,
    /// The zero page address points to a base address Y is then added to.
    IndirectIndexed,
    /// Signed 8 bits offset from the next instruction, used by branches.
    Relative,
    /// 8 bits address in the first 256 bytes.
    ZeroPage,
    /// Zero page address plus X, wrapping inside the zero page.
    ZeroPageX,
    /// Zero page address plus Y, wrapping inside the zero page (LDX, STX).
    ZeroPageY,
}

impl AddressingMode {
    /// Number of bytes following the opcode.
    pub const fn operand_len(&self) -> usize {
        match *self {
            AddressingMode::Accumulator | AddressingMode::Implicit => 0,
            AddressingMode::Immediate
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed
            | AddressingMode::Relative
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /*
     * format_operands
     * Assembler notation of the operands of an instruction located at
     * `address`. Missing operand bytes are read as 0x00.
     */
    pub fn format_operands(&self, address: u16, operands: &[u8]) -> String {
        let byte = operands.first().copied().unwrap_or(0);
        let word = u16::from_le_bytes([byte, operands.get(1).copied().unwrap_or(0)]);

        match *self {
            AddressingMode::Accumulator => "A".to_owned(),
            AddressingMode::Implicit => String::new(),
            AddressingMode::Immediate => format!("#${:02x}", byte),
            AddressingMode::ZeroPage => format!("${:02x}", byte),
            AddressingMode::ZeroPageX => format!("${:02x},X", byte),
            AddressingMode::ZeroPageY => format!("${:02x},Y", byte),
            AddressingMode::Absolute => format!("${:04x}", word),
            AddressingMode::AbsoluteX => format!("${:04x},X", word),
            AddressingMode::AbsoluteY => format!("${:04x},Y", word),
            AddressingMode::Indirect => format!("(${:04x})", word),
            AddressingMode::IndexedIndirect => format!("(${:02x},X)", byte),
            AddressingMode::IndirectIndexed => format!("(${:02x}),Y", byte),
            AddressingMode::Relative => format!("${:04X}", resolve_relative(address, byte)),
        }
    }
}

/// Target of a branch located at `address`: the offset is signed and counts
/// from the instruction following the 2 bytes branch.
pub fn resolve_relative(address: u16, offset: u8) -> u16 {
    address
        .wrapping_add(2)
        .wrapping_add_signed(i16::from(offset as i8))
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notation = match *self {
            AddressingMode::Accumulator => "A",
            AddressingMode::Absolute => "abs",
            AddressingMode::AbsoluteX => "abs,X",
            AddressingMode::AbsoluteY => "abs,Y",
            AddressingMode::Implicit => "impl",
            AddressingMode::Immediate => "#",
            AddressingMode::Indirect => "ind",
            AddressingMode::IndexedIndirect => "X,ind",
            AddressingMode::IndirectIndexed => "ind,Y",
            AddressingMode::Relative => "rel",
            AddressingMode::ZeroPage => "zpg",
            AddressingMode::ZeroPageX => "zpg,X",
            AddressingMode::ZeroPageY => "zpg,Y",
        };

        f.pad(notation)
    }
}
