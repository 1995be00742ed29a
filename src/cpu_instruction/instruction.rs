use std::fmt;

/// The 56 documented 6502 mnemonics.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash, PartialOrd, Ord)]
pub enum Instruction {
    /// Add Memory to Accumulator with Carry
    ADC,
    /// AND Memory with Accumulator
    AND,
    /// Shift left one bit, Memory or Accumulator
    ASL,
    /// Branch on Carry Clear
    BCC,
    /// Branch on Carry Set
    BCS,
    /// Branch on Result Zero
    BEQ,
    /// Test bits in Memory with Accumulator
    BIT,
    /// Branch on Result Minus
    BMI,
    /// Branch on Result Not Zero
    BNE,
    /// Branch on Result Plus
    BPL,
    /// Force Break
    BRK,
    /// Branch on Overflow Clear
    BVC,
    /// Branch on Overflow Set
    BVS,
    /// Clear Carry flag
    CLC,
    /// Clear Decimal mode
    CLD,
    /// Clear Interrupt Disable bit
    CLI,
    /// Clear Overflow flag
    CLV,
    /// Compare Memory and Accumulator
    CMP,
    /// Compare Memory and Index X
    CPX,
    /// Compare Memory and Index Y
    CPY,
    /// Decrement Memory by one
    DEC,
    /// Decrement Index X by one
    DEX,
    /// Decrement Index Y by one
    DEY,
    /// Exclusive OR Memory with Accumulator
    EOR,
    /// Increment Memory by one
    INC,
    /// Increment Index X by one
    INX,
    /// Increment Index Y by one
    INY,
    /// Jump to new location
    JMP,
    /// Jump to new location, saving return address
    JSR,
    /// Load Accumulator with Memory
    LDA,
    /// Load Index X with Memory
    LDX,
    /// Load Index Y with Memory
    LDY,
    /// Shift right one bit, Memory or Accumulator
    LSR,
    /// No operation
    NOP,
    /// OR Memory with Accumulator
    ORA,
    /// Push Accumulator on Stack
    PHA,
    /// Push Processor Status on Stack
    PHP,
    /// Pull Accumulator from Stack
    PLA,
    /// Pull Processor Status from Stack
    PLP,
    /// Rotate one bit left, Memory or Accumulator
    ROL,
    /// Rotate one bit right, Memory or Accumulator
    ROR,
    /// Return from Interrupt
    RTI,
    /// Return from Subroutine
    RTS,
    /// Subtract Memory from Accumulator with Borrow
    SBC,
    /// Set Carry flag
    SEC,
    /// Set Decimal mode
    SED,
    /// Set Interrupt Disable status
    SEI,
    /// Store Accumulator in Memory
    STA,
    /// Store Index X in Memory
    STX,
    /// Store Index Y in Memory
    STY,
    /// Transfer Accumulator to Index X
    TAX,
    /// Transfer Accumulator to Index Y
    TAY,
    /// Transfer Stack Pointer to Index X
    TSX,
    /// Transfer Index X to Accumulator
    TXA,
    /// Transfer Index X to Stack Pointer
    TXS,
    /// Transfer Index Y to Accumulator
    TYA,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the variant names are the mnemonics, pad() keeps width and alignment
        f.pad(&format!("{:?}", self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mnemonic() {
        assert_eq!("ADC", format!("{}", Instruction::ADC));
        assert_eq!("TYA", format!("{}", Instruction::TYA));
        assert_eq!("JMP ", format!("{: <4}", Instruction::JMP));
    }
}
