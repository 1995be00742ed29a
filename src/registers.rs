use std::fmt;

/*
 * 6502 registers
 * accumulator, X & Y registers are 8 bits general purpose registers.
 * status flags register :
 * bit 7: Negative flag
 * bit 6: oVerflow flag
 * bit 5: not used (expansion)
 * bit 4: Break command
 * bit 3: Decimal mode
 * bit 2: Interrupt disable
 * bit 1: Zero flag
 * bit 0: Carry flag
 *
 * program counter: 16 bit address register
 * stack pointer: 8 bits offset in page 0x0100, the stack grows downward and
 * wraps around inside its page.
 */
pub const STACK_BASE_ADDR: u16 = 0x0100;

const N_FLAG: u8 = 0b1000_0000;
const V_FLAG: u8 = 0b0100_0000;
const E_FLAG: u8 = 0b0010_0000;
const B_FLAG: u8 = 0b0001_0000;
const D_FLAG: u8 = 0b0000_1000;
const I_FLAG: u8 = 0b0000_0100;
const Z_FLAG: u8 = 0b0000_0010;
const C_FLAG: u8 = 0b0000_0001;

/// Processor status flags.
///
/// `break_command` and `expansion` only have a meaning when the register is
/// transferred to or from the stack, arithmetic never produces them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusRegister {
    pub negative: bool,
    pub overflow: bool,
    pub expansion: bool,
    pub break_command: bool,
    pub decimal: bool,
    pub interrupt: bool,
    pub zero: bool,
    pub carry: bool,
}

impl StatusRegister {
    pub fn new() -> StatusRegister {
        StatusRegister::default()
    }

    pub fn from_byte(byte: u8) -> StatusRegister {
        StatusRegister {
            negative: byte & N_FLAG != 0,
            overflow: byte & V_FLAG != 0,
            expansion: byte & E_FLAG != 0,
            break_command: byte & B_FLAG != 0,
            decimal: byte & D_FLAG != 0,
            interrupt: byte & I_FLAG != 0,
            zero: byte & Z_FLAG != 0,
            carry: byte & C_FLAG != 0,
        }
    }

    pub fn to_byte(&self) -> u8 {
        [
            (self.negative, N_FLAG),
            (self.overflow, V_FLAG),
            (self.expansion, E_FLAG),
            (self.break_command, B_FLAG),
            (self.decimal, D_FLAG),
            (self.interrupt, I_FLAG),
            (self.zero, Z_FLAG),
            (self.carry, C_FLAG),
        ]
        .iter()
        .filter(|(is_set, _)| *is_set)
        .fold(0, |byte, (_, mask)| byte | mask)
    }

    /// Negative and zero flags both follow the last result.
    pub(crate) fn set_nz(&mut self, result: u8) {
        self.negative = result & 0x80 != 0;
        self.zero = result == 0;
    }
}

impl fmt::Display for StatusRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}-{}{}{}{}{}",
            if self.negative { "N" } else { "n" },
            if self.overflow { "V" } else { "v" },
            if self.break_command { "B" } else { "b" },
            if self.decimal { "D" } else { "d" },
            if self.interrupt { "I" } else { "i" },
            if self.zero { "Z" } else { "z" },
            if self.carry { "C" } else { "c" },
        )
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Registers {
    pub accumulator: u8,
    pub register_x: u8,
    pub register_y: u8,
    pub status_register: StatusRegister,
    pub program_counter: u16,
    pub stack_pointer: u8,
}

impl Registers {
    /// Power-on state. The stack pointer starts at 0x00, the reset sequence
    /// walks it down to 0xFD.
    pub fn new(init_address: u16) -> Registers {
        Registers {
            accumulator: 0x00,
            register_x: 0x00,
            register_y: 0x00,
            status_register: StatusRegister::new(),
            program_counter: init_address,
            stack_pointer: 0x00,
        }
    }

    pub fn stack_address(&self) -> u16 {
        STACK_BASE_ADDR + self.stack_pointer as u16
    }

    pub fn decrement_stack_pointer(&mut self) {
        self.stack_pointer = self.stack_pointer.wrapping_sub(1);
    }

    pub fn increment_stack_pointer(&mut self) {
        self.stack_pointer = self.stack_pointer.wrapping_add(1);
    }

    /// Move the program counter to the next byte and return the address it
    /// pointed to.
    pub fn advance_program_counter(&mut self) -> u16 {
        let address = self.program_counter;
        self.program_counter = address.wrapping_add(1);

        address
    }
}

impl Default for Registers {
    fn default() -> Self {
        Registers::new(0x0000)
    }
}

impl fmt::Debug for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registers [A:0x{:02x}, X:0x{:02x}, Y:0x{:02x} | SP:0x{:02x} PC:0x{:04x} | {}]",
            self.accumulator,
            self.register_x,
            self.register_y,
            self.stack_pointer,
            self.program_counter,
            self.status_register
        )
    }
}
