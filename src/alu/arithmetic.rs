use crate::registers::StatusRegister;

/*
 * Binary coded decimal: the high nibble holds the tens digit, the low nibble
 * holds the units digit, so a byte covers 0 to 99.
 * 0b0111_1001 is 79, 0b0001_0100 is 14.
 */
fn decode_decimal(byte: u8) -> (u8, u8) {
    (byte >> 4, byte & 0x0f)
}

fn encode_decimal(tens: u8, units: u8) -> u8 {
    (tens << 4) | units
}

/// Digits above 9 are not BCD but stay accepted: the digit result is still
/// reduced modulo 10.
fn add_decimal_digits(a: u8, b: u8, carry: &mut bool) -> u8 {
    let sum = a + b + u8::from(*carry);
    *carry = sum > 9;

    sum % 10
}

fn subtract_decimal_digits(a: u8, b: u8, borrow: &mut bool) -> u8 {
    let difference = i16::from(a) - i16::from(b) - i16::from(*borrow);
    *borrow = difference < 0;

    difference.rem_euclid(10) as u8
}

fn add_decimal(a: u8, b: u8, carry: &mut bool) -> u8 {
    let (tens_a, units_a) = decode_decimal(a);
    let (tens_b, units_b) = decode_decimal(b);
    let units = add_decimal_digits(units_a, units_b, carry);
    let tens = add_decimal_digits(tens_a, tens_b, carry);

    encode_decimal(tens, units)
}

fn subtract_decimal(a: u8, b: u8, borrow: &mut bool) -> u8 {
    let (tens_a, units_a) = decode_decimal(a);
    let (tens_b, units_b) = decode_decimal(b);
    let units = subtract_decimal_digits(units_a, units_b, borrow);
    let tens = subtract_decimal_digits(tens_a, tens_b, borrow);

    encode_decimal(tens, units)
}

fn add_binary(a: u8, b: u8, carry: &mut bool) -> u8 {
    let sum = u16::from(a) + u16::from(b) + u16::from(*carry);
    *carry = sum > 0xff;

    sum as u8
}

fn subtract_binary(a: u8, b: u8, borrow: &mut bool) -> u8 {
    let difference = i16::from(a) - i16::from(b) - i16::from(*borrow);
    *borrow = difference < 0;

    difference as u8
}

/// The overflow flag compares the sign bit of the first operand with the
/// sign bit of the result, in binary as in decimal mode.
fn update_flags(a: u8, result: u8, sr: &mut StatusRegister) {
    sr.overflow = (a ^ result) & 0x80 != 0;
    sr.set_nz(result);
}

/// Add with carry (ADC).
///
/// In decimal mode both operands are packed BCD and the carry is set when
/// the decimal sum exceeds 99, otherwise when the binary sum exceeds 255.
pub fn add(a: u8, b: u8, sr: &mut StatusRegister) -> u8 {
    let mut carry = sr.carry;
    let result = if sr.decimal {
        add_decimal(a, b, &mut carry)
    } else {
        add_binary(a, b, &mut carry)
    };
    sr.carry = carry;
    update_flags(a, result, sr);

    result
}

/// Subtract with borrow (SBC).
///
/// The borrow is the complement of the carry flag. After the operation the
/// carry is set when no borrow occurred, that is the result is not below zero.
pub fn subtract(a: u8, b: u8, sr: &mut StatusRegister) -> u8 {
    let mut borrow = !sr.carry;
    let result = if sr.decimal {
        subtract_decimal(a, b, &mut borrow)
    } else {
        subtract_binary(a, b, &mut borrow)
    };
    sr.carry = !borrow;
    update_flags(a, result, sr);

    result
}
