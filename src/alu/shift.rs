use crate::registers::StatusRegister;

/// Logical shift right (LSR), bit 0 goes to the carry and bit 7 is filled
/// with 0 so the result is never negative.
pub fn shift_right(a: u8, sr: &mut StatusRegister) -> u8 {
    let result = a >> 1;
    sr.carry = a & 0x01 != 0;
    sr.set_nz(result);

    result
}

/// Arithmetic shift left (ASL), bit 7 goes to the carry.
pub fn shift_left(a: u8, sr: &mut StatusRegister) -> u8 {
    let result = a << 1;
    sr.carry = a & 0x80 != 0;
    sr.set_nz(result);

    result
}

/// Rotate left through the carry (ROL).
pub fn rotate_left(a: u8, sr: &mut StatusRegister) -> u8 {
    let result = (a << 1) | u8::from(sr.carry);
    sr.carry = a & 0x80 != 0;
    sr.set_nz(result);

    result
}

/// Rotate right through the carry (ROR). The previous carry lands in bit 7
/// and therefore becomes the negative flag.
pub fn rotate_right(a: u8, sr: &mut StatusRegister) -> u8 {
    let result = (a >> 1) | (u8::from(sr.carry) << 7);
    sr.carry = a & 0x01 != 0;
    sr.set_nz(result);

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alu::tests::assert_control_flags_untouched;

    fn with_carry(carry: bool) -> StatusRegister {
        StatusRegister {
            carry,
            ..StatusRegister::default()
        }
    }

    #[test]
    fn test_shift_right() {
        let cases = [
            (0b0000_0000, 0b0000_0000),
            (0b0000_0001, 0b0000_0000),
            (0b0000_0010, 0b0000_0001),
            (0b0101_0101, 0b0010_1010),
            (0b1010_1010, 0b0101_0101),
            (0b1100_1101, 0b0110_0110),
            (0b1111_1111, 0b0111_1111),
        ];
        for (input, expected) in cases {
            let mut sr = with_carry(true);
            assert_eq!(expected, shift_right(input, &mut sr));
            assert_eq!(input & 1 == 1, sr.carry);
            assert!(!sr.negative);
            assert_eq!(expected == 0, sr.zero);
        }
    }

    #[test]
    fn test_shift_left() {
        let mut sr = with_carry(false);
        assert_eq!(0b0000_0000, shift_left(0b1000_0000, &mut sr));
        assert!(sr.carry);
        assert!(sr.zero);
        assert!(!sr.negative);

        let mut sr = with_carry(true);
        assert_eq!(0b1000_0110, shift_left(0b1100_0011, &mut sr));
        assert!(sr.carry);
        assert!(sr.negative);
        assert!(!sr.zero);

        let mut sr = with_carry(true);
        assert_eq!(0b0000_0010, shift_left(0b0000_0001, &mut sr));
        assert!(!sr.carry);
    }

    #[test]
    fn test_rotate_left() {
        let mut sr = with_carry(true);
        assert_eq!(0b0000_0001, rotate_left(0b1000_0000, &mut sr));
        assert!(sr.carry);
        assert!(!sr.zero);
        assert!(!sr.negative);

        let mut sr = with_carry(false);
        assert_eq!(0b0000_0000, rotate_left(0b1000_0000, &mut sr));
        assert!(sr.carry);
        assert!(sr.zero);

        let mut sr = with_carry(false);
        assert_eq!(0b1000_0000, rotate_left(0b0100_0000, &mut sr));
        assert!(!sr.carry);
        assert!(sr.negative);
    }

    #[test]
    fn test_rotate_right() {
        let mut sr = with_carry(true);
        assert_eq!(0b1000_0000, rotate_right(0b0000_0001, &mut sr));
        assert!(sr.carry);
        assert!(sr.negative);
        assert!(!sr.zero);

        let mut sr = with_carry(false);
        assert_eq!(0x14, rotate_right(0x28, &mut sr));
        assert!(!sr.carry);
        assert!(!sr.negative);

        let mut sr = with_carry(true);
        assert_eq!(0x85, rotate_right(0x0a, &mut sr));
        assert!(!sr.carry);
        assert!(sr.negative);

        let mut sr = with_carry(false);
        assert_eq!(0x00, rotate_right(0x01, &mut sr));
        assert!(sr.carry);
        assert!(sr.zero);
    }

    #[test]
    fn test_carry_out_for_every_input() {
        for input in 0..=255u8 {
            for carry in [false, true] {
                let low = input & 0x01 != 0;
                let high = input & 0x80 != 0;

                let mut sr = with_carry(carry);
                shift_right(input, &mut sr);
                assert_eq!(low, sr.carry, "LSR {:08b}", input);

                let mut sr = with_carry(carry);
                shift_left(input, &mut sr);
                assert_eq!(high, sr.carry, "ASL {:08b}", input);

                let mut sr = with_carry(carry);
                let result = rotate_left(input, &mut sr);
                assert_eq!(high, sr.carry, "ROL {:08b}", input);
                assert_eq!(input & 0x40 != 0, sr.negative);
                assert_eq!(carry, result & 0x01 != 0);

                let mut sr = with_carry(carry);
                let result = rotate_right(input, &mut sr);
                assert_eq!(low, sr.carry, "ROR {:08b}", input);
                assert_eq!(carry, sr.negative);
                assert_eq!(result == 0, sr.zero);
            }
        }
    }

    #[test]
    fn test_overflow_and_control_flags_untouched() {
        let before = StatusRegister::from_byte(0b0111_1100);
        type Shift = fn(u8, &mut StatusRegister) -> u8;
        let operations: [Shift; 4] = [shift_right, shift_left, rotate_left, rotate_right];
        for operation in operations {
            for input in [0x00, 0x01, 0x80, 0xff] {
                let mut sr = before;
                operation(input, &mut sr);
                assert!(sr.overflow);
                assert_control_flags_untouched(&before, &sr);
            }
        }
    }
}
