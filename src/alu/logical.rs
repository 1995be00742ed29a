use crate::registers::StatusRegister;

/*
 * Bitwise operations only update the negative and zero flags, carry and
 * overflow keep their previous values.
 */

/// AND
pub fn logical_and(a: u8, b: u8, sr: &mut StatusRegister) -> u8 {
    let result = a & b;
    sr.set_nz(result);

    result
}

/// ORA
pub fn logical_or(a: u8, b: u8, sr: &mut StatusRegister) -> u8 {
    let result = a | b;
    sr.set_nz(result);

    result
}

/// EOR
pub fn logical_xor(a: u8, b: u8, sr: &mut StatusRegister) -> u8 {
    let result = a ^ b;
    sr.set_nz(result);

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alu::tests::{all_status_registers, assert_control_flags_untouched};

    type Operation = fn(u8, u8, &mut StatusRegister) -> u8;

    const OPERATIONS: [(&str, Operation); 3] = [
        ("AND", logical_and),
        ("ORA", logical_or),
        ("EOR", logical_xor),
    ];

    #[test]
    fn test_and() {
        let mut sr = StatusRegister::new();
        assert_eq!(0b1000_0001, logical_and(0b1100_0011, 0b1011_0101, &mut sr));
        assert!(sr.negative);
        assert!(!sr.zero);
        assert_eq!(0x00, logical_and(0xf0, 0x0f, &mut sr));
        assert!(sr.zero);
        assert!(!sr.negative);
    }

    #[test]
    fn test_or() {
        let mut sr = StatusRegister::new();
        assert_eq!(0xff, logical_or(0xf0, 0x0f, &mut sr));
        assert!(sr.negative);
        assert_eq!(0x00, logical_or(0x00, 0x00, &mut sr));
        assert!(sr.zero);
    }

    #[test]
    fn test_xor() {
        let mut sr = StatusRegister::new();
        assert_eq!(0x00, logical_xor(0xa5, 0xa5, &mut sr));
        assert!(sr.zero);
        assert_eq!(0xff, logical_xor(0xa5, 0x5a, &mut sr));
        assert!(sr.negative);
        assert!(!sr.zero);
    }

    #[test]
    fn test_flags_left_alone() {
        for (name, operation) in OPERATIONS {
            for before in all_status_registers() {
                for (a, b) in [(0x00, 0x00), (0xff, 0x0f), (0x80, 0x80), (0x01, 0xfe)] {
                    let mut sr = before;
                    let result = operation(a, b, &mut sr);
                    assert_control_flags_untouched(&before, &sr);
                    assert_eq!(before.carry, sr.carry, "{} modified the carry", name);
                    assert_eq!(before.overflow, sr.overflow, "{} modified the overflow", name);
                    assert_eq!(result == 0, sr.zero, "{} zero flag", name);
                    assert_eq!(result & 0x80 != 0, sr.negative, "{} negative flag", name);
                }
            }
        }
    }
}
