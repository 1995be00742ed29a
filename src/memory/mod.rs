mod error;
mod image;
mod memory_map;
mod partition;

pub use error::MemoryError;
pub use image::MemoryImage;
pub use memory_map::Memory;
pub use partition::{MemoryPreset, RomMasks};

/// Highest address of the 64 KiB address space.
pub const MEMMAX: usize = 0xffff;

/// Builds a 16 bits word from at most two little endian bytes.
pub fn little_endian(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .take(2)
        .rev()
        .fold(0u16, |word, byte| word << 8 | u16::from(*byte))
}

/*
 * AddressableIO
 * this trait defines the interface for all memory systems the CPU can be
 * wired to. Reads always succeed, writes tell if they were accepted.
 */
pub trait AddressableIO {
    fn read(&self, address: u16) -> u8;

    /// Returns false and leaves the memory untouched when the address is
    /// read only.
    fn write(&mut self, address: u16, value: u8) -> bool;

    /// Little endian word, the high byte address wraps at 0xFFFF.
    fn read_word(&self, address: u16) -> u16 {
        little_endian(&[self.read(address), self.read(address.wrapping_add(1))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian() {
        assert_eq!(0x1234, little_endian(&[0x34, 0x12]));
        assert_eq!(0x0011, little_endian(&[0x11, 0x00]));
        assert_eq!(0x1100, little_endian(&[0x00, 0x11]));
        assert_eq!(0x00ab, little_endian(&[0xab]));
        assert_eq!(0x0000, little_endian(&[]));
    }

    #[test]
    fn test_read_word_wraps() {
        let mut image = MemoryImage::new();
        image.load(0xffff, &[0x34]).unwrap();
        image.load(0x0000, &[0x12]).unwrap();
        assert_eq!(0x1234, image.read_word(0xffff));
    }
}
