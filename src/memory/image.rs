use super::*;
use rand::Rng;

/*
 * MemoryImage
 * Raw 64 KiB of memory contents. Everything is writable here: this is where
 * programs and ROM contents are loaded before the image is sealed into a
 * Memory. On its own it behaves like a plain RAM.
 */
#[derive(Clone, PartialEq, Eq)]
pub struct MemoryImage {
    bytes: Box<[u8]>,
}

impl MemoryImage {
    pub fn new() -> MemoryImage {
        MemoryImage {
            bytes: vec![0x00; MEMMAX + 1].into_boxed_slice(),
        }
    }

    /// Power-on garbage: real DRAM does not start zeroed.
    pub fn randomized<R: Rng + ?Sized>(rng: &mut R) -> MemoryImage {
        let mut image = MemoryImage::new();
        rng.fill(&mut image.bytes[..]);

        image
    }

    pub fn load(&mut self, address: u16, data: &[u8]) -> Result<(), MemoryError> {
        let start = usize::from(address);
        if start + data.len() > MEMMAX + 1 {
            return Err(MemoryError::ImageOverflow(data.len(), address, MEMMAX));
        }
        self.bytes[start..start + data.len()].copy_from_slice(data);

        Ok(())
    }

    /// Stores a little endian word, typically a vector.
    pub fn set_word(&mut self, address: u16, word: u16) {
        let [low, high] = word.to_le_bytes();
        self.bytes[usize::from(address)] = low;
        self.bytes[usize::from(address.wrapping_add(1))] = high;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for MemoryImage {
    fn default() -> Self {
        MemoryImage::new()
    }
}

impl AddressableIO for MemoryImage {
    fn read(&self, address: u16) -> u8 {
        self.bytes[usize::from(address)]
    }

    fn write(&mut self, address: u16, value: u8) -> bool {
        self.bytes[usize::from(address)] = value;

        true
    }
}
