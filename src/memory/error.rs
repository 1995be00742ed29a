use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum MemoryError {
    ImageOverflow(usize, u16, usize), // data len, address, address max
    SystemPageMask(u16),              // mask covering the zero or stack page
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MemoryError::ImageOverflow(len, addr, max) => write!(
                f,
                "Could not LOAD {} bytes at address 0x{:04X}, address max is 0x{:04X}.",
                len, addr, max
            ),
            MemoryError::SystemPageMask(mask) => write!(
                f,
                "ROM mask 0x{:04X} would make the zero page or the stack page read only.",
                mask
            ),
        }
    }
}

impl error::Error for MemoryError {}
