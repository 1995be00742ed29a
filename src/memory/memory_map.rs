use super::*;
use log::trace;
use std::fmt;

/*
 * Memory
 * 64 KiB address space split between RAM and ROM by a set of masks.
 * The contents of the ROM areas are fixed when the image is sealed, writes
 * to them are rejected.
 */
pub struct Memory {
    image: MemoryImage,
    rom: RomMasks,
}

impl Memory {
    pub fn new(image: MemoryImage, rom: RomMasks) -> Memory {
        Memory { image, rom }
    }

    pub fn with_default_masks(image: MemoryImage) -> Memory {
        Memory::new(image, RomMasks::vectors_only())
    }

    pub fn commodore64(image: MemoryImage) -> Memory {
        Memory::new(image, RomMasks::commodore64())
    }

    pub fn apple2(image: MemoryImage) -> Memory {
        Memory::new(image, RomMasks::apple2())
    }

    pub fn from_preset(preset: MemoryPreset, image: MemoryImage) -> Memory {
        Memory::new(image, preset.rom_masks())
    }

    pub fn is_read_only(&self, address: u16) -> bool {
        self.rom.contains(address)
    }

    pub fn rom_masks(&self) -> &RomMasks {
        &self.rom
    }
}

impl AddressableIO for Memory {
    fn read(&self, address: u16) -> u8 {
        self.image.read(address)
    }

    fn write(&mut self, address: u16, value: u8) -> bool {
        if self.is_read_only(address) {
            trace!("rejected write 0x{:02x} at ROM address #0x{:04X}", value, address);
            return false;
        }

        self.image.write(address, value)
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Memory {{ rom: {} }}", self.rom)
    }
}
