use super::MemoryError;
use crate::cpu_instruction::{INTERRUPT_VECTOR_ADDR, NMI_VECTOR_ADDR, RESET_VECTOR_ADDR};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;

/// Masks protecting the three system vectors, 0xFFFA to 0xFFFF.
const VECTOR_MASKS: [u16; 2] = [0xfffa, 0xfffc];
const C64_MASKS: [u16; 2] = [0xa000, 0xd000];
const APPLE2_MASKS: [u16; 1] = [0xc000];

/*
 * RomMasks
 * Partition of the address space between RAM and ROM. An address is read
 * only when, for at least one mask, every bit set in the mask is also set in
 * the address: 0xA000 covers 0xA000-0xBFFF, 0xE000-0xFFFF…
 * The zero page and the stack page always stay writable and the system
 * vectors are always read only.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomMasks {
    masks: BTreeSet<u16>,
}

impl RomMasks {
    pub fn new(masks: impl IntoIterator<Item = u16>) -> Result<RomMasks, MemoryError> {
        let mut rom = RomMasks {
            masks: BTreeSet::new(),
        };
        for mask in masks {
            // a mask covers itself, so it reaches page 0 or 1 iff it lies there
            if mask & !0x01ff == 0 {
                return Err(MemoryError::SystemPageMask(mask));
            }
            rom.masks.insert(mask);
        }
        if !rom.covers_vectors() {
            rom.masks.extend(VECTOR_MASKS);
        }

        Ok(rom)
    }

    pub fn vectors_only() -> RomMasks {
        RomMasks {
            masks: VECTOR_MASKS.into_iter().collect(),
        }
    }

    /// BASIC ROM at 0xA000 and the I/O + KERNAL area from 0xD000.
    pub fn commodore64() -> RomMasks {
        RomMasks {
            masks: C64_MASKS.into_iter().collect(),
        }
    }

    /// Soft switches and monitor ROM from 0xC000.
    pub fn apple2() -> RomMasks {
        RomMasks {
            masks: APPLE2_MASKS.into_iter().collect(),
        }
    }

    pub fn contains(&self, address: u16) -> bool {
        self.masks.iter().any(|mask| address & mask == *mask)
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.masks.iter().copied()
    }

    fn covers_vectors(&self) -> bool {
        [NMI_VECTOR_ADDR, RESET_VECTOR_ADDR, INTERRUPT_VECTOR_ADDR]
            .iter()
            .all(|vector| self.contains(*vector) && self.contains(vector + 1))
    }
}

impl Default for RomMasks {
    fn default() -> Self {
        RomMasks::vectors_only()
    }
}

impl fmt::Display for RomMasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masks: Vec<String> = self.iter().map(|mask| format!("0x{:04X}", mask)).collect();
        write!(f, "[{}]", masks.join(", "))
    }
}

/// Named address space layouts.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemoryPreset {
    /// Only the system vectors are read only.
    #[default]
    Minimal,
    Commodore64,
    #[serde(rename = "apple2", alias = "appleii")]
    AppleII,
}

impl MemoryPreset {
    pub fn rom_masks(&self) -> RomMasks {
        match self {
            MemoryPreset::Minimal => RomMasks::vectors_only(),
            MemoryPreset::Commodore64 => RomMasks::commodore64(),
            MemoryPreset::AppleII => RomMasks::apple2(),
        }
    }
}

impl fmt::Display for MemoryPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            MemoryPreset::Minimal => "minimal",
            MemoryPreset::Commodore64 => "commodore64",
            MemoryPreset::AppleII => "apple2",
        })
    }
}
