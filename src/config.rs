use crate::cpu_instruction::RESET_VECTOR_ADDR;
use crate::memory::{Memory, MemoryError, MemoryImage, MemoryPreset, RomMasks};
use crate::pulse::Clock;
use log::debug;
use serde::Deserialize;
use std::error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Description of a machine: memory layout, contents and clock.
///
/// ```yaml
/// preset: commodore64
/// period_ns: 1000
/// image: "program.bin"
/// load_address: "0800"
/// reset_vector: "0800"
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    pub preset: MemoryPreset,
    /// Explicit ROM masks, replace the ones of the preset.
    pub rom_masks: Option<Vec<String>>,
    /// 0 runs as fast as possible.
    pub period_ns: u64,
    /// Relative paths are resolved from the config file directory.
    pub image: Option<PathBuf>,
    pub load_address: String,
    pub reset_vector: Option<String>,
    pub randomize_ram: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            preset: MemoryPreset::Minimal,
            rom_masks: None,
            period_ns: 1000,
            image: None,
            load_address: "0000".to_owned(),
            reset_vector: None,
            randomize_ram: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, io::Error),
    Parse(PathBuf, serde_yaml::Error),
    InvalidAddress(String),
    UnknownPreset(String),
    Memory(MemoryError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(path, err) => write!(f, "Could not read '{}': {}", path.display(), err),
            ConfigError::Parse(path, err) => {
                write!(f, "Failed to parse YAML from '{}': {}", path.display(), err)
            }
            ConfigError::InvalidAddress(addr) => {
                write!(f, "'{}' is not a valid hexadecimal address.", addr)
            }
            ConfigError::UnknownPreset(name) => write!(
                f,
                "Unknown memory preset '{}', expected minimal, commodore64 or apple2.",
                name
            ),
            ConfigError::Memory(err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ConfigError::Io(_, err) => Some(err),
            ConfigError::Parse(_, err) => Some(err),
            ConfigError::InvalidAddress(_) | ConfigError::UnknownPreset(_) => None,
            ConfigError::Memory(err) => Some(err),
        }
    }
}

impl From<MemoryError> for ConfigError {
    fn from(err: MemoryError) -> Self {
        ConfigError::Memory(err)
    }
}

impl FromStr for MemoryPreset {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "minimal" => Ok(MemoryPreset::Minimal),
            "commodore64" | "c64" => Ok(MemoryPreset::Commodore64),
            "apple2" | "appleii" => Ok(MemoryPreset::AppleII),
            _ => Err(ConfigError::UnknownPreset(name.to_owned())),
        }
    }
}

/// Parses 1 to 4 hexadecimal digits, with an optional `0x`, `$` or `#`
/// prefix.
pub fn parse_address(addr: &str) -> Result<u16, ConfigError> {
    let digits = ["0x", "0X", "$", "#"]
        .iter()
        .find_map(|prefix| addr.strip_prefix(prefix))
        .unwrap_or(addr);
    if digits.is_empty() || digits.len() > 4 {
        return Err(ConfigError::InvalidAddress(addr.to_owned()));
    }
    let bytes = hex::decode(format!("{:0>4}", digits))
        .map_err(|_| ConfigError::InvalidAddress(addr.to_owned()))?;

    Ok(bytes.iter().fold(0u16, |word, byte| word << 8 | u16::from(*byte)))
}

impl MachineConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config: MachineConfig = serde_yaml::from_str(&contents)
            .map_err(|err| ConfigError::Parse(path.to_path_buf(), err))?;

        let config_dir = path.parent().unwrap_or_else(|| Path::new(""));
        config.image = config.image.map(|image| config_dir.join(image));
        debug!("loaded machine config from {}: {:?}", path.display(), config);

        Ok(config)
    }

    pub fn rom_masks(&self) -> Result<RomMasks, ConfigError> {
        match &self.rom_masks {
            Some(masks) => {
                let masks = masks
                    .iter()
                    .map(|mask| parse_address(mask))
                    .collect::<Result<Vec<u16>, ConfigError>>()?;

                Ok(RomMasks::new(masks)?)
            }
            None => Ok(self.preset.rom_masks()),
        }
    }

    pub fn load_address(&self) -> Result<u16, ConfigError> {
        parse_address(&self.load_address)
    }

    pub fn reset_vector(&self) -> Result<Option<u16>, ConfigError> {
        self.reset_vector.as_deref().map(parse_address).transpose()
    }

    pub fn pulse_period(&self) -> Duration {
        Duration::from_nanos(self.period_ns)
    }

    pub fn clock(&self) -> Clock {
        Clock::new(self.pulse_period())
    }

    /// Fills the memory image then seals it with the ROM masks.
    pub fn build_memory(&self) -> Result<Memory, ConfigError> {
        let rom = self.rom_masks()?;
        let mut image = if self.randomize_ram {
            MemoryImage::randomized(&mut rand::rng())
        } else {
            MemoryImage::new()
        };

        if let Some(path) = &self.image {
            let data = std::fs::read(path).map_err(|err| ConfigError::Io(path.clone(), err))?;
            let address = self.load_address()?;
            image.load(address, &data)?;
            debug!("loaded {} bytes at #0x{:04X} from {}", data.len(), address, path.display());
        }
        if let Some(vector) = self.reset_vector()? {
            image.set_word(RESET_VECTOR_ADDR, vector);
        }

        Ok(Memory::new(image, rom))
    }
}
