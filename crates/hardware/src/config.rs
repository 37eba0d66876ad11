//! Configuration system for the LC-3 simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline address map, call-stack region, and session log name.
//! 2. **Structures:** Hierarchical config for general, memory, stack, and session settings.
//! 3. **Validation:** Consistency checks run before a simulator is built.
//!
//! Configuration is supplied as JSON (`lc3sim --config sim.json`) or use `Config::default()`.

use serde::Deserialize;

use crate::common::SimError;
use crate::common::constants;

/// Default configuration constants for the simulator.
///
/// These values reproduce the reference LC-3 memory map when not explicitly
/// overridden in a JSON configuration file.
mod defaults {
    use crate::common::constants;

    /// Lowest address of the user program area.
    pub const USER_SPACE_START: u16 = constants::USER_SPACE_START;

    /// Lowest address of the I/O-reserved region.
    pub const IO_BASE: u16 = constants::IO_BASE;

    /// Display status register address.
    pub const DSR: u16 = constants::DSR;

    /// Display data register address.
    pub const DDR: u16 = constants::DDR;

    /// Lowest word of the call-stack region.
    pub const STACK_BASE: u16 = constants::STACK_BASE;

    /// One past the highest word of the call-stack region.
    pub const STACK_TOP: u16 = constants::STACK_TOP;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use lc3sim_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.stack.base, 0x2F00);
/// ```
///
/// Deserializing from JSON; omitted sections and fields keep their defaults:
///
/// ```
/// use lc3sim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "start_pc": 12288 },
///     "stack": { "base": 12272, "top": 12288 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.start_pc, Some(0x3000));
/// assert_eq!(config.stack.base, 0x2FF0);
/// assert_eq!(config.memory.ddr, 0xFE06);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Address map of user space and memory-mapped devices
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Reserved call-stack region
    #[serde(default)]
    pub stack: StackConfig,
    /// Interactive session settings
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Arguments
    ///
    /// * `json` - The JSON document.
    ///
    /// # Returns
    ///
    /// The validated configuration, or `SimError::Config` / `SimError::InvalidConfig`.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the address map and stack region are self-consistent.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is usable, otherwise `SimError::InvalidConfig`.
    pub fn validate(&self) -> Result<(), SimError> {
        let mem = &self.memory;
        let stack = &self.stack;

        if stack.base >= stack.top {
            return Err(SimError::InvalidConfig(format!(
                "stack base {:#06x} must be below stack top {:#06x}",
                stack.base, stack.top
            )));
        }
        if usize::from(stack.top) > constants::WORDS_IN_MEM {
            return Err(SimError::InvalidConfig(format!(
                "stack top {:#06x} lies outside memory",
                stack.top
            )));
        }
        if mem.user_space_start >= mem.io_base {
            return Err(SimError::InvalidConfig(format!(
                "user space start {:#06x} must be below I/O base {:#06x}",
                mem.user_space_start, mem.io_base
            )));
        }
        if mem.dsr < mem.io_base || mem.ddr < mem.io_base {
            return Err(SimError::InvalidConfig(format!(
                "device registers {:#06x}/{:#06x} must lie in the I/O region",
                mem.dsr, mem.ddr
            )));
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace` event with the disassembly of every executed instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value (defaults to the load base of the first program image)
    #[serde(default)]
    pub start_pc: Option<u16>,
}

/// Address map of user space and memory-mapped devices.
///
/// Accesses below `user_space_start` or at/above `io_base` are performed but
/// reported as anomalies.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Lowest address of the user program area
    #[serde(default = "MemoryConfig::default_user_space_start")]
    pub user_space_start: u16,

    /// Lowest address of the I/O-reserved region
    #[serde(default = "MemoryConfig::default_io_base")]
    pub io_base: u16,

    /// Display status register (always reads as not-ready)
    #[serde(default = "MemoryConfig::default_dsr")]
    pub dsr: u16,

    /// Display data register (writes go to the console)
    #[serde(default = "MemoryConfig::default_ddr")]
    pub ddr: u16,
}

impl MemoryConfig {
    /// Returns the default user space floor.
    fn default_user_space_start() -> u16 {
        defaults::USER_SPACE_START
    }

    /// Returns the default I/O region base.
    fn default_io_base() -> u16 {
        defaults::IO_BASE
    }

    /// Returns the default display status register address.
    fn default_dsr() -> u16 {
        defaults::DSR
    }

    /// Returns the default display data register address.
    fn default_ddr() -> u16 {
        defaults::DDR
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            user_space_start: defaults::USER_SPACE_START,
            io_base: defaults::IO_BASE,
            dsr: defaults::DSR,
            ddr: defaults::DDR,
        }
    }
}

/// Reserved call-stack region `[base, top)`.
///
/// The stack grows downward from `top`; its capacity is `top - base` words.
#[derive(Debug, Clone, Deserialize)]
pub struct StackConfig {
    /// Lowest word of the region
    #[serde(default = "StackConfig::default_base")]
    pub base: u16,

    /// One past the highest word of the region
    #[serde(default = "StackConfig::default_top")]
    pub top: u16,
}

impl StackConfig {
    /// Returns the default lowest stack word.
    fn default_base() -> u16 {
        defaults::STACK_BASE
    }

    /// Returns the default stack top.
    fn default_top() -> u16 {
        defaults::STACK_TOP
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            base: defaults::STACK_BASE,
            top: defaults::STACK_TOP,
        }
    }
}

/// Interactive session settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// File that mirrors every memory and register dump
    #[serde(default = "SessionConfig::default_dump_file")]
    pub dump_file: String,
}

impl SessionConfig {
    /// Returns the default session log name.
    fn default_dump_file() -> String {
        constants::DEFAULT_DUMP_FILE.to_string()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dump_file: Self::default_dump_file(),
        }
    }
}
