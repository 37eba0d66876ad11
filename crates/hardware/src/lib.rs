//! LC-3 instruction-set simulator library.
//!
//! This crate implements a functional simulator for the 16-bit LC-3 architecture with the following:
//! 1. **Core:** Committed state latches, the fetch-decode-execute cycle, and the emulated call stack.
//! 2. **ISA:** Field extraction, decoding, and disassembly of all sixteen opcodes.
//! 3. **SoC:** Flat word memory, the memory-mapped display registers, and the console driver.
//! 4. **Simulation:** Program-image loading, the run/halt driver, dumps, and statistics.

/// Common types and constants (address map, registers, errors, access types).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures, validation).
pub mod config;
/// CPU core (latches, execution, call stack, traps).
pub mod core;
/// Instruction set (fields, opcodes, trap vectors, decode, disassembly).
pub mod isa;
/// Program loader, simulator driver, and session log.
pub mod sim;
/// Memory, bus, and console.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds latches, bus, call stack, and stats.
pub use crate::core::Cpu;
/// Fatal error type returned throughout the crate.
pub use crate::common::SimError;
/// Top-level driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
