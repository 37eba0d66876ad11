//! Memory system and console I/O.
//!
//! This module organizes the components behind the CPU's memory port: the
//! flat word-addressed store, the bus that applies the memory-mapped device
//! intercepts and range checks, and the console driver the device registers
//! and trap services talk to.

/// Console driver trait and the raw-mode terminal implementation.
pub mod console;

/// Memory-mapped bus: device intercepts and out-of-range reporting.
pub mod interconnect;

/// Flat word-addressed main memory.
pub mod memory;

pub use console::{Console, TerminalConsole};
pub use interconnect::Bus;
pub use memory::Memory;
