//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout the simulator.
//! These types are used for the following:
//! 1. **Anomaly Reporting:** Naming the kind of access that strayed outside the user range.
//! 2. **Statistics Tracking:** Categorizing out-of-range accesses for the run summary.

use std::fmt;

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores
/// when an access lands outside the user address range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access.
    ///
    /// Occurs when the fetch stage reads the word at the program counter.
    Fetch,

    /// Data read access.
    ///
    /// Occurs during load instructions and string-output traps.
    Read,

    /// Data write access.
    ///
    /// Occurs during store instructions.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => f.write_str("fetch"),
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}
