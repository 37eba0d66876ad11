//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight 16-bit
//! general-purpose registers. It provides:
//! 1. **Storage:** R0-R7, zero-initialised.
//! 2. **Truncation:** Every write is masked to one machine word.
//! 3. **Observability:** An iterator over all registers for dumps.

use super::constants::NUM_REGS;

/// General-purpose register file (R0-R7).
///
/// Register indices come straight out of 3-bit instruction fields, so every
/// index in `0..8` is valid. Unlike RISC-V, R0 is an ordinary register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u16; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7). Higher bits are ignored.
    ///
    /// # Returns
    ///
    /// The 16-bit value stored in the register.
    #[inline]
    pub fn read(&self, idx: usize) -> u16 {
        self.regs[idx & (NUM_REGS - 1)]
    }

    /// Writes a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7). Higher bits are ignored.
    /// * `val` - The 16-bit value to write.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u16) {
        self.regs[idx & (NUM_REGS - 1)] = val;
    }

    /// Returns an iterator over `(index, value)` for R0-R7.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u16)> + '_ {
        self.regs.iter().copied().enumerate()
    }
}
