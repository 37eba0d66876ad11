//! Memory-mapped bus for the CPU's memory port.
//!
//! This module implements the bus that sits between the CPU and main memory. It provides:
//! 1. **Device intercepts:** The display status register always reads as not-ready;
//!    writes to the display data register go to the console instead of memory.
//! 2. **Range reporting:** Accesses below the user floor or inside the I/O region are
//!    performed anyway and queued as [`Anomaly::OutOfRange`] for the CPU to report.
//! 3. **Console output:** Character output with carriage-return to CR/LF translation,
//!    shared by the data register and the output traps.

use std::fmt;

use crate::common::constants::{CHAR_CR, CHAR_LF};
use crate::common::{AccessType, Anomaly, SimError};
use crate::config::MemoryConfig;
use crate::soc::console::Console;
use crate::soc::memory::Memory;

/// Bus connecting the CPU to memory and the console.
pub struct Bus {
    /// Main memory. Public for loaders, the call stack, and inspection commands.
    pub memory: Memory,
    /// Console behind the device registers.
    console: Box<dyn Console>,
    /// Address map.
    map: MemoryConfig,
    /// Anomalies raised since the last drain.
    pending: Vec<Anomaly>,
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bus")
            .field("memory", &self.memory)
            .field("map", &self.map)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl Bus {
    /// Creates a bus over zeroed memory.
    ///
    /// # Arguments
    ///
    /// * `map` - Address map (user floor, I/O base, device registers).
    /// * `console` - Console driver for the device registers and traps.
    pub fn new(map: MemoryConfig, console: Box<dyn Console>) -> Self {
        Self {
            memory: Memory::new(),
            console,
            map,
            pending: Vec::new(),
        }
    }

    /// Returns `true` if `addr` lies outside the user address range.
    #[inline]
    pub const fn out_of_range(&self, addr: u16) -> bool {
        addr < self.map.user_space_start || addr >= self.map.io_base
    }

    /// Reads a word as seen by a program.
    ///
    /// The display status register reads as zero. Other out-of-range reads
    /// succeed and queue an anomaly.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address to read.
    /// * `access` - `Fetch` or `Read`, for reporting.
    pub fn read(&mut self, addr: u16, access: AccessType) -> u16 {
        if addr == self.map.dsr {
            return 0;
        }
        if self.out_of_range(addr) {
            self.pending.push(Anomaly::OutOfRange { access, addr });
        }
        self.memory.read(addr)
    }

    /// Writes a word as seen by a program.
    ///
    /// A write to the display data register prints the value instead of
    /// storing it. Other out-of-range writes succeed and queue an anomaly.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address to write.
    /// * `val` - Word to store.
    ///
    /// # Returns
    ///
    /// `Err(SimError::Console)` only if the console rejects the character.
    pub fn write(&mut self, addr: u16, val: u16) -> Result<(), SimError> {
        if addr == self.map.ddr {
            return self.put_char(val as u8);
        }
        if self.out_of_range(addr) {
            self.pending.push(Anomaly::OutOfRange {
                access: AccessType::Write,
                addr,
            });
        }
        self.memory.write(addr, val);
        Ok(())
    }

    /// Prints one character; a carriage return becomes CR/LF.
    ///
    /// # Arguments
    ///
    /// * `ch` - Character code.
    pub fn put_char(&mut self, ch: u8) -> Result<(), SimError> {
        if ch == CHAR_CR {
            self.console.put_char(CHAR_CR)?;
            self.console.put_char(CHAR_LF)?;
        } else {
            self.console.put_char(ch)?;
        }
        Ok(())
    }

    /// Prints a byte string verbatim (no CR translation).
    pub fn put_str(&mut self, text: &str) -> Result<(), SimError> {
        for b in text.bytes() {
            self.console.put_char(b)?;
        }
        self.console.flush()?;
        Ok(())
    }

    /// Direct access to the console driver for the input traps.
    pub fn console(&mut self) -> &mut dyn Console {
        self.console.as_mut()
    }

    /// Takes every anomaly queued since the previous call.
    pub fn drain_anomalies(&mut self) -> Vec<Anomaly> {
        std::mem::take(&mut self.pending)
    }
}
