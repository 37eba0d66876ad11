//! Trap Service Routines.
//!
//! The LC-3 `TRAP` instruction does not vector through memory here; the
//! simulator services the standard vectors itself:
//! 1. **Input:** `GETC` and `IN` busy-poll the console in raw mode and store the key in R0.
//! 2. **Output:** `OUT`, `PUTS`, and `PUTSP` write characters through the bus's CR/LF rule.
//! 3. **Halt:** `HALT` sets PC to zero, which the driver treats as the halt condition.
//!
//! Any other vector is a no-op.

use std::io;

use tracing::info;

use super::Cpu;
use crate::common::constants::{CHAR_EOT, CHAR_ETX, HALT_ADDRESS};
use crate::common::{AccessType, SimError};
use crate::core::arch::latches::Latches;
use crate::isa::vectors;
use crate::soc::Console;

/// Prompt printed by the `IN` service.
const IN_PROMPT: &str = "Input a character: ";

impl Cpu {
    /// Services a trap vector.
    ///
    /// # Arguments
    ///
    /// * `next` - Scratch latches for this cycle.
    /// * `vector` - The 8-bit trap vector.
    ///
    /// # Returns
    ///
    /// `Err(SimError::KeyboardInterrupt)` if Ctrl-C or Ctrl-D arrives during
    /// input, `Err(SimError::Console)` if the console fails.
    pub fn exec_trap(&mut self, next: &mut Latches, vector: u8) -> Result<(), SimError> {
        match vector {
            vectors::GETC => {
                let key = self.read_key()?;
                next.regs.write(0, u16::from(key));
            }
            vectors::OUT => {
                self.bus.put_char(next.regs.read(0) as u8)?;
                self.bus.console().flush()?;
            }
            vectors::PUTS => self.puts(next.regs.read(0), false)?,
            vectors::IN => {
                self.bus.put_str(IN_PROMPT)?;
                let key = self.read_key()?;
                let console = self.bus.console();
                console.put_char(key)?;
                console.flush()?;
                next.regs.write(0, u16::from(key));
            }
            vectors::PUTSP => self.puts(next.regs.read(0), true)?,
            vectors::HALT => {
                info!(pc = format_args!("{:#06x}", self.current.pc), "halt");
                next.pc = HALT_ADDRESS;
            }
            _ => {}
        }
        Ok(())
    }

    /// Waits for one keystroke in raw mode.
    ///
    /// Terminal mode is restored before returning, including on error.
    fn read_key(&mut self) -> Result<u8, SimError> {
        let console = self.bus.console();
        console.set_raw_mode(true)?;
        let key = poll_key(console);
        console.set_raw_mode(false)?;

        let key = key?;
        if key == CHAR_ETX || key == CHAR_EOT {
            return Err(SimError::KeyboardInterrupt);
        }
        Ok(key)
    }

    /// Writes a zero-terminated string starting at `addr`.
    ///
    /// Unpacked strings hold one character per word. Packed strings hold two,
    /// low byte first; a zero high byte is skipped. The address wraps.
    fn puts(&mut self, mut addr: u16, packed: bool) -> Result<(), SimError> {
        loop {
            let word = self.bus.read(addr, AccessType::Read);
            if word == 0 {
                break;
            }
            if packed {
                self.bus.put_char((word & 0xFF) as u8)?;
                let high = (word >> 8) as u8;
                if high != 0 {
                    self.bus.put_char(high)?;
                }
            } else {
                self.bus.put_char(word as u8)?;
            }
            addr = addr.wrapping_add(1);
        }
        self.bus.console().flush()?;
        Ok(())
    }
}

/// Spins until the console has a key, then reads it.
fn poll_key(console: &mut dyn Console) -> io::Result<u8> {
    while !console.key_ready()? {}
    console.read_key()
}
