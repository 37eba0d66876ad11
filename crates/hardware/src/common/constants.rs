//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Memory size and the address mask.
//! 2. **Address Map:** Default user-space floor, I/O region, and device registers.
//! 3. **Call Stack Constants:** Default bounds of the reserved stack region.
//! 4. **Console Constants:** Control characters with special meaning to the traps.

/// Number of 16-bit words in main memory (15-bit address space).
pub const WORDS_IN_MEM: usize = 0x8000;

/// Mask applied to an address to obtain the backing-store index.
pub const ADDRESS_MASK: u16 = 0x7FFF;

/// Number of general-purpose registers (R0-R7).
pub const NUM_REGS: usize = 8;

/// Program counter value that the execution driver treats as the halt condition.
pub const HALT_ADDRESS: u16 = 0x0000;

/// Lowest address of the conventional user program area.
///
/// Accesses below this address are performed but reported.
pub const USER_SPACE_START: u16 = 0x3000;

/// Lowest address of the I/O-reserved region.
///
/// Accesses at or above this address are performed but reported.
pub const IO_BASE: u16 = 0xFD00;

/// Device (display) status register. Always reads as not-ready.
pub const DSR: u16 = 0xFE04;

/// Device (display) data register. Writes are redirected to the console.
pub const DDR: u16 = 0xFE06;

/// Lowest word of the reserved call-stack region.
pub const STACK_BASE: u16 = 0x2F00;

/// One past the highest word of the reserved call-stack region.
///
/// The stack cursor rests here while the stack is empty.
pub const STACK_TOP: u16 = 0x3000;

/// Carriage return; written to the console as a CR/LF pair.
pub const CHAR_CR: u8 = 0x0D;

/// Line feed.
pub const CHAR_LF: u8 = 0x0A;

/// End-of-text (Ctrl-C). Terminates the process during character input.
pub const CHAR_ETX: u8 = 0x03;

/// End-of-transmission (Ctrl-D). Terminates the process during character input.
pub const CHAR_EOT: u8 = 0x04;

/// Default name of the session log that mirrors every dump.
pub const DEFAULT_DUMP_FILE: &str = "dumpsim";
