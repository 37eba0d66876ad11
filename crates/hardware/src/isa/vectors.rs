//! Trap vectors.
//!
//! The eight-bit service numbers carried in the low byte of a TRAP instruction.

/// Read one character into R0 without echo.
pub const GETC: u8 = 0x20;

/// Write the low byte of R0 to the console.
pub const OUT: u8 = 0x21;

/// Write a zero-terminated string, one character per word, starting at R0.
pub const PUTS: u8 = 0x22;

/// Prompt, read one character into R0, and echo it.
pub const IN: u8 = 0x23;

/// Write a zero-terminated string, two characters per word, starting at R0.
pub const PUTSP: u8 = 0x24;

/// Halt the machine (PC becomes 0).
pub const HALT: u8 = 0x25;
