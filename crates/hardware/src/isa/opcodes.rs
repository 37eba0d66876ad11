//! LC-3 Opcodes.
//!
//! Defines the major opcodes (bits 15-12) of the sixteen-entry opcode table.

/// Conditional branch (BR).
pub const OP_BR: u16 = 0b0000;

/// Add, register or immediate mode (ADD).
pub const OP_ADD: u16 = 0b0001;

/// PC-relative load (LD).
pub const OP_LD: u16 = 0b0010;

/// PC-relative store (ST).
pub const OP_ST: u16 = 0b0011;

/// Jump to subroutine; bit 11 selects offset (JSR) or register (JSRR) form.
pub const OP_JSR: u16 = 0b0100;

/// Bitwise and, register or immediate mode (AND).
pub const OP_AND: u16 = 0b0101;

/// Base+offset load (LDR).
pub const OP_LDR: u16 = 0b0110;

/// Base+offset store (STR).
pub const OP_STR: u16 = 0b0111;

/// Return from interrupt (RTI).
pub const OP_RTI: u16 = 0b1000;

/// Bitwise complement (NOT).
pub const OP_NOT: u16 = 0b1001;

/// Indirect load (LDI).
pub const OP_LDI: u16 = 0b1010;

/// Indirect store (STI).
pub const OP_STI: u16 = 0b1011;

/// Register jump; base register 7 is the RET form (JMP/RET).
pub const OP_JMP: u16 = 0b1100;

/// Load effective address (LEA).
pub const OP_LEA: u16 = 0b1110;

/// Software interrupt (TRAP).
pub const OP_TRAP: u16 = 0b1111;
