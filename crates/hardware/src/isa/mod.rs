//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LC-3 opcode table, trap vectors, bit-field extraction, the
//! decoder that turns a raw word into a typed [`decode::Instruction`], and a
//! disassembler used by instruction tracing.

/// Instruction decoding into typed operations.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction and sign extension.
pub mod instruction;

/// Major opcodes (bits 15-12).
pub mod opcodes;

/// Trap vector numbers for the built-in service routines.
pub mod vectors;
