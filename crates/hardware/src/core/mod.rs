//! Core processor implementation.
//!
//! This module contains the CPU: its architectural state latches, the
//! fetch-decode-execute cycle, the instruction handlers, the emulated call
//! stack, and the built-in trap services.

/// Architecture-specific state (condition codes, state latches).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

pub use self::cpu::Cpu;
