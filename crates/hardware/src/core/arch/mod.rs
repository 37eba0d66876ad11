//! LC-3 architectural state.
//!
//! This module contains the state a cycle reads and commits:
//! 1. **Condition Codes:** The mutually exclusive N/Z/P flags.
//! 2. **Latches:** PC, condition codes, instruction register, and register file,
//!    committed as one unit at every cycle boundary.

/// N/Z/P condition code flags.
pub mod cc;

/// Architectural state latches.
pub mod latches;
