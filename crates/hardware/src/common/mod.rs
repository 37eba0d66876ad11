//! Common utilities and types used throughout the LC-3 simulator.
//!
//! This module provides the building blocks shared by every component of the simulator.
//! It includes:
//! 1. **Constants:** The address map, word masks, and architectural sizes.
//! 2. **Memory Access:** Classification of memory operations (Fetch/Read/Write).
//! 3. **Error Handling:** Fatal simulator errors and reported-and-continue anomalies.
//! 4. **Register Management:** The eight-entry general-purpose register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Fatal error and reported anomaly definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use data::AccessType;
pub use error::{Anomaly, SimError};
pub use reg::RegisterFile;
