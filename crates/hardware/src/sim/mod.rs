//! Simulation driver, program loading, and session logging.
//!
//! Provides the program-image loader, the top-level [`Simulator`] that
//! drives the CPU under the run/halt rules, and the session log that
//! mirrors inspection output to disk.

/// Program image parsing and placement.
pub mod loader;

/// Append-only log of every dump issued during a session.
pub mod session;

/// Top-level simulator driver.
pub mod simulator;

pub use loader::ProgramImage;
pub use session::SessionLog;
pub use simulator::{DumpStyle, RunOutcome, Simulator};
