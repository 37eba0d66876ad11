//! Simulator error and anomaly definitions.
//!
//! This module defines the two tiers of failure the simulator distinguishes:
//! 1. **Fatal Errors:** `SimError`, returned through `Result` and terminating the session
//!    (unreadable or malformed program image, keyboard interrupt, console failure).
//! 2. **Reported Anomalies:** `Anomaly`, logged and counted while execution continues
//!    (out-of-range memory access, call-stack overflow or underflow).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::data::AccessType;

/// Fatal simulator errors.
///
/// Any of these ends the session: the command shell prints the message and exits
/// with a non-zero status.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program image could not be read from disk.
    #[error("can't open program file {}: {source}", path.display())]
    Io {
        /// Path of the image that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The program image contains no words at all.
    #[error("program file is empty")]
    EmptyImage,

    /// A token in the program image is not a base-16 word.
    #[error("line {line}: '{token}' is not a hexadecimal word")]
    BadWord {
        /// One-based line number of the offending token.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The program image runs past the end of memory.
    #[error("program image at {base:#06x} is too long to fit in memory ({words} words)")]
    ImageTooLarge {
        /// Load base address of the image.
        base: u16,
        /// Number of words in the image body.
        words: usize,
    },

    /// A keyboard interrupt (Ctrl-C / Ctrl-D) arrived during character input.
    #[error("keyboard interruption")]
    KeyboardInterrupt,

    /// The console driver failed.
    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),

    /// The configuration parsed but is not self-consistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration could not be parsed.
    #[error("malformed configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Reported-and-continue anomalies.
///
/// Anomalies are emitted through `tracing::warn!` and counted in
/// [`SimStats`](crate::stats::SimStats); the instruction that raised one still completes
/// with best-effort semantics.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Anomaly {
    /// A memory access landed below the user floor or inside the I/O region.
    #[error("attempt to {access} address {addr:#06x}")]
    OutOfRange {
        /// Kind of access.
        access: AccessType,
        /// Address that was accessed.
        addr: u16,
    },

    /// A push found the call-stack region already full.
    #[error("system stack overflow (dropped {value:#06x})")]
    StackOverflow {
        /// Value that could not be pushed.
        value: u16,
    },

    /// A pop found the call-stack region already empty.
    #[error("system stack underflow")]
    StackUnderflow,

    /// `RET` executed while the call stack was empty.
    #[error("RET called when stack is empty")]
    ReturnOnEmptyStack,

    /// `RTI` executed while the call stack was empty.
    #[error("RTI called when stack is empty")]
    InterruptReturnOnEmptyStack,
}
