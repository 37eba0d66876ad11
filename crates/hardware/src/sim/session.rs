//! Session log.
//!
//! Every memory and register dump shown during an interactive session is
//! also written to a log file, flushed after each dump so the file is
//! complete even if the process is killed.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::common::SimError;

/// Log sink mirroring inspection output.
#[derive(Debug)]
pub struct SessionLog {
    path: PathBuf,
    file: File,
}

impl SessionLog {
    /// Creates (truncating) the log file.
    ///
    /// # Returns
    ///
    /// The log, or `SimError::Io` carrying the path.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| SimError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, file })
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one dump and flushes it.
    ///
    /// # Returns
    ///
    /// `SimError::Io` carrying the log path if the write fails.
    pub fn record(&mut self, dump: &str) -> Result<(), SimError> {
        self.write_flush(dump).map_err(|source| SimError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn write_flush(&mut self, dump: &str) -> io::Result<()> {
        self.file.write_all(dump.as_bytes())?;
        self.file.flush()
    }
}
