//! Console driver.
//!
//! The core reaches the keyboard and display only through the [`Console`]
//! trait. It provides:
//! 1. **Polling:** Non-blocking "key available" checks for the busy-wait input traps.
//! 2. **Input/Output:** Single-byte reads and writes.
//! 3. **Terminal Mode:** Raw (unbuffered, non-echoing) mode toggled around input traps.
//!
//! [`TerminalConsole`] implements the trait on the process's stdin/stdout
//! using `termios` and `poll(2)`.

use std::fmt;
use std::io::{self, Write};

/// Milliseconds `key_ready` waits before reporting "no key".
///
/// Keeps the input trap's poll loop from pinning a host core while still
/// reacting to a keystroke immediately.
const POLL_TIMEOUT_MS: libc::c_int = 10;

/// Keyboard and display collaborator used by the device registers and traps.
///
/// All implementors must be `Send` so a simulator can be moved to a worker thread.
pub trait Console: Send {
    /// Returns `true` if a keystroke can be read without blocking.
    fn key_ready(&mut self) -> io::Result<bool>;

    /// Reads one keystroke. Only called after `key_ready` returned `true`.
    fn read_key(&mut self) -> io::Result<u8>;

    /// Writes one byte to the display.
    fn put_char(&mut self, ch: u8) -> io::Result<()>;

    /// Flushes buffered output.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Enters (`true`) or leaves (`false`) raw terminal mode.
    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        let _ = enabled;
        Ok(())
    }
}

/// Console bound to the controlling terminal.
///
/// Raw mode is only engaged when stdin is a TTY; with redirected input the
/// console still works, reading bytes as they arrive.
pub struct TerminalConsole {
    /// Terminal settings saved when raw mode was entered.
    saved: Option<libc::termios>,
}

impl fmt::Debug for TerminalConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalConsole")
            .field("raw", &self.saved.is_some())
            .finish()
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalConsole {
    /// Creates a console on stdin/stdout in cooked mode.
    pub const fn new() -> Self {
        Self { saved: None }
    }

    /// Restores the terminal settings saved by `set_raw_mode(true)`.
    fn restore(&mut self) -> io::Result<()> {
        if let Some(orig) = self.saved.take() {
            // SAFETY: `orig` is a termios structure previously filled by
            // `tcgetattr` on the same descriptor.
            let rc = unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &orig) };
            if rc != 0 {
                return Err(io::Error::last_os_error());
            }
        }
        Ok(())
    }
}

impl Console for TerminalConsole {
    fn key_ready(&mut self) -> io::Result<bool> {
        let mut fds = libc::pollfd {
            fd: libc::STDIN_FILENO,
            events: libc::POLLIN,
            revents: 0,
        };
        // SAFETY: `fds` is a valid, initialised pollfd array of length 1 that
        // outlives the call.
        let rc = unsafe { libc::poll(&mut fds, 1, POLL_TIMEOUT_MS) };
        if rc < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                return Ok(false);
            }
            return Err(err);
        }
        Ok(rc > 0 && fds.revents & (libc::POLLIN | libc::POLLHUP) != 0)
    }

    fn read_key(&mut self) -> io::Result<u8> {
        io::stdout().flush()?;
        let mut byte = 0u8;
        // Read straight from the descriptor: std's buffered stdin would hide
        // pending bytes from the next `poll`.
        // SAFETY: the buffer is one valid, writable byte.
        let n = unsafe { libc::read(libc::STDIN_FILENO, (&raw mut byte).cast(), 1) };
        match n {
            1 => Ok(byte),
            0 => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input while waiting for a key",
            )),
            _ => Err(io::Error::last_os_error()),
        }
    }

    fn put_char(&mut self, ch: u8) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(&[ch])?;
        out.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }

    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        if !enabled {
            return self.restore();
        }
        if self.saved.is_some() {
            return Ok(());
        }
        // SAFETY: `isatty` only inspects the descriptor.
        if unsafe { libc::isatty(libc::STDIN_FILENO) } == 0 {
            return Ok(());
        }

        // SAFETY: termios is plain old data; it is fully overwritten by
        // `tcgetattr` before use.
        let mut orig: libc::termios = unsafe { std::mem::zeroed() };
        // SAFETY: `orig` is a valid, writable termios.
        if unsafe { libc::tcgetattr(libc::STDIN_FILENO, &mut orig) } != 0 {
            return Err(io::Error::last_os_error());
        }
        let mut raw = orig;
        // SAFETY: `raw` is a valid termios obtained from `tcgetattr`.
        unsafe { libc::cfmakeraw(&mut raw) };
        // SAFETY: `raw` is a valid termios derived from the current settings.
        if unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &raw) } != 0 {
            return Err(io::Error::last_os_error());
        }
        self.saved = Some(orig);
        Ok(())
    }
}

impl Drop for TerminalConsole {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
