//! Emulated call stack.
//!
//! The LC-3 has no return-address stack of its own. The simulator reserves a
//! region of memory for one: subroutine calls push the return address and
//! `RET`/`RTI` pop it. The stack grows downward from the region top; the
//! cursor points at the most recently pushed word and equals the top while
//! the stack is empty.
//!
//! Stack traffic goes straight to [`Memory`] and never raises out-of-range
//! anomalies, even though the default region sits below the user floor.

use crate::common::Anomaly;
use crate::config::StackConfig;
use crate::soc::Memory;

/// Software-managed LIFO over a reserved memory region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallStack {
    /// Lowest word of the region.
    base: u16,
    /// One past the highest word of the region.
    top: u16,
    /// Stack cursor.
    sp: u16,
}

impl CallStack {
    /// Creates an empty stack over `[config.base, config.top)`.
    pub const fn new(config: &StackConfig) -> Self {
        Self {
            base: config.base,
            top: config.top,
            sp: config.top,
        }
    }

    /// Returns `true` if nothing has been pushed.
    pub const fn is_empty(&self) -> bool {
        self.sp >= self.top
    }

    /// Returns `true` if the next push would overflow.
    pub const fn is_full(&self) -> bool {
        self.sp <= self.base
    }

    /// Number of words currently on the stack.
    pub const fn depth(&self) -> usize {
        (self.top - self.sp) as usize
    }

    /// Maximum number of words the region holds.
    pub const fn capacity(&self) -> usize {
        (self.top - self.base) as usize
    }

    /// Current cursor.
    pub const fn sp(&self) -> u16 {
        self.sp
    }

    /// Pushes `value`.
    ///
    /// # Arguments
    ///
    /// * `mem` - Backing memory.
    /// * `value` - Word to push.
    ///
    /// # Returns
    ///
    /// `Err(Anomaly::StackOverflow)` if the region is full; the cursor and
    /// memory are left untouched.
    pub fn push(&mut self, mem: &mut Memory, value: u16) -> Result<(), Anomaly> {
        if self.is_full() {
            return Err(Anomaly::StackOverflow { value });
        }
        self.sp -= 1;
        mem.write(self.sp, value);
        Ok(())
    }

    /// Pops the most recently pushed word.
    ///
    /// # Arguments
    ///
    /// * `mem` - Backing memory.
    ///
    /// # Returns
    ///
    /// The popped word, or `Err(Anomaly::StackUnderflow)` if the stack is empty.
    pub fn pop(&mut self, mem: &Memory) -> Result<u16, Anomaly> {
        if self.is_empty() {
            return Err(Anomaly::StackUnderflow);
        }
        let value = mem.read(self.sp);
        self.sp += 1;
        Ok(value)
    }
}
