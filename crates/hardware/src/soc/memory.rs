//! Main memory.
//!
//! A flat array of 32,768 sixteen-bit words. Addresses are 16 bits wide; the
//! backing index is the address masked to 15 bits, so the store never faults.
//! This type knows nothing about devices or the user range; those live in
//! [`Bus`](super::Bus).

use crate::common::constants::{ADDRESS_MASK, WORDS_IN_MEM};

/// Word-addressed main memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    words: Box<[u16]>,
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("words", &self.words.len())
            .finish()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates a zero-filled memory.
    pub fn new() -> Self {
        Self {
            words: vec![0; WORDS_IN_MEM].into_boxed_slice(),
        }
    }

    /// Maps an address to its backing-store index.
    #[inline(always)]
    const fn index(addr: u16) -> usize {
        (addr & ADDRESS_MASK) as usize
    }

    /// Reads the word at `addr`.
    #[inline]
    pub fn read(&self, addr: u16) -> u16 {
        self.words[Self::index(addr)]
    }

    /// Writes `val` at `addr`.
    #[inline]
    pub fn write(&mut self, addr: u16, val: u16) {
        self.words[Self::index(addr)] = val;
    }

    /// Copies `data` into memory starting at `base`.
    ///
    /// The caller guarantees the block fits below [`WORDS_IN_MEM`]; words past
    /// the end wrap like any other address.
    ///
    /// # Arguments
    ///
    /// * `base` - First address to write.
    /// * `data` - Words to store, in order.
    pub fn load_words(&mut self, base: u16, data: &[u16]) {
        for (i, word) in data.iter().enumerate() {
            self.write(base.wrapping_add(i as u16), *word);
        }
    }
}
