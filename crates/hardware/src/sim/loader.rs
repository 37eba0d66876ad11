//! Program Image Loader.
//!
//! This module reads LC-3 object images in the plain hex text format. It performs:
//! 1. **Parsing:** Splits the text into base-16 words (an optional `0x` prefix is accepted).
//! 2. **Placement:** Stores the body contiguously from the base given by the first word.
//! 3. **Validation:** Rejects empty images, malformed words, and images that run past memory.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::SimError;
use crate::common::constants::WORDS_IN_MEM;
use crate::soc::Memory;

/// A parsed program image: a load base and the words stored from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramImage {
    /// Address of the first body word.
    pub base: u16,
    /// Image body, in file order.
    pub words: Vec<u16>,
}

impl ProgramImage {
    /// Parses image text.
    ///
    /// # Arguments
    ///
    /// * `text` - Whitespace-separated hex words; the first is the load base.
    ///
    /// # Returns
    ///
    /// The image, `SimError::EmptyImage` if there are no words, or
    /// `SimError::BadWord` naming the first token that is not hex.
    ///
    /// # Examples
    ///
    /// ```
    /// use lc3sim_core::sim::ProgramImage;
    ///
    /// let image = ProgramImage::parse("3000\nF025\n").unwrap();
    /// assert_eq!(image.base, 0x3000);
    /// assert_eq!(image.words, vec![0xF025]);
    /// ```
    pub fn parse(text: &str) -> Result<Self, SimError> {
        let mut words = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            for token in line.split_whitespace() {
                words.push(parse_word(token).ok_or_else(|| SimError::BadWord {
                    line: idx + 1,
                    token: token.to_string(),
                })?);
            }
        }

        let (&base, body) = words.split_first().ok_or(SimError::EmptyImage)?;
        Ok(Self {
            base,
            words: body.to_vec(),
        })
    }

    /// Reads and parses an image file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the image.
    ///
    /// # Returns
    ///
    /// The image, or `SimError::Io` carrying the path if it cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Stores the image body into memory.
    ///
    /// Overlapping images are not an error; later loads overwrite earlier ones.
    ///
    /// # Arguments
    ///
    /// * `mem` - Destination memory.
    ///
    /// # Returns
    ///
    /// The number of words stored, or `SimError::ImageTooLarge` (with memory
    /// untouched) if any word would land at or past the end of memory.
    pub fn load_into(&self, mem: &mut Memory) -> Result<usize, SimError> {
        if !self.words.is_empty() && usize::from(self.base) + self.words.len() > WORDS_IN_MEM {
            return Err(SimError::ImageTooLarge {
                base: self.base,
                words: self.words.len(),
            });
        }
        mem.load_words(self.base, &self.words);
        info!(
            base = format_args!("{:#06x}", self.base),
            "Read {} words from program into memory.",
            self.words.len()
        );
        Ok(self.words.len())
    }
}

/// Parses one hex token the way `%x` does: an optional `0x`/`0X` prefix, then digits.
fn parse_word(token: &str) -> Option<u16> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u16::from_str_radix(digits, 16).ok()
}
