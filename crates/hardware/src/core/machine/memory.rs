//! Word-Addressed Stores.
//!
//! This module provides the fixed-capacity instruction and data stores. It performs the following:
//! 1. **Bounds Checking:** Every access is validated against the store capacity and reported as
//!    `SimError::InvalidAddress` instead of indexing out of range.
//! 2. **Image Loading:** Stores are created from a program image, zero-filled past its end.
//! 3. **Serialization:** Stores serialize as their words up to the last non-zero one.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::common::{AccessType, NUM_MEMORY, SimError, Word};

/// A fixed-capacity, word-addressed store.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    words: Box<[Word]>,
}

impl Memory {
    /// Creates a zero-filled store of `NUM_MEMORY` words.
    pub fn new() -> Self {
        Self {
            words: vec![0; NUM_MEMORY].into_boxed_slice(),
        }
    }

    /// Creates a store holding `image` from address 0, zero-filled to capacity.
    ///
    /// The caller guarantees `image.len() <= NUM_MEMORY`; longer images are truncated.
    pub fn from_image(image: &[Word]) -> Self {
        let mut mem = Self::new();
        let len = image.len().min(NUM_MEMORY);
        mem.words[..len].copy_from_slice(&image[..len]);
        mem
    }

    /// Number of words the store can hold.
    pub const fn capacity(&self) -> usize {
        self.words.len()
    }

    #[inline]
    fn index(&self, addr: Word, access: AccessType) -> Result<usize, SimError> {
        usize::try_from(addr)
            .ok()
            .filter(|&idx| idx < self.words.len())
            .ok_or(SimError::InvalidAddress { addr, access })
    }

    /// Reads the word at `addr`.
    ///
    /// # Arguments
    ///
    /// * `addr` - Word address.
    /// * `access` - Kind of access, reported in the error if `addr` is out of range.
    ///
    /// # Returns
    ///
    /// The stored word, or `SimError::InvalidAddress` for a negative or too-large address.
    pub fn read(&self, addr: Word, access: AccessType) -> Result<Word, SimError> {
        let idx = self.index(addr, access)?;
        Ok(self.words[idx])
    }

    /// Writes `val` at `addr`.
    ///
    /// # Returns
    ///
    /// `SimError::InvalidAddress` for a negative or too-large address.
    pub fn write(&mut self, addr: Word, val: Word) -> Result<(), SimError> {
        let idx = self.index(addr, AccessType::Write)?;
        self.words[idx] = val;
        Ok(())
    }

    /// Checks that `addr` is writable without writing it.
    pub fn check_write(&self, addr: Word) -> Result<(), SimError> {
        self.index(addr, AccessType::Write).map(|_| ())
    }

    /// Returns the whole store as a slice.
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
        f.debug_struct("Memory")
            .field("capacity", &self.words.len())
            .field("words", &&self.words[..used])
            .finish()
    }
}

impl Serialize for Memory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let used = self.words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
        let mut seq = serializer.serialize_seq(Some(used))?;
        for word in &self.words[..used] {
            seq.serialize_element(word)?;
        }
        seq.end()
    }
}
