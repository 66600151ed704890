// File:    matrix.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Decodes hex-encoded intercepts into a column-aligned byte matrix.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::error::CrackError;

/// A set of intercepted ciphertext lines, hex-decoded and aligned by
/// column.
///
/// Every analysis in this crate assumes that byte position `c` of every
/// line was encrypted with the same key byte. Lines longer than the
/// shortest one are trimmed to the common width rather than padded: there
/// is no mechanism to realign lines of different lengths, so the excess
/// tail bytes carry no usable cross-line signal. The matrix is immutable
/// once loaded.
#[derive(Debug, Clone)]
pub struct CipherMatrix {
    lines: Vec<Vec<u8>>,
    width: usize,
}

impl CipherMatrix {
    /// Decodes one hex string per intercepted message into an aligned
    /// byte matrix.
    ///
    /// All lines are trimmed to the length of the shortest line.
    ///
    /// # Errors
    ///
    /// Returns [`CrackError::MalformedInput`] if any line has odd length
    /// or contains a non-hex character. A single bad line fails the whole
    /// load; no partial matrix is produced.
    pub fn from_hex_lines<S: AsRef<str>>(hex_lines: &[S]) -> Result<Self, CrackError> {
        let mut lines = Vec::with_capacity(hex_lines.len());
        for (index, hex_line) in hex_lines.iter().enumerate() {
            let decoded = hex::decode(hex_line.as_ref())
                .map_err(|source| CrackError::MalformedInput { line: index, source })?;
            lines.push(decoded);
        }

        let width = lines.iter().map(Vec::len).min().unwrap_or(0);
        for line in &mut lines {
            line.truncate(width);
        }
        log::debug!("loaded {} ciphertext lines, aligned width {width}", lines.len());

        Ok(Self { lines, width })
    }

    /// Constructs a matrix directly from raw byte lines, trimming to the
    /// shortest line. Useful for fixtures built from a known key.
    #[must_use]
    pub fn from_byte_lines(byte_lines: Vec<Vec<u8>>) -> Self {
        let width = byte_lines.iter().map(Vec::len).min().unwrap_or(0);
        let mut lines = byte_lines;
        for line in &mut lines {
            line.truncate(width);
        }
        Self { lines, width }
    }

    /// The number of ciphertext lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The aligned column count, `min` over all line lengths.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// One aligned ciphertext line.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn line(&self, index: usize) -> &[u8] {
        &self.lines[index]
    }

    /// Iterates over the aligned ciphertext lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.lines.iter().map(Vec::as_slice)
    }
}
