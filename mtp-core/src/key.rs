// File:    key.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Derives the shared key stream from analyst cribs and decrypts every intercepted line with it.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::error::CrackError;
use crate::matrix::CipherMatrix;

/// An analyst-supplied plaintext guess, bound to one line of the matrix
/// at a fixed starting column.
///
/// Cribs are manual, out-of-band input: the engine never guesses them.
/// Several cribs for different lines and offsets may be merged into one
/// key as long as they agree wherever they overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crib {
    /// Zero-based index of the line the guess applies to.
    pub line: usize,
    /// Column at which the fragment starts.
    pub offset: usize,
    /// The guessed ASCII plaintext fragment.
    pub text: String,
}

impl Crib {
    /// Binds a plaintext guess to a line and starting column.
    pub fn new(line: usize, offset: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            offset,
            text: text.into(),
        }
    }
}

/// The recovered key stream, one byte per column over the union of
/// crib-covered columns.
///
/// Columns no crib touched are holes: they stay `None` and refuse to
/// decrypt, rather than silently emitting garbage. The key is derived
/// once and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    bytes: Vec<Option<u8>>,
}

impl Key {
    /// Merges the given cribs against the ciphertext and derives the key
    /// bytes they pin down: `key[offset + k] = fragment[k] ^
    /// cipher[line][offset + k]`.
    ///
    /// No printability check is applied to what the other lines would
    /// decrypt to under a derived byte; only crib-to-crib disagreement is
    /// an error.
    ///
    /// # Errors
    ///
    /// - [`CrackError::CribNotAscii`] if a fragment contains non-ASCII
    ///   text.
    /// - [`CrackError::CribOutOfRange`] if a crib names a missing line or
    ///   runs past the aligned matrix width.
    /// - [`CrackError::CribConflict`] if two cribs derive different key
    ///   bytes for the same column. Derivation aborts entirely; no key is
    ///   produced from the non-conflicting remainder.
    pub fn derive(matrix: &CipherMatrix, cribs: &[Crib]) -> Result<Self, CrackError> {
        let mut bytes: Vec<Option<u8>> = Vec::new();

        for crib in cribs {
            if !crib.text.is_ascii() {
                return Err(CrackError::CribNotAscii { line: crib.line });
            }
            let end = crib.offset + crib.text.len();
            if crib.line >= matrix.line_count() || end > matrix.width() {
                return Err(CrackError::CribOutOfRange {
                    line: crib.line,
                    offset: crib.offset,
                });
            }

            let cipher = matrix.line(crib.line);
            if bytes.len() < end {
                bytes.resize(end, None);
            }
            for (position, &plain) in crib.text.as_bytes().iter().enumerate() {
                let column = crib.offset + position;
                let derived = plain ^ cipher[column];
                match bytes[column] {
                    Some(existing) if existing != derived => {
                        return Err(CrackError::CribConflict {
                            column,
                            existing,
                            derived,
                        });
                    }
                    _ => bytes[column] = Some(derived),
                }
            }
        }

        let key = Self { bytes };
        log::info!(
            "derived {} key bytes over a {}-column span from {} cribs",
            key.covered_count(),
            key.len(),
            cribs.len()
        );
        Ok(key)
    }

    /// The column span the key reaches, holes included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether no crib contributed any key byte.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The key byte for one column, or `None` for a hole.
    #[must_use]
    pub fn byte(&self, column: usize) -> Option<u8> {
        self.bytes.get(column).copied().flatten()
    }

    /// The number of columns an actual key byte was derived for.
    #[must_use]
    pub fn covered_count(&self) -> usize {
        self.bytes.iter().filter(|slot| slot.is_some()).count()
    }

    /// The length of the contiguous covered prefix starting at column 0.
    ///
    /// Callers that prefer decrypting only up to the first hole (and
    /// reporting the shortfall) can truncate their view to this length
    /// instead of calling [`Key::decrypt`] over the full span.
    #[must_use]
    pub fn covered_prefix(&self) -> usize {
        self.bytes
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.bytes.len())
    }

    /// Decrypts every line of the matrix over the key's full span,
    /// producing one string of exactly [`Key::len`] characters per line.
    ///
    /// # Errors
    ///
    /// Returns [`CrackError::KeyCoverage`] naming the first hole if any
    /// column inside the span has no derived key byte.
    ///
    /// # Panics
    ///
    /// Panics if the key span exceeds the width of `matrix` (the key was
    /// derived from a wider matrix).
    pub fn decrypt(&self, matrix: &CipherMatrix) -> Result<Vec<String>, CrackError> {
        let mut plaintexts = Vec::with_capacity(matrix.line_count());
        for cipher in matrix.lines() {
            let mut text = String::with_capacity(self.bytes.len());
            for (column, slot) in self.bytes.iter().copied().enumerate() {
                let key_byte = slot.ok_or_else(|| CrackError::KeyCoverage { column })?;
                text.push(char::from(cipher[column] ^ key_byte));
            }
            plaintexts.push(text);
        }
        Ok(plaintexts)
    }
}
