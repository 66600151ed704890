use thiserror::Error;

/// Errors produced by the many-time pad cryptanalysis engine.
#[derive(Debug, Error)]
pub enum CrackError {
    /// A ciphertext line was not valid even-length hex. The whole load
    /// fails; no partial matrix is produced.
    #[error("ciphertext line {line} is not valid hex: {source}")]
    MalformedInput {
        /// Zero-based index of the offending input line.
        line: usize,
        /// The underlying hex decoding failure.
        #[source]
        source: hex::FromHexError,
    },

    /// Two cribs derived different key bytes for the same column. The
    /// analyst's assumption is wrong for at least one crib, so key
    /// derivation aborts rather than picking a winner.
    #[error("cribs disagree on the key byte for column {column}: {existing:#04x} vs {derived:#04x}")]
    CribConflict {
        /// Absolute column both cribs cover.
        column: usize,
        /// Key byte derived by an earlier crib.
        existing: u8,
        /// Conflicting key byte derived by a later crib.
        derived: u8,
    },

    /// Decryption touched a column no crib covers. Uncovered columns are
    /// holes; decrypting through one would emit garbage silently.
    #[error("no key byte was derived for column {column}")]
    KeyCoverage {
        /// First uncovered column inside the requested span.
        column: usize,
    },

    /// A crib referenced a line outside the matrix, or its fragment runs
    /// past the aligned width.
    #[error("crib for line {line} at offset {offset} does not fit inside the ciphertext matrix")]
    CribOutOfRange {
        /// Line index the crib was bound to.
        line: usize,
        /// Starting column of the crib fragment.
        offset: usize,
    },

    /// A crib fragment contained a non-ASCII character; key derivation
    /// operates byte-per-column and only accepts ASCII fragments.
    #[error("crib fragment for line {line} is not ASCII")]
    CribNotAscii {
        /// Line index the crib was bound to.
        line: usize,
    },
}
