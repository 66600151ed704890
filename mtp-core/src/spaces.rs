use crate::matrix::CipherMatrix;

/// Lowest printable ASCII byte, which is also the space character itself.
pub const PRINTABLE_LOW: u8 = 0x20;
/// Highest printable ASCII byte.
pub const PRINTABLE_HIGH: u8 = 0x7E;

/// `c1 ^ c2 == p1 ^ p2` under a shared key byte. A space XORed with any
/// printable ASCII byte lands back in the printable range, and a byte
/// XORed with itself is zero, so this is the signature a space position
/// leaves against another plausible plaintext byte.
pub(crate) fn is_space_signature(x: u8) -> bool {
    x == 0 || (PRINTABLE_LOW..=PRINTABLE_HIGH).contains(&x)
}

/// Boolean matrix with the same shape as its [`CipherMatrix`]; `true` at
/// `(line, column)` means that position's plaintext byte is judged to be
/// a space (0x20) with high confidence.
///
/// The judgment is a necessary-but-not-sufficient heuristic: `true`
/// means "consistent with a space against every other line", not a
/// proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceMask {
    cells: Vec<Vec<bool>>,
}

impl SpaceMask {
    /// Whether `(line, column)` was marked as a probable space.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn is_space(&self, line: usize, column: usize) -> bool {
        self.cells[line][column]
    }

    /// The number of lines in the mask.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.cells.len()
    }

    /// The number of marked positions across the whole mask.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell).count())
            .sum()
    }
}

/// Marks every `(line, column)` position whose ciphertext byte is
/// consistent with a space against **every** line in the matrix.
///
/// For line `i` at column `c`, the position is marked only if
/// `cipher[i][c] ^ cipher[j][c]` is zero or printable for all lines `j`,
/// including `j == i` where the XOR is trivially zero. The universal
/// quantifier is deliberate; for a small line count this is weak evidence
/// and false positives are expected downstream.
///
/// Pure and deterministic: the same matrix always yields the same mask.
#[must_use]
pub fn detect_spaces(matrix: &CipherMatrix) -> SpaceMask {
    let cells = matrix
        .lines()
        .map(|fixed| {
            (0..matrix.width())
                .map(|column| {
                    matrix
                        .lines()
                        .all(|other| is_space_signature(fixed[column] ^ other[column]))
                })
                .collect()
        })
        .collect();

    let mask = SpaceMask { cells };
    log::debug!(
        "space detection marked {} of {} positions",
        mask.marked_count(),
        matrix.line_count() * matrix.width()
    );
    mask
}
