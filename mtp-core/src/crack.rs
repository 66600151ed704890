use crate::matrix::CipherMatrix;
use crate::spaces::{PRINTABLE_HIGH, PRINTABLE_LOW, SpaceMask};

/// Sentinel shown for positions the partial cracker could not resolve.
///
/// Deliberately outside printable ASCII (0x20-0x7E) so it can never be
/// confused with a recovered plaintext character.
pub const PLACEHOLDER: char = '\u{b7}';

const SPACE: u8 = 0x20;

/// Recovers plaintext fragments from the detected space positions alone,
/// without any crib.
///
/// Wherever the mask says line `i` holds a space at column `c`, XORing
/// that space back out of `cipher[i][c] ^ cipher[j][c]` yields line `j`'s
/// plaintext candidate for the column. Candidates in the printable range
/// are written into the output; everything else keeps [`PLACEHOLDER`].
///
/// When several lines are marked at the same column, their candidate
/// writes are applied in ascending line order and the last write wins.
/// Ties are not reconciled by confidence; this is a known limitation of
/// the heuristic, kept as-is.
///
/// # Panics
///
/// Panics if `mask` was not produced from `matrix` (shape mismatch).
#[must_use]
pub fn crack_partial(matrix: &CipherMatrix, mask: &SpaceMask) -> Vec<String> {
    assert_eq!(
        mask.line_count(),
        matrix.line_count(),
        "space mask must match the matrix it was detected from"
    );

    let mut recovered: Vec<Vec<char>> =
        vec![vec![PLACEHOLDER; matrix.width()]; matrix.line_count()];

    for column in 0..matrix.width() {
        for (fixed_index, fixed) in matrix.lines().enumerate() {
            if !mask.is_space(fixed_index, column) {
                continue;
            }
            for (other_index, other) in matrix.lines().enumerate() {
                let candidate = fixed[column] ^ other[column] ^ SPACE;
                if (PRINTABLE_LOW..=PRINTABLE_HIGH).contains(&candidate) {
                    recovered[other_index][column] = char::from(candidate);
                }
            }
        }
    }

    recovered.into_iter().map(String::from_iter).collect()
}
