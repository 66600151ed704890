// File:    lib.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: The main library crate for mtp-core, orchestrating space detection, crib merging, and key recovery.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # MTP Core Library
//!
//! This library provides the cryptanalysis engine for the many-time pad
//! scenario: several messages encrypted with the same one-time-pad key
//! stream. Because `c1 ^ c2 == p1 ^ p2`, the key cancels out of every
//! cross-message XOR, which is enough to locate probable spaces, recover
//! plaintext fragments, and (given an analyst crib) recover the key
//! itself.
//!
//! The engine is purely functional over immutable inputs and performs no
//! I/O; loading ciphertext lines and printing results belong to the
//! caller.

/// Partial plaintext recovery from detected space positions.
pub mod crack;
/// Error types for the cryptanalysis engine.
pub mod error;
/// Crib merging, key derivation, and full decryption.
pub mod key;
/// Hex-decoded, column-aligned ciphertext matrix.
pub mod matrix;
/// Statistical space detection over aligned ciphertexts.
pub mod spaces;

pub use crack::{PLACEHOLDER, crack_partial};
pub use error::CrackError;
pub use key::{Crib, Key};
pub use matrix::CipherMatrix;
pub use spaces::{SpaceMask, detect_spaces};
