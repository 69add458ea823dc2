// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// schleier-cipher — The XOR transform engine.
//
// Provides the validated single-byte key, the pixel cipher (encrypt and
// decrypt are the same self-inverse operation), and SHA-256 fingerprinting
// of decoded pixel content for round-trip verification.

pub mod integrity;
pub mod key;
pub mod xor;

// Re-export the primary items so callers can use `schleier_cipher::XorCipher` etc.
pub use integrity::{fingerprint, verify_match};
pub use key::XorKey;
pub use xor::XorCipher;
