// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixel fingerprinting — SHA-256 over decoded content for round-trip checks.

use schleier_core::error::{Result, SchleierError};
use schleier_core::types::PixelBuffer;
use sha2::{Digest, Sha256};

/// Compute the SHA-256 fingerprint of a buffer's decoded content and return
/// it as a lowercase hex string.
///
/// Dimensions and layout are hashed along with the raw channel bytes, so two
/// buffers with equal bytes but different shapes never share a fingerprint.
/// Because the hash covers decoded pixels rather than file bytes, it is
/// stable across re-encodings of the same content.
pub fn fingerprint(buffer: &PixelBuffer) -> String {
    let mut hasher = Sha256::new();
    hasher.update(buffer.width().to_be_bytes());
    hasher.update(buffer.height().to_be_bytes());
    hasher.update([buffer.layout().channel_count() as u8]);
    hasher.update(buffer.data());
    hex::encode(hasher.finalize())
}

/// Verify that two buffers hold identical decoded content.
///
/// Returns `Ok(())` when the fingerprints match, or
/// `SchleierError::PixelMismatch` carrying both digests when they do not.
pub fn verify_match(expected: &PixelBuffer, actual: &PixelBuffer) -> Result<()> {
    let expected_fp = fingerprint(expected);
    let actual_fp = fingerprint(actual);
    if expected_fp == actual_fp {
        Ok(())
    } else {
        Err(SchleierError::PixelMismatch {
            expected: expected_fp,
            actual: actual_fp,
        })
    }
}
