// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Schleier.

use thiserror::Error;

/// Top-level error type for all Schleier operations.
#[derive(Debug, Error)]
pub enum SchleierError {
    // -- Key errors --
    #[error("key {0} is out of range: the XOR key must be between 0 and 255")]
    InvalidKey(i64),

    // -- Pixel buffer errors --
    #[error("unsupported pixel format: {0}")]
    UnsupportedFormat(String),

    // -- Codec errors --
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to write image: {0}")]
    Write(String),

    // -- Display --
    #[error("comparison sheet rendering failed: {0}")]
    Preview(String),

    // -- Verification --
    #[error("pixel content differs: expected fingerprint {expected}, got {actual}")]
    PixelMismatch { expected: String, actual: String },

    // -- Ambient passthroughs --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SchleierError>;
