// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Single-byte XOR key with validation at the boundary.

use schleier_core::error::{Result, SchleierError};

/// The key driving the XOR transform.
///
/// A value of this type is always in [0, 255]; fallible validation happens
/// once in [`XorKey::new`], so the cipher itself never sees an out-of-range
/// key. Out-of-range input is rejected, never reduced modulo 256.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorKey(u8);

impl XorKey {
    /// Validate a raw integer as a key.
    ///
    /// Fails with `InvalidKey` when `raw` lies outside [0, 255].
    pub fn new(raw: i64) -> Result<Self> {
        u8::try_from(raw)
            .map(Self)
            .map_err(|_| SchleierError::InvalidKey(raw))
    }

    /// Wrap a byte directly. Every byte is a valid key.
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    /// The key byte.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Key 0 leaves every pixel unchanged.
    pub const fn is_identity(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i64> for XorKey {
    type Error = SchleierError;

    fn try_from(raw: i64) -> Result<Self> {
        Self::new(raw)
    }
}

impl std::fmt::Display for XorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
