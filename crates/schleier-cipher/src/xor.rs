// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// XOR cipher — the transform engine.
//
// Each channel byte is XORed with the key independently of every other byte,
// so the operation is pure, order-free, and its own inverse: applying it
// twice with the same key restores the input exactly.

use schleier_core::error::Result;
use schleier_core::types::PixelBuffer;
use tracing::{debug, instrument};

use crate::key::XorKey;

/// Pixel cipher holding a validated single-byte key.
///
/// Encryption and decryption are the same operation; [`XorCipher::decrypt`]
/// exists so call sites read naturally. Each call is stateless and the input
/// buffer is never mutated.
#[derive(Debug, Clone, Copy)]
pub struct XorCipher {
    key: XorKey,
}

impl XorCipher {
    /// Create a cipher from an already validated key.
    pub fn new(key: XorKey) -> Self {
        Self { key }
    }

    /// Validate `raw` and create a cipher.
    ///
    /// Fails with `InvalidKey` when `raw` lies outside [0, 255].
    pub fn with_raw_key(raw: i64) -> Result<Self> {
        Ok(Self::new(XorKey::new(raw)?))
    }

    /// The key this cipher applies.
    pub fn key(&self) -> XorKey {
        self.key
    }

    /// XOR every channel byte of `buffer` with the key.
    ///
    /// Returns a new buffer of identical dimensions and layout. Alpha
    /// channels are transformed like any other channel.
    #[instrument(
        skip_all,
        fields(
            width = buffer.width(),
            height = buffer.height(),
            layout = %buffer.layout(),
            key = %self.key,
        )
    )]
    pub fn encrypt(&self, buffer: &PixelBuffer) -> PixelBuffer {
        let key = self.key.value();
        let data: Vec<u8> = buffer.data().iter().map(|&byte| byte ^ key).collect();

        let transformed =
            PixelBuffer::from_parts(buffer.width(), buffer.height(), buffer.layout(), data)
                .expect("output length equals input length");

        debug!(bytes = transformed.data().len(), "XOR transform applied");
        transformed
    }

    /// Reapply the XOR transform.
    ///
    /// Identical to [`XorCipher::encrypt`]: XOR with a fixed key is its own
    /// inverse, so there is no separate decryption algorithm.
    pub fn decrypt(&self, buffer: &PixelBuffer) -> PixelBuffer {
        self.encrypt(buffer)
    }
}

// -- Tests --------------------------------------------------------------------
