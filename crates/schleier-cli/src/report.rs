// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Run reports — an opt-in JSON record of what a transform run did: operation,
// paths, image shape, key, and the pixel fingerprints needed to check a
// round trip later.

use std::path::Path;

use chrono::{DateTime, Utc};
use schleier_cipher::{XorKey, fingerprint};
use schleier_core::error::Result;
use schleier_core::types::{ChannelLayout, PixelBuffer};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Record of a completed encrypt or decrypt run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// `"encrypt"` or `"decrypt"`.
    pub operation: String,
    pub input_path: String,
    pub output_path: String,
    pub width: u32,
    pub height: u32,
    pub layout: ChannelLayout,
    /// The key byte that was applied.
    pub key: u8,
    /// Fingerprint of the decoded input pixels.
    pub input_fingerprint: String,
    /// Fingerprint of the transformed pixels as written.
    pub output_fingerprint: String,
    /// RFC 3339 completion timestamp.
    pub completed_at: DateTime<Utc>,
}

impl RunReport {
    /// Build a report for a finished run.
    pub fn new(
        operation: &str,
        input_path: &Path,
        output_path: &Path,
        key: XorKey,
        original: &PixelBuffer,
        transformed: &PixelBuffer,
    ) -> Self {
        Self {
            operation: operation.to_owned(),
            input_path: input_path.display().to_string(),
            output_path: output_path.display().to_string(),
            width: original.width(),
            height: original.height(),
            layout: original.layout(),
            key: key.value(),
            input_fingerprint: fingerprint(original),
            output_fingerprint: fingerprint(transformed),
            completed_at: Utc::now(),
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        debug!(path = %path.as_ref().display(), "run report written");
        Ok(())
    }
}
