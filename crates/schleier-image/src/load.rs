// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image loading — decode a file or byte slice into a PixelBuffer.

use std::path::Path;

use image::ImageError;
use schleier_core::error::{Result, SchleierError};
use schleier_core::types::PixelBuffer;
use tracing::{debug, info, instrument};

/// Decode the image at `path` into a pixel buffer.
///
/// Missing files and permission problems surface as `Io`; undecodable or
/// corrupt files fail with `Decode`; images that are not 8-bit per channel
/// fail with `UnsupportedFormat` via the buffer gate.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_image(path: impl AsRef<Path>) -> Result<PixelBuffer> {
    let img = image::open(path.as_ref()).map_err(|err| match err {
        ImageError::IoError(io) => SchleierError::Io(io),
        other => SchleierError::Decode(format!("{}: {}", path.as_ref().display(), other)),
    })?;
    info!(
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "image loaded"
    );
    PixelBuffer::from_dynamic(img)
}

/// Decode an image from raw encoded bytes (PNG, JPEG, ...).
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn load_from_memory(data: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(data)
        .map_err(|err| SchleierError::Decode(err.to_string()))?;
    debug!(
        width = img.width(),
        height = img.height(),
        "image decoded from bytes"
    );
    PixelBuffer::from_dynamic(img)
}

// -- Tests --------------------------------------------------------------------
