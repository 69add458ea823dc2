// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image saving — encode a PixelBuffer and write it to disk.

use std::path::Path;

use image::ImageError;
use schleier_core::error::{Result, SchleierError};
use schleier_core::types::PixelBuffer;
use tracing::{info, instrument};

/// Encode `buffer` and write it to `path`.
///
/// The output format is inferred from the file extension, exactly as the
/// underlying library provides it. Unrecognised extensions and encoder
/// failures surface as `Write`; OS-level failures pass through as `Io`.
#[instrument(
    skip(buffer),
    fields(
        path = %path.as_ref().display(),
        width = buffer.width(),
        height = buffer.height(),
        layout = %buffer.layout(),
    )
)]
pub fn save_image(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<()> {
    buffer
        .to_dynamic()
        .save(path.as_ref())
        .map_err(|err| match err {
            ImageError::IoError(io) => SchleierError::Io(io),
            other => SchleierError::Write(format!("{}: {}", path.as_ref().display(), other)),
        })?;
    info!("image written");
    Ok(())
}

// -- Tests --------------------------------------------------------------------
