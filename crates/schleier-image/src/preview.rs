// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Comparison sheet rendering — lays decoded buffers side by side on a dark
// canvas for visual inspection, the CLI's replacement for popping up viewer
// windows.

use std::path::Path;

use image::{DynamicImage, Rgba, RgbaImage, imageops};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use schleier_core::config::PreviewConfig;
use schleier_core::error::{Result, SchleierError};
use schleier_core::types::PixelBuffer;
use tracing::{debug, instrument};

/// Render `panels` left to right on a single canvas.
///
/// Each panel keeps its aspect ratio; panels wider than
/// `config.max_panel_width` are downscaled with Lanczos3 first. The canvas
/// height follows the tallest panel, shorter panels are top-aligned, and a
/// one-pixel frame is drawn around each panel, underneath the panel itself.
/// Fails with `Preview` when called with no panels or when the configured
/// margins and gutters do not fit in a canvas.
#[instrument(skip_all, fields(panels = panels.len()))]
pub fn render_strip(panels: &[&PixelBuffer], config: &PreviewConfig) -> Result<PixelBuffer> {
    if panels.is_empty() {
        return Err(SchleierError::Preview("no panels to lay out".into()));
    }

    let scaled: Vec<RgbaImage> = panels
        .iter()
        .map(|panel| scaled_panel(panel, config))
        .collect();

    // Margin and gutter come straight from the user's style file, so the
    // geometry math is checked rather than trusted.
    let (width, height) = canvas_size(&scaled, config).ok_or_else(|| {
        SchleierError::Preview(format!(
            "sheet dimensions overflow with margin {} and gutter {}",
            config.margin, config.gutter
        ))
    })?;

    let [br, bg, bb] = config.background;
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([br, bg, bb, 255]));

    let [fr, fg, fb] = config.frame;
    let frame = Rgba([fr, fg, fb, 255]);

    // Frames go down first and the panels are composited over them, so a
    // frame edge never overwrites panel content, however tight the spacing.
    let mut x = config.margin;
    for img in &scaled {
        if img.width() > 0 && img.height() > 0 {
            // The frame sits just outside the panel; drawing clips at the
            // canvas edge when the margin is zero.
            draw_hollow_rect_mut(
                &mut canvas,
                Rect::at(x as i32 - 1, config.margin as i32 - 1)
                    .of_size(img.width() + 2, img.height() + 2),
                frame,
            );
        }
        x = x.saturating_add(img.width()).saturating_add(config.gutter);
    }

    let mut x = config.margin;
    for img in &scaled {
        imageops::overlay(&mut canvas, img, i64::from(x), i64::from(config.margin));
        x = x.saturating_add(img.width()).saturating_add(config.gutter);
    }

    debug!(width, height, "comparison sheet rendered");
    PixelBuffer::from_dynamic(DynamicImage::ImageRgba8(canvas))
}

/// Canvas size for the laid-out panels, or `None` when margins, gutters,
/// and panel widths do not fit in `u32`.
fn canvas_size(scaled: &[RgbaImage], config: &PreviewConfig) -> Option<(u32, u32)> {
    let tallest = scaled.iter().map(|img| img.height()).max()?;
    let gutters = config.gutter.checked_mul(scaled.len() as u32 - 1)?;
    let content_width = scaled
        .iter()
        .try_fold(gutters, |acc, img| acc.checked_add(img.width()))?;
    let margins = config.margin.checked_mul(2)?;
    Some((
        content_width.checked_add(margins)?,
        tallest.checked_add(margins)?,
    ))
}

/// Write a two-panel sheet to `path`: `original` on the left, `transformed`
/// on the right.
#[instrument(skip(original, transformed), fields(path = %path.as_ref().display()))]
pub fn write_comparison(
    original: &PixelBuffer,
    transformed: &PixelBuffer,
    path: impl AsRef<Path>,
    config: &PreviewConfig,
) -> Result<()> {
    let sheet = render_strip(&[original, transformed], config)?;
    crate::save::save_image(&sheet, path)
}

/// Convert a buffer to RGBA for compositing, downscaling oversized panels.
fn scaled_panel(buffer: &PixelBuffer, config: &PreviewConfig) -> RgbaImage {
    let dynamic = buffer.to_dynamic();
    match config.max_panel_width {
        Some(max_width) if max_width > 0 && dynamic.width() > max_width => {
            let scale = f64::from(max_width) / f64::from(dynamic.width());
            let target_height = ((f64::from(dynamic.height()) * scale).round() as u32).max(1);
            debug!(
                from_w = dynamic.width(),
                from_h = dynamic.height(),
                to_w = max_width,
                to_h = target_height,
                "downscaling panel"
            );
            dynamic
                .resize_exact(max_width, target_height, imageops::FilterType::Lanczos3)
                .to_rgba8()
        }
        _ => dynamic.to_rgba8(),
    }
}

// -- Tests --------------------------------------------------------------------
