// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Schleier image obfuscator.

use image::{DynamicImage, RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchleierError};

/// Channel layout of a decoded pixel buffer.
///
/// Schleier works exclusively on 8-bit-per-channel colour images; grayscale
/// sources are widened to RGB at decode time and anything that is not 8-bit
/// unsigned is rejected outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelLayout {
    /// Three channels: red, green, blue.
    Rgb,
    /// Four channels: red, green, blue, alpha.
    Rgba,
}

impl ChannelLayout {
    /// Number of bytes per pixel (3 or 4).
    pub fn channel_count(&self) -> u32 {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Whether the layout carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba)
    }
}

impl std::fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rgb => write!(f, "RGB"),
            Self::Rgba => write!(f, "RGBA"),
        }
    }
}

/// An in-memory decoded pixel grid: height x width x channels, one unsigned
/// byte per channel.
///
/// Fields are private; every constructor enforces the length invariant
/// `data.len() == width * height * channels`, so holders of a `PixelBuffer`
/// can rely on its shape without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    data: Vec<u8>,
}

impl PixelBuffer {
    // -- Construction ---------------------------------------------------------

    /// Build a buffer from raw channel bytes.
    ///
    /// Fails with `UnsupportedFormat` when `data` does not hold exactly
    /// `width * height * channels` bytes.
    pub fn from_parts(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        data: Vec<u8>,
    ) -> Result<Self> {
        let expected = byte_len(width, height, layout);
        if data.len() != expected {
            return Err(SchleierError::UnsupportedFormat(format!(
                "pixel data length {} does not match {}x{} {} (expected {})",
                data.len(),
                width,
                height,
                layout,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    /// Convert a freshly decoded `DynamicImage` into a pixel buffer.
    ///
    /// This is the single gate that enforces the 8-bit contract:
    /// - 8-bit RGB and RGBA pass through unchanged;
    /// - 8-bit grayscale is widened to RGB, grayscale+alpha to RGBA
    ///   (the alpha channel is kept and treated like any other channel);
    /// - every 16-bit and floating-point variant fails with
    ///   `UnsupportedFormat` naming the offending format, never narrowed.
    pub fn from_dynamic(image: DynamicImage) -> Result<Self> {
        match image {
            DynamicImage::ImageRgb8(img) => {
                let (width, height) = img.dimensions();
                Self::from_parts(width, height, ChannelLayout::Rgb, img.into_raw())
            }
            DynamicImage::ImageRgba8(img) => {
                let (width, height) = img.dimensions();
                Self::from_parts(width, height, ChannelLayout::Rgba, img.into_raw())
            }
            img @ DynamicImage::ImageLuma8(_) => {
                let rgb = img.to_rgb8();
                let (width, height) = rgb.dimensions();
                Self::from_parts(width, height, ChannelLayout::Rgb, rgb.into_raw())
            }
            img @ DynamicImage::ImageLumaA8(_) => {
                let rgba = img.to_rgba8();
                let (width, height) = rgba.dimensions();
                Self::from_parts(width, height, ChannelLayout::Rgba, rgba.into_raw())
            }
            other => Err(SchleierError::UnsupportedFormat(format!(
                "{:?} is not an 8-bit RGB or RGBA image",
                other.color()
            ))),
        }
    }

    // -- Accessors ------------------------------------------------------------

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Channel layout of the buffer.
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Raw channel bytes in row-major order.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Channel bytes of the pixel at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} buffer",
            self.width,
            self.height
        );
        let channels = self.layout.channel_count() as usize;
        let idx = (y as usize * self.width as usize + x as usize) * channels;
        &self.data[idx..idx + channels]
    }

    // -- Conversion -----------------------------------------------------------

    /// Re-wrap the buffer as a `DynamicImage` for encoding or compositing.
    pub fn to_dynamic(&self) -> DynamicImage {
        match self.layout {
            ChannelLayout::Rgb => {
                let img = RgbImage::from_raw(self.width, self.height, self.data.clone())
                    .expect("length invariant checked at construction");
                DynamicImage::ImageRgb8(img)
            }
            ChannelLayout::Rgba => {
                let img = RgbaImage::from_raw(self.width, self.height, self.data.clone())
                    .expect("length invariant checked at construction");
                DynamicImage::ImageRgba8(img)
            }
        }
    }
}

/// Byte length a buffer of the given shape must have.
fn byte_len(width: u32, height: u32, layout: ChannelLayout) -> usize {
    width as usize * height as usize * layout.channel_count() as usize
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, GrayImage, ImageBuffer, Luma, LumaA, Rgb, Rgba};

    #[test]
    fn channel_layout_reports_shape() {
        assert_eq!(ChannelLayout::Rgb.channel_count(), 3);
        assert_eq!(ChannelLayout::Rgba.channel_count(), 4);
        assert!(!ChannelLayout::Rgb.has_alpha());
        assert!(ChannelLayout::Rgba.has_alpha());
        assert_eq!(ChannelLayout::Rgb.to_string(), "RGB");
        assert_eq!(ChannelLayout::Rgba.to_string(), "RGBA");
    }

    #[test]
    fn from_parts_accepts_matching_length() {
        let buf = PixelBuffer::from_parts(2, 2, ChannelLayout::Rgb, vec![0u8; 12]).unwrap();
        assert_eq!(buf.dimensions(), (2, 2));
        assert_eq!(buf.layout(), ChannelLayout::Rgb);
        assert_eq!(buf.data().len(), 12);
    }

    #[test]
    fn from_parts_rejects_length_mismatch() {
        let result = PixelBuffer::from_parts(2, 2, ChannelLayout::Rgba, vec![0u8; 12]);
        match result {
            Err(SchleierError::UnsupportedFormat(msg)) => {
                assert!(msg.contains("expected 16"), "message was: {msg}");
            }
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn from_dynamic_rgb8_passes_through() {
        let img = RgbImage::from_pixel(3, 2, Rgb([10, 200, 255]));
        let buf = PixelBuffer::from_dynamic(DynamicImage::ImageRgb8(img)).unwrap();
        assert_eq!(buf.layout(), ChannelLayout::Rgb);
        assert_eq!(buf.pixel(2, 1), &[10, 200, 255]);
    }

    #[test]
    fn from_dynamic_rgba8_keeps_alpha() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 77]));
        let buf = PixelBuffer::from_dynamic(DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(buf.layout(), ChannelLayout::Rgba);
        assert_eq!(buf.pixel(0, 0), &[1, 2, 3, 77]);
    }

    /// Grayscale sources widen to RGB with the luma value replicated across
    /// all three channels.
    #[test]
    fn from_dynamic_luma8_widens_to_rgb() {
        let img = GrayImage::from_pixel(2, 2, Luma([140u8]));
        let buf = PixelBuffer::from_dynamic(DynamicImage::ImageLuma8(img)).unwrap();
        assert_eq!(buf.layout(), ChannelLayout::Rgb);
        assert_eq!(buf.pixel(1, 1), &[140, 140, 140]);
    }

    #[test]
    fn from_dynamic_luma_alpha_widens_to_rgba() {
        let img = GrayAlphaImage::from_pixel(1, 1, LumaA([90u8, 33u8]));
        let buf = PixelBuffer::from_dynamic(DynamicImage::ImageLumaA8(img)).unwrap();
        assert_eq!(buf.layout(), ChannelLayout::Rgba);
        assert_eq!(buf.pixel(0, 0), &[90, 90, 90, 33]);
    }

    /// 16-bit imagery must be rejected, never narrowed.
    #[test]
    fn from_dynamic_rejects_sixteen_bit() {
        let img: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(2, 2, Rgb([0u16, 1000, 65535]));
        let result = PixelBuffer::from_dynamic(DynamicImage::ImageRgb16(img));
        match result {
            Err(SchleierError::UnsupportedFormat(msg)) => {
                assert!(msg.contains("Rgb16"), "message was: {msg}");
            }
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn from_dynamic_rejects_float() {
        let img: ImageBuffer<Rgb<f32>, Vec<f32>> =
            ImageBuffer::from_pixel(1, 1, Rgb([0.5f32, 0.5, 0.5]));
        assert!(PixelBuffer::from_dynamic(DynamicImage::ImageRgb32F(img)).is_err());
    }

    #[test]
    fn to_dynamic_round_trips_content() {
        let data: Vec<u8> = (0..24).collect();
        let buf = PixelBuffer::from_parts(2, 3, ChannelLayout::Rgba, data.clone()).unwrap();
        let dynamic = buf.to_dynamic();
        let back = PixelBuffer::from_dynamic(dynamic).unwrap();
        assert_eq!(back, buf);
        assert_eq!(back.data(), &data[..]);
    }

    #[test]
    fn empty_buffer_is_representable() {
        let buf = PixelBuffer::from_parts(0, 0, ChannelLayout::Rgb, Vec::new()).unwrap();
        assert_eq!(buf.pixel_count(), 0);
        assert!(buf.data().is_empty());
    }
}
