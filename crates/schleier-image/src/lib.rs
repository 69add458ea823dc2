// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// schleier-image — Image I/O and comparison sheets for Schleier.
//
// Provides the loader (decode into a PixelBuffer, grayscale widened, non-8-bit
// rejected), the saver (format inferred from the extension), and the
// comparison sheet renderer that replaces interactive display windows.

pub mod load;
pub mod preview;
pub mod save;

// Re-export the primary functions so callers can use `schleier_image::load_image` etc.
pub use load::{load_from_memory, load_image};
pub use preview::{render_strip, write_comparison};
pub use save::save_image;
