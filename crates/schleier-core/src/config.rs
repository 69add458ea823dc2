// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Comparison sheet configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Layout settings for the side-by-side comparison sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Horizontal gap between panels, in pixels.
    pub gutter: u32,
    /// Blank border around the whole sheet, in pixels.
    pub margin: u32,
    /// Canvas colour behind the panels.
    pub background: [u8; 3],
    /// Colour of the one-pixel frame drawn around each panel.
    pub frame: [u8; 3],
    /// Panels wider than this are downscaled to fit (aspect preserved).
    /// `None` disables downscaling.
    pub max_panel_width: Option<u32>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            gutter: 16,
            margin: 16,
            background: [18, 18, 18],
            frame: [96, 96, 96],
            max_panel_width: Some(960),
        }
    }
}

impl PreviewConfig {
    /// Load a configuration from a JSON file (the CLI's `--style` flag).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }
}
