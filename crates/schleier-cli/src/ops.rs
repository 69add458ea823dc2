// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Subcommand surface and orchestration. `run_transform` does the load →
// XOR → save pipeline shared by encrypt and decrypt; the comparison sheet
// and run report are side artefacts that never fail the run.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use schleier_cipher::{XorCipher, verify_match};
use schleier_core::config::PreviewConfig;
use schleier_core::error::Result;
use schleier_core::types::PixelBuffer;
use schleier_image::{load_image, save_image, write_comparison};
use tracing::{info, warn};

use crate::report::RunReport;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Obfuscate an image by XOR-ing every channel byte with the key
    Encrypt(TransformArgs),
    /// Restore an obfuscated image using the key it was encrypted with
    Decrypt(TransformArgs),
    /// Check that two images decode to identical pixel content
    Verify(VerifyArgs),
}

/// Arguments shared by `encrypt` and `decrypt`; the transform itself is
/// symmetric, only the wording differs.
#[derive(Debug, Args)]
pub struct TransformArgs {
    /// Path of the image to read
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Path of the image to write; the extension selects the format
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// XOR key between 0 and 255; the same key reverses the transform
    #[arg(short, long)]
    pub key: i64,

    /// Also write a side-by-side comparison sheet to this path
    #[arg(long, value_name = "FILE")]
    pub preview: Option<PathBuf>,

    /// JSON file overriding the comparison sheet style
    #[arg(long, value_name = "FILE", requires = "preview")]
    pub style: Option<PathBuf>,

    /// Also write a JSON run report to this path
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// The reference image
    #[arg(long, value_name = "FILE")]
    pub original: PathBuf,

    /// The image to compare against the reference
    #[arg(long, value_name = "FILE")]
    pub candidate: PathBuf,
}

/// Which direction the user asked for. Both directions apply the same
/// transform; the distinction only shows in logs and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    /// Lower-case verb for logs and run reports.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
        }
    }

    fn summary_noun(self) -> &'static str {
        match self {
            Self::Encrypt => "Encryption",
            Self::Decrypt => "Decryption",
        }
    }
}

/// Dispatch a parsed subcommand.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Encrypt(args) => run_transform(Mode::Encrypt, &args),
        Command::Decrypt(args) => run_transform(Mode::Decrypt, &args),
        Command::Verify(args) => run_verify(&args),
    }
}

/// Load, transform, save. The key is validated before any file is touched,
/// so a bad key never leaves a half-finished run behind.
pub fn run_transform(mode: Mode, args: &TransformArgs) -> Result<()> {
    let cipher = XorCipher::with_raw_key(args.key)?;

    let original = load_image(&args.input)?;
    let transformed = match mode {
        Mode::Encrypt => cipher.encrypt(&original),
        Mode::Decrypt => cipher.decrypt(&original),
    };
    save_image(&transformed, &args.output)?;
    info!(
        mode = mode.verb(),
        key = cipher.key().value(),
        output = %args.output.display(),
        "transform complete"
    );

    write_side_artefacts(mode, args, &cipher, &original, &transformed);

    println!(
        "{} completed successfully. Output saved to {}",
        mode.summary_noun(),
        args.output.display()
    );
    Ok(())
}

/// Comparison sheet and run report. The transformed image is already on
/// disk at this point, so failures here are logged and swallowed.
fn write_side_artefacts(
    mode: Mode,
    args: &TransformArgs,
    cipher: &XorCipher,
    original: &PixelBuffer,
    transformed: &PixelBuffer,
) {
    if let Some(preview_path) = &args.preview {
        let config = preview_config(args.style.as_deref());
        if let Err(err) = write_comparison(original, transformed, preview_path, &config) {
            warn!(error = %err, path = %preview_path.display(), "comparison sheet not written");
        }
    }

    if let Some(report_path) = &args.report {
        let report = RunReport::new(
            mode.verb(),
            &args.input,
            &args.output,
            cipher.key(),
            original,
            transformed,
        );
        if let Err(err) = report.write_json(report_path) {
            warn!(error = %err, path = %report_path.display(), "run report not written");
        }
    }
}

/// Style file if given, defaults otherwise. An unreadable style file falls
/// back to the defaults rather than aborting the sheet.
fn preview_config(style: Option<&Path>) -> PreviewConfig {
    match style {
        Some(path) => match PreviewConfig::from_json_file(path) {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, path = %path.display(), "style file not usable, using defaults");
                PreviewConfig::default()
            }
        },
        None => PreviewConfig::default(),
    }
}

/// Decode both images and compare their pixel fingerprints.
pub fn run_verify(args: &VerifyArgs) -> Result<()> {
    let original = load_image(&args.original)?;
    let candidate = load_image(&args.candidate)?;
    verify_match(&original, &candidate)?;
    println!(
        "Pixel content matches: {} and {} decode to the same image.",
        args.original.display(),
        args.candidate.display()
    );
    Ok(())
}
