// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Schleier — Pixel-Level Image Obfuscation
//
// Entry point. Initialises logging, parses the command line, and turns
// errors into human-readable messages on stderr.

mod ops;
mod report;

use std::process::ExitCode;

use clap::Parser;
use schleier_core::human_errors::humanize_error;

/// Obfuscate and restore raster images with a single-byte XOR key.
#[derive(Debug, Parser)]
#[command(
    name = "schleier",
    version,
    about = "Reversible pixel-level image obfuscation with a single-byte XOR key"
)]
struct Cli {
    #[command(subcommand)]
    command: ops::Command,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match ops::run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "run failed");
            let human = humanize_error(&err);
            eprintln!("error: {}", human.message);
            eprintln!("{}", human.suggestion);
            if human.retriable {
                eprintln!("This problem may be temporary; the same command can be retried.");
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Catches invalid clap attribute combinations at test time.
    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_encrypt_with_all_flags() {
        let cli = Cli::parse_from([
            "schleier", "encrypt", "--input", "in.png", "--output", "out.png", "--key", "57",
            "--preview", "sheet.png", "--style", "style.json", "--report", "run.json",
        ]);
        match cli.command {
            ops::Command::Encrypt(args) => {
                assert_eq!(args.key, 57);
                assert!(args.preview.is_some());
                assert!(args.style.is_some());
                assert!(args.report.is_some());
            }
            other => panic!("expected encrypt, parsed {other:?}"),
        }
    }

    #[test]
    fn style_flag_requires_preview() {
        let result = Cli::try_parse_from([
            "schleier", "encrypt", "-i", "in.png", "-o", "out.png", "-k", "57", "--style",
            "style.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_verify() {
        let cli = Cli::parse_from([
            "schleier",
            "verify",
            "--original",
            "a.png",
            "--candidate",
            "b.png",
        ]);
        assert!(matches!(cli.command, ops::Command::Verify(_)));
    }
}
