// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages.
//
// Every technical error is mapped to plain English with a clear suggestion,
// so the CLI never leaves the user staring at a raw library error alone.

use crate::error::SchleierError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Disk blip or storage full; trying again may work.
    Transient,
    /// User must change something (key, path, file format).
    ActionRequired,
    /// Cannot be fixed by retrying or changing inputs; the file itself is
    /// the problem.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (printed first).
    pub message: String,
    /// What the user should try (printed underneath).
    pub suggestion: String,
    /// Whether simply running the command again might succeed.
    pub retriable: bool,
    /// Severity level.
    pub severity: Severity,
}

/// Convert a `SchleierError` into a `HumanError` anyone can act on.
pub fn humanize_error(err: &SchleierError) -> HumanError {
    match err {
        SchleierError::InvalidKey(raw) => HumanError {
            message: format!("The key {raw} isn't in the allowed range."),
            suggestion: "Pick a whole number between 0 and 255 and run the command again. \
                         The same key decrypts what it encrypted."
                .into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        SchleierError::UnsupportedFormat(detail) => HumanError {
            message: "This image's pixel format isn't supported.".into(),
            suggestion: format!(
                "Schleier works on ordinary 8-bit images. Convert the image to an \
                 8-bit PNG or JPEG first. ({detail})"
            ),
            retriable: false,
            severity: Severity::Permanent,
        },

        SchleierError::Decode(_) => HumanError {
            message: "This image couldn't be read.".into(),
            suggestion: "The file may be damaged or not really an image. Try opening it \
                         in an image viewer to check, or try a different file."
                .into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        SchleierError::Write(_) => HumanError {
            message: "The result couldn't be saved.".into(),
            suggestion: "Check the output path: the folder must exist and the file name \
                         needs a known image extension such as .png or .jpg."
                .into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        SchleierError::Preview(_) => HumanError {
            message: "The comparison sheet couldn't be drawn.".into(),
            suggestion: "The transformed image itself was still produced. Check the \
                         preview path and any custom style settings."
                .into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        SchleierError::PixelMismatch { .. } => HumanError {
            message: "The two images don't show the same pixels.".into(),
            suggestion: "They differ after decoding. Check that both files came from the \
                         same source image and that the same key was used both times."
                .into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        SchleierError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Check the path and try again."
                        .into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "Schleier doesn't have permission to use that file.".into(),
                    suggestion: "Check the file permissions, or copy the file somewhere \
                                 you can write to first."
                        .into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your disk may be full."
                        .into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        SchleierError::Json(_) => HumanError {
            message: "The style file couldn't be understood.".into(),
            suggestion: "Check that it is valid JSON with the expected fields: gutter, \
                         margin, background, frame, max_panel_width."
                .into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_names_the_value() {
        let human = humanize_error(&SchleierError::InvalidKey(256));
        assert!(human.message.contains("256"));
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(!human.retriable);
    }

    #[test]
    fn unsupported_format_is_permanent() {
        let human = humanize_error(&SchleierError::UnsupportedFormat("Rgb16".into()));
        assert_eq!(human.severity, Severity::Permanent);
        assert!(human.suggestion.contains("Rgb16"));
    }

    #[test]
    fn missing_file_is_action_required() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let human = humanize_error(&SchleierError::Io(io));
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(!human.retriable);
    }

    #[test]
    fn generic_io_is_retriable() {
        let io = std::io::Error::other("disk on fire");
        let human = humanize_error(&SchleierError::Io(io));
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.retriable);
    }
}
