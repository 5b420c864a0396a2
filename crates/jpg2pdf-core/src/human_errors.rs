// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the command line.
//
// Every technical error is mapped to plain English with a suggestion. The
// severity decides whether the CLI skips the current image or stops.

use crate::error::{Jpg2PdfError, MalformedReason};

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Only the current image is lost; assembly carries on.
    Skippable,
    /// The user must fix something (path, permissions, config) and rerun.
    ActionRequired,
    /// The output document cannot be completed.
    Fatal,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    pub severity: Severity,
}

/// Convert a `Jpg2PdfError` into a `HumanError`.
pub fn humanize_error(err: &Jpg2PdfError) -> HumanError {
    match err {
        Jpg2PdfError::CreateOutput { path, .. } => HumanError {
            message: format!("Could not create {}.", path.display()),
            suggestion: "Check that the directory exists and that you can write to it.".into(),
            severity: Severity::ActionRequired,
        },

        Jpg2PdfError::ReadInput { path, source } => HumanError {
            message: format!("Could not read {}.", path.display()),
            suggestion: if source.kind() == std::io::ErrorKind::NotFound {
                "The file does not exist. Check the spelling of the path.".into()
            } else {
                format!("The file could not be opened ({source}).")
            },
            severity: Severity::Skippable,
        },

        Jpg2PdfError::Io(io_err) => HumanError {
            message: "Writing the PDF failed.".into(),
            suggestion: if io_err.kind() == std::io::ErrorKind::StorageFull {
                "The disk is full. Free some space and try again.".into()
            } else {
                format!("The output file could not be written ({io_err}).")
            },
            severity: Severity::Fatal,
        },

        Jpg2PdfError::MalformedImage { reason, .. } => HumanError {
            message: "This file is not a baseline JPEG.".into(),
            suggestion: match reason {
                MalformedReason::MissingSof0 => {
                    "Progressive and non-JPEG files are not supported. Re-save it as a baseline JPEG.".into()
                }
                MalformedReason::Truncated { .. } => {
                    "The file looks cut short. Copy it again from the original source.".into()
                }
                MalformedReason::ZeroDimension { .. } => {
                    "The image header says it has no pixels. The file is probably damaged.".into()
                }
            },
            severity: Severity::Skippable,
        },

        Jpg2PdfError::EmptyDocument => HumanError {
            message: "No pages were added, so no PDF was produced.".into(),
            suggestion: "Make sure at least one input is a readable baseline JPEG.".into(),
            severity: Severity::Fatal,
        },

        Jpg2PdfError::OutputFailed => HumanError {
            message: "The PDF could not be finished after an earlier write error.".into(),
            suggestion: "Check free disk space and rerun; the partial file is not a valid PDF.".into(),
            severity: Severity::Fatal,
        },

        Jpg2PdfError::AlreadyFinalized => HumanError {
            message: "The PDF was already finished.".into(),
            suggestion: "This is a bug in the caller; please report it.".into(),
            severity: Severity::Fatal,
        },

        Jpg2PdfError::Config(detail) => HumanError {
            message: "The configuration is invalid.".into(),
            suggestion: format!("Fix the configuration file and rerun. ({detail})"),
            severity: Severity::ActionRequired,
        },

        Jpg2PdfError::Serialization(_) => HumanError {
            message: "The configuration file is not valid JSON.".into(),
            suggestion: "Check the file for typos such as missing quotes or commas.".into(),
            severity: Severity::ActionRequired,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_image_is_skippable() {
        let err = Jpg2PdfError::MalformedImage {
            reason: MalformedReason::MissingSof0,
            len: 10,
        };
        assert_eq!(humanize_error(&err).severity, Severity::Skippable);
    }

    #[test]
    fn write_failure_is_fatal() {
        let err = Jpg2PdfError::Io(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(humanize_error(&err).severity, Severity::Fatal);
    }

    #[test]
    fn missing_input_mentions_spelling() {
        let err = Jpg2PdfError::ReadInput {
            path: "a.jpg".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Skippable);
        assert!(human.suggestion.contains("spelling"));
    }

    #[test]
    fn poisoned_output_is_fatal() {
        assert_eq!(
            humanize_error(&Jpg2PdfError::OutputFailed).severity,
            Severity::Fatal
        );
    }

    #[test]
    fn empty_document_is_fatal() {
        assert_eq!(
            humanize_error(&Jpg2PdfError::EmptyDocument).severity,
            Severity::Fatal
        );
    }
}
