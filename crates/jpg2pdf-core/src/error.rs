// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for jpg2pdf.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Why a JPEG buffer was rejected by the header sniff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// No `FF C0` (SOF0) marker anywhere in the buffer.
    MissingSof0,
    /// The marker was found at `offset` but the buffer ends before the
    /// frame header's height and width fields.
    Truncated { offset: usize },
    /// The frame header declares a zero width or height.
    ZeroDimension { width: u16, height: u16 },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSof0 => write!(f, "no SOF0 marker found"),
            Self::Truncated { offset } => {
                write!(f, "SOF0 marker at offset {offset} is truncated")
            }
            Self::ZeroDimension { width, height } => {
                write!(f, "zero image dimension ({width}x{height})")
            }
        }
    }
}

/// Top-level error type for all jpg2pdf operations.
#[derive(Debug, Error)]
pub enum Jpg2PdfError {
    // -- Output / input files --
    #[error("cannot create output {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read input {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    // -- Image errors --
    #[error("malformed JPEG ({len} bytes): {reason}")]
    MalformedImage { reason: MalformedReason, len: usize },

    // -- Document lifecycle --
    #[error("document has no objects, refusing to write xref and trailer")]
    EmptyDocument,

    #[error("document already finalized")]
    AlreadyFinalized,

    #[error("output stream failed earlier, document cannot be completed")]
    OutputFailed,

    // -- Configuration --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, Jpg2PdfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_carries_length_and_reason() {
        let err = Jpg2PdfError::MalformedImage {
            reason: MalformedReason::ZeroDimension {
                width: 0,
                height: 12,
            },
            len: 640,
        };
        assert_eq!(
            err.to_string(),
            "malformed JPEG (640 bytes): zero image dimension (0x12)"
        );
    }

    #[test]
    fn create_output_names_the_path() {
        let err = Jpg2PdfError::CreateOutput {
            path: PathBuf::from("/nowhere/out.pdf"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("cannot create output /nowhere/out.pdf"));
    }
}
