// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JPEG inspector — recover pixel width and height from the SOF0 frame header.
//
// This is a header sniff, not a decoder: nothing else in the file is checked.

use jpg2pdf_core::error::{Jpg2PdfError, MalformedReason, Result};
use jpg2pdf_core::types::JpegDimensions;
use tracing::{debug, instrument};

/// Start Of Frame, baseline DCT.
const SOF0: [u8; 2] = [0xFF, 0xC0];

/// Bytes that must follow the marker: segment length (2), sample
/// precision (1), height (2), width (2).
const FRAME_HEADER_LEN: usize = 7;

/// Find the first SOF0 marker and read the frame size that follows it.
///
/// Height and width are big-endian regardless of host byte order. Fails with
/// `MalformedImage` when the marker is absent, when the buffer ends inside
/// the frame header, or when either dimension is zero.
#[instrument(skip(bytes), fields(len = bytes.len()))]
pub fn inspect(bytes: &[u8]) -> Result<JpegDimensions> {
    let malformed = |reason| Jpg2PdfError::MalformedImage {
        reason,
        len: bytes.len(),
    };

    let marker_at = bytes
        .windows(SOF0.len())
        .position(|pair| pair == SOF0)
        .ok_or_else(|| malformed(MalformedReason::MissingSof0))?;

    let header_start = marker_at + SOF0.len();
    let header = bytes
        .get(header_start..header_start + FRAME_HEADER_LEN)
        .ok_or_else(|| malformed(MalformedReason::Truncated { offset: marker_at }))?;

    let height = u16::from_be_bytes([header[3], header[4]]);
    let width = u16::from_be_bytes([header[5], header[6]]);

    if width == 0 || height == 0 {
        return Err(malformed(MalformedReason::ZeroDimension { width, height }));
    }

    debug!(marker_at, width, height, "SOF0 frame header found");
    Ok(JpegDimensions { width, height })
}
