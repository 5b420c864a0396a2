// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Domain types for the PDF object writer.

use serde::{Deserialize, Serialize};

/// An indirect object that has been written to the output stream.
///
/// `byte_offset` is the absolute position of the first byte of
/// `"<n> 0 obj"`. Records are immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub object_number: u32,
    pub byte_offset: u64,
}

impl ObjectRecord {
    pub fn new(object_number: u32, byte_offset: u64) -> Self {
        Self {
            object_number,
            byte_offset,
        }
    }
}

/// A page object, kept in document order to build the `/Kids` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub object_number: u32,
    pub byte_offset: u64,
}

impl From<ObjectRecord> for PageRecord {
    fn from(rec: ObjectRecord) -> Self {
        Self {
            object_number: rec.object_number,
            byte_offset: rec.byte_offset,
        }
    }
}

/// Pixel dimensions recovered from a JPEG SOF0 frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JpegDimensions {
    pub width: u16,
    pub height: u16,
}

/// Everything known about an image once it has been placed on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub width: u16,
    pub height: u16,
    /// Exact number of JPEG bytes embedded as the stream body.
    pub byte_length: usize,
    /// Resource name, `Im1`, `Im2`, ...
    pub xobject_name: String,
    pub image_object_number: u32,
    pub content_object_number: u32,
    pub page_object_number: u32,
    /// 1-based page index in the final document.
    pub page_number: usize,
}

/// Outcome of sealing a document with its xref table and trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeSummary {
    /// Offset of the `xref` keyword, as written after `startxref`.
    pub startxref: u64,
    pub object_count: u32,
    pub page_count: usize,
    pub catalog_object_number: u32,
    pub info_object_number: u32,
    /// Total bytes in the finished file.
    pub total_bytes: u64,
}
