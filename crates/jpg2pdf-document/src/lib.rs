// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// jpg2pdf-document — JPEG header inspection and PDF assembly.
//
// Images are embedded as opaque DCT streams; the only thing read from a JPEG
// is its SOF0 frame size. The PDF is written in a single pass with every
// object offset recorded for the closing cross-reference table.

pub mod jpeg;
pub mod pdf;

// Re-export the primary items so callers can use `jpg2pdf_document::PdfAssembler` etc.
pub use jpeg::inspector::inspect;
pub use pdf::assembler::{PdfAssembler, assemble_to_vec};
