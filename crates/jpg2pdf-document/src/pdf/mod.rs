// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — object serialisation and the incremental document assembler.

pub mod assembler;
pub mod objects;

pub use assembler::{PdfAssembler, assemble_to_vec};
