// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Serialisation of the individual PDF objects written by the assembler.
//
// Line terminators are a bare carriage return throughout. Image and content
// stream bodies are delimited by their declared `/Length`, so these strings
// must stay byte-exact.

use std::fmt::Write as _;

use jpg2pdf_core::config::{AssemblerConfig, DocumentInfo};
use jpg2pdf_core::types::{ObjectRecord, PageRecord};

pub const HEADER: &str = "%PDF-1.3\r";

/// Free-list head entry that always opens the xref table.
pub const XREF_FREE_ENTRY: &str = "0000000000 65535 f\r";

pub const ENDSTREAM_ENDOBJ: &str = "endstream\rendobj\r";

/// `"<n> 0 obj\r"`
pub fn object_header(object_number: u32) -> String {
    format!("{object_number} 0 obj\r")
}

/// Dictionary of an image XObject up to and including the `stream` keyword.
/// The raw JPEG bytes follow immediately.
pub fn image_dictionary(
    name: &str,
    width: u16,
    height: u16,
    length: usize,
    config: &AssemblerConfig,
) -> String {
    format!(
        "<</Type /XObject /Subtype /Image /Name /{name} \
         /Width {width} /Height {height} /Length {length} /ColorSpace /{} /BitsPerComponent {} \
         /Filter [ /DCTDecode ] >> stream\r",
        config.color_space, config.bits_per_component
    )
}

/// Page content: paint the named image over the configured extent.
pub fn content_stream_body(name: &str, config: &AssemblerConfig) -> String {
    format!(
        "q {} 0 0 {} 0.00 0.00 cm 1 g /{name} Do Q\n",
        config.image_width_pt, config.image_height_pt
    )
}

/// Content stream object body, from `<<` through `endobj`.
pub fn content_object(stream: &str) -> String {
    format!(
        "<< /Length {}\r>>\rstream\r{stream}{ENDSTREAM_ENDOBJ}",
        stream.len()
    )
}

pub struct PageRefs<'a> {
    pub parent: u32,
    pub image_name: &'a str,
    pub image: u32,
    pub contents: u32,
}

/// Page object body, from `<<` through `endobj`.
pub fn page_object(refs: &PageRefs<'_>, config: &AssemblerConfig) -> String {
    let [llx, lly, urx, ury] = config.media_box;
    format!(
        "<<\r\
         /Type /Page\r\
         /MediaBox [{llx} {lly} {urx} {ury}]\r\
         /Parent {} 0 R \r\
         /Rotate 0 /Resources <<\r\
         /ProcSet [/PDF /ImageC /ImageB /ImageI]\r\
         /XObject <<\r\
         /{} {} 0 R\r \
         >>\r \
         >>\r\
         /Contents [ {} 0 R ]\r\
         >>\r\
         endobj\r",
        refs.parent, refs.image_name, refs.image, refs.contents
    )
}

/// Pages tree root listing every page in document order.
pub fn pages_object(kids: &[PageRecord]) -> String {
    let mut out = String::from("<<\r/Type /Pages\r/Kids [");
    for kid in kids {
        let _ = write!(out, " {} 0 R", kid.object_number);
    }
    let _ = write!(out, "]\r/Count {}\r>>\rendobj\r", kids.len());
    out
}

pub fn catalog_object(pages: u32) -> String {
    format!("<<\r/Type /Catalog\r/Pages {pages} 0 R\r>>\rendobj\r")
}

pub fn info_object(info: &DocumentInfo) -> String {
    format!(
        "<<\r\
         /Creator {}\r\
         /CreationDate {}\r\
         /Author {}\r\
         /Producer {}\r\
         /Title {}\r\
         /Subject {}\r\
         >>\r\
         endobj\r",
        literal_string(&info.creator),
        literal_string(&info.creation_date),
        literal_string(&info.author),
        literal_string(&info.producer),
        literal_string(&info.title),
        literal_string(&info.subject),
    )
}

/// Cross-reference table. `records` must be in ascending object-number order.
pub fn xref_table<'a>(records: impl ExactSizeIterator<Item = &'a ObjectRecord>) -> String {
    let mut out = format!("xref\r1 {}\r{XREF_FREE_ENTRY}", records.len() + 1);
    for rec in records {
        let _ = write!(out, "{:010} 00000 n\r", rec.byte_offset);
    }
    out
}

pub fn trailer(size: usize, root: u32, info: u32, startxref: u64) -> String {
    format!(
        "trailer\r<<\r/Size {size}\r/Root {root} 0 R\r/Info {info} 0 R\r>>\rstartxref\r{startxref}\r%%EOF\r"
    )
}

/// PDF literal string with backslash and parentheses escaped.
fn literal_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('(');
    for ch in text.chars() {
        if matches!(ch, '\\' | '(' | ')') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push(')');
    out
}
