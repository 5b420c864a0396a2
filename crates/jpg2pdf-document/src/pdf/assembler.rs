// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Incremental PDF assembler — streams one page per JPEG and seals the file
// with a cross-reference table and trailer.
//
// Every object's offset is taken from the sink's position after a flush, never
// by summing lengths in memory. Object numbers are allocated in emission order
// except the Pages tree root, which is allocated when the first page refers to
// it and written last.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use jpg2pdf_core::config::AssemblerConfig;
use jpg2pdf_core::error::{Jpg2PdfError, Result};
use jpg2pdf_core::types::{FinalizeSummary, ImageMetadata, ObjectRecord, PageRecord};
use tracing::{debug, info, instrument, warn};

use super::objects::{self, PageRefs};
use crate::jpeg::inspect;

/// Writes a PDF document one image at a time.
///
/// The document is sealed exactly once: by [`finish`](Self::finish),
/// [`into_inner`](Self::into_inner), or when the assembler is dropped. A
/// document with at least one page is therefore always closed with a valid
/// xref table and trailer, even if a later image was rejected.
///
/// A failed write to the sink poisons the assembler: later calls return
/// `OutputFailed` and no xref table is written over the damaged output.
///
/// ```ignore
/// let mut pdf = PdfAssembler::open("album.pdf")?;
/// for path in inputs {
///     pdf.add_image(&std::fs::read(path)?)?;
/// }
/// let summary = pdf.finish()?;
/// ```
pub struct PdfAssembler<W: Write + Seek> {
    writer: Option<W>,
    config: AssemblerConfig,
    /// Keyed by object number; iteration is ascending.
    objects: BTreeMap<u32, ObjectRecord>,
    /// Page objects in document order.
    pages: Vec<PageRecord>,
    next_object_number: u32,
    image_count: u32,
    /// Pages tree root, assigned when the first page is written.
    pages_parent: Option<u32>,
    sealed: bool,
    /// Set by the first failed write or seek on the sink.
    failed: bool,
}

impl PdfAssembler<BufWriter<File>> {
    /// Create (or truncate) `path` and write the PDF header, using the
    /// default layout.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::create(path, AssemblerConfig::default())
    }

    /// Create (or truncate) `path` and write the PDF header.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn create(path: impl AsRef<Path>, config: AssemblerConfig) -> Result<Self> {
        let file = File::create(path.as_ref()).map_err(|source| Jpg2PdfError::CreateOutput {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        info!("Output created");
        Self::new(BufWriter::new(file), config)
    }
}

impl<W: Write + Seek> PdfAssembler<W> {
    /// Start a document on an arbitrary seekable sink. The sink should be
    /// empty: offsets are absolute positions in it.
    pub fn new(mut writer: W, config: AssemblerConfig) -> Result<Self> {
        config.validate()?;
        writer.write_all(objects::HEADER.as_bytes())?;
        Ok(Self {
            writer: Some(writer),
            config,
            objects: BTreeMap::new(),
            pages: Vec::new(),
            next_object_number: 1,
            image_count: 0,
            pages_parent: None,
            sealed: false,
            failed: false,
        })
    }

    // -- Accessors ------------------------------------------------------------

    /// Number of objects written so far.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Recorded objects in ascending object-number order.
    pub fn objects(&self) -> impl ExactSizeIterator<Item = &ObjectRecord> {
        self.objects.values()
    }

    pub fn pages(&self) -> &[PageRecord] {
        &self.pages
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    // -- Pages ----------------------------------------------------------------

    /// Append one page showing `jpeg`.
    ///
    /// Writes the image XObject, the page content stream and the page object,
    /// in that order. If the JPEG header cannot be read nothing is written and
    /// no object number is consumed.
    #[instrument(skip(self, jpeg), fields(len = jpeg.len()))]
    pub fn add_image(&mut self, jpeg: &[u8]) -> Result<ImageMetadata> {
        if self.sealed {
            return Err(Jpg2PdfError::AlreadyFinalized);
        }
        if self.failed {
            return Err(Jpg2PdfError::OutputFailed);
        }

        let dims = match inspect(jpeg) {
            Ok(dims) => dims,
            Err(err) => {
                warn!(error = %err, "Image rejected, document unchanged");
                return Err(err);
            }
        };

        self.image_count += 1;
        let name = format!("Im{}", self.image_count);

        // Image XObject: dictionary, raw DCT bytes, terminator.
        let image = self.begin_object()?;
        let dict = objects::image_dictionary(
            &name,
            dims.width,
            dims.height,
            jpeg.len(),
            &self.config,
        );
        self.write_str(&dict)?;
        self.write_bytes(jpeg)?;
        self.write_str(objects::ENDSTREAM_ENDOBJ)?;

        // Content stream painting the image over the page.
        let contents = self.begin_object()?;
        let stream = objects::content_stream_body(&name, &self.config);
        self.write_str(&objects::content_object(&stream))?;

        // Page object. The Pages root number is taken on first use so that it
        // exists before it is referenced.
        let page = self.begin_object()?;
        self.pages.push(PageRecord::from(page));
        let parent = match self.pages_parent {
            Some(n) => n,
            None => {
                let n = self.allocate();
                self.pages_parent = Some(n);
                n
            }
        };
        let body = objects::page_object(
            &PageRefs {
                parent,
                image_name: &name,
                image: image.object_number,
                contents: contents.object_number,
            },
            &self.config,
        );
        self.write_str(&body)?;

        let meta = ImageMetadata {
            width: dims.width,
            height: dims.height,
            byte_length: jpeg.len(),
            xobject_name: name,
            image_object_number: image.object_number,
            content_object_number: contents.object_number,
            page_object_number: page.object_number,
            page_number: self.pages.len(),
        };
        info!(
            page = meta.page_number,
            width = meta.width,
            height = meta.height,
            image_offset = image.byte_offset,
            "Page added"
        );
        Ok(meta)
    }

    // -- Finalisation ---------------------------------------------------------

    /// Seal the document and close the output.
    pub fn finish(mut self) -> Result<FinalizeSummary> {
        self.seal()
    }

    /// Seal the document and hand back the sink.
    pub fn into_inner(mut self) -> Result<(W, FinalizeSummary)> {
        let summary = self.seal()?;
        let writer = self.writer.take().ok_or(Jpg2PdfError::AlreadyFinalized)?;
        Ok((writer, summary))
    }

    /// Write the Pages tree, Catalog, Info, xref table and trailer.
    ///
    /// Runs at most once. With no recorded objects, or after a failed write,
    /// nothing is written and the output is left as it stands.
    #[instrument(skip(self), fields(objects = self.objects.len(), pages = self.pages.len()))]
    fn seal(&mut self) -> Result<FinalizeSummary> {
        if self.sealed {
            return Err(Jpg2PdfError::AlreadyFinalized);
        }
        self.sealed = true;

        if self.failed {
            return Err(Jpg2PdfError::OutputFailed);
        }
        if self.objects.is_empty() {
            return Err(Jpg2PdfError::EmptyDocument);
        }

        // Pages tree root. Its number was reserved by the first page; its
        // offset is only known now.
        let parent = match self.pages_parent {
            Some(n) => n,
            None => self.allocate(),
        };
        self.record(parent)?;
        self.write_str(&objects::object_header(parent))?;
        self.write_str(&objects::pages_object(&self.pages))?;

        // Catalog and Info are the last two objects; the trailer relies on it.
        let catalog = self.begin_object()?;
        self.write_str(&objects::catalog_object(parent))?;

        let info = self.begin_object()?;
        let body = objects::info_object(&self.config.info);
        self.write_str(&body)?;

        let object_count = self.objects.len();
        debug_assert!(
            self.objects.keys().copied().eq(1..=object_count as u32),
            "object numbers must be dense"
        );

        let startxref = self.position()?;
        let table = objects::xref_table(self.objects.values());
        self.write_str(&table)?;
        let trailer = objects::trailer(
            object_count + 1,
            catalog.object_number,
            info.object_number,
            startxref,
        );
        self.write_str(&trailer)?;
        let total_bytes = self.position()?;

        let summary = FinalizeSummary {
            startxref,
            object_count: object_count as u32,
            page_count: self.pages.len(),
            catalog_object_number: catalog.object_number,
            info_object_number: info.object_number,
            total_bytes,
        };
        info!(
            startxref,
            objects = summary.object_count,
            pages = summary.page_count,
            total_bytes,
            "Document sealed"
        );
        Ok(summary)
    }

    // -- Object bookkeeping ---------------------------------------------------

    fn allocate(&mut self) -> u32 {
        let n = self.next_object_number;
        self.next_object_number += 1;
        n
    }

    /// Allocate the next object number, record its offset and write its header.
    fn begin_object(&mut self) -> Result<ObjectRecord> {
        let n = self.allocate();
        let rec = self.record(n)?;
        self.write_str(&objects::object_header(n))?;
        Ok(rec)
    }

    fn record(&mut self, object_number: u32) -> Result<ObjectRecord> {
        let rec = ObjectRecord::new(object_number, self.position()?);
        debug!(object_number, offset = rec.byte_offset, "Object recorded");
        self.objects.insert(object_number, rec);
        Ok(rec)
    }

    /// Current absolute offset, after flushing anything buffered.
    fn position(&mut self) -> Result<u64> {
        let writer = self.writer_mut()?;
        let result = writer.flush().and_then(|()| writer.stream_position());
        self.check(result)
    }

    fn write_str(&mut self, data: &str) -> Result<()> {
        self.write_bytes(data.as_bytes())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        let result = self.writer_mut()?.write_all(data);
        self.check(result)
    }

    /// Poison the assembler on any sink error.
    fn check<T>(&mut self, result: std::io::Result<T>) -> Result<T> {
        result.map_err(|err| {
            self.failed = true;
            warn!(error = %err, "Output stream failed, document will not be sealed");
            Jpg2PdfError::Io(err)
        })
    }

    fn writer_mut(&mut self) -> Result<&mut W> {
        self.writer.as_mut().ok_or(Jpg2PdfError::AlreadyFinalized)
    }
}

impl<W: Write + Seek> Drop for PdfAssembler<W> {
    fn drop(&mut self) {
        if !self.sealed {
            match self.seal() {
                Ok(summary) => debug!(startxref = summary.startxref, "Sealed on drop"),
                Err(err) => warn!(error = %err, "Sealing on drop failed"),
            }
        }
        if self.failed {
            return;
        }
        if let Some(writer) = self.writer.as_mut() {
            if let Err(err) = writer.flush() {
                warn!(error = %err, "Final flush failed");
            }
        }
    }
}

/// Build a whole document in memory.
///
/// Images that fail inspection are skipped; write errors and an empty result
/// are returned.
pub fn assemble_to_vec<I>(images: I, config: AssemblerConfig) -> Result<Vec<u8>>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut pdf = PdfAssembler::new(Cursor::new(Vec::new()), config)?;
    for (index, image) in images.into_iter().enumerate() {
        match pdf.add_image(image.as_ref()) {
            Ok(_) => {}
            Err(err @ Jpg2PdfError::MalformedImage { .. }) => {
                warn!(index, error = %err, "Skipping image");
            }
            Err(err) => return Err(err),
        }
    }
    let (cursor, _) = pdf.into_inner()?;
    Ok(cursor.into_inner())
}
