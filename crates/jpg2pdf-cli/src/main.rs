// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// jpg2pdf — combine JPEG files into a single PDF, one image per page.
//
// Entry point. Initialises logging, loads the optional configuration, feeds
// every input to the assembler in argument order and seals the document.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use jpg2pdf_core::human_errors::{Severity, humanize_error};
use jpg2pdf_core::{AssemblerConfig, Jpg2PdfError};
use jpg2pdf_document::PdfAssembler;

/// Combine baseline JPEG files into one PDF without re-encoding them
#[derive(Parser, Debug)]
#[command(name = "jpg2pdf", author, version, about, long_about = None)]
struct Args {
    /// Output PDF file path (created or truncated)
    output: PathBuf,

    /// Input JPEG files, one page each, in order
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// JSON file overriding page layout and document info
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version are not failures.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<(), Jpg2PdfError> {
    let config = match &args.config {
        Some(path) => AssemblerConfig::from_json_file(path)?,
        None => AssemblerConfig::default(),
    };

    let mut pdf = PdfAssembler::create(&args.output, config)?;
    tracing::info!(output = %args.output.display(), inputs = args.inputs.len(), "jpg2pdf starting");

    for input in &args.inputs {
        match add_file(&mut pdf, input) {
            Ok(()) => {}
            Err(err) if humanize_error(&err).severity == Severity::Skippable => {
                tracing::warn!(input = %input.display(), error = %err, "Skipping input");
                report(&err);
            }
            // Dropping `pdf` on the way out still seals what was written.
            Err(err) => return Err(err),
        }
    }

    let summary = pdf.finish()?;
    println!(
        "startxref={}, objs={}, pages={}, bytes={}.",
        summary.startxref, summary.object_count, summary.page_count, summary.total_bytes
    );
    println!("Build '{}' OK.", args.output.display());
    Ok(())
}

fn add_file<W>(pdf: &mut PdfAssembler<W>, input: &Path) -> Result<(), Jpg2PdfError>
where
    W: std::io::Write + std::io::Seek,
{
    let bytes = std::fs::read(input).map_err(|source| Jpg2PdfError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    println!("'{}' fsize={} ...", input.display(), bytes.len());

    let meta = pdf.add_image(&bytes)?;
    println!(
        "  ... page {} ({}x{}, {} as object {}) OK.",
        meta.page_number, meta.width, meta.height, meta.xobject_name, meta.image_object_number
    );
    Ok(())
}

fn report(err: &Jpg2PdfError) {
    let human = humanize_error(err);
    eprintln!("error: {err}");
    eprintln!("  {}", human.message);
    eprintln!("  {}", human.suggestion);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_at_least_one_input() {
        let err = Args::try_parse_from(["jpg2pdf", "out.pdf"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn inputs_keep_argument_order() {
        let args = Args::try_parse_from(["jpg2pdf", "out.pdf", "b.jpg", "a.jpg", "c.jpg"]).unwrap();
        assert_eq!(args.output, PathBuf::from("out.pdf"));
        assert_eq!(
            args.inputs,
            vec![
                PathBuf::from("b.jpg"),
                PathBuf::from("a.jpg"),
                PathBuf::from("c.jpg")
            ]
        );
        assert!(args.config.is_none());
    }
}
