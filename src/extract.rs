//! The extraction pipeline: decode, recognize, render, print.
//!
//! [`run`] is the whole program minus argument parsing. All failures are caught
//! here and reported as one `Error: <message>` line; the output is rendered in
//! full before anything is written, so a run writes either to `out` or to `err`,
//! never both.

use crate::config::{OcrConfig, OutputFormat};
use crate::engine::Recognizer;
use crate::error::Result;
use crate::image_source::load_image;
use crate::report::parse_report;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Text was written to the output sink
    Extracted,
    /// An error line was written to the error sink
    Failed,
}

impl RunStatus {
    /// Process exit code for this status.
    ///
    /// Failures exit with 0 unless `strict` is set, matching the long-standing
    /// behavior of the tool.
    pub fn exit_code(self, strict: bool) -> ExitCode {
        match self {
            RunStatus::Failed if strict => ExitCode::FAILURE,
            _ => ExitCode::SUCCESS,
        }
    }
}

/// Decode the image at `path` and recognize its text.
pub fn extract_text<R>(path: &Path, engine: &R, config: &OcrConfig) -> Result<String>
where
    R: Recognizer + ?Sized,
{
    let image = load_image(path)?;
    engine.recognize(&image, config)
}

/// Render extracted text for stdout, without the trailing newline.
pub fn render(text: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text.to_string()),
        OutputFormat::Json => {
            let report = parse_report(text.trim());
            Ok(serde_json::to_string_pretty(&report)?)
        },
    }
}

/// Run one extraction, writing the result to `out` or an error line to `err`.
///
/// Only failures to write to the sinks themselves are returned as `Err`.
pub fn run<R, O, E>(
    path: &Path,
    engine: &R,
    config: &OcrConfig,
    out: &mut O,
    err: &mut E,
) -> io::Result<RunStatus>
where
    R: Recognizer + ?Sized,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let rendered = extract_text(path, engine, config)
        .and_then(|text| render(&text, config.output_format));

    match rendered {
        Ok(output) => {
            log::debug!("Extracted {} bytes from {}", output.len(), path.display());
            writeln!(out, "{}", output)?;
            out.flush()?;
            Ok(RunStatus::Extracted)
        },
        Err(e) => {
            let stage = if e.is_decode_error() {
                "decoding"
            } else if e.is_recognition_error() {
                "recognition"
            } else {
                "rendering"
            };
            log::debug!("Extraction from {} failed during {}: {:?}", path.display(), stage, e);
            writeln!(err, "Error: {}", e)?;
            err.flush()?;
            Ok(RunStatus::Failed)
        },
    }
}
