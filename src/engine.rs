//! OCR engines.
//!
//! [`Recognizer`] is the seam between the extraction pipeline and the engine doing
//! the actual character recognition. [`TesseractCli`] drives the `tesseract`
//! executable as a child process.

use crate::config::OcrConfig;
use crate::error::{Error, Result};
use image::{ColorType, DynamicImage, ImageOutputFormat};
use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Something that turns a decoded image into text.
pub trait Recognizer {
    /// Recognize all text in `image`, honoring the page segmentation mode and
    /// language in `config`.
    fn recognize(&self, image: &DynamicImage, config: &OcrConfig) -> Result<String>;
}

/// Tesseract, invoked through its command-line interface.
///
/// The image is written to a temporary PNG and passed as
/// `tesseract <png> stdout --psm <mode> -l <lang>`; the text is read back from the
/// child's stdout.
#[derive(Debug, Clone)]
pub struct TesseractCli {
    program: PathBuf,
    temp_dir: Option<PathBuf>,
}

impl TesseractCli {
    /// Use the given executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            temp_dir: None,
        }
    }

    /// Use the executable named in `config`.
    pub fn from_config(config: &OcrConfig) -> Self {
        Self::new(&config.tesseract_path)
    }

    /// Write the temporary input image into `dir` instead of the system temp dir.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    fn command(&self, input: &Path, config: &OcrConfig) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(input)
            .arg("stdout")
            .arg("--psm")
            .arg(config.page_seg_mode.to_string())
            .arg("-l")
            .arg(&config.language);
        cmd
    }
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self::new("tesseract")
    }
}

impl Recognizer for TesseractCli {
    fn recognize(&self, image: &DynamicImage, config: &OcrConfig) -> Result<String> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("ocr_oxide_").suffix(".png");
        let input = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        };
        let mut input = input
            .map_err(|e| Error::Recognition(format!("cannot create temporary image: {}", e)))?;

        png_compatible(image)
            .write_to(input.as_file_mut(), ImageOutputFormat::Png)
            .map_err(Error::ImageEncode)?;
        input
            .as_file_mut()
            .flush()
            .map_err(|e| Error::Recognition(format!("cannot write temporary image: {}", e)))?;

        let mut cmd = self.command(input.path(), config);
        log::debug!("Running {:?}", cmd);

        let output = cmd.output().map_err(|source| Error::EngineUnavailable {
            program: self.program.clone(),
            source,
        })?;

        let text = read_output(output)?;

        if let Err(e) = input.close() {
            log::warn!("Failed to remove temporary OCR input: {}", e);
        }

        Ok(text)
    }
}

/// PNG has no float channels, so 32-bit float images are narrowed to 8 bits.
fn png_compatible(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match image.color() {
        ColorType::Rgb32F => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
        ColorType::Rgba32F => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
        _ => Cow::Borrowed(image),
    }
}

fn read_output(output: Output) -> Result<String> {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let diagnostics = stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if !output.status.success() {
        let reason = if diagnostics.is_empty() {
            format!("tesseract exited with {}", output.status)
        } else {
            diagnostics
        };
        return Err(Error::Recognition(reason));
    }

    if !diagnostics.is_empty() {
        log::debug!("tesseract: {}", diagnostics);
    }

    String::from_utf8(output.stdout)
        .map_err(|e| Error::Recognition(format!("engine produced invalid UTF-8: {}", e)))
}
