//! Configuration for OCR extraction.

use crate::error::{Error, Result};
use std::fmt;
use std::path::PathBuf;

/// Tesseract page segmentation modes (`--psm`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSegMode {
    /// 0: orientation and script detection only
    OsdOnly,
    /// 1: automatic segmentation with OSD
    AutoOsd,
    /// 2: automatic segmentation, no OSD or OCR
    AutoOnly,
    /// 3: fully automatic segmentation, no OSD
    Auto,
    /// 4: a single column of text of variable sizes
    SingleColumn,
    /// 5: a single uniform block of vertically aligned text
    SingleBlockVertText,
    /// 6: a single uniform block of text
    #[default]
    SingleBlock,
    /// 7: a single text line
    SingleLine,
    /// 8: a single word
    SingleWord,
    /// 9: a single word in a circle
    CircleWord,
    /// 10: a single character
    SingleChar,
    /// 11: sparse text, as much as possible in no particular order
    SparseText,
    /// 12: sparse text with OSD
    SparseTextOsd,
    /// 13: a single line, bypassing Tesseract-specific hacks
    RawLine,
}

impl PageSegMode {
    /// Numeric value passed to `--psm`.
    pub fn value(self) -> u8 {
        match self {
            PageSegMode::OsdOnly => 0,
            PageSegMode::AutoOsd => 1,
            PageSegMode::AutoOnly => 2,
            PageSegMode::Auto => 3,
            PageSegMode::SingleColumn => 4,
            PageSegMode::SingleBlockVertText => 5,
            PageSegMode::SingleBlock => 6,
            PageSegMode::SingleLine => 7,
            PageSegMode::SingleWord => 8,
            PageSegMode::CircleWord => 9,
            PageSegMode::SingleChar => 10,
            PageSegMode::SparseText => 11,
            PageSegMode::SparseTextOsd => 12,
            PageSegMode::RawLine => 13,
        }
    }
}

impl TryFrom<u8> for PageSegMode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Ok(match value {
            0 => PageSegMode::OsdOnly,
            1 => PageSegMode::AutoOsd,
            2 => PageSegMode::AutoOnly,
            3 => PageSegMode::Auto,
            4 => PageSegMode::SingleColumn,
            5 => PageSegMode::SingleBlockVertText,
            6 => PageSegMode::SingleBlock,
            7 => PageSegMode::SingleLine,
            8 => PageSegMode::SingleWord,
            9 => PageSegMode::CircleWord,
            10 => PageSegMode::SingleChar,
            11 => PageSegMode::SparseText,
            12 => PageSegMode::SparseTextOsd,
            13 => PageSegMode::RawLine,
            other => return Err(Error::InvalidPageSegMode(other)),
        })
    }
}

impl fmt::Display for PageSegMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// How extracted text is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Recognized text, exactly as the engine returned it
    #[default]
    Text,
    /// Structured report parsed from the recognized text, as pretty JSON
    Json,
}

/// OCR extraction configuration.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Page segmentation mode requested from the engine.
    pub page_seg_mode: PageSegMode,

    /// Tesseract language code(s), e.g. `eng` or `eng+deu`.
    pub language: String,

    /// Tesseract executable; a bare name is looked up on `PATH`.
    pub tesseract_path: PathBuf,

    /// Output rendering.
    pub output_format: OutputFormat,

    /// Exit with a non-zero status when extraction fails.
    pub strict_exit: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            page_seg_mode: PageSegMode::SingleBlock,
            language: "eng".to_string(),
            tesseract_path: PathBuf::from("tesseract"),
            output_format: OutputFormat::Text,
            strict_exit: false,
        }
    }

    /// Set the page segmentation mode.
    pub fn with_page_seg_mode(mut self, mode: PageSegMode) -> Self {
        self.page_seg_mode = mode;
        self
    }

    /// Set the recognition language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the Tesseract executable.
    pub fn with_tesseract_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tesseract_path = path.into();
        self
    }

    /// Set the output format.
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Exit non-zero on failure.
    pub fn with_strict_exit(mut self, enable: bool) -> Self {
        self.strict_exit = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OcrConfig::default();
        assert_eq!(config.page_seg_mode, PageSegMode::SingleBlock);
        assert_eq!(config.page_seg_mode.value(), 6);
        assert_eq!(config.language, "eng");
        assert_eq!(config.tesseract_path, PathBuf::from("tesseract"));
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(!config.strict_exit);
    }

    #[test]
    fn test_builder() {
        let config = OcrConfig::new()
            .with_page_seg_mode(PageSegMode::SingleLine)
            .with_language("deu")
            .with_tesseract_path("/opt/tesseract/bin/tesseract")
            .with_output_format(OutputFormat::Json)
            .with_strict_exit(true);
        assert_eq!(config.page_seg_mode.value(), 7);
        assert_eq!(config.language, "deu");
        assert_eq!(config.tesseract_path, PathBuf::from("/opt/tesseract/bin/tesseract"));
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.strict_exit);
    }

    #[test]
    fn test_psm_values_match_numbers() {
        for n in 0..=13u8 {
            let mode = PageSegMode::try_from(n).unwrap();
            assert_eq!(mode.value(), n);
            assert_eq!(mode.to_string(), n.to_string());
        }
    }

    #[test]
    fn test_psm_out_of_range() {
        assert!(matches!(PageSegMode::try_from(14), Err(Error::InvalidPageSegMode(14))));
        assert!(PageSegMode::try_from(255).is_err());
    }
}
