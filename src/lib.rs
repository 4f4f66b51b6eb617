// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # OCR Oxide
//!
//! Extract text from an image with Tesseract: decode the file, recognize it as a
//! single uniform block of text, print the result.
//!
//! ## Core Features
//!
//! - **Image Decoding**: PNG, JPEG, TIFF, BMP, GIF, PNM, WebP, ICO and TGA via the
//!   `image` crate, with the format sniffed from the file's content
//! - **OCR**: Tesseract driven through its command line, any page segmentation
//!   mode (default 6, single block) and language
//! - **Report Reading**: structured JSON from scanned ultrasound reports
//! - **One Error Contract**: every failure surfaces as a single `Error: <message>`
//!   line, while [`Error`] keeps decoding and recognition failures apart
//!
//! ## Quick Start
//!
//! ```ignore
//! use ocr_oxide::{extract_text, OcrConfig, TesseractCli};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OcrConfig::default();
//! let engine = TesseractCli::from_config(&config);
//! let text = extract_text(Path::new("receipt.png"), &engine, &config)?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Image decoding
pub mod image_source;

// OCR engines
pub mod engine;

// Pipeline
pub mod extract;

// Structured output
pub mod report;

// Re-exports
pub use config::{OcrConfig, OutputFormat, PageSegMode};
pub use engine::{Recognizer, TesseractCli};
pub use error::{Error, Result};
pub use extract::{extract_text, run, RunStatus};
pub use image_source::load_image;
pub use report::{parse_report, Report};
