//! Extract text from an image with Tesseract.
//!
//! Usage:
//!   extract_text <IMAGE_PATH>
//!   extract_text --psm 7 --lang eng+deu scan.png
//!   extract_text --format json report.jpg
//!
//! Text goes to stdout; failures go to stderr as `Error: <message>`. The exit
//! status is 0 either way unless `--strict` is given.

use clap::{Parser, ValueEnum};
use ocr_oxide::{run, OcrConfig, OutputFormat, PageSegMode, TesseractCli};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "extract_text")]
#[command(about = "Extract text from an image with Tesseract")]
#[command(version)]
struct Cli {
    /// Image file to read
    image_path: PathBuf,

    /// Tesseract page segmentation mode (6 = single uniform block of text)
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(0..=13))]
    psm: u8,

    /// Tesseract language code(s)
    #[arg(short, long, default_value = "eng")]
    lang: String,

    /// Tesseract executable
    #[arg(long, default_value = "tesseract")]
    tesseract: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Exit with status 1 when extraction fails
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Recognized text as-is
    Text,
    /// Parsed report as JSON
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    // psm range is enforced by clap
    let page_seg_mode = PageSegMode::try_from(cli.psm).unwrap_or_default();

    let config = OcrConfig::new()
        .with_page_seg_mode(page_seg_mode)
        .with_language(cli.lang)
        .with_tesseract_path(cli.tesseract)
        .with_output_format(cli.format.into())
        .with_strict_exit(cli.strict);
    let engine = TesseractCli::from_config(&config);

    let stdout = io::stdout();
    let stderr = io::stderr();
    match run(&cli.image_path, &engine, &config, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(status) => status.exit_code(config.strict_exit),
        Err(e) => {
            log::debug!("Failed to write output: {}", e);
            ExitCode::FAILURE
        },
    }
}
