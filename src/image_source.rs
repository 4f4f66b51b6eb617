//! Image loading.
//!
//! The format is sniffed from the file's magic bytes first and only falls back to
//! the extension, so a PNG saved as `scan.jpg` still decodes while a text file
//! renamed to `scan.png` is rejected by the PNG decoder.

use crate::error::{Error, Result};
use image::io::Reader as ImageReader;
use image::DynamicImage;
use std::path::Path;

/// Decode the image stored at `path`.
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?;

    log::debug!("Decoding {} as {:?}", path.display(), reader.format());

    let image = reader.decode().map_err(|source| Error::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "Decoded {}: {}x{} {:?}",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    Ok(image)
}
