/// Image decode/encode boundary.
///
/// Decoding sniffs the format from the byte content (PNG/JPEG/BMP/GIF — the
/// formats browsers actually upload) and always normalizes to an 8-bit RGB
/// grid, so the channel order is identical on the decode and encode paths and
/// the JPEG encoder never sees an alpha channel. Encoding always produces
/// JPEG at the encoder's default quality.
use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::error::{Error, Result};

/// Decodes a compressed image byte stream into an RGB pixel grid.
///
/// Fails with [`Error::Decode`] when the bytes are not a recognized image
/// encoding (corrupt, truncated, or non-image data).
pub fn decode(bytes: &[u8]) -> Result<RgbImage> {
    let img = image::load_from_memory(bytes).map_err(Error::Decode)?;
    Ok(img.to_rgb8())
}

/// Serializes an RGB pixel grid to JPEG bytes.
///
/// A zero-area grid is rejected up front: the JPEG format cannot represent
/// it, and an empty grid is exactly what a fully out-of-bounds crop produces.
pub fn encode_jpeg(img: &RgbImage) -> Result<Vec<u8>> {
    if img.width() == 0 || img.height() == 0 {
        return Err(Error::Encode("image has no pixels".to_owned()));
    }

    let mut cursor = Cursor::new(Vec::new());
    JpegEncoder::new(&mut cursor)
        .encode_image(img)
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(cursor.into_inner())
}
