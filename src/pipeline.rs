/// The two operations the server exposes, transport-free.
///
/// `upload` normalizes an uploaded image to JPEG and hands back base64 text
/// for embedding in a page; `crop_download` takes that base64 payload plus a
/// crop rectangle and produces the downloadable JPEG bytes. Both return
/// [`Error`](crate::error::Error) values that already know their HTTP status,
/// so handlers stay thin.
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::imageops;
use image::RgbImage;

use crate::codec;
use crate::error::{Error, Result};
use crate::rect::CropRect;

/// Validates and normalizes an uploaded image.
///
/// Decodes the raw bytes (any supported format), re-encodes as JPEG, and
/// returns the JPEG base64-encoded for use in a `data:image/jpeg;base64,…`
/// URI. Empty input and undecodable bytes are validation failures.
pub fn upload(raw: &[u8]) -> Result<String> {
    if raw.is_empty() {
        return Err(Error::validation("No file uploaded"));
    }
    let img = codec::decode(raw)?;
    let jpeg = codec::encode_jpeg(&img)?;
    Ok(STANDARD.encode(jpeg))
}

/// Crops a base64-encoded image and returns the result as JPEG bytes.
///
/// `image_field` is the data URI produced by [`upload`] (the page posts it
/// back verbatim); `crop_json` is the rectangle as a JSON object. The slice
/// uses half-open ranges clamped to the image bounds: a rectangle whose far
/// edge overhangs the image is silently trimmed, and one that lies entirely
/// outside yields an empty grid that then fails at the encode step with a
/// server error.
pub fn crop_download(image_field: &str, crop_json: &str) -> Result<Vec<u8>> {
    if image_field.is_empty() || crop_json.is_empty() {
        return Err(Error::validation("Missing image or crop data"));
    }

    let payload = strip_data_uri(image_field)?;
    let raw = STANDARD
        .decode(payload.trim())
        .map_err(|_| Error::validation("Invalid image data"))?;
    let img = codec::decode(&raw)?;

    let rect = CropRect::from_json(crop_json)?;
    let cropped = crop(&img, &rect);

    codec::encode_jpeg(&cropped)
}

/// Slices rows `[y, y + height)` and columns `[x, x + width)` out of `img`,
/// clamped to the image bounds. Never fails: a fully out-of-bounds rectangle
/// produces a 0×0 grid.
pub fn crop(img: &RgbImage, rect: &CropRect) -> RgbImage {
    let x = rect.x.min(img.width());
    let y = rect.y.min(img.height());
    let width = rect.width.min(img.width() - x);
    let height = rect.height.min(img.height() - y);
    imageops::crop_imm(img, x, y, width, height).to_image()
}

/// Strips the `data:<mime>;base64,` header from a data URI, returning the
/// payload after the first comma. A payload with no comma is malformed input
/// from the crop page and is rejected as a validation failure rather than
/// being passed to the base64 decoder.
fn strip_data_uri(image_field: &str) -> Result<&str> {
    match image_field.split_once(',') {
        Some((_, payload)) => Ok(payload),
        None => Err(Error::validation("Missing or malformed data URI prefix")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        })
    }

    #[test]
    fn crop_interior_region() {
        let img = gradient(100, 100);
        let out = crop(&img, &CropRect { x: 10, y: 10, width: 20, height: 20 });
        assert_eq!((out.width(), out.height()), (20, 20));
        // Top-left of the crop is pixel (10, 10) of the source.
        assert_eq!(out.get_pixel(0, 0), img.get_pixel(10, 10));
    }

    #[test]
    fn crop_clamps_overhanging_edge() {
        let img = gradient(100, 100);
        let out = crop(&img, &CropRect { x: 90, y: 90, width: 50, height: 50 });
        assert_eq!((out.width(), out.height()), (10, 10));
    }

    #[test]
    fn crop_fully_outside_yields_empty_grid() {
        let img = gradient(100, 100);
        let out = crop(&img, &CropRect { x: 200, y: 200, width: 10, height: 10 });
        assert_eq!((out.width(), out.height()), (0, 0));
    }

    #[test]
    fn strip_data_uri_requires_comma() {
        assert!(strip_data_uri("data:image/jpeg;base64").is_err());
        assert_eq!(strip_data_uri("data:image/jpeg;base64,AAAA").unwrap(), "AAAA");
    }
}
