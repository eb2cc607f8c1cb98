use serde::Deserialize;

use crate::error::{Error, Result};

/// A crop rectangle, origin at the image's top-left corner.
///
/// `x`/`y` are the top-left corner of the region; the selected rows are
/// `[y, y + height)` and columns `[x, x + width)` — half-open on the far
/// edge. Values are already validated to the rectangle domain (`x`/`y` ≥ 0,
/// `width`/`height` > 0) by the time a `CropRect` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Wire shape of the `cropData` form field. Fields arrive as JSON numbers;
/// browser crop widgets routinely send fractional pixel values, so these are
/// read as floats and truncated toward zero afterwards.
#[derive(Debug, Deserialize)]
struct RawRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl CropRect {
    /// Parses a JSON object `{"x": …, "y": …, "width": …, "height": …}`.
    ///
    /// Malformed JSON, missing fields, and non-numeric fields are all
    /// client-caused, so every failure here is [`Error::Validation`]. A
    /// rectangle with a negative origin or a non-positive extent is rejected
    /// for the same reason.
    pub fn from_json(json: &str) -> Result<CropRect> {
        let raw: RawRect = serde_json::from_str(json)
            .map_err(|e| Error::validation(format!("Invalid crop data: {}", e)))?;

        if !raw.x.is_finite() || !raw.y.is_finite() || !raw.width.is_finite() || !raw.height.is_finite() {
            return Err(Error::validation("Invalid crop data: non-finite field"));
        }

        let x = raw.x.trunc();
        let y = raw.y.trunc();
        let width = raw.width.trunc();
        let height = raw.height.trunc();

        if x < 0.0 || y < 0.0 {
            return Err(Error::validation("Invalid crop data: x and y must be non-negative"));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(Error::validation("Invalid crop data: width and height must be positive"));
        }

        Ok(CropRect {
            x: x as u32,
            y: y as u32,
            width: width as u32,
            height: height as u32,
        })
    }
}
