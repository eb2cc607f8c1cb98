/// Unified error type for the crop pipeline.
///
/// Every failure a request can hit is one of these variants, and each variant
/// knows which HTTP status it maps to — the transport layer matches on
/// `status_code()` instead of inspecting message strings. `Display` output is
/// what ends up in the JSON `detail` field of an error response.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Client-supplied input was missing or malformed (empty upload, missing
    /// form field, bad crop JSON, bad data URI).
    #[error("{0}")]
    Validation(String),

    /// The payload was not decodable as any supported raster format.
    #[error("Invalid image data")]
    Decode(#[source] image::ImageError),

    /// The encoder could not produce JPEG output. Practically this only
    /// happens when a crop rectangle lands entirely outside the image and
    /// the resulting grid is empty.
    #[error("Error encoding cropped image: {0}")]
    Encode(String),

    /// Anything unexpected that is not the client's fault.
    #[error("{0}")]
    Server(String),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// HTTP status the transport should respond with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) | Error::Decode(_) => 400,
            Error::Encode(_) | Error::Server(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
