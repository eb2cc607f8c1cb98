pub mod codec;
pub mod error;
pub mod pipeline;
pub mod rect;

// Convenience re-exports
pub use codec::{decode, encode_jpeg};
pub use error::Error;
pub use pipeline::{crop_download, upload};
pub use rect::CropRect;
