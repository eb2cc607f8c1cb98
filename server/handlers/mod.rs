pub mod crop;
pub mod index;
pub mod upload;
