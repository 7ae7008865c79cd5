//! UIコンポーネント

pub mod header;
pub mod image_uploader;
