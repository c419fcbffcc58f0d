//! Asset loading
//!
//! Only images are loaded from disk; meshes are generated in code.

pub mod image_loader;

pub use image_loader::ImageData;

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// No file at the requested path
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// File exists but could not be decoded
    #[error("Failed to decode asset: {0}")]
    LoadFailed(String),

    /// IO error while reading an asset
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
