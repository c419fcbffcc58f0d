//! Image loading utilities for texture data
//!
//! Decodes PNG and JPEG files to RGBA8 for upload through `Texture2D`.

use std::path::Path;

use crate::assets::AssetError;

/// Decoded image data ready for GPU upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Raw RGBA pixel data, rows top to bottom
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(AssetError::NotFound(path_ref.display().to_string()));
        }

        log::debug!("Loading image from: {:?}", path_ref);

        let bytes = std::fs::read(path_ref)?;
        let img = image::load_from_memory(&bytes)
            .map_err(|e| AssetError::LoadFailed(format!("{}: {}", path_ref.display(), e)))?;
        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::info!("Loaded image {}x{} from {:?}", width, height, path_ref);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
        })
    }

    /// Decode an image held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("in-memory image: {}", e)))?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::debug!("Loaded image {}x{} from memory", width, height);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
        })
    }

    /// Create a solid color image
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);

        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }

        Self { data, width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_color() {
        let image = ImageData::solid_color(2, 3, [10, 20, 30, 255]);

        assert_eq!(image.width, 2);
        assert_eq!(image.height, 3);
        assert_eq!(image.data.len(), 2 * 3 * 4);
        assert!(image.data.chunks(4).all(|texel| texel == [10, 20, 30, 255]));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = ImageData::from_file("no/such/wall.png");
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let result = ImageData::from_bytes(b"definitely not a png");
        assert!(matches!(result, Err(AssetError::LoadFailed(_))));
    }

    #[test]
    fn test_png_round_trip_through_image_crate() {
        let mut encoded = Vec::new();
        let source = image::RgbaImage::from_pixel(4, 2, image::Rgba([200, 100, 50, 255]));
        source
            .write_to(&mut std::io::Cursor::new(&mut encoded), image::ImageFormat::Png)
            .unwrap();

        let decoded = ImageData::from_bytes(&encoded).unwrap();
        assert_eq!((decoded.width, decoded.height), (4, 2));
        assert_eq!(&decoded.data[..4], &[200, 100, 50, 255]);
    }

    #[test]
    fn test_shipped_wall_texture_decodes() {
        let path = Path::new(env!("TOWN_RESOURCE_DIR")).join("textures/wall_color.png");
        let image = ImageData::from_file(path).unwrap();

        assert_eq!((image.width, image.height), (128, 128));
        assert_eq!(image.data.len(), 128 * 128 * 4);
    }
}
