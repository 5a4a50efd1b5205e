//! Image decoding for surfaces
//!
//! Decodes PNG and other formats supported by the `image` crate into RGBA8.

use std::path::Path;

use crate::geometry::Size;

/// Decoded RGBA8 pixels
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageData {
    /// Decode an image file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, image::ImageError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        let rgba_img = image::open(path_ref)?.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::debug!("Loaded image {}x{} from {:?}", width, height, path_ref);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
        })
    }

    /// Create a solid color image
    #[cfg(test)]
    pub(crate) fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let data = color.repeat(pixel_count(width, height));
        Self { data, width, height }
    }

    /// Dimensions as a [`Size`]; saturates at `i32::MAX`
    pub fn size(&self) -> Size {
        Size::new(
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }

    /// Pixels packed one per `u32` with R in the lowest byte
    pub fn packed_pixels(&self) -> Vec<u32> {
        self.data
            .chunks_exact(4)
            .map(|px| u32::from_le_bytes([px[0], px[1], px[2], px[3]]))
            .collect()
    }
}

/// Number of pixels, computed without `u32` overflow
#[cfg(test)]
const fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}
