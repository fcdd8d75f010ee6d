//! Stored photos → PDF image payloads.

use crate::errors::{AppError, AppResult};
use crate::models::DataUri;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use std::io::Write;

/// RGB pixels, zlib-compressed for a FlateDecode image XObject.
pub struct EmbeddedImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl EmbeddedImage {
    /// Decode a stored photo, shrinking it so neither side exceeds `max_side`.
    pub fn from_data_uri(uri: &DataUri, max_side: u32) -> AppResult<Self> {
        let bytes = uri.decode()?;
        let mut img = image::load_from_memory(&bytes)
            .map_err(|e| AppError::Image(format!("cannot decode photo: {e}")))?;

        let max_side = max_side.max(1);
        if img.width() > max_side || img.height() > max_side {
            img = img.thumbnail(max_side, max_side);
        }

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(rgb.as_raw())?;
        let data = encoder.finish()?;

        Ok(Self {
            width,
            height,
            data,
        })
    }
}
