use std::io::Cursor;

use image::{codecs::jpeg::JpegEncoder, ColorType, ImageFormat};

use crate::error::ConvertError;

#[derive(Debug)]
pub struct ConvertedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub source_format: ImageFormat,
}

/// Decodes any supported format, drops alpha and re-encodes as baseline JPEG.
pub fn to_jpeg(source: &[u8], quality: u8) -> Result<ConvertedImage, ConvertError> {
    let reader = image::io::Reader::new(Cursor::new(source)).with_guessed_format().map_err(|e| ConvertError::Codec(e.to_string()))?;
    let source_format = reader.format().ok_or_else(|| ConvertError::Codec("cannot identify image file".to_string()))?;
    let rgb = reader.decode()?.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100)).encode(rgb.as_raw(), width, height, ColorType::Rgb8)?;

    Ok(ConvertedImage {
        bytes,
        width,
        height,
        source_format,
    })
}
