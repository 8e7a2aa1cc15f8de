//! Format detection and decoding to RGBA.

use std::io::Cursor;

use image::{ImageError, ImageReader};

use super::{DecodeError, DecodedImage};

/// Decode an image from bytes into RGBA8.
///
/// The format is detected from the file's magic bytes rather than an
/// extension, so misnamed files still decode. Whatever the source pixel
/// layout, the result has 4 channels; sources without alpha become opaque.
///
/// # Errors
///
/// - `DecodeError::Empty` for a zero-length input
/// - `DecodeError::InvalidFormat` if no enabled codec recognizes the bytes
/// - `DecodeError::CorruptedFile` if the codec fails part-way through
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    })?;

    Ok(DecodedImage::from_rgba_image(img.into_rgba8()))
}
