//! WASM-compatible wrapper types for image data.

use logoclip_core::decode::DecodedImage;
use wasm_bindgen::prelude::*;

/// An RGBA image held in WASM memory.
///
/// Pixels are 4 bytes each (straight alpha, row-major). Calling `pixels()`
/// copies them out to a JavaScript `Uint8Array`.
#[wasm_bindgen]
pub struct JsRgbaImage {
    inner: DecodedImage,
}

#[wasm_bindgen]
impl JsRgbaImage {
    /// Create a new JsRgbaImage from dimensions and RGBA pixel data.
    ///
    /// # Errors
    /// Returns an error if `pixels.length != width * height * 4`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRgbaImage, JsValue> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(JsValue::from_str(&format!(
                "Invalid pixel data: expected {} bytes, got {}",
                expected,
                pixels.len()
            )));
        }
        Ok(Self::from_decoded(DecodedImage::new(width, height, pixels)))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// Returns RGBA pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }
}

impl JsRgbaImage {
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self { inner: img }
    }

    pub(crate) fn as_decoded(&self) -> &DecodedImage {
        &self.inner
    }

    pub(crate) fn as_decoded_mut(&mut self) -> &mut DecodedImage {
        &mut self.inner
    }
}
