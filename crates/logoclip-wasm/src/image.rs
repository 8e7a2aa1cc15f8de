//! Step-by-step bindings for callers that want to inspect intermediate
//! results (for example, previewing the thresholded image before cropping).
//!
//! # Example
//!
//! ```typescript
//! const image = decode_image(bytes);
//! const cleared = apply_threshold(image, 45);
//! const trimmed = trim_transparent(image);
//! const png = encode_png(trimmed);
//! ```

use crate::types::JsRgbaImage;
use logoclip_core::threshold::{apply_threshold as core_threshold, Threshold};
use logoclip_core::{decode, encode, transform};
use wasm_bindgen::prelude::*;

/// Decode PNG or JPEG bytes to an RGBA image.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRgbaImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsRgbaImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Make every near-black pixel transparent, in place.
///
/// Returns the number of pixels cleared (saturating at `u32::MAX`).
#[wasm_bindgen]
pub fn apply_threshold(image: &mut JsRgbaImage, threshold: u8) -> u32 {
    let cleared = core_threshold(image.as_decoded_mut(), Threshold(threshold));
    u32::try_from(cleared).unwrap_or(u32::MAX)
}

/// Crop an image to the bounding box of its non-transparent pixels.
///
/// # Errors
///
/// Returns an error if the image is fully transparent.
#[wasm_bindgen]
pub fn trim_transparent(image: &JsRgbaImage) -> Result<JsRgbaImage, JsValue> {
    transform::trim_transparent(image.as_decoded())
        .map(|(cropped, _)| JsRgbaImage::from_decoded(cropped))
        .ok_or_else(|| JsValue::from_str("Image is fully transparent; nothing to crop"))
}

/// Encode an RGBA image as PNG bytes.
#[wasm_bindgen]
pub fn encode_png(image: &JsRgbaImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_png_image(image.as_decoded()).map_err(|e| JsValue::from_str(&e.to_string()))
}
