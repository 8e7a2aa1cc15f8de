//! One-call logo extraction bindings.
//!
//! # Example
//!
//! ```typescript
//! import { extract_logo } from '@logoclip/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const png = extract_logo(bytes, { threshold: 45, onEmpty: 'fail' });
//! const blob = new Blob([png], { type: 'image/png' });
//! ```

use logoclip_core::pipeline::{extract_bytes, ExtractOptions};
use wasm_bindgen::prelude::*;

/// Make the near-black background of an image transparent and crop it tight.
///
/// # Arguments
///
/// * `bytes` - PNG or JPEG file bytes as a `Uint8Array`
/// * `options` - `{ threshold?: number, onEmpty?: "fail" | "fullCanvas" }`,
///   or `undefined`/`null` for the defaults (threshold 45, fail when empty)
///
/// # Returns
///
/// The cropped image as PNG bytes.
///
/// # Errors
///
/// Returns an error if the options object is malformed, the bytes are not a
/// decodable image, or no pixel survives thresholding under the `fail` policy.
#[wasm_bindgen]
pub fn extract_logo(bytes: &[u8], options: JsValue) -> Result<Vec<u8>, JsValue> {
    let options = options_from_js(options)?;
    run(bytes, &options)
}

/// Same as [`extract_logo`] with only a threshold and default empty policy.
#[wasm_bindgen]
pub fn extract_logo_with_threshold(bytes: &[u8], threshold: u8) -> Result<Vec<u8>, JsValue> {
    run(bytes, &ExtractOptions::new(threshold))
}

fn options_from_js(options: JsValue) -> Result<ExtractOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(ExtractOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid extract options: {}", e)))
}

fn run(bytes: &[u8], options: &ExtractOptions) -> Result<Vec<u8>, JsValue> {
    let (png, extraction) =
        extract_bytes(bytes, options).map_err(|e| JsValue::from_str(&e.to_string()))?;

    if extraction.fell_back {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "logoclip: nothing survived threshold {}, kept the full {}x{} canvas",
            options.threshold.value(),
            extraction.source_width,
            extraction.source_height
        )));
    }
    Ok(png)
}
