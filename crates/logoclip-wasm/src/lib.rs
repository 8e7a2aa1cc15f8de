//! logoclip WASM - WebAssembly bindings for logoclip
//!
//! Exposes the logoclip-core transform to JavaScript so the site's build
//! scripts or a browser page can produce the transparent logo from bytes.
//!
//! # Module Structure
//!
//! - `extract` - one-call extraction (bytes in, PNG bytes out)
//! - `image` - decode / threshold / trim / encode as separate steps
//! - `types` - WASM-compatible wrapper type for RGBA image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { extract_logo } from '@logoclip/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const png = extract_logo(bytes, { threshold: 45 });
//! ```

use wasm_bindgen::prelude::*;

mod extract;
mod image;
mod types;

// Re-export public types
pub use extract::{extract_logo, extract_logo_with_threshold};
pub use image::{apply_threshold, decode_image, encode_png, trim_transparent};
pub use types::JsRgbaImage;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
