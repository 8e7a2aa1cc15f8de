//! logoclip core - transparent logo extraction
//!
//! Turns a logo on a near-black background into a tightly cropped PNG with a
//! transparent background: decode, clear near-black pixels, find the opaque
//! bounding box, crop, encode.
//!
//! # Example
//!
//! ```ignore
//! use logoclip_core::{transform, ExtractOptions};
//! use std::path::Path;
//!
//! let result = transform(
//!     Path::new("public/logo.png"),
//!     Path::new("public/logo-transparent.png"),
//!     &ExtractOptions::default(),
//! )?;
//! println!("Cropped to {}x{}", result.image.width, result.image.height);
//! ```

pub mod bounds;
pub mod decode;
pub mod encode;
pub mod error;
pub mod pipeline;
pub mod threshold;
pub mod transform;

pub use bounds::{find_opaque_bounds, BoundingBox};
pub use decode::{decode_image, DecodeError, DecodedImage};
pub use encode::{encode_png, encode_png_image, EncodeError};
pub use error::ExtractError;
pub use pipeline::{
    default_output_path, extract, extract_bytes, transform, EmptyPolicy, ExtractOptions,
    Extraction,
};
pub use threshold::{apply_threshold, Threshold};
pub use transform::{crop_to_bounds, trim_transparent};
