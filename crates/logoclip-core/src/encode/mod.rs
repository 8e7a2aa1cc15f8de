//! Image encoding for logoclip.
//!
//! Output is always PNG with an alpha channel.

mod png;

pub use png::{encode_png, encode_png_image, EncodeError};
