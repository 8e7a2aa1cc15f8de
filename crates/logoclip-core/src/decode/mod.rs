//! Image decoding for logoclip.
//!
//! Any format the enabled `image` codecs understand (PNG, JPEG) is decoded
//! and widened to 8-bit RGBA. Sources without an alpha channel come out
//! fully opaque.

mod load;
mod types;

pub use load::decode_image;
pub use types::{DecodeError, DecodedImage, CHANNELS};
