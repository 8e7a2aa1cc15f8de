//! Pixel-exact cropping to a bounding box.
//!
//! # Coordinate System
//!
//! - (0, 0) = top-left pixel
//! - Box edges are inclusive, so a box with `min_x == max_x` is one pixel wide
//! - Output width = `max_x - min_x + 1`, height = `max_y - min_y + 1`

use crate::bounds::{find_opaque_bounds, BoundingBox};
use crate::decode::{DecodedImage, CHANNELS};

/// Copy the region delimited by `bbox` into a new image.
///
/// The result owns its own buffer and shares nothing with `image`. Pixel
/// values, alpha included, are copied byte for byte.
///
/// # Behavior
///
/// - A box extending past the image edges is clamped to the image
/// - A box covering the whole image returns a copy of the original
/// - An empty source image yields an empty (0x0) result
pub fn crop_to_bounds(image: &DecodedImage, bbox: &BoundingBox) -> DecodedImage {
    if image.is_empty() {
        return DecodedImage::new(0, 0, Vec::new());
    }

    // Fast path: full crop returns a clone
    if bbox.min_x == 0
        && bbox.min_y == 0
        && bbox.max_x.saturating_add(1) >= image.width
        && bbox.max_y.saturating_add(1) >= image.height
    {
        return image.clone();
    }

    // Clamp to image bounds
    let left = bbox.min_x.min(image.width - 1);
    let top = bbox.min_y.min(image.height - 1);
    let right = bbox.max_x.min(image.width - 1).max(left);
    let bottom = bbox.max_y.min(image.height - 1).max(top);

    let out_width = right - left + 1;
    let out_height = bottom - top + 1;
    let row_bytes = out_width as usize * CHANNELS;

    let mut output = Vec::with_capacity(row_bytes * out_height as usize);

    // Copy pixel data row by row
    for y in top..=bottom {
        let start = image.offset(left, y);
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    DecodedImage::new(out_width, out_height, output)
}

/// Crop an image to its opaque content.
///
/// Returns the cropped image together with the box it was cut from, or
/// `None` if no pixel has a nonzero alpha.
pub fn trim_transparent(image: &DecodedImage) -> Option<(DecodedImage, BoundingBox)> {
    let bbox = find_opaque_bounds(image)?;
    Some((crop_to_bounds(image, &bbox), bbox))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
