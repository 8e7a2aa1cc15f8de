//! Bounding box of the opaque region.

use serde::{Deserialize, Serialize};

use crate::decode::{DecodedImage, CHANNELS};

/// Bounding box with pixel coordinates (inclusive on all sides).
///
/// A value of this type always encloses at least one pixel. "No opaque
/// pixels" is expressed as `None` by [`find_opaque_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BoundingBox {
    /// Box covering a whole `width` x `height` canvas.
    ///
    /// Returns `None` for a zero-sized canvas.
    pub fn full(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            min_x: 0,
            min_y: 0,
            max_x: width - 1,
            max_y: height - 1,
        })
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }

    /// Grow the box so it also encloses (x, y).
    fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }
}

/// Calculate the tightest bounding box containing every pixel with alpha > 0.
///
/// Returns `None` if the image is fully transparent or has no pixels.
pub fn find_opaque_bounds(image: &DecodedImage) -> Option<BoundingBox> {
    if image.is_empty() {
        return None;
    }

    let row_len = image.width as usize * CHANNELS;
    let mut bbox: Option<BoundingBox> = None;

    for (y, row) in image.pixels.chunks_exact(row_len).enumerate() {
        for (x, px) in row.chunks_exact(CHANNELS).enumerate() {
            if px[3] == 0 {
                continue;
            }
            let (x, y) = (x as u32, y as u32);
            match bbox.as_mut() {
                Some(b) => b.include(x, y),
                None => {
                    bbox = Some(BoundingBox {
                        min_x: x,
                        min_y: y,
                        max_x: x,
                        max_y: y,
                    })
                }
            }
        }
    }

    bbox
}


// ============================================================================
// Property-Based Tests
// ============================================================================
