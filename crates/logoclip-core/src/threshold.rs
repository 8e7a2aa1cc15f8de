//! Near-black background removal.
//!
//! A pixel is background when every color channel is at or below the
//! threshold. Background pixels get alpha 0 and keep their RGB values;
//! everything else is left untouched, including its alpha. Each pixel is
//! classified on its own, so the pass gives the same result in any scan order.

use serde::{Deserialize, Serialize};

use crate::decode::{DecodedImage, CHANNELS};

/// Brightness cutoff for the background test (0-255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Threshold(pub u8);

impl Threshold {
    /// Cutoff used for flat black logo backgrounds.
    pub const DEFAULT: Threshold = Threshold(45);

    pub fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns true if the pixel counts as background.
    ///
    /// Only R, G and B are consulted; the existing alpha plays no part.
    #[inline]
    pub fn is_background(self, rgba: &[u8]) -> bool {
        rgba[0] <= self.0 && rgba[1] <= self.0 && rgba[2] <= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for Threshold {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// Make every near-black pixel fully transparent, in place.
///
/// Returns the number of pixels classified as background.
pub fn apply_threshold(image: &mut DecodedImage, threshold: Threshold) -> u64 {
    let mut cleared = 0u64;
    for px in image.pixels.chunks_exact_mut(CHANNELS) {
        if threshold.is_background(px) {
            px[3] = 0;
            cleared += 1;
        }
    }
    cleared
}


// ============================================================================
// Property-Based Tests
// ============================================================================
