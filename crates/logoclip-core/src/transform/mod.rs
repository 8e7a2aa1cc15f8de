//! Geometric operations on decoded images.
//!
//! Only cropping is needed: the pipeline cuts the thresholded image down to
//! the bounding box of its opaque pixels. Coordinates are whole pixels with
//! the origin at the top-left corner.

mod crop;

pub use crop::{crop_to_bounds, trim_transparent};
