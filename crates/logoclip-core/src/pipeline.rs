//! The full extraction run: decode, threshold, bound, crop, encode, write.
//!
//! [`extract`] works purely in memory on a decoded image, [`extract_bytes`]
//! adds decoding and PNG encoding, and [`transform`] wraps it all with file
//! I/O. The output file is written through a temporary sibling and renamed
//! into place, so a failed run never leaves a partial or empty file behind.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::bounds::{find_opaque_bounds, BoundingBox};
use crate::decode::{decode_image, DecodedImage};
use crate::encode::encode_png_image;
use crate::error::ExtractError;
use crate::threshold::{apply_threshold, Threshold};
use crate::transform::crop_to_bounds;

/// What to do when thresholding leaves no opaque pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyPolicy {
    /// Fail the run with `ExtractError::EmptyResult`.
    #[default]
    Fail,
    /// Keep the whole (now fully transparent) canvas.
    FullCanvas,
}

/// Options for a single extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractOptions {
    /// Pixels with R, G and B all at or below this value become transparent.
    pub threshold: Threshold,
    /// Behavior when no pixel survives thresholding.
    pub on_empty: EmptyPolicy,
}

impl ExtractOptions {
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold: Threshold(threshold),
            ..Self::default()
        }
    }

    pub fn with_empty_policy(mut self, on_empty: EmptyPolicy) -> Self {
        self.on_empty = on_empty;
        self
    }
}

/// Result of an in-memory extraction.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// The cropped image with transparent background.
    pub image: DecodedImage,
    /// Region of the source the image was cut from.
    pub bounds: BoundingBox,
    pub source_width: u32,
    pub source_height: u32,
    /// Number of pixels made transparent by the threshold pass.
    pub cleared_pixels: u64,
    /// True if no opaque pixel was found and the full canvas was kept.
    pub fell_back: bool,
}

/// Threshold, bound and crop a decoded image.
///
/// The image is consumed; its alpha channel is rewritten in place before the
/// crop copies the opaque region into a new buffer.
pub fn extract(image: DecodedImage, options: &ExtractOptions) -> Result<Extraction, ExtractError> {
    let mut image = image;
    let threshold = options.threshold;

    let cleared_pixels = apply_threshold(&mut image, threshold);
    debug!(
        threshold = threshold.value(),
        cleared = cleared_pixels,
        total = image.pixel_count(),
        "threshold pass done"
    );

    let (bounds, fell_back) = match find_opaque_bounds(&image) {
        Some(bounds) => (bounds, false),
        None => match options.on_empty {
            EmptyPolicy::Fail => {
                return Err(ExtractError::EmptyResult {
                    threshold: threshold.value(),
                })
            }
            EmptyPolicy::FullCanvas => {
                let bounds = BoundingBox::full(image.width, image.height).ok_or(
                    ExtractError::EmptyResult {
                        threshold: threshold.value(),
                    },
                )?;
                warn!(
                    threshold = threshold.value(),
                    "no opaque pixels left, keeping full canvas"
                );
                (bounds, true)
            }
        },
    };
    debug!(?bounds, "opaque bounds");

    let cropped = crop_to_bounds(&image, &bounds);

    Ok(Extraction {
        image: cropped,
        bounds,
        source_width: image.width,
        source_height: image.height,
        cleared_pixels,
        fell_back,
    })
}

/// Decode image bytes, extract, and encode the result as PNG.
pub fn extract_bytes(
    bytes: &[u8],
    options: &ExtractOptions,
) -> Result<(Vec<u8>, Extraction), ExtractError> {
    let image = decode_image(bytes)?;
    debug!(width = image.width, height = image.height, "decoded input");

    let extraction = extract(image, options)?;
    let png = encode_png_image(&extraction.image)?;
    Ok((png, extraction))
}

/// Read `input`, extract the logo, and write it to `output` as PNG.
///
/// Either `output` ends up holding one complete PNG, or the run fails and
/// no output file is created. An existing file at `output` is replaced only
/// on success.
#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn transform(
    input: &Path,
    output: &Path,
    options: &ExtractOptions,
) -> Result<Extraction, ExtractError> {
    let bytes = fs::read(input).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ExtractError::InputNotFound {
            path: input.to_path_buf(),
        },
        _ => ExtractError::ReadError {
            path: input.to_path_buf(),
            message: e.to_string(),
        },
    })?;

    let (png, extraction) = extract_bytes(&bytes, options)?;
    write_replacing(output, &png)?;

    info!(
        width = extraction.image.width,
        height = extraction.image.height,
        bytes = png.len(),
        "wrote transparent logo"
    );
    Ok(extraction)
}

/// Default output location for an input: `<dir>/<stem>-transparent.png`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "logo".to_string());
    input.with_file_name(format!("{stem}-transparent.png"))
}

/// Write `data` to a temporary sibling of `path`, then rename it over `path`.
fn write_replacing(path: &Path, data: &[u8]) -> Result<(), ExtractError> {
    let write_error = |message: String| ExtractError::WriteError {
        path: path.to_path_buf(),
        message,
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| write_error("output path has no file name".to_string()))?;
    let mut tmp_name = OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let result = fs::write(&tmp_path, data).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(e) = result {
        // The temporary file may or may not exist depending on which step failed
        let _ = fs::remove_file(&tmp_path);
        return Err(write_error(e.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DecodeError;
    use crate::encode::encode_png;
    use tempfile::tempdir;

    const BLACK: [u8; 4] = [0, 0, 0, 255];

    fn black(width: u32, height: u32) -> DecodedImage {
        DecodedImage::filled(width, height, BLACK)
    }

    #[test]
    fn test_single_bright_pixel_crops_to_1x1() {
        let mut img = black(10, 10);
        img.set_pixel(5, 5, [200, 200, 200, 255]);

        let result = extract(img, &ExtractOptions::new(45)).unwrap();

        assert_eq!((result.image.width, result.image.height), (1, 1));
        assert_eq!(result.image.pixels, vec![200, 200, 200, 255]);
        assert_eq!(result.cleared_pixels, 99);
        assert!(!result.fell_back);
    }

    #[test]
    fn test_top_left_block_crops_to_2x2() {
        let mut img = black(4, 4);
        img.set_pixel(0, 0, [255, 0, 0, 255]);
        img.set_pixel(1, 0, [0, 255, 0, 200]);
        img.set_pixel(0, 1, [0, 0, 255, 150]);
        img.set_pixel(1, 1, [90, 90, 90, 255]);

        let result = extract(img, &ExtractOptions::new(45)).unwrap();

        assert_eq!((result.image.width, result.image.height), (2, 2));
        assert_eq!(result.bounds, BoundingBox::full(2, 2).unwrap());
        assert_eq!(result.image.pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(result.image.pixel(1, 0), [0, 255, 0, 200]);
        assert_eq!(result.image.pixel(0, 1), [0, 0, 255, 150]);
        assert_eq!(result.image.pixel(1, 1), [90, 90, 90, 255]);
    }

    #[test]
    fn test_background_inside_crop_is_transparent() {
        let mut img = black(5, 1);
        img.set_pixel(1, 0, [100, 100, 100, 255]);
        img.set_pixel(3, 0, [100, 100, 100, 255]);

        let result = extract(img, &ExtractOptions::default()).unwrap();

        assert_eq!(result.image.width, 3);
        assert_eq!(result.image.pixel(1, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_threshold_255_fails_by_default() {
        let img = DecodedImage::filled(3, 3, [255, 255, 255, 255]);
        let result = extract(img, &ExtractOptions::new(255));
        assert!(matches!(
            result,
            Err(ExtractError::EmptyResult { threshold: 255 })
        ));
    }

    #[test]
    fn test_all_black_fails_by_default() {
        let result = extract(black(8, 8), &ExtractOptions::default());
        assert!(matches!(
            result,
            Err(ExtractError::EmptyResult { threshold: 45 })
        ));
    }

    #[test]
    fn test_full_canvas_fallback() {
        let options = ExtractOptions::new(255).with_empty_policy(EmptyPolicy::FullCanvas);
        let result = extract(DecodedImage::filled(6, 4, [255, 255, 255, 255]), &options).unwrap();

        assert!(result.fell_back);
        assert_eq!((result.image.width, result.image.height), (6, 4));
        assert!(result.image.pixels.chunks_exact(4).all(|p| p == [255, 255, 255, 0]));
    }

    #[test]
    fn test_full_canvas_fallback_zero_sized_still_fails() {
        let options = ExtractOptions::default().with_empty_policy(EmptyPolicy::FullCanvas);
        let result = extract(DecodedImage::new(0, 0, vec![]), &options);
        assert!(matches!(result, Err(ExtractError::EmptyResult { .. })));
    }

    #[test]
    fn test_extract_is_idempotent_on_transparent_background() {
        let mut img = black(12, 9);
        for (x, y) in [(3, 2), (7, 6), (5, 4)] {
            img.set_pixel(x, y, [180, 60, 20, 255]);
        }

        let first = extract(img, &ExtractOptions::default()).unwrap();
        let second = extract(first.image.clone(), &ExtractOptions::default()).unwrap();

        assert_eq!(second.image, first.image);
        assert_eq!(
            second.bounds,
            BoundingBox::full(first.image.width, first.image.height).unwrap()
        );
    }

    #[test]
    fn test_extract_bytes_round_trip() {
        let mut img = black(10, 10);
        img.set_pixel(2, 3, [250, 250, 250, 255]);
        img.set_pixel(4, 7, [250, 100, 0, 255]);
        let input = encode_png(&img.pixels, 10, 10).unwrap();

        let (png, extraction) = extract_bytes(&input, &ExtractOptions::default()).unwrap();
        let decoded = decode_image(&png).unwrap();

        assert_eq!(decoded, extraction.image);
        assert_eq!((decoded.width, decoded.height), (3, 5));
    }

    #[test]
    fn test_extract_bytes_rejects_garbage() {
        let result = extract_bytes(b"GIF89a nope", &ExtractOptions::default());
        assert!(matches!(result, Err(ExtractError::Decode(_))));
    }

    #[test]
    fn test_options_deserialize_partial() {
        use serde::de::value::{Error, MapDeserializer};

        let entries = vec![("threshold", 10u8)];
        let options =
            ExtractOptions::deserialize(MapDeserializer::<_, Error>::new(entries.into_iter()))
                .unwrap();

        assert_eq!(options.threshold, Threshold(10));
        assert_eq!(options.on_empty, EmptyPolicy::Fail);
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("public/rebellion-luxury-logo.png")),
            PathBuf::from("public/rebellion-luxury-logo-transparent.png")
        );
        assert_eq!(
            default_output_path(Path::new("logo.jpg")),
            PathBuf::from("logo-transparent.png")
        );
    }

    #[test]
    fn test_transform_writes_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("logo.png");
        let output = dir.path().join("logo-transparent.png");

        let mut img = black(10, 10);
        img.set_pixel(5, 5, [200, 200, 200, 255]);
        fs::write(&input, encode_png(&img.pixels, 10, 10).unwrap()).unwrap();

        let extraction = transform(&input, &output, &ExtractOptions::default()).unwrap();

        let written = decode_image(&fs::read(&output).unwrap()).unwrap();
        assert_eq!(written, extraction.image);
        assert_eq!(written.pixels, vec![200, 200, 200, 255]);
        assert!(!dir.path().join(".logo-transparent.png.tmp").exists());
    }

    #[test]
    fn test_transform_missing_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("missing.png");
        let output = dir.path().join("out.png");

        let result = transform(&input, &output, &ExtractOptions::default());

        assert!(matches!(result, Err(ExtractError::InputNotFound { path }) if path == input));
        assert!(!output.exists());
    }

    #[test]
    fn test_transform_undecodable_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.png");
        let output = dir.path().join("out.png");
        fs::write(&input, b"not a png").unwrap();

        let result = transform(&input, &output, &ExtractOptions::default());

        assert!(matches!(
            result,
            Err(ExtractError::Decode(DecodeError::InvalidFormat))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_transform_empty_result_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("black.png");
        let output = dir.path().join("out.png");
        fs::write(&input, encode_png(&black(4, 4).pixels, 4, 4).unwrap()).unwrap();

        let result = transform(&input, &output, &ExtractOptions::default());

        assert!(matches!(result, Err(ExtractError::EmptyResult { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_transform_unwritable_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("logo.png");
        let output = dir.path().join("no-such-dir").join("out.png");
        let mut img = black(2, 2);
        img.set_pixel(0, 0, [99, 99, 99, 255]);
        fs::write(&input, encode_png(&img.pixels, 2, 2).unwrap()).unwrap();

        let result = transform(&input, &output, &ExtractOptions::default());

        assert!(matches!(result, Err(ExtractError::WriteError { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_transform_replaces_existing_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("logo.png");
        let output = dir.path().join("out.png");
        fs::write(&output, b"stale").unwrap();

        let mut img = black(3, 3);
        img.set_pixel(1, 1, [60, 60, 60, 255]);
        fs::write(&input, encode_png(&img.pixels, 3, 3).unwrap()).unwrap();

        transform(&input, &output, &ExtractOptions::default()).unwrap();

        let written = decode_image(&fs::read(&output).unwrap()).unwrap();
        assert_eq!(written.pixels, vec![60, 60, 60, 255]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
