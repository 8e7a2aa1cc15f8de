//! Errors for a complete extraction run.

use std::path::PathBuf;

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Every way a run can fail. All failures are terminal for the run and
/// leave no output file behind.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input path does not exist.
    #[error("Input image not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The input exists but could not be read.
    #[error("Failed to read {}: {message}", path.display())]
    ReadError { path: PathBuf, message: String },

    /// The input bytes are not a decodable image.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// No pixel is left opaque after thresholding.
    #[error("No opaque pixels remain after thresholding at {threshold}; nothing to crop")]
    EmptyResult { threshold: u8 },

    /// The cropped image could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The output could not be written.
    #[error("Failed to write {}: {message}", path.display())]
    WriteError { path: PathBuf, message: String },
}
