//! Error types for STFT analysis and synthesis

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StftError {
    #[error("Window length must be greater than 1 (got {0})")]
    InvalidLength(usize),
    
    #[error("Invalid STFT parameters: frame_length={frame_length}, hop_length={hop_length}")]
    InvalidParameters {
        frame_length: usize,
        hop_length: usize,
    },
    
    #[error("Spectrum length mismatch: expected {expected}, found {found}")]
    LengthMismatch {
        expected: usize,
        found: usize,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, StftError>;

/// Check frame/hop parameters shared by splitting, analysis and synthesis
pub(crate) fn check_parameters(frame_length: usize, hop_length: usize) -> Result<()> {
    if frame_length == 0 || hop_length == 0 {
        return Err(StftError::InvalidParameters {
            frame_length,
            hop_length,
        });
    }
    Ok(())
}
