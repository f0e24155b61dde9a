//! STFT configuration
//! 
//! Frame/hop lengths and the overlap-add normalization used by [`crate::Stft`]

use crate::error::{check_parameters, Result, StftError};

/// How synthesized frames are scaled after overlap-add
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Divide each output sample by the overlap-added squared window.
    /// Samples whose envelope is numerically zero are left untouched.
    #[default]
    WindowSumSquare,
    
    /// Plain overlap-add sum of the windowed frames
    None,
}

/// STFT configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StftConfig {
    /// Frame (and FFT) length N in samples
    pub frame_length: usize,
    
    /// Hop H between consecutive frame starts, in samples
    pub hop_length: usize,
    
    /// Post overlap-add scaling applied during synthesis
    pub normalization: Normalization,
}

impl Default for StftConfig {
    fn default() -> Self {
        Self {
            frame_length: 4096,
            hop_length: 2048,
            normalization: Normalization::WindowSumSquare,
        }
    }
}

impl StftConfig {
    /// Configuration with 50% overlap (`hop = frame_length / 2`)
    pub fn new(frame_length: usize) -> Self {
        Self {
            frame_length,
            hop_length: frame_length / 2,
            normalization: Normalization::default(),
        }
    }
    
    /// Override the hop length
    pub fn with_hop(mut self, hop_length: usize) -> Self {
        self.hop_length = hop_length;
        self
    }
    
    /// Override the synthesis normalization
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }
    
    /// Validate frame/hop lengths
    /// 
    /// The sine window needs at least two points, so `frame_length` must be > 1.
    pub fn validate(&self) -> Result<()> {
        check_parameters(self.frame_length, self.hop_length)?;
        if self.frame_length <= 1 {
            return Err(StftError::InvalidLength(self.frame_length));
        }
        Ok(())
    }
    
    /// True for the 50%-overlap configuration with even N, where the
    /// squared-window envelope is periodic with period H
    pub fn is_cola_exact(&self) -> bool {
        self.frame_length % 2 == 0 && self.hop_length * 2 == self.frame_length
    }
    
    /// Number of frequency bins per analysed frame
    pub fn num_bins(&self) -> usize {
        crate::spectrum::codec::half_len(self.frame_length)
    }
}
