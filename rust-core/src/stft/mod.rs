//! STFT analysis/synthesis engine
//! 
//! Combines frame splitting, the sine window, FFT and half-spectrum codec

pub mod analysis;
pub mod frames;
pub mod matrix;
pub mod overlap_add;
pub mod synthesis;

pub use analysis::analyze;
pub use frames::{frame_count, split, Frame, FrameSet};
pub use matrix::StftMatrix;
pub use overlap_add::overlap_add;
pub use synthesis::{synthesize, synthesize_normalized};

use crate::config::StftConfig;
use crate::error::{Result, StftError};
use crate::spectrum::fft::FftEngine;
use crate::spectrum::windowing::sine_window;

/// STFT engine holding the window and FFT plans for one configuration
/// 
/// Immutable after construction; analysis and synthesis take `&self`, so one
/// engine can serve repeated calls (or several threads).
#[derive(Debug, Clone)]
pub struct Stft {
    config: StftConfig,
    window: Vec<f64>,
    engine: FftEngine,
}

impl Stft {
    /// Create new STFT engine
    /// 
    /// # Errors
    /// Whatever [`StftConfig::validate`] reports
    pub fn new(config: StftConfig) -> Result<Self> {
        config.validate()?;
        
        let window = sine_window(config.frame_length)?;
        let engine = FftEngine::new(config.frame_length);
        
        Ok(Self {
            config,
            window,
            engine,
        })
    }
    
    /// Analyse a signal into a `bins x frames` matrix
    pub fn analyze(&self, signal: &[f64]) -> Result<StftMatrix> {
        analysis::analyze_with(signal, &self.window, &self.engine, self.config.hop_length)
    }
    
    /// Rebuild a signal using the configured normalization
    /// 
    /// # Errors
    /// * [`StftError::LengthMismatch`] when the matrix was produced with a
    ///   different frame length
    /// * [`StftError::InvalidParameters`] when it was produced with a
    ///   different hop (reports the matrix's frame/hop lengths)
    pub fn synthesize(&self, matrix: &StftMatrix) -> Result<Vec<f64>> {
        if matrix.frame_length() != self.config.frame_length {
            return Err(StftError::LengthMismatch {
                expected: self.config.frame_length,
                found: matrix.frame_length(),
            });
        }
        if matrix.hop_length() != self.config.hop_length {
            return Err(StftError::InvalidParameters {
                frame_length: matrix.frame_length(),
                hop_length: matrix.hop_length(),
            });
        }
        
        synthesis::synthesize_with(
            matrix.view(),
            &self.window,
            &self.engine,
            self.config.hop_length,
            self.config.normalization,
        )
    }
    
    /// Cached analysis/synthesis window
    pub fn window(&self) -> &[f64] {
        &self.window
    }
    
    pub fn config(&self) -> &StftConfig {
        &self.config
    }
    
    /// Number of frequency bins per frame
    pub fn num_bins(&self) -> usize {
        self.engine.num_bins()
    }
}
