//! FFT engine for STFT frames
//! 
//! Full complex transforms of a fixed size N using rustfft. The STFT needs the
//! complete N-point spectrum (it is compacted afterwards by the codec), and the
//! inverse needs arbitrary N, so plain complex plans are used for both parities.

use rustfft::{Fft, FftPlanner, num_complex::Complex};
use std::sync::Arc;
use crate::error::{Result, StftError};
use super::codec::{half_len, to_full_into, to_half};

/// Planned forward/inverse transforms of one size
#[derive(Clone)]
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,
    
    /// Forward FFT plan
    fft: Arc<dyn Fft<f64>>,
    
    /// Inverse FFT plan
    ifft: Arc<dyn Fft<f64>>,
}

impl std::fmt::Debug for FftEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FftEngine")
            .field("fft_size", &self.fft_size)
            .finish()
    }
}

impl FftEngine {
    /// Create new FFT engine
    /// 
    /// # Arguments
    /// * `fft_size` - FFT size (any length, not only powers of 2)
    pub fn new(fft_size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(fft_size);
        let ifft = planner.plan_fft_inverse(fft_size);
        
        Self {
            fft_size,
            fft,
            ifft,
        }
    }
    
    /// Forward transform of a real frame into a caller-owned buffer
    /// 
    /// `frame` is zero-padded or truncated to the FFT size.
    pub fn forward_into(&self, frame: &[f64], spectrum: &mut [Complex<f64>]) -> Result<()> {
        if spectrum.len() != self.fft_size {
            return Err(StftError::LengthMismatch {
                expected: self.fft_size,
                found: spectrum.len(),
            });
        }
        
        self.transform_real(frame, spectrum);
        Ok(())
    }
    
    /// Full N-point spectrum of a real frame
    pub fn forward(&self, frame: &[f64]) -> Vec<Complex<f64>> {
        let mut spectrum = vec![Complex::new(0.0, 0.0); self.fft_size];
        self.transform_real(frame, &mut spectrum);
        spectrum
    }
    
    /// Positive-frequency half spectrum of a real frame
    /// 
    /// # Returns
    /// `num_bins()` complex bins, DC first
    pub fn forward_half(&self, frame: &[f64]) -> Result<Vec<Complex<f64>>> {
        let spectrum = self.forward(frame);
        to_half(&spectrum)
    }
    
    /// In-place inverse transform scaled by 1/N
    pub fn inverse_inplace(&self, spectrum: &mut [Complex<f64>]) -> Result<()> {
        if spectrum.len() != self.fft_size {
            return Err(StftError::LengthMismatch {
                expected: self.fft_size,
                found: spectrum.len(),
            });
        }
        
        if self.fft_size == 0 {
            return Ok(());
        }
        
        self.ifft.process(spectrum);
        
        // rustfft leaves the inverse unnormalized
        let scale = 1.0 / self.fft_size as f64;
        for bin in spectrum.iter_mut() {
            *bin *= scale;
        }
        
        Ok(())
    }
    
    /// Real time-domain frame from a half spectrum
    /// 
    /// # Errors
    /// [`StftError::LengthMismatch`] when `half.len() != num_bins()`
    pub fn inverse_half(&self, half: &[Complex<f64>]) -> Result<Vec<f64>> {
        let mut buffer = vec![Complex::new(0.0, 0.0); self.fft_size];
        to_full_into(half, &mut buffer)?;
        self.inverse_inplace(&mut buffer)?;
        Ok(buffer.iter().map(|c| c.re).collect())
    }
    
    fn transform_real(&self, frame: &[f64], spectrum: &mut [Complex<f64>]) {
        let copy_len = frame.len().min(self.fft_size);
        for (bin, &x) in spectrum.iter_mut().zip(frame[..copy_len].iter()) {
            *bin = Complex::new(x, 0.0);
        }
        spectrum[copy_len..].fill(Complex::new(0.0, 0.0));
        
        if self.fft_size > 0 {
            self.fft.process(spectrum);
        }
    }
    
    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }
    
    /// Number of half-spectrum bins
    pub fn num_bins(&self) -> usize {
        half_len(self.fft_size)
    }
}
