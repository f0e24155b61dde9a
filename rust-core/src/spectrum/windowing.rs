//! Sine window for STFT analysis and synthesis
//! 
//! The same window is applied once before the forward transform and once after
//! the inverse transform, so each output sample is weighted by `w[n]^2`.

use std::f64::consts::PI;
use crate::error::{Result, StftError};
use crate::stft::overlap_add::output_length;

/// Generate sine window coefficients
/// 
/// w[n] = sin(πn/(N-1)) for n = 0..N-1, so both endpoints are 0 and the
/// window is symmetric about its midpoint.
/// 
/// # Errors
/// [`StftError::InvalidLength`] when `length <= 1`
pub fn sine_window(length: usize) -> Result<Vec<f64>> {
    if length <= 1 {
        return Err(StftError::InvalidLength(length));
    }
    
    let m = length as f64;
    let window = (0..length)
        .map(|n| (PI * n as f64 / (m - 1.0)).sin())
        .collect();
    
    Ok(window)
}

/// Apply window in-place
pub fn apply_window_inplace(signal: &mut [f64], window: &[f64]) {
    for (s, w) in signal.iter_mut().zip(window.iter()) {
        *s *= w;
    }
}

/// Overlap-added squared window envelope
/// 
/// Sum of `w[n - k·hop]^2` over `num_frames` frames, i.e. the gain the
/// analysis/synthesis window pair imposes on every output sample.
/// 
/// # Returns
/// Envelope of length `(num_frames - 1)·hop + window.len()`, or empty when
/// `num_frames == 0`
/// 
/// # Errors
/// [`StftError::InvalidParameters`] when the envelope length overflows `usize`
pub fn window_sum_squares(
    window: &[f64],
    hop_length: usize,
    num_frames: usize,
) -> Result<Vec<f64>> {
    let n = window.len();
    let mut envelope = vec![0.0; output_length(num_frames, n, hop_length)?];
    for k in 0..num_frames {
        let start = k * hop_length;
        for (e, &w) in envelope[start..start + n].iter_mut().zip(window.iter()) {
            *e += w * w;
        }
    }
    
    Ok(envelope)
}
