//! STFT analysis: signal -> frames -> windowed half spectra

use log::{debug, trace};
use num_complex::Complex;
use crate::error::Result;
use crate::spectrum::codec::to_half;
use crate::spectrum::fft::FftEngine;
use crate::spectrum::windowing::{apply_window_inplace, sine_window};
use super::frames::{split, Frame};
use super::matrix::StftMatrix;

/// Analyse `signal` with a fresh window and FFT plan
/// 
/// # Arguments
/// * `signal` - Real input signal
/// * `frame_length` - Frame/FFT length N (> 1)
/// * `hop_length` - Hop H (> 0)
/// 
/// # Returns
/// `half_len(N) x frames` matrix; zero columns when the signal is shorter than N
pub fn analyze(signal: &[f64], frame_length: usize, hop_length: usize) -> Result<StftMatrix> {
    let window = sine_window(frame_length)?;
    let engine = FftEngine::new(frame_length);
    analyze_with(signal, &window, &engine, hop_length)
}

/// Analysis with a precomputed window and FFT plan
pub(crate) fn analyze_with(
    signal: &[f64],
    window: &[f64],
    engine: &FftEngine,
    hop_length: usize,
) -> Result<StftMatrix> {
    let frame_length = window.len();
    let frames = split(signal, frame_length, hop_length)?;
    
    debug!(
        "stft analysis: {} samples, N={}, H={}, {} frames",
        signal.len(),
        frame_length,
        hop_length,
        frames.len()
    );
    
    let spectra = transform_frames(frames.as_slice(), window, engine)?;
    
    let mut matrix = StftMatrix::zeros(frame_length, hop_length, spectra.len());
    for (k, half) in spectra.into_iter().enumerate() {
        for (cell, bin) in matrix.column_mut(k).iter_mut().zip(half) {
            *cell = bin;
        }
    }
    
    Ok(matrix)
}

/// Reusable per-worker buffers for one frame
struct FrameScratch {
    windowed: Vec<f64>,
    spectrum: Vec<Complex<f64>>,
}

impl FrameScratch {
    fn new(frame_length: usize) -> Self {
        Self {
            windowed: vec![0.0; frame_length],
            spectrum: vec![Complex::new(0.0, 0.0); frame_length],
        }
    }
}

/// Window, transform and compact one frame
fn analyze_frame(
    frame: &Frame<'_>,
    window: &[f64],
    engine: &FftEngine,
    scratch: &mut FrameScratch,
) -> Result<Vec<Complex<f64>>> {
    trace!("analysing frame at offset {}", frame.offset);
    
    scratch.windowed.copy_from_slice(frame.samples);
    apply_window_inplace(&mut scratch.windowed, window);
    
    engine.forward_into(&scratch.windowed, &mut scratch.spectrum)?;
    to_half(&scratch.spectrum)
}

#[cfg(not(feature = "parallel"))]
fn transform_frames(
    frames: &[Frame<'_>],
    window: &[f64],
    engine: &FftEngine,
) -> Result<Vec<Vec<Complex<f64>>>> {
    let mut scratch = FrameScratch::new(window.len());
    frames
        .iter()
        .map(|frame| analyze_frame(frame, window, engine, &mut scratch))
        .collect()
}

#[cfg(feature = "parallel")]
fn transform_frames(
    frames: &[Frame<'_>],
    window: &[f64],
    engine: &FftEngine,
) -> Result<Vec<Vec<Complex<f64>>>> {
    use rayon::prelude::*;
    
    // Indexed parallel collect keeps frame order; each worker owns its scratch
    frames
        .par_iter()
        .map_init(
            || FrameScratch::new(window.len()),
            |scratch, frame| analyze_frame(frame, window, engine, scratch),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StftError;
    use std::f64::consts::PI;
    
    #[test]
    fn test_analyze_shape() {
        let signal = vec![0.25; 32];
        
        let matrix = analyze(&signal, 8, 4).unwrap();
        assert_eq!(matrix.bins(), 5);
        assert_eq!(matrix.frames(), 7);
        assert_eq!(matrix.frame_length(), 8);
        assert_eq!(matrix.hop_length(), 4);
        
        let odd = analyze(&signal, 9, 3).unwrap();
        assert_eq!(odd.bins(), 5);
        assert_eq!(odd.frames(), 8);
    }
    
    #[test]
    fn test_analyze_short_signal() {
        let matrix = analyze(&[1.0; 7], 8, 4).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.bins(), 5);
    }
    
    #[test]
    fn test_analyze_invalid_parameters() {
        assert_eq!(analyze(&[1.0; 16], 1, 1), Err(StftError::InvalidLength(1)));
        assert!(matches!(
            analyze(&[1.0; 16], 8, 0),
            Err(StftError::InvalidParameters { .. })
        ));
    }
    
    #[test]
    fn test_analyze_matches_manual_frame() {
        let signal: Vec<f64> = (0..24).map(|i| (0.3 * i as f64).sin()).collect();
        let matrix = analyze(&signal, 8, 4).unwrap();
        
        let window = sine_window(8).unwrap();
        let engine = FftEngine::new(8);
        let windowed: Vec<f64> = signal[8..16].iter().zip(&window).map(|(s, w)| s * w).collect();
        let expected = engine.forward_half(&windowed).unwrap();
        
        for (got, want) in matrix.column(2).iter().zip(expected.iter()) {
            assert!((got - want).norm() < 1e-12);
        }
    }
    
    #[test]
    fn test_analyze_tone_peak() {
        let n = 64;
        let sample_rate = 6400.0;
        let freq_hz = 1000.0;
        let signal: Vec<f64> = (0..640)
            .map(|i| (2.0 * PI * freq_hz * i as f64 / sample_rate).sin())
            .collect();
        
        let matrix = analyze(&signal, n, n / 2).unwrap();
        let freqs = matrix.frequency_axis(sample_rate);
        let mag = matrix.magnitude();
        
        for j in 0..matrix.frames() {
            let column = mag.column(j);
            let (peak, _) = column
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
                .unwrap();
            assert!((freqs[peak] - freq_hz).abs() <= 100.0);
        }
    }
}
