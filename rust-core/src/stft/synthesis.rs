//! Inverse STFT: half spectra -> windowed frames -> overlap-add

use log::{debug, trace};
use ndarray::{ArrayView1, ArrayView2};
use num_complex::Complex;
use crate::config::Normalization;
use crate::error::{check_parameters, Result, StftError};
use crate::spectrum::codec::{half_len, to_full_into};
use crate::spectrum::fft::FftEngine;
use crate::spectrum::windowing::{sine_window, window_sum_squares};
use super::overlap_add::overlap_add;

/// Envelope values at or below this are treated as zero coverage
const ENVELOPE_FLOOR: f64 = 1e-8;

/// Rebuild a signal from a `bins x frames` STFT matrix
/// 
/// Uses [`Normalization::WindowSumSquare`], which recovers the analysed signal
/// everywhere at least one frame has a non-zero window weight.
/// 
/// # Arguments
/// * `matrix` - Half spectra as columns, e.g. `StftMatrix::view()`
/// * `frame_length` - Frame length N used for analysis
/// * `hop_length` - Hop H used for analysis
/// 
/// # Errors
/// * [`StftError::LengthMismatch`] when the row count is not `half_len(N)`
/// * [`StftError::InvalidLength`] / [`StftError::InvalidParameters`] for bad N or H
pub fn synthesize(
    matrix: ArrayView2<'_, Complex<f64>>,
    frame_length: usize,
    hop_length: usize,
) -> Result<Vec<f64>> {
    synthesize_normalized(matrix, frame_length, hop_length, Normalization::default())
}

/// [`synthesize`] with an explicit post overlap-add normalization
pub fn synthesize_normalized(
    matrix: ArrayView2<'_, Complex<f64>>,
    frame_length: usize,
    hop_length: usize,
    normalization: Normalization,
) -> Result<Vec<f64>> {
    check_parameters(frame_length, hop_length)?;
    let window = sine_window(frame_length)?;
    let engine = FftEngine::new(frame_length);
    synthesize_with(matrix, &window, &engine, hop_length, normalization)
}

/// Synthesis with a precomputed window and FFT plan
pub(crate) fn synthesize_with(
    matrix: ArrayView2<'_, Complex<f64>>,
    window: &[f64],
    engine: &FftEngine,
    hop_length: usize,
    normalization: Normalization,
) -> Result<Vec<f64>> {
    let frame_length = window.len();
    check_parameters(frame_length, hop_length)?;
    
    let expected = half_len(frame_length);
    if matrix.nrows() != expected {
        return Err(StftError::LengthMismatch {
            expected,
            found: matrix.nrows(),
        });
    }
    
    debug!(
        "stft synthesis: {} frames, N={}, H={}, {:?}",
        matrix.ncols(),
        frame_length,
        hop_length,
        normalization
    );
    
    let frames = inverse_columns(matrix, window, engine)?;
    let mut output = overlap_add(&frames, frame_length, hop_length)?;
    
    if normalization == Normalization::WindowSumSquare {
        let envelope = window_sum_squares(window, hop_length, frames.len())?;
        for (x, &e) in output.iter_mut().zip(envelope.iter()) {
            if e > ENVELOPE_FLOOR {
                *x /= e;
            }
        }
    }
    
    Ok(output)
}

/// Expand, inverse-transform and window one column
fn synthesize_frame(
    column: ArrayView1<'_, Complex<f64>>,
    window: &[f64],
    engine: &FftEngine,
) -> Result<Vec<f64>> {
    let half: Vec<Complex<f64>> = column.iter().copied().collect();
    let mut buffer = vec![Complex::new(0.0, 0.0); window.len()];
    to_full_into(&half, &mut buffer)?;
    engine.inverse_inplace(&mut buffer)?;
    
    Ok(buffer
        .iter()
        .zip(window.iter())
        .map(|(c, &w)| c.re * w)
        .collect())
}

#[cfg(not(feature = "parallel"))]
fn inverse_columns(
    matrix: ArrayView2<'_, Complex<f64>>,
    window: &[f64],
    engine: &FftEngine,
) -> Result<Vec<Vec<f64>>> {
    matrix
        .columns()
        .into_iter()
        .enumerate()
        .map(|(k, column)| {
            trace!("synthesizing frame {}", k);
            synthesize_frame(column, window, engine)
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn inverse_columns(
    matrix: ArrayView2<'_, Complex<f64>>,
    window: &[f64],
    engine: &FftEngine,
) -> Result<Vec<Vec<f64>>> {
    use rayon::prelude::*;
    
    (0..matrix.ncols())
        .into_par_iter()
        .map(|k| {
            trace!("synthesizing frame {}", k);
            synthesize_frame(matrix.column(k), window, engine)
        })
        .collect()
}
