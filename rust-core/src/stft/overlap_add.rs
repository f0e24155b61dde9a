//! Overlap-add reconstruction
//! 
//! Output sample n is the sum of `frame_k[n - k·H]` over every frame k with
//! `k·H <= n < k·H + N`. Frames are accumulated in increasing k so the
//! floating-point summation order is fixed.

use crate::error::{check_parameters, Result, StftError};

/// Length of the signal rebuilt from `num_frames` frames
/// 
/// # Errors
/// [`StftError::InvalidParameters`] when `(F-1)·H + N` overflows `usize`
pub fn output_length(num_frames: usize, frame_length: usize, hop_length: usize) -> Result<usize> {
    if num_frames == 0 {
        return Ok(0);
    }
    
    (num_frames - 1)
        .checked_mul(hop_length)
        .and_then(|span| span.checked_add(frame_length))
        .ok_or(StftError::InvalidParameters {
            frame_length,
            hop_length,
        })
}

/// Sum overlapping frames at their hop-aligned positions
/// 
/// # Arguments
/// * `frames` - Time-domain frames, each of length `frame_length`, in order
/// * `frame_length` - Frame length N
/// * `hop_length` - Hop H
/// 
/// # Returns
/// Signal of length `(F-1)·H + N`, empty for no frames. With `H = N/2` the first
/// and last N/2 samples are covered by a single frame only.
/// 
/// # Errors
/// * [`StftError::InvalidParameters`] when N or H is zero, or the output
///   length overflows
/// * [`StftError::LengthMismatch`] when a frame is not N samples long
pub fn overlap_add<F: AsRef<[f64]>>(
    frames: &[F],
    frame_length: usize,
    hop_length: usize,
) -> Result<Vec<f64>> {
    check_parameters(frame_length, hop_length)?;
    
    let mut output = vec![0.0; output_length(frames.len(), frame_length, hop_length)?];
    for (k, frame) in frames.iter().enumerate() {
        let frame = frame.as_ref();
        if frame.len() != frame_length {
            return Err(StftError::LengthMismatch {
                expected: frame_length,
                found: frame.len(),
            });
        }
        
        let start = k * hop_length;
        for (out, &x) in output[start..start + frame_length].iter_mut().zip(frame.iter()) {
            *out += x;
        }
    }
    
    Ok(output)
}
