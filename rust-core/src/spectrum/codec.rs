//! Half-spectrum codec
//! 
//! The N-point spectrum of a real frame is Hermitian: X[N-k] = conj(X[k]).
//! Only bins 0..=N/2 (even N) or 0..=(N-1)/2 (odd N) are independent, so the
//! STFT stores that half and rebuilds the rest on synthesis.

use num_complex::Complex;
use crate::error::{Result, StftError};

/// Number of bins kept for an N-point real spectrum
/// 
/// N/2 + 1 for even N (DC through Nyquist), (N+1)/2 for odd N.
/// Both cases reduce to `N/2 + 1` in integer arithmetic.
pub fn half_len(frame_length: usize) -> usize {
    if frame_length == 0 {
        0
    } else {
        frame_length / 2 + 1
    }
}

/// Frame lengths whose half spectrum has `half_length` bins
/// 
/// # Returns
/// `(even, odd)` candidates `2L-2` and `2L-1`; `None` for `L == 0`.
/// For `L == 1` the even candidate is 0, which is not a valid frame length,
/// leaving N = 1 as the only match.
pub fn frame_len_candidates(half_length: usize) -> Option<(usize, usize)> {
    if half_length == 0 {
        return None;
    }
    Some((2 * half_length - 2, 2 * half_length - 1))
}

/// Keep the non-redundant half of a full real-signal spectrum
/// 
/// # Errors
/// [`StftError::LengthMismatch`] for an empty spectrum
pub fn to_half(full: &[Complex<f64>]) -> Result<Vec<Complex<f64>>> {
    if full.is_empty() {
        return Err(StftError::LengthMismatch { expected: 1, found: 0 });
    }
    Ok(full[..half_len(full.len())].to_vec())
}

/// Rebuild the full N-point spectrum from its half
/// 
/// Bins above the kept range are filled with the conjugate mirror of the
/// interior bins. DC, and Nyquist for even N, are self-conjugate and appear once.
/// 
/// # Errors
/// [`StftError::LengthMismatch`] when `half.len() != half_len(frame_length)`
pub fn to_full(half: &[Complex<f64>], frame_length: usize) -> Result<Vec<Complex<f64>>> {
    let mut full = vec![Complex::new(0.0, 0.0); frame_length];
    to_full_into(half, &mut full)?;
    Ok(full)
}

/// [`to_full`] writing into a caller-owned buffer of length N
pub fn to_full_into(half: &[Complex<f64>], full: &mut [Complex<f64>]) -> Result<()> {
    let n = full.len();
    let expected = half_len(n);
    if n == 0 || half.len() != expected {
        return Err(StftError::LengthMismatch {
            expected,
            found: half.len(),
        });
    }
    
    full[..expected].copy_from_slice(half);
    for k in expected..n {
        full[k] = half[n - k].conj();
    }
    
    Ok(())
}
