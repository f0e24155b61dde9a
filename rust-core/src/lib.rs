//! STFT Core - Short-Time Fourier Transform analysis/synthesis
//! 
//! Splits a real signal into overlapping sine-windowed frames, stores each
//! frame as a one-sided (half) spectrum, and rebuilds the signal by
//! overlap-add.
//! 
//! ```
//! use stft_core::{analyze, synthesize};
//! 
//! let signal: Vec<f64> = (0..64).map(|i| (i as f64 * 0.2).sin()).collect();
//! let matrix = analyze(&signal, 16, 8).unwrap();
//! let restored = synthesize(matrix.view(), 16, 8).unwrap();
//! 
//! assert_eq!(restored.len(), signal.len());
//! assert!((restored[32] - signal[32]).abs() < 1e-9);
//! ```

pub mod config;
pub mod error;
pub mod spectrum;
pub mod stft;

pub use config::{Normalization, StftConfig};
pub use error::{Result, StftError};
pub use spectrum::{half_len, sine_window, to_full, to_half, FftEngine};
pub use stft::{
    analyze, overlap_add, split, synthesize, synthesize_normalized, Frame, FrameSet, Stft,
    StftMatrix,
};
