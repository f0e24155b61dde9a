//! Per-frame spectral building blocks: window, FFT and half-spectrum codec

pub mod codec;
pub mod fft;
pub mod windowing;

pub use codec::{half_len, to_full, to_half};
pub use fft::FftEngine;
pub use windowing::{apply_window_inplace, sine_window, window_sum_squares};
