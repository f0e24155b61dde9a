//! Time-frequency matrix produced by STFT analysis
//! 
//! Dense `bins x frames` array: row k is frequency bin k (DC first), column j is
//! the half spectrum of frame j.

use ndarray::{Array2, ArrayView1, ArrayView2, ArrayViewMut1};
use num_complex::Complex;
use crate::error::{check_parameters, Result, StftError};
use crate::spectrum::codec::half_len;

/// STFT matrix with the frame/hop lengths it was computed with
#[derive(Debug, Clone, PartialEq)]
pub struct StftMatrix {
    data: Array2<Complex<f64>>,
    frame_length: usize,
    hop_length: usize,
}

impl StftMatrix {
    /// Wrap an existing `bins x frames` array
    /// 
    /// # Errors
    /// * [`StftError::InvalidParameters`] when N or H is zero
    /// * [`StftError::LengthMismatch`] when the row count is not `half_len(N)`
    pub fn from_array(
        data: Array2<Complex<f64>>,
        frame_length: usize,
        hop_length: usize,
    ) -> Result<Self> {
        check_parameters(frame_length, hop_length)?;
        
        let expected = half_len(frame_length);
        if data.nrows() != expected {
            return Err(StftError::LengthMismatch {
                expected,
                found: data.nrows(),
            });
        }
        
        Ok(Self {
            data,
            frame_length,
            hop_length,
        })
    }
    
    /// All-zero matrix with `frames` columns
    pub(crate) fn zeros(frame_length: usize, hop_length: usize, frames: usize) -> Self {
        Self {
            data: Array2::zeros((half_len(frame_length), frames)),
            frame_length,
            hop_length,
        }
    }
    
    /// Number of frequency bins (rows)
    pub fn bins(&self) -> usize {
        self.data.nrows()
    }
    
    /// Number of frames (columns)
    pub fn frames(&self) -> usize {
        self.data.ncols()
    }
    
    /// True when no frame fitted in the analysed signal
    pub fn is_empty(&self) -> bool {
        self.frames() == 0
    }
    
    pub fn frame_length(&self) -> usize {
        self.frame_length
    }
    
    pub fn hop_length(&self) -> usize {
        self.hop_length
    }
    
    /// Half spectrum of frame `index`
    /// 
    /// # Panics
    /// If `index >= frames()`
    pub fn column(&self, index: usize) -> ArrayView1<'_, Complex<f64>> {
        self.data.column(index)
    }
    
    /// Mutable half spectrum of frame `index`
    /// 
    /// # Panics
    /// If `index >= frames()`
    pub fn column_mut(&mut self, index: usize) -> ArrayViewMut1<'_, Complex<f64>> {
        self.data.column_mut(index)
    }
    
    pub fn view(&self) -> ArrayView2<'_, Complex<f64>> {
        self.data.view()
    }
    
    pub fn as_array(&self) -> &Array2<Complex<f64>> {
        &self.data
    }
    
    pub fn into_array(self) -> Array2<Complex<f64>> {
        self.data
    }
    
    /// Multiply every frame by a per-bin frequency response
    /// 
    /// # Arguments
    /// * `response` - Complex gain H[k] for each of the `bins()` bins
    /// 
    /// # Errors
    /// [`StftError::LengthMismatch`] when `response.len() != bins()`
    pub fn apply_gain(&mut self, response: &[Complex<f64>]) -> Result<()> {
        if response.len() != self.bins() {
            return Err(StftError::LengthMismatch {
                expected: self.bins(),
                found: response.len(),
            });
        }
        
        for mut column in self.data.columns_mut() {
            for (x, h) in column.iter_mut().zip(response.iter()) {
                *x *= h;
            }
        }
        
        Ok(())
    }
    
    /// Magnitude |X[k, j]| of every cell
    pub fn magnitude(&self) -> Array2<f64> {
        self.data.mapv(|c| c.norm())
    }
    
    /// Centre frequency of each row in Hz
    pub fn frequency_axis(&self, sample_rate: f64) -> Vec<f64> {
        let n = self.frame_length as f64;
        (0..self.bins())
            .map(|k| k as f64 * sample_rate / n)
            .collect()
    }
}
