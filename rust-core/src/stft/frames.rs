//! Frame splitting
//! 
//! Slices a signal into frames of length N starting every H samples. Frames
//! borrow from the source signal, so overlapping frames share samples without
//! copying. A trailing remainder shorter than N is dropped, not padded.

use crate::error::{check_parameters, Result};

/// One frame of a signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a> {
    /// Start offset in the source signal
    pub offset: usize,
    
    /// Exactly `frame_length` samples
    pub samples: &'a [f64],
}

/// Ordered frames cut from one signal
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSet<'a> {
    frames: Vec<Frame<'a>>,
    frame_length: usize,
    hop_length: usize,
}

impl<'a> FrameSet<'a> {
    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }
    
    /// True when the signal was shorter than one frame
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
    
    /// Get frame `index`
    pub fn get(&self, index: usize) -> Option<&Frame<'a>> {
        self.frames.get(index)
    }
    
    /// Iterate frames in increasing offset order
    pub fn iter(&self) -> std::slice::Iter<'_, Frame<'a>> {
        self.frames.iter()
    }
    
    /// All frames as a slice
    pub fn as_slice(&self) -> &[Frame<'a>] {
        &self.frames
    }
    
    pub fn frame_length(&self) -> usize {
        self.frame_length
    }
    
    pub fn hop_length(&self) -> usize {
        self.hop_length
    }
}

impl<'a> IntoIterator for FrameSet<'a> {
    type Item = Frame<'a>;
    type IntoIter = std::vec::IntoIter<Frame<'a>>;
    
    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s FrameSet<'a> {
    type Item = &'s Frame<'a>;
    type IntoIter = std::slice::Iter<'s, Frame<'a>>;
    
    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Number of whole frames in a signal of `signal_length` samples
/// 
/// `max(0, floor((len - N) / H) + 1)`; zero when the signal is shorter than a frame.
pub fn frame_count(signal_length: usize, frame_length: usize, hop_length: usize) -> usize {
    if frame_length == 0 || hop_length == 0 || signal_length < frame_length {
        return 0;
    }
    (signal_length - frame_length) / hop_length + 1
}

/// Split a signal into overlapping frames
/// 
/// # Arguments
/// * `signal` - Source signal
/// * `frame_length` - Frame length N (> 0)
/// * `hop_length` - Hop H between frame starts (> 0)
/// 
/// # Errors
/// [`crate::StftError::InvalidParameters`] when N or H is zero
pub fn split(signal: &[f64], frame_length: usize, hop_length: usize) -> Result<FrameSet<'_>> {
    check_parameters(frame_length, hop_length)?;
    
    let count = frame_count(signal.len(), frame_length, hop_length);
    let frames = (0..count)
        .map(|k| {
            let offset = k * hop_length;
            Frame {
                offset,
                samples: &signal[offset..offset + frame_length],
            }
        })
        .collect();
    
    Ok(FrameSet {
        frames,
        frame_length,
        hop_length,
    })
}
