use proptest::prelude::*;
use stft_core::{analyze, split, synthesize, Normalization, Stft, StftConfig};

fn assert_interior_matches(signal: &[f64], output: &[f64], edge: usize) {
    assert_eq!(output.len(), signal.len());
    for i in edge..signal.len() - edge {
        let tolerance = 1e-9 * signal[i].abs().max(1.0);
        assert!(
            (output[i] - signal[i]).abs() <= tolerance,
            "sample {}: {} vs {}",
            i, output[i], signal[i]
        );
    }
}

#[test]
fn frame_count_boundaries() {
    let signal: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let frames = split(&signal, 8, 4).unwrap();
    let offsets: Vec<usize> = frames.iter().map(|f| f.offset).collect();
    assert_eq!(offsets, vec![0, 4, 8, 12]);
    
    assert_eq!(split(&signal[..7], 8, 4).unwrap().len(), 0);
}

#[test]
fn constant_signal_reconstructs() {
    let signal = vec![1.0; 32];
    let matrix = analyze(&signal, 8, 4).unwrap();
    let output = synthesize(matrix.view(), 8, 4).unwrap();
    
    for (i, &x) in output.iter().enumerate().take(28).skip(4) {
        assert!((x - 1.0).abs() < 1e-9, "sample {}: {}", i, x);
    }
}

#[test]
fn speech_sized_frames_reconstruct() {
    let n = 4096;
    let stft = Stft::new(StftConfig::default()).unwrap();
    let signal: Vec<f64> = (0..(n / 2) * 9)
        .map(|i| {
            let t = i as f64 / 44100.0;
            0.6 * (2.0 * std::f64::consts::PI * 440.0 * t).sin()
                + 0.3 * (2.0 * std::f64::consts::PI * 3000.0 * t).cos()
        })
        .collect();
    
    let matrix = stft.analyze(&signal).unwrap();
    assert_eq!(matrix.bins(), 2049);
    assert_eq!(matrix.frames(), 8);
    
    let output = stft.synthesize(&matrix).unwrap();
    assert_interior_matches(&signal, &output, n / 2 - 1);
}

#[test]
fn odd_frames_and_uneven_hop_stay_well_defined() {
    let config = StftConfig::new(9).with_hop(2);
    let stft = Stft::new(config).unwrap();
    let signal: Vec<f64> = (0..41).map(|i| (i as f64 * 0.37).sin() * 2.0).collect();
    
    let matrix = stft.analyze(&signal).unwrap();
    assert_eq!(matrix.bins(), 5);
    
    let output = stft.synthesize(&matrix).unwrap();
    assert_interior_matches(&signal, &output, 1);
}

#[test]
fn raw_overlap_add_ripples() {
    let config = StftConfig::new(8).with_normalization(Normalization::None);
    let stft = Stft::new(config).unwrap();
    let output = stft.synthesize(&stft.analyze(&[1.0; 32]).unwrap()).unwrap();
    
    // The symmetric sine window is not power-complementary at H = N/2
    let min = output[4..28].iter().cloned().fold(f64::INFINITY, f64::min);
    let max = output[4..28].iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    assert!(max - min > 0.05);
    assert!(max <= 1.0 + 1e-9);
}

#[test]
fn gain_processing_zeroes_band() {
    let n = 64;
    let sample_rate = 6400.0;
    let signal: Vec<f64> = (0..n * 8)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (2.0 * std::f64::consts::PI * 500.0 * t).sin()
                + (2.0 * std::f64::consts::PI * 2500.0 * t).sin()
        })
        .collect();
    
    let mut matrix = analyze(&signal, n, n / 2).unwrap();
    let response: Vec<_> = matrix
        .frequency_axis(sample_rate)
        .iter()
        .map(|&f| num_complex::Complex::new(if f < 1500.0 { 1.0 } else { 0.0 }, 0.0))
        .collect();
    matrix.apply_gain(&response).unwrap();
    
    let output = synthesize(matrix.view(), n, n / 2).unwrap();
    let lowpassed: Vec<f64> = (0..signal.len())
        .map(|i| (2.0 * std::f64::consts::PI * 500.0 * i as f64 / sample_rate).sin())
        .collect();
    
    // Window leakage across the cutoff keeps this approximate
    for i in n / 2..signal.len() - n / 2 {
        assert!((output[i] - lowpassed[i]).abs() < 0.1, "sample {}", i);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    
    #[test]
    fn prop_half_overlap_round_trip(
        half in 2usize..33,
        m in 2usize..12,
        ref values in proptest::collection::vec(-1000.0f64..1000.0, 1024),
    ) {
        let n = half * 2;
        let len = m * half + half;
        let signal = &values[..len];
        
        let matrix = analyze(signal, n, half).unwrap();
        let output = synthesize(matrix.view(), n, half).unwrap();
        
        prop_assert_eq!(output.len(), len);
        for i in (half - 1)..(len - (half - 1)) {
            let tolerance = 1e-9 * signal[i].abs().max(1.0);
            prop_assert!((output[i] - signal[i]).abs() <= tolerance * 10.0,
                "n={} sample {}: {} vs {}", n, i, output[i], signal[i]);
        }
    }
}
