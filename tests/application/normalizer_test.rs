use hushwave::application::services::{normalize_peak, peak_amplitude};

#[test]
fn given_quiet_signal_when_normalizing_then_peak_is_one() {
    let mut samples = vec![0.1, -0.25, 0.05, 0.2];

    normalize_peak(&mut samples);

    assert!((peak_amplitude(&samples) - 1.0).abs() < 1e-6);
    assert!((samples[1] + 1.0).abs() < 1e-6);
    assert!((samples[0] - 0.4).abs() < 1e-6);
}

#[test]
fn given_normalized_signal_when_normalizing_again_then_unchanged() {
    let mut samples = vec![0.3, -0.6, 0.9];
    normalize_peak(&mut samples);
    let once = samples.clone();

    normalize_peak(&mut samples);

    for (a, b) in once.iter().zip(&samples) {
        assert!((a - b).abs() < 1e-6);
    }
}

#[test]
fn given_silence_when_normalizing_then_stays_silent() {
    let mut samples = vec![0.0f32; 64];

    normalize_peak(&mut samples);

    assert!(samples.iter().all(|&s| s == 0.0));
}

#[test]
fn given_non_finite_samples_when_normalizing_then_zeroed_and_rest_scaled() {
    let mut samples = vec![f32::NAN, 0.5, f32::INFINITY, -0.25];

    normalize_peak(&mut samples);

    assert_eq!(samples[0], 0.0);
    assert_eq!(samples[2], 0.0);
    assert!((samples[1] - 1.0).abs() < 1e-6);
    assert!((samples[3] + 0.5).abs() < 1e-6);
}

#[test]
fn given_empty_buffer_when_measuring_peak_then_zero() {
    assert_eq!(peak_amplitude(&[]), 0.0);
}

#[test]
fn given_tiny_non_zero_peak_when_normalizing_then_scaled_to_full_scale() {
    let mut samples = vec![1e-8, -5e-9, 2.5e-9];

    normalize_peak(&mut samples);

    assert!((peak_amplitude(&samples) - 1.0).abs() < 1e-6);
    assert!((samples[1] + 0.5).abs() < 1e-6);
    assert!((samples[2] - 0.25).abs() < 1e-6);
}
