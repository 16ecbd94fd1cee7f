/// Largest absolute finite sample value, or `0.0` for an empty buffer.
pub fn peak_amplitude(samples: &[f32]) -> f32 {
    samples
        .iter()
        .filter(|s| s.is_finite())
        .fold(0.0f32, |peak, s| peak.max(s.abs()))
}

/// Scales `samples` in place so the peak magnitude becomes 1.0.
///
/// Non-finite samples are zeroed first. Only an all-zero buffer is left as
/// is; any non-zero peak, however small, is scaled to full scale.
pub fn normalize_peak(samples: &mut [f32]) {
    for s in samples.iter_mut() {
        if !s.is_finite() {
            *s = 0.0;
        }
    }

    let peak = peak_amplitude(samples);
    if peak < f32::MIN_POSITIVE {
        return;
    }

    let gain = 1.0 / peak;
    for s in samples.iter_mut() {
        *s *= gain;
    }
}
