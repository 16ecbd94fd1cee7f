//! Stationary spectral gating.
//!
//! A per-bin noise threshold is estimated from magnitude statistics over the
//! whole clip (mean + k standard deviations), capped by the median of the same
//! statistic over neighbouring bins so steady narrowband signal survives.
//! Bins below the threshold are attenuated. The binary mask is widened
//! across frequency and smoothed over time before the signal is rebuilt by
//! weighted overlap-add.

use std::sync::Arc;

use realfft::num_complex::Complex;
use realfft::{ComplexToReal, RealFftPlanner, RealToComplex};

use crate::application::ports::{NoiseReducer, NoiseReducerError};
use crate::domain::SampleBuffer;
use crate::presentation::config::DenoiseSettings;

const MIN_FFT_SIZE: usize = 16;
const WINDOW_SUM_FLOOR: f32 = 1e-8;
const FLOOR_MEDIAN_HALF_WIDTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralGateConfig {
    pub fft_size: usize,
    /// Bins quieter than `mean + n_std_threshold * std` count as noise.
    pub n_std_threshold: f32,
    /// 1.0 removes gated bins entirely, 0.0 disables the gate.
    pub prop_decrease: f32,
    /// Exponential smoothing of the mask between frames, in `[0, 1)`.
    pub time_smoothing: f32,
    /// Half width of the moving average that spreads the mask into
    /// neighbouring bins. Bins that passed the gate keep their full gain.
    pub freq_smoothing_bins: usize,
}

impl Default for SpectralGateConfig {
    fn default() -> Self {
        Self {
            fft_size: 2048,
            n_std_threshold: 1.5,
            prop_decrease: 1.0,
            time_smoothing: 0.5,
            freq_smoothing_bins: 2,
        }
    }
}

impl From<&DenoiseSettings> for SpectralGateConfig {
    fn from(settings: &DenoiseSettings) -> Self {
        Self {
            fft_size: settings.fft_size,
            n_std_threshold: settings.n_std_threshold,
            prop_decrease: settings.prop_decrease,
            time_smoothing: settings.time_smoothing,
            freq_smoothing_bins: settings.freq_smoothing_bins,
        }
    }
}

pub struct SpectralGateReducer {
    config: SpectralGateConfig,
    hop_size: usize,
    window: Vec<f32>,
    forward_fft: Arc<dyn RealToComplex<f32>>,
    inverse_fft: Arc<dyn ComplexToReal<f32>>,
}

impl SpectralGateReducer {
    pub fn new(config: SpectralGateConfig) -> Result<Self, NoiseReducerError> {
        validate(&config)?;

        let fft_size = config.fft_size;
        let mut planner = RealFftPlanner::<f32>::new();
        let forward_fft = planner.plan_fft_forward(fft_size);
        let inverse_fft = planner.plan_fft_inverse(fft_size);

        // Periodic Hann; squared sums are constant at 75% overlap.
        let window = (0..fft_size)
            .map(|i| {
                0.5 * (1.0 - (2.0 * std::f32::consts::PI * i as f32 / fft_size as f32).cos())
            })
            .collect();

        Ok(Self {
            config,
            hop_size: fft_size / 4,
            window,
            forward_fft,
            inverse_fft,
        })
    }

    pub fn config(&self) -> &SpectralGateConfig {
        &self.config
    }

    fn bins(&self) -> usize {
        self.config.fft_size / 2 + 1
    }

    fn frame_spectrum(
        &self,
        padded: &[f32],
        pos: usize,
        scratch: &mut [f32],
        spectrum: &mut [Complex<f32>],
    ) -> Result<(), NoiseReducerError> {
        let frame = &padded[pos..pos + self.config.fft_size];
        for ((dst, &s), &w) in scratch.iter_mut().zip(frame).zip(&self.window) {
            *dst = s * w;
        }
        self.forward_fft
            .process(scratch, spectrum)
            .map_err(|e| NoiseReducerError::ReductionFailed(format!("forward fft: {}", e)))
    }

    /// Per-bin gating threshold from magnitude mean and deviation.
    fn noise_threshold(
        &self,
        padded: &[f32],
        frame_starts: &[usize],
    ) -> Result<Vec<f32>, NoiseReducerError> {
        let bins = self.bins();
        let mut sum = vec![0.0f64; bins];
        let mut sum_sq = vec![0.0f64; bins];
        let mut scratch = self.forward_fft.make_input_vec();
        let mut spectrum = self.forward_fft.make_output_vec();

        for &pos in frame_starts {
            self.frame_spectrum(padded, pos, &mut scratch, &mut spectrum)?;
            for (i, c) in spectrum.iter().enumerate() {
                let mag = c.norm() as f64;
                sum[i] += mag;
                sum_sq[i] += mag * mag;
            }
        }

        let count = frame_starts.len().max(1) as f64;
        let k = self.config.n_std_threshold as f64;
        let per_bin: Vec<f32> = sum
            .iter()
            .zip(&sum_sq)
            .map(|(&s, &sq)| {
                let mean = s / count;
                let variance = (sq / count - mean * mean).max(0.0);
                (mean + k * variance.sqrt()) as f32
            })
            .collect();

        let floor = local_median(&per_bin, FLOOR_MEDIAN_HALF_WIDTH);
        Ok(per_bin
            .iter()
            .zip(&floor)
            .map(|(&own, &neighbourhood)| own.min(neighbourhood))
            .collect())
    }

    fn smooth_across_bins(&self, raw: &[f32], out: &mut [f32]) {
        let half = self.config.freq_smoothing_bins;
        if half == 0 {
            out.copy_from_slice(raw);
            return;
        }
        let len = raw.len();
        for (i, slot) in out.iter_mut().enumerate() {
            let lo = i.saturating_sub(half);
            let hi = (i + half + 1).min(len);
            let spread = raw[lo..hi].iter().sum::<f32>() / (hi - lo) as f32;
            *slot = spread.max(raw[i]);
        }
    }
}

impl NoiseReducer for SpectralGateReducer {
    fn reduce(&self, buffer: &SampleBuffer) -> Result<SampleBuffer, NoiseReducerError> {
        let fft_size = self.config.fft_size;
        let len = buffer.len();
        if len < fft_size {
            tracing::debug!(
                samples = len,
                fft_size,
                "Buffer shorter than one frame, skipping gate"
            );
            return Ok(buffer.clone());
        }
        if buffer.samples.iter().any(|s| !s.is_finite()) {
            return Err(NoiseReducerError::ReductionFailed(
                "input contains non-finite samples".to_string(),
            ));
        }

        let pad = fft_size / 2;
        let hop = self.hop_size;
        let body = len + 2 * pad;
        let frames = (body - fft_size).div_ceil(hop) + 1;
        let padded_len = fft_size + (frames - 1) * hop;

        let mut padded = vec![0.0f32; padded_len];
        padded[pad..pad + len].copy_from_slice(&buffer.samples);

        let frame_starts: Vec<usize> = (0..frames).map(|f| f * hop).collect();
        let threshold = self.noise_threshold(&padded, &frame_starts)?;

        let bins = self.bins();
        let mut scratch = self.forward_fft.make_input_vec();
        let mut spectrum = self.forward_fft.make_output_vec();
        let mut time_buf = self.inverse_fft.make_output_vec();
        let mut raw_mask = vec![0.0f32; bins];
        let mut freq_mask = vec![0.0f32; bins];
        let mut mask = vec![0.0f32; bins];
        let mut first_frame = true;

        let mut output = vec![0.0f32; padded_len];
        let mut window_sum = vec![0.0f32; padded_len];
        let norm = 1.0 / fft_size as f32;
        let alpha = self.config.time_smoothing;
        let decrease = self.config.prop_decrease;

        for &pos in &frame_starts {
            self.frame_spectrum(&padded, pos, &mut scratch, &mut spectrum)?;

            for (m, (c, &t)) in raw_mask.iter_mut().zip(spectrum.iter().zip(&threshold)) {
                *m = if c.norm() > t { 1.0 } else { 0.0 };
            }
            self.smooth_across_bins(&raw_mask, &mut freq_mask);

            if first_frame {
                mask.copy_from_slice(&freq_mask);
                first_frame = false;
            } else {
                for (m, &f) in mask.iter_mut().zip(&freq_mask) {
                    *m = alpha * *m + (1.0 - alpha) * f;
                }
            }

            for (c, &m) in spectrum.iter_mut().zip(&mask) {
                *c *= 1.0 - decrease * (1.0 - m);
            }
            // DC and Nyquist must be purely real for the inverse transform.
            spectrum[0].im = 0.0;
            spectrum[bins - 1].im = 0.0;

            self.inverse_fft
                .process(&mut spectrum, &mut time_buf)
                .map_err(|e| NoiseReducerError::ReductionFailed(format!("inverse fft: {}", e)))?;

            for (i, (&t, &w)) in time_buf.iter().zip(&self.window).enumerate() {
                output[pos + i] += t * norm * w;
                window_sum[pos + i] += w * w;
            }
        }

        let samples = (pad..pad + len)
            .map(|i| {
                if window_sum[i] > WINDOW_SUM_FLOOR {
                    output[i] / window_sum[i]
                } else {
                    0.0
                }
            })
            .collect();

        tracing::debug!(frames, bins, "Spectral gate applied");

        Ok(SampleBuffer::new(samples, buffer.sample_rate))
    }
}

fn local_median(values: &[f32], half_width: usize) -> Vec<f32> {
    let mut window = Vec::with_capacity(2 * half_width + 1);
    (0..values.len())
        .map(|i| {
            let lo = i.saturating_sub(half_width);
            let hi = (i + half_width + 1).min(values.len());
            window.clear();
            window.extend_from_slice(&values[lo..hi]);
            window.sort_by(|a, b| a.total_cmp(b));
            window[window.len() / 2]
        })
        .collect()
}

fn validate(config: &SpectralGateConfig) -> Result<(), NoiseReducerError> {
    if config.fft_size < MIN_FFT_SIZE || config.fft_size % 4 != 0 {
        return Err(NoiseReducerError::InvalidConfig(format!(
            "fft_size must be a multiple of 4 and at least {}, got {}",
            MIN_FFT_SIZE, config.fft_size
        )));
    }
    if !(0.0..=1.0).contains(&config.prop_decrease) {
        return Err(NoiseReducerError::InvalidConfig(format!(
            "prop_decrease must be within [0, 1], got {}",
            config.prop_decrease
        )));
    }
    if !config.n_std_threshold.is_finite() || config.n_std_threshold < 0.0 {
        return Err(NoiseReducerError::InvalidConfig(format!(
            "n_std_threshold must be a non-negative number, got {}",
            config.n_std_threshold
        )));
    }
    if !(0.0..1.0).contains(&config.time_smoothing) {
        return Err(NoiseReducerError::InvalidConfig(format!(
            "time_smoothing must be within [0, 1), got {}",
            config.time_smoothing
        )));
    }
    Ok(())
}
