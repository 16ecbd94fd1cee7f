use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    AudioCodecError, AudioDecoder, AudioEncoder, NoiseReducer, NoiseReducerError,
};
use crate::domain::{OutputFilename, ProcessedResult, UploadedMedia};

use super::normalizer::{normalize_peak, peak_amplitude};

/// decode -> denoise -> normalize -> encode for a single upload.
///
/// Synchronous and CPU bound; callers on an async runtime should run it on a
/// blocking thread.
pub struct ProcessingPipeline {
    decoder: Arc<dyn AudioDecoder>,
    noise_reducer: Arc<dyn NoiseReducer>,
    encoder: Arc<dyn AudioEncoder>,
}

impl ProcessingPipeline {
    pub fn new(
        decoder: Arc<dyn AudioDecoder>,
        noise_reducer: Arc<dyn NoiseReducer>,
        encoder: Arc<dyn AudioEncoder>,
    ) -> Self {
        Self {
            decoder,
            noise_reducer,
            encoder,
        }
    }

    #[tracing::instrument(
        skip(self, media),
        fields(original_name = %media.original_name, bytes = media.size_bytes())
    )]
    pub fn process(&self, media: &UploadedMedia) -> Result<ProcessedResult, ProcessingError> {
        if media.data.is_empty() {
            return Err(ProcessingError::Decode(AudioCodecError::DecodingFailed(
                "empty input".to_string(),
            )));
        }

        let decoded = self
            .decoder
            .decode(media.data.clone(), media.format)
            .map_err(ProcessingError::Decode)?;

        tracing::debug!(
            samples = decoded.len(),
            sample_rate = decoded.sample_rate,
            duration_secs = decoded.duration_secs(),
            "Audio decoded"
        );

        let mut denoised = self
            .noise_reducer
            .reduce(&decoded)
            .map_err(ProcessingError::Denoise)?;

        if denoised.sample_rate != decoded.sample_rate {
            return Err(ProcessingError::InconsistentOutput(format!(
                "sample rate changed from {} to {}",
                decoded.sample_rate, denoised.sample_rate
            )));
        }
        if denoised.len() != decoded.len() {
            return Err(ProcessingError::InconsistentOutput(format!(
                "length changed from {} to {} samples",
                decoded.len(),
                denoised.len()
            )));
        }

        let peak_before = peak_amplitude(&denoised.samples);
        normalize_peak(&mut denoised.samples);

        tracing::debug!(peak_before, "Denoised audio normalized");

        let encoded = self
            .encoder
            .encode(&denoised)
            .map_err(ProcessingError::Encode)?;

        let filename = OutputFilename::derive(&media.original_name, self.encoder.format());

        tracing::info!(
            filename = %filename,
            output_bytes = encoded.len(),
            "Audio processed"
        );

        Ok(ProcessedResult::new(
            Bytes::from(encoded),
            filename,
            self.encoder.format(),
        ))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("decode: {0}")]
    Decode(AudioCodecError),
    #[error("denoise: {0}")]
    Denoise(#[from] NoiseReducerError),
    #[error("denoise produced inconsistent output: {0}")]
    InconsistentOutput(String),
    #[error("encode: {0}")]
    Encode(AudioCodecError),
}
