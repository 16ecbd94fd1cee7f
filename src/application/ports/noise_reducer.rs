use crate::domain::SampleBuffer;

/// Must return a buffer with the same length and sample rate as its input.
pub trait NoiseReducer: Send + Sync {
    fn reduce(&self, buffer: &SampleBuffer) -> Result<SampleBuffer, NoiseReducerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NoiseReducerError {
    #[error("invalid noise reducer configuration: {0}")]
    InvalidConfig(String),
    #[error("noise reduction failed: {0}")]
    ReductionFailed(String),
}
