use bytes::Bytes;

use crate::domain::{AudioFormat, SampleBuffer};

pub trait AudioDecoder: Send + Sync {
    /// Decodes to mono at the source sample rate. `hint` only speeds up
    /// probing; content sniffing is authoritative. `data` is shared, not
    /// copied, with the caller.
    fn decode(
        &self,
        data: Bytes,
        hint: Option<AudioFormat>,
    ) -> Result<SampleBuffer, AudioCodecError>;
}

pub trait AudioEncoder: Send + Sync {
    fn encode(&self, buffer: &SampleBuffer) -> Result<Vec<u8>, AudioCodecError>;

    fn format(&self) -> AudioFormat;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioCodecError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("audio encoding failed: {0}")]
    EncodingFailed(String),
}
