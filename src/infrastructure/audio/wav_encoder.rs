use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::application::ports::{AudioCodecError, AudioEncoder};
use crate::domain::{AudioFormat, SampleBuffer};

/// Writes mono 16-bit PCM WAV into memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct WavEncoder;

impl AudioEncoder for WavEncoder {
    fn encode(&self, buffer: &SampleBuffer) -> Result<Vec<u8>, AudioCodecError> {
        if buffer.sample_rate == 0 {
            return Err(AudioCodecError::EncodingFailed(
                "sample rate must be non-zero".to_string(),
            ));
        }

        let spec = WavSpec {
            channels: 1,
            sample_rate: buffer.sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };

        let mut bytes = Vec::with_capacity(44 + buffer.len() * 2);
        {
            let mut writer = WavWriter::new(Cursor::new(&mut bytes), spec)
                .map_err(|e| AudioCodecError::EncodingFailed(format!("header: {}", e)))?;

            for &sample in &buffer.samples {
                writer
                    .write_sample(to_pcm16(sample))
                    .map_err(|e| AudioCodecError::EncodingFailed(format!("sample: {}", e)))?;
            }

            writer
                .finalize()
                .map_err(|e| AudioCodecError::EncodingFailed(format!("finalize: {}", e)))?;
        }

        Ok(bytes)
    }

    fn format(&self) -> AudioFormat {
        AudioFormat::Wav
    }
}

fn to_pcm16(sample: f32) -> i16 {
    if !sample.is_finite() {
        return 0;
    }
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16
}
