use std::io::Cursor;

use bytes::Bytes;
use symphonia::core::audio::SampleBuffer as InterleavedBuffer;
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioCodecError, AudioDecoder};
use crate::domain::{AudioFormat, SampleBuffer};

/// Decodes any container symphonia can probe into mono `f32` PCM at the
/// source sample rate.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymphoniaAudioDecoder;

impl AudioDecoder for SymphoniaAudioDecoder {
    fn decode(
        &self,
        data: Bytes,
        hint: Option<AudioFormat>,
    ) -> Result<SampleBuffer, AudioCodecError> {
        if data.is_empty() {
            return Err(AudioCodecError::DecodingFailed("empty input".to_string()));
        }

        let cursor = Cursor::new(data);
        let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

        let mut probe_hint = Hint::new();
        if let Some(format) = hint {
            probe_hint.with_extension(format.extension());
        }

        let probed = symphonia::default::get_probe()
            .format(
                &probe_hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioCodecError::UnsupportedFormat(format!("probe: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| AudioCodecError::DecodingFailed("no audio track found".to_string()))?;

        let track_id = track.id;
        let codec_params = track.codec_params.clone();
        let sample_rate = codec_params
            .sample_rate
            .ok_or_else(|| AudioCodecError::DecodingFailed("unknown sample rate".to_string()))?;

        let mut decoder = symphonia::default::get_codecs()
            .make(&codec_params, &DecoderOptions::default())
            .map_err(|e| AudioCodecError::UnsupportedFormat(format!("codec: {}", e)))?;

        let mut mono: Vec<f32> = Vec::new();
        let mut skipped_frames: usize = 0;

        loop {
            let packet = match format.next_packet() {
                Ok(p) => p,
                Err(SymphoniaError::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(SymphoniaError::ResetRequired) => break,
                Err(e) => {
                    return Err(AudioCodecError::DecodingFailed(format!("packet: {}", e)));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(d) => d,
                Err(SymphoniaError::DecodeError(e)) => {
                    tracing::warn!(error = %e, "Skipping corrupt audio frame");
                    skipped_frames += 1;
                    continue;
                }
                Err(e) => {
                    return Err(AudioCodecError::DecodingFailed(format!("decode: {}", e)));
                }
            };

            let spec = *decoded.spec();
            let num_frames = decoded.frames();
            if num_frames == 0 {
                continue;
            }

            let channels = spec.channels.count().max(1);
            let mut interleaved = InterleavedBuffer::<f32>::new(num_frames as u64, spec);
            interleaved.copy_interleaved_ref(decoded);
            let samples = interleaved.samples();

            if channels > 1 {
                mono.extend(
                    samples
                        .chunks(channels)
                        .map(|frame| frame.iter().sum::<f32>() / channels as f32),
                );
            } else {
                mono.extend_from_slice(samples);
            }
        }

        if mono.is_empty() {
            return Err(AudioCodecError::DecodingFailed(
                "no audio samples decoded".to_string(),
            ));
        }

        let buffer = SampleBuffer::new(mono, sample_rate);

        tracing::debug!(
            samples = buffer.len(),
            sample_rate,
            duration_secs = buffer.duration_secs(),
            skipped_frames,
            "Audio decoded to mono PCM"
        );

        Ok(buffer)
    }
}
