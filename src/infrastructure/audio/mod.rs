mod spectral_gate;
mod symphonia_decoder;
mod wav_encoder;

pub use spectral_gate::{SpectralGateConfig, SpectralGateReducer};
pub use symphonia_decoder::SymphoniaAudioDecoder;
pub use wav_encoder::WavEncoder;
