mod audio_codec;
mod noise_reducer;
mod result_store;

pub use audio_codec::{AudioCodecError, AudioDecoder, AudioEncoder};
pub use noise_reducer::{NoiseReducer, NoiseReducerError};
pub use result_store::{ResultStore, ResultStoreError};
