mod audio_format;
mod output_filename;
mod processed_result;
mod result_id;
mod sample_buffer;
mod storage_path;
mod uploaded_media;

pub use audio_format::AudioFormat;
pub use output_filename::{OutputFilename, sanitize_base_name};
pub use processed_result::ProcessedResult;
pub use result_id::ResultId;
pub use sample_buffer::SampleBuffer;
pub use storage_path::StoragePath;
pub use uploaded_media::UploadedMedia;
