use bytes::Bytes;

use super::AudioFormat;

/// One upload, alive for the duration of a single request.
#[derive(Debug, Clone)]
pub struct UploadedMedia {
    pub data: Bytes,
    /// Client supplied and untrusted. Only used to derive the output name.
    pub original_name: String,
    pub format: Option<AudioFormat>,
}

impl UploadedMedia {
    /// The filename extension wins over the declared MIME type; browsers
    /// routinely send `application/octet-stream` for audio.
    pub fn new(data: Bytes, original_name: String, declared_mime: Option<&str>) -> Self {
        let format = AudioFormat::from_filename(&original_name)
            .or_else(|| declared_mime.and_then(AudioFormat::from_mime));
        Self {
            data,
            original_name,
            format,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
