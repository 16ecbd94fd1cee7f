use bytes::Bytes;

use super::{AudioFormat, OutputFilename};

/// Encoded output of one pipeline run. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedResult {
    pub data: Bytes,
    pub filename: OutputFilename,
    pub format: AudioFormat,
}

impl ProcessedResult {
    pub fn new(data: Bytes, filename: OutputFilename, format: AudioFormat) -> Self {
        Self {
            data,
            filename,
            format,
        }
    }

    pub fn content_type(&self) -> &'static str {
        self.format.as_mime()
    }
}
