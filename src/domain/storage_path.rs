use std::fmt;

use super::{OutputFilename, ResultId};

/// Object key of a stored result: `{result_id}/{filename}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(result_id: &ResultId, filename: &OutputFilename) -> Self {
        Self(format!("{}/{}", result_id, filename))
    }

    /// Directory holding everything stored under `result_id`.
    pub fn prefix(result_id: &ResultId) -> Self {
        Self(result_id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
