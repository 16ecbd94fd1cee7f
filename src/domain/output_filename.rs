use std::fmt;

use uuid::Uuid;

use super::AudioFormat;

const MAX_BASE_LEN: usize = 64;
const TOKEN_LEN: usize = 8;
const FALLBACK_BASE: &str = "audio";
const SUFFIX: &str = "denoised";

/// Download name of a processed file. Only ever contains `[A-Za-z0-9._-]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFilename(String);

impl OutputFilename {
    /// `{base}_denoised_{token}.{ext}` with a fresh 8 hex char token.
    pub fn derive(original_name: &str, format: AudioFormat) -> Self {
        let token = Uuid::new_v4().simple().to_string();
        Self::with_token(original_name, &token[..TOKEN_LEN], format)
    }

    pub fn with_token(original_name: &str, token: &str, format: AudioFormat) -> Self {
        let base = sanitize_base_name(original_name);
        let token = sanitize_segment(token);
        Self(format!("{}_{}_{}.{}", base, SUFFIX, token, format.extension()))
    }

    /// Rebuilds a name read back from storage. Rejects anything that
    /// could not have been produced by [`OutputFilename::derive`].
    pub fn from_stored(raw: &str) -> Option<Self> {
        let valid = !raw.is_empty()
            && !raw.starts_with('.')
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        valid.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutputFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Last path component of an untrusted filename, extension stripped and
/// constrained to a URL and header safe alphabet.
pub fn sanitize_base_name(original_name: &str) -> String {
    let name = original_name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(original_name);

    let stem = match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    };

    let cleaned = sanitize_segment(stem);
    if cleaned.is_empty() {
        FALLBACK_BASE.to_string()
    } else {
        cleaned
    }
}

fn sanitize_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        let c = if c.is_ascii_alphanumeric() || c == '-' {
            c
        } else {
            '_'
        };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }

    let trimmed = out.trim_matches(|c: char| c == '_' || c == '-');
    let truncated: String = trimmed.chars().take(MAX_BASE_LEN).collect();
    truncated
        .trim_end_matches(|c: char| c == '_' || c == '-')
        .to_string()
}
