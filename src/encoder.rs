//! Turns image bytes into the base64 text embedded in a data URI.
//!
//! Output always uses the standard alphabet with `=` padding and is never
//! line-wrapped, so it can be pasted straight into `data:<mime>;base64,...`.
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use crate::errors::{PromptError, PromptResult};

/// Where the image bytes come from. Exactly one of the two, always.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl ImageSource {
    pub fn path<P: Into<PathBuf>>(path: P) -> Self {
        ImageSource::Path(path.into())
    }

    pub fn bytes<B: Into<Vec<u8>>>(bytes: B) -> Self {
        ImageSource::Bytes(bytes.into())
    }

    /// Build a source from two optional inputs, rejecting neither and both.
    pub fn from_parts(path: Option<PathBuf>, bytes: Option<Vec<u8>>) -> PromptResult<Self> {
        match (path, bytes) {
            (Some(path), None) => Ok(ImageSource::Path(path)),
            (None, Some(bytes)) => Ok(ImageSource::Bytes(bytes)),
            (Some(_), Some(_)) => Err(PromptError::invalid(
                "expected an image path or an image buffer, got both",
            )),
            (None, None) => Err(PromptError::invalid(
                "expected an image path or an image buffer, got neither",
            )),
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        ImageSource::Bytes(bytes)
    }
}

/// Encode the image behind `source` as base64 text.
pub fn encode(source: &ImageSource) -> PromptResult<String> {
    match source {
        ImageSource::Path(path) => encode_file(path),
        ImageSource::Bytes(bytes) => Ok(encode_bytes(bytes)),
    }
}

/// Read `path` once and encode its contents.
pub fn encode_file<P: AsRef<Path>>(path: P) -> PromptResult<String> {
    let bytes = read_image(path.as_ref())?;
    Ok(encode_bytes(&bytes))
}

pub fn encode_bytes(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Inverse of [`encode_bytes`]; rejects anything that is not padded standard base64.
pub fn decode(text: &str) -> PromptResult<Vec<u8>> {
    BASE64
        .decode(text)
        .map_err(|e| PromptError::invalid(format!("not valid base64: {}", e)))
}

fn read_image(path: &Path) -> PromptResult<Vec<u8>> {
    let to_error = |source: io::Error| match source.kind() {
        ErrorKind::NotFound => PromptError::NotFound(path.to_path_buf()),
        _ => PromptError::Io {
            path: path.to_path_buf(),
            source,
        },
    };

    // Only regular files; pipes and devices may never reach EOF
    let metadata = fs::metadata(path).map_err(to_error)?;
    if !metadata.is_file() {
        return Err(PromptError::Io {
            path: path.to_path_buf(),
            source: io::Error::new(ErrorKind::InvalidInput, "not a regular file"),
        });
    }

    fs::read(path).map_err(to_error)
}
