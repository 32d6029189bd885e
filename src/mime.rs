use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::errors::PromptError;

/// Image MIME types accepted inside a data URI.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ImageMime {
    Jpeg,
    Png,
    Gif,
    Webp,
    Bmp,
    Tiff,
}

impl ImageMime {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMime::Jpeg => "image/jpeg",
            ImageMime::Png => "image/png",
            ImageMime::Gif => "image/gif",
            ImageMime::Webp => "image/webp",
            ImageMime::Bmp => "image/bmp",
            ImageMime::Tiff => "image/tiff",
        }
    }

    /// Guess the type from a file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PromptError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .ok_or_else(|| {
                PromptError::invalid(format!(
                    "cannot infer an image type for {} without an extension",
                    path.display()
                ))
            })?;

        match extension.as_str() {
            "jpg" | "jpeg" => Ok(ImageMime::Jpeg),
            "png" => Ok(ImageMime::Png),
            "gif" => Ok(ImageMime::Gif),
            "webp" => Ok(ImageMime::Webp),
            "bmp" => Ok(ImageMime::Bmp),
            "tif" | "tiff" => Ok(ImageMime::Tiff),
            other => Err(PromptError::invalid(format!(
                "unrecognized image extension: .{}",
                other
            ))),
        }
    }
}

impl FromStr for ImageMime {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Ok(ImageMime::Jpeg),
            "image/png" => Ok(ImageMime::Png),
            "image/gif" => Ok(ImageMime::Gif),
            "image/webp" => Ok(ImageMime::Webp),
            "image/bmp" => Ok(ImageMime::Bmp),
            "image/tiff" => Ok(ImageMime::Tiff),
            _ => Err(PromptError::invalid(format!(
                "not a recognized image MIME type: {:?}",
                s
            ))),
        }
    }
}

impl fmt::Display for ImageMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
