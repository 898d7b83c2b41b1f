//! Problem image value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Image formats accepted for an uploaded problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Resolve a format from a file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Result<Self, DomainError> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "png" => Ok(ImageFormat::Png),
            other => Err(DomainError::UnsupportedImageFormat(other.to_string())),
        }
    }

    /// Resolve a format from a file path
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| DomainError::UnsupportedImageFormat(path.display().to_string()))?;
        Self::from_extension(ext)
    }

    /// MIME type sent to the multimodal endpoint
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }
}

/// A problem image: raw file bytes plus their format (Value Object)
///
/// Decoding is left to the remote endpoint; the bytes are forwarded as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemImage {
    data: Vec<u8>,
    format: ImageFormat,
}

impl ProblemImage {
    pub fn new(data: Vec<u8>, format: ImageFormat) -> Self {
        Self { data, format }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_accepted_extensions() {
        assert_eq!(ImageFormat::from_extension("jpg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("jpeg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("png").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_extension("PNG").unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_rejected_extensions() {
        assert!(ImageFormat::from_extension("gif").is_err());
        assert!(ImageFormat::from_extension("webp").is_err());
        assert!(ImageFormat::from_extension("").is_err());
    }

    #[test]
    fn test_from_path() {
        let path = PathBuf::from("/tmp/exercise.jpeg");
        assert_eq!(ImageFormat::from_path(&path).unwrap(), ImageFormat::Jpeg);

        let no_ext = PathBuf::from("/tmp/exercise");
        assert!(ImageFormat::from_path(&no_ext).is_err());
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ImageFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(ImageFormat::Png.mime_type(), "image/png");
    }
}
