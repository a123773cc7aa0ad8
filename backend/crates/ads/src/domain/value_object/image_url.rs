//! Image URL Value Object
//!
//! Absolute `http`/`https` URL whose path ends in a supported image
//! extension. The extension is compared case-insensitively and the query
//! string and fragment are ignored (`/a.PNG?w=200` is fine).

use std::fmt;

use url::Url;

use crate::domain::value_object::AdvertisementError;

/// Supported image extensions
pub const IMAGE_FORMATS: &[&str] = &["jpg", "jpeg", "png", "webp"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn new(raw: impl Into<String>) -> Result<Self, AdvertisementError> {
        let raw = raw.into();
        let url = Url::parse(&raw).map_err(|_| AdvertisementError::WrongUrl)?;

        if !matches!(url.scheme(), "http" | "https") || url.host().is_none() {
            return Err(AdvertisementError::WrongUrl);
        }

        let file_name = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default();

        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if !IMAGE_FORMATS.contains(&extension.as_str()) {
            return Err(AdvertisementError::WrongImageFormat);
        }

        Ok(Self(raw))
    }

    /// Rebuild from a stored value
    pub fn from_trusted(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_formats() {
        for url in [
            "https://x.com/a.webp",
            "https://x.com/a.jpg",
            "http://x.com/img/a.JPEG",
            "https://cdn.example.org/p/photo.Png?w=200#top",
        ] {
            assert!(ImageUrl::new(url).is_ok(), "{url} should be accepted");
        }
    }

    #[test]
    fn test_unsupported_formats() {
        for url in [
            "https://x.com/a.GIF",
            "https://x.com/a",
            "https://x.com/",
            "https://x.com/a.png/",
            "https://x.com/png",
            "https://x.com/a.png.exe",
        ] {
            assert_eq!(
                ImageUrl::new(url),
                Err(AdvertisementError::WrongImageFormat),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_malformed_urls() {
        for url in ["", "not a url", "x.com/a.png", "/a.png", "ftp://x.com/a.png", "data:image/png;base64,AAAA"] {
            assert_eq!(
                ImageUrl::new(url),
                Err(AdvertisementError::WrongUrl),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_kept_as_entered() {
        let url = ImageUrl::new("https://x.com/A.PNG").unwrap();
        assert_eq!(url.as_str(), "https://x.com/A.PNG");
    }
}
