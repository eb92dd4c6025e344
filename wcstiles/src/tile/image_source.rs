//! Deferred image references.

use std::fmt;

/// A deferred reference to image data.
///
/// An image source only records where the image can be obtained. Resolving it
/// into pixels is the job of the image loading subsystem; nothing in this
/// crate fetches or decodes the referenced image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageSource {
    url: String,
}

impl ImageSource {
    /// Creates an image source backed by a URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The URL the image will be loaded from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}
