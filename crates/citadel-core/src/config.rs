//! Runtime configuration shared by the desktop and CLI shells.

use crate::error::{GalleryError, GalleryResult};
use crate::i18n::Language;
use crate::scroll::DEFAULT_SCROLL_THRESHOLD;

/// Public Rick and Morty GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/graphql";

/// Gallery configuration.
///
/// Built from defaults and overridden by command-line arguments; nothing is
/// read from or written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    endpoint: String,
    language: Language,
    scroll_threshold: f64,
}

impl GalleryConfig {
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Fraction of the content height at which the next page is requested
    pub fn scroll_threshold(&self) -> f64 {
        self.scroll_threshold
    }

    /// Override the endpoint. Must be an http(s) URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> GalleryResult<Self> {
        let endpoint = endpoint.into();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(GalleryError::InvalidConfig(format!(
                "endpoint must be an http(s) URL, got '{}'",
                endpoint
            )));
        }
        self.endpoint = endpoint;
        Ok(self)
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Override the scroll threshold. Must be in `(0, 1]`.
    pub fn with_scroll_threshold(mut self, threshold: f64) -> GalleryResult<Self> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(GalleryError::InvalidConfig(format!(
                "scroll threshold must be in (0, 1], got {}",
                threshold
            )));
        }
        self.scroll_threshold = threshold;
        Ok(self)
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            language: Language::default(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.language(), Language::En);
        assert_eq!(config.scroll_threshold(), 0.8);
    }

    #[test]
    fn test_endpoint_validation() {
        assert!(GalleryConfig::default()
            .with_endpoint("http://localhost:4000/graphql")
            .is_ok());
        let err = GalleryConfig::default().with_endpoint("ftp://nope").unwrap_err();
        assert!(matches!(err, GalleryError::InvalidConfig(_)));
    }

    #[test]
    fn test_threshold_validation() {
        assert!(GalleryConfig::default().with_scroll_threshold(1.0).is_ok());
        assert!(GalleryConfig::default().with_scroll_threshold(0.0).is_err());
        assert!(GalleryConfig::default().with_scroll_threshold(1.5).is_err());
        assert!(GalleryConfig::default().with_scroll_threshold(f64::NAN).is_err());
    }
}
