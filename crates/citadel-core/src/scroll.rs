//! Near-end detection for infinite scrolling.

/// Default fraction of the content that must be scrolled past
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 0.8;

/// Scroll position of the list container, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top
    pub offset: f64,
    /// Visible height of the container
    pub viewport: f64,
    /// Total height of the content
    pub content: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, viewport: f64, content: f64) -> Self {
        Self {
            offset,
            viewport,
            content,
        }
    }

    /// True once the bottom of the viewport has reached `threshold` of the
    /// content height. Content that fits entirely in the viewport counts as
    /// near the end, so a short first page still pulls the next one.
    pub fn near_end(&self, threshold: f64) -> bool {
        if self.content <= self.viewport {
            return true;
        }
        self.offset + self.viewport >= threshold * self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_end_threshold() {
        // 2000px of content in an 800px viewport: trigger at 1600px bottom edge
        assert!(!ScrollMetrics::new(0.0, 800.0, 2000.0).near_end(0.8));
        assert!(!ScrollMetrics::new(799.0, 800.0, 2000.0).near_end(0.8));
        assert!(ScrollMetrics::new(801.0, 800.0, 2000.0).near_end(0.8));
        assert!(ScrollMetrics::new(1200.0, 800.0, 2000.0).near_end(0.8));
    }

    #[test]
    fn test_short_content_is_near_end() {
        assert!(ScrollMetrics::new(0.0, 800.0, 500.0).near_end(0.8));
        assert!(ScrollMetrics::default().near_end(0.8));
    }
}
