//! Scroll position rules for the message list

/// Distance from the bottom under which the list counts as "at the bottom"
pub const NEAR_BOTTOM_PX: f64 = 100.0;

/// Content must overflow the viewport by more than this before the
/// jump-to-bottom button is offered
pub const MIN_OVERFLOW_PX: f64 = 200.0;

/// Snapshot of a scroll container's geometry
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    pub fn distance_from_bottom(&self) -> f64 {
        self.scroll_height - self.scroll_top - self.client_height
    }

    pub fn is_near_bottom(&self) -> bool {
        self.distance_from_bottom() < NEAR_BOTTOM_PX
    }

    pub fn overflows(&self) -> bool {
        self.scroll_height > self.client_height + MIN_OVERFLOW_PX
    }

    /// Whether the "scroll to bottom" button should be visible
    pub fn shows_jump_button(&self) -> bool {
        !self.is_near_bottom() && self.overflows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_content_never_shows_button() {
        // Only 150px of overflow, even when scrolled to the very top
        let metrics = ScrollMetrics::new(0.0, 750.0, 600.0);
        assert!(!metrics.overflows());
        assert!(!metrics.shows_jump_button());
    }

    #[test]
    fn test_scrolled_up_in_long_content_shows_button() {
        let metrics = ScrollMetrics::new(0.0, 2000.0, 600.0);
        assert_eq!(metrics.distance_from_bottom(), 1400.0);
        assert!(metrics.shows_jump_button());
    }

    #[test]
    fn test_at_bottom_hides_button() {
        let metrics = ScrollMetrics::new(1400.0, 2000.0, 600.0);
        assert!(metrics.is_near_bottom());
        assert!(!metrics.shows_jump_button());
    }

    #[test]
    fn test_near_bottom_boundary() {
        assert!(ScrollMetrics::new(1301.0, 2000.0, 600.0).is_near_bottom());
        assert!(!ScrollMetrics::new(1300.0, 2000.0, 600.0).is_near_bottom());
        assert!(ScrollMetrics::new(1300.0, 2000.0, 600.0).shows_jump_button());
    }

    #[test]
    fn test_overflow_boundary() {
        assert!(!ScrollMetrics::new(0.0, 800.0, 600.0).overflows());
        assert!(ScrollMetrics::new(0.0, 801.0, 600.0).overflows());
    }
}
