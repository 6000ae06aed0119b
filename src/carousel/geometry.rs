/// Which of the two carousel layouts is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Desktop,
    Mobile,
}

impl DisplayMode {
    /// A zero width means the window has not been measured yet, which is
    /// treated as desktop so the first paint does not flash the touch layout.
    pub fn from_window_width(window_width: f64, breakpoint: f64) -> Self {
        if window_width > 0.0 && window_width < breakpoint {
            DisplayMode::Mobile
        } else {
            DisplayMode::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, DisplayMode::Mobile)
    }
}

/// Widths of the track and the window, refreshed on mount, resize and mode switch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    pub container_width: f64,
    pub scrollable_width: f64,
    pub window_width: f64,
}

impl ViewportMetrics {
    /// Horizontal distance the track can travel.
    pub fn max_scroll_left(&self) -> f64 {
        (self.scrollable_width - self.container_width).max(0.0)
    }
}

/// Vertical layout of the carousel section, all in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
    pub pinned_height: f64,
}

/// Offset and width of one card inside the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBox {
    pub left: f64,
    pub width: f64,
}

impl ItemBox {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Centre of the card relative to the visible part of the track.
    pub fn visible_center(&self, scroll_left: f64) -> f64 {
        self.left + self.width / 2.0 - scroll_left
    }
}
