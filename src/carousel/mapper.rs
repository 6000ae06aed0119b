//! Scroll position to carousel position.
//!
//! Desktop drives the track from the vertical page scroll; the touch layout
//! reads the track's own horizontal scroll and picks the card nearest the
//! middle. Both are plain functions over measured geometry.

use super::geometry::{ItemBox, SectionGeometry, ViewportMetrics};

/// Half-open range of page offsets during which the carousel is pinned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinWindow {
    pub start: f64,
    pub end: f64,
}

impl PinWindow {
    pub fn for_section(section: &SectionGeometry) -> Self {
        Self {
            start: section.top,
            end: section.top + section.height - section.pinned_height,
        }
    }

    pub fn contains(&self, scroll_y: f64) -> bool {
        scroll_y >= self.start && scroll_y < self.end
    }
}

/// Normalized horizontal progress for a page offset, clamped to `[0, 1]`.
///
/// The scroll distance is shortened by `viewport_height * pacing` so the track
/// runs out before the section ends. A collapsed section (images not loaded
/// yet) yields 0 rather than a NaN or infinite progress.
pub fn desktop_progress(scroll_y: f64, section: &SectionGeometry, pacing: f64) -> f64 {
    let distance = section.height - section.pinned_height - section.viewport_height * pacing;
    if !distance.is_finite() || distance <= 0.0 {
        return 0.0;
    }
    let raw = (scroll_y - section.top) / distance;
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 1.0)
}

pub fn scroll_left_for_progress(progress: f64, metrics: &ViewportMetrics) -> f64 {
    progress.clamp(0.0, 1.0) * metrics.max_scroll_left()
}

/// Card index for a progress value; always within `0..item_count` (or 0 when empty).
pub fn active_index_for_progress(progress: f64, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    let index = (progress * item_count as f64).floor() as usize;
    index.min(item_count - 1)
}

/// Index of the card whose centre sits closest to the track's visible centre.
///
/// Ties resolve to the earlier card. Returns `None` when there are no cards to
/// measure.
pub fn nearest_to_center(items: &[ItemBox], scroll_left: f64, container_width: f64) -> Option<usize> {
    let center = container_width / 2.0;
    let mut best: Option<(usize, f64)> = None;

    for (index, item) in items.iter().enumerate() {
        let distance = (item.visible_center(scroll_left) - center).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }

    best.map(|(index, _)| index)
}
