use super::geometry::{ItemBox, SectionGeometry, ViewportMetrics};

/// What the carousel needs from the page it is mounted in.
///
/// Every read returns `None` while the relevant element is not attached, and
/// callers skip the update for that tick.
pub trait ScrollSurface {
    fn window_width(&self) -> Option<f64>;

    fn page_scroll_y(&self) -> Option<f64>;

    fn section_geometry(&self) -> Option<SectionGeometry>;

    fn viewport_metrics(&self) -> Option<ViewportMetrics>;

    fn track_scroll_left(&self) -> Option<f64>;

    /// Card boxes in track order, offsets relative to the track content.
    fn item_boxes(&self) -> Option<Vec<ItemBox>>;

    fn set_track_scroll_left(&mut self, left: f64);
}
