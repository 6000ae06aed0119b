//! Event-driven state for the scroll-coupled character carousel.
//!
//! The controller never touches the DOM directly. The hosting component feeds
//! it browser events together with a [`ScrollSurface`] and a timestamp, renders
//! from [`CarouselView`], and runs any returned [`Schedule`] on a timer.

use log::{debug, info};

use super::geometry::{DisplayMode, ViewportMetrics};
use super::manual::ManualOverride;
use super::mapper::{
    active_index_for_progress, desktop_progress, nearest_to_center, scroll_left_for_progress,
    PinWindow,
};
use super::pin::PinState;
use super::surface::ScrollSurface;
use crate::config::CarouselConfig;

// Browsers round scrollLeft, so our own writes come back slightly off.
const ECHO_TOLERANCE_PX: f64 = 1.0;

/// Work the controller wants run later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Debounced nearest-card lookup in the touch layout.
    ResolveMobileActive,
    /// End of the quiet period after a manual track scroll.
    ReleaseOverride,
}

/// A timer request. Scheduling the same task again replaces the previous
/// request; only the latest ticket for a task has any effect when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub task: Deferred,
    pub delay_ms: u32,
    pub ticket: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub vertical_offset: f64,
    pub pin: PinState,
    pub horizontal_progress: f64,
    pub active_index: usize,
    pub manual_override_active: bool,
    pub completed: bool,
}

impl ScrollState {
    pub fn is_pinned(&self) -> bool {
        self.pin.is_pinned()
    }
}

/// Snapshot handed to the rendering layer after every event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselView {
    pub mode: DisplayMode,
    pub is_pinned: bool,
    pub horizontal_progress: f64,
    pub active_index: usize,
    pub completed: bool,
    pub manual_override_active: bool,
}

#[derive(Debug)]
pub struct CarouselController {
    config: CarouselConfig,
    item_count: usize,
    mode: DisplayMode,
    metrics: Option<ViewportMetrics>,
    state: ScrollState,
    manual: ManualOverride,
    // Offset we asked for and the offset the browser settled on (snapping can
    // move it). A track scroll event near either is our own write.
    last_programmatic_left: Option<f64>,
    settled_programmatic_left: Option<f64>,
    next_ticket: u64,
    pending_resolve: Option<u64>,
    pending_release: Option<u64>,
    mounted: bool,
}

impl CarouselController {
    pub fn new(config: CarouselConfig, item_count: usize) -> Self {
        Self {
            config,
            item_count,
            mode: DisplayMode::Desktop,
            metrics: None,
            state: ScrollState::default(),
            manual: ManualOverride::new(config.manual_override_ms),
            last_programmatic_left: None,
            settled_programmatic_left: None,
            next_ticket: 0,
            pending_resolve: None,
            pending_release: None,
            mounted: false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn view(&self) -> CarouselView {
        CarouselView {
            mode: self.mode,
            is_pinned: self.state.is_pinned(),
            horizontal_progress: self.state.horizontal_progress,
            active_index: self.state.active_index,
            completed: self.state.completed,
            manual_override_active: self.state.manual_override_active,
        }
    }

    /// Measures the page, picks the layout and performs the first sync.
    pub fn mount<S: ScrollSurface>(&mut self, surface: &mut S, now: f64) -> Option<Schedule> {
        self.mounted = true;
        let width = surface.window_width().unwrap_or(0.0);
        self.mode = DisplayMode::from_window_width(width, self.config.mobile_breakpoint);
        info!(
            "carousel mounted with {} items in {:?} layout",
            self.item_count, self.mode
        );
        self.enter_mode(surface, now)
    }

    /// Stops all further state changes. Timers that still fire become no-ops.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.pending_resolve = None;
        self.pending_release = None;
        debug!("carousel unmounted");
    }

    pub fn on_resize<S: ScrollSurface>(&mut self, surface: &mut S, now: f64) -> Option<Schedule> {
        if !self.mounted {
            return None;
        }
        let width = surface.window_width()?;
        let mode = DisplayMode::from_window_width(width, self.config.mobile_breakpoint);
        if mode != self.mode {
            info!("carousel switching to {:?} layout at {}px", mode, width);
            self.mode = mode;
            self.reset_coupling();
            return self.enter_mode(surface, now);
        }

        self.measure(surface);
        if self.mode == DisplayMode::Desktop {
            self.sync_to_page(surface, now);
        }
        None
    }

    pub fn on_page_scroll<S: ScrollSurface>(&mut self, surface: &mut S, now: f64) {
        if !self.mounted || self.mode.is_mobile() {
            return;
        }
        self.sync_to_page(surface, now);
    }

    /// Handles a scroll event raised by the track element itself.
    pub fn on_track_scroll<S: ScrollSurface>(&mut self, surface: &mut S, now: f64) -> Option<Schedule> {
        if !self.mounted {
            return None;
        }
        match self.mode {
            DisplayMode::Mobile => Some(self.queue_mobile_resolve()),
            DisplayMode::Desktop => {
                let left = surface.track_scroll_left()?;
                if self.is_echo(left) {
                    return None;
                }
                if !self.manual.is_set() {
                    debug!("manual track scroll at {}px, pausing scroll sync", left);
                }
                self.manual.trigger(now);
                self.state.manual_override_active = true;
                self.forget_programmatic();

                let ticket = self.issue_ticket();
                self.pending_release = Some(ticket);
                Some(Schedule {
                    task: Deferred::ReleaseOverride,
                    delay_ms: self.config.manual_override_ms,
                    ticket,
                })
            }
        }
    }

    /// Highlights a hovered card on desktop. Returns true if the view changed.
    pub fn on_card_hover(&mut self, index: usize) -> bool {
        if !self.mounted || self.mode.is_mobile() || index >= self.item_count {
            return false;
        }
        if self.state.active_index == index {
            return false;
        }
        self.state.active_index = index;
        true
    }

    /// Runs a timer previously requested through a [`Schedule`].
    pub fn run_deferred<S: ScrollSurface>(&mut self, schedule: Schedule, surface: &mut S, now: f64) {
        if !self.mounted {
            return;
        }
        match schedule.task {
            Deferred::ResolveMobileActive => {
                if self.pending_resolve != Some(schedule.ticket) {
                    return;
                }
                self.pending_resolve = None;
                self.resolve_mobile(surface);
            }
            Deferred::ReleaseOverride => {
                if self.pending_release != Some(schedule.ticket) {
                    return;
                }
                self.pending_release = None;
                self.manual.clear();
                self.state.manual_override_active = false;
                debug!("manual track scroll settled, resuming scroll sync");
                if self.mode == DisplayMode::Desktop {
                    self.sync_to_page(surface, now);
                }
            }
        }
    }

    fn enter_mode<S: ScrollSurface>(&mut self, surface: &mut S, now: f64) -> Option<Schedule> {
        self.measure(surface);
        match self.mode {
            DisplayMode::Desktop => {
                self.sync_to_page(surface, now);
                None
            }
            DisplayMode::Mobile => Some(self.queue_mobile_resolve()),
        }
    }

    fn reset_coupling(&mut self) {
        self.state.pin.release();
        self.manual.clear();
        self.state.manual_override_active = false;
        self.forget_programmatic();
        self.pending_resolve = None;
        self.pending_release = None;
    }

    fn measure<S: ScrollSurface>(&mut self, surface: &S) {
        if let Some(metrics) = surface.viewport_metrics() {
            debug!(
                "carousel track {}px of {}px in a {}px window",
                metrics.container_width, metrics.scrollable_width, metrics.window_width
            );
            self.metrics = Some(metrics);
        }
    }

    fn is_echo(&self, left: f64) -> bool {
        [self.last_programmatic_left, self.settled_programmatic_left]
            .into_iter()
            .flatten()
            .any(|ours| (left - ours).abs() <= ECHO_TOLERANCE_PX)
    }

    fn forget_programmatic(&mut self) {
        self.last_programmatic_left = None;
        self.settled_programmatic_left = None;
    }

    fn issue_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }

    fn queue_mobile_resolve(&mut self) -> Schedule {
        let ticket = self.issue_ticket();
        self.pending_resolve = Some(ticket);
        Schedule {
            task: Deferred::ResolveMobileActive,
            delay_ms: self.config.mobile_debounce_ms,
            ticket,
        }
    }

    fn sync_to_page<S: ScrollSurface>(&mut self, surface: &mut S, now: f64) {
        let (Some(scroll_y), Some(section)) = (surface.page_scroll_y(), surface.section_geometry())
        else {
            return;
        };
        self.state.vertical_offset = scroll_y;

        let inside = PinWindow::for_section(&section).contains(scroll_y);
        if self.state.pin.update(inside) {
            debug!("carousel pin changed at scroll offset {}px", self.state.vertical_offset);
        }
        if !inside {
            return;
        }

        if self.manual.expire(now) {
            self.state.manual_override_active = false;
        }
        if self.manual.is_active(now) {
            return;
        }

        let progress = desktop_progress(scroll_y, &section, self.config.pacing_factor);
        self.state.horizontal_progress = progress;
        self.state.active_index = active_index_for_progress(progress, self.item_count);
        self.state.completed = progress >= self.config.completion_threshold;

        if self.metrics.is_none() {
            self.measure(surface);
        }
        if let Some(metrics) = self.metrics {
            let left = scroll_left_for_progress(progress, &metrics);
            surface.set_track_scroll_left(left);
            self.last_programmatic_left = Some(left);
            self.settled_programmatic_left = surface.track_scroll_left();
        }
    }

    fn resolve_mobile<S: ScrollSurface>(&mut self, surface: &S) {
        if !self.mode.is_mobile() || self.item_count == 0 {
            return;
        }
        let (Some(left), Some(metrics), Some(items)) = (
            surface.track_scroll_left(),
            surface.viewport_metrics(),
            surface.item_boxes(),
        ) else {
            return;
        };
        self.metrics = Some(metrics);

        if let Some(index) = nearest_to_center(&items, left, metrics.container_width) {
            self.state.active_index = index.min(self.item_count - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::geometry::{ItemBox, SectionGeometry};

    struct FakeSurface {
        window_width: f64,
        scroll_y: f64,
        section: Option<SectionGeometry>,
        metrics: Option<ViewportMetrics>,
        track_left: f64,
        items: Option<Vec<ItemBox>>,
        writes: Vec<f64>,
        // Card pitch the track snaps writes to, like CSS scroll snapping.
        snap_pitch: Option<f64>,
    }

    impl FakeSurface {
        fn desktop() -> Self {
            Self {
                window_width: 1280.0,
                scroll_y: 0.0,
                // Pin window [1000, 2800), paced distance 1300.
                section: Some(SectionGeometry {
                    top: 1000.0,
                    height: 2500.0,
                    viewport_height: 1000.0,
                    pinned_height: 700.0,
                }),
                metrics: Some(ViewportMetrics {
                    container_width: 1280.0,
                    scrollable_width: 3880.0,
                    window_width: 1280.0,
                }),
                track_left: 0.0,
                items: None,
                writes: Vec::new(),
                snap_pitch: None,
            }
        }

        fn mobile() -> Self {
            Self {
                window_width: 375.0,
                scroll_y: 0.0,
                section: Some(SectionGeometry {
                    top: 800.0,
                    height: 700.0,
                    viewport_height: 800.0,
                    pinned_height: 600.0,
                }),
                metrics: Some(ViewportMetrics {
                    container_width: 375.0,
                    scrollable_width: 2400.0,
                    window_width: 375.0,
                }),
                track_left: 0.0,
                items: Some(
                    (0..7)
                        .map(|i| ItemBox::new(16.0 + i as f64 * 336.0, 320.0))
                        .collect(),
                ),
                writes: Vec::new(),
                snap_pitch: None,
            }
        }

        /// Simulates the user dragging the track.
        fn drag_track(&mut self, left: f64) {
            self.track_left = left;
        }
    }

    impl ScrollSurface for FakeSurface {
        fn window_width(&self) -> Option<f64> {
            Some(self.window_width)
        }

        fn page_scroll_y(&self) -> Option<f64> {
            Some(self.scroll_y)
        }

        fn section_geometry(&self) -> Option<SectionGeometry> {
            self.section
        }

        fn viewport_metrics(&self) -> Option<ViewportMetrics> {
            self.metrics
        }

        fn track_scroll_left(&self) -> Option<f64> {
            self.section.map(|_| self.track_left)
        }

        fn item_boxes(&self) -> Option<Vec<ItemBox>> {
            self.items.clone()
        }

        fn set_track_scroll_left(&mut self, left: f64) {
            self.track_left = match self.snap_pitch {
                Some(pitch) => (left / pitch).round() * pitch,
                None => left,
            };
            self.writes.push(left);
        }
    }

    fn mounted(surface: &mut FakeSurface, items: usize) -> (CarouselController, Option<Schedule>) {
        let mut controller = CarouselController::new(CarouselConfig::default(), items);
        let schedule = controller.mount(surface, 0.0);
        (controller, schedule)
    }

    fn scroll_to(controller: &mut CarouselController, surface: &mut FakeSurface, y: f64, now: f64) {
        surface.scroll_y = y;
        controller.on_page_scroll(surface, now);
    }

    #[test]
    fn test_mount_desktop_above_section() {
        let mut surface = FakeSurface::desktop();
        let (controller, schedule) = mounted(&mut surface, 7);
        assert!(schedule.is_none());
        assert_eq!(controller.view().mode, DisplayMode::Desktop);
        assert!(!controller.view().is_pinned);
        assert_eq!(controller.view().horizontal_progress, 0.0);
        assert!(surface.writes.is_empty());
    }

    #[test]
    fn test_pin_enter_and_exit_below_keeps_progress() {
        let mut surface = FakeSurface::desktop();
        let (mut controller, _) = mounted(&mut surface, 7);

        scroll_to(&mut controller, &mut surface, 1650.0, 10.0);
        let view = controller.view();
        assert!(view.is_pinned);
        assert!((view.horizontal_progress - 0.5).abs() < 1e-9);
        assert_eq!(view.active_index, 3);
        assert!((surface.track_left - 1300.0).abs() < 1e-9);

        scroll_to(&mut controller, &mut surface, 2800.0, 20.0);
        let view = controller.view();
        assert!(!view.is_pinned);
        assert!((view.horizontal_progress - 0.5).abs() < 1e-9);
        assert_eq!(view.active_index, 3);
        assert_eq!(surface.writes.len(), 1);
    }

    #[test]
    fn test_pin_exit_above_keeps_progress() {
        let mut surface = FakeSurface::desktop();
        let (mut controller, _) = mounted(&mut surface, 7);

        scroll_to(&mut controller, &mut surface, 1325.0, 10.0);
        let progress = controller.view().horizontal_progress;
        assert!((progress - 0.25).abs() < 1e-9);

        scroll_to(&mut controller, &mut surface, 400.0, 20.0);
        assert!(!controller.view().is_pinned);
        assert_eq!(controller.view().horizontal_progress, progress);
        assert_eq!(controller.state.vertical_offset, 400.0);

        scroll_to(&mut controller, &mut surface, 1000.0, 30.0);
        assert!(controller.view().is_pinned);
        assert_eq!(controller.view().horizontal_progress, 0.0);
    }

    #[test]
    fn test_progress_monotonic_through_window() {
        let mut surface = FakeSurface::desktop();
        let (mut controller, _) = mounted(&mut surface, 7);

        let mut previous = 0.0;
        let mut y = 1000.0;
        while y < 2800.0 {
            scroll_to(&mut controller, &mut surface, y, y);
            let view = controller.view();
            assert!(view.horizontal_progress >= previous);
            assert!((0.0..=1.0).contains(&view.horizontal_progress));
            assert!(view.active_index < 7);
            previous = view.horizontal_progress;
            y += 23.0;
        }
        assert_eq!(previous, 1.0);
        assert!(controller.view().completed);
        assert_eq!(controller.view().active_index, 6);
    }

    #[test]
    fn test_completed_threshold() {
        let mut surface = FakeSurface::desktop();
        let (mut controller, _) = mounted(&mut surface, 7);

        // 0.9 * 1300 = 1170
        scroll_to(&mut controller, &mut surface, 2170.0, 1.0);
        assert!(!controller.view().completed);
        // 0.96 * 1300 = 1248
        scroll_to(&mut controller, &mut surface, 2248.0, 2.0);
        assert!(controller.view().completed);
        scroll_to(&mut controller, &mut surface, 1100.0, 3.0);
        assert!(!controller.view().completed);
    }

    #[test]
    fn test_active_index_bounds_for_item_counts() {
        for count in 1..=9 {
            let mut surface = FakeSurface::desktop();
            let (mut controller, _) = mounted(&mut surface, count);
            let mut y = 900.0;
            while y < 2900.0 {
                scroll_to(&mut controller, &mut surface, y, y);
                assert!(controller.view().active_index <= count - 1);
                y += 50.0;
            }
        }
    }

    #[test]
    fn test_manual_override_suppresses_sync_then_resumes() {
        let mut surface = FakeSurface::desktop();
        let (mut controller, _) = mounted(&mut surface, 7);

        scroll_to(&mut controller, &mut surface, 1325.0, 1_000.0);
        assert_eq!(surface.writes.len(), 1);
        let progress = controller.view().horizontal_progress;

        surface.drag_track(2000.0);
        let schedule = controller
            .on_track_scroll(&mut surface, 1_100.0)
            .expect("manual scroll schedules a release");
        assert_eq!(schedule.task, Deferred::ReleaseOverride);
        assert_eq!(schedule.delay_ms, 1000);
        assert!(controller.view().manual_override_active);

        for step in 1..=9 {
            let now = 1_100.0 + step as f64 * 100.0;
            scroll_to(&mut controller, &mut surface, 1325.0 + step as f64 * 50.0, now);
            assert!(controller.view().is_pinned);
        }
        assert_eq!(surface.writes.len(), 1);
        assert_eq!(surface.track_left, 2000.0);
        assert_eq!(controller.view().horizontal_progress, progress);

        controller.run_deferred(schedule, &mut surface, 2_100.0);
        assert!(!controller.view().manual_override_active);
        assert_eq!(surface.writes.len(), 2);
        assert!(controller.view().horizontal_progress > progress);
    }

    #[test]
    fn test_manual_override_rescheduled_by_each_manual_scroll() {
        let mut surface = FakeSurface::desktop();
        let (mut controller, _) = mounted(&mut surface, 7);
        scroll_to(&mut controller, &mut surface, 1325.0, 0.0);

        surface.drag_track(900.0);
        let first = controller.on_track_scroll(&mut surface, 100.0).unwrap();
        surface.drag_track(950.0);
        let second = controller.on_track_scroll(&mut surface, 700.0).unwrap();
        assert_ne!(first.ticket, second.ticket);

        // The superseded timer fires but must not end the override.
        controller.run_deferred(first, &mut surface, 1_100.0);
        assert!(controller.view().manual_override_active);
        scroll_to(&mut controller, &mut surface, 1400.0, 1_200.0);
        assert_eq!(surface.writes.len(), 1);

        controller.run_deferred(second, &mut surface, 1_700.0);
        assert!(!controller.view().manual_override_active);
        assert_eq!(surface.writes.len(), 2);
    }

    #[test]
    fn test_programmatic_echo_is_not_manual() {
        let mut surface = FakeSurface::desktop();
        let (mut controller, _) = mounted(&mut surface, 7);
        scroll_to(&mut controller, &mut surface, 1650.0, 0.0);

        // The browser reports our own write back, rounded.
        surface.track_left = surface.track_left.round();
        assert!(controller.on_track_scroll(&mut surface, 5.0).is_none());
        assert!(!controller.view().manual_override_active);

        scroll_to(&mut controller, &mut surface, 1700.0, 10.0);
        assert_eq!(surface.writes.len(), 2);
    }

    #[test]
    fn test_snapped_write_is_not_manual() {
        let mut surface = FakeSurface::desktop();
        surface.snap_pitch = Some(136.0);
        let (mut controller, _) = mounted(&mut surface, 7);

        // Progress 0.25 asks for 650px; the track settles on 680px.
        scroll_to(&mut controller, &mut surface, 1325.0, 10.0);
        assert_eq!(surface.writes, vec![650.0]);
        assert!((surface.track_left - 680.0).abs() < 1e-9);

        assert!(controller.on_track_scroll(&mut surface, 20.0).is_none());
        assert!(!controller.view().manual_override_active);

        scroll_to(&mut controller, &mut surface, 1600.0, 30.0);
        assert_eq!(surface.writes.len(), 2);
        assert!(!controller.view().manual_override_active);
    }

    #[test]
    fn test_override_lapses_without_timer() {
        let mut surface = FakeSurface::desktop();
        let (mut controller, _) = mounted(&mut surface, 7);
        scroll_to(&mut controller, &mut surface, 1325.0, 0.0);

        surface.drag_track(10.0);
        controller.on_track_scroll(&mut surface, 100.0);
        scroll_to(&mut controller, &mut surface, 1400.0, 1_100.0);
        assert!(!controller.view().manual_override_active);
        assert_eq!(surface.writes.len(), 2);
    }

    #[test]
    fn test_zero_denominator_gives_zero_progress() {
        let mut surface = FakeSurface::desktop();
        surface.section = Some(SectionGeometry {
            top: 1000.0,
            height: 900.0,
            viewport_height: 1000.0,
            pinned_height: 700.0,
        });
        let (mut controller, _) = mounted(&mut surface, 7);

        scroll_to(&mut controller, &mut surface, 1100.0, 0.0);
        let view = controller.view();
        assert!(view.is_pinned);
        assert_eq!(view.horizontal_progress, 0.0);
        assert_eq!(view.active_index, 0);
        assert!(surface.writes.iter().all(|left| left.is_finite()));
    }

    #[test]
    fn test_missing_geometry_skips_update() {
        let mut surface = FakeSurface::desktop();
        let (mut controller, _) = mounted(&mut surface, 7);
        scroll_to(&mut controller, &mut surface, 1650.0, 0.0);
        let before = controller.view();

        surface.section = None;
        scroll_to(&mut controller, &mut surface, 2000.0, 10.0);
        assert_eq!(controller.view(), before);
        assert!(controller.on_track_scroll(&mut surface, 20.0).is_none());
    }

    #[test]
    fn test_mobile_resolves_nearest_card_after_debounce() {
        let mut surface = FakeSurface::mobile();
        let (mut controller, schedule) = mounted(&mut surface, 7);
        assert_eq!(controller.view().mode, DisplayMode::Mobile);
        let initial = schedule.expect("mobile mount resolves the active card");
        assert_eq!(initial.task, Deferred::ResolveMobileActive);
        assert_eq!(initial.delay_ms, 150);
        controller.run_deferred(initial, &mut surface, 150.0);
        assert_eq!(controller.view().active_index, 0);

        surface.drag_track(300.0);
        let early = controller.on_track_scroll(&mut surface, 200.0).unwrap();
        surface.drag_track(672.0);
        let late = controller.on_track_scroll(&mut surface, 260.0).unwrap();

        controller.run_deferred(early, &mut surface, 350.0);
        assert_eq!(controller.view().active_index, 0);
        controller.run_deferred(late, &mut surface, 410.0);
        assert_eq!(controller.view().active_index, 2);
    }

    #[test]
    fn test_mobile_never_pins_or_writes() {
        let mut surface = FakeSurface::mobile();
        let (mut controller, _) = mounted(&mut surface, 7);
        scroll_to(&mut controller, &mut surface, 850.0, 10.0);
        assert!(!controller.view().is_pinned);
        assert!(surface.writes.is_empty());
        assert!(!controller.on_card_hover(3));
    }

    #[test]
    fn test_mode_switch_resets_coupling() {
        let mut surface = FakeSurface::desktop();
        let (mut controller, _) = mounted(&mut surface, 7);
        scroll_to(&mut controller, &mut surface, 1650.0, 0.0);
        surface.drag_track(5.0);
        let release = controller.on_track_scroll(&mut surface, 10.0).unwrap();
        assert!(controller.view().is_pinned);

        surface.window_width = 400.0;
        surface.metrics = Some(ViewportMetrics {
            container_width: 400.0,
            scrollable_width: 2400.0,
            window_width: 400.0,
        });
        surface.items = Some(vec![ItemBox::new(16.0, 320.0), ItemBox::new(352.0, 320.0)]);
        let schedule = controller.on_resize(&mut surface, 20.0);

        let view = controller.view();
        assert_eq!(view.mode, DisplayMode::Mobile);
        assert!(!view.is_pinned);
        assert!(!view.manual_override_active);
        assert_eq!(schedule.map(|s| s.task), Some(Deferred::ResolveMobileActive));
        assert_eq!(controller.metrics.map(|m| m.container_width), Some(400.0));

        // The old desktop release timer no longer applies.
        controller.run_deferred(release, &mut surface, 1_010.0);
        assert_eq!(surface.writes.len(), 1);
    }

    #[test]
    fn test_resize_within_desktop_remeasures_and_resyncs() {
        let mut surface = FakeSurface::desktop();
        let (mut controller, _) = mounted(&mut surface, 7);
        scroll_to(&mut controller, &mut surface, 1650.0, 0.0);

        surface.window_width = 1000.0;
        surface.metrics = Some(ViewportMetrics {
            container_width: 1000.0,
            scrollable_width: 3000.0,
            window_width: 1000.0,
        });
        assert!(controller.on_resize(&mut surface, 10.0).is_none());
        assert!((surface.track_left - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_hover_sets_active_card_on_desktop() {
        let mut surface = FakeSurface::desktop();
        let (mut controller, _) = mounted(&mut surface, 7);
        assert!(controller.on_card_hover(4));
        assert_eq!(controller.view().active_index, 4);
        assert!(!controller.on_card_hover(4));
        assert!(!controller.on_card_hover(7));
    }

    #[test]
    fn test_no_state_changes_after_unmount() {
        let mut surface = FakeSurface::mobile();
        let (mut controller, _) = mounted(&mut surface, 7);
        surface.drag_track(672.0);
        let pending = controller.on_track_scroll(&mut surface, 10.0).unwrap();
        let before = controller.view();

        controller.unmount();
        controller.run_deferred(pending, &mut surface, 500.0);
        assert!(controller.on_track_scroll(&mut surface, 600.0).is_none());
        assert!(controller.on_resize(&mut surface, 700.0).is_none());
        assert_eq!(controller.view(), before);

        let mut surface = FakeSurface::desktop();
        let (mut controller, _) = mounted(&mut surface, 7);
        scroll_to(&mut controller, &mut surface, 1325.0, 0.0);
        surface.drag_track(50.0);
        let release = controller.on_track_scroll(&mut surface, 10.0).unwrap();
        let before = controller.view();
        controller.unmount();
        controller.run_deferred(release, &mut surface, 2_000.0);
        scroll_to(&mut controller, &mut surface, 2000.0, 2_100.0);
        assert!(!controller.on_card_hover(2));
        assert_eq!(controller.view(), before);
        assert_eq!(surface.writes.len(), 1);
        assert!(!controller.is_mounted());
    }
}
