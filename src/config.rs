use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose carousel tracing while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tuning values for the character carousel.
///
/// None of these carry a hard constraint; they were picked by eye and are kept
/// here so the page can be re-paced without touching the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Window widths below this (and above zero) switch to the touch layout.
    pub mobile_breakpoint: f64,
    /// Fraction of the viewport height subtracted from the scroll distance so
    /// the track reaches its end before the section does.
    pub pacing_factor: f64,
    /// Progress at which the horizontal run counts as finished.
    pub completion_threshold: f64,
    /// Quiet period after a manual track scroll before scroll sync resumes.
    pub manual_override_ms: u32,
    /// Debounce applied to native track scrolling in the touch layout.
    pub mobile_debounce_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768.0,
            pacing_factor: 0.5,
            completion_threshold: 0.95,
            manual_override_ms: 1000,
            mobile_debounce_ms: 150,
        }
    }
}

/// Monotonic milliseconds used to stamp carousel events. Falls back to the
/// wall clock when the page has no `performance` object.
pub fn now_ms() -> f64 {
    let performance = web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now());
    clock_ms(performance)
}

fn clock_ms(performance: Option<f64>) -> f64 {
    performance.unwrap_or_else(|| chrono::Utc::now().timestamp_millis() as f64)
}
