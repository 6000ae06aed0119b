//! Flickering strip light above the character carousel.
//!
//! The light is an endless sequence of frames; the component shows each one
//! for its duration and then asks for the next.

// (base duration in ms, opacity). The last step is the long steady glow.
const STEPS: [(u32, f64); 9] = [
    (120, 0.5),
    (40, 0.2),
    (100, 0.8),
    (60, 0.3),
    (10, 0.05),
    (5, 0.0),
    (90, 0.6),
    (20, 0.1),
    (4000, 0.7),
];

const MAX_JITTER_MS: f64 = 110.0;
const BLACKOUT_CHANCE: f64 = 0.06;
const BLACKOUT_MIN_MS: f64 = 60.0;
const BLACKOUT_SPREAD_MS: f64 = 120.0;
const GLOW_SCALE: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlickerFrame {
    pub duration_ms: u32,
    pub opacity: f64,
    pub lit: bool,
}

impl FlickerFrame {
    pub fn glow_opacity(&self) -> f64 {
        if self.lit {
            self.opacity * GLOW_SCALE
        } else {
            0.0
        }
    }

    /// Blur radius that grows with brightness.
    pub fn blur_px(&self) -> f64 {
        15.0 + self.glow_opacity() * 25.0
    }
}

impl Default for FlickerFrame {
    fn default() -> Self {
        Self {
            duration_ms: STEPS[0].0,
            opacity: STEPS[0].1,
            lit: true,
        }
    }
}

/// Endless frame source. `random` must return values in `[0, 1)`.
pub struct FlickerFrames<R> {
    random: R,
    step: usize,
    // Lit frame held back while a blackout frame plays first.
    queued: Option<FlickerFrame>,
}

impl<R: FnMut() -> f64> FlickerFrames<R> {
    pub fn new(random: R) -> Self {
        Self {
            random,
            step: 0,
            queued: None,
        }
    }
}

impl<R: FnMut() -> f64> Iterator for FlickerFrames<R> {
    type Item = FlickerFrame;

    fn next(&mut self) -> Option<FlickerFrame> {
        if let Some(frame) = self.queued.take() {
            return Some(frame);
        }

        let index = self.step;
        self.step = (self.step + 1) % STEPS.len();
        let (base, opacity) = STEPS[index];

        let jitter = ((self.random)() * MAX_JITTER_MS) as u32;
        let frame = FlickerFrame {
            duration_ms: base + jitter,
            opacity,
            lit: true,
        };

        let is_steady = index == STEPS.len() - 1;
        if !is_steady && (self.random)() < BLACKOUT_CHANCE {
            let blackout = (BLACKOUT_MIN_MS + (self.random)() * BLACKOUT_SPREAD_MS) as u32;
            self.queued = Some(frame);
            return Some(FlickerFrame {
                duration_ms: blackout,
                opacity,
                lit: false,
            });
        }

        Some(frame)
    }
}
