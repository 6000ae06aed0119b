/// Quiet period that starts whenever the user scrolls the track by hand.
///
/// Every trigger pushes the deadline out again, so the override only lapses
/// once the user has left the track alone for the whole window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualOverride {
    quiescence_ms: f64,
    deadline: Option<f64>,
}

impl ManualOverride {
    pub fn new(quiescence_ms: u32) -> Self {
        Self {
            quiescence_ms: f64::from(quiescence_ms),
            deadline: None,
        }
    }

    pub fn trigger(&mut self, now: f64) {
        self.deadline = Some(now + self.quiescence_ms);
    }

    pub fn is_active(&self, now: f64) -> bool {
        matches!(self.deadline, Some(deadline) if now < deadline)
    }

    /// Flag as seen by the rendering side, independent of the clock.
    pub fn is_set(&self) -> bool {
        self.deadline.is_some()
    }

    /// Clears the override if its window has passed. Returns true when it did.
    pub fn expire(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.deadline = None;
    }
}
