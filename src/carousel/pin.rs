use log::debug;

/// Whether the carousel header and track are fixed to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinState {
    #[default]
    Flowing,
    Pinned,
}

impl PinState {
    pub fn is_pinned(self) -> bool {
        matches!(self, PinState::Pinned)
    }

    /// Moves to the state implied by `inside_window`; returns true on a transition.
    pub fn update(&mut self, inside_window: bool) -> bool {
        let next = if inside_window {
            PinState::Pinned
        } else {
            PinState::Flowing
        };
        if next == *self {
            return false;
        }
        debug!("carousel pin {:?} -> {:?}", self, next);
        *self = next;
        true
    }

    pub fn release(&mut self) -> bool {
        self.update(false)
    }
}
