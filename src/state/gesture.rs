// One-dimensional drag tracking for the popup gallery.

/// Slide width used when no gallery configuration overrides it.
pub const DEFAULT_SLIDE_WIDTH: f64 = 250.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDecision {
    Advance,
    Retreat,
    SnapBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GestureOutcome {
    pub new_index: usize,
    pub should_animate: bool,
    pub decision: SwipeDecision,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureTracker {
    slide_width: f64,
    start_x: f64,
    dragging: bool,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SLIDE_WIDTH)
    }
}

impl GestureTracker {
    pub fn new(slide_width: f64) -> Self {
        Self {
            slide_width,
            start_x: 0.0,
            dragging: false,
        }
    }

    /// Minimum drag distance that commits a slide change.
    pub fn threshold(&self) -> f64 {
        self.slide_width / 3.0
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin(&mut self, x: f64) {
        self.start_x = x;
        self.dragging = true;
    }

    /// Offset from the press point; 0 when no drag is active.
    pub fn move_to(&self, x: f64) -> f64 {
        if !self.dragging {
            return 0.0;
        }
        x - self.start_x
    }

    pub fn end(&mut self, offset: f64, current_index: usize, slide_count: usize) -> GestureOutcome {
        if !self.dragging {
            return GestureOutcome {
                new_index: current_index,
                should_animate: true,
                decision: SwipeDecision::SnapBack,
            };
        }
        self.dragging = false;
        if slide_count == 0 {
            return GestureOutcome {
                new_index: 0,
                should_animate: true,
                decision: SwipeDecision::SnapBack,
            };
        }
        let threshold = self.threshold();
        let decision = if offset < -threshold && current_index + 1 < slide_count {
            SwipeDecision::Advance
        } else if offset > threshold && current_index > 0 {
            SwipeDecision::Retreat
        } else {
            SwipeDecision::SnapBack
        };
        let new_index = match decision {
            SwipeDecision::Advance => current_index + 1,
            SwipeDecision::Retreat => current_index - 1,
            SwipeDecision::SnapBack => current_index,
        };
        GestureOutcome {
            new_index,
            should_animate: true,
            decision,
        }
    }
}
