//! Swipe gesture recognition.
//!
//! A small state machine over an abstract pointer-event stream — mouse
//! and touch are fed in uniformly as (x, y) samples, so the recognizer is
//! testable without a real input device. One press → move → release
//! sequence yields at most one [`SwipeDirection`].

/// Movement below this (in panel coordinates) is treated as jitter.
const NOISE_THRESHOLD: f64 = 1.0;

/// A committed horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Pointer travelled left — content advances.
    Next,
    /// Pointer travelled right — content goes back.
    Previous,
}

/// Pointer input, normalized across mouse and touch sources.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    /// Release carries the width of the panel the gesture happened on;
    /// the commit threshold is a third of it.
    Release { panel_width: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Tracking {
        origin_x: f64,
        origin_y: f64,
        // Origin-relative: positive when the pointer travelled left/up.
        delta_x: f64,
        delta_y: f64,
        // Sticky until release.
        swiping: bool,
    },
}

/// Per-gesture state. Re-create (or [`reset`](Self::reset)) whenever the
/// panel it watches is replaced by a different view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    phase: Phase,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Feed one pointer event. Returns a direction only for a release
    /// that commits a swipe.
    pub fn on_event(&mut self, event: PointerEvent) -> Option<SwipeDirection> {
        match event {
            PointerEvent::Press { x, y } => {
                self.press(x, y);
                None
            }
            PointerEvent::Move { x, y } => {
                self.moved(x, y);
                None
            }
            PointerEvent::Release { panel_width } => self.release(panel_width),
        }
    }

    /// Start tracking. A new press discards any in-flight gesture.
    pub fn press(&mut self, x: f64, y: f64) {
        self.phase = Phase::Tracking {
            origin_x: x,
            origin_y: y,
            delta_x: 0.0,
            delta_y: 0.0,
            swiping: false,
        };
    }

    /// Update the delta from the press origin. Ignored while idle.
    pub fn moved(&mut self, x: f64, y: f64) {
        let Phase::Tracking {
            origin_x,
            origin_y,
            delta_x,
            delta_y,
            swiping,
        } = &mut self.phase
        else {
            return;
        };

        *delta_x = *origin_x - x;
        *delta_y = *origin_y - y;

        if delta_x.abs() > NOISE_THRESHOLD || delta_y.abs() > NOISE_THRESHOLD {
            *swiping = true;
        }
    }

    /// End the gesture. Commits a transition when the movement was
    /// marked as a swipe, horizontally dominant, and longer than a third
    /// of the panel width. All per-gesture state resets either way.
    pub fn release(&mut self, panel_width: f64) -> Option<SwipeDirection> {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);

        let Phase::Tracking {
            delta_x,
            delta_y,
            swiping,
            ..
        } = phase
        else {
            return None;
        };

        if !swiping || delta_x.abs() <= delta_y.abs() || delta_x.abs() <= panel_width / 3.0 {
            return None;
        }

        if delta_x > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    }

    /// Drop any in-flight gesture (panel detached or replaced).
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// True once the current gesture crossed the noise threshold.
    pub fn is_swiping(&self) -> bool {
        matches!(self.phase, Phase::Tracking { swiping: true, .. })
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}
