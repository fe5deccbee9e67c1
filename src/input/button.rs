//! Time-debounced toggle button.
//!
//! ## Hardware
//!
//! Active-low momentary switch with external pull-up, sampled by the
//! polling loop. A falling edge (released → pressed) requests a toggle;
//! the request is accepted only if at least `debounce_ms` has elapsed
//! since the last *accepted* toggle. Elapsed time is the sole debounce
//! criterion — intermediate edges within the window are discarded
//! outright, not re-armed.

/// Debounced toggle-button state machine.
#[derive(Debug, Clone)]
pub struct ToggleButton {
    debounce_ms: u32,
    /// Previous sampled level (true = HIGH = released).
    last_level: bool,
    /// Timestamp of the last accepted toggle, ms since boot.
    last_accepted_ms: u32,
    /// No toggle accepted yet — the first edge is always accepted.
    armed: bool,
}

impl ToggleButton {
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            last_level: true,
            last_accepted_ms: 0,
            armed: true,
        }
    }

    /// Feed one raw level sample. Returns `true` when a debounced toggle
    /// is accepted on this sample.
    pub fn poll(&mut self, level: bool, now_ms: u32) -> bool {
        let falling = self.last_level && !level;
        self.last_level = level;

        if !falling {
            return false;
        }

        if !self.armed && now_ms.wrapping_sub(self.last_accepted_ms) < self.debounce_ms {
            return false;
        }

        self.armed = false;
        self.last_accepted_ms = now_ms;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_falling_edge_accepted() {
        let mut btn = ToggleButton::new(200);
        assert!(!btn.poll(true, 0));
        assert!(btn.poll(false, 10));
    }

    #[test]
    fn held_low_is_not_retriggered() {
        let mut btn = ToggleButton::new(200);
        assert!(btn.poll(false, 10));
        assert!(!btn.poll(false, 20));
        assert!(!btn.poll(false, 500));
    }

    #[test]
    fn edge_within_window_ignored() {
        let mut btn = ToggleButton::new(200);
        assert!(btn.poll(false, 100));
        // Release, then bounce back low 50 ms later — inside the window.
        assert!(!btn.poll(true, 120));
        assert!(!btn.poll(false, 150));
    }

    #[test]
    fn edge_after_window_accepted() {
        let mut btn = ToggleButton::new(200);
        assert!(btn.poll(false, 100));
        assert!(!btn.poll(true, 150));
        assert!(btn.poll(false, 301));
    }

    #[test]
    fn window_measured_from_accepted_toggle_not_last_edge() {
        let mut btn = ToggleButton::new(200);
        assert!(btn.poll(false, 100));
        // Bounces at 150 and 250 are both discarded without re-arming…
        assert!(!btn.poll(true, 140));
        assert!(!btn.poll(false, 150));
        assert!(!btn.poll(true, 240));
        assert!(!btn.poll(false, 250));
        // …so an edge at 320 (220 ms after the accepted toggle) passes.
        assert!(!btn.poll(true, 310));
        assert!(btn.poll(false, 320));
    }

    #[test]
    fn wrapping_timestamp_still_debounces() {
        let mut btn = ToggleButton::new(200);
        assert!(btn.poll(false, u32::MAX - 50));
        assert!(!btn.poll(true, u32::MAX - 20));
        // 100 ms after wrap-around: 50 + 50 elapsed < 200, still inside.
        assert!(!btn.poll(false, 49));
        assert!(!btn.poll(true, 60));
        // Well past the window after wrapping.
        assert!(btn.poll(false, 400));
    }
}
