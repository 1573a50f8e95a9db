//! Rate limiting for fetch triggers.
//!
//! Input events arrive in bursts as the user types; the throttle collapses
//! them to a bounded request volume. The gate is leading-edge: the first
//! trigger while open executes immediately and closes the gate for the
//! window, and triggers while closed are dropped outright, never queued or
//! replayed. Only the trigger is gated; async work started by an allowed
//! trigger is neither bounded nor cancelled here.

use std::time::{Duration, Instant};

/// A leading-edge gate that lets at most one trigger through per window.
#[derive(Debug, Clone)]
pub struct Throttle {
    window: Duration,
    closed_at: Option<Instant>,
}

impl Throttle {
    /// Creates an open gate with the given window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            closed_at: None,
        }
    }

    /// The minimum interval enforced between two allowed triggers.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Attempts to pass the gate.
    ///
    /// Returns `true` and closes the gate for the window if it was open;
    /// returns `false` while the gate is closed.
    pub fn allow(&mut self) -> bool {
        if let Some(at) = self.closed_at {
            if at.elapsed() < self.window {
                return false;
            }
        }
        self.closed_at = Some(Instant::now());
        true
    }

    /// Reopens the gate immediately, regardless of the window.
    pub fn reset(&mut self) {
        self.closed_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_burst_collapses_to_one_trigger() {
        let mut gate = Throttle::new(Duration::from_millis(500));
        let mut executed = 0;
        for _ in 0..3 {
            if gate.allow() {
                executed += 1;
            }
        }
        assert_eq!(executed, 1);
    }

    #[test]
    fn test_gate_reopens_after_window() {
        let mut gate = Throttle::new(Duration::from_millis(20));
        assert!(gate.allow());
        assert!(!gate.allow());
        sleep(Duration::from_millis(30));
        assert!(gate.allow());
    }

    #[test]
    fn test_zero_window_always_allows() {
        let mut gate = Throttle::new(Duration::ZERO);
        assert!(gate.allow());
        assert!(gate.allow());
    }

    #[test]
    fn test_reset_reopens_immediately() {
        let mut gate = Throttle::new(Duration::from_secs(500));
        assert!(gate.allow());
        assert!(!gate.allow());
        gate.reset();
        assert!(gate.allow());
    }
}
