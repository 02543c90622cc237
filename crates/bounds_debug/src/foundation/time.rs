//! Frame-driven countdowns
//!
//! Debug visuals measure their lifetime in rendered frames rather than
//! seconds, so the host advances these once per update.

/// Countdown measured in update ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCountdown {
    start: u32,
    remaining: u32,
}

impl FrameCountdown {
    /// Create a countdown starting at `start` ticks
    ///
    /// A start of 0 is raised to 1: the countdown always fires, at the
    /// latest on the first tick.
    pub fn new(start: u32) -> Self {
        let start = start.max(1);
        Self {
            start,
            remaining: start,
        }
    }
    
    /// Advance by one tick
    ///
    /// Decrements first, then reports whether zero was reached on this tick.
    /// A countdown already at zero stays there and does not fire again.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }
    
    /// Restart from the initial value
    pub fn reset(&mut self) {
        self.remaining = self.start;
    }
    
    /// Ticks left before the countdown fires
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_final_tick() {
        let mut countdown = FrameCountdown::new(3);
        assert!(!countdown.tick());
        assert!(!countdown.tick());
        assert!(countdown.tick());
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_does_not_fire_twice() {
        let mut countdown = FrameCountdown::new(1);
        assert!(countdown.tick());
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut countdown = FrameCountdown::new(10);
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.remaining(), 8);
        countdown.reset();
        assert_eq!(countdown.remaining(), 10);
    }

    #[test]
    fn test_zero_start_fires_on_first_tick() {
        let mut countdown = FrameCountdown::new(0);
        assert_eq!(countdown.remaining(), 1);
        assert!(countdown.tick());
        countdown.reset();
        assert_eq!(countdown.remaining(), 1);
    }
}
