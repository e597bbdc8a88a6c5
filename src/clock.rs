//! Per-animation frame clocks.
//!
//! A [`Clock`] is a start/stop handle that follows the display frame time.
//! Its owner ticks it once per frame; tweens only advance while it runs.

/// Frame clock handle for one animation
#[derive(Clone, Debug, Default)]
pub struct Clock {
    running: bool,
    /// Latest frame timestamp in milliseconds
    time: f64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin delivering frames. No-op if already running.
    pub fn start(&mut self) {
        if !self.running {
            log::trace!("clock started at {}ms", self.time);
            self.running = true;
        }
    }

    /// Stop delivering frames. No-op if not running.
    pub fn stop(&mut self) {
        if self.running {
            log::trace!("clock stopped at {}ms", self.time);
            self.running = false;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Record the current frame time
    pub fn tick(&mut self, now: f64) {
        self.time = now;
    }

    /// Timestamp of the latest frame
    pub fn time(&self) -> f64 {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_stop() {
        let mut clock = Clock::new();
        assert!(!clock.is_running());
        clock.start();
        assert!(clock.is_running());
        clock.stop();
        assert!(!clock.is_running());
    }

    #[test]
    fn test_start_and_stop_are_idempotent() {
        let mut clock = Clock::new();
        clock.stop();
        assert!(!clock.is_running());

        clock.start();
        clock.tick(32.0);
        clock.start();
        assert!(clock.is_running());
        assert_eq!(clock.time(), 32.0);
    }

    #[test]
    fn test_tick_tracks_frame_time_while_stopped() {
        let mut clock = Clock::new();
        clock.tick(16.0);
        clock.start();
        assert_eq!(clock.time(), 16.0);
    }
}
