/// Delay-then-trigger timer that dims the controller after inactivity.
///
/// The deadline is polled from the frame loop, so a cancelled timer can never
/// fire afterwards.
#[derive(Clone, Debug)]
pub struct IdleTimer {
    delay_ms: f64,
    deadline: Option<f64>,
}

impl IdleTimer {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Schedule the trigger `delay_ms` after `now`, replacing any pending one
    pub fn arm(&mut self, now: f64) {
        self.deadline = Some(now + self.delay_ms);
        log::trace!("idle timer armed for {}ms", now + self.delay_ms);
    }

    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            log::trace!("idle timer cancelled");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true once, on the first frame at or past the deadline
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_delay() {
        let mut timer = IdleTimer::new(3000.0);
        timer.arm(100.0);
        assert!(!timer.poll(3099.0));
        assert!(timer.poll(3100.0));
        assert!(!timer.poll(3200.0));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut timer = IdleTimer::new(3000.0);
        timer.arm(0.0);
        timer.cancel();
        assert!(!timer.poll(10_000.0));
    }

    #[test]
    fn test_cancel_without_pending_is_noop() {
        let mut timer = IdleTimer::new(3000.0);
        timer.cancel();
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let mut timer = IdleTimer::new(3000.0);
        timer.arm(0.0);
        timer.arm(2000.0);
        assert!(!timer.poll(3000.0));
        assert!(timer.poll(5000.0));
    }
}
