//! Clock-driven tween evaluation.
//!
//! A tween is a plain [`TweenState`] advanced by [`advance`] once per frame
//! while its [`Clock`] runs. Owners restart the state whenever they (re)start
//! the clock, which makes the tween continue from the current value.

use crate::animation::{Animatable, TimingFunction};
use crate::clock::Clock;

/// Target, duration and curve of a tween
#[derive(Clone, Debug)]
pub struct TweenConfig {
    /// Value the tween ends at
    pub to_value: f32,
    /// Duration of the tween in milliseconds
    pub duration_ms: f32,
    /// Timing function controlling the curve
    pub timing: TimingFunction,
}

impl TweenConfig {
    /// Create a new tween configuration
    pub fn new(to_value: f32, duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            to_value,
            duration_ms,
            timing,
        }
    }

    /// Set the target value
    pub fn to_value(mut self, to_value: f32) -> Self {
        self.to_value = to_value;
        self
    }

    /// Set the duration of the tween
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }
}

/// Run state of one animated quantity
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TweenState {
    /// Set once the configured duration has elapsed
    pub finished: bool,
    /// Current animated value
    pub position: f32,
    /// Clock time of the last evaluated frame, `None` after a reset
    pub frame_time: Option<f64>,
    /// Milliseconds accumulated since the tween (re)started
    pub elapsed_time: f32,
    /// Value the current run started from
    origin: Option<f32>,
}

impl TweenState {
    /// Create a state resting at the given value
    pub fn at(position: f32) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Zero every field, including the current value
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Prepare a new run that starts from the current value
    pub fn restart(&mut self) {
        self.finished = false;
        self.frame_time = None;
        self.elapsed_time = 0.0;
        self.origin = None;
    }
}

/// Advance `state` to the clock's current frame.
///
/// Does nothing while the clock is stopped or after the tween finished.
pub fn advance(clock: &Clock, state: &mut TweenState, config: &TweenConfig) {
    if !clock.is_running() || state.finished {
        return;
    }

    let now = clock.time();
    let origin = *state.origin.get_or_insert(state.position);
    let last = state.frame_time.unwrap_or(now);
    state.elapsed_time += (now - last).max(0.0) as f32;
    state.frame_time = Some(now);

    if state.elapsed_time >= config.duration_ms {
        state.finished = true;
        state.position = config.to_value;
        return;
    }

    let t = state.elapsed_time / config.duration_ms;
    state.position = f32::lerp(&origin, &config.to_value, config.timing.evaluate(t));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(clock: &mut Clock, state: &mut TweenState, config: &TweenConfig, frames: &[f64]) {
        for &now in frames {
            clock.tick(now);
            advance(clock, state, config);
        }
    }

    #[test]
    fn test_linear_tween_progress() {
        let mut clock = Clock::new();
        let mut state = TweenState::at(0.0);
        let config = TweenConfig::new(100.0, 100.0, TimingFunction::Linear);
        clock.start();

        run(&mut clock, &mut state, &config, &[1000.0, 1025.0, 1050.0]);
        assert_eq!(state.elapsed_time, 50.0);
        assert_eq!(state.position, 50.0);
        assert!(!state.finished);

        run(&mut clock, &mut state, &config, &[1100.0]);
        assert!(state.finished);
        assert_eq!(state.position, 100.0);
    }

    #[test]
    fn test_first_frame_has_no_elapsed_time() {
        let mut clock = Clock::new();
        let mut state = TweenState::at(1.0);
        let config = TweenConfig::new(0.4, 600.0, TimingFunction::Linear);
        clock.start();

        run(&mut clock, &mut state, &config, &[5000.0]);
        assert_eq!(state.elapsed_time, 0.0);
        assert_eq!(state.position, 1.0);
        assert_eq!(state.frame_time, Some(5000.0));
    }

    #[test]
    fn test_stopped_clock_does_not_advance() {
        let mut clock = Clock::new();
        let mut state = TweenState::at(0.0);
        let config = TweenConfig::new(1.0, 100.0, TimingFunction::Linear);

        run(&mut clock, &mut state, &config, &[0.0, 50.0]);
        assert_eq!(state, TweenState::at(0.0));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut clock = Clock::new();
        let mut state = TweenState::at(0.0);
        let config = TweenConfig::new(1.0, 0.0, TimingFunction::Linear);
        clock.start();

        run(&mut clock, &mut state, &config, &[10.0]);
        assert!(state.finished);
        assert_eq!(state.position, 1.0);
    }

    #[test]
    fn test_restart_redirects_from_current_value() {
        let mut clock = Clock::new();
        let mut state = TweenState::at(0.0);
        let up = TweenConfig::new(100.0, 100.0, TimingFunction::Linear);
        clock.start();
        run(&mut clock, &mut state, &up, &[0.0, 50.0]);
        assert_eq!(state.position, 50.0);

        let down = up.clone().to_value(0.0);
        state.restart();
        run(&mut clock, &mut state, &down, &[50.0, 75.0]);
        assert_eq!(state.position, 37.5);
    }

    #[test]
    fn test_reset_zeroes_all_fields() {
        let mut state = TweenState {
            finished: true,
            position: 0.7,
            frame_time: Some(12.0),
            elapsed_time: 30.0,
            ..TweenState::default()
        };
        state.reset();
        assert!(!state.finished);
        assert_eq!(state.position, 0.0);
        assert_eq!(state.frame_time, None);
        assert_eq!(state.elapsed_time, 0.0);
    }

    #[test]
    fn test_same_inputs_same_outputs() {
        let config = TweenConfig::new(1.0, 250.0, TimingFunction::snap());
        let frames = [0.0, 16.0, 33.0, 49.0, 66.0, 120.0, 251.0];
        let sample = || {
            let mut clock = Clock::new();
            let mut state = TweenState::default();
            clock.start();
            let mut values = Vec::new();
            for &now in &frames {
                clock.tick(now);
                advance(&clock, &mut state, &config);
                values.push(state.position);
            }
            values
        };
        assert_eq!(sample(), sample());
    }
}
