use crate::animation::{TimingFunction, TweenConfig};

/// Side length of the controller, used for hit testing and boundary math
pub const CONTROLLER_SIZE: f32 = 40.0;

/// Gap kept between the controller and the left/right safe edges
pub const EDGE_MARGIN_X: f32 = 10.0;
/// Gap kept between the controller and the top/bottom safe edges
pub const EDGE_MARGIN_Y: f32 = 20.0;

/// Distance from the top/bottom bound within which a release sticks to that edge
pub const EDGE_ZONE: f32 = 40.0;
/// Vertical release speed (units/s) above which a fling picks the top/bottom edge
pub const FLING_VELOCITY: f32 = 2000.0;
/// Seconds of velocity projected onto the release point for horizontal snapping
pub const FLING_PROJECTION: f32 = 0.2;

pub const TRANSITION_DURATION_MS: f32 = 250.0;
pub const FADE_IN_DURATION_MS: f32 = 100.0;
pub const FADE_OUT_DURATION_MS: f32 = 600.0;
/// Dimmed opacity floor, the controller never becomes fully invisible
pub const IDLE_OPACITY: f32 = 0.4;
pub const IDLE_DELAY_MS: f64 = 3000.0;

/// Pointer travel before a press turns into a drag
pub const DRAG_SLOP: f32 = 10.0;
pub const VELOCITY_WINDOW_MS: f64 = 100.0;
pub const MAX_VELOCITY: f32 = 8000.0;

/// Tunables of a controller instance
#[derive(Clone, Debug)]
pub struct ControllerConfig {
    pub size: f32,
    pub margin_x: f32,
    pub margin_y: f32,
    pub edge_zone: f32,
    pub fling_velocity: f32,
    pub fling_projection: f32,
    pub transition_duration_ms: f32,
    pub transition_timing: TimingFunction,
    pub fade_in: TweenConfig,
    pub fade_out: TweenConfig,
    pub idle_delay_ms: f64,
    pub drag_slop: f32,
    pub velocity_window_ms: f64,
    pub max_velocity: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            size: CONTROLLER_SIZE,
            margin_x: EDGE_MARGIN_X,
            margin_y: EDGE_MARGIN_Y,
            edge_zone: EDGE_ZONE,
            fling_velocity: FLING_VELOCITY,
            fling_projection: FLING_PROJECTION,
            transition_duration_ms: TRANSITION_DURATION_MS,
            transition_timing: TimingFunction::snap(),
            fade_in: TweenConfig::new(1.0, FADE_IN_DURATION_MS, TimingFunction::Linear),
            fade_out: TweenConfig::new(IDLE_OPACITY, FADE_OUT_DURATION_MS, TimingFunction::Linear),
            idle_delay_ms: IDLE_DELAY_MS,
            drag_slop: DRAG_SLOP,
            velocity_window_ms: VELOCITY_WINDOW_MS,
            max_velocity: MAX_VELOCITY,
        }
    }
}

impl ControllerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the gaps kept from the safe edges
    pub fn margins(mut self, horizontal: f32, vertical: f32) -> Self {
        self.margin_x = horizontal;
        self.margin_y = vertical;
        self
    }

    pub fn edge_zone(mut self, edge_zone: f32) -> Self {
        self.edge_zone = edge_zone;
        self
    }

    pub fn fling_velocity(mut self, velocity: f32) -> Self {
        self.fling_velocity = velocity;
        self
    }

    pub fn fling_projection(mut self, seconds: f32) -> Self {
        self.fling_projection = seconds;
        self
    }

    pub fn transition(mut self, duration_ms: f32, timing: TimingFunction) -> Self {
        self.transition_duration_ms = duration_ms;
        self.transition_timing = timing;
        self
    }

    pub fn fade_in(mut self, fade_in: TweenConfig) -> Self {
        self.fade_in = fade_in;
        self
    }

    pub fn fade_out(mut self, fade_out: TweenConfig) -> Self {
        self.fade_out = fade_out;
        self
    }

    pub fn idle_delay(mut self, delay_ms: f64) -> Self {
        self.idle_delay_ms = delay_ms;
        self
    }

    pub fn drag_slop(mut self, slop: f32) -> Self {
        self.drag_slop = slop;
        self
    }

    /// Progress tween of the snap transition, always running from 0 to 1
    pub(crate) fn transition_tween(&self) -> TweenConfig {
        TweenConfig::new(
            1.0,
            self.transition_duration_ms,
            self.transition_timing.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.size, 40.0);
        assert_eq!(config.fade_in.to_value, 1.0);
        assert_eq!(config.fade_in.duration_ms, 100.0);
        assert_eq!(config.fade_out.to_value, 0.4);
        assert_eq!(config.fade_out.duration_ms, 600.0);
        assert_eq!(config.idle_delay_ms, 3000.0);
    }

    #[test]
    fn test_builder() {
        let config = ControllerConfig::new()
            .size(56.0)
            .margins(4.0, 8.0)
            .transition(100.0, TimingFunction::ease_out())
            .idle_delay(500.0);
        assert_eq!(config.size, 56.0);
        assert_eq!(config.margin_x, 4.0);
        assert_eq!(config.margin_y, 8.0);
        let tween = config.transition_tween();
        assert_eq!(tween.to_value, 1.0);
        assert_eq!(tween.duration_ms, 100.0);
        assert_eq!(config.idle_delay_ms, 500.0);
    }
}
