//! Gesture samples and the single-pointer recognizer that produces them.

use std::collections::VecDeque;

use crate::config::ControllerConfig;
use crate::geometry::Velocity;

/// Lifecycle of a pan gesture: Idle → Began → Active* → Ended → Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Began,
    Active,
    Ended,
}

/// One pan gesture update from the touch layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    /// Cumulative horizontal travel since the gesture began
    pub translation_x: f32,
    /// Cumulative vertical travel since the gesture began
    pub translation_y: f32,
    /// Horizontal velocity in units per second
    pub velocity_x: f32,
    /// Vertical velocity in units per second
    pub velocity_y: f32,
}

impl GestureSample {
    pub fn new(phase: GesturePhase, translation: (f32, f32), velocity: Velocity) -> Self {
        Self {
            phase,
            translation_x: translation.0,
            translation_y: translation.1,
            velocity_x: velocity.x,
            velocity_y: velocity.y,
        }
    }

    pub fn began() -> Self {
        Self::new(GesturePhase::Began, (0.0, 0.0), Velocity::ZERO)
    }

    pub fn active(translation_x: f32, translation_y: f32, velocity: Velocity) -> Self {
        Self::new(GesturePhase::Active, (translation_x, translation_y), velocity)
    }

    pub fn ended(translation_x: f32, translation_y: f32, velocity: Velocity) -> Self {
        Self::new(GesturePhase::Ended, (translation_x, translation_y), velocity)
    }

    pub fn idle() -> Self {
        Self::new(GesturePhase::Idle, (0.0, 0.0), Velocity::ZERO)
    }

    pub fn velocity(&self) -> Velocity {
        Velocity::new(self.velocity_x, self.velocity_y)
    }
}

/// Raw single-pointer input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Finger or button went down
    Down { x: f32, y: f32 },
    /// Pointer moved while down
    Move { x: f32, y: f32 },
    /// Finger or button released
    Up { x: f32, y: f32 },
    /// The platform took the pointer away
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

/// What the recognizer made of a pointer event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchOutput {
    /// Touch-down on the controller
    PressIn,
    /// The press ended; `tap` is set when it completed without dragging
    PressOut { tap: bool },
    Gesture(GestureSample),
}

/// Recognizes taps and pans from one pointer.
///
/// A press becomes a pan once the pointer travels further than the drag slop.
/// Translation is measured from the point where the pan activated.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    slop: f32,
    window_ms: f64,
    max_velocity: f32,
    down: Option<(f32, f32)>,
    activation: Option<(f32, f32)>,
    /// (time, x, y) samples within the velocity window
    samples: VecDeque<(f64, f32, f32)>,
}

impl PointerTracker {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            slop: config.drag_slop,
            window_ms: config.velocity_window_ms,
            max_velocity: config.max_velocity,
            down: None,
            activation: None,
            samples: VecDeque::new(),
        }
    }

    /// Whether a pointer is currently held on the controller
    pub fn is_tracking(&self) -> bool {
        self.down.is_some()
    }

    /// Whether the current press has turned into a pan
    pub fn is_dragging(&self) -> bool {
        self.activation.is_some()
    }

    /// Feed one pointer event observed at frame time `now`.
    /// Moves and releases are ignored unless a press is being tracked.
    pub fn handle(&mut self, event: PointerEvent, now: f64) -> Vec<TouchOutput> {
        match event {
            PointerEvent::Down { x, y } => {
                // A release went missing: close out the previous press first
                let mut outputs = self.abandon();
                self.down = Some((x, y));
                self.record(now, x, y);
                outputs.push(TouchOutput::PressIn);
                outputs
            }
            PointerEvent::Move { x, y } => {
                let Some(down) = self.down else {
                    return Vec::new();
                };
                self.record(now, x, y);
                match self.activation {
                    Some(origin) => vec![self.sample(GesturePhase::Active, origin, x, y)],
                    None if distance(down, (x, y)) > self.slop => {
                        log::debug!("press turned into a drag at ({}, {})", x, y);
                        self.activation = Some((x, y));
                        vec![
                            TouchOutput::PressOut { tap: false },
                            TouchOutput::Gesture(GestureSample::began()),
                            TouchOutput::Gesture(GestureSample::active(
                                0.0,
                                0.0,
                                self.velocity(),
                            )),
                        ]
                    }
                    None => Vec::new(),
                }
            }
            PointerEvent::Up { x, y } => {
                if self.down.is_none() {
                    return Vec::new();
                }
                self.record(now, x, y);
                let output = match self.activation {
                    Some(origin) => self.sample(GesturePhase::Ended, origin, x, y),
                    None => TouchOutput::PressOut { tap: true },
                };
                self.reset();
                vec![output]
            }
            PointerEvent::Cancel => self.abandon(),
        }
    }

    /// End the tracked press without a release: a drag ends at rest, a plain
    /// press ends without a tap.
    pub fn abandon(&mut self) -> Vec<TouchOutput> {
        if self.down.is_none() {
            return Vec::new();
        }
        let output = match self.activation {
            Some(_) => TouchOutput::Gesture(GestureSample::ended(0.0, 0.0, Velocity::ZERO)),
            None => TouchOutput::PressOut { tap: false },
        };
        self.reset();
        vec![output]
    }

    fn sample(&self, phase: GesturePhase, origin: (f32, f32), x: f32, y: f32) -> TouchOutput {
        TouchOutput::Gesture(GestureSample::new(
            phase,
            (x - origin.0, y - origin.1),
            self.velocity(),
        ))
    }

    fn record(&mut self, now: f64, x: f32, y: f32) {
        self.samples.push_back((now, x, y));
        while let Some(&(time, _, _)) = self.samples.front() {
            if now - time > self.window_ms {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Velocity across the retained samples, in units per second
    fn velocity(&self) -> Velocity {
        let (Some(first), Some(last)) = (self.samples.front(), self.samples.back()) else {
            return Velocity::ZERO;
        };
        let dt = last.0 - first.0;
        if dt <= 0.0 {
            return Velocity::ZERO;
        }
        let per_second = (1000.0 / dt) as f32;
        Velocity::new(
            ((last.1 - first.1) * per_second).clamp(-self.max_velocity, self.max_velocity),
            ((last.2 - first.2) * per_second).clamp(-self.max_velocity, self.max_velocity),
        )
    }

    fn reset(&mut self) {
        self.down = None;
        self.activation = None;
        self.samples.clear();
    }
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}
