//! The floating controller: drag, snap, fade and tap handling for one
//! screen-pinned control.
//!
//! All state lives in [`Controller`]. Input arrives through
//! [`Controller::handle_pointer`] (or pre-recognized
//! [`Controller::handle_gesture`] samples and press events) and animation
//! advances in [`Controller::frame`], which the owner calls once per display
//! frame with a monotonic timestamp in milliseconds.

use crate::animation::{advance, Animatable, TweenConfig, TweenState};
use crate::clock::Clock;
use crate::config::ControllerConfig;
use crate::geometry::{Bounds, Position, Rect, SafeInsets, Velocity, Viewport};
use crate::gesture::{
    EventResponse, GesturePhase, GestureSample, PointerEvent, PointerTracker, TouchOutput,
};
use crate::idle::IdleTimer;
use crate::opacity::{OpacityAnimator, OpacityPhase};
use crate::snap::{self, SnapAnchor};

/// Callback invoked on a completed tap
pub type PressCallback = Box<dyn FnMut()>;

pub struct Controller {
    config: ControllerConfig,
    viewport: Viewport,
    insets: SafeInsets,
    bounds: Bounds,
    position: Position,
    /// Latest velocity reported by the gesture layer
    velocity: Velocity,
    phase: GesturePhase,
    snap: SnapAnchor,
    transition_clock: Clock,
    transition: TweenState,
    transition_config: TweenConfig,
    opacity: OpacityAnimator,
    idle: IdleTimer,
    tracker: PointerTracker,
    on_press: Option<PressCallback>,
    /// Timestamp of the latest frame
    now: f64,
    /// Whether `frame` has run yet
    started: bool,
}

impl Controller {
    /// Create a controller resting at its home position, fully visible, with
    /// the idle timer armed. The idle delay counts from the first frame.
    pub fn new(config: ControllerConfig, viewport: Viewport, insets: SafeInsets) -> Self {
        let bounds = Bounds::new(
            viewport,
            insets,
            config.size,
            config.margin_x,
            config.margin_y,
        );
        let home = bounds.home();
        let mut idle = IdleTimer::new(config.idle_delay_ms);
        idle.arm(0.0);

        Self {
            viewport,
            insets,
            bounds,
            position: home,
            velocity: Velocity::ZERO,
            phase: GesturePhase::Idle,
            snap: SnapAnchor {
                origin: home,
                destination: home,
            },
            transition_clock: Clock::new(),
            transition: TweenState::default(),
            transition_config: config.transition_tween(),
            opacity: OpacityAnimator::new(config.fade_in.clone(), config.fade_out.clone()),
            idle,
            tracker: PointerTracker::new(&config),
            on_press: None,
            now: 0.0,
            started: false,
            config,
        }
    }

    /// Set the callback invoked on every completed tap
    pub fn on_press<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.on_press = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    pub fn opacity_phase(&self) -> OpacityPhase {
        self.opacity.phase()
    }

    /// (fade-in, fade-out) clock states
    pub fn fade_clocks_running(&self) -> (bool, bool) {
        self.opacity.clocks_running()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn insets(&self) -> SafeInsets {
        self.insets
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Whether the snap transition clock is running
    pub fn is_settling(&self) -> bool {
        self.transition_clock.is_running()
    }

    /// Destination of the current or last snap, once a gesture has ended
    pub fn snap_destination(&self) -> Option<Position> {
        (self.phase == GesturePhase::Ended).then_some(self.snap.destination)
    }

    pub fn transition_state(&self) -> &TweenState {
        &self.transition
    }

    pub fn idle_pending(&self) -> bool {
        self.idle.is_pending()
    }

    /// Area covered by the controller at its current position
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.config.size,
            self.config.size,
        )
    }

    /// Whether a point hits the round controller
    pub fn hit_test(&self, x: f32, y: f32) -> bool {
        self.rect().contains_rounded(x, y, self.config.size / 2.0)
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        log::info!("viewport changed to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
        self.relayout();
    }

    pub fn set_insets(&mut self, insets: SafeInsets) {
        if insets == self.insets {
            return;
        }
        log::info!("safe-area insets changed to {:?}", insets);
        self.insets = insets;
        self.relayout();
    }

    /// Recompute bounds and return to the home position
    fn relayout(&mut self) {
        self.bounds = Bounds::new(
            self.viewport,
            self.insets,
            self.config.size,
            self.config.margin_x,
            self.config.margin_y,
        );
        let home = self.bounds.home();
        self.position = home;
        self.snap = SnapAnchor {
            origin: home,
            destination: home,
        };
        self.transition_clock.stop();
        self.transition.reset();
        if self.phase == GesturePhase::Ended {
            self.phase = GesturePhase::Idle;
        }
    }

    /// Touch-down on the controller
    pub fn press_in(&mut self) {
        self.opacity.fade_in();
        self.idle.cancel();
    }

    /// Touch released or handed over to a drag
    pub fn press_out(&mut self) {
        self.idle.arm(self.now);
    }

    fn press_out_at(&mut self, time: f64) {
        self.idle.arm(time);
    }

    /// Completed tap
    pub fn press(&mut self) {
        log::debug!("controller tapped");
        if let Some(callback) = self.on_press.as_mut() {
            callback();
        }
    }

    /// Feed a raw pointer event stamped with the latest frame time.
    /// See [`Controller::handle_pointer_at`].
    pub fn handle_pointer(&mut self, event: PointerEvent) -> EventResponse {
        self.handle_pointer_at(event, self.now)
    }

    /// Feed a raw pointer event observed at `time` (milliseconds, same clock
    /// as [`Controller::frame`]).
    ///
    /// Presses that start outside the controller are ignored. A new press
    /// while a previous one is still tracked settles the previous one first.
    pub fn handle_pointer_at(&mut self, event: PointerEvent, time: f64) -> EventResponse {
        let outputs = match event {
            PointerEvent::Down { x, y } if !self.hit_test(x, y) => {
                if self.tracker.is_tracking() {
                    log::warn!("new press while a previous one was still tracked");
                    let outputs = self.tracker.abandon();
                    self.apply_touch(outputs, time);
                }
                return EventResponse::Ignored;
            }
            PointerEvent::Down { .. } => self.tracker.handle(event, time),
            _ if !self.tracker.is_tracking() => return EventResponse::Ignored,
            _ => self.tracker.handle(event, time),
        };
        self.apply_touch(outputs, time);
        EventResponse::Handled
    }

    fn apply_touch(&mut self, outputs: Vec<TouchOutput>, time: f64) {
        for output in outputs {
            match output {
                TouchOutput::PressIn => self.press_in(),
                TouchOutput::PressOut { tap } => {
                    self.press_out_at(time);
                    if tap {
                        self.press();
                    }
                }
                TouchOutput::Gesture(sample) => self.handle_gesture(sample),
            }
        }
    }

    /// Feed one pan gesture sample
    pub fn handle_gesture(&mut self, sample: GestureSample) {
        match sample.phase {
            GesturePhase::Began => {
                log::debug!("drag began at ({}, {})", self.position.x, self.position.y);
                self.idle.cancel();
                self.opacity.fade_in();
                self.snap.origin = self.position;
                self.transition.reset();
                self.transition_clock.stop();
                self.velocity = Velocity::ZERO;
                self.phase = GesturePhase::Began;
            }
            GesturePhase::Active => {
                if !self.in_gesture() {
                    log::warn!("ignoring active gesture sample without a began sample");
                    return;
                }
                self.phase = GesturePhase::Active;
                self.velocity = sample.velocity();
                self.position = self
                    .snap
                    .origin
                    .offset(sample.translation_x, sample.translation_y);
            }
            GesturePhase::Ended => {
                if !self.in_gesture() && self.phase != GesturePhase::Ended {
                    log::warn!("ignoring ended gesture sample without a began sample");
                    return;
                }
                self.phase = GesturePhase::Ended;
                self.velocity = sample.velocity();
                self.start_snap();
            }
            GesturePhase::Idle => {
                if self.in_gesture() {
                    // Stopped without a release sample, settle where it is
                    self.phase = GesturePhase::Ended;
                    self.velocity = Velocity::ZERO;
                    self.start_snap();
                }
            }
        }
    }

    fn in_gesture(&self) -> bool {
        matches!(self.phase, GesturePhase::Began | GesturePhase::Active)
    }

    /// Pick a destination and start the transition clock, at most once per
    /// release.
    fn start_snap(&mut self) {
        if self.transition_clock.is_running() || self.transition.finished {
            return;
        }
        self.snap.origin = self.position;
        self.snap.destination =
            snap::resolve_destination(self.position, self.velocity, &self.bounds, &self.config);
        log::debug!(
            "snapping from ({}, {}) to ({}, {})",
            self.snap.origin.x,
            self.snap.origin.y,
            self.snap.destination.x,
            self.snap.destination.y
        );
        self.transition_clock.start();
    }

    /// Advance every animation to frame time `now` (milliseconds)
    pub fn frame(&mut self, now: f64) {
        self.now = now;
        if !self.started {
            self.started = true;
            // Deadlines armed before the first frame count from it
            if self.idle.is_pending() {
                self.idle.arm(now);
            }
        }
        self.transition_clock.tick(now);

        if self.idle.poll(now) {
            log::debug!("idle timeout, dimming controller");
            self.opacity.fade_out();
        }

        if self.phase == GesturePhase::Ended {
            self.start_snap();
            advance(
                &self.transition_clock,
                &mut self.transition,
                &self.transition_config,
            );
            if self.transition.finished && self.transition_clock.is_running() {
                self.transition_clock.stop();
                self.idle.arm(now);
                log::debug!(
                    "settled at ({}, {})",
                    self.snap.destination.x,
                    self.snap.destination.y
                );
            }
            self.position = Position::lerp(
                &self.snap.origin,
                &self.snap.destination,
                self.transition.position,
            );
            log::trace!("transition progress {}", self.transition.position);
        }

        self.opacity.frame(now);
    }
}
