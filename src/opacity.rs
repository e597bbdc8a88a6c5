//! Two-phase opacity state machine.
//!
//! Fading in and fading out each own a [`Clock`] but share one tween, so a
//! fade that interrupts the other continues from the current opacity.

use bitflags::bitflags;

use crate::animation::{advance, TweenConfig, TweenState};
use crate::clock::Clock;

bitflags! {
    /// Pending opacity transitions
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct FadeTriggers: u8 {
        /// Bring the controller to full opacity
        const FADING_IN  = 0b01;
        /// Dim the controller to its idle floor
        const FADING_OUT = 0b10;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpacityPhase {
    Idle,
    FadingIn,
    FadingOut,
}

pub struct OpacityAnimator {
    triggers: FadeTriggers,
    fade_in_clock: Clock,
    fade_out_clock: Clock,
    state: TweenState,
    /// Config of the fade currently driving `state`
    active: TweenConfig,
    fade_in: TweenConfig,
    fade_out: TweenConfig,
}

impl OpacityAnimator {
    /// Start fully visible
    pub fn new(fade_in: TweenConfig, fade_out: TweenConfig) -> Self {
        Self {
            triggers: FadeTriggers::empty(),
            fade_in_clock: Clock::new(),
            fade_out_clock: Clock::new(),
            state: TweenState::at(fade_in.to_value),
            active: fade_in.clone(),
            fade_in,
            fade_out,
        }
    }

    pub fn fade_in(&mut self) {
        self.triggers.insert(FadeTriggers::FADING_IN);
        self.triggers.remove(FadeTriggers::FADING_OUT);
    }

    pub fn fade_out(&mut self) {
        self.triggers.insert(FadeTriggers::FADING_OUT);
        self.triggers.remove(FadeTriggers::FADING_IN);
    }

    /// Raise triggers without clearing the opposite one.
    /// When both end up set, fading in wins on the next frame.
    pub fn trigger(&mut self, triggers: FadeTriggers) {
        self.triggers.insert(triggers);
    }

    pub fn triggers(&self) -> FadeTriggers {
        self.triggers
    }

    pub fn phase(&self) -> OpacityPhase {
        if self.triggers.contains(FadeTriggers::FADING_IN) {
            OpacityPhase::FadingIn
        } else if self.triggers.contains(FadeTriggers::FADING_OUT) {
            OpacityPhase::FadingOut
        } else {
            OpacityPhase::Idle
        }
    }

    /// Current opacity, never below the fade-out floor
    pub fn value(&self) -> f32 {
        let floor = self.fade_out.to_value.min(self.fade_in.to_value);
        let ceiling = self.fade_out.to_value.max(self.fade_in.to_value);
        self.state.position.clamp(floor, ceiling)
    }

    /// (fade-in, fade-out) clock states
    pub fn clocks_running(&self) -> (bool, bool) {
        (
            self.fade_in_clock.is_running(),
            self.fade_out_clock.is_running(),
        )
    }

    pub fn frame(&mut self, now: f64) {
        self.fade_in_clock.tick(now);
        self.fade_out_clock.tick(now);

        if self.triggers.contains(FadeTriggers::FADING_IN) {
            self.triggers.remove(FadeTriggers::FADING_OUT);
            self.fade_out_clock.stop();
            if !self.fade_in_clock.is_running() {
                log::trace!("fade in from {}", self.state.position);
                self.fade_in_clock.start();
                self.state.restart();
                self.active = self.fade_in.clone();
            }
            advance(&self.fade_in_clock, &mut self.state, &self.active);
            if self.state.finished {
                self.fade_in_clock.stop();
                self.triggers.remove(FadeTriggers::FADING_IN);
            }
        } else if self.triggers.contains(FadeTriggers::FADING_OUT) {
            self.fade_in_clock.stop();
            if !self.fade_out_clock.is_running() {
                log::trace!("fade out from {}", self.state.position);
                self.fade_out_clock.start();
                self.state.restart();
                self.active = self.fade_out.clone();
            }
            advance(&self.fade_out_clock, &mut self.state, &self.active);
            if self.state.finished {
                self.fade_out_clock.stop();
                self.triggers.remove(FadeTriggers::FADING_OUT);
            }
        }
    }
}
