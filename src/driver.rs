//! calloop-backed frame loop.
//!
//! [`ControllerLoop`] owns a [`Controller`] and serializes everything that
//! touches it onto one thread: a repeating frame timer calls
//! [`Controller::frame`], and a channel delivers input from other threads.

use std::time::{Duration, Instant};

use calloop::channel::{self, Channel, Sender};
use calloop::timer::{TimeoutAction, Timer};
use calloop::{EventLoop, LoopSignal};

use crate::controller::Controller;
use crate::geometry::{SafeInsets, Viewport};
use crate::gesture::{GestureSample, PointerEvent};

/// Default frame interval, roughly 60 frames per second
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Input delivered to the loop thread
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Raw pointer input, timestamped when the loop receives it
    Pointer(PointerEvent),
    Gesture(GestureSample),
    PressIn,
    PressOut,
    Press,
    Viewport(Viewport),
    Insets(SafeInsets),
}

/// State handed to every calloop callback
pub struct LoopState {
    pub controller: Controller,
    started: Instant,
    frames: u64,
    signal: LoopSignal,
}

impl LoopState {
    /// Frames rendered since the loop was created
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    fn apply(&mut self, event: InputEvent) {
        let received = self.elapsed_ms();
        let controller = &mut self.controller;
        match event {
            InputEvent::Pointer(pointer) => {
                controller.handle_pointer_at(pointer, received);
            }
            InputEvent::Gesture(sample) => controller.handle_gesture(sample),
            InputEvent::PressIn => controller.press_in(),
            InputEvent::PressOut => controller.press_out(),
            InputEvent::Press => controller.press(),
            InputEvent::Viewport(viewport) => controller.set_viewport(viewport),
            InputEvent::Insets(insets) => controller.set_insets(insets),
        }
    }
}

pub struct ControllerLoop {
    event_loop: EventLoop<'static, LoopState>,
    state: LoopState,
    sender: Sender<InputEvent>,
}

impl ControllerLoop {
    pub fn new(controller: Controller) -> Result<Self, calloop::Error> {
        Self::with_frame_interval(controller, FRAME_INTERVAL)
    }

    pub fn with_frame_interval(
        controller: Controller,
        interval: Duration,
    ) -> Result<Self, calloop::Error> {
        let event_loop: EventLoop<'static, LoopState> = EventLoop::try_new()?;
        let handle = event_loop.handle();
        let (sender, input): (Sender<InputEvent>, Channel<InputEvent>) = channel::channel();

        handle
            .insert_source(input, |event, _, state: &mut LoopState| match event {
                channel::Event::Msg(input) => state.apply(input),
                channel::Event::Closed => {
                    log::debug!("input channel closed, stopping controller loop");
                    state.signal.stop();
                }
            })
            .map_err(|e| e.error)?;

        handle
            .insert_source(
                Timer::from_duration(interval),
                move |_, _, state: &mut LoopState| {
                    let now = state.elapsed_ms();
                    state.controller.frame(now);
                    state.frames += 1;
                    TimeoutAction::ToDuration(interval)
                },
            )
            .map_err(|e| e.error)?;

        let state = LoopState {
            controller,
            started: Instant::now(),
            frames: 0,
            signal: event_loop.get_signal(),
        };

        Ok(Self {
            event_loop,
            state,
            sender,
        })
    }

    /// A handle other threads can use to feed input
    pub fn sender(&self) -> Sender<InputEvent> {
        self.sender.clone()
    }

    pub fn controller(&self) -> &Controller {
        &self.state.controller
    }

    pub fn state(&self) -> &LoopState {
        &self.state
    }

    /// Process pending events and due frames, waiting at most `timeout`
    pub fn dispatch(&mut self, timeout: Option<Duration>) -> Result<(), calloop::Error> {
        self.event_loop.dispatch(timeout, &mut self.state)
    }

    /// Run until every sender has been dropped, then hand the controller back
    pub fn run(self) -> Result<Controller, calloop::Error> {
        let _ = env_logger::try_init();

        let Self {
            mut event_loop,
            mut state,
            sender,
        } = self;
        // Only external senders keep the loop alive
        drop(sender);

        log::info!("controller loop running");
        event_loop.run(None::<Duration>, &mut state, |_| {})?;
        log::info!("controller loop stopped after {} frames", state.frames);
        Ok(state.controller)
    }
}
