//! A draggable, screen-pinned floating controller.
//!
//! The controller follows the finger while dragged, snaps to the nearest safe
//! screen edge on release (taking fling velocity into account), dims itself
//! after a period of inactivity and reports taps through a callback.
//!
//! [`Controller`] is a plain state machine: feed it input and call
//! [`Controller::frame`] once per display frame. [`ControllerLoop`] does the
//! latter on a calloop event loop.
//!
//! ```ignore
//! let controller = Controller::new(
//!     ControllerConfig::default(),
//!     Viewport::new(390.0, 844.0),
//!     SafeInsets::all(0.0).top(47.0).bottom(34.0),
//! )
//! .on_press(|| println!("back"));
//!
//! let event_loop = ControllerLoop::new(controller)?;
//! let input = event_loop.sender();
//! // hand `input` to the platform layer, then:
//! event_loop.run()?;
//! ```

pub mod animation;
pub mod clock;
pub mod config;
pub mod controller;
pub mod driver;
pub mod geometry;
pub mod gesture;
pub mod idle;
pub mod opacity;
pub mod snap;

pub use config::{ControllerConfig, CONTROLLER_SIZE};
pub use controller::Controller;
pub use driver::{ControllerLoop, InputEvent};

pub mod prelude {
    pub use crate::animation::{TimingFunction, TweenConfig, TweenState};
    pub use crate::geometry::{Bounds, Position, SafeInsets, Velocity, Viewport};
    pub use crate::gesture::{
        EventResponse, GesturePhase, GestureSample, PointerEvent, TouchOutput,
    };
    pub use crate::opacity::{FadeTriggers, OpacityPhase};
    pub use crate::{Controller, ControllerConfig, ControllerLoop, InputEvent, CONTROLLER_SIZE};
}
