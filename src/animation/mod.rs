mod animatable;
mod timing;
pub mod tween;

pub use animatable::Animatable;
pub use timing::{CubicBezier, TimingFunction};
pub use tween::{advance, TweenConfig, TweenState};
