use crate::geometry::Position;

/// Values a tween can drive from a progress scalar.
pub trait Animatable: Copy + PartialEq {
    /// Value at `t` along the way from `from` (`t = 0`) to `to` (`t = 1`)
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        *from + (*to - *from) * t
    }
}

/// Both axes share the same progress scalar, so they arrive together.
impl Animatable for Position {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Position {
            x: from.x + (to.x - from.x) * t,
            y: from.y + (to.y - from.y) * t,
        }
    }
}
