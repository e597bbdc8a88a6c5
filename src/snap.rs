//! Resting-point selection for a released controller.
//!
//! Vertical placement prefers nearby edges, then strong vertical flings, and
//! otherwise keeps the release height. Horizontal placement projects the
//! release velocity forward and picks the nearer side.

use crate::config::ControllerConfig;
use crate::geometry::{Bounds, Position, Velocity};

/// Where the controller was when released and where it is heading
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SnapAnchor {
    pub origin: Position,
    pub destination: Position,
}

/// The point nearest to `value` projected by `velocity` over `projection` seconds.
///
/// Ties resolve to the earlier point. Returns `value` when `points` is empty.
pub fn snap_point(value: f32, velocity: f32, projection: f32, points: &[f32]) -> f32 {
    let projected = value + projection * velocity;
    points
        .iter()
        .copied()
        .fold(None, |best: Option<f32>, point| match best {
            Some(best) if (best - projected).abs() <= (point - projected).abs() => Some(best),
            _ => Some(point),
        })
        .unwrap_or(value)
}

/// Compute the settled position for a release at `position` with `velocity`.
///
/// The result always lies inside `bounds`.
pub fn resolve_destination(
    position: Position,
    velocity: Velocity,
    bounds: &Bounds,
    config: &ControllerConfig,
) -> Position {
    let mut destination = position;

    if position.y < bounds.min_y + config.edge_zone {
        destination.y = bounds.min_y;
        log::debug!("snap: near top edge");
    } else if position.y > bounds.max_y - config.edge_zone {
        destination.y = bounds.max_y;
        log::debug!("snap: near bottom edge");
    } else {
        if velocity.y < -config.fling_velocity {
            destination.y = bounds.min_y;
            log::debug!("snap: flung up at {}", velocity.y);
        } else if velocity.y > config.fling_velocity {
            destination.y = bounds.max_y;
            log::debug!("snap: flung down at {}", velocity.y);
        }
        destination.x = snap_point(
            position.x,
            velocity.x,
            config.fling_projection,
            &[bounds.min_x, bounds.max_x],
        );
    }

    bounds.clamp(destination)
}
