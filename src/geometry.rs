//! Screen geometry: viewport, safe-area insets, positions and the settle
//! bounds derived from them.

/// Current viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Safe-area insets excluded from the draggable area
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SafeInsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl SafeInsets {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Override the top inset.
    pub fn top(mut self, v: f32) -> Self {
        self.top = v;
        self
    }

    /// Override the bottom inset.
    pub fn bottom(mut self, v: f32) -> Self {
        self.bottom = v;
        self
    }

    /// Override the left inset.
    pub fn left(mut self, v: f32) -> Self {
        self.left = v;
        self
    }

    /// Override the right inset.
    pub fn right(mut self, v: f32) -> Self {
        self.right = v;
        self
    }

    /// Negative insets are treated as zero
    fn non_negative(self) -> Self {
        Self {
            top: self.top.max(0.0),
            right: self.right.max(0.0),
            bottom: self.bottom.max(0.0),
            left: self.left.max(0.0),
        }
    }
}

/// `[top, right, bottom, left]`, the CSS order
impl From<[f32; 4]> for SafeInsets {
    fn from(v: [f32; 4]) -> Self {
        SafeInsets {
            top: v[0],
            right: v[1],
            bottom: v[2],
            left: v[3],
        }
    }
}

/// Top-left anchor of the controller
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Pointer velocity in units per second
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Check if a point is inside this rect with rounded corners.
    /// The corner_radius is clamped to half of the smaller dimension.
    pub fn contains_rounded(&self, x: f32, y: f32, corner_radius: f32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        if corner_radius <= 0.0 {
            return true;
        }

        let max_radius = (self.width.min(self.height) / 2.0).max(0.0);
        let r = corner_radius.min(max_radius);

        // Nearest corner circle center, if the point lies in a corner square
        let cx = if x < self.x + r {
            self.x + r
        } else if x > self.x + self.width - r {
            self.x + self.width - r
        } else {
            return true;
        };
        let cy = if y < self.y + r {
            self.y + r
        } else if y > self.y + self.height - r {
            self.y + self.height - r
        } else {
            return true;
        };

        let dx = x - cx;
        let dy = y - cy;
        dx * dx + dy * dy <= r * r
    }
}

/// Range of legal settled anchors for a controller of a given size.
///
/// `min_*` is the first legal coordinate, `max_*` the last one, so the right
/// and bottom limits already account for the controller size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Derive the bounds from viewport, insets and edge margins.
    /// An axis too small to hold the controller collapses onto its minimum.
    pub fn new(
        viewport: Viewport,
        insets: SafeInsets,
        size: f32,
        margin_x: f32,
        margin_y: f32,
    ) -> Self {
        let insets = insets.non_negative();
        let min_x = insets.left + margin_x;
        let min_y = insets.top + margin_y;
        let max_x = viewport.width - size - insets.right - margin_x;
        let max_y = viewport.height - size - insets.bottom - margin_y;

        if max_x < min_x || max_y < min_y {
            log::warn!(
                "viewport {}x{} too small for controller of size {}, collapsing bounds",
                viewport.width,
                viewport.height,
                size
            );
        }

        Self {
            min_x,
            max_x: max_x.max(min_x),
            min_y,
            max_y: max_y.max(min_y),
        }
    }

    /// Where the controller rests before any interaction: the top-right corner
    pub fn home(&self) -> Position {
        Position::new(self.max_x, self.min_y)
    }

    pub fn contains(&self, position: Position) -> bool {
        (self.min_x..=self.max_x).contains(&position.x)
            && (self.min_y..=self.max_y).contains(&position.y)
    }

    pub fn clamp(&self, position: Position) -> Position {
        Position {
            x: position.x.clamp(self.min_x, self.max_x),
            y: position.y.clamp(self.min_y, self.max_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_viewport_and_insets() {
        let insets = SafeInsets::all(0.0).top(44.0).bottom(34.0);
        let bounds = Bounds::new(Viewport::new(400.0, 800.0), insets, 40.0, 10.0, 20.0);
        assert_eq!(bounds.min_x, 10.0);
        assert_eq!(bounds.max_x, 350.0);
        assert_eq!(bounds.min_y, 64.0);
        assert_eq!(bounds.max_y, 706.0);
        assert_eq!(bounds.home(), Position::new(350.0, 64.0));
    }

    #[test]
    fn test_degenerate_viewport_collapses_bounds() {
        let bounds = Bounds::new(
            Viewport::new(30.0, 50.0),
            SafeInsets::default(),
            40.0,
            10.0,
            20.0,
        );
        assert_eq!(bounds.max_x, bounds.min_x);
        assert_eq!(bounds.max_y, bounds.min_y);
        assert!(bounds.contains(bounds.clamp(Position::new(-100.0, 900.0))));
    }

    #[test]
    fn test_negative_insets_are_ignored() {
        let bounds = Bounds::new(
            Viewport::new(400.0, 800.0),
            SafeInsets::all(-5.0),
            40.0,
            10.0,
            20.0,
        );
        assert_eq!(bounds.min_x, 10.0);
        assert_eq!(bounds.min_y, 20.0);
    }

    #[test]
    fn test_clamp() {
        let bounds = Bounds::new(
            Viewport::new(400.0, 800.0),
            SafeInsets::default(),
            40.0,
            10.0,
            20.0,
        );
        assert_eq!(
            bounds.clamp(Position::new(-20.0, 900.0)),
            Position::new(10.0, 740.0)
        );
        assert_eq!(
            bounds.clamp(Position::new(100.0, 100.0)),
            Position::new(100.0, 100.0)
        );
    }

    #[test]
    fn test_insets_shorthand() {
        let insets = SafeInsets::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(insets.top, 1.0);
        assert_eq!(insets.right, 2.0);
        assert_eq!(insets.bottom, 3.0);
        assert_eq!(insets.left, 4.0);
    }

    #[test]
    fn test_contains_rounded_excludes_corners() {
        let rect = Rect::new(0.0, 0.0, 40.0, 40.0);
        assert!(rect.contains_rounded(20.0, 20.0, 20.0));
        assert!(rect.contains_rounded(20.0, 1.0, 20.0));
        assert!(!rect.contains_rounded(1.0, 1.0, 20.0));
        assert!(!rect.contains_rounded(39.0, 39.0, 20.0));
        assert!(!rect.contains_rounded(50.0, 20.0, 20.0));
    }
}
