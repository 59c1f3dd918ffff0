use glam::{IVec2, Vec2};

/// Axis-aligned rectangle in integer pixel coordinates
///
/// `pos` is the top-left corner, `size` the extent. Containment is half-open:
/// the right and bottom edges are outside the rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    pub const fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    /// Rectangle of the given size anchored at the origin
    pub const fn from_size(size: IVec2) -> Self {
        Self {
            pos: IVec2::ZERO,
            size,
        }
    }

    pub fn x(&self) -> i32 {
        self.pos.x
    }

    pub fn y(&self) -> i32 {
        self.pos.y
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.pos.x
            && point.x < self.right()
            && point.y >= self.pos.y
            && point.y < self.bottom()
    }

    /// Shrink the rectangle by `amount` on every side
    pub fn inset(&self, amount: i32) -> Self {
        Self {
            pos: self.pos + IVec2::splat(amount),
            size: self.size - IVec2::splat(amount * 2),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos.as_vec2() + self.size.as_vec2() / 2.0
    }
}

/// Per-corner radii for rounded rectangles, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Corners {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl Corners {
    /// Sharp corners
    pub const ZERO: Corners = Corners::all(0.0);

    pub const fn all(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Round only the left-hand corners (slider progress bar)
    pub const fn left(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: 0.0,
            bottom_right: 0.0,
            bottom_left: radius,
        }
    }

    pub fn is_sharp(&self) -> bool {
        self.top_left <= 0.0
            && self.top_right <= 0.0
            && self.bottom_right <= 0.0
            && self.bottom_left <= 0.0
    }

    /// Clamp every radius so opposite corners never overlap inside `rect`
    pub fn clamped_to(&self, rect: &Rect) -> Self {
        let limit = (rect.width().min(rect.height()) as f32 / 2.0).max(0.0);
        Self {
            top_left: self.top_left.clamp(0.0, limit),
            top_right: self.top_right.clamp(0.0, limit),
            bottom_right: self.bottom_right.clamp(0.0, limit),
            bottom_left: self.bottom_left.clamp(0.0, limit),
        }
    }
}

/// Measured extent of a rendered string
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextMetrics {
    pub width: i32,
    pub height: i32,
}

impl TextMetrics {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let rect = Rect::new(10, 10, 80, 30);
        assert!(rect.contains(IVec2::new(10, 10)));
        assert!(rect.contains(IVec2::new(89, 39)));
        assert!(!rect.contains(IVec2::new(90, 20)));
        assert!(!rect.contains(IVec2::new(20, 40)));
        assert!(!rect.contains(IVec2::new(9, 20)));
    }

    #[test]
    fn test_inset() {
        let rect = Rect::new(0, 0, 20, 10);
        assert_eq!(rect.inset(3), Rect::new(3, 3, 14, 4));
        assert_eq!(rect.inset(3).center(), rect.center());
    }

    #[test]
    fn test_corner_clamping() {
        let rect = Rect::new(0, 0, 40, 10);
        let corners = Corners::all(10.0).clamped_to(&rect);
        assert_eq!(corners, Corners::all(5.0));
        assert!(Corners::ZERO.is_sharp());
        assert!(!Corners::left(2.0).is_sharp());
    }
}
