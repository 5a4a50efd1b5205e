use std::fmt;

use super::{impl_float_hash, impl_pair_ops, Point, PointF};

/// Integer extent in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Horizontal extent
    pub width: i32,
    /// Vertical extent
    pub height: i32,
}

impl Size {
    /// Empty extent
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a size from its extents
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Reinterpret `width`/`height` as `x`/`y`
    pub const fn as_point(self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Widen to a float size
    #[allow(clippy::cast_precision_loss)]
    pub fn to_size_f(self) -> SizeF {
        SizeF::new(self.width as f32, self.height as f32)
    }

    /// Widen to a float point, width to `x` and height to `y`
    #[allow(clippy::cast_precision_loss)]
    pub fn to_point_f(self) -> PointF {
        PointF::new(self.width as f32, self.height as f32)
    }

    /// True when both extents are strictly positive
    pub const fn is_positive(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl_pair_ops!(Size, width, height, i32);

/// Float extent
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizeF {
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl SizeF {
    /// Empty extent
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a size from its extents
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert to an integer size, truncating each component toward zero
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_size_truncating(self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    /// Reinterpret `width`/`height` as `x`/`y`
    pub const fn as_point_f(self) -> PointF {
        PointF::new(self.width, self.height)
    }
}

impl fmt::Display for SizeF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl_pair_ops!(SizeF, width, height, f32);
impl_float_hash!(SizeF, width, height);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_round_trip_preserves_components() {
        for size in [Size::new(640, 480), Size::new(-1, 0), Size::new(i32::MAX, i32::MIN)] {
            let point = size.as_point();
            assert_eq!((point.x, point.y), (size.width, size.height));
            assert_eq!(point.as_size(), size);
        }
    }

    #[test]
    fn test_float_size_point_reinterpretation() {
        let s = SizeF::new(2.5, 7.25);
        let p = s.as_point_f();
        assert_relative_eq!(p.x, 2.5);
        assert_relative_eq!(p.y, 7.25);
        assert_eq!(p.as_size_f(), s);
    }

    #[test]
    fn test_widen_to_float_point() {
        let p = Size::new(800, -600).to_point_f();
        assert_relative_eq!(p.x, 800.0);
        assert_relative_eq!(p.y, -600.0);
        assert_eq!(p, Size::new(800, -600).to_size_f().as_point_f());
    }

    #[test]
    fn test_truncating_conversion() {
        assert_eq!(SizeF::new(799.99, 600.5).to_size_truncating(), Size::new(799, 600));
        assert_eq!(SizeF::new(-2.7, 2.7).to_size_truncating(), Size::new(-2, 2));
    }

    #[test]
    fn test_arithmetic() {
        let s = Size::new(800, 600);
        assert_eq!(s + Size::new(10, 20) - Size::new(10, 20), s);
        assert_eq!(s / 2, Size::new(400, 300));
        assert_eq!(2 * s, Size::new(1600, 1200));
        assert_eq!(s * Size::new(0, 1), Size::new(0, 600));
        assert_eq!(s.to_size_f() * 0.5, SizeF::new(400.0, 300.0));
    }

    #[test]
    fn test_is_positive() {
        assert!(Size::new(1, 1).is_positive());
        assert!(!Size::new(0, 10).is_positive());
        assert!(!Size::new(10, -1).is_positive());
    }

    #[test]
    fn test_display() {
        assert_eq!(Size::new(640, 480).to_string(), "640x480");
    }
}
