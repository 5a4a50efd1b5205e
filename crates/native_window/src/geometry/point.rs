use std::fmt;

use super::{impl_float_hash, impl_pair_ops, Size, SizeF};

/// Integer point in screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Point {
    /// The origin
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a point from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Widen to a float point
    #[allow(clippy::cast_precision_loss)]
    pub fn to_point_f(self) -> PointF {
        PointF::new(self.x as f32, self.y as f32)
    }

    /// Reinterpret `x`/`y` as `width`/`height`
    pub const fn as_size(self) -> Size {
        Size::new(self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl_pair_ops!(Point, x, y, i32);

/// Float point
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointF {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl PointF {
    /// The origin
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a point from its coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert to an integer point, truncating each component toward zero
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_point_truncating(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }

    /// Reinterpret `x`/`y` as `width`/`height`
    pub const fn as_size_f(self) -> SizeF {
        SizeF::new(self.x, self.y)
    }
}

impl fmt::Display for PointF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl_pair_ops!(PointF, x, y, f32);
impl_float_hash!(PointF, x, y);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_add_then_sub_restores_point() {
        let samples = [
            (Point::new(0, 0), Point::new(5, -7)),
            (Point::new(-120, 44), Point::new(3, 3)),
            (Point::new(1920, 1080), Point::new(-1920, -1080)),
        ];
        for (p, q) in samples {
            assert_eq!(p + q - q, p);
        }
    }

    #[test]
    fn test_scalar_multiplication() {
        let p = Point::new(12, -4);
        assert_eq!(p * 0, Point::ZERO);
        assert_eq!(p * 3, Point::new(36, -12));
        assert_eq!(3 * p, p * 3);
        assert_eq!(p / 4, Point::new(3, -1));
    }

    #[test]
    fn test_component_wise_operations() {
        let p = Point::new(6, 8);
        let q = Point::new(2, 4);
        assert_eq!(p * q, Point::new(12, 32));
        assert_eq!(p / q, Point::new(3, 2));
    }

    #[test]
    fn test_float_to_int_truncates_toward_zero() {
        assert_eq!(PointF::new(1.9, -1.9).to_point_truncating(), Point::new(1, -1));
        assert_eq!(PointF::new(-0.5, 0.99).to_point_truncating(), Point::ZERO);
    }

    #[test]
    fn test_int_to_float_is_exact_for_screen_coordinates() {
        let p = Point::new(-3840, 2160).to_point_f();
        assert_relative_eq!(p.x, -3840.0);
        assert_relative_eq!(p.y, 2160.0);
    }

    #[test]
    fn test_float_ops() {
        let p = PointF::new(1.5, 2.0) * 2.0 - PointF::new(0.5, 0.5);
        assert_relative_eq!(p.x, 2.5);
        assert_relative_eq!(p.y, 3.5);
        let half = 0.5 * PointF::new(4.0, -4.0);
        assert_eq!(half, PointF::new(2.0, -2.0));
    }

    #[test]
    fn test_float_division_by_zero_is_not_guarded() {
        let p = PointF::new(1.0, -1.0) / 0.0;
        assert!(p.x.is_infinite() && p.x > 0.0);
        assert!(p.y.is_infinite() && p.y < 0.0);
    }

    #[test]
    #[should_panic]
    fn test_integer_division_by_zero_panics() {
        let zero = std::hint::black_box(0);
        let _ = Point::new(1, 1) / zero;
    }

    #[test]
    fn test_hash_matches_equality() {
        assert_eq!(hash_of(&Point::new(3, 4)), hash_of(&Point::new(3, 4)));
        assert_ne!(hash_of(&Point::new(3, 4)), hash_of(&Point::new(4, 3)));
        assert_eq!(PointF::new(0.0, 1.0), PointF::new(-0.0, 1.0));
        assert_eq!(hash_of(&PointF::new(0.0, 1.0)), hash_of(&PointF::new(-0.0, 1.0)));
    }

    #[test]
    fn test_tuple_conversions_and_display() {
        let p: Point = (10, 20).into();
        assert_eq!(p, Point::new(10, 20));
        assert_eq!(<(i32, i32)>::from(p), (10, 20));
        assert_eq!(p.to_string(), "(10, 20)");
    }
}
