//! Plain value geometry types
//!
//! `Point`/`PointF` and `Size`/`SizeF` are component-wise value pairs. Integer and
//! float variants convert through named methods only; float to integer conversions
//! truncate toward zero.
//!
//! Division is not guarded: dividing an integer pair by zero panics exactly like
//! the underlying `i32` division, and dividing a float pair by zero yields
//! infinity or NaN.

/// Implements component-wise and scalar arithmetic for a two-field value type
macro_rules! impl_pair_ops {
    ($ty:ident, $a:ident, $b:ident, $scalar:ty) => {
        impl std::ops::Add for $ty {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self::new(self.$a + rhs.$a, self.$b + rhs.$b)
            }
        }

        impl std::ops::Sub for $ty {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self::new(self.$a - rhs.$a, self.$b - rhs.$b)
            }
        }

        impl std::ops::Mul for $ty {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                Self::new(self.$a * rhs.$a, self.$b * rhs.$b)
            }
        }

        impl std::ops::Div for $ty {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                Self::new(self.$a / rhs.$a, self.$b / rhs.$b)
            }
        }

        impl std::ops::Mul<$scalar> for $ty {
            type Output = Self;
            fn mul(self, rhs: $scalar) -> Self {
                Self::new(self.$a * rhs, self.$b * rhs)
            }
        }

        impl std::ops::Mul<$ty> for $scalar {
            type Output = $ty;
            fn mul(self, rhs: $ty) -> $ty {
                <$ty>::new(rhs.$a * self, rhs.$b * self)
            }
        }

        impl std::ops::Div<$scalar> for $ty {
            type Output = Self;
            fn div(self, rhs: $scalar) -> Self {
                Self::new(self.$a / rhs, self.$b / rhs)
            }
        }

        impl From<($scalar, $scalar)> for $ty {
            fn from(pair: ($scalar, $scalar)) -> Self {
                Self::new(pair.0, pair.1)
            }
        }

        impl From<$ty> for ($scalar, $scalar) {
            fn from(value: $ty) -> Self {
                (value.$a, value.$b)
            }
        }
    };
}

/// Hash for float pairs; `-0.0` is folded into `0.0` so equal values hash equally
macro_rules! impl_float_hash {
    ($ty:ident, $a:ident, $b:ident) => {
        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                (self.$a + 0.0).to_bits().hash(state);
                (self.$b + 0.0).to_bits().hash(state);
            }
        }
    };
}

pub(crate) use impl_float_hash;
pub(crate) use impl_pair_ops;

mod point;
mod size;

pub use point::{Point, PointF};
pub use size::{Size, SizeF};
