//! Two-component geometric quantities and rectangle vocabulary.

#[cfg(feature = "approx")]
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use core::fmt::{self, Display, Formatter};
use core::ops::{Add, AddAssign, Sub, SubAssign};
use num_traits::Zero;
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// A location in a two-dimensional coordinate system.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// A two-dimensional extent.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }
}

/// Promotes a `Size` to a `Point` positionally: `(width, height)` becomes `(x, y)`.
impl From<Size> for Point {
    fn from(size: Size) -> Self {
        Point::new(size.width, size.height)
    }
}

impl Display for Point {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "(x: {}, y: {})", self.x, self.y)
    }
}

impl Display for Size {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "(width: {}, height: {})", self.width, self.height)
    }
}

// Component-wise arithmetic and comparisons for both compound types. `Point` and `Size` are
// structurally identical, so these are generated from the field names.
macro_rules! impl_compound {
    (compound => $t:ident { $a:ident, $b:ident }) => {
        impl Add for $t {
            type Output = Self;

            fn add(self, other: Self) -> Self::Output {
                $t::new(self.$a + other.$a, self.$b + other.$b)
            }
        }

        impl AddAssign for $t {
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }

        impl Sub for $t {
            type Output = Self;

            fn sub(self, other: Self) -> Self::Output {
                $t::new(self.$a - other.$a, self.$b - other.$b)
            }
        }

        impl SubAssign for $t {
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }

        impl Zero for $t {
            fn zero() -> Self {
                $t::new(0.0, 0.0)
            }

            fn is_zero(&self) -> bool {
                self.$a.is_zero() && self.$b.is_zero()
            }
        }

        #[cfg(feature = "approx")]
        impl AbsDiffEq for $t {
            type Epsilon = f64;

            fn default_epsilon() -> Self::Epsilon {
                f64::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.$a.abs_diff_eq(&other.$a, epsilon) && self.$b.abs_diff_eq(&other.$b, epsilon)
            }
        }

        #[cfg(feature = "approx")]
        impl RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                f64::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.$a.relative_eq(&other.$a, epsilon, max_relative)
                    && self.$b.relative_eq(&other.$b, epsilon, max_relative)
            }
        }

        #[cfg(feature = "approx")]
        impl UlpsEq for $t {
            fn default_max_ulps() -> u32 {
                f64::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                self.$a.ulps_eq(&other.$a, epsilon, max_ulps)
                    && self.$b.ulps_eq(&other.$b, epsilon, max_ulps)
            }
        }
    };
}
impl_compound!(compound => Point { x, y });
impl_compound!(compound => Size { width, height });

/// The four sides of a rectangle.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Side {
    Right,
    Up,
    Left,
    Low,
}

impl Side {
    /// All sides, counter-clockwise from the right.
    pub const ALL: [Side; 4] = [Side::Right, Side::Up, Side::Left, Side::Low];
}

/// Places in, on, and around a rectangle.
///
/// Nine places lie on a rectangle:
///
/// ```text
/// UpperLeft   Up      UpperRight
/// Left        Center
/// LowerLeft   Low     LowerRight
/// ```
///
/// The remaining places describe a rectangle relative to its neighbors in a sequence:
///
/// ```text
///            ┌─────────┐
/// Previous   │  Inner  │   Next
///            └─────────┘
/// ```
///
/// Places have a stable raw value, given by their declaration order.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Place {
    Previous = 0,
    Center = 1,
    UpperRight = 2,
    Up = 3,
    UpperLeft = 4,
    Left = 5,
    LowerLeft = 6,
    Low = 7,
    LowerRight = 8,
    Inner = 9,
    Next = 10,
}

impl Place {
    pub const ALL: [Place; 11] = [
        Place::Previous,
        Place::Center,
        Place::UpperRight,
        Place::Up,
        Place::UpperLeft,
        Place::Left,
        Place::LowerLeft,
        Place::Low,
        Place::LowerRight,
        Place::Inner,
        Place::Next,
    ];

    /// Gets the place with the given raw value, if any.
    pub fn from_raw(raw: u8) -> Option<Self> {
        Place::ALL.get(usize::from(raw)).copied()
    }

    pub const fn into_raw(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "approx")]
    use approx::assert_relative_eq;
    use num_traits::Zero;

    use crate::geometry::{Place, Point, Side, Size};

    #[test]
    fn size_promotes_positionally() {
        assert_eq!(Point::from(Size::new(3.0, -4.5)), Point::new(3.0, -4.5));
    }

    #[test]
    fn compound_arithmetic_is_component_wise() {
        assert_eq!(Point::new(1.0, 2.0) + Point::new(3.0, 4.0), Point::new(4.0, 6.0));
        assert_eq!(Size::new(1.0, 2.0) + Size::new(3.0, 4.0), Size::new(4.0, 6.0));
        assert_eq!(Point::new(1.0, 2.0) - Point::new(3.0, 5.0), Point::new(-2.0, -3.0));

        let mut size = Size::new(1.0, 1.0);
        size += Size::new(0.5, 2.0);
        size -= Size::new(1.0, 1.0);
        assert_eq!(size, Size::new(0.5, 2.0));
    }

    #[test]
    fn zero_is_additive_identity() {
        let point = Point::new(7.0, -1.0);
        assert_eq!(point + Point::zero(), point);
        assert!(Size::zero().is_zero());
        assert!(!Size::new(0.0, 1.0).is_zero());
    }

    #[cfg(feature = "approx")]
    #[test]
    fn approximate_equality() {
        assert_relative_eq!(Point::new(0.1, 0.2) + Point::new(0.2, 0.1), Point::new(0.3, 0.3));
        assert_relative_eq!(Size::new(0.1, 0.7) + Size::new(0.2, 0.1), Size::new(0.3, 0.8));
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_names_components() {
        use std::string::ToString;

        assert_eq!(Point::new(1.0, -2.5).to_string(), "(x: 1, y: -2.5)");
        assert_eq!(Size::new(0.25, 4.0).to_string(), "(width: 0.25, height: 4)");
    }

    #[test]
    fn place_raw_values_follow_declaration_order() {
        for (index, place) in Place::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(place.into_raw()), index);
            assert_eq!(Place::from_raw(place.into_raw()), Some(place));
        }
        assert_eq!(Place::from_raw(11), None);
        assert_eq!(Place::from_raw(u8::MAX), None);
        assert!(Place::Previous < Place::Next);
    }

    #[test]
    fn sides_are_distinct() {
        for (i, a) in Side::ALL.iter().enumerate() {
            for b in &Side::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_compounds_as_structs() {
        assert_eq!(
            serde_json::to_string(&Point::new(1.0, 2.5)).unwrap(),
            r#"{"x":1.0,"y":2.5}"#,
        );
        assert_eq!(
            serde_json::from_str::<Size>(r#"{"width":3.0,"height":4.0}"#).unwrap(),
            Size::new(3.0, 4.0),
        );
        assert_eq!(serde_json::to_string(&Place::LowerLeft).unwrap(), r#""LowerLeft""#);
    }
}
