//! Dynamically ranked quantities and promoting arithmetic.
//!
//! A [`Quantity`] is a numeric value tagged with its [`Rank`]. Arithmetic between quantities first
//! promotes the lower ranked operand to the rank of the other, one step at a time along their
//! shared [chain][`Chain`], and then applies the operation at that common rank. Operands from
//! different chains are never combined.
//!
//! Arithmetic operators on `Quantity` are fallible and output a [`Result`].
//!
//! ```rust
//! use promotion::{Point, Quantity, Rank, Size};
//!
//! let x = (Quantity::from(1) + Quantity::from(0.5f64)).unwrap();
//! assert_eq!(x, Quantity::Float64(1.5));
//!
//! let p = (Quantity::from(Size::new(1.0, 2.0)) + Quantity::from(Point::new(3.0, 4.0))).unwrap();
//! assert_eq!(p.rank(), Rank::Point);
//!
//! assert!((Quantity::from(1) + Quantity::from(Point::new(0.0, 0.0))).is_err());
//! ```
//!
//! [`Chain`]: crate::Chain
//! [`Result`]: core::result::Result

use core::any::Any;
use core::cmp::Ordering;
use core::fmt::{self, Display, Formatter};
use core::ops::{Add, Sub};
use num_traits::AsPrimitive;
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

use crate::error::{IncompatibleChainError, OverflowError, PromotionError, UnsupportedTypeError};
use crate::geometry::{Point, Size};
use crate::rank::Rank;

/// A numeric value tagged with its [`Rank`].
///
/// The rank of a `Quantity` is determined by its variant, so the payload always agrees with the
/// rank.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Quantity {
    Integer(i64),
    Float32(f32),
    Float64(f64),
    Size(Size),
    Point(Point),
}

impl Quantity {
    /// Classifies a dynamically typed value.
    ///
    /// Primitive integers are classified as [`Rank::Integer`]. `f32`, `f64`, [`Point`], and
    /// [`Size`] are classified as their corresponding ranks and a `Quantity` is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`PromotionError::Overflow`] if the value is an integer that cannot be represented
    /// as an `i64` and [`PromotionError::UnsupportedType`] if the value has any other type.
    pub fn classify(raw: &dyn Any) -> Result<Self, PromotionError> {
        macro_rules! classify_as {
            ($($t:ty),* $(,)?) => {
                $(
                    if let Some(value) = raw.downcast_ref::<$t>() {
                        return Ok(Quantity::from(*value));
                    }
                )*
            };
        }
        // Integers that may not fit in an `i64`.
        macro_rules! classify_as_ranged {
            ($($t:ty),* $(,)?) => {
                $(
                    if let Some(value) = raw.downcast_ref::<$t>() {
                        return i64::try_from(*value)
                            .map(Quantity::Integer)
                            .map_err(|_| OverflowError.into());
                    }
                )*
            };
        }
        classify_as!(Quantity, i64, i32, f64, f32, Point, Size, i16, i8, u32, u16, u8);
        classify_as_ranged!(usize, isize, u64, i128, u128);
        trace!("rejected value of unsupported type");
        Err(UnsupportedTypeError.into())
    }

    pub const fn rank(&self) -> Rank {
        match self {
            Quantity::Integer(_) => Rank::Integer,
            Quantity::Float32(_) => Rank::Float32,
            Quantity::Float64(_) => Rank::Float64,
            Quantity::Size(_) => Rank::Size,
            Quantity::Point(_) => Rank::Point,
        }
    }

    /// Promotes the quantity to the given rank.
    ///
    /// Promotion advances one rank at a time along the chain of the quantity until it reaches
    /// `rank`. Promoting to the current rank is the identity. Integers promoted to
    /// [`Rank::Float64`] are widened directly rather than through [`Rank::Float32`], so they are
    /// exact up to a magnitude of `2^53`.
    ///
    /// # Errors
    ///
    /// Returns [`PromotionError::IncompatibleChain`] if `rank` belongs to another chain or is lower
    /// than the rank of the quantity.
    pub fn promote(self, rank: Rank) -> Result<Self, PromotionError> {
        let error = IncompatibleChainError::new(self.rank(), rank);
        match self.rank().partial_cmp(&rank) {
            Some(Ordering::Less | Ordering::Equal) => {}
            _ => {
                trace!(from = %self.rank(), to = %rank, "rejected promotion");
                return Err(error.into());
            }
        }
        let mut quantity = match (self, rank) {
            (Quantity::Integer(value), Rank::Float64) => {
                trace!(from = %self.rank(), to = %rank, "promoted quantity");
                return Ok(Quantity::Float64(value.as_()));
            }
            _ => self,
        };
        while quantity.rank() != rank {
            let next = quantity.step().ok_or(error)?;
            trace!(from = %quantity.rank(), to = %next.rank(), "promoted quantity");
            quantity = next;
        }
        Ok(quantity)
    }

    /// Promotes both quantities to their common rank.
    ///
    /// The quantities are returned in the same order and always have the same rank.
    ///
    /// # Errors
    ///
    /// Returns [`PromotionError::IncompatibleChain`] if the quantities belong to different chains.
    pub fn unify(self, other: Self) -> Result<(Self, Self), PromotionError> {
        let rank = self.rank().common(other.rank())?;
        Ok((self.promote(rank)?, other.promote(rank)?))
    }

    pub fn into_integer(self) -> Option<i64> {
        match self {
            Quantity::Integer(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_float32(self) -> Option<f32> {
        match self {
            Quantity::Float32(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_float64(self) -> Option<f64> {
        match self {
            Quantity::Float64(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_size(self) -> Option<Size> {
        match self {
            Quantity::Size(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_point(self) -> Option<Point> {
        match self {
            Quantity::Point(value) => Some(value),
            _ => None,
        }
    }

    // Advances the quantity to the successor of its rank, or `None` at the top of its chain.
    fn step(self) -> Option<Self> {
        match self {
            Quantity::Integer(value) => Some(Quantity::Float32(value.as_())),
            Quantity::Float32(value) => Some(Quantity::Float64(f64::from(value))),
            Quantity::Size(value) => Some(Quantity::Point(value.into())),
            Quantity::Float64(_) | Quantity::Point(_) => None,
        }
    }
}

impl Display for Quantity {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Integer(value) => write!(formatter, "{}", value),
            Quantity::Float32(value) => write!(formatter, "{}", value),
            Quantity::Float64(value) => write!(formatter, "{}", value),
            Quantity::Size(value) => write!(formatter, "{}", value),
            Quantity::Point(value) => write!(formatter, "{}", value),
        }
    }
}

macro_rules! impl_from_for_quantity {
    (integer => $t:ty) => {
        impl From<$t> for Quantity {
            fn from(value: $t) -> Self {
                Quantity::Integer(i64::from(value))
            }
        }
    };
    (variant => $variant:ident, from => $t:ty) => {
        impl From<$t> for Quantity {
            fn from(value: $t) -> Self {
                Quantity::$variant(value)
            }
        }
    };
}
impl_from_for_quantity!(integer => i8);
impl_from_for_quantity!(integer => i16);
impl_from_for_quantity!(integer => i32);
impl_from_for_quantity!(integer => i64);
impl_from_for_quantity!(integer => u8);
impl_from_for_quantity!(integer => u16);
impl_from_for_quantity!(integer => u32);
impl_from_for_quantity!(variant => Float32, from => f32);
impl_from_for_quantity!(variant => Float64, from => f64);
impl_from_for_quantity!(variant => Size, from => Size);
impl_from_for_quantity!(variant => Point, from => Point);

macro_rules! impl_binary_operation_for_quantity {
    () => {
        with_binary_operations!(impl_binary_operation_for_quantity);
    };
    (operation => $trait:ident :: $method:ident, checked => $checked:ident) => {
        impl Quantity {
            /// Promotes both operands to their common rank and applies the operation.
            ///
            /// Compound quantities are combined component-wise.
            ///
            /// # Errors
            ///
            /// Returns [`PromotionError::IncompatibleChain`] if the operands belong to different
            /// chains and [`PromotionError::Overflow`] if integer arithmetic overflows.
            pub fn $checked(self, other: Self) -> Result<Self, PromotionError> {
                match self.unify(other)? {
                    (Quantity::Integer(left), Quantity::Integer(right)) => left
                        .$checked(right)
                        .map(Quantity::Integer)
                        .ok_or_else(|| OverflowError.into()),
                    (Quantity::Float32(left), Quantity::Float32(right)) => {
                        Ok(Quantity::Float32($trait::$method(left, right)))
                    }
                    (Quantity::Float64(left), Quantity::Float64(right)) => {
                        Ok(Quantity::Float64($trait::$method(left, right)))
                    }
                    (Quantity::Size(left), Quantity::Size(right)) => {
                        Ok(Quantity::Size($trait::$method(left, right)))
                    }
                    (Quantity::Point(left), Quantity::Point(right)) => {
                        Ok(Quantity::Point($trait::$method(left, right)))
                    }
                    (left, right) => unreachable!(
                        "unified quantities have different ranks: {} and {}",
                        left.rank(),
                        right.rank(),
                    ),
                }
            }
        }

        impl $trait for Quantity {
            type Output = Result<Self, PromotionError>;

            fn $method(self, other: Self) -> Self::Output {
                self.$checked(other)
            }
        }

        /// Classifies both operands and applies the operation at their common rank.
        ///
        /// See [`Quantity::classify`] and the checked operations of [`Quantity`].
        ///
        /// # Errors
        ///
        /// Returns an error if either operand has an unsupported type, if the operands belong to
        /// different chains, or if integer arithmetic overflows.
        pub fn $method(left: &dyn Any, right: &dyn Any) -> Result<Quantity, PromotionError> {
            Quantity::classify(left)?.$checked(Quantity::classify(right)?)
        }
    };
}
impl_binary_operation_for_quantity!();
