//! Rank-based numeric promotion: arithmetic over dynamically typed scalar and compound quantities
//! that widens the narrower operand before applying an operation.
//!
//! Values are classified into [`Quantity`]s, each tagged with a [`Rank`]. Ranks form two disjoint
//! promotion [`Chain`]s: scalars (`Integer < Float32 < Float64`) and compounds (`Size < Point`).
//! Binary operations promote both operands to their common rank and then apply the operation at
//! that rank. Combining operands from different chains is an error.
//!
//! ```rust
//! use promotion::{Point, Quantity, Rank, Size};
//!
//! let sum = promotion::add(&2, &0.5f64).unwrap();
//! assert_eq!(sum, Quantity::Float64(2.5));
//!
//! let sum = promotion::add(&Size::new(1.0, 2.0), &Point::new(3.0, 4.0)).unwrap();
//! assert_eq!(sum, Quantity::Point(Point::new(4.0, 6.0)));
//!
//! assert!(promotion::add(&1, &Point::new(0.0, 0.0)).is_err());
//! assert!(promotion::add(&"x", &1).is_err());
//! ```
//!
//! # Features
//!
//! | Feature   | Default | Description                                             |
//! |-----------|---------|---------------------------------------------------------|
//! | `std`     | yes     | Error types implement `std::error::Error`. Float powers. |
//! | `serde`   | yes     | Serialization of all data types.                        |
//! | `approx`  | yes     | Approximate equality of [`Point`] and [`Size`].         |
//! | `tracing` | no      | Trace events for promotions.                            |

#![no_std]

#[cfg(feature = "std")]
extern crate std;

use core::any::Any;

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

macro_rules! with_binary_operations {
    ($f:ident$(,)?) => {
        $f!(operation => Add::add, checked => checked_add);
        $f!(operation => Sub::sub, checked => checked_sub);
    };
}

macro_rules! with_integers {
    ($f:ident$(,)?) => {
        $f!(integer => i8);
        $f!(integer => i16);
        $f!(integer => i32);
        $f!(integer => i64);
        $f!(integer => i128);
        $f!(integer => isize);
        $f!(integer => u8);
        $f!(integer => u16);
        $f!(integer => u32);
        $f!(integer => u64);
        $f!(integer => u128);
        $f!(integer => usize);
    };
}

macro_rules! with_floats {
    ($f:ident$(,)?) => {
        $f!(float => f32);
        $f!(float => f64);
    };
}

mod error;
mod geometry;
mod power;
mod quantity;
mod rank;

pub use crate::error::{
    IncompatibleChainError, OverflowError, PromotionError, UnsupportedTypeError,
};
pub use crate::geometry::{Place, Point, Side, Size};
pub use crate::power::Power;
pub use crate::quantity::{add, sub, Quantity};
pub use crate::rank::{Chain, Rank};

/// Classifies a dynamically typed value as a [`Quantity`].
///
/// See [`Quantity::classify`].
pub fn classify(raw: &dyn Any) -> Result<Quantity, PromotionError> {
    Quantity::classify(raw)
}

/// Promotes a [`Quantity`] to the given rank.
///
/// See [`Quantity::promote`].
pub fn promote(quantity: Quantity, rank: Rank) -> Result<Quantity, PromotionError> {
    quantity.promote(rank)
}

#[cfg(test)]
mod tests {
    use crate::{Point, PromotionError, Quantity, Rank};

    #[test]
    fn free_functions_delegate_to_quantity() {
        let quantity = crate::classify(&1u8).unwrap();
        assert_eq!(quantity, Quantity::Integer(1));
        assert_eq!(
            crate::promote(quantity, Rank::Float64).unwrap(),
            Quantity::Float64(1.0),
        );
        assert!(matches!(
            crate::promote(Quantity::from(Point::new(0.0, 0.0)), Rank::Integer),
            Err(PromotionError::IncompatibleChain(_)),
        ));
    }

    #[test]
    fn quantities_are_send_and_sync() {
        fn as_send_sync<T>(_: T)
        where
            T: Copy + Send + Sync,
        {
        }

        as_send_sync(Quantity::Integer(0));
        as_send_sync(Rank::Integer);
        as_send_sync(crate::add(&1, &1));
    }
}
