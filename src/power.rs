//! Exponentiation.
//!
//! [`Power`] raises a value to a power of its own type. Integer powers are computed by squaring
//! and treat non-positive exponents as the empty product, so any base raised to `0` or a negative
//! exponent is `1`. Floating-point powers require the `std` feature.
//!
//! ```rust
//! use promotion::Power;
//!
//! assert_eq!(2i64.power(10), 1024);
//!
//! let mut x = 3i32;
//! x.power_assign(3);
//! assert_eq!(x, 27);
//! ```

use num_traits::PrimInt;

pub trait Power: Copy + Sized {
    /// Raises `self` to the power `exponent`.
    ///
    /// # Panics
    ///
    /// Integer implementations panic on overflow in debug builds, like the primitive arithmetic
    /// operators.
    fn power(self, exponent: Self) -> Self;

    fn power_assign(&mut self, exponent: Self) {
        *self = self.power(exponent);
    }
}

// Exponentiation by squaring over the exponent's bits.
fn integer_power<T>(base: T, exponent: T) -> T
where
    T: PrimInt,
{
    let mut result = T::one();
    let mut base = base;
    let mut exponent = exponent;
    while exponent > T::zero() {
        if exponent & T::one() == T::one() {
            result = result * base;
        }
        exponent = exponent >> 1;
        if exponent > T::zero() {
            base = base * base;
        }
    }
    result
}

macro_rules! impl_power {
    (integer => $t:ty) => {
        impl Power for $t {
            fn power(self, exponent: Self) -> Self {
                integer_power(self, exponent)
            }
        }
    };
    (float => $t:ty) => {
        #[cfg(feature = "std")]
        impl Power for $t {
            fn power(self, exponent: Self) -> Self {
                num_traits::Float::powf(self, exponent)
            }
        }
    };
}
with_integers!(impl_power);
with_floats!(impl_power);
