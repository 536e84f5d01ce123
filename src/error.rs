//! Errors raised when classifying, promoting, or combining quantities.
//!
//! Every condition that a caller can trigger with bad input is reported as a [`PromotionError`].
//! Each kind of error is also its own type, so that narrower operations like
//! [`Rank::common`] can return only the error they may actually produce.
//!
//! [`Rank::common`]: crate::Rank::common

#[cfg(not(feature = "std"))]
use core::fmt::{self, Display, Formatter};
#[cfg(feature = "std")]
use thiserror::Error;

use crate::rank::Rank;

pub(crate) trait Description {
    const DESCRIPTION: &'static str;
}

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PromotionError {
    #[cfg_attr(feature = "std", error(transparent))]
    UnsupportedType(UnsupportedTypeError),
    #[cfg_attr(feature = "std", error(transparent))]
    IncompatibleChain(IncompatibleChainError),
    #[cfg_attr(feature = "std", error(transparent))]
    Overflow(OverflowError),
}

#[cfg(not(feature = "std"))]
impl Display for PromotionError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PromotionError::UnsupportedType(error) => Display::fmt(error, formatter),
            PromotionError::IncompatibleChain(error) => Display::fmt(error, formatter),
            PromotionError::Overflow(error) => Display::fmt(error, formatter),
        }
    }
}

impl From<UnsupportedTypeError> for PromotionError {
    fn from(error: UnsupportedTypeError) -> Self {
        PromotionError::UnsupportedType(error)
    }
}

impl From<IncompatibleChainError> for PromotionError {
    fn from(error: IncompatibleChainError) -> Self {
        PromotionError::IncompatibleChain(error)
    }
}

impl From<OverflowError> for PromotionError {
    fn from(error: OverflowError) -> Self {
        PromotionError::Overflow(error)
    }
}

/// The dynamic type of a value is not a recognized numeric representation.
#[cfg_attr(feature = "std", derive(Error))]
#[cfg_attr(feature = "std", error("{}", UnsupportedTypeError::DESCRIPTION))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnsupportedTypeError;

impl Description for UnsupportedTypeError {
    const DESCRIPTION: &'static str = "value is not an integer, float, point, or size";
}

#[cfg(not(feature = "std"))]
impl Display for UnsupportedTypeError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", UnsupportedTypeError::DESCRIPTION)
    }
}

/// A value of rank `from` cannot be brought to rank `to`.
///
/// This occurs when the ranks belong to different [chains][`Chain`] or when `to` is lower than
/// `from` (demotion).
///
/// [`Chain`]: crate::Chain
#[cfg_attr(feature = "std", derive(Error))]
#[cfg_attr(
    feature = "std",
    error("{}: cannot promote {from} to {to}", IncompatibleChainError::DESCRIPTION)
)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IncompatibleChainError {
    pub from: Rank,
    pub to: Rank,
}

impl IncompatibleChainError {
    pub(crate) const fn new(from: Rank, to: Rank) -> Self {
        IncompatibleChainError { from, to }
    }
}

impl Description for IncompatibleChainError {
    const DESCRIPTION: &'static str = "incompatible promotion chain";
}

#[cfg(not(feature = "std"))]
impl Display for IncompatibleChainError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: cannot promote {} to {}",
            IncompatibleChainError::DESCRIPTION,
            self.from,
            self.to,
        )
    }
}

/// Integer arithmetic overflowed.
#[cfg_attr(feature = "std", derive(Error))]
#[cfg_attr(feature = "std", error("{}", OverflowError::DESCRIPTION))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OverflowError;

impl Description for OverflowError {
    const DESCRIPTION: &'static str = "integer arithmetic overflowed";
}

#[cfg(not(feature = "std"))]
impl Display for OverflowError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", OverflowError::DESCRIPTION)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::string::ToString;

    use crate::error::{IncompatibleChainError, OverflowError, PromotionError};
    use crate::Rank;

    #[test]
    fn display_names_both_ranks() {
        let error: PromotionError = IncompatibleChainError::new(Rank::Float64, Rank::Integer).into();
        assert_eq!(
            error.to_string(),
            "incompatible promotion chain: cannot promote 64-bit float to integer",
        );
    }

    #[test]
    fn display_is_transparent() {
        let error: PromotionError = OverflowError.into();
        assert_eq!(error.to_string(), OverflowError.to_string());
    }
}
