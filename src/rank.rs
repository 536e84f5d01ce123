//! Ranks and promotion chains.
//!
//! A [`Rank`] identifies the representation of a [`Quantity`] and its position in a promotion
//! [`Chain`]. Ranks are ordered by generality: if `a < b`, then every value representable at `a`
//! can be promoted to `b`. There are two disjoint chains:
//!
//! | Chain                | Ranks (lowest to highest)          | Promotion                  |
//! |----------------------|------------------------------------|----------------------------|
//! | [`Chain::Scalar`]    | `Integer`, `Float32`, `Float64`    | numeric widening           |
//! | [`Chain::Compound`]  | `Size`, `Point`                    | `(width, height) → (x, y)` |
//!
//! Ranks in different chains are **incomparable**, so [`Rank`] implements [`PartialOrd`] but not
//! [`Ord`].
//!
//! ```rust
//! use promotion::Rank;
//!
//! assert!(Rank::Integer < Rank::Float64);
//! assert!(Rank::Size < Rank::Point);
//! assert!(Rank::Integer.partial_cmp(&Rank::Point).is_none());
//! ```
//!
//! [`Quantity`]: crate::Quantity

use core::cmp::Ordering;
use core::fmt::{self, Display, Formatter};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

use crate::error::IncompatibleChainError;

/// A promotion chain: a totally ordered set of [`Rank`]s.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Chain {
    /// Single numbers.
    Scalar,
    /// Two-component geometric pairs.
    Compound,
}

impl Chain {
    /// The lowest rank of the chain.
    pub const fn least(self) -> Rank {
        match self {
            Chain::Scalar => Rank::Integer,
            Chain::Compound => Rank::Size,
        }
    }

    /// The highest rank of the chain. Values at this rank cannot be promoted.
    pub const fn greatest(self) -> Rank {
        match self {
            Chain::Scalar => Rank::Float64,
            Chain::Compound => Rank::Point,
        }
    }
}

/// The representation of a [`Quantity`] and its position in a [`Chain`].
///
/// [`Quantity`]: crate::Quantity
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Rank {
    Integer,
    Float32,
    Float64,
    Size,
    Point,
}

impl Rank {
    pub const fn chain(self) -> Chain {
        match self {
            Rank::Integer | Rank::Float32 | Rank::Float64 => Chain::Scalar,
            Rank::Size | Rank::Point => Chain::Compound,
        }
    }

    /// The rank immediately above this one in its chain, if any.
    pub const fn successor(self) -> Option<Rank> {
        match self {
            Rank::Integer => Some(Rank::Float32),
            Rank::Float32 => Some(Rank::Float64),
            Rank::Size => Some(Rank::Point),
            Rank::Float64 | Rank::Point => None,
        }
    }

    /// Gets the least rank to which both `self` and `other` can be promoted.
    ///
    /// # Errors
    ///
    /// Returns an error if the ranks belong to different chains.
    pub fn common(self, other: Rank) -> Result<Rank, IncompatibleChainError> {
        match self.partial_cmp(&other) {
            Some(Ordering::Less) => Ok(other),
            Some(_) => Ok(self),
            None => Err(IncompatibleChainError::new(self, other)),
        }
    }

    // Position within the chain. Only comparable between ranks of the same chain.
    const fn position(self) -> u8 {
        match self {
            Rank::Integer | Rank::Size => 0,
            Rank::Float32 | Rank::Point => 1,
            Rank::Float64 => 2,
        }
    }
}

impl Display for Rank {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}",
            match self {
                Rank::Integer => "integer",
                Rank::Float32 => "32-bit float",
                Rank::Float64 => "64-bit float",
                Rank::Size => "size",
                Rank::Point => "point",
            },
        )
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.chain() == other.chain() {
            Some(self.position().cmp(&other.position()))
        }
        else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use crate::{Chain, Rank};

    const RANKS: [Rank; 5] = [
        Rank::Integer,
        Rank::Float32,
        Rank::Float64,
        Rank::Size,
        Rank::Point,
    ];

    #[test]
    fn scalar_chain_is_ordered_by_generality() {
        assert!(Rank::Integer < Rank::Float32);
        assert!(Rank::Float32 < Rank::Float64);
        assert!(Rank::Integer < Rank::Float64);
    }

    #[test]
    fn compound_chain_promotes_size_to_point() {
        assert!(Rank::Size < Rank::Point);
        assert_eq!(Rank::Size.successor(), Some(Rank::Point));
        assert_eq!(Rank::Point.successor(), None);
    }

    #[test]
    fn ranks_of_different_chains_are_incomparable() {
        for a in RANKS {
            for b in RANKS {
                let ordering = a.partial_cmp(&b);
                if a.chain() == b.chain() {
                    assert!(ordering.is_some());
                }
                else {
                    assert_eq!(ordering, None);
                    assert!(!(a < b) && !(a > b) && a != b);
                }
            }
        }
    }

    #[test]
    fn successors_stay_in_chain_and_end_at_greatest() {
        for chain in [Chain::Scalar, Chain::Compound] {
            let mut rank = chain.least();
            while let Some(next) = rank.successor() {
                assert_eq!(next.chain(), chain);
                assert_eq!(rank.partial_cmp(&next), Some(Ordering::Less));
                rank = next;
            }
            assert_eq!(rank, chain.greatest());
        }
    }

    #[test]
    fn common_rank_is_least_upper_bound() {
        assert_eq!(Rank::Integer.common(Rank::Float32).unwrap(), Rank::Float32);
        assert_eq!(Rank::Float64.common(Rank::Integer).unwrap(), Rank::Float64);
        assert_eq!(Rank::Float32.common(Rank::Float32).unwrap(), Rank::Float32);
        assert_eq!(Rank::Size.common(Rank::Point).unwrap(), Rank::Point);
        assert!(Rank::Integer.common(Rank::Size).is_err());
        assert!(Rank::Point.common(Rank::Float64).is_err());
    }
}
