//! Digit - The quaternary value held in one particle slot
//!
//! Every slot of a particle carries one of four symbolic values:
//! 0, +1, -1 and -0. Addition is modulo 4 over that fixed ordering,
//! making each slot an order-4 cyclic group. The two zeros collapse
//! to the same magnitude under integer projection but stay distinct
//! under addition, so the signed zero must be kept as its own value
//! rather than folded into an integer early.

use serde::{Deserialize, Serialize};

/// A quaternary digit with signed-zero semantics.
///
/// The ordinal ordering {0, +1, -1, -0} is the arithmetic backbone of
/// the whole engine; every rotation and propagation step reduces to
/// `add` over this table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Digit {
    /// Positive zero, ordinal 0. The additive identity.
    #[default]
    Zero,
    /// Plus one, ordinal 1.
    One,
    /// Minus one, ordinal 2.
    MinusOne,
    /// Negative zero, ordinal 3. Projects to 0 but is not the identity.
    MinusZero,
}

impl Digit {
    /// All four digits in ordinal order.
    pub const ALL: [Digit; 4] = [Digit::Zero, Digit::One, Digit::MinusOne, Digit::MinusZero];

    /// Position of this digit in the fixed cyclic ordering.
    pub fn ordinal(self) -> u8 {
        match self {
            Digit::Zero => 0,
            Digit::One => 1,
            Digit::MinusOne => 2,
            Digit::MinusZero => 3,
        }
    }

    /// Digit at the given ordinal, reduced modulo 4 first so any raw
    /// bit pattern maps to a valid digit.
    pub fn from_ordinal(ordinal: u8) -> Self {
        match ordinal % 4 {
            0 => Digit::Zero,
            1 => Digit::One,
            2 => Digit::MinusOne,
            _ => Digit::MinusZero,
        }
    }

    /// Modulo-4 addition over the ordinal table. Total and commutative,
    /// with `Zero` as the identity.
    pub fn add(self, other: Digit) -> Digit {
        Digit::from_ordinal(self.ordinal() + other.ordinal())
    }

    /// Project to an integer magnitude in {-1, 0, 1}.
    ///
    /// Both zeros land on 0 here, so `to_int` loses the distinction
    /// that `add` preserves. Projection is for readers (renderers);
    /// arithmetic must stay in digit space.
    pub fn to_int(self) -> i8 {
        match self {
            Digit::Zero => 0,
            Digit::One => 1,
            Digit::MinusOne => -1,
            Digit::MinusZero => 0,
        }
    }
}
