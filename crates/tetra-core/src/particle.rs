//! Particle - One lattice cell packed into a single word
//!
//! A particle is four independent quaternary digits, named A, C, T
//! and G after the nucleotide bases, each encoded in two bits of one
//! `u16`. The codec is a pure bit-level transform: it knows nothing
//! about lattice positions, and mutating one slot never disturbs the
//! other three.

use serde::{Deserialize, Serialize};

use crate::digit::Digit;

/// One of the four named digit slots of a particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    A,
    C,
    T,
    G,
}

impl Slot {
    /// All slots in bit-offset order.
    pub const ALL: [Slot; 4] = [Slot::A, Slot::C, Slot::T, Slot::G];

    /// Bit offset of this slot's 2-bit field within the packed word.
    pub fn offset(self) -> u32 {
        match self {
            Slot::A => 0,
            Slot::C => 2,
            Slot::T => 4,
            Slot::G => 6,
        }
    }
}

/// A particle: four 2-bit digit slots packed into one word.
///
/// A freshly constructed particle holds `Digit::Zero` in every slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Particle(u16);

impl Particle {
    /// Particle with all four slots at zero.
    pub fn new() -> Self {
        Self(0)
    }

    /// Reinterpret a raw packed word as a particle.
    ///
    /// Every 2-bit pattern is a valid digit ordinal, so this is total.
    pub fn from_word(word: u16) -> Self {
        Self(word)
    }

    /// The raw packed word.
    pub fn word(self) -> u16 {
        self.0
    }

    /// Extract the digit stored in a slot.
    pub fn get(self, slot: Slot) -> Digit {
        Digit::from_ordinal(((self.0 >> slot.offset()) & 0b11) as u8)
    }

    /// Copy of this particle with one slot replaced.
    ///
    /// Clears the slot's two bits and writes the digit's encoding;
    /// all other bits are untouched.
    pub fn with(self, slot: Slot, digit: Digit) -> Particle {
        let offset = slot.offset();
        Particle((self.0 & !(0b11 << offset)) | ((digit.ordinal() as u16) << offset))
    }

    /// The A slot digit.
    pub fn a(self) -> Digit {
        self.get(Slot::A)
    }

    /// The C slot digit.
    pub fn c(self) -> Digit {
        self.get(Slot::C)
    }

    /// The T slot digit.
    pub fn t(self) -> Digit {
        self.get(Slot::T)
    }

    /// The G slot digit.
    pub fn g(self) -> Digit {
        self.get(Slot::G)
    }
}
