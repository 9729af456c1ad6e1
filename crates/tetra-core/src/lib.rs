//! # Tetra Core
//!
//! Deterministic engine for a toroidal 4D lattice of quaternary-state
//! particles.
//!
//! The crate provides the fundamental building blocks:
//! - `Digit` - A 4-valued cell digit with signed-zero semantics
//! - `Particle` - Four digit slots (A, C, T, G) packed into one word
//! - `Lattice` - The flat, fixed-size, 4-indexed particle store
//! - `randomize` - One-shot random seeding of the A and C slots
//! - `advance_frame` - One rotate-then-propagate pass over the lattice
//!
//! ## Architecture
//!
//! ```text
//!   randomize ──► Lattice ◄────────── renderer reads between frames
//!                   ▲ │
//!                   │ ▼  per cell, in fixed x,y,z,τ order:
//!              advance_frame:  rotate (axis rule table)
//!                              + Σ over 3⁴ = 81 toroidal neighbors
//!                              → write back in place
//! ```
//!
//! The engine is single-threaded and order dependent by design; one
//! `&mut Lattice` borrow per frame is the whole concurrency story.

pub mod digit;
pub mod engine;
pub mod error;
pub mod lattice;
pub mod particle;
pub mod seed;

pub use digit::*;
pub use engine::*;
pub use error::*;
pub use lattice::*;
pub use particle::*;
pub use seed::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::digit::Digit;
    pub use crate::engine::{advance_frame, rotate, ROTATION_RULES};
    pub use crate::error::{LatticeError, Result};
    pub use crate::lattice::{wrap, Extents, Lattice, DEFAULT_EXTENTS};
    pub use crate::particle::{Particle, Slot};
    pub use crate::seed::randomize;
}
