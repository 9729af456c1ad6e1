//! Frame engine - One synchronous rotate-then-propagate pass
//!
//! A frame visits every cell in fixed lexicographic order (x outer,
//! then y, z, tau), rotates its four slots through the axis rule
//! table, accumulates the full 81-term toroidal neighborhood sum on
//! top of the rotated word, and writes the result back immediately.
//!
//! The update is in place and order dependent: cells visited earlier
//! in the pass are read post-update by later cells, and a cell's own
//! stored word still holds its pre-rotation value when its self-term
//! is read. That is the rule, not an accident — a double-buffered
//! stencil would compute a different automaton.

use std::time::Instant;

use crate::digit::Digit;
use crate::lattice::{wrap, Extents, Lattice};
use crate::particle::{Particle, Slot};

/// Per-axis rotation rule: `(read, write)` slot pairs applied in axis
/// order, each writing `add(read, One)` into the write slot.
///
/// Axis 2 reads G while writing T. The asymmetry is part of the
/// observable rule and stays verbatim in this table; normalizing it
/// to `(T, T)` would define a different automaton.
pub const ROTATION_RULES: [(Slot, Slot); 4] = [
    (Slot::A, Slot::A),
    (Slot::C, Slot::C),
    (Slot::G, Slot::T),
    (Slot::G, Slot::G),
];

/// Apply the four axis rotations to one particle, in axis order.
///
/// Rules run sequentially on the evolving word, so axis 2 sees G
/// before axis 3 increments it.
pub fn rotate(particle: Particle) -> Particle {
    let mut rotated = particle;
    for (read, write) in ROTATION_RULES {
        rotated = rotated.with(write, rotated.get(read).add(Digit::One));
    }
    rotated
}

/// Advance the lattice by exactly one frame, in place.
///
/// For each cell: rotate, then add the digits of all 3^4 = 81
/// neighborhood reads (offsets -1..=1 per axis, self-offset included,
/// every axis wrapped independently) slot-wise into the rotated word,
/// then store. On size-1 axes all three offsets wrap to the same
/// coordinate, so that axis legitimately contributes each neighbor
/// three times.
pub fn advance_frame(lattice: &mut Lattice) {
    let started = Instant::now();
    let Extents { x: xe, y: ye, z: ze, tau: te } = lattice.extents();

    for x in 0..xe {
        for y in 0..ye {
            for z in 0..ze {
                for tau in 0..te {
                    let rotated = rotate(lattice.get(x, y, z, tau));
                    let summed = propagate(lattice, rotated, x, y, z, tau);
                    lattice.set(x, y, z, tau, summed);
                }
            }
        }
    }

    tracing::debug!(
        cells = lattice.cell_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "frame advanced"
    );
}

/// Sum the 81-term neighborhood into the rotated word.
///
/// Reads go through the live store, so the self-term at offset
/// (0,0,0,0) yields the cell's pre-rotation word (the post-rotation
/// result is only written after propagation).
fn propagate(
    lattice: &Lattice,
    rotated: Particle,
    x: usize,
    y: usize,
    z: usize,
    tau: usize,
) -> Particle {
    let Extents { x: xe, y: ye, z: ze, tau: te } = lattice.extents();
    let mut particle = rotated;

    for i in -1isize..=1 {
        for j in -1isize..=1 {
            for k in -1isize..=1 {
                for l in -1isize..=1 {
                    let neighbor = lattice.get(
                        wrap(xe, x, i),
                        wrap(ye, y, j),
                        wrap(ze, z, k),
                        wrap(te, tau, l),
                    );
                    for slot in Slot::ALL {
                        particle = particle.with(slot, particle.get(slot).add(neighbor.get(slot)));
                    }
                }
            }
        }
    }

    particle
}
