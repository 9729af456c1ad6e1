//! Lattice - The flat 4-indexed store of particles
//!
//! The lattice is a fixed-size block of `X × Y × Z × Tau` particles
//! addressed by a strict row-major linearization. All four axes are
//! toroidal: coordinate arithmetic wraps modulo the extent, so the
//! lattice has no edges. The store itself takes already-wrapped
//! coordinates; wrapping is the frame engine's job, done through
//! [`wrap`] before any access.

use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, Result};
use crate::particle::Particle;

/// Default lattice shape: 500 × 500 × 2 × 2, one million cells.
pub const DEFAULT_EXTENTS: Extents = Extents {
    x: 500,
    y: 500,
    z: 2,
    tau: 2,
};

/// Axis extents of a lattice. Fixed at construction, never resized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extents {
    pub x: usize,
    pub y: usize,
    pub z: usize,
    pub tau: usize,
}

impl Extents {
    /// Total number of cells, checked against address-space overflow.
    pub fn cell_count(&self) -> Result<usize> {
        self.x
            .checked_mul(self.y)
            .and_then(|n| n.checked_mul(self.z))
            .and_then(|n| n.checked_mul(self.tau))
            .filter(|&n| n <= isize::MAX as usize)
            .ok_or(LatticeError::TooManyCells {
                cells: self.x as u128 * self.y as u128 * self.z as u128 * self.tau as u128,
            })
    }

    fn validate(&self) -> Result<()> {
        for (axis, extent) in [('x', self.x), ('y', self.y), ('z', self.z), ('t', self.tau)] {
            if extent == 0 {
                return Err(LatticeError::ZeroExtent { axis });
            }
        }
        Ok(())
    }
}

impl Default for Extents {
    fn default() -> Self {
        DEFAULT_EXTENTS
    }
}

/// Wrap `coord + offset` onto the torus of the given axis extent.
///
/// `coord` must already be in range and `offset` no more negative than
/// `-extent`; the engine only ever passes offsets in -1..=1.
pub fn wrap(extent: usize, coord: usize, offset: isize) -> usize {
    debug_assert!(coord < extent);
    debug_assert!(offset >= -(extent as isize));
    ((coord as isize + offset + extent as isize) % extent as isize) as usize
}

/// The lattice: exclusive owner of the full particle store.
///
/// Allocated once, zero-initialized, mutated in place by the frame
/// engine, and freely readable between frames. There is exactly one
/// writer per frame; the `&mut` borrow enforces that discipline.
pub struct Lattice {
    extents: Extents,
    cells: Vec<Particle>,
}

impl Lattice {
    /// Allocate a zeroed lattice with the given extents.
    pub fn new(extents: Extents) -> Result<Self> {
        extents.validate()?;
        let cells = vec![Particle::new(); extents.cell_count()?];
        Ok(Self { extents, cells })
    }

    /// The lattice shape.
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major linear index: x · (Y·Z·T) + y · (Z·T) + z · T + t.
    fn index(&self, x: usize, y: usize, z: usize, tau: usize) -> usize {
        let Extents { y: ye, z: ze, tau: te, .. } = self.extents;
        debug_assert!(x < self.extents.x && y < ye && z < ze && tau < te);
        x * (ye * ze * te) + y * (ze * te) + z * te + tau
    }

    /// Read the particle at already-wrapped coordinates. O(1).
    pub fn get(&self, x: usize, y: usize, z: usize, tau: usize) -> Particle {
        self.cells[self.index(x, y, z, tau)]
    }

    /// Write the particle at already-wrapped coordinates. O(1).
    pub fn set(&mut self, x: usize, y: usize, z: usize, tau: usize, particle: Particle) {
        let index = self.index(x, y, z, tau);
        self.cells[index] = particle;
    }

    /// The raw cell store, in linearization order.
    pub fn cells(&self) -> &[Particle] {
        &self.cells
    }
}
