//! # Tetra Render
//!
//! Raster collaborator for the Tetra lattice engine. Reads a lattice
//! between frames and composites it to a 2D RGB canvas:
//! - `particle_color` - RGBA mapping from projected digits and z/tau
//! - `FrameRaster` - fixed-size canvas with alpha-over blending
//! - `render` - paint one full lattice frame
//!
//! The core never depends on this crate; rendering only reads.

pub mod raster;

pub use raster::*;
