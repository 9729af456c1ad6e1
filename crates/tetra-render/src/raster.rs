//! Raster compositing for lattice frames
//!
//! Maps each particle's projected digits to a color and paints the
//! four-dimensional lattice onto a 2D canvas: x and y pick the pixel,
//! z and tau pick the layer opacity, later layers alpha-blended over
//! earlier ones on a black background.

use std::io::{self, Write};
use std::time::Instant;

use tetra_core::prelude::*;

/// An RGBA color, straight alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Color for one particle, or `None` when all four projections are
/// zero (such particles are invisible, not black).
///
/// Channel mapping: A drives red, C green, and the mean of T and G
/// blue, each projected value scaled from [-1, 1] to [0, 255]. The
/// z and tau coordinates set the opacity of the particle's layer.
pub fn particle_color(particle: Particle, z: usize, tau: usize, extents: Extents) -> Option<Rgba> {
    let a = particle.a().to_int();
    let c = particle.c().to_int();
    let t = particle.t().to_int();
    let g = particle.g().to_int();

    if (a, c, t, g) == (0, 0, 0, 0) {
        return None;
    }

    let channel = |v: f32| ((v + 1.0) * 127.5).round().clamp(0.0, 255.0) as u8;

    let red = channel(a as f32);
    let green = channel(c as f32);
    let blue = channel((t as f32 + g as f32) / 2.0);

    let depth = (z + tau) as f32 / (extents.z * extents.tau) as f32;
    let alpha = (255.0 * depth).round().clamp(0.0, 255.0) as u8;

    Some(Rgba { r: red, g: green, b: blue, a: alpha })
}

/// A fixed-size RGB canvas, black until painted.
pub struct FrameRaster {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 3]>,
}

impl FrameRaster {
    /// Allocate a black canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0]; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at (px, py). Row-major, y down.
    pub fn pixel(&self, px: usize, py: usize) -> [u8; 3] {
        self.pixels[py * self.width + px]
    }

    /// Reset every pixel to black.
    pub fn clear(&mut self) {
        self.pixels.fill([0, 0, 0]);
    }

    /// Alpha-blend a color over the current pixel value.
    pub fn blend(&mut self, px: usize, py: usize, color: Rgba) {
        let pixel = &mut self.pixels[py * self.width + px];
        let alpha = color.a as u16;
        let over = |dst: u8, src: u8| {
            ((dst as u16 * (255 - alpha) + src as u16 * alpha) / 255) as u8
        };
        *pixel = [
            over(pixel[0], color.r),
            over(pixel[1], color.g),
            over(pixel[2], color.b),
        ];
    }

    /// Binary PPM (P6) export of the composited canvas.
    pub fn write_ppm(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        for pixel in &self.pixels {
            out.write_all(pixel)?;
        }
        Ok(())
    }
}

/// Paint one lattice frame onto the raster.
///
/// Clears to black, then visits cells in lattice order so higher z and
/// tau layers land on top. Pixel position is the integer-scaled (x, y);
/// lattices wider than the canvas collapse onto column 0 rather than
/// clip.
pub fn render(lattice: &Lattice, raster: &mut FrameRaster) {
    let started = Instant::now();
    let extents = lattice.extents();
    let scale_x = raster.width() / extents.x;
    let scale_y = raster.height() / extents.y;

    raster.clear();
    for x in 0..extents.x {
        for y in 0..extents.y {
            for z in 0..extents.z {
                for tau in 0..extents.tau {
                    let Some(color) = particle_color(lattice.get(x, y, z, tau), z, tau, extents)
                    else {
                        continue;
                    };
                    let px = x * scale_x;
                    let py = y * scale_y;
                    if px < raster.width() && py < raster.height() {
                        raster.blend(px, py, color);
                    }
                }
            }
        }
    }

    tracing::debug!(
        width = raster.width(),
        height = raster.height(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "frame rendered"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extents() -> Extents {
        Extents { x: 4, y: 4, z: 2, tau: 2 }
    }

    #[test]
    fn test_all_zero_projection_is_invisible() {
        // -0 projects to 0, so a word of signed zeros renders as
        // nothing even though the packed word is nonzero.
        let particle = Particle::new()
            .with(Slot::A, Digit::MinusZero)
            .with(Slot::T, Digit::MinusZero);
        assert!(particle.word() != 0);
        assert_eq!(particle_color(particle, 1, 1, extents()), None);
    }

    #[test]
    fn test_channel_endpoints() {
        let particle = Particle::new()
            .with(Slot::A, Digit::One)
            .with(Slot::C, Digit::MinusOne)
            .with(Slot::T, Digit::One)
            .with(Slot::G, Digit::One);

        let color = particle_color(particle, 0, 0, extents()).unwrap();
        assert_eq!(color.r, 255);
        assert_eq!(color.g, 0);
        assert_eq!(color.b, 255);
        assert_eq!(color.a, 0);
    }

    #[test]
    fn test_zero_digits_map_to_midscale() {
        let particle = Particle::new().with(Slot::A, Digit::One);
        let color = particle_color(particle, 1, 1, extents()).unwrap();
        // C, T and G are zero: (0 + 1) * 127.5 rounds to 128.
        assert_eq!(color.g, 128);
        assert_eq!(color.b, 128);
        // Deepest layer of a 2x2 z/tau block: 255 * 2/4.
        assert_eq!(color.a, 128);
    }

    #[test]
    fn test_blend_over_black() {
        let mut raster = FrameRaster::new(2, 2);
        raster.blend(1, 0, Rgba { r: 255, g: 0, b: 0, a: 255 });
        assert_eq!(raster.pixel(1, 0), [255, 0, 0]);

        // Zero alpha leaves the background untouched.
        raster.blend(0, 0, Rgba { r: 255, g: 255, b: 255, a: 0 });
        assert_eq!(raster.pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_render_plots_scaled_pixel() {
        let mut lattice = Lattice::new(extents()).unwrap();
        lattice.set(2, 1, 1, 1, Particle::new().with(Slot::A, Digit::One));

        let mut raster = FrameRaster::new(8, 8);
        render(&lattice, &mut raster);

        // Scale factor 8 / 4 = 2, so cell (2, 1) paints pixel (4, 2).
        assert_ne!(raster.pixel(4, 2), [0, 0, 0]);
        assert_eq!(raster.pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_ppm_header() {
        let raster = FrameRaster::new(3, 2);
        let mut bytes = Vec::new();
        raster.write_ppm(&mut bytes).unwrap();

        assert!(bytes.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(bytes.len(), b"P6\n3 2\n255\n".len() + 3 * 2 * 3);
    }
}
