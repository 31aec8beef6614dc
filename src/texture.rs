//! Read-only textures for sampling during rasterization.

use std::path::Path;

use crate::color::Color;
use crate::mesh::LoadError;

/// A 2D texture addressed by normalized coordinates.
///
/// Rows are stored bottom-up: row 0 is the bottom of the image, matching
/// the OBJ texture coordinate convention where v = 0 is the bottom edge.
pub struct Texture {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl Texture {
    /// Load a texture from an image file (TGA, PNG, etc.).
    ///
    /// Decoders deliver rows top-down, so the rows are flipped on load to
    /// restore the bottom-up orientation. The alpha channel is forced
    /// fully opaque.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();

        let mut pixels = Vec::with_capacity((width * height) as usize);
        for y in (0..height).rev() {
            for x in 0..width {
                let [r, g, b, _] = img.get_pixel(x, y).0;
                pixels.push(Color::rgb(r, g, b));
            }
        }

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build a texture from raw pixel data, row 0 at the bottom.
    ///
    /// # Panics
    /// Panics if the pixel count does not match the dimensions.
    pub fn from_pixels(pixels: Vec<Color>, width: u32, height: u32) -> Self {
        assert_eq!(
            pixels.len(),
            (width * height) as usize,
            "pixel count doesn't match dimensions"
        );
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Sample the texture at normalized coordinates using nearest-neighbor
    /// rounding.
    ///
    /// The texel coordinate is clamped to the valid range, so callers may
    /// pass interpolated coordinates that land exactly on 1.0 (or slightly
    /// outside due to floating-point error) without reading out of bounds.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> Color {
        let x = ((u * self.width as f32).round() as i64).clamp(0, self.width as i64 - 1) as u32;
        let y = ((v * self.height as f32).round() as i64).clamp(0, self.height as i64 - 1) as u32;
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
