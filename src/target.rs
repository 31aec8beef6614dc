//! The raster target: paired color and depth grids.

use std::path::Path;

use image::ImageFormat;
use thiserror::Error;

use crate::color::Color;

/// Errors that can occur while encoding the finished image.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encode error: {0}")]
    Encode(#[from] image::ImageError),
}

/// A width x height color buffer with a matching depth buffer.
///
/// Both grids are addressed by integer (x, y) with y = 0 at the top.
/// The depth buffer holds screen-space depth where larger means closer
/// to the viewer; it starts at `f32::MIN`, meaning nothing has been
/// drawn yet.
pub struct RasterTarget {
    color: Vec<Color>,
    depth: Vec<f32>,
    width: u32,
    height: u32,
}

impl RasterTarget {
    /// Create a target cleared to the background color and minimum depth.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let size = (width * height) as usize;
        Self {
            color: vec![background; size],
            depth: vec![f32::MIN; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    /// The stored depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn depth_at(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|i| self.depth[i])
    }

    /// The stored color at (x, y), or None if out of bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.color[i])
    }

    /// Write both color and depth at (x, y).
    ///
    /// The caller decides the depth test; this write is unconditional.
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Color, depth: f32) {
        if let Some(i) = self.index(x, y) {
            self.color[i] = color;
            self.depth[i] = depth;
        }
    }

    /// Encode the color buffer as a PNG file.
    ///
    /// Written pixels are always fully opaque; no blending happens in the
    /// pipeline, so the alpha channel is whatever the background and
    /// texture colors carried (255 throughout).
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<(), EncodeError> {
        let mut bytes = Vec::with_capacity(self.color.len() * 4);
        for color in &self.color {
            bytes.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        image::save_buffer_with_format(
            path,
            &bytes,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
            ImageFormat::Png,
        )?;
        Ok(())
    }
}
