//! RGBA color with explicit channel storage.
//!
//! The four channels are stored as separate bytes; the packed `u32` form
//! exists only as an explicit conversion, never as overlapping storage.

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Pack into a single `u32` in 0xAARRGGBB layout.
    pub fn to_packed(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpack from a single `u32` in 0xAARRGGBB layout.
    pub fn from_packed(value: u32) -> Self {
        Self {
            a: (value >> 24) as u8,
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Scale the RGB channels by a lighting intensity, saturating each
    /// channel to [0, 255]. Alpha is untouched.
    ///
    /// Negative intensities clamp to black rather than wrapping. This is a
    /// deliberate choice: scaling must never rely on an implicit float to
    /// byte truncation.
    pub fn scale(self, intensity: f32) -> Self {
        let scale_channel = |c: u8| (c as f32 * intensity).clamp(0.0, 255.0) as u8;
        Self {
            r: scale_channel(self.r),
            g: scale_channel(self.g),
            b: scale_channel(self.b),
            a: self.a,
        }
    }
}
