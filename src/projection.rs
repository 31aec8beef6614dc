//! Model-space to raster-space projection.
//!
//! This is a plain orthographic mapping: no perspective division, no
//! frustum clipping. Attributes interpolated across a projected triangle
//! are therefore linearly (not perspective-correctly) interpolated, which
//! is an accepted approximation of this pipeline rather than a bug.

use crate::math::vec3::Vec3;

/// Map a model-space vertex into raster space.
///
/// Model space is the [-1, 1] cube with +y up. Raster space has x in
/// [0, width] pixels, y in [0, height] pixels with +y down, and z
/// remapped from [-1, 1] into [0, 1] where larger means closer to the
/// viewer.
#[inline]
pub fn project(model: Vec3, width: u32, height: u32) -> Vec3 {
    Vec3 {
        x: (1.0 + model.x) * width as f32 * 0.5,
        y: (1.0 - model.y) * height as f32 * 0.5,
        z: (1.0 + model.z) * 0.5,
    }
}
