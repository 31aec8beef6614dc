//! Bounding-box/barycentric triangle rasterization.
//!
//! For each pixel center inside the triangle's clamped bounding box the
//! rasterizer computes barycentric weights via the 2D cross-product
//! (Cramer's rule) formulation, depth-tests the interpolated depth,
//! samples the texture at the interpolated coordinate, and lights the
//! texel with a directional lamp.
//!
//! Coverage is edge-inclusive: a pixel center exactly on a shared edge is
//! covered by both triangles. Adjacent triangles can therefore double-draw
//! their shared edge, which this pipeline accepts.

use crate::color::Color;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::target::RasterTarget;
use crate::texture::Texture;

/// A triangle ready for rasterization.
///
/// `points` are in raster space (see [`crate::projection::project`]);
/// texture coordinates and normals are per-corner model attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec3; 3],
    pub texcoords: [Vec2; 3],
    pub normals: [Vec3; 3],
}

impl Triangle {
    pub fn new(points: [Vec3; 3], texcoords: [Vec2; 3], normals: [Vec3; 3]) -> Self {
        Self {
            points,
            texcoords,
            normals,
        }
    }
}

/// Barycentric weights of point `p` relative to triangle corners
/// `a`, `b`, `c`, or None for a degenerate (zero-area) triangle.
///
/// The weights satisfy `u + v + w = 1` and reconstruct `p` as
/// `u*a + v*b + w*c`; `p` is inside the triangle iff all three are
/// non-negative.
#[inline]
fn barycentric(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> Option<[f32; 3]> {
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    let den = ab.x * ac.y - ac.x * ab.y;
    if den.abs() < f32::EPSILON {
        return None; // Degenerate triangle covers nothing
    }

    let v = (ap.x * ac.y - ac.x * ap.y) / den;
    let w = (ab.x * ap.y - ap.x * ab.y) / den;
    let u = 1.0 - v - w;
    Some([u, v, w])
}

#[inline]
fn interpolate_vec2(values: [Vec2; 3], [u, v, w]: [f32; 3]) -> Vec2 {
    values[0] * u + values[1] * v + values[2] * w
}

#[inline]
fn interpolate_vec3(values: [Vec3; 3], [u, v, w]: [f32; 3]) -> Vec3 {
    values[0] * u + values[1] * v + values[2] * w
}

/// Rasterize one triangle into the target.
///
/// Per covered pixel, in order:
/// 1. strict-greater depth test against the stored depth (ties lose, so
///    re-drawing the same surface changes nothing);
/// 2. attribute interpolation and texture sampling;
/// 3. lighting intensity from the interpolated normal and `light`; a
///    non-positive intensity discards the fragment entirely, leaving
///    color AND depth untouched even though the depth test had passed.
///
/// The per-pixel back-face cull deliberately runs after the depth test;
/// preserving that ordering keeps draw-order-dependent output identical
/// for meshes that rely on it.
pub fn fill_triangle(
    triangle: &Triangle,
    texture: &Texture,
    light: Vec3,
    target: &mut RasterTarget,
) {
    let [a, b, c] = triangle.points;

    // Bounding box clamped to the target; empty boxes contribute nothing.
    let min_x = (a.x.min(b.x).min(c.x).floor() as i32).max(0);
    let max_x = (a.x.max(b.x).max(c.x).ceil() as i32).min(target.width() as i32 - 1);
    let min_y = (a.y.min(b.y).min(c.y).floor() as i32).max(0);
    let max_y = (a.y.max(b.y).max(c.y).ceil() as i32).min(target.height() as i32 - 1);

    let a2 = Vec2::new(a.x, a.y);
    let b2 = Vec2::new(b.x, b.y);
    let c2 = Vec2::new(c.x, c.y);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            // Sample at pixel center
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);

            let Some(weights) = barycentric(a2, b2, c2, p) else {
                return;
            };
            let [u, v, w] = weights;

            // Edge-inclusive inside test
            if u < 0.0 || v < 0.0 || w < 0.0 {
                continue;
            }

            let depth = u * a.z + v * b.z + w * c.z;
            let Some(stored) = target.depth_at(x, y) else {
                continue;
            };
            if depth <= stored {
                continue;
            }

            let texcoord = interpolate_vec2(triangle.texcoords, weights);
            let normal = interpolate_vec3(triangle.normals, weights);
            let texel = texture.sample(texcoord.x, texcoord.y);

            let intensity = normal.dot(light);
            if intensity <= 0.0 {
                continue; // Back-facing or grazing fragment
            }

            target.put(x, y, texel.scale(intensity), depth);
        }
    }
}
