//! A minimal CPU software rasterizer.
//!
//! This crate loads a triangulated OBJ mesh with per-vertex positions,
//! texture coordinates and normals, projects it orthographically into a
//! raster target, and fills visible triangles with depth-tested,
//! texture-sampled, directionally lit fragments. The finished color
//! buffer is written out as a PNG.
//!
//! # Quick Start
//!
//! ```ignore
//! use rastry::prelude::*;
//!
//! let mesh = Mesh::from_obj_file("data/head.obj")?;
//! let texture = Texture::from_file("data/head_diffuse.tga")?;
//! let mut target = RasterTarget::new(512, 512, Color::rgb(80, 80, 140));
//! scene::render(&mesh, &texture, Vec3::FORWARD, &mut target);
//! target.write_png("render.png")?;
//! ```

pub mod color;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod rasterizer;
pub mod scene;
pub mod target;
pub mod texture;

// Re-export commonly needed types at crate root for convenience
pub use color::Color;
pub use mesh::{LoadError, Mesh};
pub use rasterizer::Triangle;
pub use target::{EncodeError, RasterTarget};
pub use texture::Texture;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use rastry::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::mesh::{LoadError, Mesh};
    pub use crate::rasterizer::Triangle;
    pub use crate::scene;
    pub use crate::target::{EncodeError, RasterTarget};
    pub use crate::texture::Texture;
}
