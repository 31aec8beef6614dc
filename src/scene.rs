//! The draw driver: projects and rasterizes a whole mesh.

use crate::math::vec3::Vec3;
use crate::mesh::Mesh;
use crate::projection::project;
use crate::rasterizer::{fill_triangle, Triangle};
use crate::target::RasterTarget;
use crate::texture::Texture;

/// Rasterize every face of the mesh into the target.
///
/// Faces are drawn in load order. Combined with the strict-greater depth
/// test this makes the output deterministic: when two fragments tie on
/// depth, the earlier face keeps the pixel.
///
/// Face indices were validated when the mesh was loaded, so attribute
/// lookups index the slices directly.
pub fn render(mesh: &Mesh, texture: &Texture, light: Vec3, target: &mut RasterTarget) {
    let width = target.width();
    let height = target.height();

    for face in mesh.faces() {
        let [a, b, c] = face.corners;

        let triangle = Triangle::new(
            [
                project(mesh.positions()[a.position], width, height),
                project(mesh.positions()[b.position], width, height),
                project(mesh.positions()[c.position], width, height),
            ],
            [
                mesh.texcoords()[a.texcoord],
                mesh.texcoords()[b.texcoord],
                mesh.texcoords()[c.texcoord],
            ],
            [
                mesh.normals()[a.normal],
                mesh.normals()[b.normal],
                mesh.normals()[c.normal],
            ],
        );

        fill_triangle(&triangle, texture, light, target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use std::io::Cursor;

    fn parse(source: &str) -> Mesh {
        Mesh::parse(Cursor::new(source)).unwrap()
    }

    fn white_texture() -> Texture {
        Texture::from_pixels(vec![Color::WHITE], 1, 1)
    }

    const SINGLE_FACE: &str = "\
v -1.0 -1.0 0.0
v 1.0 -1.0 0.0
v 0.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 0.5 1.0
vn 0.0 0.0 1.0
f 1/1/1 2/2/1 3/3/1
";

    #[test]
    fn single_face_lights_the_lower_middle() {
        let mesh = parse(SINGLE_FACE);
        let mut target = RasterTarget::new(100, 100, Color::BLACK);
        render(&mesh, &white_texture(), Vec3::FORWARD, &mut target);

        let mut covered = 0;
        for y in 0..100 {
            for x in 0..100 {
                if target.pixel(x, y) != Some(Color::BLACK) {
                    covered += 1;
                }
            }
        }
        // Roughly half the target (a full-width triangle) is covered.
        assert!(covered > 1000, "expected a large lit region, got {covered}");

        // The face spans y in [-1, 1], so its raster footprint is centered;
        // the bottom edge spans the full width while the apex is a point.
        assert_ne!(target.pixel(50, 75), Some(Color::BLACK));
        assert_eq!(target.pixel(2, 25), Some(Color::BLACK));
        assert_eq!(target.pixel(97, 25), Some(Color::BLACK));
    }

    #[test]
    fn degenerate_face_covers_nothing() {
        let mesh = parse(
            "v -1.0 -1.0 0.0\nv 0.0 0.0 0.0\nv 1.0 1.0 0.0\n\
             vt 0.0 0.0\nvn 0.0 0.0 1.0\nf 1/1/1 2/1/1 3/1/1\n",
        );
        let mut target = RasterTarget::new(100, 100, Color::BLACK);
        render(&mesh, &white_texture(), Vec3::FORWARD, &mut target);

        for y in 0..100 {
            for x in 0..100 {
                assert_eq!(target.pixel(x, y), Some(Color::BLACK));
            }
        }
    }

    #[test]
    fn earlier_face_keeps_depth_ties() {
        // Two identical faces with different texture coordinates into a
        // two-texel texture: the first face samples the red texel, the
        // second the blue one. The tie must go to the first.
        let mesh = parse(
            "v -1.0 -1.0 0.0\nv 1.0 -1.0 0.0\nv 0.0 1.0 0.0\n\
             vt 0.0 0.0\nvt 1.0 0.0\n\
             vn 0.0 0.0 1.0\n\
             f 1/1/1 2/1/1 3/1/1\n\
             f 1/2/1 2/2/1 3/2/1\n",
        );
        let texture = Texture::from_pixels(
            vec![Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)],
            2,
            1,
        );
        let mut target = RasterTarget::new(100, 100, Color::BLACK);
        render(&mesh, &texture, Vec3::FORWARD, &mut target);
        assert_eq!(target.pixel(50, 75), Some(Color::rgb(255, 0, 0)));
    }
}
