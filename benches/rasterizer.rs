use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rastry::math::vec2::Vec2;
use rastry::math::vec3::Vec3;
use rastry::rasterizer::{fill_triangle, Triangle};
use rastry::{Color, RasterTarget, Texture};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn lit_triangle(points: [Vec3; 3]) -> Triangle {
    Triangle::new(
        points,
        [Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(0.5, 1.0)],
        [Vec3::FORWARD; 3],
    )
}

fn small_triangle() -> Triangle {
    lit_triangle([
        Vec3::new(100.0, 100.0, 0.5),
        Vec3::new(120.0, 100.0, 0.5),
        Vec3::new(110.0, 120.0, 0.5),
    ])
}

fn medium_triangle() -> Triangle {
    lit_triangle([
        Vec3::new(100.0, 100.0, 0.5),
        Vec3::new(300.0, 100.0, 0.5),
        Vec3::new(200.0, 300.0, 0.5),
    ])
}

fn large_triangle() -> Triangle {
    lit_triangle([
        Vec3::new(50.0, 50.0, 0.5),
        Vec3::new(750.0, 100.0, 0.5),
        Vec3::new(400.0, 550.0, 0.5),
    ])
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let texture = Texture::from_pixels(vec![Color::WHITE; 64 * 64], 64, 64);

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("fill", name), &triangle, |b, tri| {
            b.iter(|| {
                // A fresh target per iteration so the depth test never
                // short-circuits the fill.
                let mut target = RasterTarget::new(BUFFER_WIDTH, BUFFER_HEIGHT, Color::BLACK);
                fill_triangle(black_box(tri), &texture, Vec3::FORWARD, &mut target);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle);
criterion_main!(benches);
