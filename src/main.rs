//! rastry: render a textured OBJ mesh to a PNG file.
//!
//! Usage:
//!   rastry --mesh data/head.obj --texture data/head_diffuse.tga --out render.png
//!   rastry --mesh data/head.obj --texture data/head_diffuse.tga --width 1024 --height 1024

use std::path::PathBuf;

use anyhow::Context;
use rastry::math::vec3::Vec3;
use rastry::{scene, Color, Mesh, RasterTarget, Texture};

fn print_help() {
    println!("Usage: rastry --mesh <file.obj> --texture <image> [options]");
    println!();
    println!("Options:");
    println!("  --mesh <path>         OBJ mesh to render (required)");
    println!("  --texture <path>      diffuse texture image (required)");
    println!("  --out <path>          output PNG path (default: render.png)");
    println!("  --width <pixels>      target width (default: 512)");
    println!("  --height <pixels>     target height (default: 512)");
    println!("  --background <r,g,b>  background color bytes (default: 80,80,140)");
}

struct Args {
    mesh_path: PathBuf,
    texture_path: PathBuf,
    out_path: PathBuf,
    width: u32,
    height: u32,
    background: Color,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut mesh_path: Option<PathBuf> = None;
    let mut texture_path: Option<PathBuf> = None;
    let mut out_path = PathBuf::from("render.png");
    let mut width: u32 = 512;
    let mut height: u32 = 512;
    let mut background = Color::rgb(80, 80, 140);

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mesh" => {
                mesh_path = Some(PathBuf::from(
                    args.next().context("missing --mesh argument")?,
                ));
            }
            "--texture" => {
                texture_path = Some(PathBuf::from(
                    args.next().context("missing --texture argument")?,
                ));
            }
            "--out" => {
                out_path = PathBuf::from(args.next().context("missing --out argument")?);
            }
            "--width" => {
                width = args
                    .next()
                    .context("missing --width argument")?
                    .parse()
                    .context("invalid width")?;
            }
            "--height" => {
                height = args
                    .next()
                    .context("missing --height argument")?
                    .parse()
                    .context("invalid height")?;
            }
            "--background" => {
                let value = args.next().context("missing --background argument")?;
                let channels: Vec<u8> = value
                    .split(',')
                    .map(|s| s.parse())
                    .collect::<Result<_, _>>()
                    .context("invalid background color")?;
                anyhow::ensure!(
                    channels.len() == 3,
                    "--background must be three comma-separated bytes (e.g. '80,80,140')"
                );
                background = Color::rgb(channels[0], channels[1], channels[2]);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }

    Ok(Args {
        mesh_path: mesh_path.context("--mesh is required")?,
        texture_path: texture_path.context("--texture is required")?,
        out_path,
        width,
        height,
        background,
    })
}

fn main() -> anyhow::Result<()> {
    let args = parse_args()?;

    let mesh = Mesh::from_obj_file(&args.mesh_path)
        .with_context(|| format!("failed to load mesh {}", args.mesh_path.display()))?;
    let texture = Texture::from_file(&args.texture_path)
        .with_context(|| format!("failed to load texture {}", args.texture_path.display()))?;

    println!(
        "loaded {} faces ({} positions, {} texcoords, {} normals), {}x{} texture",
        mesh.faces().len(),
        mesh.positions().len(),
        mesh.texcoords().len(),
        mesh.normals().len(),
        texture.width(),
        texture.height(),
    );

    let mut target = RasterTarget::new(args.width, args.height, args.background);
    scene::render(&mesh, &texture, Vec3::FORWARD, &mut target);

    target
        .write_png(&args.out_path)
        .with_context(|| format!("failed to write {}", args.out_path.display()))?;
    println!("wrote {}", args.out_path.display());

    Ok(())
}
