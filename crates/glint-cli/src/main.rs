//! glint CLI - render scenes from the terminal.
//!
//! Renders either the built-in showcase scene or an imported OBJ mesh to
//! PPM or PNG, chosen by the output file's extension.

use anyhow::Result;
use clap::{Parser, Subcommand};
use glint::{Camera, Canvas, World};
use std::path::{Path, PathBuf};

mod scenes;

#[derive(Parser)]
#[command(name = "glint")]
#[command(about = "A small analytic ray tracer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the built-in three-sphere showcase scene
    Spheres {
        /// Output image (.png, or PPM for any other extension)
        output: PathBuf,
        /// Image width in pixels
        #[arg(long, default_value_t = 1024)]
        width: usize,
        /// Image height in pixels
        #[arg(long, default_value_t = 512)]
        height: usize,
        /// Horizontal field of view in degrees
        #[arg(long, default_value_t = 60.0)]
        fov: f64,
    },
    /// Render a Wavefront OBJ mesh
    Mesh {
        /// Input .obj file
        input: PathBuf,
        /// Output image (.png, or PPM for any other extension)
        output: PathBuf,
        /// Image width in pixels
        #[arg(long, default_value_t = 400)]
        width: usize,
        /// Image height in pixels
        #[arg(long, default_value_t = 400)]
        height: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Spheres {
            output,
            width,
            height,
            fov,
        } => {
            let (world, camera) = scenes::spheres(width, height, fov.to_radians())?;
            render_to(&camera, &world, &output)
        }
        Commands::Mesh {
            input,
            output,
            width,
            height,
        } => {
            let (world, camera) = scenes::mesh(&input, width, height)?;
            render_to(&camera, &world, &output)
        }
    }
}

fn render_to(camera: &Camera, world: &World, output: &Path) -> Result<()> {
    let vsize = camera.vsize();
    let image = camera.render_with(world, |row| {
        eprint!("\rscanline {}/{}", row + 1, vsize);
    });
    eprintln!();
    save(&image, output)
}

fn save(canvas: &Canvas, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => {
            let mut img = image::RgbImage::new(canvas.width() as u32, canvas.height() as u32);
            for (i, pixel) in canvas.pixels().iter().enumerate() {
                let (r, g, b) = pixel.to_rgb8();
                let x = (i % canvas.width()) as u32;
                let y = (i / canvas.width()) as u32;
                img.put_pixel(x, y, image::Rgb([r, g, b]));
            }
            img.save(path)?;
        }
        _ => std::fs::write(path, canvas.to_ppm())?,
    }
    println!("wrote {}", path.display());
    Ok(())
}
