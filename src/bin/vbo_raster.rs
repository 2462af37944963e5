//! vbo-raster: render a vertex/index-buffer scene to PNG files.
//!
//! Writes `points.png`, `polylines.png` and `polygons.png`, one canvas per
//! index buffer. Without `--scene` the built-in sample scene is used.
//!
//! Run: `cargo run --features cli -- --scene scene.yaml --out-dir out/`

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use batuta_common::display::WithDimensions;
use clap::Parser;
use tracing::Level;
use vbo_raster::canvas::Canvas;
use vbo_raster::output::PngEncoder;
use vbo_raster::scene::Scene;

/// Render index-buffer geometry to PNG
#[derive(Parser, Debug)]
#[command(name = "vbo-raster")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Rasterize points, segments and triangles from a vertex buffer", long_about = None)]
struct Cli {
    /// Scene file (YAML); defaults to the built-in sample scene
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Directory for the rendered PNGs
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Override canvas width
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Override canvas height
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// Print the effective scene as YAML and exit
    #[arg(long)]
    dump_scene: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let mut scene = match &cli.scene {
        Some(path) => {
            Scene::load(path).with_context(|| format!("loading scene {}", path.display()))?
        }
        None => Scene::demo(),
    };
    if let (Some(width), Some(height)) = (cli.width, cli.height) {
        scene.set_dimensions(width, height);
    }

    if cli.dump_scene {
        print!("{}", scene.to_yaml()?);
        return Ok(());
    }

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;

    let points = scene.render_points().context("drawing points")?;
    write_canvas(&points, &cli.out_dir, "points.png")?;

    let polylines = scene.render_polylines().context("drawing polylines")?;
    write_canvas(&polylines, &cli.out_dir, "polylines.png")?;

    let polygons = scene.render_polygons().context("drawing polygons")?;
    write_canvas(&polygons, &cli.out_dir, "polygons.png")?;

    Ok(())
}

fn write_canvas(canvas: &Canvas, dir: &Path, name: &str) -> Result<()> {
    let path = dir.join(name);
    PngEncoder::write_to_file(canvas, &path)
        .with_context(|| format!("writing {}", path.display()))?;

    let (min, max, mean) = canvas.intensity_stats();
    tracing::info!(
        path = %path.display(),
        width = canvas.width(),
        height = canvas.height(),
        lit = canvas.count_lit(),
        min,
        max,
        mean,
        "canvas written"
    );
    Ok(())
}
