use crate::config::load_config;
use crate::dataset::BorderDataset;
use crate::label_dump::{label_dump_json, write_label_dump};
use crate::projection::Viewport;
use crate::render::{render_svg, write_output_png, write_output_svg};
use crate::scene::compute_scene;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "border-atlas",
    version,
    about = "Render labeled historical border maps from a border dataset"
)]
pub struct Args {
    /// Border dataset (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png/json). Defaults to stdout for SVG and JSON if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, map view, timeline, label metrics)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Year to show. Defaults to the first year on the timeline.
    #[arg(short = 'y', long = "year")]
    pub year: Option<i32>,

    /// Width
    #[arg(short = 'w', long = "width")]
    pub width: Option<f64>,

    /// Height
    #[arg(short = 'H', long = "height")]
    pub height: Option<f64>,

    /// Zoom level (clamped to the configured range)
    #[arg(short = 'z', long = "zoom")]
    pub zoom: Option<f64>,

    /// Also write the normalized dataset into this directory under a dated name
    #[arg(long = "export")]
    pub export: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
    Json,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.render.height = height;
    }

    let input = read_input(args.input.as_deref())?;
    let dataset = BorderDataset::from_json(&input)?;
    info!(borders = dataset.len(), years = ?dataset.years(), "dataset ready");

    if let Some(dir) = args.export.as_deref() {
        let today = chrono::Local::now().date_naive();
        let path = dataset.export_to_dir(dir, today)?;
        info!(path = %path.display(), "exported dataset");
    }

    let year = config.map.timeline.resolve(args.year)?;
    let viewport = Viewport::clamped(
        config.map.center,
        args.zoom.unwrap_or(config.map.zoom),
        config.render.width,
        config.render.height,
        &config.map,
    );
    let scene = compute_scene(&dataset, year, &viewport, &config);
    info!(
        year,
        labels = scene.labels.len(),
        fallbacks = scene.pass.fallback_count(),
        "map computed"
    );

    match args.output_format {
        OutputFormat::Svg => {
            let svg = render_svg(&scene, &config.theme);
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            let svg = render_svg(&scene, &config.theme);
            write_output_png(&svg, &output, &config.render)?;
        }
        OutputFormat::Json => {
            match args.output.as_deref() {
                Some(path) => write_label_dump(path, &scene)?,
                None => println!("{}", label_dump_json(&scene)?),
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return Ok(std::fs::read_to_string(path)?);
        }
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}
