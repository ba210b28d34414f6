use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use radview_core::io::export::save_frame;
use radview_core::io::DicomFileDecoder;
use radview_core::presets::{builtin_presets, find_preset, load_presets};
use radview_core::session::ViewSession;

#[derive(Args)]
pub struct RenderArgs {
    /// Input DICOM file
    pub file: PathBuf,

    /// Window level (center); defaults to the source metadata
    #[arg(long, allow_hyphen_values = true)]
    pub level: Option<i32>,

    /// Window width; defaults to the source metadata
    #[arg(long)]
    pub width: Option<i32>,

    /// Apply a named window preset (see `radview presets`)
    #[arg(long, conflicts_with_all = ["level", "width"])]
    pub preset: Option<String>,

    /// Presets TOML file to search instead of the builtins
    #[arg(long)]
    pub presets_file: Option<PathBuf>,

    /// Zoom factor in [0.1, 5.0]
    #[arg(long, default_value = "1.0")]
    pub zoom: f64,

    /// Output image path (PNG or TIFF)
    #[arg(short, long, default_value = "view.png")]
    pub output: PathBuf,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let mut session = ViewSession::new();
    let mut frame = session
        .load(&DicomFileDecoder, &args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    if let Some(ref name) = args.preset {
        let presets = match args.presets_file {
            Some(ref path) => load_presets(path)?,
            None => builtin_presets(),
        };
        let Some(preset) = find_preset(&presets, name) else {
            bail!("Unknown preset '{name}'");
        };
        session.set_window_level(preset.level)?;
        frame = session.set_window_width(preset.width)?;
    }
    if let Some(level) = args.level {
        frame = session.set_window_level(level)?;
    }
    if let Some(width) = args.width {
        frame = session.set_window_width(width)?;
    }
    if (args.zoom - 1.0).abs() > f64::EPSILON {
        frame = session.set_zoom(args.zoom)?;
    }

    let adjust = session.adjustments();
    println!(
        "Rendered {}x{} at WL {} / WW {}, zoom {}%",
        frame.width(),
        frame.height(),
        adjust.window_level,
        adjust.window_width,
        session.zoom_percent()
    );

    save_frame(&frame, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
