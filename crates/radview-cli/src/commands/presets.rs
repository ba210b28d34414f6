use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use radview_core::presets::{builtin_presets, load_presets};

#[derive(Args)]
pub struct PresetsArgs {
    /// Presets TOML file to list instead of the builtins
    #[arg(long)]
    pub presets_file: Option<PathBuf>,
}

pub fn run(args: &PresetsArgs) -> Result<()> {
    let presets = match args.presets_file {
        Some(ref path) => load_presets(path)?,
        None => builtin_presets(),
    };

    if presets.is_empty() {
        println!("No presets defined");
        return Ok(());
    }

    for preset in &presets {
        println!(
            "{:<14} WL {:>6}  WW {:>6}",
            preset.name, preset.level, preset.width
        );
    }

    Ok(())
}
