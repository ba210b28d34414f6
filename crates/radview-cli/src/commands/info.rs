use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use radview_core::io::{Decoder, DicomFileDecoder};

#[derive(Args)]
pub struct InfoArgs {
    /// Input DICOM file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let buffer = DicomFileDecoder.decode(&args.file)?;

    println!("File:         {}", args.file.display());
    println!("Dimensions:   {}x{}", buffer.columns(), buffer.rows());
    println!(
        "Bits stored:  {} (samples up to {})",
        buffer.bits_stored,
        buffer.max_sample_value()
    );
    if !buffer.photometric_interpretation.is_empty() {
        println!("Photometric:  {}", buffer.photometric_interpretation);
    }
    if !buffer.modality.is_empty() {
        println!("Modality:     {}", buffer.modality);
    }
    if buffer.window_width > 0 {
        println!(
            "Window:       C {}  W {}",
            buffer.window_center, buffer.window_width
        );
    } else {
        println!("Window:       none (width falls back to 400)");
    }

    let sample_kb = (buffer.rows() * buffer.columns() * 2) as f64 / 1024.0;
    println!("Sample data:  {sample_kb:.1} KB");

    Ok(())
}
