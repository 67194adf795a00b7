use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

#[derive(Args)]
pub struct InfoArgs {
    /// Input page image
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let img = image::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", img.width(), img.height());
    println!("Color type:  {:?}", img.color());

    let bytes = std::fs::metadata(&args.file)?.len();
    println!("File size:   {:.1} KB", bytes as f64 / 1024.0);

    Ok(())
}
