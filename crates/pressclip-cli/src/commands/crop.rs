use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use pressclip_core::extract::fallback::{extract_with_fallback, DEFAULT_CHAIN};
use pressclip_core::extract::{LoadedPage, PixelSource};
use pressclip_core::geometry::{CropRegion, DisplayImage, DisplaySize, Size, SourceRect};

/// Crop rectangle plus the on-screen geometry it was drawn against.
#[derive(Args)]
pub struct RegionArgs {
    /// Crop x (display pixels, or percent with --percent)
    #[arg(long)]
    pub x: f32,

    /// Crop y
    #[arg(long)]
    pub y: f32,

    /// Crop width
    #[arg(long)]
    pub width: f32,

    /// Crop height
    #[arg(long)]
    pub height: f32,

    /// On-screen width the crop was drawn at (defaults to the natural width)
    #[arg(long)]
    pub display_width: Option<f32>,

    /// On-screen height the crop was drawn at (defaults to the natural height)
    #[arg(long)]
    pub display_height: Option<f32>,

    /// Treat the rect as percent of the displayed size
    #[arg(long)]
    pub percent: bool,
}

impl RegionArgs {
    pub fn display_image(&self, natural: Size) -> DisplayImage {
        let displayed = DisplaySize::new(
            self.display_width.unwrap_or(natural.width as f32),
            self.display_height.unwrap_or(natural.height as f32),
        );
        DisplayImage::new(natural, displayed)
    }

    pub fn region(&self) -> CropRegion {
        if self.percent {
            CropRegion::percent(self.x, self.y, self.width, self.height)
        } else {
            CropRegion::pixels(self.x, self.y, self.width, self.height)
        }
    }

    pub fn source_rect(&self, natural: Size) -> Result<SourceRect> {
        let rect = self
            .display_image(natural)
            .to_source_space(&self.region())?;
        Ok(rect)
    }
}

#[derive(Args)]
pub struct CropArgs {
    /// Input page image
    pub file: PathBuf,

    /// Output PNG (auto-generated if not provided)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub region: RegionArgs,
}

pub fn run(args: &CropArgs) -> Result<()> {
    let page = LoadedPage::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    let natural = page.natural_size();

    let rect = args.region.source_rect(natural)?;
    println!(
        "Cropping {}x{} at ({}, {}) from {} ({}x{})",
        rect.width,
        rect.height,
        rect.x,
        rect.y,
        args.file.display(),
        natural.width,
        natural.height
    );

    let extraction = extract_with_fallback(&page, &rect, &DEFAULT_CHAIN)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| crop_output_path(&args.file, rect.width, rect.height));
    extraction.buffer.save(&output)?;
    println!("Saved to {}", output.display());
    Ok(())
}

fn crop_output_path(source: &Path, w: u32, h: u32) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let parent = source.parent().unwrap_or(Path::new("."));
    parent.join(format!("{stem}_crop{w}x{h}.png"))
}
