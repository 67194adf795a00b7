use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use pressclip_core::artifact::CompositeArtifact;
use pressclip_core::compose::brand::{FileBrand, NoBrand};
use pressclip_core::compose::CompositeSpec;
use pressclip_core::extract::{LoadedPage, PixelSource};
use pressclip_core::session::{ComposeOutcome, CropSession};

use super::crop::RegionArgs;
use crate::summary;

#[derive(Args)]
pub struct ComposeArgs {
    /// Input page image
    pub file: PathBuf,

    /// Output PNG (auto-generated if not provided)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub region: RegionArgs,

    /// Page number shown in the caption
    #[arg(long)]
    pub page: Option<u32>,

    /// Total pages shown in the caption
    #[arg(long)]
    pub total: Option<u32>,

    /// Caption date (defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Brand mark drawn above the region (degraded layout without it)
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// Composite config TOML; CLI flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &ComposeArgs) -> Result<()> {
    let spec = load_spec(
        args.config.as_deref(),
        args.page,
        args.total,
        args.date.as_deref(),
    )?;

    let artifact = compose_from_args(&args.file, &args.region, &spec, args.logo.as_deref())?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| composite_output_path(&args.file));
    artifact.save(&output)?;

    summary::print_compose_summary(&args.file, &output, &spec, args.logo.as_deref(), &artifact);
    Ok(())
}

/// Build a CompositeSpec from an optional TOML file plus CLI overrides.
pub(crate) fn load_spec(
    config: Option<&Path>,
    page: Option<u32>,
    total: Option<u32>,
    date: Option<&str>,
) -> Result<CompositeSpec> {
    let mut spec = match config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Invalid composite config {}", path.display()))?
        }
        None => CompositeSpec::default(),
    };
    if let Some(page) = page {
        spec.page_number = page;
    }
    if let Some(total) = total {
        spec.total_pages = total;
    }
    if let Some(date) = date {
        spec.date = Some(date.to_string());
    }
    Ok(spec)
}

/// Run the full selector → extract → compose pipeline over a page file.
pub(crate) fn compose_from_args(
    file: &Path,
    region: &RegionArgs,
    spec: &CompositeSpec,
    logo: Option<&Path>,
) -> Result<CompositeArtifact> {
    let page =
        LoadedPage::open(file).with_context(|| format!("Failed to open {}", file.display()))?;
    let natural = page.natural_size();

    let mut session = CropSession::default();
    session
        .selector_mut()
        .image_loaded(region.display_image(natural));
    session.selector_mut().enter_crop_mode()?;
    session.selector_mut().update_selection(region.region());
    session.selector_mut().commit()?;

    let outcome = match logo {
        Some(path) => session.accept(&page, &FileBrand::new(path), spec)?,
        None => session.accept(&page, &NoBrand, spec)?,
    };

    match outcome {
        ComposeOutcome::Composed(artifact) => Ok(artifact),
        ComposeOutcome::Cancelled => bail!("compose was cancelled before completion"),
    }
}

fn composite_output_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let parent = source.parent().unwrap_or(Path::new("."));
    parent.join(format!("{stem}_composite.png"))
}
