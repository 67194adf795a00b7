use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pressclip_core::share::ClipRegistry;

use super::compose::{compose_from_args, load_spec};
use super::crop::RegionArgs;

#[derive(Args)]
pub struct ShareArgs {
    /// Input page image
    pub file: PathBuf,

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

    /// Brand mark drawn above the region
    #[arg(long)]
    pub logo: Option<PathBuf>,

    /// Composite config TOML; CLI flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Clip store JSON file
    #[arg(long, default_value = "clips.json")]
    pub store: PathBuf,

    /// Base URL for shareable links
    #[arg(long, default_value = "http://localhost:8080")]
    pub base_url: String,
}

pub fn run(args: &ShareArgs) -> Result<()> {
    let spec = load_spec(
        args.config.as_deref(),
        args.page,
        args.total,
        args.date.as_deref(),
    )?;
    let artifact = compose_from_args(&args.file, &args.region, &spec, args.logo.as_deref())?;

    let mut registry = ClipRegistry::open(&args.store, &args.base_url)?;
    let id = registry.store(&artifact, &spec)?;

    println!("Stored clip {} ({}x{})", id, artifact.width, artifact.height);
    println!("Share URL: {}", registry.shareable_url(&id));
    Ok(())
}
