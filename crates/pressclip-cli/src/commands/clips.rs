use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use console::Style;
use pressclip_core::share::ClipRegistry;

#[derive(Args)]
pub struct ClipsArgs {
    /// Clip store JSON file
    #[arg(long, default_value = "clips.json")]
    pub store: PathBuf,

    /// Base URL for shareable links
    #[arg(long, default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Remove clips past their 24-hour TTL
    #[arg(long)]
    pub cleanup: bool,
}

pub fn run(args: &ClipsArgs) -> Result<()> {
    let mut registry = ClipRegistry::open(&args.store, &args.base_url)?;

    if args.cleanup {
        let removed = registry.cleanup_expired(Utc::now().timestamp())?;
        println!("Removed {removed} expired clip(s)");
    }

    if registry.is_empty() {
        println!("No stored clips");
        return Ok(());
    }

    let id_style = Style::new().cyan();
    let label_style = Style::new().dim();

    for record in registry.all() {
        let created = DateTime::<Utc>::from_timestamp(record.created_at, 0)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "?".into());
        println!(
            "  {}  {}  {}",
            id_style.apply_to(&record.id),
            record.page_info.as_deref().unwrap_or("-"),
            label_style.apply_to(created),
        );
        println!(
            "      {}",
            label_style.apply_to(registry.shareable_url(&record.id))
        );
    }
    Ok(())
}
