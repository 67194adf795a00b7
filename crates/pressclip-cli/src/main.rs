mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pressclip", about = "Newspaper page crop-and-compose tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show page image metadata
    Info(commands::info::InfoArgs),
    /// Extract a crop region from a page image
    Crop(commands::crop::CropArgs),
    /// Compose a shareable artifact from a crop region
    Compose(commands::compose::ComposeArgs),
    /// Print or save a default composite config
    Config(commands::config::ConfigArgs),
    /// Compose and store a clip with a shareable URL
    Share(commands::share::ShareArgs),
    /// List or clean up stored clips
    Clips(commands::clips::ClipsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Crop(args) => commands::crop::run(args),
        Commands::Compose(args) => commands::compose::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Share(args) => commands::share::run(args),
        Commands::Clips(args) => commands::clips::run(args),
    }
}
