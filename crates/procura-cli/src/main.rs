//! CLI application for vendor quote comparison and purchase order drafting.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, demo, draft, extract, recommend};

/// Procurement assistant - Extract vendor quotes, recommend a vendor, draft a purchase order
#[derive(Parser)]
#[command(name = "procura")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract structured fields from quote files
    Extract(extract::ExtractArgs),

    /// Compare quotes and recommend a vendor
    Recommend(recommend::RecommendArgs),

    /// Draft a purchase order from quote files
    Draft(draft::DraftArgs),

    /// Run the full workflow on the built-in demo quotes
    Demo(demo::DemoArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // Logs go to stderr so stdout stays machine-readable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Extract(args) => extract::run(args, cli.config.as_deref()),
        Commands::Recommend(args) => recommend::run(args, cli.config.as_deref()),
        Commands::Draft(args) => draft::run(args, cli.config.as_deref()),
        Commands::Demo(args) => demo::run(args, cli.config.as_deref()),
        Commands::Config(args) => config::run(args, cli.config.as_deref()),
    }
}
