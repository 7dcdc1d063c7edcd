//! Alt-text CLI - WCAG-style image descriptions from vision LLMs.
//!
//! Runs the alt-text HTTP service, or generates alt text once from the
//! terminal through the same validation and generation path.
//!
//! # Usage
//!
//! ```bash
//! # Run the HTTP service
//! alttext serve --port 8000
//!
//! # One-shot generation
//! alttext generate --file hero.png --context "Landing page banner"
//! alttext generate --url https://example.com/bike.jpg
//!
//! # View configuration
//! alttext config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;
mod server;

/// Alt-text - accessible image descriptions from vision LLMs.
#[derive(Parser, Debug)]
#[command(name = "alttext")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "ALTTEXT_CONFIG")]
    config: Option<String>,

    /// Override the configured LLM provider
    #[arg(long, global = true, value_enum, env = "ALTTEXT_PROVIDER")]
    provider: Option<cli::types::ProviderArg>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP service
    Serve(cli::serve::ServeArgs),

    /// Generate alt text for a single image
    Generate(cli::generate::GenerateArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so config warnings go through eprintln.
    let mut config = cli::load_config(cli.config.as_deref())?;
    if let Some(provider) = cli.provider {
        config.llm.provider = provider.to_string();
    }
    logging::init(&logging::LogSettings::resolve(&config, cli.verbose, cli.json_logs));

    tracing::debug!("alttext v{}", alttext_core::VERSION);

    match cli.command {
        Commands::Serve(args) => cli::serve::execute(args, config).await,
        Commands::Generate(args) => cli::generate::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args, config, cli.config.as_deref()).await,
    }
}
