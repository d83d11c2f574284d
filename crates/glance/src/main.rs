//! Glance CLI - Ask questions about an image, grounded in a generated caption.
//!
//! Glance fetches a caption for an image URL from a remote description
//! service (falling back to a secondary credential if the primary is
//! rejected) and answers questions about the image with a hosted completion
//! model.
//!
//! # Usage
//!
//! ```bash
//! # One-shot question
//! glance ask --image https://host/cat.png "what breed is this?"
//!
//! # Interactive session with follow-up questions
//! glance chat
//!
//! # View configuration
//! glance config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Glance - ask questions about an image, grounded in a generated caption.
#[derive(Parser, Debug)]
#[command(name = "glance")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Path to an alternate config file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a single question about an image
    Ask(cli::ask::AskArgs),

    /// Start an interactive question session about one image
    Chat(cli::chat::ChatArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up SCENEX_API_KEY / SCENEX_API_KEY_V2 / OPENAI_API_KEY from a
    // local .env file before anything reads the environment.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging from config, with CLI overrides.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = load_config(cli.config.as_deref());
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Glance v{}", glance_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Ask(args) => cli::ask::execute(args, config).await,
        Commands::Chat(args) => cli::chat::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args, config).await,
    }
}

fn load_config(path_override: Option<&str>) -> glance_core::Config {
    let loaded = match path_override {
        Some(path) => {
            let expanded = shellexpand::tilde(path);
            glance_core::Config::load_from(std::path::Path::new(expanded.as_ref()))
        }
        None => glance_core::Config::load(),
    };

    match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `glance config path`."
            );
            glance_core::Config::default()
        }
    }
}
