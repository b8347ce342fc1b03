use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use hlt_directory::config::Config;
use hlt_directory::directory::{LoadState, SupervisorFilter};
use hlt_directory::output::terminal;
use hlt_directory::vocabulary::Vocabulary;

/// HLT Directory: browse supervisors by discipline, topic and method.
///
/// Loads the supervisors sheet once at startup, tags each supervisor against
/// the controlled topic/method vocabularies, and serves or prints the result.
#[derive(Parser)]
#[command(name = "hlt-directory", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the listing page and JSON API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: HLT_PORT or 5000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: HLT_BIND or 127.0.0.1)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Print classified supervisors, optionally filtered
    List {
        /// Only supervisors in this discipline
        #[arg(long)]
        category: Option<String>,

        /// Only supervisors tagged with this topic keyword
        #[arg(long)]
        topic: Option<String>,

        /// Only supervisors tagged with this method keyword
        #[arg(long)]
        method: Option<String>,

        /// Case-insensitive name search
        #[arg(long)]
        q: Option<String>,
    },

    /// Show the topic and method vocabularies
    Vocabulary,

    /// Print the full directory as JSON
    Export {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hlt_directory=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    config.require_vocabulary()?;
    let vocabulary = Vocabulary::load(config.vocabulary_path.as_deref())?;

    match cli.command {
        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let load_state = LoadState::load(&config.source_path, vocabulary);
            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or_else(|| config.bind.clone());
            hlt_directory::web::run_server(load_state, port, &bind).await?;
        }

        Commands::List {
            category,
            topic,
            method,
            q,
        } => {
            let load_state = LoadState::load(&config.source_path, vocabulary);
            let dir = require_loaded(&load_state)?;
            let filter = SupervisorFilter {
                category,
                topic,
                method,
                q,
            };
            terminal::display_supervisors(dir, dir.filtered(&filter));
        }

        Commands::Vocabulary => {
            info!(
                source = if config.vocabulary_path.is_some() { "file" } else { "built-in" },
                "Showing vocabularies"
            );
            terminal::display_vocabulary(&vocabulary);
        }

        Commands::Export { pretty } => {
            let load_state = LoadState::load(&config.source_path, vocabulary);
            let dir = require_loaded(&load_state)?;
            let view = dir.view();
            let json = if pretty {
                serde_json::to_string_pretty(&view)?
            } else {
                serde_json::to_string(&view)?
            };
            println!("{json}");
        }
    }

    Ok(())
}

/// CLI commands have nothing to show without data, so unavailability is fatal here.
fn require_loaded(state: &LoadState) -> Result<&hlt_directory::directory::Directory> {
    match state {
        LoadState::Loaded(dir) => Ok(dir),
        LoadState::Unavailable(e) => anyhow::bail!(
            "{e}\nSet HLT_SOURCE_PATH to the CSV export of the supervisors sheet."
        ),
    }
}
