// --- Asignador de temas para eventos - Archivo principal ---

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use topicshift::config::{self, BIND_ENV, DATA_FOLDER_ENV, DEFAULT_BIND};
use topicshift::{PeriodOutcome, assign_topics_for_period, run_server};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "topicshift")]
#[command(about = "Assigns discussion topics to scheduled events")]
#[command(version)]
struct Cli {
    /// Enable verbose (DEBUG) logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assign topics for a period folder and update its results.json
    Assign {
        /// Period folder name inside the data folder (e.g. 2026-02)
        #[arg(long)]
        period: String,

        /// Path to data folder
        #[arg(long, env = DATA_FOLDER_ENV)]
        data_folder: PathBuf,
    },
    /// Run the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, env = BIND_ENV, default_value = DEFAULT_BIND)]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env antes de parsear: clap toma de ahí los valores por defecto.
    let dotenv_result = config::load_dotenv();
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_target(true)
        .init();

    if let Err(e) = dotenv_result {
        warn!(error = %e, ".env could not be loaded");
    }

    match cli.command {
        Command::Assign { period, data_folder } => {
            let period_path = config::period_path(&data_folder, &period);
            match assign_topics_for_period(&period_path)? {
                PeriodOutcome::Skipped => info!(period = %period, "topic assignment skipped"),
                PeriodOutcome::Assigned(assignment) => {
                    for (event_id, topic) in assignment.iter() {
                        info!(event_id, topic, "assigned");
                    }
                }
            }
        }
        Command::Serve { bind } => {
            info!("=== topicshift API ===");
            run_server(&bind).await?;
        }
    }
    Ok(())
}
