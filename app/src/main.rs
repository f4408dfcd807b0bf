#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use phonebook_config::Config;
use phonebook_session::{Session, SessionConfig};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "phonebook")]
#[command(about = "Interactive phone book manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive session
    Run {
        /// Data file to load and save (overrides config)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Records per page (overrides config)
        #[arg(short, long)]
        page_size: Option<usize>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { file, page_size } => {
            let config = Config::load()?;

            let data_file = file.unwrap_or(config.data_file);
            let page_size = page_size.unwrap_or(config.page_size);
            if page_size == 0 {
                anyhow::bail!("page size must be at least 1");
            }

            info!(
                "Starting session: file={}, page_size={page_size}",
                data_file.display()
            );

            let session_config = SessionConfig::default()
                .with_data_file(data_file)
                .with_page_size(page_size);

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut session = Session::load(session_config, stdin.lock(), stdout.lock())?;
            session.run()?;
        }
        Commands::Init => {
            Config::create_config()?;
        }
        Commands::Version => {
            println!("phonebook {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
