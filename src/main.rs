//! gomap CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

use commands::OutputFormat;

#[derive(Parser)]
#[command(name = "gomap")]
#[command(about = "Package dependency graph and lexical line counts for Go modules", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the package dependency graph of a Go module
    Dag {
        /// Module root containing go.mod
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Count lines holding at least one token
    Loc {
        /// Directory or .go file to count; only the first is used
        paths: Vec<PathBuf>,

        /// Skip *_test.go files
        #[arg(long)]
        ignore_tests: bool,

        /// Skip files under directories containing any of these names
        #[arg(long, value_delimiter = ',')]
        ignore_dirs: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so reports on stdout stay clean
    let default_level = if cli.verbose { "gomap=debug" } else { "gomap=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("gomap v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Dag { root, format } => commands::dag(&root, format),
        Commands::Loc {
            paths,
            ignore_tests,
            ignore_dirs,
            format,
        } => {
            let config = gomap_indexer::LocConfig {
                ignore_tests,
                ignore_dirs,
            };
            commands::loc(&paths, &config, format)
        }
    }
}
