//! txkv Binary
//!
//! Runs the reference scenario or an interactive shell over a fresh store.

use std::io;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use txkv::shell::{self, ShellSummary};
use txkv::{demo, Store, StoreConfig};

/// txkv
#[derive(Parser, Debug)]
#[command(name = "txkv")]
#[command(about = "In-memory key-value store with single-transaction semantics")]
#[command(version)]
struct Args {
    /// Store name shown in log events
    #[arg(short, long, default_value = "txkv")]
    name: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay the reference call sequence and print each result
    Demo,

    /// Read commands from stdin, one per line
    Shell {
        /// Print a prompt before each line (for interactive use)
        #[arg(short, long)]
        prompt: bool,
    },
}

fn main() {
    // Logs go to stderr so stdout carries only protocol responses
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,txkv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("txkv v{}", txkv::VERSION);

    let config = StoreConfig::builder().name(&args.name).build();
    let mut store = Store::with_config(config);

    let stdin = io::stdin();
    let result = match args.command {
        Commands::Demo => demo::run(&mut store, io::stdout().lock()),
        Commands::Shell { prompt: false } => {
            shell::run(&mut store, stdin.lock(), io::stdout().lock()).map(log_summary)
        }
        Commands::Shell { prompt: true } => {
            shell::run_with_prompt(&mut store, stdin.lock(), io::stdout().lock()).map(log_summary)
        }
    };

    if let Err(e) = result {
        tracing::error!("txkv failed: {}", e);
        process::exit(1);
    }
}

fn log_summary(summary: ShellSummary) {
    tracing::info!(
        executed = summary.executed,
        rejected = summary.rejected,
        "shell finished"
    );
}
