use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "deadliner-cli", version, about = "Deadliner CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute one remaining-time snapshot and print it
    Status {
        /// Target instant (RFC 3339, 'YYYY-MM-DD HH:MM[:SS]', or 'YYYY-MM-DD')
        #[arg(long)]
        target: String,
    },
    /// Watch a countdown live, printing each published snapshot
    Watch {
        /// Target instant (RFC 3339, 'YYYY-MM-DD HH:MM[:SS]', or 'YYYY-MM-DD')
        #[arg(long)]
        target: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Status { target } => commands::status::run(&target),
        Commands::Watch { target } => commands::watch::run(&target),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
