//! rbtrace CLI
//!
//! Command-line interface for the instrumented red-black tree

use clap::{Parser, Subcommand, ValueEnum};
use rbtrace_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rbtrace")]
#[command(about = "rbtrace - Red-black tree operations with recorded snapshots", long_about = None)]
struct Cli {
    /// Logging profile; no logs are written when omitted
    #[arg(long, global = true, value_enum)]
    log_profile: Option<LogProfile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    /// Human-readable, debug level
    Development,
    /// JSON, info level
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run operations given on the command line
    Run(commands::run::RunArgs),
    /// Run operations from a YAML script
    Script(commands::script::ScriptArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log_profile {
        logging_facility::init(profile.into());
    }

    let result = match cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Script(args) => commands::script::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
