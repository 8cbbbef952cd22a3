mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use kitacal_core::{Config, DEFAULT_ICS_FILE, DEFAULT_INPUT_FILE, DEFAULT_XLSX_FILE};

#[derive(Parser)]
#[command(name = "kitacal")]
#[command(about = "Generate an ICS subscription and an XLSX export from a kindergarten calendar")]
struct Cli {
    /// Config file (default: ./kitacal.toml if it exists)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the iCalendar subscription file
    Ics {
        /// Calendar JSON file
        #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
        input: PathBuf,

        /// Output .ics file
        #[arg(short, long, default_value = DEFAULT_ICS_FILE)]
        output: PathBuf,
    },
    /// Write the spreadsheet export (falls back to sample data)
    Xlsx {
        /// Calendar JSON file
        #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
        input: PathBuf,

        /// Output .xlsx file
        #[arg(short, long, default_value = DEFAULT_XLSX_FILE)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::resolve(cli.config.as_deref(), &std::env::current_dir()?)?;

    match cli.command {
        Commands::Ics { input, output } => commands::ics::run(&input, &output, &config.ics),
        Commands::Xlsx { input, output } => commands::xlsx::run(&input, &output, &config.xlsx),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
