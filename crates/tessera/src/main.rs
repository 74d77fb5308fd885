mod commands;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tessera_core::config::{self, OutputFormat};

#[derive(Parser)]
#[command(
    name = "tessera",
    version,
    about = "Merge abutting rectangles into one"
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Merge every rectangle in a layout file into one
    Merge {
        /// Layout file (.toml or .json)
        file: PathBuf,
    },
    /// Print the area of each rectangle and the total
    Area {
        /// Layout file (.toml or .json)
        file: PathBuf,
    },
    /// Move every rectangle by a vector
    Translate(commands::transform::TranslateArgs),
    /// Mirror every rectangle across the line y = x
    Reflect {
        /// Layout file (.toml or .json)
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = config::load();

    logging::init(&config.log, cli.verbose);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Merge { file } => commands::merge::execute(&file, format),
        Commands::Area { file } => commands::area::execute(&file, format),
        Commands::Translate(args) => commands::transform::translate(&args, format),
        Commands::Reflect { file } => commands::transform::reflect(&file, format),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
