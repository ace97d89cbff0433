mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mdx", version, about = "Export a markdown note and its linked files")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Copy a note and everything it links to into a flat directory
    Export(ExportArgs),
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Path to the target markdown file
    pub target_file: PathBuf,

    /// Output directory (created if missing)
    pub output_directory: PathBuf,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.as_deref());

    match cli.command {
        Commands::Export(args) => cmd::export::run(&args),
    }
}
