use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "docvet", version, about = "Documentation comment policy checker")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Scan files or directories for documentation policy violations
    Check {
        /// Files or directories to scan (default: current directory)
        paths: Vec<String>,

        /// Configuration file (default: docvet.json in the current directory)
        #[arg(long)]
        config: Option<String>,
    },

    /// Write a default docvet.json to the current directory
    Init,
}
