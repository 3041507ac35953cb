//! docvet CLI — documentation comment policy checker.
//!
//! This binary provides the `docvet` command with subcommands for scanning
//! source trees and bootstrapping configuration. See `docvet --help`.

use clap::Parser;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let formatter: Box<dyn docvet_output::OutputFormatter> = if cli.json {
        Box::new(docvet_output::json::JsonFormatter)
    } else {
        Box::new(docvet_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check { paths, config } => commands::check::run(&*formatter, paths, config),
        Commands::Init => commands::init::run(),
    };

    std::process::exit(exit_code);
}
