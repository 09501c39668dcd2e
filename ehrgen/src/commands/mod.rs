mod check;
mod completions;
mod generate;
mod list;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use ehrgen_schema::LoadWarning;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for ehrgen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Print discovery warnings to stderr.
pub(crate) fn print_load_warnings(warnings: &[LoadWarning]) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}

#[derive(Parser)]
#[command(name = "ehrgen")]
#[command(version)]
#[command(about = "Generate type-safe healthcare data types from YAML schemas")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate source code from YAML schemas
    Generate(GenerateCommand),

    /// List discoverable schemas
    List(ListCommand),

    /// Validate schemas without generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
