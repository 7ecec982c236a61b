mod analyze;
mod check;
mod completions;
mod generate;
mod init;
mod paths;

use analyze::AnalyzeCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use paths::PathsCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for trellis_manifest::Result<T> {
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

#[derive(Parser)]
#[command(name = "trellis")]
#[command(version)]
#[command(about = "Generate React views from a declarative entity schema")]
pub(crate) struct Cli {
    /// Log debug output to stderr (overrides TRELLIS_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Analyze(cmd) => cmd.run(),
            Commands::Paths(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter trellis.toml
    Init(InitCommand),

    /// Generate view modules from trellis.toml
    Generate(GenerateCommand),

    /// Validate trellis.toml without generating code
    Check(CheckCommand),

    /// Report schema health or export the field dependency graph
    Analyze(AnalyzeCommand),

    /// Show resolved project locations
    Paths(PathsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
