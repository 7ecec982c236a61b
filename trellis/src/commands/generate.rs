use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use trellis_manifest::TrellisFile;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to trellis.toml (defaults to ./trellis.toml)
    #[arg(short, long, default_value = "trellis.toml")]
    pub config: PathBuf,

    /// Output directory (overrides paths.output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only generate this view (repeatable)
    #[arg(long = "view", value_name = "NAME")]
    pub views: Vec<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite view modules that already exist
    #[arg(long)]
    pub force: bool,

    /// Write pipeline snapshots to .trellis/debug
    #[arg(long)]
    pub visualize: bool,

    /// Runtime module generated views import from (overrides codegen.runtime)
    #[arg(long, value_name = "MODULE")]
    pub runtime: Option<String>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = TrellisFile::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            &file,
            GenerateOptions {
                output: self.output.as_deref(),
                views: &self.views,
                dry_run: self.dry_run,
                force: self.force,
                visualize: self.visualize,
                runtime: self.runtime.as_deref(),
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
