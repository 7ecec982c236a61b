use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use trellis_manifest::TrellisFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PathsCommand {
    /// Path to trellis.toml (defaults to ./trellis.toml)
    #[arg(short, long, default_value = "trellis.toml")]
    pub config: PathBuf,
}

impl PathsCommand {
    pub fn run(&self) -> Result<()> {
        let file = TrellisFile::open(&self.config).unwrap_or_exit();

        ops::paths(&file)?.render(&mut TerminalOutput::new());
        Ok(())
    }
}
