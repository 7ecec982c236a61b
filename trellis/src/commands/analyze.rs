use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use trellis_manifest::TrellisFile;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GraphFormat},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Path to trellis.toml (defaults to ./trellis.toml)
    #[arg(short, long, default_value = "trellis.toml")]
    pub config: PathBuf,

    /// Only report this entity, with per-field usage
    #[arg(long, value_name = "NAME", conflicts_with = "graph")]
    pub entity: Option<String>,

    /// Print the field dependency graph instead of the health report
    #[arg(long, value_enum)]
    pub graph: Option<GraphFormat>,
}

impl AnalyzeCommand {
    pub fn run(&self) -> Result<()> {
        let file = TrellisFile::open(&self.config).unwrap_or_exit();
        let mut out = TerminalOutput::new();

        match self.graph {
            Some(format) => ops::analyze::graph(file.app(), format)?.render(&mut out),
            None => ops::analyze(file.app(), self.entity.as_deref())?.render(&mut out),
        }
        Ok(())
    }
}
