use std::path::PathBuf;

use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result};

use crate::{
    ops,
    reports::{Report, TerminalOutput},
    starter::Starter,
};

#[derive(Args)]
pub struct InitCommand {
    /// Project name (defaults to current directory)
    #[arg(default_value = ".")]
    pub name: String,

    /// Output directory (defaults to ./<name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Starter schema
    #[arg(short, long, value_enum)]
    pub starter: Option<Starter>,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let (project_name, output_dir) = Self::resolve_paths(&self.name, self.output.clone())?;
        let starter = match self.starter {
            Some(starter) => starter,
            None => Self::prompt_starter()?,
        };

        let report = ops::init(&project_name, &output_dir, starter)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn prompt_starter() -> Result<Starter> {
        let labels: Vec<&str> = Starter::ALL.iter().map(Starter::label).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a starter")
            .items(&labels)
            .default(0)
            .interact()
            .wrap_err("Failed to get starter selection")?;

        Ok(Starter::ALL
            .get(selection)
            .copied()
            .unwrap_or(Starter::Blank))
    }

    fn resolve_paths(name: &str, output: Option<PathBuf>) -> Result<(String, PathBuf)> {
        if name == "." {
            let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
            let dir_name = cwd
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| eyre::eyre!("Current directory has no valid name"))?
                .to_string();
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            Ok((dir_name, output_dir))
        } else {
            let output_dir = output.unwrap_or_else(|| PathBuf::from(name));
            Ok((name.to_string(), output_dir))
        }
    }
}
