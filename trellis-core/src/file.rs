use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content (without the rules header)
    fn render(&self) -> String;

    /// Write the file to disk according to its rules
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let rules = self.rules();
        write_with_rules(&self.path(base), &rules.apply_header(self.render()), &rules)
    }
}

fn write_with_rules(path: &Path, content: &str, rules: &FileRules) -> Result<WriteResult> {
    let existed = path.exists();
    match rules.overwrite {
        Overwrite::IfMissing if existed => Ok(WriteResult::Skipped),
        _ => {
            write_file(path, content)?;
            Ok(if existed {
                WriteResult::Overwritten
            } else {
                WriteResult::Created
            })
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist and was created
    Created,
    /// File existed and was replaced
    Overwritten,
    /// File was left untouched (already materialised)
    Skipped,
}

impl WriteResult {
    /// Whether anything was written to disk.
    pub fn is_written(&self) -> bool {
        !matches!(self, WriteResult::Skipped)
    }
}

/// A plain file with fixed content
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a file that is only written when missing.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::create_once(),
        }
    }

    /// Replace the write rules.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        let content = self.rules.apply_header(self.content.clone());
        write_with_rules(&self.path, &content, &self.rules)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    /// Comment line prepended to the rendered content
    pub header: Option<String>,
}

impl FileRules {
    /// Rules for files the user owns after the first write.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            header: None,
        }
    }

    /// Rules for files that are always regenerated.
    pub fn always() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }

    /// Set the header line.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    fn apply_header(&self, content: String) -> String {
        match &self.header {
            Some(header) => format!("{}\n{}", header, content),
            None => content,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Only create if file doesn't exist (user-editable output)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self::always()
    }
}
