//! One generated view module on disk.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use trellis_codegen::{GeneratedView, paths::view_file_name};
use trellis_core::{FileRules, GeneratedFile, WriteResult};

/// First line of every generated module.
pub const GENERATED_HEADER: &str =
    "// Generated by trellis. Edit freely: existing files are never overwritten.";

/// A generated view module, written as `<ViewName>.<ext>` in the output
/// directory.
///
/// Once materialised the file belongs to the user and is left untouched,
/// unless `force` is set.
#[derive(Debug, Clone)]
pub struct ViewModule {
    pub name: String,
    pub source: String,
    pub extension: String,
    pub force: bool,
}

impl ViewModule {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            extension: extension.into(),
            force: false,
        }
    }

    pub fn forced(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

impl GeneratedFile for ViewModule {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(view_file_name(&self.name, &self.extension))
    }

    fn rules(&self) -> FileRules {
        let rules = if self.force {
            FileRules::always()
        } else {
            FileRules::create_once()
        };
        rules.with_header(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        self.source.clone()
    }
}

/// Write every generated view into `output`, in order.
pub fn write_modules(
    views: &[GeneratedView],
    output: &Path,
    extension: &str,
    force: bool,
) -> Result<Vec<(String, WriteResult)>> {
    views
        .iter()
        .map(|view| {
            let module = ViewModule::new(&view.name, &view.source, extension).forced(force);
            let result = module
                .write(output)
                .wrap_err_with(|| format!("Failed to write view module {}", view.name))?;
            tracing::debug!(view = %view.name, ?result, "wrote view module");
            Ok((view.name.clone(), result))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use trellis_manifest::ViewKind;

    use super::*;

    fn generated(name: &str, source: &str) -> GeneratedView {
        GeneratedView {
            name: name.to_string(),
            kind: ViewKind::List,
            source: source.to_string(),
        }
    }

    #[test]
    fn test_existing_module_is_not_clobbered() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("TaskList.jsx");
        fs::write(&path, "// edited by hand\n").unwrap();

        let results = write_modules(
            &[generated("TaskList", "fresh\n"), generated("TaskBoard", "board\n")],
            temp.path(),
            "jsx",
            false,
        )
        .unwrap();

        assert_eq!(results[0], ("TaskList".to_string(), WriteResult::Skipped));
        assert_eq!(results[1], ("TaskBoard".to_string(), WriteResult::Created));
        assert_eq!(fs::read_to_string(&path).unwrap(), "// edited by hand\n");
        assert_eq!(
            fs::read_to_string(temp.path().join("TaskBoard.jsx")).unwrap(),
            format!("{}\nboard\n", GENERATED_HEADER)
        );
    }

    #[test]
    fn test_force_overwrites() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("TaskList.jsx"), "old").unwrap();

        let result = ViewModule::new("TaskList", "new\n", "jsx")
            .forced(true)
            .write(temp.path())
            .unwrap();

        assert_eq!(result, WriteResult::Overwritten);
        assert!(
            fs::read_to_string(temp.path().join("TaskList.jsx"))
                .unwrap()
                .ends_with("new\n")
        );
    }
}
