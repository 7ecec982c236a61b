//! Paths command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Resolved project locations.
#[derive(Debug)]
pub struct PathsReport {
    pub root: PathBuf,
    /// `(category, location, exists)`
    pub locations: Vec<(String, PathBuf, bool)>,
    /// Locations whose changes trigger regeneration.
    pub watch: Vec<PathBuf>,
}

impl Report for PathsReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Root", &self.root.display().to_string());
        out.newline();

        out.section("Locations");
        for (category, location, exists) in &self.locations {
            let marker = if *exists { "" } else { " (missing)" };
            out.key_value_indented(category, &format!("{}{}", location.display(), marker));
        }
        out.newline();

        out.section("Watched");
        for path in &self.watch {
            out.list_item(&path.display().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_render() {
        let report = PathsReport {
            root: PathBuf::from("/srv/app"),
            locations: vec![
                ("entities".into(), PathBuf::from("/srv/app/entities"), true),
                ("output".into(), PathBuf::from("/srv/app/src/generated"), false),
            ],
            watch: vec![PathBuf::from("/srv/app/entities")],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Root: /srv/app",
                "",
                "Locations:",
                "  entities: /srv/app/entities",
                "  output: /srv/app/src/generated (missing)",
                "",
                "Watched:",
                "  - /srv/app/entities",
            ]
        );
    }
}
