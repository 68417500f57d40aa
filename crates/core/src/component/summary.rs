use std::path::Path;

use serde::Serialize;

use super::types::{FileKind, FileRecord};

/// Per-file line of the generation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub path: String,
    pub kind: FileKind,
    /// Content length in characters (Unicode scalar values, not bytes).
    pub characters: usize,
}

/// Report for one generated batch of files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub component_name: String,
    pub output_dir: String,
    pub files: Vec<FileSummary>,
}

/// Derive the display name of a component from a file path.
///
/// This is the file stem: only the final extension is stripped, so
/// `a/b/c.test.tsx` yields `c.test`.
pub fn display_name(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Build the report for a generated batch. The component name comes from the
/// first file; an empty batch yields an empty name.
pub fn summarize(files: &[FileRecord], output_dir: &str) -> GenerationSummary {
    let component_name = files
        .first()
        .map(|f| display_name(&f.path))
        .unwrap_or_default();

    GenerationSummary {
        component_name,
        output_dir: output_dir.to_string(),
        files: files
            .iter()
            .map(|f| FileSummary {
                path: f.path.clone(),
                kind: f.kind(),
                characters: f.content.chars().count(),
            })
            .collect(),
    }
}
