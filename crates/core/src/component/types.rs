use serde::{Deserialize, Serialize};

/// A single generated file with its path and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Relative path for the file (e.g. `src/components/Button/Button.tsx`).
    pub path: String,
    /// The full source code of the file. May be empty, but must be present.
    pub content: String,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn kind(&self) -> FileKind {
        FileKind::from_path(&self.path)
    }
}

/// Coarse classification of a generated file, used for reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Component,
    Test,
}

impl FileKind {
    /// A path containing a `.test.` segment is a test file.
    pub fn from_path(path: &str) -> Self {
        if path.contains(".test.") {
            FileKind::Test
        } else {
            FileKind::Component
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Component => "Component",
            FileKind::Test => "Test",
        }
    }
}
