use std::path::{Component, Path, PathBuf};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PathError {
    #[error("File path is empty")]
    Empty,

    #[error("File path must be relative: {0}")]
    Absolute(String),

    #[error("File path escapes the output directory: {0}")]
    EscapesRoot(String),

    #[error("File path does not name a file: {0}")]
    NotAFile(String),
}

/// Resolve a generated file path against the output root.
///
/// The relative path is honored verbatim, but it must stay inside `root`:
/// absolute paths and `..` segments are rejected. The final segment must name
/// a file, so `.`, `./` and paths ending in a separator are rejected too.
pub fn resolve_output_path(root: &Path, relative: &str) -> Result<PathBuf, PathError> {
    if relative.trim().is_empty() {
        return Err(PathError::Empty);
    }

    let path = Path::new(relative);

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                return Err(PathError::Absolute(relative.to_string()))
            }
            Component::ParentDir => return Err(PathError::EscapesRoot(relative.to_string())),
            Component::CurDir | Component::Normal(_) => {}
        }
    }

    let file_name = relative.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    if file_name.is_empty() || file_name == "." {
        return Err(PathError::NotAFile(relative.to_string()));
    }

    Ok(root.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_nested_path() {
        let root = Path::new("./output/components");
        let resolved = resolve_output_path(root, "src/components/Button/Button.tsx").unwrap();
        assert_eq!(
            resolved,
            PathBuf::from("./output/components/src/components/Button/Button.tsx")
        );
    }

    #[test]
    fn test_resolve_current_dir_prefix() {
        let root = Path::new("out");
        let resolved = resolve_output_path(root, "./Button.tsx").unwrap();
        assert!(resolved.starts_with("out"));
        assert!(resolved.ends_with("Button.tsx"));
    }

    #[test]
    fn test_empty_path() {
        let root = Path::new("out");
        assert_eq!(resolve_output_path(root, ""), Err(PathError::Empty));
        assert_eq!(resolve_output_path(root, "   "), Err(PathError::Empty));
    }

    #[test]
    fn test_absolute_path() {
        let root = Path::new("out");
        assert_eq!(
            resolve_output_path(root, "/etc/passwd"),
            Err(PathError::Absolute("/etc/passwd".to_string()))
        );
    }

    #[test]
    fn test_current_dir_only() {
        let root = Path::new("out");
        for path in [".", "./", "./.", "src/."] {
            assert_eq!(
                resolve_output_path(root, path),
                Err(PathError::NotAFile(path.to_string())),
                "{path}"
            );
        }
    }

    #[test]
    fn test_trailing_separator() {
        let root = Path::new("out");
        assert_eq!(
            resolve_output_path(root, "src/components/Button/"),
            Err(PathError::NotAFile("src/components/Button/".to_string()))
        );
    }

    #[test]
    fn test_parent_dir_escape() {
        let root = Path::new("out");
        assert_eq!(
            resolve_output_path(root, "src/../../Button.tsx"),
            Err(PathError::EscapesRoot("src/../../Button.tsx".to_string()))
        );
    }
}
