use std::path::{Path, PathBuf};

use crate::error::Error;

/// Read at startup, relative to the working directory.
pub const ENV_FILE: &str = ".env";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_OUTPUT_DIR: &str = "./output/components";

/// Gemini connection settings
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

/// Settings resolved once at startup and passed explicitly to the components
/// that need them.
#[derive(Debug, Clone)]
pub struct Settings {
    pub gemini: GeminiConfig,
    pub output_dir: PathBuf,
}

impl Settings {
    /// Resolve settings from CLI arguments (which already fall back to the
    /// environment). A missing or blank API key is a configuration error.
    pub fn resolve(
        api_key: Option<String>,
        model: String,
        base_url: String,
        output_dir: PathBuf,
    ) -> Result<Self, Error> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingApiKey)?;

        Ok(Self {
            gemini: GeminiConfig {
                api_key,
                model,
                base_url,
            },
            output_dir,
        })
    }
}

/// Load `KEY=value` pairs from `path` into the process environment.
///
/// Variables that are already set are left untouched. Returns `false` when
/// the file does not exist.
pub fn load_env_file(path: &Path) -> Result<bool, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e),
    }
}
