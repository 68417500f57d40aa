//! Component generator: prompt → structured model call → files on disk.
//!
//! A single generation is fully sequential. Variants are independent
//! generations run one after another; a failure aborts the batch but leaves
//! the files of earlier variants on disk.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use compgen_core::component::{
    build_prompt, display_name, resolve_output_path, variant_description, FileRecord, PathError,
    ResponseSchema,
};
use indicatif::ProgressBar;

use crate::client::{ClientError, ModelClient};

/// Errors raised while generating a component.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Error generating component: {0}")]
    Generation(#[from] ClientError),

    #[error("The model did not generate any files")]
    NoFiles,

    #[error("Invalid file path from model: {0}")]
    InvalidPath(#[from] PathError),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Helper to set spinner message if spinner is present
fn set_spinner_msg(spinner: Option<&ProgressBar>, msg: impl Into<String>) {
    if let Some(s) = spinner {
        s.set_message(msg.into());
    }
}

/// Generates components with a model client and writes them under an output root.
pub struct ComponentGenerator<C> {
    client: C,
    output_dir: PathBuf,
    spinner: Option<ProgressBar>,
}

impl<C: ModelClient> ComponentGenerator<C> {
    pub fn new(client: C, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
            spinner: None,
        }
    }

    /// Report progress on the given spinner.
    pub fn with_spinner(mut self, spinner: ProgressBar) -> Self {
        self.spinner = Some(spinner);
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Generate a complete component (implementation + test) from a description.
    ///
    /// Every returned record has been written to disk when this returns `Ok`.
    /// Nothing is written if the model call, validation or path resolution fails.
    pub async fn generate(&self, description: &str) -> Result<Vec<FileRecord>, GeneratorError> {
        set_spinner_msg(self.spinner.as_ref(), "Generating component with AI...");

        let prompt = build_prompt(description);
        log::debug!("Built prompt ({} chars)", prompt.chars().count());

        let files = self
            .client
            .generate_structured(&prompt, &ResponseSchema::file_records())
            .await?;

        if files.is_empty() {
            return Err(GeneratorError::NoFiles);
        }

        log::info!("Model generated {} files", files.len());

        let targets = files
            .iter()
            .map(|file| resolve_output_path(&self.output_dir, &file.path))
            .collect::<Result<Vec<_>, _>>()?;

        set_spinner_msg(
            self.spinner.as_ref(),
            format!("Writing {} files...", files.len()),
        );

        for (file, target) in files.iter().zip(&targets) {
            write_file(target, &file.content).await?;
            log::info!("Wrote {}", target.display());
        }

        log::info!(
            "Component '{}' generated successfully",
            display_name(&files[0].path)
        );

        Ok(files)
    }

    /// Generate `count` independent variants of the same component.
    ///
    /// Variant `i` is generated from the description plus a "Style variation #i"
    /// instruction. The first failure is returned as-is.
    pub async fn generate_variants(
        &self,
        description: &str,
        count: NonZeroUsize,
    ) -> Result<Vec<Vec<FileRecord>>, GeneratorError> {
        let count = count.get();
        let mut variants = Vec::with_capacity(count);

        for i in 1..=count {
            log::info!("Generating variant {}/{}", i, count);

            let files = self.generate(&variant_description(description, i)).await?;
            set_spinner_msg(
                self.spinner.as_ref(),
                format!("Generated variant {}/{}", i, count),
            );

            variants.push(files);
        }

        Ok(variants)
    }
}

async fn write_file(path: &Path, content: &str) -> Result<(), GeneratorError> {
    let to_error = |source| GeneratorError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(to_error)?;
    }

    tokio::fs::write(path, content).await.map_err(to_error)
}
