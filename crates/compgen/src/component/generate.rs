use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use compgen_core::component::{summarize, FileKind, GenerationSummary};
use indicatif::{ProgressBar, ProgressStyle};

use super::{abort, read_description};
use crate::client::GeminiClient;
use crate::config::{Settings, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_OUTPUT_DIR};
use crate::generator::ComponentGenerator;

#[derive(Debug, clap::Args, Clone)]
pub struct GenerateOptions {
    /// Natural-language description of the component (asked for interactively when omitted)
    #[arg(value_name = "DESCRIPTION")]
    pub description: Option<String>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Gemini model used for generation
    #[arg(long, env = "COMPGEN_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Gemini API base URL
    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory the generated files are written under
    #[arg(short, long, env = "COMPGEN_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Number of stylistic variants to generate
    #[arg(short = 'n', long, default_value = "1")]
    pub variants: NonZeroUsize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: GenerateOptions, global: crate::Global) -> Result<()> {
    let settings = Settings::resolve(
        options.api_key,
        options.model,
        options.base_url,
        options.output_dir,
    )
    .unwrap_or_else(|e| abort(e));

    if !options.json {
        println!("{}", "LLM-based Preact Component Generator".bright_cyan().bold());
        println!("{}", "=".repeat(50).bright_cyan());
    }

    let description = read_description(
        options.description,
        &mut std::io::stdin().lock(),
        &mut std::io::stderr(),
    )
    .unwrap_or_else(|e| abort(e));

    let client = GeminiClient::new(settings.gemini.clone())
        .map_err(|e| eyre!("Failed to create Gemini client: {}", e))?;

    if global.verbose {
        eprintln!("Model: {}", client.model());
        eprintln!("Output directory: {}", settings.output_dir.display());
        eprintln!("Variants: {}", options.variants);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let generator =
        ComponentGenerator::new(client, &settings.output_dir).with_spinner(spinner.clone());

    let result = if options.variants.get() == 1 {
        generator.generate(&description).await.map(|files| vec![files])
    } else {
        generator
            .generate_variants(&description, options.variants)
            .await
    };

    // Clear the spinner before printing output
    spinner.finish_and_clear();

    let batches = result?;

    let output_dir = generator.output_dir().display().to_string();
    let summaries: Vec<GenerationSummary> = batches
        .iter()
        .map(|files| summarize(files, &output_dir))
        .collect();

    if options.json {
        let json_output = serde_json::to_string_pretty(&summaries)
            .map_err(|e| eyre!("Failed to serialize output: {}", e))?;
        println!("{}", json_output);
    } else {
        let total = summaries.len();
        for (idx, summary) in summaries.iter().enumerate() {
            let title = if total > 1 {
                format!("Generation Summary (variant {} of {})", idx + 1, total)
            } else {
                "Generation Summary".to_string()
            };
            println!("{}", format_summary_text(summary, &title));
        }
    }

    Ok(())
}

/// Convert a generation summary to formatted text with colors
fn format_summary_text(summary: &GenerationSummary, title: &str) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(50).bright_cyan()));
    result.push_str(&format!("{}\n", title.bright_cyan().bold()));
    result.push_str(&format!(
        "{}: {}\n\n",
        "Total files".green(),
        summary.files.len().to_string().bold()
    ));

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Type".bold().cyan(),
        "Path".bold().cyan(),
        "Characters".bold().cyan()
    ]);

    for file in &summary.files {
        let kind = match file.kind {
            FileKind::Test => file.kind.label().bright_magenta(),
            FileKind::Component => file.kind.label().bright_green(),
        };
        table.add_row(prettytable::row![
            kind,
            file.path.bright_white(),
            file.characters.to_string().bright_yellow()
        ]);
    }

    result.push_str(&table.to_string());

    result.push_str(&format!(
        "\nComponent '{}' ready to use!\n",
        summary.component_name.bright_cyan().bold()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Location".green(),
        summary.output_dir.cyan()
    ));

    result
}
