use std::path::Path;

use crate::prelude::*;
use clap::Parser;

mod client;
mod component;
mod config;
mod error;
mod generator;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Generate Preact + TypeScript + Tailwind components and their tests from a natural-language description"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "COMPGEN_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Generate a component and its test file with Gemini
    Generate(crate::component::generate::GenerateOptions),

    /// Print the prompt sent to the model without calling it
    Prompt(crate::component::prompt::PromptOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so `.env` values reach the `env` fallbacks of the arguments
    let env_file = config::load_env_file(Path::new(config::ENV_FILE));

    env_logger::init();
    color_eyre::install()?;

    match env_file {
        Ok(true) => log::debug!("Loaded environment from {}", config::ENV_FILE),
        Ok(false) => {}
        Err(e) => log::warn!("Failed to load {}: {}", config::ENV_FILE, e),
    }

    let app = App::parse();

    match app.command {
        SubCommands::Generate(options) => {
            crate::component::generate::handler(options, app.global).await
        }
        SubCommands::Prompt(options) => crate::component::prompt::handler(options),
    }
}
