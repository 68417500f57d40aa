use std::num::NonZeroUsize;

use crate::prelude::{println, *};
use compgen_core::component::{build_prompt, variant_description, ResponseSchema};

use super::{abort, read_description};

#[derive(Debug, clap::Args, Clone)]
pub struct PromptOptions {
    /// Natural-language description of the component (asked for interactively when omitted)
    #[arg(value_name = "DESCRIPTION")]
    pub description: Option<String>,

    /// Render the prompt for this style variant
    #[arg(long)]
    pub variant: Option<NonZeroUsize>,

    /// Print the response schema instead of the prompt
    #[arg(long)]
    pub schema: bool,
}

/// Print what would be sent to the model. Never contacts the model.
pub fn handler(options: PromptOptions) -> Result<()> {
    if options.schema {
        let schema = serde_json::to_string_pretty(&ResponseSchema::file_records())
            .map_err(|e| eyre!("Failed to serialize schema: {}", e))?;
        println!("{}", schema);
        return Ok(());
    }

    let description = read_description(
        options.description,
        &mut std::io::stdin().lock(),
        &mut std::io::stderr(),
    )
    .unwrap_or_else(|e| abort(e));

    println!("{}", render_prompt(&description, options.variant));

    Ok(())
}

fn render_prompt(description: &str, variant: Option<NonZeroUsize>) -> String {
    match variant {
        Some(index) => build_prompt(&variant_description(description, index.get())),
        None => build_prompt(description),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_prompt() {
        let prompt = render_prompt("a blue button", None);
        assert_eq!(prompt, build_prompt("a blue button"));
        assert!(!prompt.contains("Style variation"));
    }

    #[test]
    fn test_render_variant_prompt() {
        let prompt = render_prompt("a blue button", NonZeroUsize::new(2));
        assert!(prompt.contains("a blue button\n\nStyle variation #2"));
    }
}
