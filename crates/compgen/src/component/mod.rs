use std::io::{BufRead, Write};

use colored::Colorize;

use crate::error::Error;

pub mod generate;
pub mod prompt;

const DESCRIPTION_PROMPT: &str = "Describe the component: ";

/// Take the description from the argument, or ask for it interactively.
///
/// Blank descriptions are rejected here, before anything talks to the model.
pub fn read_description<R: BufRead, W: Write>(
    argument: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Result<String, Error> {
    let description = match argument {
        Some(description) => description,
        None => {
            write!(output, "\n{}", DESCRIPTION_PROMPT.bold())?;
            output.flush()?;

            let mut line = String::new();
            input.read_line(&mut line)?;
            line
        }
    };

    let description = description.trim();
    if description.is_empty() {
        return Err(Error::EmptyDescription);
    }

    Ok(description.to_string())
}

/// Print a startup error and terminate without further work.
pub fn abort(err: Error) -> ! {
    anstream::eprintln!("{} {}", "Error:".red().bold(), err);
    std::process::exit(1)
}
