use super::types::FileRecord;

/// Errors raised while turning raw model text into file records.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Model response is empty")]
    Empty,

    #[error("Model response does not match the file list schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("File #{0} has an empty path")]
    EmptyPath(usize),
}

/// Parse a structured model response into an ordered list of file records.
///
/// Accepts a bare JSON array or one wrapped in a Markdown code fence.
/// An empty array is returned as-is.
pub fn parse_file_records(response: &str) -> Result<Vec<FileRecord>, ParseError> {
    let json = strip_code_fence(response);

    if json.is_empty() {
        return Err(ParseError::Empty);
    }

    let files: Vec<FileRecord> = serde_json::from_str(json)?;

    if let Some(index) = files.iter().position(|f| f.path.trim().is_empty()) {
        return Err(ParseError::EmptyPath(index));
    }

    Ok(files)
}

/// Strip an optional ```json / ``` fence around the response body.
fn strip_code_fence(response: &str) -> &str {
    let mut text = response.trim();

    if let Some(rest) = text.strip_prefix("```") {
        // Drop the info string (e.g. "json") up to the end of the fence line
        text = match rest.find('\n') {
            Some(pos) => &rest[pos + 1..],
            None => rest.trim_start_matches("json"),
        };
        text = text.trim_end();
        if let Some(body) = text.strip_suffix("```") {
            text = body;
        }
    }

    text.trim()
}
