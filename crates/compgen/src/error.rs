/// Errors that stop the CLI before any generation work starts.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("GEMINI_API_KEY not found (set it in .env, export it or pass --api-key)")]
    MissingApiKey,

    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("Failed to read description: {0}")]
    Input(#[from] std::io::Error),
}
