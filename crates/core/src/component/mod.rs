pub mod layout;
pub mod parse;
pub mod prompt;
pub mod schema;
pub mod summary;
pub mod types;

pub use layout::{resolve_output_path, PathError};
pub use parse::{parse_file_records, ParseError};
pub use prompt::{build_prompt, variant_description};
pub use schema::ResponseSchema;
pub use summary::{display_name, summarize, FileSummary, GenerationSummary};
pub use types::{FileKind, FileRecord};
