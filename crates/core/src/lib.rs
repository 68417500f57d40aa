//! Core library for compgen
//!
//! This crate implements the **Functional Core** of the compgen application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The compgen project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`compgen_core`** (this crate): Pure transformation functions with zero I/O
//! - **`compgen`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`component`]: Prompt building, response schema, response parsing, output
//!   path resolution and summaries for generated components
//! - [`gemini`]: Readable messages from Gemini API error bodies
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use compgen_core::component::{build_prompt, parse_file_records, summarize};
//!
//! let prompt = build_prompt("a blue button");
//!
//! // Raw model text (no HTTP required)
//! let raw = r#"[{"path": "src/components/Button/Button.tsx", "content": "..."}]"#;
//! let files = parse_file_records(raw)?;
//!
//! let summary = summarize(&files, "./output/components");
//! assert_eq!(summary.component_name, "Button");
//! ```

pub mod component;
pub mod gemini;
