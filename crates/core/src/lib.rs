//! codemod-runner - a thin wrapper around the jscodeshift transformation tool
//!
//! This crate provides functionality to:
//! - Resolve the jscodeshift executable (bundled copy or PATH fallback)
//! - Assemble an invocation from per-run options
//! - Execute the tool synchronously and scrape per-file errors from its output
pub mod command;
pub mod error;
pub mod logger;
pub mod options;
pub mod output;
pub mod resolver;
pub mod runner;

// Re-export commonly used types and traits
pub use error::{Error, Result};

// Re-export main API components
pub use command::{TransformCommand, build_command};
pub use logger::{TracingLogger, TransformLogger};
pub use options::TransformOptions;
pub use output::{TransformError, parse_errors};
pub use resolver::resolve_jscodeshift;
pub use runner::TransformRunner;
