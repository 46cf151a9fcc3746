//! Per-invocation options forwarded to the transformation tool

use serde::{Deserialize, Serialize};

/// Options for one codemod run.
///
/// All fields default to off/absent; a fresh value requests a plain
/// write-in-place run. Constructed by the caller per invocation and
/// read once while building the command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    /// Report what would change without writing any files
    pub dry: bool,
    /// Print the transformed output
    pub print: bool,
    /// Enable verbose tool logging
    pub verbose: bool,
    /// Raw extra arguments forwarded to jscodeshift
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jscodeshift_args: Option<String>,
}

impl TransformOptions {
    pub fn with_dry(mut self, dry: bool) -> Self {
        self.dry = dry;
        self
    }

    pub fn with_print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_jscodeshift_args(mut self, args: impl Into<String>) -> Self {
        self.jscodeshift_args = Some(args.into());
        self
    }
}
