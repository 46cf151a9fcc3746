use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::command::build_command;
use crate::error::Result;
use crate::logger::{TracingLogger, TransformLogger};
use crate::options::TransformOptions;
use crate::output::parse_errors;
use crate::resolver::resolve_jscodeshift;

/// Directory under the package root holding the bundled codemods
const CODEMODS_DIR: &str = "codemods";

/// File extension every bundled codemod carries
const CODEMOD_EXTENSION: &str = "js";

/// Orchestrates one synchronous jscodeshift invocation per call.
///
/// Holds no mutable state; each [`transform`](Self::transform) call is
/// an independent resolve → build → execute → parse pipeline.
pub struct TransformRunner {
    package_root: PathBuf,
    logger: Arc<dyn TransformLogger>,
}

impl TransformRunner {
    pub fn new(package_root: impl Into<PathBuf>) -> Self {
        Self::with_logger(package_root, Arc::new(TracingLogger))
    }

    pub fn with_logger(
        package_root: impl Into<PathBuf>,
        logger: Arc<dyn TransformLogger>,
    ) -> Self {
        Self {
            package_root: package_root.into(),
            logger,
        }
    }

    /// Path a codemod identifier maps to.
    ///
    /// Never validated here; a missing codemod file is reported by the
    /// tool itself as an execution failure.
    pub fn codemod_path(&self, codemod: &str) -> PathBuf {
        self.package_root
            .join(CODEMODS_DIR)
            .join(format!("{codemod}.{CODEMOD_EXTENSION}"))
    }

    /// Apply one codemod to `source`, blocking until the tool exits.
    ///
    /// Infrastructure failures (spawn error, non-zero exit) are
    /// returned to the caller unchanged. Per-file errors the tool
    /// reported in its output are logged through the injected logger
    /// and never fail the run; by the time they are parsed the tool
    /// has already finished its batch.
    pub fn transform(
        &self,
        codemod: &str,
        source: impl AsRef<Path>,
        options: &TransformOptions,
    ) -> Result<()> {
        let source = source.as_ref();
        self.logger.info(&format!(
            "Applying codemod '{codemod}': {}",
            source.display()
        ));

        let codemod_path = self.codemod_path(codemod);
        let target_path = std::path::absolute(source)?;
        let executable = resolve_jscodeshift(&self.package_root);
        let command = build_command(&codemod_path, &target_path, &executable, options);
        debug!(target: "transform", "Running: {}", command.to_shell_command());

        let output = command.execute()?;

        for error in parse_errors(&output) {
            self.logger.error(&format!(
                "Error applying codemod [path={}, summary={}]",
                error.filename, error.summary
            ));
        }

        Ok(())
    }
}
