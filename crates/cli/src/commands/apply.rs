use anyhow::{Context, Result};
use codemod_runner_core::{Error, TransformOptions, TransformRunner};
use tracing::debug;

use super::resolve_root;

pub fn apply_command(
    codemod: &str,
    path: &str,
    options: TransformOptions,
    root: Option<&str>,
) -> Result<()> {
    let root = resolve_root(root)?;
    debug!("Applying codemod '{}' with root {:?}", codemod, root);

    let runner = TransformRunner::new(root);
    match runner.transform(codemod, path, &options) {
        Ok(()) => Ok(()),
        Err(Error::ProcessFailed { command, status }) => {
            eprintln!("Failed to run: {command}");
            // Mirror the tool's own exit code to the caller.
            std::process::exit(status.code().unwrap_or(1));
        }
        Err(err) => {
            Err(err).with_context(|| format!("Failed to apply codemod '{codemod}' to {path}"))
        }
    }
}
