mod apply;
mod list;

pub use apply::apply_command;
pub use list::list_command;

use std::path::PathBuf;

use anyhow::{Context, Result};

pub(crate) fn resolve_root(root: Option<&str>) -> Result<PathBuf> {
    match root {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => std::env::current_dir().context("Failed to get current directory"),
    }
}
