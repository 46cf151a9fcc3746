//! Locating the jscodeshift executable

use std::path::{Path, PathBuf};

/// Bare command name used when no bundled copy is found
const JSCODESHIFT_BIN: &str = "jscodeshift";

/// Location of the bundled executable relative to the package root
const LOCAL_BIN_PATH: &str = "node_modules/.bin/jscodeshift";

/// Resolve the jscodeshift executable for a package root.
///
/// Prefers the copy installed under the package's own `node_modules`;
/// otherwise falls back to the bare name so the OS search path can
/// resolve it at spawn time. The fallback is never validated here; a
/// missing executable surfaces as a spawn error during execution.
pub fn resolve_jscodeshift(package_root: &Path) -> PathBuf {
    let local = package_root.join(LOCAL_BIN_PATH);
    if local.is_file() {
        local
    } else {
        PathBuf::from(JSCODESHIFT_BIN)
    }
}
