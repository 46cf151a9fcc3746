use std::fs;

use anyhow::{Context, Result};

use super::resolve_root;

/// Print the identifiers of all bundled codemods, one per line.
pub fn list_command(root: Option<&str>) -> Result<()> {
    let root = resolve_root(root)?;
    let codemods_dir = root.join("codemods");

    if !codemods_dir.is_dir() {
        println!("No codemods directory in {}", root.display());
        return Ok(());
    }

    let mut names = Vec::new();
    let entries = fs::read_dir(&codemods_dir)
        .with_context(|| format!("Failed to read {}", codemods_dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("js") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }

    names.sort();
    for name in &names {
        println!("{name}");
    }

    Ok(())
}
