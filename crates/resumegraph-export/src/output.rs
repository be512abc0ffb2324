use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn write_json(value: &Value, path: Option<&Path>) -> Result<()> {
    let data = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {}", parent.display()))?;
            }
            fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{data}").context("failed to write to stdout")?;
        }
    }
    Ok(())
}
