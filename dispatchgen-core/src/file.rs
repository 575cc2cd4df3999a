use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content, headers included
    fn render(&self) -> String;
}

/// Write a set of artifacts that only make sense together.
///
/// Everything is rendered and staged next to its target before any target is
/// touched, so a failure while writing leaves the previous artifacts in place.
/// Staged files are then renamed over their targets. Returns the written
/// paths in input order.
pub fn write_all(base: &Path, files: &[&dyn GeneratedFile]) -> Result<Vec<PathBuf>> {
    let rendered: Vec<(PathBuf, String)> = files
        .iter()
        .map(|file| (file.path(base), file.render()))
        .collect();

    let mut staged: Vec<PathBuf> = Vec::with_capacity(rendered.len());
    for (path, content) in &rendered {
        let staging = staging_path(path);
        if let Err(e) = write_file(&staging, content) {
            discard(&staged);
            return Err(e);
        }
        staged.push(staging);
    }

    for (i, (path, _)) in rendered.iter().enumerate() {
        if let Err(e) = std::fs::rename(&staged[i], path) {
            discard(&staged[i..]);
            return Err(e).wrap_err_with(|| format!("failed to write '{}'", path.display()));
        }
        tracing::debug!(path = %path.display(), "wrote generated file");
    }

    Ok(rendered.into_iter().map(|(path, _)| path).collect())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn discard(staged: &[PathBuf]) {
    for path in staged {
        if let Err(e) = std::fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove staged file");
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    tracing::trace!(path = %path.display(), bytes = content.len(), "staged generated file");
    Ok(())
}
