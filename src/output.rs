//! Writing the rendered report.
//!
//! Reports written to a file go through a temporary sibling (`.{name}.tmp`)
//! that is synced and then renamed over the target, so a reader never sees a
//! half-written report.

use crate::error::{Result, ReviewError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write `report` to `path`, or to stdout when no path is given.
pub fn write_report(report: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => write_file_atomic(path, report.as_bytes()),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(report.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| ReviewError::OutputError(format!("stdout: {}", e)))
        }
    }
}

/// Atomically replace `path` with `content`, creating parent directories.
pub fn write_file_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            ReviewError::OutputError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ReviewError::OutputError(format!("failed to replace '{}': {}", path.display(), e))
    })
}

/// Temporary file next to the target: `.{filename}.tmp`.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            ReviewError::OutputError(format!("invalid output path '{}'", target.display()))
        })?;

    let temp_name = format!(".{}.tmp", filename);
    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        ReviewError::OutputError(format!("failed to create '{}': {}", path.display(), e))
    })?;

    file.write_all(content)
        .and_then(|_| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            ReviewError::OutputError(format!("failed to write '{}': {}", path.display(), e))
        })
}
