use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::GenerationError;
use crate::model::RunReport;

/// Write a rendered module, replacing any existing file.
///
/// The text goes to a sibling temp file first and is renamed into place, so
/// the destination never holds a partial module. Returns bytes written.
pub fn write_module(path: &Path, text: &str) -> Result<u64, GenerationError> {
    write_bytes_atomic(path, text.as_bytes())?;
    Ok(text.len() as u64)
}

/// Write a run report as pretty JSON.
pub fn write_report(path: &Path, report: &RunReport) -> Result<(), GenerationError> {
    write_json_atomic(path, report)
}

fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), GenerationError> {
    let data = serde_json::to_vec_pretty(value)?;
    write_bytes_atomic(path, &data)?;
    Ok(())
}

fn write_bytes_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let parent = path.parent().filter(|parent| !parent.as_os_str().is_empty());
    if let Some(parent) = parent {
        create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);

    if let Err(err) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(err);
    }
    if let Some(parent) = parent {
        sync_dir(parent)?;
    }

    Ok(())
}

/// Sibling temp path, unique per write so it never names an existing file.
fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "invalid path for atomic write")
    })?;
    let tmp_name = format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        uuid::Uuid::new_v4().simple()
    );
    Ok(path.with_file_name(tmp_name))
}

#[cfg(unix)]
fn sync_dir(path: &Path) -> io::Result<()> {
    let dir = OpenOptions::new().read(true).open(path)?;
    dir.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}

/// Whether `output` names the same file as the existing `input`.
pub(crate) fn same_file(input: &Path, output: &Path) -> io::Result<bool> {
    let input = std::fs::canonicalize(input)?;
    let output = if output.exists() {
        std::fs::canonicalize(output)?
    } else {
        let parent = output
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        match (std::fs::canonicalize(parent), output.file_name()) {
            (Ok(parent), Some(name)) => parent.join(name),
            _ => return Ok(false),
        }
    };
    Ok(input == output)
}
