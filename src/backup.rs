//! Backup of the host manifest before merging
//!
//! The backup is the sole recovery mechanism: it is written before any
//! mutation of the host file, and restoring it after a failed merge is a
//! manual step.

use chrono::Local;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MergeError, Result};

/// Outcome of a successful backup
#[derive(Debug)]
pub struct BackupOutcome {
    /// Path of the backup copy
    pub path: PathBuf,
    /// Whether the backup directory had to be created
    pub created_dir: bool,
}

/// Derive the default backup directory name from the current local time,
/// compact numeric form down to the second
pub fn default_backup_dir() -> PathBuf {
    PathBuf::from(format!(
        ".boilerplate-backup-{}",
        Local::now().format("%Y%m%d-%H%M%S")
    ))
}

/// Copy the host manifest verbatim into `backup_dir`, creating the directory
/// if it does not exist yet.
pub fn backup(host_path: &Path, backup_dir: &Path) -> Result<BackupOutcome> {
    let created_dir = !backup_dir.exists();
    if created_dir {
        fs::create_dir_all(backup_dir).map_err(|e| MergeError::BackupFailed {
            path: backup_dir.display().to_string(),
            reason: e.to_string(),
        })?;
    }

    let file_name = host_path
        .file_name()
        .unwrap_or(OsStr::new("package.json"));
    let backup_path = backup_dir.join(file_name);

    fs::copy(host_path, &backup_path).map_err(|e| MergeError::BackupFailed {
        path: backup_path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(BackupOutcome {
        path: backup_path,
        created_dir,
    })
}
