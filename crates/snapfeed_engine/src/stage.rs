use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StageError {
    #[error("staging directory missing or not writable: {0}")]
    StagingDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure a staging directory exists; create if missing.
pub fn ensure_dir(dir: &Path) -> Result<(), StageError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| StageError::StagingDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(StageError::StagingDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| StageError::StagingDir(e.to_string()))?;
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| StageError::StagingDir(e.to_string()))?;
    Ok(())
}

/// Removes regular files left in `dir` by earlier runs. Subdirectories are
/// left alone. A missing directory is fine.
pub fn clear_dir_files(dir: &Path) -> Result<usize, StageError> {
    if !dir.exists() {
        return Ok(0);
    }
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            fs::remove_file(entry.path())?;
            removed += 1;
        }
    }
    Ok(removed)
}

/// Stages downloaded artifacts: atomic byte writes into a working directory
/// and moves of classified artifacts between staging areas.
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Atomically writes bytes to `{dir}/{filename}` by writing a temp file
    /// then renaming. Replaces an existing file of the same name.
    pub fn write(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, StageError> {
        ensure_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(bytes)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| StageError::Io(e.error))?;
        Ok(target)
    }

    /// Moves a staged file into `dest_dir`, keeping its filename.
    pub fn move_to(&self, filename: &str, dest_dir: &Path) -> Result<PathBuf, StageError> {
        ensure_dir(dest_dir)?;
        let source = self.dir.join(filename);
        let target = dest_dir.join(filename);
        fs::rename(&source, &target)?;
        Ok(target)
    }
}
