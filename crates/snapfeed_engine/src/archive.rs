use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tar::Builder;
use thiserror::Error;

/// Top-level directory name inside the produced archive.
pub const ARCHIVE_TOP_DIR: &str = "Images";

#[derive(Debug, Error)]
pub enum PackageError {
    #[error("clean directory could not be read: {0}")]
    CleanDir(io::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub file_count: usize,
    pub archive_path: PathBuf,
}

/// Packages every file in `clean_dir` into one gzip-compressed tarball at
/// `archive_path`, filenames preserved under [`ARCHIVE_TOP_DIR`]. Any
/// pre-existing archive at the target path is overwritten. Entries are added
/// in filename order so identical inputs produce identical listings.
pub fn package(clean_dir: &Path, archive_path: &Path) -> Result<ArchiveSummary, PackageError> {
    let mut files: Vec<_> = fs::read_dir(clean_dir)
        .map_err(PackageError::CleanDir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .collect();
    files.sort_by_key(|entry| entry.file_name());

    let file = File::create(archive_path)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = Builder::new(encoder);

    let mut file_count = 0;
    for entry in files {
        let name = entry.file_name();
        let archived_name = format!("{ARCHIVE_TOP_DIR}/{}", name.to_string_lossy());
        builder.append_path_with_name(entry.path(), archived_name)?;
        file_count += 1;
    }

    let encoder = builder.into_inner()?;
    encoder.finish()?;

    Ok(ArchiveSummary {
        file_count,
        archive_path: archive_path.to_path_buf(),
    })
}
