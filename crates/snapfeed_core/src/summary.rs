use std::path::PathBuf;

/// Counters collected over one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Feed entries visited across all sources.
    pub entries: usize,
    /// Images downloaded into the working directory.
    pub fetched: usize,
    /// References skipped because they were already recorded as seen.
    pub duplicates: usize,
    /// References skipped because their extension is not allow-listed.
    pub non_images: usize,
    /// Entries skipped because they violated a structural assumption.
    pub malformed: usize,
    /// References whose download failed; the run continues past them.
    pub fetch_failures: usize,
    /// Artifacts excluded because OCR found text (or the classifier failed
    /// and the artifact was conservatively excluded).
    pub text_excluded: usize,
    /// Files written into the produced archive.
    pub archived: usize,
    /// Path of the produced archive, once packaging has run.
    pub archive_path: Option<PathBuf>,
}
