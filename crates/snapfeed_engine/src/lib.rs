//! Snapfeed engine: the harvest-dedup-classify-package pipeline.
mod archive;
mod classify;
mod extract;
mod feed;
mod fetch;
mod notify;
mod run;
mod seen;
mod stage;
mod types;

pub use archive::{package, ArchiveSummary, PackageError, ARCHIVE_TOP_DIR};
pub use classify::{is_empty_text_sentinel, ClassifyError, TesseractClassifier, TextClassifier};
pub use extract::entry_outcome;
pub use feed::{parse_feed, FeedEntry, FeedError};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use notify::{NoopNotifier, Notifier, NotifyError};
pub use run::{run_blocking, run_pipeline, PipelineConfig, PipelineRun, RunError};
pub use seen::{SeenError, SeenSet};
pub use stage::{clear_dir_files, ensure_dir, ArtifactWriter, StageError};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
