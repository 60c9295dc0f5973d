use std::path::Path;

use pipeline_logging::pipeline_debug;
use thiserror::Error;

use snapfeed_core::RunSummary;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

/// Outbound delivery of a finished archive (e.g. mail with one attachment).
/// Delivery itself is an external collaborator; the default wiring is the
/// no-op implementation below.
pub trait Notifier: Send + Sync {
    fn send(&self, archive_path: &Path, summary: &RunSummary) -> Result<(), NotifyError>;
}

#[derive(Debug, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn send(&self, archive_path: &Path, summary: &RunSummary) -> Result<(), NotifyError> {
        pipeline_debug!(
            "notification skipped: {} archived files at {:?}",
            summary.archived,
            archive_path
        );
        Ok(())
    }
}
