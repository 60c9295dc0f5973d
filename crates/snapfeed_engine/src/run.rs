use std::fs;
use std::io;
use std::path::PathBuf;

use pipeline_logging::{pipeline_debug, pipeline_info, pipeline_warn};
use thiserror::Error;

use snapfeed_core::{
    source_to_feed_url, Classification, EntryOutcome, ExtensionFilter, RunSummary,
};

use crate::archive::{package, PackageError};
use crate::classify::TextClassifier;
use crate::extract::entry_outcome;
use crate::feed::parse_feed;
use crate::fetch::Fetcher;
use crate::notify::Notifier;
use crate::seen::{SeenError, SeenSet};
use crate::stage::{clear_dir_files, ensure_dir, ArtifactWriter, StageError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("staging failure: {0}")]
    Stage(#[from] StageError),
    #[error("dedup store failure: {0}")]
    Seen(#[from] SeenError),
    #[error("packaging failure: {0}")]
    Package(#[from] PackageError),
    #[error("runtime failure: {0}")]
    Runtime(#[from] io::Error),
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Source identifiers; each is resolved to a feed URL with
    /// [`source_to_feed_url`].
    pub sources: Vec<String>,
    /// Staging area for downloaded artifacts awaiting classification.
    pub working_dir: PathBuf,
    /// Holding area for artifacts classified as text-free.
    pub clean_dir: PathBuf,
    /// Target path of the compressed archive, overwritten each run.
    pub archive_path: PathBuf,
    pub extension_filter: ExtensionFilter,
}

/// Everything one pipeline run needs, injected explicitly. The dedup store
/// handle is opened by the caller at run start and dropped at run end rather
/// than living as ambient global state.
pub struct PipelineRun<'a> {
    pub config: &'a PipelineConfig,
    pub seen: &'a mut SeenSet,
    pub feed_fetcher: &'a dyn Fetcher,
    pub image_fetcher: &'a dyn Fetcher,
    pub classifier: &'a dyn TextClassifier,
    pub notifier: &'a dyn Notifier,
}

/// Drives one complete sequential run: every feed source, then the
/// classification pass, then packaging, then notification.
///
/// Per-reference failures (fetch errors, classifier errors) are logged and
/// skipped so one dead link cannot discard a whole feed's harvest. Storage
/// and packaging failures end the run.
pub async fn run_pipeline(run: PipelineRun<'_>) -> Result<RunSummary, RunError> {
    let PipelineRun {
        config,
        seen,
        feed_fetcher,
        image_fetcher,
        classifier,
        notifier,
    } = run;

    let mut summary = RunSummary::default();

    ensure_dir(&config.working_dir)?;
    ensure_dir(&config.clean_dir)?;
    // Sweep stale artifacts so a crashed earlier run cannot leak
    // unclassified files into this run's archive.
    let stale = clear_dir_files(&config.working_dir)? + clear_dir_files(&config.clean_dir)?;
    if stale > 0 {
        pipeline_info!("removed {stale} stale staged files from earlier runs");
    }

    let writer = ArtifactWriter::new(config.working_dir.clone());

    for source in &config.sources {
        let feed_url = source_to_feed_url(source);
        harvest_feed(
            &feed_url,
            config,
            seen,
            feed_fetcher,
            image_fetcher,
            &writer,
            &mut summary,
        )
        .await?;
    }

    classify_staged(config, classifier, &writer, &mut summary)?;

    let archive = package(&config.clean_dir, &config.archive_path)?;
    summary.archived = archive.file_count;
    summary.archive_path = Some(archive.archive_path.clone());
    pipeline_info!(
        "archived {} images into {:?}",
        archive.file_count,
        archive.archive_path
    );

    if let Err(err) = notifier.send(&archive.archive_path, &summary) {
        pipeline_warn!("notification failed: {err}");
    }

    Ok(summary)
}

/// Convenience wrapper for synchronous callers: builds a runtime and blocks
/// on [`run_pipeline`]. The run itself stays sequential.
pub fn run_blocking(run: PipelineRun<'_>) -> Result<RunSummary, RunError> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_pipeline(run))
}

async fn harvest_feed(
    feed_url: &str,
    config: &PipelineConfig,
    seen: &mut SeenSet,
    feed_fetcher: &dyn Fetcher,
    image_fetcher: &dyn Fetcher,
    writer: &ArtifactWriter,
    summary: &mut RunSummary,
) -> Result<(), RunError> {
    let document = match feed_fetcher.fetch(feed_url).await {
        Ok(output) => output,
        Err(err) => {
            pipeline_warn!("could not retrieve feed {feed_url}: {err}");
            return Ok(());
        }
    };

    let entries = match parse_feed(&document.bytes) {
        Ok(entries) => entries,
        Err(err) => {
            pipeline_warn!("could not parse feed {feed_url}: {err}");
            return Ok(());
        }
    };
    pipeline_debug!("feed {feed_url} has {} entries", entries.len());

    for entry in &entries {
        summary.entries += 1;
        match entry_outcome(entry, &config.extension_filter) {
            EntryOutcome::NoImage => {
                pipeline_debug!("no image in entry {}", entry.id);
            }
            EntryOutcome::NotAnImage { url } => {
                pipeline_info!("didn't get image at {url}");
                summary.non_images += 1;
            }
            EntryOutcome::Malformed { reason } => {
                // Policy: skip-and-warn; the rest of the feed still gets
                // harvested.
                pipeline_warn!("malformed entry {} in {feed_url}: {reason}", entry.id);
                summary.malformed += 1;
            }
            EntryOutcome::Image(image) => {
                if seen.contains(image.locator()) {
                    pipeline_info!("{} is a duplicate, skipping", image.locator());
                    summary.duplicates += 1;
                    continue;
                }
                match image_fetcher.fetch(image.locator()).await {
                    Ok(output) => {
                        writer.write(image.filename(), &output.bytes)?;
                        // Recorded only after a successful fetch; a crash
                        // mid-fetch leaves the locator unrecorded and it is
                        // retried next run.
                        seen.record(image.locator())?;
                        summary.fetched += 1;
                        pipeline_info!(
                            "saved image to {:?}: {}",
                            config.working_dir,
                            image.filename()
                        );
                    }
                    Err(err) => {
                        // Best effort over many images: one dead link must
                        // not abort the run.
                        pipeline_warn!("fetch failed for {}: {err}", image.locator());
                        summary.fetch_failures += 1;
                    }
                }
            }
        }
    }

    Ok(())
}

fn classify_staged(
    config: &PipelineConfig,
    classifier: &dyn TextClassifier,
    writer: &ArtifactWriter,
    summary: &mut RunSummary,
) -> Result<(), RunError> {
    let mut staged: Vec<_> = fs::read_dir(&config.working_dir)
        .map_err(StageError::Io)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .collect();
    staged.sort_by_key(|entry| entry.file_name());

    for entry in staged {
        let filename = entry.file_name().to_string_lossy().into_owned();
        let verdict = match classifier.classify(&entry.path()) {
            Ok(verdict) => verdict,
            Err(err) => {
                // Conservative: an unclassifiable artifact is excluded as if
                // it had text.
                pipeline_warn!("classification failed for {filename}: {err}");
                Classification::HasText
            }
        };
        match verdict {
            Classification::HasText => {
                pipeline_info!("{filename} has words, assume this isn't a photo");
                summary.text_excluded += 1;
            }
            Classification::NoText => {
                writer.move_to(&filename, &config.clean_dir)?;
                pipeline_info!("{filename} is being saved to be archived");
            }
        }
    }

    Ok(())
}
