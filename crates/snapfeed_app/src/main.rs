mod config;
mod logging;

use std::path::PathBuf;

use pipeline_logging::{pipeline_info, pipeline_warn};

use snapfeed_engine::{
    run_blocking, FetchSettings, NoopNotifier, PipelineRun, ReqwestFetcher, SeenSet,
    TesseractClassifier,
};

use crate::config::AppConfig;
use crate::logging::LogDestination;

const DEFAULT_CONFIG_PATH: &str = "snapfeed.ron";

fn main() -> anyhow::Result<()> {
    logging::initialize(LogDestination::Both);

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = AppConfig::load(&config_path)?;

    pipeline_info!(
        "run started at {} over {} source(s)",
        chrono::Local::now().to_rfc3339(),
        config.sources.len()
    );
    if let Some(notify) = &config.notify {
        pipeline_info!(
            "notification configured for {} ({}); delivery is not enabled",
            notify.recipient,
            notify.subject
        );
    }

    // The dedup store handle lives for exactly one run.
    let mut seen = SeenSet::open(&config.seen_db_path)?;
    pipeline_info!("dedup store holds {} known locators", seen.len());

    let feed_fetcher = ReqwestFetcher::new(FetchSettings::feed_documents());
    let image_fetcher = ReqwestFetcher::new(FetchSettings::default());
    let classifier = TesseractClassifier::default();
    let notifier = NoopNotifier;

    let pipeline_config = config.pipeline_config();
    let summary = run_blocking(PipelineRun {
        config: &pipeline_config,
        seen: &mut seen,
        feed_fetcher: &feed_fetcher,
        image_fetcher: &image_fetcher,
        classifier: &classifier,
        notifier: &notifier,
    })?;

    if summary.malformed > 0 || summary.fetch_failures > 0 {
        pipeline_warn!(
            "run finished with {} malformed entries and {} fetch failures",
            summary.malformed,
            summary.fetch_failures
        );
    }
    pipeline_info!(
        "done: {} entries, {} fetched, {} duplicates, {} non-images, {} text-excluded, {} archived",
        summary.entries,
        summary.fetched,
        summary.duplicates,
        summary.non_images,
        summary.text_excluded,
        summary.archived
    );

    Ok(())
}
