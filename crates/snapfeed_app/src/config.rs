//! Run configuration, loaded from a RON file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use pipeline_logging::pipeline_info;
use serde::{Deserialize, Serialize};

use snapfeed_core::ExtensionFilter;
use snapfeed_engine::PipelineConfig;

/// Outbound delivery details. Capability only: carrying these does not
/// enable delivery, the default notifier stays a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifySettings {
    pub recipient: String,
    pub subject: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Feed source identifiers; each gets `.rss` appended at run time.
    pub sources: Vec<String>,
    pub working_dir: PathBuf,
    pub clean_dir: PathBuf,
    pub archive_path: PathBuf,
    pub seen_db_path: PathBuf,
    /// Image extensions accepted for download, leading dot included.
    pub allowed_extensions: Vec<String>,
    pub notify: Option<NotifySettings>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sources: vec!["https://www.reddit.com/r/DallasProtests".to_string()],
            working_dir: PathBuf::from("workspace"),
            clean_dir: PathBuf::from("no_words"),
            archive_path: PathBuf::from("images.tar.gz"),
            seen_db_path: PathBuf::from("cache.db"),
            allowed_extensions: vec![".jpg".to_string(), ".png".to_string()],
            notify: None,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from `path`. A missing file falls back to the
    /// defaults; a file that exists but does not parse is an error.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                pipeline_info!("no config at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("could not read config at {path:?}"))
            }
        };
        ron::from_str(&content).with_context(|| format!("could not parse config at {path:?}"))
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            sources: self.sources.clone(),
            working_dir: self.working_dir.clone(),
            clean_dir: self.clean_dir.clone(),
            archive_path: self.archive_path.clone(),
            extension_filter: ExtensionFilter::new(&self.allowed_extensions),
        }
    }
}
