use std::io;
use std::path::Path;
use std::process::Command;

use thiserror::Error;

use snapfeed_core::Classification;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("failed to launch OCR engine: {0}")]
    Launch(#[from] io::Error),
    #[error("OCR engine failed: {0}")]
    Engine(String),
}

/// Heuristic text detector over a staged image file.
///
/// A heuristic, not a guarantee: protest signage with large block lettering
/// is the target the filter is tuned to exclude, while stylized text can
/// slip through undetected. Both are accepted properties.
pub trait TextClassifier: Send + Sync {
    fn classify(&self, artifact: &Path) -> Result<Classification, ClassifyError>;
}

/// Runs the Tesseract CLI (`tesseract <image> stdout`) and classifies by
/// comparing the recognized text with the empty-text sentinel.
#[derive(Debug, Clone)]
pub struct TesseractClassifier {
    command: String,
}

impl Default for TesseractClassifier {
    fn default() -> Self {
        Self {
            command: "tesseract".to_string(),
        }
    }
}

impl TesseractClassifier {
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl TextClassifier for TesseractClassifier {
    fn classify(&self, artifact: &Path) -> Result<Classification, ClassifyError> {
        let output = Command::new(&self.command)
            .arg(artifact)
            .arg("stdout")
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ClassifyError::Engine(format!(
                "exit {:?}: {}",
                output.status.code(),
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout);
        if is_empty_text_sentinel(&text) {
            Ok(Classification::NoText)
        } else {
            Ok(Classification::HasText)
        }
    }
}

/// True when OCR output is the engine's "no text recognized" sentinel.
/// Tesseract prints " \n\x0c" (whitespace plus a trailing form-feed) when
/// nothing is recognized.
pub fn is_empty_text_sentinel(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}
