use std::fmt;

use url::Url;

use crate::filter::ExtensionFilter;

/// A resolved, absolute locator for a remote image plus its derived local
/// filename and extension. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    url: Url,
    filename: String,
    extension: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRefError {
    /// The locator is not an absolute URL.
    InvalidUrl { locator: String, message: String },
    /// The locator parses but its extension is not in the allow-list.
    /// Covers outbound non-image links (e.g. a share link to facebook).
    DisallowedExtension { locator: String, extension: String },
}

impl fmt::Display for ImageRefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRefError::InvalidUrl { locator, message } => {
                write!(f, "invalid image locator {locator}: {message}")
            }
            ImageRefError::DisallowedExtension { locator, extension } => {
                write!(f, "extension {extension:?} of {locator} is not allow-listed")
            }
        }
    }
}

impl std::error::Error for ImageRefError {}

impl ImageRef {
    /// Parses a locator into an `ImageRef`, deriving the local filename from
    /// the last path segment and checking its extension against `filter`.
    pub fn parse(locator: &str, filter: &ExtensionFilter) -> Result<Self, ImageRefError> {
        let url = Url::parse(locator).map_err(|err| ImageRefError::InvalidUrl {
            locator: locator.to_string(),
            message: err.to_string(),
        })?;

        let filename = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or("")
            .to_string();
        let extension = extension_of(&filename);

        if !filter.allows(&extension) {
            return Err(ImageRefError::DisallowedExtension {
                locator: locator.to_string(),
                extension,
            });
        }

        Ok(Self {
            url,
            filename,
            extension,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn locator(&self) -> &str {
        self.url.as_str()
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

/// Extension including the leading dot, or empty when there is none.
fn extension_of(filename: &str) -> String {
    match filename.rfind('.') {
        Some(idx) if idx > 0 => filename[idx..].to_string(),
        _ => String::new(),
    }
}
