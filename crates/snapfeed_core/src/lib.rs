//! Snapfeed core: pure domain types for the image harvesting pipeline.
mod filter;
mod image_ref;
mod outcome;
mod source;
mod summary;

pub use filter::ExtensionFilter;
pub use image_ref::{ImageRef, ImageRefError};
pub use outcome::{Classification, EntryOutcome};
pub use source::source_to_feed_url;
pub use summary::RunSummary;
