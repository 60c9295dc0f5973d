use crate::image_ref::ImageRef;

/// Result of inspecting one feed entry for an image reference.
///
/// An explicit result type instead of cascading assertions: the caller
/// decides per-case policy (skip, warn, abort) rather than the extractor
/// crashing the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The entry carries exactly one allow-listed image reference.
    Image(ImageRef),
    /// The entry content has no image marker. Normal "no picture in this
    /// post" case, not an error.
    NoImage,
    /// An image marker and link were found, but the target is not an
    /// allow-listed image file.
    NotAnImage { url: String },
    /// The entry violates a structural assumption (missing content payload,
    /// image without the expected enclosing span/link shape).
    Malformed { reason: String },
}

/// Verdict of the text-detection pass over a downloaded artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// OCR recognized text; assume this is a flyer or graphic, not a photo.
    HasText,
    /// OCR returned its empty-text sentinel.
    NoText,
}
