use scraper::{Html, Selector};

use snapfeed_core::{EntryOutcome, ExtensionFilter, ImageRef, ImageRefError};

use crate::feed::FeedEntry;

/// Inspects one feed entry for an image reference.
///
/// The entry's HTML content is expected to follow the one structural shape
/// the feed provider renders: if an `<img>` marker is present, a `<span>`
/// wrapping an `<a href>` carries the full-size image locator. Entries
/// without an `<img>` are the normal no-picture case. Anything that breaks
/// the shape comes back as `Malformed` so the caller can pick a policy.
pub fn entry_outcome(entry: &FeedEntry, filter: &ExtensionFilter) -> EntryOutcome {
    let content = match entry.content_html.as_deref() {
        Some(html) if !html.trim().is_empty() => html,
        _ => {
            return EntryOutcome::Malformed {
                reason: "entry has no content payload".to_string(),
            }
        }
    };

    let doc = Html::parse_fragment(content);
    // Static selectors; parse failures here would be programmer error.
    let img_sel = Selector::parse("img").ok();
    let span_sel = Selector::parse("span").ok();
    let a_sel = Selector::parse("a").ok();
    let (Some(img_sel), Some(span_sel), Some(a_sel)) = (img_sel, span_sel, a_sel) else {
        return EntryOutcome::Malformed {
            reason: "internal selector failure".to_string(),
        };
    };

    if doc.select(&img_sel).next().is_none() {
        return EntryOutcome::NoImage;
    }

    let Some(span) = doc.select(&span_sel).next() else {
        return EntryOutcome::Malformed {
            reason: "image without the expected enclosing span".to_string(),
        };
    };
    let Some(link) = span.select(&a_sel).next() else {
        return EntryOutcome::Malformed {
            reason: "image span without a link".to_string(),
        };
    };
    let Some(href) = link.value().attr("href") else {
        return EntryOutcome::Malformed {
            reason: "image link without an href".to_string(),
        };
    };

    match ImageRef::parse(href, filter) {
        Ok(image) => EntryOutcome::Image(image),
        Err(ImageRefError::DisallowedExtension { locator, .. }) => {
            EntryOutcome::NotAnImage { url: locator }
        }
        Err(err @ ImageRefError::InvalidUrl { .. }) => EntryOutcome::Malformed {
            reason: err.to_string(),
        },
    }
}
