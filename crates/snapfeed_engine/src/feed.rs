use feed_rs::parser;
use thiserror::Error;

/// One syndication feed entry, reduced to what the extractor needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub id: String,
    pub title: Option<String>,
    /// The entry's single HTML content payload, when present.
    pub content_html: Option<String>,
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed document could not be parsed: {0}")]
    Parse(#[from] parser::ParseFeedError),
}

/// Parses a feed document into its entries, in document order.
///
/// Typical feeds list the most recent entry first; this function preserves
/// whatever order the document uses and guarantees nothing beyond that.
pub fn parse_feed(bytes: &[u8]) -> Result<Vec<FeedEntry>, FeedError> {
    let feed = parser::parse(bytes)?;
    let entries = feed
        .entries
        .into_iter()
        .map(|entry| FeedEntry {
            id: entry.id,
            title: entry.title.map(|text| text.content),
            content_html: entry.content.and_then(|content| content.body),
        })
        .collect();
    Ok(entries)
}
