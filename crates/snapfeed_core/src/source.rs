/// Turns a configured source identifier (e.g. a subreddit URL without a
/// trailing slash) into the URL of its syndication feed.
pub fn source_to_feed_url(source: &str) -> String {
    let trimmed = source.trim_end_matches('/');
    format!("{trimmed}.rss")
}
