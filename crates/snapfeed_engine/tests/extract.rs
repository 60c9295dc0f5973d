use pretty_assertions::assert_eq;
use snapfeed_core::{EntryOutcome, ExtensionFilter};
use snapfeed_engine::{entry_outcome, parse_feed, FeedEntry};

fn entry_with_content(content: Option<&str>) -> FeedEntry {
    FeedEntry {
        id: "tag:test,entry-1".to_string(),
        title: Some("a post".to_string()),
        content_html: content.map(|c| c.to_string()),
    }
}

#[test]
fn entry_without_image_marker_yields_nothing() {
    let entry = entry_with_content(Some("<p>just text, no picture in this post</p>"));
    let outcome = entry_outcome(&entry, &ExtensionFilter::default());
    assert_eq!(outcome, EntryOutcome::NoImage);
}

#[test]
fn entry_with_image_link_yields_a_reference() {
    let html = r#"
        <table><tr><td>
        <span><a href="https://i.redd.it/xyz/photo.jpg">[link]</a></span>
        <a href="https://www.reddit.com/r/pics/comments/1"><img src="https://preview.redd.it/thumb.jpg"/></a>
        </td></tr></table>
    "#;
    let entry = entry_with_content(Some(html));
    let outcome = entry_outcome(&entry, &ExtensionFilter::default());
    match outcome {
        EntryOutcome::Image(image) => {
            assert_eq!(image.locator(), "https://i.redd.it/xyz/photo.jpg");
            assert_eq!(image.filename(), "photo.jpg");
            assert_eq!(image.extension(), ".jpg");
        }
        other => panic!("expected an image reference, got {other:?}"),
    }
}

#[test]
fn gif_link_is_not_an_image() {
    let html = r#"<span><a href="https://example.com/ads/ad.gif">[link]</a></span><img src="x"/>"#;
    let entry = entry_with_content(Some(html));
    let outcome = entry_outcome(&entry, &ExtensionFilter::default());
    assert_eq!(
        outcome,
        EntryOutcome::NotAnImage {
            url: "https://example.com/ads/ad.gif".to_string()
        }
    );
}

#[test]
fn missing_content_payload_is_malformed() {
    let entry = entry_with_content(None);
    let outcome = entry_outcome(&entry, &ExtensionFilter::default());
    assert!(matches!(outcome, EntryOutcome::Malformed { .. }));

    let entry = entry_with_content(Some("   "));
    let outcome = entry_outcome(&entry, &ExtensionFilter::default());
    assert!(matches!(outcome, EntryOutcome::Malformed { .. }));
}

#[test]
fn image_without_enclosing_span_is_malformed() {
    let entry = entry_with_content(Some(r#"<img src="https://i.redd.it/lonely.jpg"/>"#));
    let outcome = entry_outcome(&entry, &ExtensionFilter::default());
    match outcome {
        EntryOutcome::Malformed { reason } => assert!(reason.contains("span"), "{reason}"),
        other => panic!("expected malformed, got {other:?}"),
    }
}

#[test]
fn span_without_link_is_malformed() {
    let entry = entry_with_content(Some(r#"<span>no link here</span><img src="x"/>"#));
    let outcome = entry_outcome(&entry, &ExtensionFilter::default());
    match outcome {
        EntryOutcome::Malformed { reason } => assert!(reason.contains("link"), "{reason}"),
        other => panic!("expected malformed, got {other:?}"),
    }
}

#[test]
fn relative_link_target_is_malformed() {
    let entry =
        entry_with_content(Some(r#"<span><a href="/local/photo.jpg">x</a></span><img src="y"/>"#));
    let outcome = entry_outcome(&entry, &ExtensionFilter::default());
    assert!(matches!(outcome, EntryOutcome::Malformed { .. }));
}

#[test]
fn atom_feed_parses_into_ordered_entries() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
        <feed xmlns="http://www.w3.org/2005/Atom">
          <id>tag:test,feed</id>
          <title>r/testfeed</title>
          <updated>2026-08-01T00:00:00Z</updated>
          <entry>
            <id>tag:test,first</id>
            <title>newest post</title>
            <updated>2026-08-01T00:00:00Z</updated>
            <content type="html">&lt;p&gt;hello&lt;/p&gt;</content>
          </entry>
          <entry>
            <id>tag:test,second</id>
            <title>older post</title>
            <updated>2026-07-31T00:00:00Z</updated>
          </entry>
        </feed>"#;

    let entries = parse_feed(xml.as_bytes()).expect("feed parses");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "tag:test,first");
    assert_eq!(entries[0].content_html.as_deref(), Some("<p>hello</p>"));
    assert_eq!(entries[1].id, "tag:test,second");
    assert_eq!(entries[1].content_html, None);
}

#[test]
fn junk_bytes_are_a_feed_error() {
    assert!(parse_feed(b"this is not xml at all").is_err());
}
