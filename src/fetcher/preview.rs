use chrono::{DateTime, Utc};
use html_escape::encode_text;

use crate::domain::{FeedItem, FeedSettings, GeneratedResult, Language};
use crate::fetcher::Fetcher;

const UNTITLED_FEED: &str = "Google News RSS Feed";

/// Inputs for the fallback document, captured when a generation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackContext {
    pub title: String,
    pub language: Language,
}

impl FallbackContext {
    /// Title comes from the first item in collection order.
    pub fn from_items(items: &[FeedItem], settings: &FeedSettings) -> Self {
        let title = items
            .first()
            .map(FeedItem::display_title)
            .unwrap_or_else(|| UNTITLED_FEED.to_string());

        Self {
            title,
            language: settings.language,
        }
    }
}

fn cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}

/// Placeholder RSS document shown when the real feed could not be fetched.
///
/// Generated fresh from the inputs every time; it never contains real articles.
pub fn fallback_document(context: &FallbackContext, url: &str, now: DateTime<Utc>) -> String {
    let title = encode_text(&context.title);
    let link = cdata(url);
    let language = context.language.code();
    let date = now.to_rfc2822();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>{title}</title>
    <description>Google News RSS feed for {title}</description>
    <link>{link}</link>
    <language>{language}</language>
    <lastBuildDate>{date}</lastBuildDate>
    <item>
      <title>Preview unavailable</title>
      <description>The feed could not be fetched for preview. The feed URL is still usable in a feed reader.</description>
      <link>{link}</link>
      <guid isPermaLink="false">headwater-preview-unavailable</guid>
      <pubDate>{date}</pubDate>
    </item>
  </channel>
</rss>
"#
    )
}

/// Fetch the feed at `url`, substituting the fallback document on failure.
///
/// An empty `url` returns an empty result without touching the network.
pub async fn fetch_preview(
    fetcher: &(dyn Fetcher + Send + Sync),
    url: &str,
    context: &FallbackContext,
) -> GeneratedResult {
    if url.is_empty() {
        return GeneratedResult::default();
    }

    match fetcher.fetch(url).await {
        Ok(xml) => {
            tracing::info!("Fetched {} bytes of preview for {}", xml.len(), url);
            GeneratedResult {
                url: url.to_string(),
                xml,
                error: None,
            }
        }
        Err(e) => {
            tracing::warn!("Preview fetch failed for {}: {}", url, e);
            GeneratedResult {
                url: url.to_string(),
                xml: fallback_document(context, url, Utc::now()),
                error: Some(format!("Failed to fetch feed: {}", e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemKind, ItemOptions};
    use crate::fetcher::FetchError;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const FEED_URL: &str =
        "https://news.google.com/rss/search?q=rust%20lang&hl=en&gl=US&ceid=US:en";

    struct StaticFetcher {
        result: Result<String, FetchError>,
        calls: AtomicUsize,
    }

    impl StaticFetcher {
        fn new(result: Result<String, FetchError>) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn context() -> FallbackContext {
        FallbackContext {
            title: "Keyword: rust lang".into(),
            language: Language::English,
        }
    }

    #[test]
    fn test_empty_url_skips_network() {
        let fetcher = StaticFetcher::new(Ok("<rss/>".into()));
        let result = tokio_test::block_on(fetch_preview(&fetcher, "", &context()));
        assert_eq!(result, GeneratedResult::default());
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_success_returns_raw_body() {
        let body = "<rss version=\"2.0\"><channel><title>x</title></channel></rss>";
        let fetcher = StaticFetcher::new(Ok(body.into()));
        let result = tokio_test::block_on(fetch_preview(&fetcher, FEED_URL, &context()));

        assert_eq!(result.url, FEED_URL);
        assert_eq!(result.xml, body);
        assert!(result.error.is_none());
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_uses_fallback() {
        let fetcher = StaticFetcher::new(Err(FetchError::Status {
            status: 503,
            reason: "Service Unavailable".into(),
        }));
        let result = tokio_test::block_on(fetch_preview(&fetcher, FEED_URL, &context()));

        let error = result.error.unwrap();
        assert!(error.contains("503"));
        assert!(error.contains("Service Unavailable"));
        assert!(result.xml.contains(FEED_URL));
        assert!(result.xml.contains("<item>"));
        assert!(result.xml.contains("</item>"));
        assert!(result.xml.contains("<title>Preview unavailable</title>"));
    }

    #[test]
    fn test_timeout_uses_fallback() {
        let fetcher = StaticFetcher::new(Err(FetchError::Timeout(15)));
        let result = tokio_test::block_on(fetch_preview(&fetcher, FEED_URL, &context()));
        assert!(result.error.unwrap().contains("timed out"));
        assert!(result.xml.starts_with("<?xml"));
    }

    #[test]
    fn test_fallback_document_contents() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let ctx = FallbackContext {
            title: "Tom & Jerry <news>".into(),
            language: Language::French,
        };
        let xml = fallback_document(&ctx, FEED_URL, now);

        assert!(xml.contains("<title>Tom &amp; Jerry &lt;news&gt;</title>"));
        assert!(xml.contains(&format!("<link><![CDATA[{}]]></link>", FEED_URL)));
        assert!(xml.contains("<language>fr</language>"));
        assert!(xml.contains(&format!("<lastBuildDate>{}</lastBuildDate>", now.to_rfc2822())));
        assert!(xml.contains("Mar 2024 12:00:00 +0000"));
        assert_eq!(xml.matches("<item>").count(), 1);
    }

    #[test]
    fn test_fallback_is_deterministic_for_fixed_time() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(
            fallback_document(&context(), FEED_URL, now),
            fallback_document(&context(), FEED_URL, now)
        );
    }

    #[test]
    fn test_cdata_splits_terminator() {
        assert_eq!(cdata("a]]>b"), "<![CDATA[a]]]]><![CDATA[>b]]>");
    }

    #[test]
    fn test_context_from_items() {
        let settings = FeedSettings::default();
        assert_eq!(
            FallbackContext::from_items(&[], &settings).title,
            "Google News RSS Feed"
        );

        let items = vec![
            FeedItem::create(ItemKind::Site, "reuters.com", ItemOptions::default()).unwrap(),
            FeedItem::create(ItemKind::MainTopic, "world", ItemOptions::default()).unwrap(),
        ];
        assert_eq!(
            FallbackContext::from_items(&items, &settings).title,
            "Site: reuters.com"
        );
    }
}
