//! Google News RSS URL construction.
//!
//! A feed encodes exactly one of three shapes, chosen by strict precedence:
//!
//! 1. the first main topic → `/rss/topics/{id}`
//! 2. otherwise the first location → `/rss/headlines/section/geo/{place}`
//! 3. otherwise a search over keywords, sites and secret topics joined with ` OR `
//!
//! These rules follow the URL conventions Google News currently accepts. They
//! are not documented by Google, so changes here are compatibility risks.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::domain::{FeedItem, FeedSettings, ItemData, ItemKind};

pub const GOOGLE_NEWS_RSS: &str = "https://news.google.com/rss";

/// Characters left unescaped by a URI component encoder.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const OR: &str = " OR ";

/// Percent-encode a value for use as a URL path segment or query component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Which URL shape a collection of items resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedShape<'a> {
    Topic(&'a FeedItem),
    Geo(&'a FeedItem),
    /// Unencoded search query.
    Search(String),
    Empty,
}

/// Apply the precedence rules without rendering a URL.
pub fn select(items: &[FeedItem]) -> FeedShape<'_> {
    if let Some(topic) = items.iter().find(|i| i.kind() == ItemKind::MainTopic) {
        return FeedShape::Topic(topic);
    }
    if let Some(location) = items.iter().find(|i| i.kind() == ItemKind::Location) {
        return FeedShape::Geo(location);
    }

    let query = search_query(items);
    if query.is_empty() {
        FeedShape::Empty
    } else {
        FeedShape::Search(query)
    }
}

/// Join keyword, site and secret topic fragments, in that group order.
///
/// Within a group fragments keep collection order. Other kinds are skipped.
pub fn search_query(items: &[FeedItem]) -> String {
    let keywords = items.iter().filter_map(keyword_fragment);
    let sites = items.iter().filter_map(site_fragment);
    let topics = items.iter().filter_map(secret_topic_fragment);

    keywords
        .chain(sites)
        .chain(topics)
        .collect::<Vec<_>>()
        .join(OR)
}

fn keyword_fragment(item: &FeedItem) -> Option<String> {
    let ItemData::Keyword {
        value,
        time_filter,
        search_operator,
        exact_match,
    } = &item.data
    else {
        return None;
    };

    let mut fragment = String::new();
    if !search_operator.is_none() {
        fragment.push_str(search_operator.code());
    }
    if *exact_match {
        fragment.push('"');
        fragment.push_str(value);
        fragment.push('"');
    } else {
        fragment.push_str(value);
    }
    if !time_filter.is_none() {
        fragment.push_str(" when:");
        fragment.push_str(time_filter.code());
    }
    Some(fragment)
}

fn site_fragment(item: &FeedItem) -> Option<String> {
    let ItemData::Site {
        domain,
        time_filter,
    } = &item.data
    else {
        return None;
    };

    let mut fragment = format!("site:{}", domain);
    if !time_filter.is_none() {
        fragment.push_str(" when:");
        fragment.push_str(time_filter.code());
    }
    Some(fragment)
}

fn secret_topic_fragment(item: &FeedItem) -> Option<String> {
    match &item.data {
        ItemData::SecretTopic { value } => Some(format!("topic:{}", value)),
        _ => None,
    }
}

fn locale_params(settings: &FeedSettings) -> String {
    let lang = settings.language.code();
    let region = settings.region.code();
    format!("hl={lang}&gl={region}&ceid={region}:{lang}")
}

/// Build the feed URL for `items`. Empty when nothing applicable was added.
pub fn build(items: &[FeedItem], settings: &FeedSettings) -> String {
    let shape = select(items);
    tracing::debug!(?shape, "Selected feed shape");

    match shape {
        FeedShape::Topic(item) => format!(
            "{}/topics/{}?{}",
            GOOGLE_NEWS_RSS,
            item.value(),
            locale_params(settings)
        ),
        FeedShape::Geo(item) => format!(
            "{}/headlines/section/geo/{}?{}",
            GOOGLE_NEWS_RSS,
            encode_component(item.value()),
            locale_params(settings)
        ),
        FeedShape::Search(query) => format!(
            "{}/search?q={}&{}",
            GOOGLE_NEWS_RSS,
            encode_component(&query),
            locale_params(settings)
        ),
        FeedShape::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemOptions, Language, Region, SearchOperator, TimeFilter};

    fn item(kind: ItemKind, value: &str) -> FeedItem {
        FeedItem::create(kind, value, ItemOptions::default()).unwrap()
    }

    fn keyword(value: &str, options: ItemOptions) -> FeedItem {
        FeedItem::create(ItemKind::Keyword, value, options).unwrap()
    }

    fn site(value: &str, time_filter: TimeFilter) -> FeedItem {
        FeedItem::create(
            ItemKind::Site,
            value,
            ItemOptions {
                time_filter,
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_empty_items_give_empty_url() {
        assert_eq!(build(&[], &FeedSettings::default()), "");
    }

    #[test]
    fn test_encode_component_matches_uri_rules() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("\"x\":y"), "%22x%22%3Ay");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("São Paulo"), "S%C3%A3o%20Paulo");
        assert_eq!(encode_component("a/b?c&d=e"), "a%2Fb%3Fc%26d%3De");
    }

    #[test]
    fn test_main_topic_wins_over_everything() {
        let items = vec![
            item(ItemKind::Keyword, "rust"),
            item(ItemKind::Location, "Paris"),
            item(ItemKind::SecretTopic, "CAAqSECRET"),
            item(ItemKind::MainTopic, "science"),
            item(ItemKind::MainTopic, "sports"),
            item(ItemKind::Site, "reuters.com"),
        ];
        let science = crate::domain::find_main_topic("science").unwrap();

        assert_eq!(
            build(&items, &FeedSettings::default()),
            format!(
                "https://news.google.com/rss/topics/{}?hl=en&gl=US&ceid=US:en",
                science.id
            )
        );
    }

    #[test]
    fn test_location_wins_over_keywords() {
        let items = vec![
            item(ItemKind::Keyword, "weather"),
            item(ItemKind::Location, "New York"),
            item(ItemKind::Location, "Boston"),
        ];
        assert_eq!(
            build(&items, &FeedSettings::default()),
            "https://news.google.com/rss/headlines/section/geo/New%20York?hl=en&gl=US&ceid=US:en"
        );
    }

    #[test]
    fn test_keyword_and_site_query() {
        let items = vec![
            keyword(
                "climate change",
                ItemOptions {
                    exact_match: true,
                    ..Default::default()
                },
            ),
            site("reuters.com", TimeFilter::PastDay),
        ];

        assert_eq!(
            search_query(&items),
            "\"climate change\" OR site:reuters.com when:1d"
        );
        assert_eq!(
            build(&items, &FeedSettings::default()),
            "https://news.google.com/rss/search?q=%22climate%20change%22%20OR%20site%3Areuters.com%20when%3A1d&hl=en&gl=US&ceid=US:en"
        );
    }

    #[test]
    fn test_group_order_ignores_insertion_order() {
        let items = vec![
            item(ItemKind::SecretTopic, "CAAqT"),
            site("bbc.com", TimeFilter::None),
            keyword("b", ItemOptions::default()),
            site("ft.com", TimeFilter::None),
            keyword("a", ItemOptions::default()),
        ];
        assert_eq!(
            search_query(&items),
            "b OR a OR site:bbc.com OR site:ft.com OR topic:CAAqT"
        );
    }

    #[test]
    fn test_keyword_operator_and_time_filter() {
        let items = vec![keyword(
            "election",
            ItemOptions {
                search_operator: SearchOperator::AllInTitle,
                time_filter: TimeFilter::PastHour,
                ..Default::default()
            },
        )];
        assert_eq!(search_query(&items), "allintitle:election when:1h");
    }

    #[test]
    fn test_operator_with_exact_match() {
        let items = vec![keyword(
            "open source",
            ItemOptions {
                search_operator: SearchOperator::InTitle,
                exact_match: true,
                ..Default::default()
            },
        )];
        assert_eq!(search_query(&items), "intitle:\"open source\"");
    }

    #[test]
    fn test_secret_topic_only() {
        let items = vec![item(ItemKind::SecretTopic, "CAAqSECRET")];
        assert_eq!(
            build(&items, &FeedSettings::default()),
            "https://news.google.com/rss/search?q=topic%3ACAAqSECRET&hl=en&gl=US&ceid=US:en"
        );
    }

    #[test]
    fn test_settings_applied() {
        let items = vec![item(ItemKind::Keyword, "fußball")];
        let settings = FeedSettings::new(Language::German, Region::Germany);
        assert_eq!(
            build(&items, &settings),
            "https://news.google.com/rss/search?q=fu%C3%9Fball&hl=de&gl=DE&ceid=DE:de"
        );
    }

    #[test]
    fn test_select_shapes() {
        assert_eq!(select(&[]), FeedShape::Empty);

        let geo = vec![item(ItemKind::Location, "Lagos")];
        assert!(matches!(select(&geo), FeedShape::Geo(i) if i.value() == "Lagos"));

        let search = vec![item(ItemKind::Keyword, "rust")];
        assert_eq!(select(&search), FeedShape::Search("rust".into()));
    }

    #[test]
    fn test_build_is_deterministic() {
        let items = vec![
            keyword("rust", ItemOptions::default()),
            site("lwn.net", TimeFilter::PastWeek),
        ];
        let settings = FeedSettings::new(Language::French, Region::Canada);
        assert_eq!(build(&items, &settings), build(&items, &settings));
    }
}
