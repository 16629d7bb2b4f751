//! Text for the documentation and legal screens.

use std::fmt::Write;

use crate::app::Screen;
use crate::domain::{Language, Region, SearchOperator, TimeFilter, MAIN_TOPICS};

pub fn render(screen: Screen) -> String {
    match screen {
        Screen::Builder => builder_help(),
        Screen::Docs => documentation(),
        Screen::Legal => legal(),
    }
}

fn builder_help() -> String {
    "Use `headwater build --help` to compose a feed.".to_string()
}

fn documentation() -> String {
    let mut out = String::new();

    out.push_str("Documentation\n\n");
    out.push_str(
        "headwater builds Google News RSS feed URLs from topics, keywords, sites and\n\
         locations. The URLs work in any feed reader.\n\n",
    );

    out.push_str("Feed types\n");
    out.push_str("  Main topic    one of Google's top-level topics (see below)\n");
    out.push_str("  Secret topic  a topic id copied from a Google News topic URL\n");
    out.push_str("  Keyword       free text, optionally with an operator and exact match\n");
    out.push_str("  Site          a domain such as reuters.com\n");
    out.push_str("  Location      a city, state, country or region\n\n");

    out.push_str("Main topics\n");
    for topic in MAIN_TOPICS {
        let _ = writeln!(out, "  {:<14} {}", topic.key, topic.label);
    }
    out.push('\n');

    out.push_str("Search operators (keywords)\n");
    for op in SearchOperator::ALL.iter().filter(|op| !op.is_none()) {
        let _ = writeln!(out, "  {}", op.label());
    }
    out.push_str("  Exact match wraps the keyword in quotes, e.g. \"climate change\".\n\n");

    out.push_str("Time filters (keywords and sites)\n");
    for filter in TimeFilter::ALL.iter().filter(|f| !f.is_none()) {
        let _ = writeln!(out, "  {:<4} {}", filter.code(), filter.label());
    }
    out.push('\n');

    out.push_str("Languages\n");
    for language in Language::ALL {
        let _ = writeln!(out, "  {}  {}", language.code(), language.label());
    }
    out.push('\n');

    out.push_str("Regions\n");
    for region in Region::ALL {
        let _ = writeln!(out, "  {}  {}", region.code(), region.label());
    }
    out.push('\n');

    out.push_str("Limitations\n");
    out.push_str("  A main topic takes precedence over everything else, then a location.\n");
    out.push_str("  Only one topic or location is used per feed.\n");
    out.push_str("  Keywords, sites and secret topics are combined with OR.\n");
    out.push_str("  Google News returns at most 100 articles per feed.\n");
    out.push_str("  Google does not document these feeds; the URL format may change.\n");

    out
}

fn legal() -> String {
    "Legal\n\n\
     headwater is not affiliated with or endorsed by Google. Google News is a\n\
     trademark of Google LLC.\n\n\
     Feed content belongs to its publishers. Generated URLs point to Google's\n\
     servers and their use is subject to Google's terms of service.\n\n\
     Previews are fetched through a third-party relay. The feed URL is sent to\n\
     that relay; nothing else leaves your machine. Saved topics are stored\n\
     locally.\n\n\
     This software is provided \"as is\", without warranty of any kind.\n"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_list_options() {
        let docs = render(Screen::Docs);
        assert!(docs.contains("intitle: (Word in title)"));
        assert!(docs.contains("Past 3 hours"));
        assert!(docs.contains("ZA  South Africa"));
        assert!(docs.contains("technology"));
        assert!(!docs.contains("Normal search"));
    }

    #[test]
    fn test_legal_page() {
        assert!(render(Screen::Legal).contains("not affiliated"));
    }
}
