use crate::app::{Coordinator, HeadwaterError, Result, Screen};
use crate::cli::{pages, BuildArgs};
use crate::domain::{ItemKind, ItemOptions, MAIN_TOPICS};

/// Add every item named on the command line. Returns a message per rejected item.
pub fn add_build_items(coordinator: &mut Coordinator, args: &BuildArgs) -> Vec<String> {
    let mut skipped = Vec::new();

    let keyword_options = ItemOptions {
        time_filter: args.when,
        search_operator: args.operator,
        exact_match: args.exact,
        label: None,
    };
    let site_options = ItemOptions {
        time_filter: args.when,
        ..Default::default()
    };

    let mut requests: Vec<(ItemKind, &str, ItemOptions)> = Vec::new();
    requests.extend(
        args.topics
            .iter()
            .map(|v| (ItemKind::MainTopic, v.as_str(), ItemOptions::default())),
    );
    requests.extend(
        args.locations
            .iter()
            .map(|v| (ItemKind::Location, v.as_str(), ItemOptions::default())),
    );
    requests.extend(
        args.keywords
            .iter()
            .map(|v| (ItemKind::Keyword, v.as_str(), keyword_options.clone())),
    );
    requests.extend(
        args.sites
            .iter()
            .map(|v| (ItemKind::Site, v.as_str(), site_options.clone())),
    );
    requests.extend(args.secrets.iter().enumerate().map(|(i, v)| {
        let options = ItemOptions {
            label: args.names.get(i).cloned(),
            ..Default::default()
        };
        (ItemKind::SecretTopic, v.as_str(), options)
    }));

    for (kind, value, options) in requests {
        if let Err(e) = coordinator.add_item(kind, value, options) {
            skipped.push(format!("Skipped {} {:?}: {}", kind, value, e));
        }
    }

    for id in &args.saved {
        if let Err(e) = coordinator.add_saved_topic_item(id) {
            skipped.push(format!("Skipped saved topic: {}", e));
        }
    }

    skipped
}

pub async fn build_feed(coordinator: &mut Coordinator, args: &BuildArgs) -> Result<()> {
    for message in add_build_items(coordinator, args) {
        eprintln!("{}", message);
    }

    let url = coordinator.build_url();
    if url.is_empty() {
        println!("Nothing to build: add a topic, keyword, site or location");
        return Ok(());
    }

    if args.preview {
        let result = coordinator.generate().await?;
        println!("{}", result.url);
        if let Some(error) = &result.error {
            eprintln!("{}", error);
        }
        println!();
        println!("{}", result.xml);
    } else {
        println!("{}", url);
    }

    if args.open {
        open::that(&url)?;
    }

    Ok(())
}

pub fn list_topics(coordinator: &Coordinator) -> Result<()> {
    let topics = coordinator.saved_topics();

    if topics.is_empty() {
        println!("No saved topics");
        return Ok(());
    }

    for topic in topics {
        println!("{}  {}\n  {}", topic.id, topic.name, topic.value);
    }

    Ok(())
}

pub fn remove_topic(coordinator: &mut Coordinator, id: &str) -> Result<()> {
    if !coordinator.remove_saved_topic(id) {
        return Err(HeadwaterError::TopicNotFound(id.to_string()));
    }
    println!("Removed saved topic: {}", id);
    Ok(())
}

pub fn list_main_topics() -> Result<()> {
    for topic in MAIN_TOPICS {
        println!("{:<14} {:<14} {}", topic.key, topic.label, topic.id);
    }
    Ok(())
}

pub fn show_page(coordinator: &mut Coordinator, screen: Screen) -> Result<()> {
    coordinator.show(screen);
    println!("{}", pages::render(coordinator.screen()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppContext;
    use crate::config::Config;
    use crate::domain::TimeFilter;

    fn coordinator() -> Coordinator {
        AppContext::in_memory(Config::default())
            .unwrap()
            .coordinator()
    }

    #[test]
    fn test_build_args_to_url() {
        let mut c = coordinator();
        let args = BuildArgs {
            keywords: vec!["climate change".into()],
            sites: vec!["https://www.reuters.com/world/".into()],
            when: TimeFilter::PastDay,
            exact: true,
            ..Default::default()
        };

        assert!(add_build_items(&mut c, &args).is_empty());
        assert_eq!(
            c.build_url(),
            "https://news.google.com/rss/search?q=%22climate%20change%22%20when%3A1d%20OR%20site%3Areuters.com%20when%3A1d&hl=en&gl=US&ceid=US:en"
        );
    }

    #[test]
    fn test_names_pair_with_secrets() {
        let mut c = coordinator();
        let args = BuildArgs {
            secrets: vec!["CAAqONE".into(), "CAAqTWO".into()],
            names: vec!["One".into()],
            ..Default::default()
        };

        add_build_items(&mut c, &args);
        assert_eq!(c.items().len(), 2);
        assert_eq!(c.saved_topics().len(), 1);
        assert_eq!(c.saved_topics()[0].value, "CAAqONE");
    }

    #[test]
    fn test_rejections_reported() {
        let mut c = coordinator();
        let args = BuildArgs {
            topics: vec!["gardening".into()],
            keywords: vec!["  ".into(), "rust".into()],
            saved: vec!["missing".into()],
            ..Default::default()
        };

        let skipped = add_build_items(&mut c, &args);
        assert_eq!(skipped.len(), 3);
        assert_eq!(c.items().len(), 1);
    }

    #[test]
    fn test_saved_topic_reuse() {
        let mut c = coordinator();
        add_build_items(
            &mut c,
            &BuildArgs {
                secrets: vec!["CAAqREUSE".into()],
                names: vec!["Reuse".into()],
                ..Default::default()
            },
        );
        let saved_id = c.saved_topics()[0].id.clone();
        c.reset();

        let skipped = add_build_items(
            &mut c,
            &BuildArgs {
                saved: vec![saved_id],
                ..Default::default()
            },
        );
        assert!(skipped.is_empty());
        assert_eq!(c.saved_topics().len(), 1);
        assert_eq!(c.items()[0].label.as_deref(), Some("Reuse"));
    }

    #[test]
    fn test_remove_unknown_topic() {
        let mut c = coordinator();
        assert!(matches!(
            remove_topic(&mut c, "nope"),
            Err(HeadwaterError::TopicNotFound(_))
        ));
    }
}
