use std::sync::Arc;

use crate::domain::{FeedItem, ItemKind, ItemOptions, Rejection, SavedTopic};
use crate::store::TopicRepository;

/// Ordered feed items for the current session, plus the persisted saved topics.
pub struct ItemStore {
    items: Vec<FeedItem>,
    saved_topics: Vec<SavedTopic>,
    repository: Arc<dyn TopicRepository + Send + Sync>,
}

impl ItemStore {
    /// Open the store, loading saved topics once from the repository.
    ///
    /// An unreadable record is treated as an empty collection.
    pub fn open(repository: Arc<dyn TopicRepository + Send + Sync>) -> Self {
        let saved_topics = match repository.load() {
            Ok(topics) => topics,
            Err(e) => {
                tracing::warn!("Ignoring unreadable saved topics: {}", e);
                Vec::new()
            }
        };

        Self {
            items: Vec::new(),
            saved_topics,
            repository,
        }
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn saved_topics(&self) -> &[SavedTopic] {
        &self.saved_topics
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new item built from raw input.
    ///
    /// A secret topic added with a non-empty label also appends a saved topic,
    /// even when one with the same value already exists.
    pub fn add_item(
        &mut self,
        kind: ItemKind,
        raw: &str,
        options: ItemOptions,
    ) -> Result<&FeedItem, Rejection> {
        let item = FeedItem::create(kind, raw, options)?;

        if kind == ItemKind::SecretTopic {
            if let Some(name) = &item.label {
                self.saved_topics.push(SavedTopic::new(item.value(), name));
                self.persist_saved_topics();
            }
        }

        tracing::debug!("Added {} item {}", kind, item.id);
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Add a secret topic item from an existing saved topic without creating a new saved entry.
    pub fn add_saved_topic_item(&mut self, saved_id: &str) -> Option<&FeedItem> {
        let saved = self.saved_topics.iter().find(|t| t.id == saved_id)?.clone();
        let item = FeedItem::create(
            ItemKind::SecretTopic,
            &saved.value,
            ItemOptions::default(),
        )
        .ok()?;
        self.items.push(FeedItem {
            label: Some(saved.name),
            ..item
        });
        self.items.last()
    }

    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before != self.items.len()
    }

    pub fn remove_saved_topic(&mut self, id: &str) -> bool {
        let before = self.saved_topics.len();
        self.saved_topics.retain(|topic| topic.id != id);
        let removed = before != self.saved_topics.len();
        if removed {
            self.persist_saved_topics();
        }
        removed
    }

    /// Clear the feed items. Saved topics are left alone.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    fn persist_saved_topics(&self) {
        match self.repository.save(&self.saved_topics) {
            Ok(()) => tracing::info!("Saved {} topics", self.saved_topics.len()),
            Err(e) => tracing::warn!("Failed to persist saved topics: {}", e),
        }
    }
}
