use std::sync::Arc;

use crate::app::{HeadwaterError, Result};
use crate::builder;
use crate::domain::{
    FeedItem, FeedSettings, GeneratedResult, ItemKind, ItemOptions, Language, Region, SavedTopic,
};
use crate::fetcher::{fetch_preview, FallbackContext, Fetcher};
use crate::store::ItemStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Builder,
    Docs,
    Legal,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Builder => "Feed Builder",
            Screen::Docs => "Documentation",
            Screen::Legal => "Legal",
        }
    }
}

/// A preview fetch that has been started but not yet applied.
///
/// Owns everything it needs, so the coordinator is free to change while it runs.
pub struct PendingPreview {
    generation: u64,
    url: String,
    context: FallbackContext,
    fetcher: Arc<dyn Fetcher + Send + Sync>,
}

impl PendingPreview {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn run(self) -> CompletedPreview {
        let result = fetch_preview(self.fetcher.as_ref(), &self.url, &self.context).await;
        CompletedPreview {
            generation: self.generation,
            result,
        }
    }
}

pub struct CompletedPreview {
    generation: u64,
    result: GeneratedResult,
}

/// Session state shared with the presentation layer.
///
/// Every change to the feed, its settings or the active screen bumps the
/// generation; a preview started under an older generation is discarded.
pub struct Coordinator {
    store: ItemStore,
    settings: FeedSettings,
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    result: GeneratedResult,
    screen: Screen,
    busy: bool,
    generation: u64,
}

impl Coordinator {
    pub fn new(
        store: ItemStore,
        settings: FeedSettings,
        fetcher: Arc<dyn Fetcher + Send + Sync>,
    ) -> Self {
        Self {
            store,
            settings,
            fetcher,
            result: GeneratedResult::default(),
            screen: Screen::default(),
            busy: false,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[FeedItem] {
        self.store.items()
    }

    pub fn saved_topics(&self) -> &[SavedTopic] {
        self.store.saved_topics()
    }

    pub fn settings(&self) -> FeedSettings {
        self.settings
    }

    pub fn result(&self) -> &GeneratedResult {
        &self.result
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// URL for the current items and settings, without fetching anything.
    pub fn build_url(&self) -> String {
        builder::build(self.store.items(), &self.settings)
    }

    pub fn add_item(&mut self, kind: ItemKind, raw: &str, options: ItemOptions) -> Result<FeedItem> {
        let item = self.store.add_item(kind, raw, options)?.clone();
        self.invalidate();
        Ok(item)
    }

    pub fn add_saved_topic_item(&mut self, saved_id: &str) -> Result<FeedItem> {
        let item = self
            .store
            .add_saved_topic_item(saved_id)
            .cloned()
            .ok_or_else(|| HeadwaterError::TopicNotFound(saved_id.to_string()))?;
        self.invalidate();
        Ok(item)
    }

    pub fn remove_item(&mut self, id: &str) -> bool {
        let removed = self.store.remove_item(id);
        if removed {
            self.invalidate();
        }
        removed
    }

    pub fn remove_saved_topic(&mut self, id: &str) -> bool {
        self.store.remove_saved_topic(id)
    }

    /// Clear the feed and the generated result. Saved topics survive.
    pub fn reset(&mut self) {
        self.store.reset();
        self.result = GeneratedResult::default();
        self.invalidate();
    }

    pub fn set_language(&mut self, code: &str) -> Result<()> {
        let language: Language = code.parse()?;
        if language != self.settings.language {
            self.settings.language = language;
            self.invalidate();
        }
        Ok(())
    }

    pub fn set_region(&mut self, code: &str) -> Result<()> {
        let region: Region = code.parse()?;
        if region != self.settings.region {
            self.settings.region = region;
            self.invalidate();
        }
        Ok(())
    }

    pub fn show(&mut self, screen: Screen) {
        if screen != self.screen && self.screen == Screen::Builder {
            self.invalidate();
        }
        self.screen = screen;
    }

    /// Build the URL and start a preview.
    ///
    /// Fails with [`HeadwaterError::Busy`] while another preview is in flight.
    /// With nothing to build, the result is cleared and no preview is returned.
    pub fn begin_generate(&mut self) -> Result<Option<PendingPreview>> {
        if self.busy {
            return Err(HeadwaterError::Busy);
        }

        let url = self.build_url();
        if url.is_empty() {
            self.result = GeneratedResult::default();
            return Ok(None);
        }

        self.busy = true;
        Ok(Some(PendingPreview {
            generation: self.generation,
            context: FallbackContext::from_items(self.store.items(), &self.settings),
            url,
            fetcher: self.fetcher.clone(),
        }))
    }

    /// Apply a finished preview. Returns false if it was stale and discarded.
    pub fn complete_generate(&mut self, done: CompletedPreview) -> bool {
        if done.generation != self.generation {
            tracing::debug!(
                "Discarding stale preview (generation {} < {})",
                done.generation,
                self.generation
            );
            return false;
        }

        self.result = done.result;
        self.busy = false;
        true
    }

    pub async fn generate(&mut self) -> Result<&GeneratedResult> {
        if let Some(pending) = self.begin_generate()? {
            let done = pending.run().await;
            self.complete_generate(done);
        }
        Ok(&self.result)
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        self.busy = false;
    }
}
