pub mod items;
pub mod memory;
pub mod sqlite;

use crate::app::Result;
use crate::domain::SavedTopic;

pub use items::ItemStore;
pub use memory::MemoryTopicRepository;
pub use sqlite::SqliteTopicRepository;

/// Name of the single persisted record holding the saved-topics collection.
pub const SAVED_TOPICS_RECORD: &str = "saved_topics";

/// Storage for the saved-topics collection.
///
/// The collection is read and written wholesale; there are no per-entry operations.
pub trait TopicRepository {
    fn load(&self) -> Result<Vec<SavedTopic>>;
    fn save(&self, topics: &[SavedTopic]) -> Result<()>;
}

pub(crate) fn decode_topics(body: &str) -> Result<Vec<SavedTopic>> {
    Ok(serde_json::from_str(body)?)
}

pub(crate) fn encode_topics(topics: &[SavedTopic]) -> Result<String> {
    Ok(serde_json::to_string(topics)?)
}
