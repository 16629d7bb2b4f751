use std::sync::Mutex;

use crate::app::Result;
use crate::domain::SavedTopic;
use crate::store::{decode_topics, encode_topics, TopicRepository};

/// Repository that keeps the serialized record in memory.
///
/// Holds the same JSON text the SQLite repository would, so a corrupted
/// record can be simulated with [`MemoryTopicRepository::with_record`].
#[derive(Debug, Default)]
pub struct MemoryTopicRepository {
    record: Mutex<Option<String>>,
}

impl MemoryTopicRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(body: &str) -> Self {
        Self {
            record: Mutex::new(Some(body.to_string())),
        }
    }

    /// Current serialized record, if anything has been written.
    pub fn record(&self) -> Option<String> {
        self.record
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl TopicRepository for MemoryTopicRepository {
    fn load(&self) -> Result<Vec<SavedTopic>> {
        match self.record() {
            Some(body) => decode_topics(&body),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, topics: &[SavedTopic]) -> Result<()> {
        let body = encode_topics(topics)?;
        *self.record.lock().unwrap_or_else(|e| e.into_inner()) = Some(body);
        Ok(())
    }
}
