use std::sync::Arc;

use crate::app::coordinator::Coordinator;
use crate::app::error::{HeadwaterError, Result};
use crate::config::Config;
use crate::fetcher::{Fetcher, RelayFetcher};
use crate::store::{ItemStore, MemoryTopicRepository, SqliteTopicRepository, TopicRepository};

pub struct AppContext {
    pub config: Config,
    pub repository: Arc<dyn TopicRepository + Send + Sync>,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let db_path = config
            .storage
            .database_path()
            .map_err(|e| HeadwaterError::Config(e.to_string()))?;
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let repository: Arc<dyn TopicRepository + Send + Sync> =
            Arc::new(SqliteTopicRepository::new(&db_path)?);
        let fetcher: Arc<dyn Fetcher + Send + Sync> =
            Arc::new(RelayFetcher::new(config.relay.clone())?);

        Ok(Self {
            config,
            repository,
            fetcher,
        })
    }

    /// Context with saved topics kept in memory only.
    pub fn in_memory(config: Config) -> Result<Self> {
        let repository: Arc<dyn TopicRepository + Send + Sync> =
            Arc::new(MemoryTopicRepository::new());
        let fetcher: Arc<dyn Fetcher + Send + Sync> =
            Arc::new(RelayFetcher::new(config.relay.clone())?);

        Ok(Self {
            config,
            repository,
            fetcher,
        })
    }

    /// Start a session: saved topics are loaded here, once.
    pub fn coordinator(&self) -> Coordinator {
        let store = ItemStore::open(self.repository.clone());
        Coordinator::new(store, self.config.feed, self.fetcher.clone())
    }
}
