use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use rusqlite_migration::{Migrations, M};

use crate::app::{HeadwaterError, Result};
use crate::domain::SavedTopic;
use crate::store::{decode_topics, encode_topics, TopicRepository, SAVED_TOPICS_RECORD};

pub struct SqliteTopicRepository {
    conn: Mutex<Connection>,
}

impl SqliteTopicRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self {
            conn: Mutex::new(conn),
        };
        repo.run_migrations()?;
        Ok(repo)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self {
            conn: Mutex::new(conn),
        };
        repo.run_migrations()?;
        Ok(repo)
    }

    fn run_migrations(&self) -> Result<()> {
        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../migrations/001-initial/up.sql"
        ))]);

        let mut conn = self.lock()?;
        migrations.to_latest(&mut conn)?;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            HeadwaterError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(e.to_string()),
            ))
        })
    }

    fn read_record(&self, name: &str) -> Result<Option<String>> {
        let conn = self.lock()?;
        let body = conn
            .query_row(
                "SELECT body FROM records WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(body)
    }

    fn write_record(&self, name: &str, body: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO records (name, body, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(name) DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at",
            params![name, body, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

impl TopicRepository for SqliteTopicRepository {
    fn load(&self) -> Result<Vec<SavedTopic>> {
        match self.read_record(SAVED_TOPICS_RECORD)? {
            Some(body) => decode_topics(&body),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, topics: &[SavedTopic]) -> Result<()> {
        let body = encode_topics(topics)?;
        self.write_record(SAVED_TOPICS_RECORD, &body)?;
        tracing::debug!("Wrote {} saved topics", topics.len());
        Ok(())
    }
}
