use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::options::{SearchOperator, TimeFilter};
use super::topic::find_main_topic;

const ID_LEN: usize = 16;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generate a fresh opaque identifier.
///
/// Mixes a process-wide sequence number, the process id and the current time
/// into the digest, so two calls never produce the same id even for the same value.
pub fn generate_id(value: &str) -> String {
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(std::process::id().to_le_bytes());
    hasher.update(seq.to_le_bytes());
    hasher.update(nanos.to_le_bytes());
    hasher.update(value.as_bytes());

    let mut id = hex::encode(hasher.finalize());
    id.truncate(ID_LEN);
    id
}

/// Reduce a user-entered site to a bare domain.
///
/// Strips `http://` or `https://`, then `www.`, then drops everything from the
/// first `/` on. Applying it to its own output is a no-op.
pub fn normalize_site(raw: &str) -> String {
    let value = raw
        .strip_prefix("https://")
        .or_else(|| raw.strip_prefix("http://"))
        .unwrap_or(raw);
    let value = value.strip_prefix("www.").unwrap_or(value);
    value.split('/').next().unwrap_or_default().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    MainTopic,
    SecretTopic,
    Keyword,
    Site,
    Location,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::MainTopic => "Main Topic",
            ItemKind::SecretTopic => "Secret Topic",
            ItemKind::Keyword => "Keyword",
            ItemKind::Site => "Site",
            ItemKind::Location => "Location",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why an `add_item` request was not applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("value is empty")]
    EmptyValue,

    #[error("no main topic selected")]
    NoTopicSelected,
}

/// Optional settings supplied alongside a new item.
///
/// Fields that do not apply to the item's kind are dropped when the item is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemOptions {
    pub time_filter: TimeFilter,
    pub search_operator: SearchOperator,
    pub exact_match: bool,
    pub label: Option<String>,
}

/// Per-kind payload. Each variant carries only the options that apply to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemData {
    MainTopic {
        topic_id: String,
    },
    SecretTopic {
        value: String,
    },
    Keyword {
        value: String,
        time_filter: TimeFilter,
        search_operator: SearchOperator,
        exact_match: bool,
    },
    Site {
        domain: String,
        time_filter: TimeFilter,
    },
    Location {
        place: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: String,
    pub label: Option<String>,
    pub data: ItemData,
}

impl FeedItem {
    /// Validate and normalize raw input into a new item with a fresh id.
    pub fn create(kind: ItemKind, raw: &str, options: ItemOptions) -> Result<Self, Rejection> {
        let raw = raw.trim();
        if raw.is_empty() {
            return match kind {
                ItemKind::MainTopic => Err(Rejection::NoTopicSelected),
                _ => Err(Rejection::EmptyValue),
            };
        }

        let label = options
            .label
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());

        let (data, label) = match kind {
            ItemKind::MainTopic => {
                let topic = find_main_topic(raw).ok_or(Rejection::NoTopicSelected)?;
                (
                    ItemData::MainTopic {
                        topic_id: topic.id.to_string(),
                    },
                    Some(topic.label.to_string()),
                )
            }
            ItemKind::SecretTopic => (
                ItemData::SecretTopic {
                    value: raw.to_string(),
                },
                label,
            ),
            ItemKind::Keyword => (
                ItemData::Keyword {
                    value: raw.to_string(),
                    time_filter: options.time_filter,
                    search_operator: options.search_operator,
                    exact_match: options.exact_match,
                },
                None,
            ),
            ItemKind::Site => {
                let domain = normalize_site(raw);
                if domain.is_empty() {
                    return Err(Rejection::EmptyValue);
                }
                (
                    ItemData::Site {
                        domain,
                        time_filter: options.time_filter,
                    },
                    None,
                )
            }
            ItemKind::Location => (
                ItemData::Location {
                    place: raw.to_string(),
                },
                None,
            ),
        };

        Ok(Self {
            id: generate_id(raw),
            label,
            data,
        })
    }

    pub fn kind(&self) -> ItemKind {
        match self.data {
            ItemData::MainTopic { .. } => ItemKind::MainTopic,
            ItemData::SecretTopic { .. } => ItemKind::SecretTopic,
            ItemData::Keyword { .. } => ItemKind::Keyword,
            ItemData::Site { .. } => ItemKind::Site,
            ItemData::Location { .. } => ItemKind::Location,
        }
    }

    pub fn value(&self) -> &str {
        match &self.data {
            ItemData::MainTopic { topic_id } => topic_id,
            ItemData::SecretTopic { value } => value,
            ItemData::Keyword { value, .. } => value,
            ItemData::Site { domain, .. } => domain,
            ItemData::Location { place } => place,
        }
    }

    pub fn time_filter(&self) -> Option<TimeFilter> {
        match self.data {
            ItemData::Keyword { time_filter, .. } | ItemData::Site { time_filter, .. } => {
                Some(time_filter)
            }
            _ => None,
        }
    }

    /// Label if one was set, otherwise `"{Kind}: {value}"`.
    pub fn display_title(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{}: {}", self.kind(), self.value()),
        }
    }
}
