use serde::{Deserialize, Serialize};

use super::item::generate_id;

/// One of Google News' top-level topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainTopic {
    pub key: &'static str,
    pub label: &'static str,
    pub id: &'static str,
}

pub const MAIN_TOPICS: &[MainTopic] = &[
    MainTopic {
        key: "world",
        label: "World",
        id: "CAAqJggKIiBDQkFTRWdvSUwyMHZNRGx1YlY4U0FtVnVHZ0pWVXlnQVAB",
    },
    MainTopic {
        key: "nation",
        label: "U.S.",
        id: "CAAqIggKIhxDQkFTRHdvSkwyMHZNRGxqTjNjd0VnSmxiaWdBUAE",
    },
    MainTopic {
        key: "business",
        label: "Business",
        id: "CAAqJggKIiBDQkFTRWdvSUwyMHZNRGx6TVdZU0FtVnVHZ0pWVXlnQVAB",
    },
    MainTopic {
        key: "technology",
        label: "Technology",
        id: "CAAqJggKIiBDQkFTRWdvSUwyMHZNRGRqTVhZU0FtVnVHZ0pWVXlnQVAB",
    },
    MainTopic {
        key: "entertainment",
        label: "Entertainment",
        id: "CAAqJggKIiBDQkFTRWdvSUwyMHZNREpxYW5RU0FtVnVHZ0pWVXlnQVAB",
    },
    MainTopic {
        key: "sports",
        label: "Sports",
        id: "CAAqJggKIiBDQkFTRWdvSUwyMHZNRFp1ZEdvU0FtVnVHZ0pWVXlnQVAB",
    },
    MainTopic {
        key: "science",
        label: "Science",
        id: "CAAqJggKIiBDQkFTRWdvSUwyMHZNRFp0Y1RjU0FtVnVHZ0pWVXlnQVAB",
    },
    MainTopic {
        key: "health",
        label: "Health",
        id: "CAAqIQgKIhtDQkFTRGdvSUwyMHZNR3QwTlRFU0FtVnVLQUFQAQ",
    },
];

/// Look up a main topic by its short key (any case) or by its Google topic id.
pub fn find_main_topic(value: &str) -> Option<&'static MainTopic> {
    MAIN_TOPICS
        .iter()
        .find(|t| t.id == value || t.key.eq_ignore_ascii_case(value))
}

/// Named shortcut to a secret topic value, persisted across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTopic {
    pub id: String,
    pub value: String,
    pub name: String,
}

impl SavedTopic {
    pub fn new(value: &str, name: &str) -> Self {
        Self {
            id: generate_id(value),
            value: value.to_string(),
            name: name.to_string(),
        }
    }
}
