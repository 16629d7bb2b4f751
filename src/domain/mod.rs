pub mod item;
pub mod options;
pub mod result;
pub mod settings;
pub mod topic;

pub use item::{generate_id, normalize_site, FeedItem, ItemData, ItemKind, ItemOptions, Rejection};
pub use options::{SearchOperator, TimeFilter, UnknownCode};
pub use result::GeneratedResult;
pub use settings::{FeedSettings, Language, Region};
pub use topic::{find_main_topic, MainTopic, SavedTopic, MAIN_TOPICS};
