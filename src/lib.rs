//! # Headwater
//!
//! Compose Google News RSS feed URLs from topics, keywords, sites and locations.
//!
//! ## Architecture
//!
//! ```text
//! ItemStore → UrlBuilder → PreviewFetcher
//!        \________ Coordinator ________/
//! ```
//!
//! - [`store`]: feed items for the session and persisted saved topics
//! - [`builder`]: deterministic URL construction
//! - [`fetcher`]: relay fetch with fallback document
//! - [`app`]: session coordinator, wiring and error types
//!
//! ## Quick Start
//!
//! ```bash
//! # Technology headlines in German
//! headwater --lang de --region DE build --topic technology
//!
//! # Exact phrase or a site, last day only
//! headwater build --keyword "climate change" --exact --site reuters.com --when 1d
//!
//! # Save a secret topic and preview the feed
//! headwater build --secret CAAqBwgKMKHL9QowkqbaAg --name "Rust" --preview
//! ```

/// Session coordinator, application context and error handling.
///
/// [`Coordinator`](app::Coordinator) exposes the item store, URL builder and
/// preview fetcher to the presentation layer.
pub mod app;

/// Google News URL construction.
pub mod builder;

/// Command-line interface using clap.
pub mod cli;

/// Configuration loaded from `~/.config/headwater/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`FeedItem`](domain::FeedItem): one entry of the feed, a closed sum over item kinds
/// - [`SavedTopic`](domain::SavedTopic): named shortcut to a secret topic
/// - [`FeedSettings`](domain::FeedSettings): language and region
pub mod domain;

/// Preview fetching through a relay.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for fetching a feed body
/// - [`RelayFetcher`](fetcher::RelayFetcher): reqwest-based implementation
/// - [`fetch_preview`](fetcher::fetch_preview): fetch with fallback document
pub mod fetcher;

/// Item store and saved-topic repositories.
///
/// - [`TopicRepository`](store::TopicRepository): load/save interface
/// - [`SqliteTopicRepository`](store::SqliteTopicRepository): SQLite implementation
/// - [`MemoryTopicRepository`](store::MemoryTopicRepository): in-memory implementation
pub mod store;
