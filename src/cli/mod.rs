pub mod commands;
pub mod pages;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{SearchOperator, TimeFilter};

#[derive(Parser)]
#[command(name = "headwater")]
#[command(about = "Compose Google News RSS feed URLs", long_about = None)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Feed language code, overrides the config (e.g. "en", "de")
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Feed region code, overrides the config (e.g. "US", "UK")
    #[arg(long, global = true)]
    pub region: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a feed URL from topics, keywords, sites and locations
    Build(BuildArgs),
    /// Manage saved secret topics
    Topics {
        #[command(subcommand)]
        action: TopicsAction,
    },
    /// List the main Google News topics
    MainTopics,
    /// Show the documentation
    Docs,
    /// Show the legal notice
    Legal,
}

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Main topic by key ("world", "technology", ...) or Google topic id
    #[arg(long = "topic", value_name = "KEY|ID")]
    pub topics: Vec<String>,

    /// Secret topic id
    #[arg(long = "secret", value_name = "ID")]
    pub secrets: Vec<String>,

    /// Name for the secret topic at the same position; named topics are saved
    #[arg(long = "name", value_name = "NAME")]
    pub names: Vec<String>,

    /// Add a secret topic from a saved topic id
    #[arg(long = "saved", value_name = "SAVED_ID")]
    pub saved: Vec<String>,

    /// Search keyword
    #[arg(long = "keyword", value_name = "TEXT")]
    pub keywords: Vec<String>,

    /// Site domain, scheme/www/path are stripped
    #[arg(long = "site", value_name = "DOMAIN")]
    pub sites: Vec<String>,

    /// Geographic location
    #[arg(long = "location", value_name = "PLACE")]
    pub locations: Vec<String>,

    /// Time filter for keywords and sites: none, 1h, 3h, 12h, 1d, 7d, 30d, 1y
    #[arg(long, default_value = "none")]
    pub when: TimeFilter,

    /// Search operator for keywords: allintext, intitle, allintitle, inurl, allinurl
    #[arg(long, default_value = "none")]
    pub operator: SearchOperator,

    /// Match keywords as exact phrases
    #[arg(long)]
    pub exact: bool,

    /// Fetch the feed through the relay and print it
    #[arg(long)]
    pub preview: bool,

    /// Open the generated URL in the browser
    #[arg(long)]
    pub open: bool,
}

#[derive(Subcommand)]
pub enum TopicsAction {
    /// List saved topics
    List,
    /// Remove a saved topic
    Remove {
        /// Saved topic id
        id: String,
    },
}
