use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use headwater::app::{AppContext, Screen};
use headwater::cli::{commands, Cli, Commands, TopicsAction};
use headwater::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let ctx = AppContext::new(config)?;
    let mut coordinator = ctx.coordinator();

    if let Some(lang) = &cli.lang {
        coordinator.set_language(lang)?;
    }
    if let Some(region) = &cli.region {
        coordinator.set_region(region)?;
    }

    match cli.command {
        Commands::Build(args) => {
            commands::build_feed(&mut coordinator, &args).await?;
        }
        Commands::Topics { action } => match action {
            TopicsAction::List => commands::list_topics(&coordinator)?,
            TopicsAction::Remove { id } => commands::remove_topic(&mut coordinator, &id)?,
        },
        Commands::MainTopics => {
            commands::list_main_topics()?;
        }
        Commands::Docs => {
            commands::show_page(&mut coordinator, Screen::Docs)?;
        }
        Commands::Legal => {
            commands::show_page(&mut coordinator, Screen::Legal)?;
        }
    }

    Ok(())
}
