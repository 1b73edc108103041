mod cli;
mod config;
mod controller;
mod error;
mod host;
mod invoker;
mod models;
mod runner;
mod script;
#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{App, Cli, Commands, ConfigCommands};
use models::Action;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let default_level = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let app = App::new(cli.config.as_deref())?;

    match cli.command {
        Commands::PreviousTrack => {
            app.enter(Action::PreviousTrack).await?;
        }
        Commands::NextTrack => {
            app.enter(Action::NextTrack).await?;
        }
        Commands::Like => {
            app.enter(Action::Like).await?;
        }
        Commands::Dislike => {
            app.enter(Action::Dislike).await?;
        }
        Commands::PlayPause => {
            app.enter(Action::TogglePlayPause).await?;
        }
        Commands::ToggleLyrics => {
            app.enter(Action::ToggleLyrics).await?;
        }
        Commands::Exit => {
            app.enter(Action::Exit).await?;
        }
        Commands::Run { name } => {
            app.enter(name).await?;
        }
        Commands::List { json } => {
            app.list(json)?;
        }
        Commands::Select { entry } => {
            app.select(&entry).await?;
        }
        Commands::State => {
            app.state().await?;
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init { force } => {
                app.config_init(force)?;
            }
            ConfigCommands::Show => {
                app.config_show()?;
            }
            ConfigCommands::Path => {
                app.config_location();
            }
        },
    }

    Ok(())
}
