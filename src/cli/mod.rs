use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::Action;

mod commands;
pub use commands::*;

#[derive(Parser)]
#[command(name = "neteasectl")]
#[command(about = "Control the NeteaseMusic desktop app from the command line")]
#[command(version)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "NETEASECTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Go to the previous track
    #[command(name = "previous-track", alias = "prev")]
    PreviousTrack,

    /// Skip to the next track
    #[command(name = "next-track", alias = "next")]
    NextTrack,

    /// Like the current track
    Like,

    /// Remove the current track from liked songs
    Dislike,

    /// Pause if playing, otherwise play
    #[command(name = "play-pause", alias = "toggle")]
    PlayPause,

    /// Show or hide the lyrics window
    #[command(name = "toggle-lyrics", alias = "lyrics")]
    ToggleLyrics,

    /// Quit NeteaseMusic
    #[command(alias = "quit")]
    Exit,

    /// Run a command by its launcher name (e.g. "play/pause", "nextTrack")
    Run {
        /// Command name
        name: Action,
    },

    /// List every command, as a launcher palette would show them
    List {
        /// Print the entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a listed command by number, name, or title
    Select {
        /// 1-based index, command name, or search query
        entry: String,
    },

    /// Show whether NeteaseMusic is playing
    State,

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_aliases_and_launcher_names() {
        let parse = |args: &[&str]| {
            Cli::try_parse_from(std::iter::once("neteasectl").chain(args.iter().copied()))
                .unwrap()
                .command
        };

        assert!(matches!(parse(&["next"]), Commands::NextTrack));
        assert!(matches!(parse(&["toggle"]), Commands::PlayPause));
        assert!(matches!(parse(&["quit"]), Commands::Exit));
        assert!(matches!(
            parse(&["run", "play/pause"]),
            Commands::Run {
                name: Action::TogglePlayPause
            }
        ));
        assert!(matches!(
            parse(&["run", "toggleLyrics"]),
            Commands::Run {
                name: Action::ToggleLyrics
            }
        ));
    }

    #[test]
    fn test_unknown_run_name_is_rejected() {
        assert!(Cli::try_parse_from(["neteasectl", "run", "shuffle"]).is_err());
    }
}
