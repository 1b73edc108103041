use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::invoker::{Invoker, Outcome};
use crate::models::{Action, MenuCommand, PlayState};
use crate::script::{PAUSE_MARKER, PLAY_MARKER, ScriptBuilder};

pub struct Controller {
    config: Config,
    invoker: Invoker,
}

impl Controller {
    pub fn new(config: Config, invoker: Invoker) -> Self {
        Self { config, invoker }
    }

    pub async fn perform(&self, action: Action) -> Result<Outcome> {
        info!("Running {action}");
        match action {
            Action::PreviousTrack => self.previous_track().await,
            Action::NextTrack => self.next_track().await,
            Action::Like => self.like().await,
            Action::Dislike => self.dislike().await,
            Action::TogglePlayPause => self.play_pause().await,
            Action::ToggleLyrics => self.toggle_lyrics().await,
            Action::Exit => self.exit().await,
        }
    }

    pub async fn previous_track(&self) -> Result<Outcome> {
        self.send(Action::PreviousTrack, MenuCommand::Previous).await
    }

    pub async fn next_track(&self) -> Result<Outcome> {
        self.send(Action::NextTrack, MenuCommand::Next).await
    }

    pub async fn like(&self) -> Result<Outcome> {
        self.send(Action::Like, MenuCommand::Like).await
    }

    pub async fn dislike(&self) -> Result<Outcome> {
        self.send(Action::Dislike, MenuCommand::Dislike).await
    }

    pub async fn toggle_lyrics(&self) -> Result<Outcome> {
        self.send(Action::ToggleLyrics, MenuCommand::ToggleLyrics).await
    }

    pub async fn exit(&self) -> Result<Outcome> {
        self.send(Action::Exit, MenuCommand::Quit).await
    }

    // The state can change between the query and the click
    pub async fn play_pause(&self) -> Result<Outcome> {
        let state = self.play_state().await?;
        let command = if state == PlayState::Playing {
            MenuCommand::Pause
        } else {
            MenuCommand::Play
        };
        debug!("Play state is {state}, sending {command:?}");
        self.send(Action::TogglePlayPause, command).await
    }

    pub async fn play_state(&self) -> Result<PlayState> {
        let script = ScriptBuilder::new(&self.config).build(MenuCommand::QueryPlayState);
        let outcome = self.invoker.run(&script, &[]).await?;
        Ok(classify(&outcome))
    }

    async fn send(&self, action: Action, command: MenuCommand) -> Result<Outcome> {
        let script = ScriptBuilder::new(&self.config).build(command);
        self.invoker
            .run(&script, self.config.ignore.for_action(action))
            .await
    }
}

// A visible "Pause" item means the app is playing
pub fn classify(outcome: &Outcome) -> PlayState {
    match outcome {
        Outcome::AppExited => PlayState::Exited,
        Outcome::Output(text) if text.contains(PAUSE_MARKER) => PlayState::Playing,
        Outcome::Output(text) if text.contains(PLAY_MARKER) => PlayState::Paused,
        _ => PlayState::Unknown,
    }
}
