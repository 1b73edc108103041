use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PreviousTrack,
    NextTrack,
    Like,
    Dislike,
    TogglePlayPause,
    ToggleLyrics,
    Exit,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::TogglePlayPause,
        Action::PreviousTrack,
        Action::NextTrack,
        Action::Like,
        Action::Dislike,
        Action::ToggleLyrics,
        Action::Exit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::PreviousTrack => "previous-track",
            Action::NextTrack => "next-track",
            Action::Like => "like",
            Action::Dislike => "dislike",
            Action::TogglePlayPause => "play-pause",
            Action::ToggleLyrics => "toggle-lyrics",
            Action::Exit => "exit",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Action::PreviousTrack => "Previous Track",
            Action::NextTrack => "Next Track",
            Action::Like => "Like",
            Action::Dislike => "Dislike",
            Action::TogglePlayPause => "Play/Pause",
            Action::ToggleLyrics => "Show/Hide Lyrics",
            Action::Exit => "Quit NeteaseMusic",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// Launchers hand the serialized name back to `run`/`select`
impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Launcher plugins historically registered camelCase names
        match s {
            "previous-track" | "previousTrack" | "prev" => Ok(Action::PreviousTrack),
            "next-track" | "nextTrack" | "next" => Ok(Action::NextTrack),
            "like" => Ok(Action::Like),
            "dislike" => Ok(Action::Dislike),
            "play-pause" | "play/pause" | "playPause" => Ok(Action::TogglePlayPause),
            "toggle-lyrics" | "toggleLyrics" | "lyrics" => Ok(Action::ToggleLyrics),
            "exit" | "quit" => Ok(Action::Exit),
            _ => Err(format!("Unknown command: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Play,
    Pause,
    Next,
    Previous,
    Like,
    Dislike,
    ToggleLyrics,
    Quit,
    QueryPlayState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Playing,
    Paused,
    Exited,
    Unknown,
}

impl std::fmt::Display for PlayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayState::Playing => write!(f, "playing"),
            PlayState::Paused => write!(f, "paused"),
            PlayState::Exited => write!(f, "not running"),
            PlayState::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessResult {
    pub stdout: String,
    pub stderr: String,
    pub killed: bool,
    pub exit_code: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListItem {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub command: Action,
}

impl ListItem {
    pub fn new(action: Action, app_name: &str) -> Self {
        Self {
            title: action.title().to_string(),
            description: format!("{app_name} - {}", action.title()),
            icon: "netease.png".to_string(),
            command: action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names_round_trip() {
        for action in Action::ALL {
            assert_eq!(action.name().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn test_action_legacy_aliases() {
        assert_eq!("play/pause".parse::<Action>(), Ok(Action::TogglePlayPause));
        assert_eq!("previousTrack".parse::<Action>(), Ok(Action::PreviousTrack));
        assert_eq!("toggleLyrics".parse::<Action>(), Ok(Action::ToggleLyrics));
        assert!("shuffle".parse::<Action>().is_err());
    }

    #[test]
    fn test_list_item_serializes_command_name() {
        let item = ListItem::new(Action::NextTrack, "NeteaseMusic");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["command"], "next-track");
        assert_eq!(json["description"], "NeteaseMusic - Next Track");

        let item = ListItem::new(Action::TogglePlayPause, "NeteaseMusic");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["command"], "play-pause");
    }

    #[test]
    fn test_serialized_command_parses_back() {
        for action in Action::ALL {
            let json = serde_json::to_value(ListItem::new(action, "NeteaseMusic")).unwrap();
            let name = json["command"].as_str().unwrap();
            assert_eq!(name.parse::<Action>(), Ok(action), "{name}");
        }
    }
}
