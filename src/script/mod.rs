use crate::config::Config;
use crate::models::MenuCommand;

pub const PLAY_MARKER: &str = "PLAY";
pub const PAUSE_MARKER: &str = "PAUSE";
pub const UNKNOWN_MARKER: &str = "UNKNOWN";

pub struct ScriptBuilder<'a> {
    config: &'a Config,
}

impl<'a> ScriptBuilder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn build(&self, command: MenuCommand) -> String {
        let labels = &self.config.labels;
        match command {
            MenuCommand::Play => self.menu_click(&labels.play),
            MenuCommand::Pause => self.menu_click(&labels.pause),
            MenuCommand::Next => self.menu_click(&labels.next),
            MenuCommand::Previous => self.menu_click(&labels.previous),
            MenuCommand::Like => self.menu_click(&labels.like),
            MenuCommand::Dislike => self.menu_click(&labels.dislike),
            MenuCommand::ToggleLyrics => self.menu_click(&labels.toggle_lyrics),
            MenuCommand::Quit => self.quit(),
            MenuCommand::QueryPlayState => self.query_play_state(),
        }
    }

    fn menu_click(&self, key: &str) -> String {
        let app = &self.config.app;
        format!(
            r#"tell application "System Events" to tell process "{process}"
    tell menu 1 of menu bar item {menu} of menu bar 1
        try
            click menu item my localizedString("{key}")
        end try
    end tell
end tell

on localizedString(key)
    set appBundle to "{bundle}" as POSIX file
    return localized string of key in bundle appBundle
end localizedString"#,
            process = quote(&app.process),
            menu = app.controls_menu,
            key = quote(key),
            bundle = quote(&app.bundle),
        )
    }

    fn quit(&self) -> String {
        let app = &self.config.app;
        format!(
            r#"tell application "System Events" to tell process "{process}"
    click menu item {item} of menu 1 of menu bar item {menu} of menu bar 1
end tell"#,
            process = quote(&app.process),
            item = app.quit_item,
            menu = app.app_menu,
        )
    }

    fn query_play_state(&self) -> String {
        let app = &self.config.app;
        let labels = &self.config.labels;
        format!(
            r#"set appBundle to "{bundle}" as POSIX file
tell application "System Events" to tell process "{process}"
    tell menu 1 of menu bar item {menu} of menu bar 1
        set playText to localized string of "{play}" in bundle appBundle
        set pauseText to localized string of "{pause}" in bundle appBundle
        if name of menu item 1 = playText then
            return "{PLAY_MARKER}"
        else if name of menu item 1 = pauseText then
            return "{PAUSE_MARKER}"
        else
            return "{UNKNOWN_MARKER}"
        end if
    end tell
end tell"#,
            bundle = quote(&app.bundle),
            process = quote(&app.process),
            menu = app.controls_menu,
            play = quote(&labels.play),
            pause = quote(&labels.pause),
        )
    }
}

fn quote(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

pub fn notification(title: &str, message: &str) -> String {
    format!(
        r#"display notification "{}" with title "{}""#,
        quote(message.trim()),
        quote(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [MenuCommand; 9] = [
        MenuCommand::Play,
        MenuCommand::Pause,
        MenuCommand::Next,
        MenuCommand::Previous,
        MenuCommand::Like,
        MenuCommand::Dislike,
        MenuCommand::ToggleLyrics,
        MenuCommand::Quit,
        MenuCommand::QueryPlayState,
    ];

    #[test]
    fn test_every_command_is_non_empty_and_deterministic() {
        let config = Config::default();
        let builder = ScriptBuilder::new(&config);
        for command in ALL {
            let first = builder.build(command);
            assert!(!first.is_empty(), "{command:?}");
            assert_eq!(first, builder.build(command), "{command:?}");
        }
    }

    #[test]
    fn test_menu_click_uses_localized_label() {
        let config = Config::default();
        let script = ScriptBuilder::new(&config).build(MenuCommand::ToggleLyrics);
        assert!(script.contains(r#"tell process "NeteaseMusic""#));
        assert!(script.contains("menu bar item 4 of menu bar 1"));
        assert!(script.contains(r#"my localizedString("Show/Hide Lyrics")"#));
        assert!(script.contains(r#""/Applications/NeteaseMusic.app" as POSIX file"#));
        assert!(script.contains("try"));
    }

    #[test]
    fn test_quit_clicks_fixed_item() {
        let config = Config::default();
        let script = ScriptBuilder::new(&config).build(MenuCommand::Quit);
        assert!(script.contains("click menu item 11 of menu 1 of menu bar item 2 of menu bar 1"));
    }

    #[test]
    fn test_query_returns_markers() {
        let config = Config::default();
        let script = ScriptBuilder::new(&config).build(MenuCommand::QueryPlayState);
        assert!(script.contains(r#"return "PLAY""#));
        assert!(script.contains(r#"return "PAUSE""#));
        assert!(script.contains(r#"return "UNKNOWN""#));
        assert!(script.contains(r#"localized string of "Pause""#));
    }

    #[test]
    fn test_configured_labels_are_escaped() {
        let mut config = Config::default();
        config.labels.like = r#"Say "Like""#.to_string();
        let script = ScriptBuilder::new(&config).build(MenuCommand::Like);
        assert!(script.contains(r#"localizedString("Say \"Like\"")"#));
    }

    #[test]
    fn test_notification_script() {
        assert_eq!(
            notification("NeteaseMusic", "oops \"quoted\"\n"),
            r#"display notification "oops \"quoted\"" with title "NeteaseMusic""#
        );
    }
}
