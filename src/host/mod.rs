use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::config::NotifyConfig;
use crate::script;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    supports_automation: bool,
}

impl Platform {
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::macos()
        } else {
            Self::unsupported()
        }
    }

    pub fn macos() -> Self {
        Self {
            supports_automation: true,
        }
    }

    pub fn unsupported() -> Self {
        Self {
            supports_automation: false,
        }
    }

    pub fn supports_automation(&self) -> bool {
        self.supports_automation
    }
}

pub trait Host: Send + Sync {
    // Fire-and-forget
    fn show_notification(&self, message: &str);
    fn hide_main_window(&self);
    fn out_plugin(&self);

    fn exit_plugin(&self) {
        self.hide_main_window();
        self.out_plugin();
    }
}

pub struct DesktopHost {
    notify: NotifyConfig,
    interpreter: String,
    platform: Platform,
}

impl DesktopHost {
    pub fn new(notify: NotifyConfig, interpreter: String, platform: Platform) -> Self {
        Self {
            notify,
            interpreter,
            platform,
        }
    }
}

impl Host for DesktopHost {
    fn show_notification(&self, message: &str) {
        eprintln!("{}: {}", self.notify.title, message.trim());

        if !self.notify.enabled || !self.platform.supports_automation() {
            return;
        }

        let script = script::notification(&self.notify.title, message);
        let spawned = Command::new(&self.interpreter)
            .arg("-e")
            .arg(script)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        if let Err(e) = spawned {
            warn!("Failed to post notification: {e}");
        }
    }

    fn hide_main_window(&self) {
        debug!("Hiding main window");
    }

    fn out_plugin(&self) {
        debug!("Unloading plugin");
    }
}
