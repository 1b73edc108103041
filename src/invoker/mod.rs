use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::AutomationConfig;
use crate::error::{Error, Result};
use crate::host::{Host, Platform};
use crate::runner::ScriptRunner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    AppExited,
    Empty,
    Reported(String),
}

pub struct Invoker {
    runner: Arc<dyn ScriptRunner>,
    host: Arc<dyn Host>,
    platform: Platform,
    automation: AutomationConfig,
    app_name: String,
}

impl Invoker {
    pub fn new(
        runner: Arc<dyn ScriptRunner>,
        host: Arc<dyn Host>,
        platform: Platform,
        automation: AutomationConfig,
        app_name: String,
    ) -> Self {
        Self {
            runner,
            host,
            platform,
            automation,
            app_name,
        }
    }

    // Only platform and spawn errors reach the caller
    pub async fn run(&self, script: &str, ignorable: &[String]) -> Result<Outcome> {
        let message = match self.execute(script).await {
            Ok(output) if output.is_empty() => return Ok(Outcome::Empty),
            Ok(output) => return Ok(Outcome::Output(output)),
            Err(Error::Automation(message)) => message,
            Err(e) => return Err(e),
        };

        if self
            .automation
            .process_not_found
            .iter()
            .any(|marker| message.contains(marker.as_str()))
        {
            debug!("{} is not running", self.app_name);
            return Ok(Outcome::AppExited);
        }

        if ignorable.iter().any(|s| message.contains(s.as_str())) {
            debug!("Ignoring expected failure: {}", message.trim());
            return Ok(Outcome::Empty);
        }

        warn!("Automation failed: {}", message.trim());
        self.host.show_notification(&message);
        Ok(Outcome::Reported(message))
    }

    pub async fn execute(&self, script: &str) -> Result<String> {
        if !self.platform.supports_automation() {
            return Err(Error::Platform);
        }

        let args = ["-e".to_string(), script.to_string()];
        let result = self
            .runner
            .run(&self.automation.interpreter, &args, self.automation.timeout())
            .await?;

        if !result.stdout.is_empty() {
            Ok(result.stdout)
        } else if !result.stderr.is_empty() {
            Err(Error::Automation(result.stderr))
        } else if result.killed {
            Err(Error::Automation(format!(
                "{} is not running.",
                self.app_name
            )))
        } else {
            Ok(String::new())
        }
    }
}
