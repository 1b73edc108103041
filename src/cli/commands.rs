use anyhow::{Result, bail};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::controller::Controller;
use crate::host::{DesktopHost, Host, Platform};
use crate::invoker::{Invoker, Outcome};
use crate::models::{Action, ListItem};
use crate::runner::{ProcessRunner, ScriptRunner};

pub struct App {
    pub config: Config,
    config_path: Option<PathBuf>,
    host: Arc<dyn Host>,
    controller: Controller,
}

impl App {
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_path)?;
        let platform = Platform::detect();
        let runner = Arc::new(ProcessRunner::new(config.automation.capture));
        let host = Arc::new(DesktopHost::new(
            config.notify.clone(),
            config.automation.interpreter.clone(),
            platform,
        ));

        let mut app = Self::with_parts(config, platform, runner, host);
        app.config_path = config_path.map(Path::to_path_buf);
        Ok(app)
    }

    pub fn with_parts(
        config: Config,
        platform: Platform,
        runner: Arc<dyn ScriptRunner>,
        host: Arc<dyn Host>,
    ) -> Self {
        let invoker = Invoker::new(
            runner,
            Arc::clone(&host),
            platform,
            config.automation.clone(),
            config.app.process.clone(),
        );
        let controller = Controller::new(config.clone(), invoker);

        Self {
            config,
            config_path: None,
            host,
            controller,
        }
    }

    // Exits the plugin whether or not the action worked
    pub async fn enter(&self, action: Action) -> Result<Outcome> {
        let result = self.controller.perform(action).await;
        self.host.exit_plugin();
        Ok(result?)
    }

    pub fn items(&self) -> Vec<ListItem> {
        Action::ALL
            .iter()
            .map(|action| ListItem::new(*action, &self.config.app.process))
            .collect()
    }

    pub fn list(&self, json: bool) -> Result<()> {
        let items = self.items();

        if json {
            println!("{}", serde_json::to_string_pretty(&items)?);
            return Ok(());
        }

        for (i, item) in items.iter().enumerate() {
            println!(
                "{:3}. {:<18} {} ({})",
                i + 1,
                item.title,
                item.description,
                item.command
            );
        }

        Ok(())
    }

    pub fn find_item(&self, entry: &str) -> Result<ListItem> {
        let items = self.items();

        if let Ok(index) = entry.parse::<usize>() {
            return match index.checked_sub(1).and_then(|i| items.get(i)) {
                Some(item) => Ok(item.clone()),
                None => bail!("No entry {index}; pick 1-{}", items.len()),
            };
        }

        if let Ok(action) = entry.parse::<Action>()
            && let Some(item) = items.iter().find(|item| item.command == action)
        {
            return Ok(item.clone());
        }

        let matcher = SkimMatcherV2::default();
        let best = items
            .iter()
            .filter_map(|item| {
                matcher
                    .fuzzy_match(&item.title, entry)
                    .filter(|score| *score > 0)
                    .map(|score| (item, score))
            })
            .max_by_key(|(_, score)| *score);

        match best {
            Some((item, _)) => Ok(item.clone()),
            None => bail!("No command matching '{entry}'"),
        }
    }

    pub async fn select(&self, entry: &str) -> Result<Outcome> {
        let item = self.find_item(entry)?;
        self.enter(item.command).await
    }

    pub async fn state(&self) -> Result<()> {
        let state = self.controller.play_state().await?;
        println!("{state}");
        Ok(())
    }

    fn config_file(&self) -> PathBuf {
        self.config_path.clone().unwrap_or_else(Config::config_path)
    }

    pub fn config_init(&self, force: bool) -> Result<()> {
        let path = self.config_file();
        if path.exists() && !force {
            bail!(
                "Config already exists at {}. Use --force to overwrite.",
                path.display()
            );
        }

        let written = Config::default().save(Some(&path))?;
        println!("Wrote default config to {}", written.display());
        Ok(())
    }

    pub fn config_show(&self) -> Result<()> {
        print!("{}", self.config.to_toml()?);
        Ok(())
    }

    pub fn config_location(&self) {
        println!("{}", self.config_file().display());
    }
}
