use async_trait::async_trait;
use std::collections::VecDeque;
use std::io::{Error as IoError, ErrorKind};
use std::sync::Mutex;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::host::Host;
use crate::models::ProcessResult;

pub enum Scripted {
    Finished(ProcessResult),
    SpawnFailure,
}

#[derive(Default)]
pub struct ScriptedRunner {
    responses: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedRunner {
    pub fn new(responses: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::default(),
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn scripts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|(_, args)| args.get(1).cloned())
            .collect()
    }
}

#[async_trait]
impl crate::runner::ScriptRunner for ScriptedRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        _timeout: Duration,
    ) -> Result<ProcessResult> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_string(), args.to_vec()));

        match self.responses.lock().unwrap().pop_front() {
            Some(Scripted::Finished(result)) => Ok(result),
            Some(Scripted::SpawnFailure) => Err(Error::Spawn {
                program: program.to_string(),
                source: IoError::from(ErrorKind::NotFound),
            }),
            None => Ok(exited(0)),
        }
    }
}

pub fn stdout(text: &str) -> Scripted {
    Scripted::Finished(ProcessResult {
        stdout: text.to_string(),
        exit_code: Some(0),
        ..Default::default()
    })
}

pub fn stderr(text: &str) -> Scripted {
    Scripted::Finished(ProcessResult {
        stderr: text.to_string(),
        exit_code: Some(1),
        ..Default::default()
    })
}

pub fn timed_out() -> Scripted {
    Scripted::Finished(ProcessResult {
        killed: true,
        ..Default::default()
    })
}

pub fn exited(code: i32) -> ProcessResult {
    ProcessResult {
        exit_code: Some(code),
        ..Default::default()
    }
}

#[derive(Default)]
pub struct RecordingHost {
    notifications: Mutex<Vec<String>>,
    lifecycle: Mutex<Vec<&'static str>>,
}

impl RecordingHost {
    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn lifecycle(&self) -> Vec<&'static str> {
        self.lifecycle.lock().unwrap().clone()
    }
}

impl Host for RecordingHost {
    fn show_notification(&self, message: &str) {
        self.notifications.lock().unwrap().push(message.to_string());
    }

    fn hide_main_window(&self) {
        self.lifecycle.lock().unwrap().push("hide");
    }

    fn out_plugin(&self) {
        self.lifecycle.lock().unwrap().push("out");
    }
}
