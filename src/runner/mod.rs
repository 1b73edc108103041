use async_trait::async_trait;
use std::io::Error as IoError;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::debug;

use crate::config::CaptureMode;
use crate::error::{Error, Result};
use crate::models::ProcessResult;

#[async_trait]
pub trait ScriptRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String], timeout: Duration)
    -> Result<ProcessResult>;
}

pub struct ProcessRunner {
    capture: CaptureMode,
}

impl ProcessRunner {
    pub fn new(capture: CaptureMode) -> Self {
        Self { capture }
    }
}

#[async_trait]
impl ScriptRunner for ProcessRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<ProcessResult> {
        debug!("Spawning {program} with timeout {timeout:?}");

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| Error::Spawn {
                program: program.to_string(),
                source,
            })?;

        // Drain both pipes while waiting so a chatty child can't block on a full pipe
        let stdout = tokio::spawn(collect(child.stdout.take(), self.capture));
        let stderr = tokio::spawn(collect(child.stderr.take(), self.capture));

        let (status, killed) = match tokio::time::timeout(timeout, child.wait()).await {
            Ok(status) => (status?, false),
            Err(_) => {
                debug!("{program} exceeded {timeout:?}, killing");
                // The child may have exited in the meantime; killing it then is harmless
                if let Err(e) = child.kill().await {
                    debug!("Kill after timeout failed: {e}");
                }
                (child.wait().await?, true)
            }
        };

        let result = ProcessResult {
            stdout: join(stdout).await?,
            stderr: join(stderr).await?,
            killed,
            exit_code: status.code(),
        };
        debug!(?result, "{program} finished");

        Ok(result)
    }
}

// Pipe reads are chunked like a Node stream's data events
const CHUNK_SIZE: usize = 64 * 1024;

async fn collect<R>(stream: Option<R>, capture: CaptureMode) -> std::io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let Some(mut stream) = stream else {
        return Ok(String::new());
    };

    let mut kept = Vec::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        if capture == CaptureMode::LastChunk {
            kept.clear();
        }
        kept.extend_from_slice(&buf[..n]);
    }

    Ok(String::from_utf8_lossy(&kept).into_owned())
}

async fn join(task: tokio::task::JoinHandle<std::io::Result<String>>) -> Result<String> {
    let text = task.await.map_err(IoError::other)??;
    Ok(text)
}
