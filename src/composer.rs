use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::{AuditError, Result};

pub const DEFAULT_COMPOSER: &str = "composer";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Produces the raw license listing for a project.
pub trait LicenseListing {
    fn list_licenses(&self, project_path: &Path) -> Result<String>;
}

/// Runs `<composer> -d <path> licenses`.
#[derive(Debug, Clone)]
pub struct ComposerCommand {
    program: String,
    timeout: Duration,
}

impl ComposerCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn describe(&self, project_path: &Path) -> String {
        format!("{} -d {} licenses", self.program, project_path.display())
    }
}

impl LicenseListing for ComposerCommand {
    fn list_licenses(&self, project_path: &Path) -> Result<String> {
        let command = self.describe(project_path);
        tracing::debug!(%command, timeout_secs = self.timeout.as_secs(), "Running license listing");

        let mut child = Command::new(&self.program)
            .arg("-d")
            .arg(project_path)
            .arg("licenses")
            .arg("--no-interaction")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| AuditError::ProcessSpawn {
                command: command.clone(),
                details: e.to_string(),
            })?;

        // drain both pipes so a chatty child can't block on a full buffer
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match wait_with_deadline(&mut child, self.timeout) {
            Ok(Some(status)) => status,
            Ok(None) => {
                tracing::warn!(%command, "License listing timed out, killing process");
                let _ = child.kill();
                let _ = child.wait();
                return Err(AuditError::Timeout {
                    command,
                    seconds: self.timeout.as_secs(),
                });
            }
            Err(e) => {
                let _ = child.kill();
                return Err(AuditError::ProcessSpawn {
                    command,
                    details: e.to_string(),
                });
            }
        };

        let stdout = join(stdout);
        let stderr = join(stderr);

        if !status.success() {
            return Err(AuditError::ProcessFailed {
                command,
                status: status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        if stdout.trim().is_empty() {
            return Err(AuditError::EmptyOutput { command });
        }

        tracing::debug!(bytes = stdout.len(), "License listing finished");
        Ok(stdout)
    }
}

fn wait_with_deadline(child: &mut Child, timeout: Duration) -> std::io::Result<Option<std::process::ExitStatus>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<String>> {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            String::from_utf8_lossy(&buf).into_owned()
        })
    })
}

fn join(handle: Option<JoinHandle<String>>) -> String {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}
