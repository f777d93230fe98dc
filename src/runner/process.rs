use crate::env::RuntimeEnvironment;
use async_trait::async_trait;
use std::ffi::OsString;
use std::io;
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
#[cfg(unix)]
use tokio::time::{timeout, Duration};

/// Program plus arguments, independent of how it gets executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl CommandSpec {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Shell-like rendering for logs
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|part| {
                let text = part.to_string_lossy();
                if text.contains(char::is_whitespace) {
                    format!("\"{}\"", text)
                } else {
                    text.into_owned()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// What a finished process left behind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs a command to completion and captures its streams.
///
/// An `Err` means the process could not be run at all (missing executable,
/// spawn failure, interruption); a process that ran and failed is an `Ok`
/// with a non-zero exit code.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, command: &CommandSpec) -> io::Result<ProcessOutput>;
}

pub struct SystemProcessRunner {
    env: Arc<dyn RuntimeEnvironment>,
}

impl SystemProcessRunner {
    pub fn new(env: Arc<dyn RuntimeEnvironment>) -> Self {
        Self { env }
    }
}

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    async fn run(&self, spec: &CommandSpec) -> io::Result<ProcessOutput> {
        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        self.env.prepare_command(&mut command);

        tracing::debug!("Spawning: {}", spec.display());
        let mut child = command.spawn()?;

        let stdout = child.stdout.take().map(|pipe| tokio::spawn(read_all(pipe)));
        let stderr = child.stderr.take().map(|pipe| tokio::spawn(read_all(pipe)));

        let status = wait_or_interrupt(&mut child).await?;
        tracing::debug!("Process exited with {}", status);

        Ok(ProcessOutput {
            exit_code: status.code(),
            stdout: collect(stdout).await,
            stderr: collect(stderr).await,
        })
    }
}

async fn read_all<R: AsyncRead + Unpin>(mut pipe: R) -> Vec<u8> {
    let mut buffer = Vec::new();
    if let Err(e) = pipe.read_to_end(&mut buffer).await {
        tracing::debug!("Stopped reading child output: {}", e);
    }
    buffer
}

async fn collect(reader: Option<JoinHandle<Vec<u8>>>) -> String {
    let Some(reader) = reader else {
        return String::new();
    };
    let bytes = reader.await.unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Wait for the child, killing it if the user interrupts us first.
#[cfg(unix)]
async fn wait_or_interrupt(child: &mut Child) -> io::Result<ExitStatus> {
    use futures::stream::StreamExt;
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook_tokio::Signals;

    let mut signals = match Signals::new([SIGINT, SIGTERM]) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(
                "Failed to setup signal handling: {}. Continuing without signal support.",
                e
            );
            return child.wait().await;
        }
    };
    let handle = signals.handle();

    // Ctrl+C reaches java too; report the interrupt, not the child's death
    let result = tokio::select! {
        biased;
        Some(sig) = signals.next() => {
            let signal_name = match sig {
                SIGINT => "SIGINT",
                SIGTERM => "SIGTERM",
                _ => "unknown signal",
            };
            tracing::info!("Received {}, stopping the decompiler...", signal_name);
            terminate_child(child).await;
            Err(io::Error::new(
                io::ErrorKind::Interrupted,
                format!("interrupted by {}", signal_name),
            ))
        }
        status = child.wait() => status,
    };

    handle.close();
    result
}

#[cfg(not(unix))]
async fn wait_or_interrupt(child: &mut Child) -> io::Result<ExitStatus> {
    child.wait().await
}

/// Terminate child process with timeout
#[cfg(unix)]
async fn terminate_child(child: &mut Child) {
    if let Err(e) = child.kill().await {
        // Child might have already exited
        tracing::debug!(
            "Failed to kill child process (may have already exited): {}",
            e
        );
        return;
    }

    match timeout(Duration::from_secs(5), child.wait()).await {
        Ok(Ok(_)) => {
            tracing::debug!("Child process terminated successfully");
        }
        Ok(Err(e)) => {
            tracing::warn!("Error waiting for child process: {}", e);
        }
        Err(_) => {
            tracing::warn!("Timeout waiting for child process to terminate");
        }
    }
}
