//! One decompile attempt: resolve paths, launch CFR, classify the result.

pub mod process;

use crate::activity_log::ActivityLog;
use crate::app::AppState;
use crate::error::{AppError, Result};
use crate::settings::ConfigStore;
use crate::utils::path::{ensure_dir_exists, AppPaths};
use process::{CommandSpec, ProcessRunner};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Result of one decompile attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Success {
        output_dir: PathBuf,
        stdout: String,
    },
    MissingInput,
    ToolNotFound {
        expected: PathBuf,
    },
    ToolFailure {
        exit_code: Option<i32>,
        stderr: String,
    },
    ExecutionError {
        message: String,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Fold the outcome into the crate error type for exit-code handling
    pub fn into_result(self) -> Result<PathBuf> {
        match self {
            Outcome::Success { output_dir, .. } => Ok(output_dir),
            Outcome::MissingInput => Err(AppError::MissingInput),
            Outcome::ToolNotFound { expected } => Err(AppError::ToolNotFound(expected)),
            Outcome::ToolFailure { exit_code, .. } => Err(AppError::ToolFailure(exit_code)),
            Outcome::ExecutionError { message } => Err(AppError::Execution(message)),
        }
    }
}

/// Knobs for the java command line
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Java launcher, `java` unless configured
    pub java: String,
    /// Appended after `--outputdir <dir>`
    pub extra_args: Vec<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            java: "java".to_string(),
            extra_args: Vec::new(),
        }
    }
}

pub struct Decompiler {
    paths: AppPaths,
    config: ConfigStore,
    log: Arc<dyn ActivityLog>,
    process: Arc<dyn ProcessRunner>,
    options: RunOptions,
}

impl Decompiler {
    pub fn new(state: &AppState, process: Arc<dyn ProcessRunner>) -> Self {
        Self {
            paths: state.paths.clone(),
            config: state.config.clone(),
            log: state.log.clone(),
            process,
            options: RunOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// `<java> -jar <tool> <input> --outputdir <output_dir> [extra...]`
    pub fn build_command(&self, tool: &Path, input: &Path, output_dir: &Path) -> CommandSpec {
        CommandSpec::new(&self.options.java)
            .arg("-jar")
            .arg(tool)
            .arg(input)
            .arg("--outputdir")
            .arg(output_dir)
            .args(&self.options.extra_args)
    }

    /// Run CFR once on `input`. Every return path writes exactly one summary
    /// line to the activity log; nothing is retried.
    pub async fn run(&self, input: Option<&Path>) -> Outcome {
        // Surrounding whitespace from a pasted path is not part of the name
        let Some(input) = input.and_then(trimmed_input) else {
            self.log.log("Decompile aborted: no input file selected");
            return Outcome::MissingInput;
        };
        let input = input.as_path();

        // CFR refuses to write into a missing directory
        let output_dir = self.config.get_output_path();
        if let Err(e) = ensure_dir_exists(&output_dir) {
            let message = format!(
                "cannot create output directory {}: {}",
                output_dir.display(),
                e
            );
            self.log.log(&format!("Execution error: {}", message));
            return Outcome::ExecutionError { message };
        }

        // Checked on every run so a jar dropped in later is picked up
        let Some(tool) = self.paths.find_tool() else {
            let expected = self.paths.tool_path();
            tracing::warn!("CFR core missing at {}", expected.display());
            self.log.log(&format!(
                "Decompile aborted: cfr.jar not found at {}",
                expected.display()
            ));
            return Outcome::ToolNotFound { expected };
        };

        self.log
            .log(&format!("Start decompiling: {}", input.display()));

        let command = self.build_command(&tool, input, &output_dir);
        tracing::info!("Running {}", command.display());

        match self.process.run(&command).await {
            // Exit code 0
            Ok(output) if output.success() => {
                self.log
                    .log(&format!("Decompile success: {}", input.display()));
                Outcome::Success {
                    output_dir,
                    stdout: output.stdout,
                }
            }
            // Non-zero exit, or killed by a signal (no exit code)
            Ok(output) => {
                let code = output
                    .exit_code
                    .map_or_else(|| "none".to_string(), |c| c.to_string());
                self.log.log(&format!(
                    "Decompile failed (exit code {}): {}",
                    code, output.stderr
                ));
                Outcome::ToolFailure {
                    exit_code: output.exit_code,
                    stderr: output.stderr,
                }
            }
            // Could not spawn, or we were interrupted
            Err(e) => {
                let message = e.to_string();
                self.log.log(&format!("Execution error: {}", message));
                Outcome::ExecutionError { message }
            }
        }
    }
}

/// Trim a user-supplied input path; `None` when nothing is left.
/// Non-UTF-8 paths are passed through untouched.
fn trimmed_input(input: &Path) -> Option<PathBuf> {
    match input.to_str() {
        Some(text) => {
            let text = text.trim();
            (!text.is_empty()).then(|| PathBuf::from(text))
        }
        None => Some(input.to_path_buf()),
    }
}
