use crate::app::AppState;
use crate::error::Result;
use crate::output::Output;
use crate::runner::process::SystemProcessRunner;
use crate::runner::{Decompiler, Outcome, RunOptions};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

pub async fn handle_run(
    state: &AppState,
    input: Option<PathBuf>,
    options: RunOptions,
    output: &mut Output,
) -> Result<()> {
    let input = match input {
        Some(path) => Some(path),
        None => prompt_for_input(output),
    };

    if let Some(path) = input.as_deref() {
        if !path.to_string_lossy().trim().is_empty() {
            output.decompile_started(path, &state.config.get_output_path())?;
        }
    }

    let runner = Arc::new(SystemProcessRunner::new(state.env.clone()));
    let decompiler = Decompiler::new(state, runner).with_options(options);

    let spinner = output.create_spinner("Running CFR...");
    let outcome = decompiler.run(input.as_deref()).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if !outcome.is_success() {
        tracing::debug!("Decompile did not succeed: {:?}", outcome);
    }

    let java_files = match &outcome {
        Outcome::Success { output_dir, .. } => Some(count_java_files(output_dir)),
        _ => None,
    };
    output.outcome(&outcome, java_files)?;

    outcome.into_result().map(|_| ())
}

/// Ask for the input file on an interactive terminal, the CLI's file picker.
fn prompt_for_input(output: &Output) -> Option<PathBuf> {
    if output.quiet() || output.json() || !std::io::stdin().is_terminal() {
        return None;
    }

    let answer: String = dialoguer::Input::new()
        .with_prompt("Input file (.jar or .class)")
        .allow_empty(true)
        .interact_text()
        .unwrap_or_default();

    let trimmed = answer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

/// Number of `.java` files anywhere under `dir`
fn count_java_files(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "java")
        })
        .count()
}
