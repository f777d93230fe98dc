mod activity_log;
mod app;
mod cli;
mod commands;
mod config;
mod env;
mod error;
mod init;
mod output;
mod runner;
mod settings;
mod utils;

use activity_log::DailyFileLog;
use app::AppState;
use clap::Parser;
use cli::{Cli, Commands, OutputFormat};
use commands::{handle_config, handle_open, handle_run, handle_status};
use env::{NativeEnvironment, RuntimeEnvironment};
use error::AppError;
use output::Output;
use runner::RunOptions;
use std::sync::Arc;
use utils::path::AppPaths;

#[tokio::main]
async fn main() {
    // Setup panic handler for user-friendly error messages
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let mut output = Output::new(cli.quiet, matches!(cli.format, OutputFormat::Json));

    let result = async {
        // 1. Resolve the base directory (override, source checkout, or packaged binary)
        let env: Arc<dyn RuntimeEnvironment> = match cli.base_dir {
            Some(ref dir) => Arc::new(NativeEnvironment::with_base_dir(dir)),
            None => Arc::new(NativeEnvironment::detect()),
        };
        let paths = AppPaths::new(env.base_dir(), cli.lang);

        // 2. Required folders must exist before anything writes into them
        init::ensure_directories(&paths)?;

        // 3. Diagnostics
        init::setup_logging(&paths, cli.verbose, cli.quiet)?;
        tracing::debug!(
            "Base directory: {} ({:?})",
            paths.base_dir().display(),
            env.launch_mode()
        );

        let activity_log = Arc::new(DailyFileLog::new(paths.log_dir()));
        let state = AppState::new(env, cli.lang, activity_log);

        // 4. Dispatch command
        match cli.command {
            Commands::Run {
                input,
                java,
                cfr_args,
            } => {
                let options = RunOptions {
                    java,
                    extra_args: cfr_args,
                };
                handle_run(&state, input, options, &mut output).await?;
            }
            Commands::Config { action } => handle_config(&state, action, &mut output)?,
            Commands::Status { ref java } => handle_status(&state, java, &mut output)?,
            Commands::Open => handle_open(&state, &mut output)?,
        }

        Ok::<(), AppError>(())
    }
    .await;

    match result {
        Ok(()) => std::process::exit(exitcode::OK),
        Err(e) => {
            if !e.is_already_displayed() {
                let _ = output.error(e.to_string());
            }
            std::process::exit(e.exit_code());
        }
    }
}
