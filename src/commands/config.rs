use crate::app::AppState;
use crate::cli::ConfigAction;
use crate::error::Result;
use crate::output::Output;
use crate::utils::path::absolutize_user_path;

pub fn handle_config(state: &AppState, action: ConfigAction, output: &mut Output) -> Result<()> {
    match action {
        ConfigAction::Show => {
            output.output_path(&state.config.get_output_path(), state.config.is_default())?;
        }
        ConfigAction::SetOutput { dir } => {
            let cwd = std::env::current_dir()?;
            let path = absolutize_user_path(&dir, &cwd)?;
            state.config.set_output_path(&path)?;
            state
                .log
                .log(&format!("Output path changed to: {}", path.display()));
            output.output_path_changed(&path)?;
        }
        ConfigAction::Reset => {
            let removed = state.config.reset()?;
            if removed {
                state.log.log("Output path reset to default");
            }
            output.output_path_reset(state.config.default_output_path(), removed)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity_log::tests::RecordingLog;
    use crate::cli::Locale;
    use crate::env::NativeEnvironment;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn state(temp_dir: &TempDir, log: Arc<RecordingLog>) -> AppState {
        AppState::new(
            Arc::new(NativeEnvironment::with_base_dir(temp_dir.path())),
            Locale::En,
            log,
        )
    }

    #[test]
    fn test_set_output_then_reset() {
        let temp_dir = TempDir::new().unwrap();
        let log = Arc::new(RecordingLog::default());
        let state = state(&temp_dir, log.clone());
        let mut output = Output::new(true, false);
        let target = temp_dir.path().join("sources");

        handle_config(
            &state,
            ConfigAction::SetOutput {
                dir: target.clone(),
            },
            &mut output,
        )
        .unwrap();
        assert_eq!(state.config.get_output_path(), target);

        handle_config(&state, ConfigAction::Reset, &mut output).unwrap();
        assert!(state.config.is_default());

        // Second reset has nothing to remove and logs nothing
        handle_config(&state, ConfigAction::Reset, &mut output).unwrap();

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].starts_with("Output path changed to:"));
        assert_eq!(entries[1], "Output path reset to default");
    }

    #[test]
    fn test_show_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let log = Arc::new(RecordingLog::default());
        let state = state(&temp_dir, log.clone());
        let mut output = Output::new(true, false);

        handle_config(&state, ConfigAction::Show, &mut output).unwrap();

        assert!(!state.config.config_file().exists());
        assert!(log.entries().is_empty());
    }
}
