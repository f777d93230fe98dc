use crate::app::AppState;
use crate::env::LaunchMode;
use crate::error::Result;
use crate::output::Output;
use serde::Serialize;
use std::path::PathBuf;

/// Snapshot of the paths the decompile command would use
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub base_dir: PathBuf,
    pub launch_mode: LaunchMode,
    pub lang: &'static str,
    pub output_dir: PathBuf,
    pub output_is_default: bool,
    pub config_file: PathBuf,
    /// Today's activity log
    pub log_file: PathBuf,
    pub tool_path: PathBuf,
    pub tool_found: bool,
    /// Resolved java executable, if any
    pub java: Option<PathBuf>,
}

pub fn collect_status(state: &AppState, java: &str) -> StatusReport {
    StatusReport {
        base_dir: state.paths.base_dir().to_path_buf(),
        launch_mode: state.env.launch_mode(),
        lang: state.locale.code(),
        output_dir: state.config.get_output_path(),
        output_is_default: state.config.is_default(),
        config_file: state.config.config_file().to_path_buf(),
        log_file: state
            .paths
            .log_file_for(chrono::Local::now().date_naive()),
        tool_path: state.paths.tool_path(),
        tool_found: state.paths.find_tool().is_some(),
        java: which::which(java).ok(),
    }
}

pub fn handle_status(state: &AppState, java: &str, output: &mut Output) -> Result<()> {
    let report = collect_status(state, java);
    tracing::debug!("Status: {:?}", report);
    output.status(&report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity_log::tests::RecordingLog;
    use crate::cli::Locale;
    use crate::env::NativeEnvironment;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_status_tracks_tool_presence() {
        let temp_dir = TempDir::new().unwrap();
        let state = AppState::new(
            Arc::new(NativeEnvironment::with_base_dir(temp_dir.path())),
            Locale::Zh,
            Arc::new(RecordingLog::default()),
        );

        let before = collect_status(&state, "cfr-launcher-no-such-java");
        assert!(!before.tool_found);
        assert!(before.java.is_none());
        assert_eq!(before.launch_mode, LaunchMode::Override);
        assert_eq!(before.lang, "zh");
        assert_eq!(before.output_dir, temp_dir.path().join("shuchu"));
        assert!(before.output_is_default);

        fs::create_dir_all(state.paths.tool_dir()).unwrap();
        fs::write(state.paths.tool_path(), b"PK").unwrap();

        let after = collect_status(&state, "cfr-launcher-no-such-java");
        assert!(after.tool_found);
    }

    #[test]
    fn test_status_serializes() {
        let temp_dir = TempDir::new().unwrap();
        let state = AppState::new(
            Arc::new(NativeEnvironment::with_base_dir(temp_dir.path())),
            Locale::En,
            Arc::new(RecordingLog::default()),
        );

        let json = serde_json::to_value(collect_status(&state, "java")).unwrap();
        assert_eq!(json["launch_mode"], "override");
        assert_eq!(json["tool_found"], false);
        assert_eq!(json["lang"], "en");
    }
}
