use crate::activity_log::ActivityLog;
use crate::cli::Locale;
use crate::env::RuntimeEnvironment;
use crate::settings::ConfigStore;
use crate::utils::path::AppPaths;
use std::sync::Arc;

/// Everything a command needs, built once at startup and handed down
#[derive(Clone)]
pub struct AppState {
    pub env: Arc<dyn RuntimeEnvironment>,
    pub locale: Locale,
    pub paths: AppPaths,
    pub config: ConfigStore,
    pub log: Arc<dyn ActivityLog>,
}

impl AppState {
    pub fn new(
        env: Arc<dyn RuntimeEnvironment>,
        locale: Locale,
        log: Arc<dyn ActivityLog>,
    ) -> Self {
        let paths = AppPaths::new(env.base_dir(), locale);
        let config = ConfigStore::new(&paths);
        Self {
            env,
            locale,
            paths,
            config,
            log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity_log::tests::RecordingLog;
    use crate::env::NativeEnvironment;

    #[test]
    fn test_state_paths_follow_environment() {
        let base = std::env::temp_dir().join("cfr-state");
        let state = AppState::new(
            Arc::new(NativeEnvironment::with_base_dir(&base)),
            Locale::Zh,
            Arc::new(RecordingLog::default()),
        );

        assert_eq!(state.paths.base_dir(), base.as_path());
        assert_eq!(state.config.default_output_path(), base.join("shuchu"));
        assert_eq!(state.config.config_file(), state.paths.config_file());
    }
}
