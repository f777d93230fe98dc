use crate::cli::Locale;
use crate::config::{subdirs, CFR_JAR, OUTPUT_PATH_FILE};
use crate::error::{AppError, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Every path the application touches, rooted at the base directory.
///
/// Construction cannot fail; whether a target exists is checked where it is
/// used.
#[derive(Debug, Clone)]
pub struct AppPaths {
    base_dir: PathBuf,
    locale: Locale,
}

impl AppPaths {
    pub fn new(base_dir: impl Into<PathBuf>, locale: Locale) -> Self {
        Self {
            base_dir: base_dir.into(),
            locale,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.join(subdirs::CONFIG)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join(subdirs::LOG)
    }

    pub fn tool_dir(&self) -> PathBuf {
        self.base_dir.join(subdirs::CFR)
    }

    /// Output folder used until the user picks another one
    pub fn default_output_dir(&self) -> PathBuf {
        self.base_dir.join(self.locale.default_output_dir_name())
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir().join(OUTPUT_PATH_FILE)
    }

    /// Where cfr.jar is expected, whether or not it is there
    pub fn tool_path(&self) -> PathBuf {
        self.tool_dir().join(CFR_JAR)
    }

    /// The CFR jar if it exists right now. Never cached.
    pub fn find_tool(&self) -> Option<PathBuf> {
        let path = self.tool_path();
        path.is_file().then_some(path)
    }

    /// Activity log file for a calendar day: `log/log_YYYY-MM-DD.txt`
    pub fn log_file_for(&self, date: NaiveDate) -> PathBuf {
        log_file_in(&self.log_dir(), date)
    }

    /// Directories the bootstrapper guarantees at startup
    pub fn required_dirs(&self) -> [PathBuf; 4] {
        [
            self.config_dir(),
            self.log_dir(),
            self.default_output_dir(),
            self.tool_dir(),
        ]
    }
}

pub fn log_file_in(log_dir: &Path, date: NaiveDate) -> PathBuf {
    log_dir.join(format!("log_{}.txt", date.format("%Y-%m-%d")))
}

/// Get the home directory in a cross-platform way
pub fn home_dir() -> Result<PathBuf> {
    home::home_dir()
        .ok_or_else(|| AppError::PathError("Could not find home directory".to_string()))
}

/// Turn a user-typed directory into an absolute path.
/// Expands a leading `~` and anchors relative paths at `cwd`.
pub fn absolutize_user_path(path: &Path, cwd: &Path) -> Result<PathBuf> {
    let expanded = match path.strip_prefix("~") {
        Ok(rest) => home_dir()?.join(rest),
        Err(_) => path.to_path_buf(),
    };

    if expanded.as_os_str().is_empty() {
        return Err(AppError::PathError("Directory path is empty".to_string()));
    }

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(cwd.join(expanded))
    }
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir_exists(path: &Path) -> std::io::Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
