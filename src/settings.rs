use crate::error::{AppError, Result};
use crate::utils::path::AppPaths;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// The persisted output directory, stored as the sole content of
/// `config/output_path.txt`.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    base_dir: PathBuf,
    config_file: PathBuf,
    default_output: PathBuf,
}

impl ConfigStore {
    pub fn new(paths: &AppPaths) -> Self {
        Self {
            base_dir: paths.base_dir().to_path_buf(),
            config_file: paths.config_file(),
            default_output: paths.default_output_dir(),
        }
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn default_output_path(&self) -> &Path {
        &self.default_output
    }

    /// Current output directory. Falls back to the default (without creating
    /// it) when nothing has been saved.
    pub fn get_output_path(&self) -> PathBuf {
        self.stored_output_path()
            .unwrap_or_else(|| self.default_output.clone())
    }

    pub fn is_default(&self) -> bool {
        self.stored_output_path().is_none()
    }

    /// Replace the saved output directory. The directory itself is not
    /// checked or created here.
    pub fn set_output_path(&self, path: &Path) -> Result<()> {
        // The file is UTF-8 text; a lossy copy would point somewhere else
        let value = path.to_str().ok_or_else(|| {
            AppError::PathError(format!("not valid UTF-8: {}", path.display()))
        })?;

        let write = || -> std::io::Result<()> {
            if let Some(parent) = self.config_file.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&self.config_file, value)
        };

        write().map_err(|source| AppError::ConfigWrite {
            path: self.config_file.clone(),
            source,
        })?;
        tracing::info!("Output path set to {}", path.display());
        Ok(())
    }

    /// Forget the saved directory. Returns whether anything was removed.
    pub fn reset(&self) -> Result<bool> {
        match std::fs::remove_file(&self.config_file) {
            Ok(()) => {
                tracing::info!("Output path reset to default");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AppError::ConfigWrite {
                path: self.config_file.clone(),
                source: e,
            }),
        }
    }

    fn stored_output_path(&self) -> Option<PathBuf> {
        let contents = match std::fs::read_to_string(&self.config_file) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(
                    "Cannot read {}, using default output path: {}",
                    self.config_file.display(),
                    e
                );
                return None;
            }
        };

        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return None;
        }

        let stored = PathBuf::from(trimmed);
        if stored.is_absolute() {
            Some(stored)
        } else {
            Some(self.base_dir.join(stored))
        }
    }
}
