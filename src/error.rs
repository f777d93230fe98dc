use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot create required directory {}: {source}", path.display())]
    Bootstrap {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot save output path to {}: {source}", path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error("No input file selected")]
    MissingInput,

    #[error("cfr.jar not found at {}", .0.display())]
    ToolNotFound(PathBuf),

    #[error("Decompile failed with exit code {}", .0.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    ToolFailure(Option<i32>),

    #[error("Execution error: {0}")]
    Execution(String),
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Io(_) => exitcode::IOERR,
            AppError::Json(_) => exitcode::SOFTWARE,
            AppError::Bootstrap { .. } | AppError::ConfigWrite { .. } => exitcode::CANTCREAT,
            AppError::PathError(_) => exitcode::USAGE,
            AppError::Logging(_) => exitcode::SOFTWARE,
            AppError::MissingInput => exitcode::USAGE,
            AppError::ToolNotFound(_) => exitcode::UNAVAILABLE,
            AppError::ToolFailure(_) => exitcode::SOFTWARE,
            AppError::Execution(_) => exitcode::OSERR,
        }
    }

    /// Outcome errors are rendered by the run command before they reach main
    pub fn is_already_displayed(&self) -> bool {
        matches!(
            self,
            AppError::MissingInput
                | AppError::ToolNotFound(_)
                | AppError::ToolFailure(_)
                | AppError::Execution(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_failure_is_fatal_and_shown() {
        let err = AppError::Bootstrap {
            path: PathBuf::from("/nope/config"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.exit_code(), exitcode::CANTCREAT);
        assert!(!err.is_already_displayed());
        assert!(err.to_string().contains("/nope/config"));
    }

    #[test]
    fn test_outcome_errors_are_already_displayed() {
        assert!(AppError::MissingInput.is_already_displayed());
        assert!(AppError::ToolFailure(Some(1)).is_already_displayed());
        assert_eq!(AppError::MissingInput.exit_code(), exitcode::USAGE);
        assert_eq!(
            AppError::ToolNotFound(PathBuf::from("cfr/cfr.jar")).exit_code(),
            exitcode::UNAVAILABLE
        );
    }

    #[test]
    fn test_tool_failure_message_without_code() {
        assert_eq!(
            AppError::ToolFailure(None).to_string(),
            "Decompile failed with exit code none"
        );
        assert_eq!(
            AppError::ToolFailure(Some(2)).to_string(),
            "Decompile failed with exit code 2"
        );
    }
}
