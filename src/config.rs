/// Configuration constants for cfr-launcher paths and files
use crate::cli::Locale;

/// Subdirectories under the base directory
pub mod subdirs {
    /// Holds the persisted output path setting
    pub const CONFIG: &str = "config";

    /// Daily activity logs and verbose diagnostics
    pub const LOG: &str = "log";

    /// Where the CFR core jar must be placed
    pub const CFR: &str = "cfr";
}

/// File under `config/` holding the chosen output directory
pub const OUTPUT_PATH_FILE: &str = "output_path.txt";

/// The CFR core, expected at `cfr/cfr.jar`
pub const CFR_JAR: &str = "cfr.jar";

/// Rolling diagnostic log written with `--verbose`
pub const DIAGNOSTIC_LOG_FILE: &str = "cfr-launcher.log";

impl Locale {
    /// Name of the output folder used when none has been configured.
    pub fn default_output_dir_name(self) -> &'static str {
        match self {
            Locale::En => "output",
            Locale::Zh => "shuchu",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_default_output_dir_names() {
        assert_eq!(Locale::En.default_output_dir_name(), "output");
        assert_eq!(Locale::Zh.default_output_dir_name(), "shuchu");
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::En.code(), "en");
        assert_eq!(Locale::Zh.code(), "zh");
    }
}
