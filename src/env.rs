//! Platform and launch-mode capabilities.
//!
//! Everything that depends on how the binary was started or which OS it runs
//! on is answered here, so the rest of the crate never checks `cfg!` flags.

use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tokio::process::Command;

#[cfg(target_os = "windows")]
const CREATE_NO_WINDOW: u32 = 0x08000000;

/// How the base directory was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchMode {
    /// Installed binary: base directory is the executable's folder
    Packaged,
    /// `cargo run` from a checkout: base directory is the crate root
    Source,
    /// `--base-dir` or `CFR_LAUNCHER_HOME`
    Override,
}

pub trait RuntimeEnvironment: Send + Sync {
    /// Root for config/, log/, cfr/ and the default output folder
    fn base_dir(&self) -> &Path;

    fn launch_mode(&self) -> LaunchMode;

    /// Apply platform tweaks to a subprocess before it is spawned
    fn prepare_command(&self, command: &mut Command);

    /// Show a directory in the platform file manager
    fn open_directory(&self, path: &Path) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct NativeEnvironment {
    base_dir: PathBuf,
    mode: LaunchMode,
}

impl NativeEnvironment {
    /// Resolve the base directory from the running executable.
    pub fn detect() -> Self {
        let exe = std::env::current_exe().ok();
        let manifest_dir = std::env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from);
        let (base_dir, mode) = resolve_base_dir(exe.as_deref(), manifest_dir.as_deref());
        Self { base_dir, mode }
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            mode: LaunchMode::Override,
        }
    }
}

/// A binary living under `<manifest>/target/` was started by cargo from a
/// checkout; anything else is treated as a packaged install.
fn resolve_base_dir(exe: Option<&Path>, manifest_dir: Option<&Path>) -> (PathBuf, LaunchMode) {
    if let (Some(exe), Some(manifest)) = (exe, manifest_dir) {
        if exe.starts_with(manifest.join("target")) {
            return (manifest.to_path_buf(), LaunchMode::Source);
        }
    }

    let base = exe
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    (base, LaunchMode::Packaged)
}

impl RuntimeEnvironment for NativeEnvironment {
    fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn launch_mode(&self) -> LaunchMode {
        self.mode
    }

    #[cfg(target_os = "windows")]
    fn prepare_command(&self, command: &mut Command) {
        // Keep java.exe from flashing a console window
        command.creation_flags(CREATE_NO_WINDOW);
    }

    #[cfg(not(target_os = "windows"))]
    fn prepare_command(&self, _command: &mut Command) {}

    fn open_directory(&self, path: &Path) -> io::Result<()> {
        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("explorer").arg(path).spawn()?;
            return Ok(());
        }

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open").arg(path).spawn()?;
            return Ok(());
        }

        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            std::process::Command::new("xdg-open").arg(path).spawn()?;
            Ok(())
        }
    }
}
