use super::Output;
use std::io::{self, Write};
use std::path::Path;

impl Output {
    /// Print the current output directory
    pub fn output_path(&mut self, path: &Path, is_default: bool) -> io::Result<()> {
        if self.json() {
            let payload = serde_json::json!({
                "path": path,
                "is_default": is_default,
            });
            return self.print_json_with(
                "info",
                "Current output directory",
                "output_path",
                payload,
            );
        }
        if !self.quiet() {
            let suffix = if is_default { " (default)" } else { "" };
            writeln!(
                self.stdout(),
                "Current output directory: {}{}",
                path.display(),
                suffix
            )?;
        }
        Ok(())
    }

    /// Print output path changed message
    pub fn output_path_changed(&mut self, path: &Path) -> io::Result<()> {
        self.success(format!("Output path changed to: {}", path.display()))
    }

    /// Print reset message
    pub fn output_path_reset(&mut self, default: &Path, removed: bool) -> io::Result<()> {
        if removed {
            self.success(format!(
                "Output path reset to default: {}",
                default.display()
            ))
        } else {
            self.info(format!(
                "Output path already uses the default: {}",
                default.display()
            ))
        }
    }

    /// Print opened folder message
    pub fn opened(&mut self, path: &Path) -> io::Result<()> {
        self.info(format!("Opened {}", path.display()))
    }
}
