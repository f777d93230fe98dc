use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::io::{self, IsTerminal, Write};
use std::time::Duration;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub mod config;
pub mod run;
pub mod status;

/// Output handler for user-facing messages
/// Uses Write trait for flexibility and testability
pub struct Output {
    stdout: StandardStream,
    stderr: StandardStream,
    quiet: bool,
    json: bool,
}

impl Output {
    /// Create a new Output instance
    pub fn new(quiet: bool, json: bool) -> Self {
        let color_choice = if std::io::stdout().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };

        Self {
            stdout: StandardStream::stdout(color_choice),
            stderr: StandardStream::stderr(color_choice),
            quiet,
            json,
        }
    }

    // ========== Basic Output Methods ==========

    /// Print an info message
    pub fn info(&mut self, msg: impl AsRef<str>) -> io::Result<()> {
        if !self.quiet {
            if self.json {
                self.print_json("info", msg.as_ref(), None)?;
            } else {
                writeln!(self.stdout, "{}", msg.as_ref())?;
            }
        }
        Ok(())
    }

    /// Print a success message (green)
    pub fn success(&mut self, msg: impl AsRef<str>) -> io::Result<()> {
        if !self.quiet {
            if self.json {
                self.print_json("success", msg.as_ref(), None)?;
            } else {
                self.stdout
                    .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                writeln!(self.stdout, "✓ {}", msg.as_ref())?;
                self.stdout.reset()?;
            }
        }
        Ok(())
    }

    /// Print an error message (red, always shown)
    pub fn error(&mut self, msg: impl AsRef<str>) -> io::Result<()> {
        if self.json {
            self.print_json("error", msg.as_ref(), None)?;
        } else {
            self.stderr
                .set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            writeln!(self.stderr, "✗ {}", msg.as_ref())?;
            self.stderr.reset()?;
        }
        Ok(())
    }

    /// Print a warning message (yellow)
    pub fn warn(&mut self, msg: impl AsRef<str>) -> io::Result<()> {
        if !self.quiet {
            if self.json {
                self.print_json("warn", msg.as_ref(), None)?;
            } else {
                self.stderr
                    .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                writeln!(self.stderr, "⚠ {}", msg.as_ref())?;
                self.stderr.reset()?;
            }
        }
        Ok(())
    }

    // ========== Spinner ==========

    /// Spinner shown while CFR runs (None if quiet, json, or not a terminal)
    pub fn create_spinner(&self, message: &str) -> Option<ProgressBar> {
        if self.quiet || self.json || !std::io::stderr().is_terminal() {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed}] {msg}")
        {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(120));
        Some(pb)
    }

    // ========== JSON Output ==========

    fn print_json(
        &mut self,
        level: &str,
        message: &str,
        payload: Option<(&str, Value)>,
    ) -> io::Result<()> {
        let json = json_line(level, message, payload);
        writeln!(self.stdout, "{}", json)?;
        Ok(())
    }

    // ========== Internal helpers for submodules ==========

    pub(crate) fn stdout(&mut self) -> &mut StandardStream {
        &mut self.stdout
    }

    pub(crate) fn stderr(&mut self) -> &mut StandardStream {
        &mut self.stderr
    }

    pub(crate) fn quiet(&self) -> bool {
        self.quiet
    }

    pub(crate) fn json(&self) -> bool {
        self.json
    }

    pub(crate) fn print_json_with(
        &mut self,
        level: &str,
        message: &str,
        key: &str,
        payload: Value,
    ) -> io::Result<()> {
        self.print_json(level, message, Some((key, payload)))
    }
}

fn json_line(level: &str, message: &str, payload: Option<(&str, Value)>) -> Value {
    let mut json = serde_json::json!({
        "level": level,
        "message": message,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });
    if let (Some((key, value)), Some(object)) = (payload, json.as_object_mut()) {
        object.insert(key.to_string(), value);
    }
    json
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_without_payload() {
        let json = json_line("info", "hello", None);
        assert_eq!(json["level"], "info");
        assert_eq!(json["message"], "hello");
        assert!(json["timestamp"].is_string());
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_json_line_with_payload() {
        let json = json_line(
            "error",
            "Decompile failed",
            Some(("outcome", serde_json::json!({"outcome": "tool_failure"}))),
        );
        assert_eq!(json["outcome"]["outcome"], "tool_failure");
    }
}
