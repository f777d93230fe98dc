use super::Output;
use crate::commands::status::StatusReport;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

impl Output {
    /// Print the resolved paths and CFR core status
    pub fn status(&mut self, report: &StatusReport) -> io::Result<()> {
        if self.json() {
            let payload = serde_json::to_value(report).map_err(io::Error::other)?;
            let level = if report.tool_found { "info" } else { "warn" };
            return self.print_json_with(level, "Status", "status", payload);
        }
        if self.quiet() {
            return Ok(());
        }

        writeln!(
            self.stdout(),
            "Base directory:   {} ({:?})",
            report.base_dir.display(),
            report.launch_mode
        )?;
        writeln!(
            self.stdout(),
            "Output directory: {}{}",
            report.output_dir.display(),
            if report.output_is_default {
                " (default)"
            } else {
                ""
            }
        )?;
        writeln!(
            self.stdout(),
            "Config file:      {}",
            report.config_file.display()
        )?;
        writeln!(self.stdout(), "Today's log:      {}", report.log_file.display())?;

        write!(self.stdout(), "CFR core path:    ")?;
        if report.tool_found {
            self.stdout()
                .set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
            writeln!(self.stdout(), "{}", report.tool_path.display())?;
        } else {
            self.stdout()
                .set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            writeln!(
                self.stdout(),
                "not found, please check the 'cfr' folder ({})",
                report.tool_path.display()
            )?;
        }
        self.stdout().reset()?;

        match &report.java {
            Some(java) => writeln!(self.stdout(), "Java:             {}", java.display())?,
            None => self.warn("Java was not found on PATH")?,
        }
        Ok(())
    }
}
