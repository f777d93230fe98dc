use super::Output;
use crate::runner::Outcome;
use console::Emoji;
use std::io::{self, Write};
use std::path::Path;

impl Output {
    /// Print which file is about to be decompiled and where it goes
    pub fn decompile_started(&mut self, input: &Path, output_dir: &Path) -> io::Result<()> {
        if !self.quiet() && !self.json() {
            writeln!(self.stdout(), "Decompiling {}", input.display())?;
            writeln!(self.stdout(), "Output directory: {}", output_dir.display())?;
        }
        Ok(())
    }

    /// Report the result of a decompile attempt
    pub fn outcome(&mut self, outcome: &Outcome, java_files: Option<usize>) -> io::Result<()> {
        if self.json() {
            let payload = serde_json::to_value(outcome).map_err(io::Error::other)?;
            let (level, message) = match outcome {
                Outcome::Success { .. } => ("success", "Decompile finished"),
                Outcome::MissingInput => ("error", "No input file selected"),
                Outcome::ToolNotFound { .. } => ("error", "cfr.jar not found"),
                Outcome::ToolFailure { .. } => ("error", "Decompile failed"),
                Outcome::ExecutionError { .. } => ("error", "Execution error"),
            };
            return self.print_json_with(level, message, "outcome", payload);
        }

        match outcome {
            Outcome::Success { output_dir, .. } => {
                self.success(format!(
                    "Decompile finished! Files saved to: {}",
                    output_dir.display()
                ))?;
                if let Some(count) = java_files {
                    self.info(format!(
                        "{}The output directory now holds {} Java source file{}",
                        Emoji("📦 ", ""),
                        count,
                        if count == 1 { "" } else { "s" }
                    ))?;
                }
            }
            Outcome::MissingInput => {
                self.error("Please select an input file!")?;
                writeln!(
                    self.stderr(),
                    "\nUsage: cfr-launcher run <INPUT> [-- CFR_ARGS]...\n"
                )?;
                writeln!(self.stderr(), "Example:\n  cfr-launcher run app.jar")?;
            }
            Outcome::ToolNotFound { expected } => {
                self.error("CFR core not found")?;
                writeln!(
                    self.stderr(),
                    "Please place cfr.jar inside the 'cfr' folder: {}",
                    expected.display()
                )?;
            }
            Outcome::ToolFailure { exit_code, stderr } => {
                match exit_code {
                    Some(code) => self.error(format!("Decompile failed (exit code {})", code))?,
                    None => self.error("Decompile failed (terminated by signal)")?,
                }
                let detail = stderr.trim();
                if !detail.is_empty() {
                    writeln!(self.stderr(), "{}", detail)?;
                }
            }
            Outcome::ExecutionError { message } => {
                self.error(format!("Execution error: {}", message))?;
                writeln!(
                    self.stderr(),
                    "Check that Java is installed, or point --java at a java executable."
                )?;
            }
        }
        Ok(())
    }
}
