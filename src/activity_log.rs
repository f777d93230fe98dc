//! Append-only, date-partitioned activity log (`log/log_YYYY-MM-DD.txt`).
//!
//! This is the user-facing record of decompile attempts. Diagnostics go
//! through `tracing` instead.

use crate::utils::path::log_file_in;
use chrono::{Local, NaiveDateTime};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Sink for one-line activity entries. Writing never fails from the caller's
/// point of view.
pub trait ActivityLog: Send + Sync {
    fn log(&self, message: &str);
}

/// Source of the local wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Writes `[YYYY-MM-DD HH:MM:SS] message` lines into one file per day.
#[derive(Debug)]
pub struct DailyFileLog<C: Clock = SystemClock> {
    log_dir: PathBuf,
    clock: C,
}

impl DailyFileLog<SystemClock> {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self::with_clock(log_dir, SystemClock)
    }
}

impl<C: Clock> DailyFileLog<C> {
    pub fn with_clock(log_dir: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            log_dir: log_dir.into(),
            clock,
        }
    }

    fn append(&self, message: &str) -> std::io::Result<PathBuf> {
        let now = self.clock.now();
        let path = log_file_in(&self.log_dir, now.date());

        std::fs::create_dir_all(&self.log_dir)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{}", format_entry(now, message))?;
        Ok(path)
    }
}

impl<C: Clock> ActivityLog for DailyFileLog<C> {
    fn log(&self, message: &str) {
        match self.append(message) {
            Ok(path) => tracing::debug!("Activity logged to {}: {}", path.display(), message),
            Err(e) => tracing::warn!("Failed to write activity log: {}", e),
        }
    }
}

/// One log line, without the trailing newline. Multi-line messages are
/// folded so every entry stays on a single line.
pub fn format_entry(at: NaiveDateTime, message: &str) -> String {
    let flattened = message
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" | ");
    format!("[{}] {}", at.format("%Y-%m-%d %H:%M:%S"), flattened)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Clock whose time can be moved by the test
    pub(crate) struct ManualClock(Mutex<NaiveDateTime>);

    impl ManualClock {
        pub(crate) fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Self {
            Self(Mutex::new(datetime(y, m, d, h, min, s)))
        }

        pub(crate) fn set(&self, at: NaiveDateTime) {
            *self.0.lock().unwrap() = at;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> NaiveDateTime {
            *self.0.lock().unwrap()
        }
    }

    /// Keeps entries in memory for assertions
    #[derive(Default)]
    pub(crate) struct RecordingLog(Mutex<Vec<String>>);

    impl RecordingLog {
        pub(crate) fn entries(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl ActivityLog for RecordingLog {
        fn log(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    pub(crate) fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_format_entry() {
        let at = datetime(2024, 1, 2, 3, 4, 5);
        assert_eq!(
            format_entry(at, "Start decompiling: a.jar"),
            "[2024-01-02 03:04:05] Start decompiling: a.jar"
        );
    }

    #[test]
    fn test_format_entry_flattens_multiline_messages() {
        let at = datetime(2024, 1, 2, 3, 4, 5);
        assert_eq!(
            format_entry(at, "Decompile failed: line one\nline two\n"),
            "[2024-01-02 03:04:05] Decompile failed: line one | line two"
        );
    }

    #[test]
    fn test_creates_log_dir_and_appends() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("log");
        let log = DailyFileLog::with_clock(&log_dir, ManualClock::at(2024, 5, 1, 9, 0, 0));

        log.log("first");
        log.log("second");

        let content = fs::read_to_string(log_dir.join("log_2024-05-01.txt")).unwrap();
        assert_eq!(
            content,
            "[2024-05-01 09:00:00] first\n[2024-05-01 09:00:00] second\n"
        );
    }

    #[test]
    fn test_date_change_starts_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let clock = ManualClock::at(2024, 5, 1, 23, 59, 59);
        let log = DailyFileLog::with_clock(temp_dir.path(), clock);

        log.log("before midnight");
        log.clock.set(datetime(2024, 5, 2, 0, 0, 1));
        log.log("after midnight");

        let day1 = fs::read_to_string(temp_dir.path().join("log_2024-05-01.txt")).unwrap();
        let day2 = fs::read_to_string(temp_dir.path().join("log_2024-05-02.txt")).unwrap();

        assert_eq!(day1, "[2024-05-01 23:59:59] before midnight\n");
        assert_eq!(day2, "[2024-05-02 00:00:01] after midnight\n");
    }

    #[test]
    fn test_existing_entries_are_preserved() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log_2024-05-01.txt");
        fs::write(&path, "[2024-05-01 08:00:00] earlier\n").unwrap();

        let log = DailyFileLog::with_clock(temp_dir.path(), ManualClock::at(2024, 5, 1, 9, 0, 0));
        log.log("later");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[2024-05-01 08:00:00] earlier\n"));
        assert!(content.ends_with("[2024-05-01 09:00:00] later\n"));
    }

    #[test]
    fn test_write_failure_is_silent() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the log directory should be
        let blocker = temp_dir.path().join("log");
        fs::write(&blocker, "not a dir").unwrap();

        let log = DailyFileLog::with_clock(&blocker, ManualClock::at(2024, 5, 1, 9, 0, 0));
        log.log("dropped");

        assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a dir");
    }
}
