//! Plain text move log.
//!
//! One line per event, appended to a file inside the target directory. The
//! file is opened for each write and closed again; nothing reads it back.

use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Timestamp format used in every log line, e.g. `19-10-2026 14:03:59`.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// A single successful move.
#[derive(Debug, Clone)]
pub struct MoveRecord {
    pub timestamp: DateTime<Local>,
    pub item_name: String,
    /// Folder the item was moved into.
    pub destination: PathBuf,
}

impl MoveRecord {
    pub fn new(item_name: &str, destination: &Path) -> Self {
        Self {
            timestamp: Local::now(),
            item_name: item_name.to_string(),
            destination: destination.to_path_buf(),
        }
    }

    /// Renders `[DD-MM-YYYY HH:MM:SS] Moved '<name>' to '<destination>'`.
    pub fn to_line(&self) -> String {
        format!(
            "[{}] Moved '{}' to '{}'",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.item_name,
            self.destination.display()
        )
    }
}

/// Handle to the log file path. Holds no open file.
#[derive(Debug, Clone)]
pub struct MoveLog {
    path: PathBuf,
}

impl MoveLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self, record: &MoveRecord) -> io::Result<()> {
        self.append_line(&record.to_line())
    }

    /// Writes the blank separator line and the run header.
    pub fn run_started(&self, at: DateTime<Local>) -> io::Result<()> {
        self.append_line(&format!(
            "\n--- Organizer Run Started at {} ---",
            at.format(TIMESTAMP_FORMAT)
        ))
    }

    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)
    }
}
