//! File organization: one pass over the top level of a target directory.
//!
//! Files are moved into `<target>/<Category>/` according to the category
//! table, and stray subdirectories into `<target>/Folders/`. Folders the
//! organizer itself manages are recognized and left alone, so running twice
//! moves nothing the second time.
//!
//! A failure to move one item never aborts the pass: each item yields an
//! [`ItemOutcome`] and failures are collected into the [`RunSummary`]. The only
//! error [`Organizer::run`] returns is the one that prevents the pass from
//! starting at all.

use crate::config::OrganizerConfig;
use crate::file_category::FOLDERS_DIR;
use crate::move_log::{MoveLog, MoveRecord};
use crate::output::OutputFormatter;
use chrono::Local;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during file organization.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// The target directory could not be listed; the pass cannot begin.
    #[error("Cannot read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to create a category or holding folder.
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Something already occupies the destination path; it is never overwritten.
    #[error("Destination already exists: {}", .path.display())]
    DestinationExists { path: PathBuf },
    /// The move itself failed (permissions, cross-device, ...).
    #[error("Failed to move {} to {}: {source}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Kind of a top-level entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A file or directory found directly inside the target directory.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// A move computed for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    pub name: String,
    pub kind: EntryKind,
    /// Category name, or `Folders` for directories.
    pub folder: String,
    /// Full destination path, `<target>/<folder>/<name>`.
    pub destination: PathBuf,
}

/// What happened to one entry.
#[derive(Debug)]
pub enum ItemOutcome {
    /// Dry run: the move was reported but not performed.
    Planned(PlannedMove),
    Moved(PlannedMove),
    Failed {
        planned: PlannedMove,
        error: OrganizeError,
    },
}

/// A per-item failure kept for the summary.
#[derive(Debug)]
pub struct ItemFailure {
    pub name: String,
    pub error: OrganizeError,
}

/// Totals for one pass.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub dry_run: bool,
    pub files_moved: usize,
    pub folders_moved: usize,
    /// Moves reported by a dry run.
    pub planned: Vec<PlannedMove>,
    pub failures: Vec<ItemFailure>,
}

impl RunSummary {
    /// The summary line printed and logged after an execute run.
    pub fn message(&self) -> String {
        format!(
            "Summary: {} files moved, {} folders moved.",
            self.files_moved, self.folders_moved
        )
    }

    fn absorb(&mut self, outcome: ItemOutcome) {
        match outcome {
            ItemOutcome::Planned(planned) => self.planned.push(planned),
            ItemOutcome::Moved(moved) => match moved.kind {
                EntryKind::File => self.files_moved += 1,
                EntryKind::Directory => self.folders_moved += 1,
            },
            ItemOutcome::Failed { planned, error } => self.failures.push(ItemFailure {
                name: planned.name,
                error,
            }),
        }
    }
}

/// Sorts the top level of one directory into category folders.
pub struct Organizer {
    config: OrganizerConfig,
    log: MoveLog,
}

impl Organizer {
    pub fn new(config: OrganizerConfig) -> Self {
        let log = MoveLog::new(config.log_file_path());
        Self { config, log }
    }

    pub fn config(&self) -> &OrganizerConfig {
        &self.config
    }

    /// Runs one pass over the target directory.
    ///
    /// In dry-run mode nothing on disk changes, the move log included.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizeError::ReadDir`] if the target directory cannot be
    /// listed. Per-item failures are reported in the returned summary instead.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use downsort::config::OrganizerConfig;
    /// use downsort::file_organizer::Organizer;
    ///
    /// let organizer = Organizer::new(OrganizerConfig::new("/home/me/Downloads"));
    /// let summary = organizer.run(true).expect("scan failed");
    /// println!("{} moves planned", summary.planned.len());
    /// ```
    pub fn run(&self, dry_run: bool) -> OrganizeResult<RunSummary> {
        let entries = self.scan()?;
        debug!(
            target_dir = %self.config.target_dir().display(),
            entries = entries.len(),
            dry_run,
            "scanned target directory"
        );

        if !dry_run && let Err(e) = self.log.run_started(Local::now()) {
            warn!(log = %self.log.path().display(), error = %e, "could not write run header");
        }

        let mut summary = RunSummary {
            dry_run,
            ..Default::default()
        };

        for entry in &entries {
            if let Some(planned) = self.plan(entry) {
                let outcome = if dry_run {
                    self.simulate(planned)
                } else {
                    self.execute(planned, &entry.path)
                };
                summary.absorb(outcome);
            }
        }

        if !dry_run {
            let message = summary.message();
            OutputFormatter::summary(&message);
            if let Err(e) = self.log.append_line(&message) {
                warn!(log = %self.log.path().display(), error = %e, "could not write summary");
            }
        }

        Ok(summary)
    }

    /// Lists the target directory once, dropping hidden entries, the log file
    /// and anything that is neither a file nor a directory.
    pub fn scan(&self) -> OrganizeResult<Vec<Entry>> {
        let target_dir = self.config.target_dir();
        let read_dir = fs::read_dir(target_dir).map_err(|e| OrganizeError::ReadDir {
            path: target_dir.to_path_buf(),
            source: e,
        })?;

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = match dir_entry {
                Ok(dir_entry) => dir_entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };

            let name = dir_entry.file_name().to_string_lossy().to_string();
            if self.is_ignored(&name) {
                debug!(name = %name, "ignoring hidden or log entry");
                continue;
            }

            let path = dir_entry.path();
            // Follows symlinks, so a link to a file counts as a file.
            let kind = match fs::metadata(&path) {
                Ok(meta) if meta.is_file() => EntryKind::File,
                Ok(meta) if meta.is_dir() => EntryKind::Directory,
                Ok(_) => {
                    debug!(name = %name, "skipping special file");
                    continue;
                }
                Err(e) => {
                    debug!(name = %name, error = %e, "skipping entry without metadata");
                    continue;
                }
            };

            entries.push(Entry { name, path, kind });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Hidden entries and the move log itself are never classified or moved.
    fn is_ignored(&self, name: &str) -> bool {
        name.starts_with('.') || name == self.config.log_file_name()
    }

    /// Computes where an entry should go. Directories the organizer manages
    /// yield `None`.
    pub fn plan(&self, entry: &Entry) -> Option<PlannedMove> {
        let folder = match entry.kind {
            EntryKind::File => self.config.table().classify(&entry.name).to_string(),
            EntryKind::Directory => {
                if self.config.is_managed_dir_name(&entry.name) {
                    debug!(name = %entry.name, "leaving managed folder in place");
                    return None;
                }
                FOLDERS_DIR.to_string()
            }
        };

        // Join the raw file name so non-UTF-8 names survive the move.
        let file_name = entry
            .path
            .file_name()
            .unwrap_or_else(|| OsStr::new(&entry.name));
        let destination = self.config.target_dir().join(&folder).join(file_name);

        Some(PlannedMove {
            name: entry.name.clone(),
            kind: entry.kind,
            folder,
            destination,
        })
    }

    fn simulate(&self, planned: PlannedMove) -> ItemOutcome {
        let message = match planned.kind {
            EntryKind::File => format!("Would move file: {} -> {}/", planned.name, planned.folder),
            EntryKind::Directory => {
                format!("Would move folder: {} -> {}/", planned.name, planned.folder)
            }
        };
        OutputFormatter::dry_run_notice(&message);
        ItemOutcome::Planned(planned)
    }

    fn execute(&self, planned: PlannedMove, source: &Path) -> ItemOutcome {
        let folder_path = self.config.target_dir().join(&planned.folder);

        match move_into(source, &folder_path, &planned.destination) {
            Ok(()) => {
                let message = match planned.kind {
                    EntryKind::File => {
                        format!("Moved: {} to Folder {}/", planned.name, planned.folder)
                    }
                    EntryKind::Directory => {
                        format!("Moved Folder: {} to {}/", planned.name, planned.folder)
                    }
                };
                OutputFormatter::success(&message);
                info!(name = %planned.name, dest = %planned.destination.display(), "moved");

                if let Err(e) = self.log.record(&MoveRecord::new(&planned.name, &folder_path)) {
                    warn!(log = %self.log.path().display(), error = %e, "could not write move record");
                }
                ItemOutcome::Moved(planned)
            }
            Err(error) => {
                OutputFormatter::error(&format!("Could not move {}: {}", planned.name, error));
                warn!(name = %planned.name, error = %error, "move failed");
                ItemOutcome::Failed { planned, error }
            }
        }
    }
}

/// Moves `source` to `destination`, creating `folder` first if needed.
///
/// An existing destination is reported as [`OrganizeError::DestinationExists`]
/// rather than overwritten, whatever the platform's rename would do.
pub fn move_into(source: &Path, folder: &Path, destination: &Path) -> OrganizeResult<()> {
    fs::create_dir_all(folder).map_err(|e| OrganizeError::CreateDir {
        path: folder.to_path_buf(),
        source: e,
    })?;

    if fs::symlink_metadata(destination).is_ok() {
        return Err(OrganizeError::DestinationExists {
            path: destination.to_path_buf(),
        });
    }

    fs::rename(source, destination).map_err(|e| OrganizeError::Move {
        from: source.to_path_buf(),
        to: destination.to_path_buf(),
        source: e,
    })
}

/// Organizes `target_dir` with the default configuration.
///
/// # Examples
///
/// ```no_run
/// use downsort::file_organizer::organize;
/// use std::path::Path;
///
/// match organize(Path::new("/home/me/Downloads"), false) {
///     Ok(summary) => println!("{}", summary.message()),
///     Err(e) => eprintln!("Organization failed: {}", e),
/// }
/// ```
pub fn organize(target_dir: &Path, dry_run: bool) -> OrganizeResult<RunSummary> {
    Organizer::new(OrganizerConfig::new(target_dir)).run(dry_run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn organizer_for(temp_dir: &TempDir) -> Organizer {
        Organizer::new(OrganizerConfig::new(temp_dir.path()))
    }

    #[test]
    fn test_move_into_creates_folder() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let file_path = base_path.join("test.txt");
        fs::write(&file_path, "test content").expect("Failed to write test file");

        let folder = base_path.join("Text Files");
        move_into(&file_path, &folder, &folder.join("test.txt")).expect("Failed to move file");

        assert!(folder.is_dir());
        assert!(!file_path.exists());
        assert!(folder.join("test.txt").exists());
    }

    #[test]
    fn test_move_into_uses_existing_folder() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let folder = base_path.join("Pictures");
        fs::create_dir(&folder).expect("Failed to create category directory");
        fs::write(folder.join("old.png"), "old").unwrap();

        let file_path = base_path.join("test.png");
        fs::write(&file_path, "test content").expect("Failed to write test file");

        move_into(&file_path, &folder, &folder.join("test.png")).expect("Failed to move file");

        assert!(folder.join("test.png").exists());
        assert!(folder.join("old.png").exists());
    }

    #[test]
    fn test_move_into_refuses_existing_destination() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let folder = base_path.join("Documents");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("report.pdf"), "organized").unwrap();
        fs::write(base_path.join("report.pdf"), "new").unwrap();

        let result = move_into(
            &base_path.join("report.pdf"),
            &folder,
            &folder.join("report.pdf"),
        );

        assert!(matches!(
            result,
            Err(OrganizeError::DestinationExists { .. })
        ));
        assert_eq!(fs::read_to_string(folder.join("report.pdf")).unwrap(), "organized");
        assert_eq!(fs::read_to_string(base_path.join("report.pdf")).unwrap(), "new");
    }

    #[test]
    fn test_move_into_reports_folder_creation_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        // A file squatting on the category name blocks the folder.
        fs::write(base_path.join("Others"), "squatter").unwrap();
        fs::write(base_path.join("thing.xyz"), "x").unwrap();

        let folder = base_path.join("Others");
        let result = move_into(&base_path.join("thing.xyz"), &folder, &folder.join("thing.xyz"));

        assert!(matches!(result, Err(OrganizeError::CreateDir { .. })));
        assert!(base_path.join("thing.xyz").exists());
    }

    #[test]
    fn test_scan_skips_hidden_and_log() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        fs::write(base_path.join(".secret"), "x").unwrap();
        fs::write(base_path.join("download_organizer.log"), "x").unwrap();
        fs::create_dir(base_path.join(".cache")).unwrap();
        fs::write(base_path.join("b.txt"), "x").unwrap();
        fs::create_dir(base_path.join("a_dir")).unwrap();

        let entries = organizer_for(&temp_dir).scan().expect("scan");
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["a_dir", "b.txt"]);
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[1].kind, EntryKind::File);
    }

    #[test]
    fn test_scan_missing_directory_is_fatal() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config = OrganizerConfig::new(temp_dir.path().join("nope"));

        let result = Organizer::new(config).scan();
        assert!(matches!(result, Err(OrganizeError::ReadDir { .. })));
    }

    #[test]
    fn test_plan_file_and_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let organizer = organizer_for(&temp_dir);

        let file = Entry {
            name: "photo.png".to_string(),
            path: temp_dir.path().join("photo.png"),
            kind: EntryKind::File,
        };
        let planned = organizer.plan(&file).expect("file is planned");
        assert_eq!(planned.folder, "Pictures");
        assert_eq!(
            planned.destination,
            temp_dir.path().join("Pictures").join("photo.png")
        );

        let dir = Entry {
            name: "ProjectX".to_string(),
            path: temp_dir.path().join("ProjectX"),
            kind: EntryKind::Directory,
        };
        let planned = organizer.plan(&dir).expect("stray dir is planned");
        assert_eq!(planned.folder, "Folders");
        assert_eq!(
            planned.destination,
            temp_dir.path().join("Folders").join("ProjectX")
        );
    }

    #[test]
    fn test_plan_skips_managed_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let organizer = organizer_for(&temp_dir);

        for name in ["Documents", "Others", "Folders", "Patch Files"] {
            let entry = Entry {
                name: name.to_string(),
                path: temp_dir.path().join(name),
                kind: EntryKind::Directory,
            };
            assert!(organizer.plan(&entry).is_none(), "{} should be skipped", name);
        }
    }

    #[test]
    fn test_plan_file_named_like_category_is_still_classified() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let organizer = organizer_for(&temp_dir);

        let entry = Entry {
            name: "Documents".to_string(),
            path: temp_dir.path().join("Documents"),
            kind: EntryKind::File,
        };
        let planned = organizer.plan(&entry).expect("files are always planned");
        assert_eq!(planned.folder, "Others");
    }

    #[test]
    fn test_summary_counts_and_failures() {
        let mut summary = RunSummary::default();
        let file = PlannedMove {
            name: "a.txt".to_string(),
            kind: EntryKind::File,
            folder: "Text Files".to_string(),
            destination: PathBuf::from("Text Files/a.txt"),
        };
        let dir = PlannedMove {
            name: "d".to_string(),
            kind: EntryKind::Directory,
            folder: "Folders".to_string(),
            destination: PathBuf::from("Folders/d"),
        };

        summary.absorb(ItemOutcome::Moved(file.clone()));
        summary.absorb(ItemOutcome::Moved(dir));
        summary.absorb(ItemOutcome::Failed {
            planned: file,
            error: OrganizeError::DestinationExists {
                path: PathBuf::from("Text Files/a.txt"),
            },
        });

        assert_eq!(summary.files_moved, 1);
        assert_eq!(summary.folders_moved, 1);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].name, "a.txt");
        assert_eq!(summary.message(), "Summary: 1 files moved, 1 folders moved.");
    }

    #[test]
    fn test_run_dry_run_changes_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        fs::write(base_path.join("a.pdf"), "x").unwrap();
        fs::create_dir(base_path.join("stuff")).unwrap();

        let summary = organizer_for(&temp_dir).run(true).expect("run");

        assert!(summary.dry_run);
        assert_eq!(summary.planned.len(), 2);
        assert_eq!(summary.files_moved, 0);
        assert!(base_path.join("a.pdf").exists());
        assert!(base_path.join("stuff").is_dir());
        assert!(!base_path.join("Documents").exists());
        assert!(!base_path.join("Folders").exists());
        assert!(!base_path.join("download_organizer.log").exists());
    }
}
