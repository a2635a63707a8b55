//! downsort - sort a downloads folder by file type
//!
//! This library classifies the top-level entries of one directory by
//! extension and moves them into per-category subfolders, with a dry-run mode
//! that only reports what it would do.

pub mod cli;
pub mod config;
pub mod file_category;
pub mod file_organizer;
pub mod logging;
pub mod move_log;
pub mod output;

pub use config::OrganizerConfig;
pub use file_category::{Category, CategoryTable};
pub use file_organizer::{Organizer, OrganizeError, RunSummary, organize};
pub use move_log::MoveRecord;

pub use cli::{OrganizeCommand, run_cli};
