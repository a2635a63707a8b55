//! Output formatting and styling module.
//!
//! All user-facing terminal output goes through [`OutputFormatter`] so the
//! organizer's messages share one look. Diagnostics go through `tracing`
//! instead (see the `logging` module of the binary).

use colored::*;

/// Manages all CLI output with consistent styling and formatting.
///
/// - Moves are printed in green
/// - Per-item failures are printed in red on stderr
/// - Dry-run notices are printed in yellow
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use downsort::output::OutputFormatter;
    /// OutputFormatter::success("Moved: report.pdf to Folder Documents/");
    /// ```
    pub fn success(message: &str) {
        println!("{}", message.green());
    }

    /// Prints an error message in red to stderr.
    pub fn error(message: &str) {
        eprintln!("{}", message.red());
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a bold line, used for the end-of-run summary.
    pub fn summary(message: &str) {
        println!("{}", message.bold());
    }

    /// Prints a dry-run notice message, prefixed with `[DRY RUN]`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use downsort::output::OutputFormatter;
    /// OutputFormatter::dry_run_notice("Would move file: photo.png -> Pictures/");
    /// ```
    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }
}
