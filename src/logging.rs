//! Tracing initialization.
//!
//! Diagnostics go to stderr so they never mix with the organizer's own
//! stdout messages. `RUST_LOG` wins when set; otherwise the level comes from
//! the verbosity flag.

use chrono::Local;
use std::fmt as stdfmt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Local timestamps in the same shape as the move log.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format(crate::move_log::TIMESTAMP_FORMAT))
    }
}

/// Default filter directive for a verbosity flag.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Installs the global subscriber. Calling it twice is harmless; the second
/// call leaves the first subscriber in place.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
