//! Per-event failures: isolated, logged, never fatal to the watch loop.

use std::path::PathBuf;
use thiserror::Error;

/// Why processing of a single filesystem event stopped early. Every variant
/// is recovered by dropping the event.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The path disappeared before it could be handled (race with another
    /// process, or a placeholder that was cancelled).
    #[error("file vanished before processing: {}", path.display())]
    SourceVanished { path: PathBuf },

    /// The final move into the destination directory failed (permissions,
    /// disk full, exotic filesystem error). The file is left in place.
    #[error("could not relocate {}: {:#}", path.display(), cause)]
    Relocate { path: PathBuf, cause: anyhow::Error },
}
