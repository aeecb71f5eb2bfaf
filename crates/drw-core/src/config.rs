//! Watcher configuration, fixed at startup.
//!
//! There is no config file: the CLI resolves flags and defaults into one
//! `WatcherConfig`, injected into the watcher at construction.

use std::path::PathBuf;
use std::time::Duration;

use crate::relocate::CollisionPolicy;
use crate::stabilize::StabilizePolicy;

/// Subdirectory of the watch dir that receives renamed files by default.
pub const DEST_SUBDIR: &str = "renamed";

/// Everything one `DownloadWatcher` instance needs to run.
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// Directory whose create/move events are observed (non-recursive).
    pub watch_dir: PathBuf,
    /// Directory renamed files are moved into; created on startup if absent.
    pub dest_dir: PathBuf,
    /// Delay between stabilization and the context query, covering trailing
    /// writes the marker scheme does not capture.
    pub settle_delay: Duration,
    /// Placeholder recognition and bounded-wait parameters.
    pub stabilize: StabilizePolicy,
    /// Behavior when the destination name is already taken.
    pub collision: CollisionPolicy,
}

impl WatcherConfig {
    /// Defaults for a given watch directory: destination `<watch>/renamed`,
    /// 2 s settle delay, standard stabilization policy, silent overwrite.
    pub fn new(watch_dir: PathBuf) -> Self {
        let dest_dir = watch_dir.join(DEST_SUBDIR);
        Self {
            watch_dir,
            dest_dir,
            settle_delay: Duration::from_secs(2),
            stabilize: StabilizePolicy::default(),
            collision: CollisionPolicy::default(),
        }
    }
}
