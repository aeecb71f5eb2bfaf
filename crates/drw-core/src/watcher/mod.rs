//! The watch loop: a long-lived service turning filesystem events into
//! renamed files.
//!
//! Single-worker by design: each event is handled to completion (including
//! the blocking stabilization wait) before the next is considered, so no two
//! events for the same path are ever in flight together.

mod error;
mod process;

pub use error::ProcessError;
pub use process::ActionRecord;

use anyhow::{Context, Result};
use notify::{RecursiveMode, Watcher};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::time::Duration;

use crate::config::WatcherConfig;
use crate::context::ContextProvider;
use crate::events;

/// How long the loop blocks on the event channel before re-checking the stop flag.
const CHANNEL_POLL: Duration = Duration::from_millis(200);

/// Long-lived watcher service: owns the configuration and the context
/// provider, both injected at construction.
pub struct DownloadWatcher {
    cfg: WatcherConfig,
    context: Box<dyn ContextProvider>,
}

impl DownloadWatcher {
    pub fn new(cfg: WatcherConfig, context: Box<dyn ContextProvider>) -> Self {
        Self { cfg, context }
    }

    pub fn config(&self) -> &WatcherConfig {
        &self.cfg
    }

    /// Runs the blocking watch loop until `stop` is set.
    ///
    /// Subscribes non-recursively to the watch directory, then drains events
    /// one at a time. Per-event failures are logged and dropped; only a
    /// failure to establish the subscription itself is returned. The
    /// subscription is released before returning so shutdown is clean.
    pub fn run(&self, stop: &AtomicBool) -> Result<()> {
        std::fs::create_dir_all(&self.cfg.dest_dir)
            .with_context(|| format!("create destination dir {}", self.cfg.dest_dir.display()))?;

        let (tx, rx) = mpsc::channel();
        let mut fs_watcher =
            notify::recommended_watcher(tx).context("create filesystem watcher")?;
        fs_watcher
            .watch(&self.cfg.watch_dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("watch {}", self.cfg.watch_dir.display()))?;

        println!("Listening for new files in {}...", self.cfg.watch_dir.display());
        tracing::info!(dir = %self.cfg.watch_dir.display(), "watch started");

        while !stop.load(Ordering::Relaxed) {
            let batch = match rx.recv_timeout(CHANNEL_POLL) {
                Ok(Ok(event)) => events::from_notify(event),
                Ok(Err(e)) => {
                    tracing::warn!("watch backend error: {}", e);
                    continue;
                }
                Err(mpsc::RecvTimeoutError::Timeout) => continue,
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    tracing::warn!("watch channel closed, stopping");
                    break;
                }
            };
            for event in batch {
                if stop.load(Ordering::Relaxed) {
                    break;
                }
                self.handle_event(event);
            }
        }

        let _ = fs_watcher.unwatch(&self.cfg.watch_dir);
        println!("Stopped.");
        tracing::info!("watch stopped");
        Ok(())
    }

    /// Handles one event; failures end the event, never the loop.
    fn handle_event(&self, event: events::WatchEvent) {
        tracing::debug!(kind = ?event.kind, path = %event.path.display(), "event");
        match self.process_path(&event.path) {
            Ok(Some(record)) => {
                println!("Renamed & moved: {}", record.destination.display());
            }
            Ok(None) => {}
            Err(e @ ProcessError::SourceVanished { .. }) => {
                tracing::debug!("{}", e);
            }
            Err(e) => {
                tracing::warn!("{}", e);
                println!("Could not rename {}: {:#}", event.path.display(), e);
            }
        }
    }
}
