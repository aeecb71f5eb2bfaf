//! Per-event pipeline: detected path to relocated file.

use std::path::{Path, PathBuf};
use std::thread;

use crate::naming;
use crate::relocate;
use crate::stabilize::Resolution;

use super::error::ProcessError;
use super::DownloadWatcher;

/// Terminal record of one successful rename. Created once per resolved
/// download, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ActionRecord {
    /// The stable file that was picked up (marker suffix already resolved).
    pub original_path: PathBuf,
    /// Raw context string at the moment of resolution (may be empty).
    pub context: String,
    /// Filesystem-safe base name derived from the context.
    pub sanitized_name: String,
    /// Where the file ended up.
    pub destination: PathBuf,
}

impl DownloadWatcher {
    /// Drives one detected path to completion: stabilize, settle, fetch
    /// context, derive the name, relocate.
    ///
    /// `Ok(None)` means the path needs no action (a directory, or a file
    /// already sitting in the destination). A stabilization timeout is not an
    /// error: processing continues with the marker path, mirroring a warning
    /// in the log.
    pub fn process_path(&self, path: &Path) -> Result<Option<ActionRecord>, ProcessError> {
        if !path.exists() {
            return Err(ProcessError::SourceVanished {
                path: path.to_path_buf(),
            });
        }
        if path.is_dir() {
            return Ok(None);
        }
        // Moves into the destination echo back as events on some platforms;
        // processing those again would rename files in a loop.
        if path.parent() == Some(self.cfg.dest_dir.as_path()) {
            return Ok(None);
        }

        println!("New or updated file detected: {}", file_label(path));

        let resolved = match self.cfg.stabilize.wait_for_stable(path) {
            Resolution::Stable(p) => p,
            // Best-known path; the timeout itself was already logged.
            Resolution::TimedOut(p) => p,
        };

        // Trailing writes are not always covered by the marker scheme.
        thread::sleep(self.cfg.settle_delay);

        let context = self.context.current_context();
        if context.is_empty() {
            tracing::debug!("no context available, using the fallback name");
        }
        let base = naming::sanitize_context(&context);

        if !resolved.exists() {
            return Err(ProcessError::SourceVanished { path: resolved });
        }

        let destination =
            relocate::relocate(&resolved, &self.cfg.dest_dir, &base, self.cfg.collision)
                .map_err(|cause| ProcessError::Relocate {
                    path: resolved.clone(),
                    cause,
                })?;

        tracing::info!(
            from = %resolved.display(),
            to = %destination.display(),
            "renamed"
        );

        Ok(Some(ActionRecord {
            original_path: resolved,
            context,
            sanitized_name: base,
            destination,
        }))
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
