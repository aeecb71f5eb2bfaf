//! Download stabilization: waiting out browser placeholder files.
//!
//! Browsers write an in-progress download to a marker file (`report.pdf.download`)
//! and swap it for the real file when the transfer finishes. This module turns
//! a possibly-placeholder path into the eventual stable path, with a bounded wait.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

/// Marker suffixes browsers append to downloads still in progress
/// (Safari, Chromium, Firefox respectively).
pub const DEFAULT_MARKERS: &[&str] = &[".download", ".crdownload", ".part"];

/// Outcome of waiting for a placeholder to settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The path is (or became) the completed download.
    Stable(PathBuf),
    /// The marker never resolved within the bound; carries the best-known path.
    TimedOut(PathBuf),
}

impl Resolution {
    /// The path to keep working with, whichever way the wait ended.
    pub fn into_path(self) -> PathBuf {
        match self {
            Resolution::Stable(p) | Resolution::TimedOut(p) => p,
        }
    }
}

/// How placeholder files are recognized and how long to wait for them.
/// All values are fixed at startup.
#[derive(Debug, Clone)]
pub struct StabilizePolicy {
    /// Filename suffixes that mark a download as in progress.
    pub markers: Vec<String>,
    /// Interval between existence checks while waiting.
    pub poll_interval: Duration,
    /// Upper bound on the whole wait; after this the marker path is used as-is.
    pub timeout: Duration,
}

impl Default for StabilizePolicy {
    fn default() -> Self {
        Self {
            markers: DEFAULT_MARKERS.iter().map(|s| (*s).to_string()).collect(),
            poll_interval: Duration::from_secs(1),
            timeout: Duration::from_secs(60),
        }
    }
}

impl StabilizePolicy {
    /// The marker suffix carried by `path`, if any.
    ///
    /// A file whose entire name is the suffix (e.g. a literal `.download`)
    /// is a hidden file, not a placeholder.
    pub fn marker_suffix(&self, path: &Path) -> Option<&str> {
        let name = path.file_name()?.to_str()?;
        self.markers
            .iter()
            .find(|m| name.len() > m.len() && name.ends_with(m.as_str()))
            .map(String::as_str)
    }

    /// The expected completed path: `path` with its marker suffix stripped.
    /// `None` when `path` carries no marker.
    pub fn final_path(&self, path: &Path) -> Option<PathBuf> {
        let suffix = self.marker_suffix(path)?;
        let name = path.file_name()?.to_str()?;
        let stem = &name[..name.len() - suffix.len()];
        Some(path.with_file_name(stem))
    }

    /// Blocks until `path` has become its completed form, or the bound elapses.
    ///
    /// A path without a marker suffix is already stable and returns
    /// immediately, with no polling delay. Otherwise the placeholder is polled
    /// until it is gone and the stripped path exists; if that never happens
    /// within `timeout` (including the case where the marker disappears but
    /// the final file never shows up), the original marker path is returned
    /// and a warning is logged.
    pub fn wait_for_stable(&self, path: &Path) -> Resolution {
        let final_path = match self.final_path(path) {
            Some(p) => p,
            None => return Resolution::Stable(path.to_path_buf()),
        };

        tracing::info!(path = %path.display(), "waiting for download to finish");
        let start = Instant::now();

        while start.elapsed() < self.timeout {
            if !path.exists() && final_path.exists() {
                tracing::info!(path = %final_path.display(), "download complete");
                return Resolution::Stable(final_path);
            }
            thread::sleep(self.poll_interval);
        }

        tracing::warn!(path = %path.display(), "timed out waiting for download to finish");
        Resolution::TimedOut(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn fast_policy() -> StabilizePolicy {
        StabilizePolicy {
            poll_interval: Duration::from_millis(20),
            timeout: Duration::from_millis(200),
            ..StabilizePolicy::default()
        }
    }

    #[test]
    fn marker_suffix_detection() {
        let p = StabilizePolicy::default();
        assert_eq!(
            p.marker_suffix(Path::new("/d/report.pdf.download")),
            Some(".download")
        );
        assert_eq!(
            p.marker_suffix(Path::new("/d/setup.exe.crdownload")),
            Some(".crdownload")
        );
        assert_eq!(p.marker_suffix(Path::new("/d/iso.part")), Some(".part"));
        assert_eq!(p.marker_suffix(Path::new("/d/report.pdf")), None);
        // A bare marker name is a hidden file, not a placeholder.
        assert_eq!(p.marker_suffix(Path::new("/d/.download")), None);
    }

    #[test]
    fn final_path_strips_marker() {
        let p = StabilizePolicy::default();
        assert_eq!(
            p.final_path(Path::new("/d/report.pdf.download")),
            Some(PathBuf::from("/d/report.pdf"))
        );
        assert_eq!(p.final_path(Path::new("/d/report.pdf")), None);
    }

    #[test]
    fn stable_path_returns_without_polling() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("photo.jpg");
        fs::write(&file, b"x").unwrap();

        let policy = fast_policy();
        let start = Instant::now();
        let res = policy.wait_for_stable(&file);
        assert_eq!(res, Resolution::Stable(file));
        assert!(start.elapsed() < policy.poll_interval);
    }

    #[test]
    fn marker_resolves_when_final_file_appears() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("report.pdf.download");
        let final_file = dir.path().join("report.pdf");
        fs::write(&marker, b"partial").unwrap();

        let policy = StabilizePolicy {
            poll_interval: Duration::from_millis(10),
            timeout: Duration::from_secs(5),
            ..StabilizePolicy::default()
        };

        let m = marker.clone();
        let f = final_file.clone();
        let writer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(60));
            fs::write(&f, b"complete").unwrap();
            fs::remove_file(&m).unwrap();
        });

        let res = policy.wait_for_stable(&marker);
        writer.join().unwrap();
        assert_eq!(res, Resolution::Stable(final_file));
    }

    #[test]
    fn unresolved_marker_times_out_with_original_path() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("report.pdf.download");
        fs::write(&marker, b"partial").unwrap();

        let policy = fast_policy();
        let start = Instant::now();
        let res = policy.wait_for_stable(&marker);
        let elapsed = start.elapsed();

        assert_eq!(res, Resolution::TimedOut(marker));
        assert!(elapsed >= policy.timeout);
        assert!(elapsed < policy.timeout + Duration::from_millis(500));
    }

    #[test]
    fn vanished_marker_without_final_file_still_times_out() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("gone.zip.crdownload");
        fs::write(&marker, b"partial").unwrap();

        let policy = fast_policy();
        let m = marker.clone();
        let canceller = thread::spawn(move || {
            thread::sleep(Duration::from_millis(40));
            fs::remove_file(&m).unwrap();
        });

        let res = policy.wait_for_stable(&marker);
        canceller.join().unwrap();
        assert_eq!(res, Resolution::TimedOut(marker));
    }
}
