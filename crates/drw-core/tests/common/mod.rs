//! Shared helpers for watcher integration tests.

use drw_core::config::WatcherConfig;
use std::path::Path;
use std::time::{Duration, Instant};

/// Config tuned for tests: millisecond delays so scenarios finish quickly.
pub fn test_config(watch_dir: &Path) -> WatcherConfig {
    let mut cfg = WatcherConfig::new(watch_dir.to_path_buf());
    cfg.settle_delay = Duration::from_millis(10);
    cfg.stabilize.poll_interval = Duration::from_millis(20);
    cfg.stabilize.timeout = Duration::from_millis(400);
    cfg
}

/// Polls `predicate` until it holds or `timeout` elapses.
pub fn wait_until(timeout: Duration, mut predicate: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if predicate() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    predicate()
}
