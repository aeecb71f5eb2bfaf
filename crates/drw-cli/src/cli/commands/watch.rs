//! `drw watch` – run the watch loop until interrupted.

use anyhow::{Context, Result};
use drw_core::config::WatcherConfig;
use drw_core::context::{CommandContext, ContextProvider};
use drw_core::relocate::CollisionPolicy;
use drw_core::shutdown;
use drw_core::watcher::DownloadWatcher;
use std::path::PathBuf;
use std::time::Duration;

pub fn run_watch(
    watch_dir: Option<PathBuf>,
    dest_dir: Option<PathBuf>,
    timeout_secs: u64,
    poll_ms: u64,
    settle_secs: u64,
    on_collision: CollisionPolicy,
    context_cmd: Option<String>,
) -> Result<()> {
    let watch_dir = match watch_dir {
        Some(dir) => dir,
        None => default_watch_dir()?,
    };
    anyhow::ensure!(
        watch_dir.is_dir(),
        "watch directory {} does not exist",
        watch_dir.display()
    );

    let mut cfg = WatcherConfig::new(watch_dir);
    if let Some(dest) = dest_dir {
        cfg.dest_dir = dest;
    }
    cfg.stabilize.timeout = Duration::from_secs(timeout_secs);
    cfg.stabilize.poll_interval = Duration::from_millis(poll_ms);
    cfg.settle_delay = Duration::from_secs(settle_secs);
    cfg.collision = on_collision;
    tracing::debug!("watcher config: {:?}", cfg);

    let watcher = DownloadWatcher::new(cfg, context_provider(context_cmd));

    shutdown::install_handlers();
    watcher.run(shutdown::flag())
}

/// The user's Downloads directory.
fn default_watch_dir() -> Result<PathBuf> {
    let dirs = directories::UserDirs::new().context("could not locate the home directory")?;
    dirs.download_dir()
        .map(|p| p.to_path_buf())
        .context("this user has no Downloads directory; pass --watch-dir")
}

fn context_provider(context_cmd: Option<String>) -> Box<dyn ContextProvider> {
    match context_cmd {
        Some(cmd) => Box::new(CommandContext::new(cmd)),
        None => default_provider(),
    }
}

#[cfg(target_os = "macos")]
fn default_provider() -> Box<dyn ContextProvider> {
    Box::new(drw_core::context::SafariTabContext)
}

#[cfg(not(target_os = "macos"))]
fn default_provider() -> Box<dyn ContextProvider> {
    tracing::info!("no context source configured; files will get the fallback name");
    Box::new(drw_core::context::NoContext)
}
