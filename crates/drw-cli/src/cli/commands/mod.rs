mod completions;
mod sanitize;
mod watch;

pub use completions::run_completions;
pub use sanitize::run_sanitize;
pub use watch::run_watch;
