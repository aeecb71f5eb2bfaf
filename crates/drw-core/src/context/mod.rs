//! Active-application context: where the current download came from.
//!
//! A provider answers one question — what is the user looking at right now —
//! with a best-effort string, typically the active browser tab's URL. The
//! query is point-in-time: one synchronous attempt, no retry (a retry would
//! fetch stale or different context), and an empty string when nothing is
//! available.

mod command;
#[cfg(target_os = "macos")]
mod safari;

pub use command::CommandContext;
#[cfg(target_os = "macos")]
pub use safari::SafariTabContext;

/// Capability interface for the external context query.
///
/// Implementations never panic and never let an error escape this boundary;
/// any failure collapses to an empty string, which callers must treat as a
/// valid, if uninformative, result.
pub trait ContextProvider: Send + Sync {
    /// Current context string, or `""` when none is available.
    fn current_context(&self) -> String;
}

/// Provider used when no context source is configured.
pub struct NoContext;

impl ContextProvider for NoContext {
    fn current_context(&self) -> String {
        String::new()
    }
}

/// Provider returning a fixed string. Lets the pipeline run deterministically
/// without a live desktop application.
pub struct FixedContext(pub String);

impl ContextProvider for FixedContext {
    fn current_context(&self) -> String {
        self.0.clone()
    }
}
