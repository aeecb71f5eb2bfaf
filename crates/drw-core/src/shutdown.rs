//! Interrupt handling: a process-wide stop flag set from signal context.
//!
//! The watch loop polls the flag between channel reads and exits cleanly,
//! dropping its subscription first, so an interrupt never tears threads down
//! mid-event.

use std::sync::atomic::{AtomicBool, Ordering};

static STOP: AtomicBool = AtomicBool::new(false);

/// The process-wide stop flag. Pass to [`crate::watcher::DownloadWatcher::run`].
pub fn flag() -> &'static AtomicBool {
    &STOP
}

/// Request shutdown programmatically (equivalent to receiving SIGINT).
pub fn request() {
    STOP.store(true, Ordering::Relaxed);
}

/// Install SIGINT/SIGTERM handlers that set the stop flag.
#[cfg(unix)]
pub fn install_handlers() {
    extern "C" fn on_signal(_sig: libc::c_int) {
        STOP.store(true, Ordering::Relaxed);
    }

    // SAFETY: the handler only stores to an atomic, which is async-signal-safe.
    unsafe {
        libc::signal(libc::SIGINT, on_signal as libc::sighandler_t);
        libc::signal(libc::SIGTERM, on_signal as libc::sighandler_t);
    }
}

/// No signal integration outside Unix; the flag can still be set via [`request`].
#[cfg(not(unix))]
pub fn install_handlers() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_sets_the_flag() {
        assert!(!flag().load(Ordering::Relaxed));
        request();
        assert!(flag().load(Ordering::Relaxed));
    }
}
