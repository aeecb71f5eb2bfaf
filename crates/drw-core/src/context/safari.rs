//! Safari front-tab URL via AppleScript (macOS).

use std::process::Command;

use super::ContextProvider;

/// Returns "" when Safari has no open document, so the fallback name kicks in.
const FRONT_TAB_URL: &str = r#"
tell application "Safari"
    if not (exists document 1) then
        return ""
    end if
    return URL of current tab of front window
end tell
"#;

/// Asks Safari for the URL of the current tab of the front window.
pub struct SafariTabContext;

impl ContextProvider for SafariTabContext {
    fn current_context(&self) -> String {
        match Command::new("osascript").arg("-e").arg(FRONT_TAB_URL).output() {
            Ok(out) if out.status.success() => {
                String::from_utf8_lossy(&out.stdout).trim().to_string()
            }
            Ok(out) => {
                tracing::debug!(status = %out.status, "osascript exited unsuccessfully");
                String::new()
            }
            Err(e) => {
                tracing::warn!("could not query Safari: {}", e);
                String::new()
            }
        }
    }
}
