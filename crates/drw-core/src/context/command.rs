//! Context via a user-supplied shell command.

use std::process::Command;

use super::ContextProvider;

/// Runs a shell command and uses its trimmed stdout as the context string.
///
/// Meant for desktops where no built-in provider exists, e.g.
/// `drw watch --context-cmd 'xdotool getactivewindow getwindowname'`.
/// Spawn failures, non-zero exits and empty output all collapse to `""`.
pub struct CommandContext {
    command: String,
}

impl CommandContext {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    #[cfg(unix)]
    fn spawn(&self) -> std::io::Result<std::process::Output> {
        Command::new("sh").arg("-c").arg(&self.command).output()
    }

    #[cfg(windows)]
    fn spawn(&self) -> std::io::Result<std::process::Output> {
        Command::new("cmd").arg("/C").arg(&self.command).output()
    }
}

impl ContextProvider for CommandContext {
    fn current_context(&self) -> String {
        match self.spawn() {
            Ok(out) if out.status.success() => {
                String::from_utf8_lossy(&out.stdout).trim().to_string()
            }
            Ok(out) => {
                tracing::debug!(status = %out.status, "context command exited unsuccessfully");
                String::new()
            }
            Err(e) => {
                tracing::warn!("could not run context command: {}", e);
                String::new()
            }
        }
    }
}
