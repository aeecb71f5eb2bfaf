//! Sanitize command: show the filename a context string would produce.

use anyhow::Result;
use drw_core::naming;

/// Print the filesystem-safe fragment derived from `input`.
pub fn run_sanitize(input: &str) -> Result<()> {
    println!("{}", naming::sanitize_context(input));
    Ok(())
}
