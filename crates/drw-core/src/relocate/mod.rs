//! Moving completed downloads into the destination directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::naming;

/// What to do when the destination name is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Replace the existing file (the historical behavior).
    #[default]
    Overwrite,
    /// Probe `name_1.ext`, `name_2.ext`, ... for a free slot.
    Suffix,
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overwrite" => Ok(CollisionPolicy::Overwrite),
            "suffix" => Ok(CollisionPolicy::Suffix),
            other => Err(format!(
                "unknown collision policy '{}' (expected 'overwrite' or 'suffix')",
                other
            )),
        }
    }
}

/// Moves `src` into `dest_dir` under `base` plus the original extension.
///
/// Creates `dest_dir` when missing. With [`CollisionPolicy::Overwrite`] an
/// existing file of the same name is silently replaced; with
/// [`CollisionPolicy::Suffix`] a numbered variant is used instead. Returns
/// the destination path actually written.
pub fn relocate(
    src: &Path,
    dest_dir: &Path,
    base: &str,
    policy: CollisionPolicy,
) -> Result<PathBuf> {
    fs::create_dir_all(dest_dir)
        .with_context(|| format!("create destination dir {}", dest_dir.display()))?;

    let dest = match policy {
        CollisionPolicy::Overwrite => dest_dir.join(naming::target_file_name(base, src)),
        CollisionPolicy::Suffix => first_free_slot(dest_dir, base, src),
    };

    move_file(src, &dest)?;
    Ok(dest)
}

/// First unused destination: `base.ext`, then `base_1.ext`, `base_2.ext`, ...
fn first_free_slot(dest_dir: &Path, base: &str, src: &Path) -> PathBuf {
    let plain = dest_dir.join(naming::target_file_name(base, src));
    if !plain.exists() {
        return plain;
    }
    let mut n = 1u32;
    loop {
        let candidate = dest_dir.join(naming::target_file_name(&format!("{}_{}", base, n), src));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Rename, falling back to copy + remove when rename fails (e.g. the
/// destination is on a different filesystem).
fn move_file(src: &Path, dest: &Path) -> Result<()> {
    if fs::rename(src, dest).is_ok() {
        return Ok(());
    }
    fs::copy(src, dest)
        .with_context(|| format!("move {} to {}", src.display(), dest.display()))?;
    fs::remove_file(src)
        .with_context(|| format!("remove {} after copying", src.display()))?;
    Ok(())
}
