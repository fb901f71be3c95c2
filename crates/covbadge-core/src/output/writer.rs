//! Badge file writer

use crate::error::{Error, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Symlink hops followed before giving up
const MAX_SYMLINK_HOPS: usize = 40;

/// Badge file writer
///
/// Content lands in a temporary file next to the target and is then
/// renamed over it, so readers see either the old badge or the new one.
/// A symlinked target is followed and the file it points at is replaced;
/// an existing file keeps its permissions.
pub struct OutputWriter;

impl OutputWriter {
    /// Replace `path` with `content`, returning the number of bytes written
    pub fn write_badge(path: &Path, content: &str) -> Result<usize> {
        let target = resolve_target(path)?;
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let existing = match std::fs::metadata(&target) {
            Ok(meta) => Some(meta.permissions()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;

        match existing {
            Some(permissions) => tmp.as_file().set_permissions(permissions)?,
            None => set_new_file_permissions(tmp.as_file())?,
        }

        tmp.persist(&target)?;
        tracing::debug!(path = %target.display(), bytes = content.len(), "badge written");
        Ok(content.len())
    }
}

/// Follow symlinks at `path` to the file that should be replaced.
/// Dangling links resolve to their (missing) destination.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    let mut target = path.to_path_buf();
    for _ in 0..MAX_SYMLINK_HOPS {
        match std::fs::symlink_metadata(&target) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let link = std::fs::read_link(&target)?;
                target = match target.parent() {
                    Some(parent) => parent.join(link),
                    None => link,
                };
            }
            Ok(_) => return Ok(target),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(target),
            Err(e) => return Err(e.into()),
        }
    }
    Err(Error::Io(io::Error::other(format!(
        "too many levels of symbolic links: {}",
        path.display()
    ))))
}

// Temp files are created 0600; new badges are meant to be served.
#[cfg(unix)]
fn set_new_file_permissions(file: &std::fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_new_file_permissions(_file: &std::fs::File) -> io::Result<()> {
    Ok(())
}
