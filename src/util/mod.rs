//! Utility functions for common operations.
//!
//! - Atomic file writes, so a failed save never corrupts the previous file
//! - Display helpers for long paths

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{LakeError, Result};

/// Atomically write content to a file.
///
/// The content goes to a temporary file in the same directory, is flushed,
/// then renamed over the target. If any step fails the original file (if it
/// exists) remains unchanged.
///
/// # Example
///
/// ```rust,no_run
/// use belgianlake::util::atomic_write;
///
/// atomic_write("config.toml", b"key = \"value\"").unwrap();
/// ```
pub fn atomic_write(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    atomic_write_with(path, |writer| writer.write_all(content))
}

/// Atomically write content to a file using a writer function.
///
/// Useful when the content is produced incrementally, such as one JSON line
/// per record.
///
/// ```rust,no_run
/// use belgianlake::util::atomic_write_with;
/// use std::io::Write;
///
/// atomic_write_with("output.txt", |writer| {
///     writeln!(writer, "Hello, world!")
/// }).unwrap();
/// ```
pub fn atomic_write_with<F>(path: impl AsRef<Path>, write_fn: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let path = path.as_ref();

    // A bare file name has an empty parent; that means the working directory.
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        Some(_) => Path::new("."),
        None => {
            return Err(LakeError::IoError {
                context: format!("Cannot determine parent directory for: {}", path.display()),
                source: io::Error::new(io::ErrorKind::InvalidInput, "No parent directory"),
            })
        }
    };

    if !parent.exists() {
        std::fs::create_dir_all(parent).map_err(|e| {
            LakeError::io(format!("Failed to create directory: {}", parent.display()), e)
        })?;
    }

    // Same directory keeps the rename on one filesystem
    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| {
        LakeError::io(
            format!("Failed to create temporary file in: {}", parent.display()),
            e,
        )
    })?;

    {
        let mut writer = io::BufWriter::new(temp_file.as_file_mut());
        write_fn(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| LakeError::io(format!("Failed to write content for: {}", path.display()), e))?;
    }

    temp_file.as_file().sync_all().map_err(|e| {
        LakeError::io(format!("Failed to sync temporary file for: {}", path.display()), e)
    })?;

    temp_file.persist(path).map_err(|e| {
        LakeError::io(
            format!("Failed to atomically write file: {}", path.display()),
            e.error,
        )
    })?;

    Ok(())
}

/// Shorten a path for display, keeping its tail.
///
/// Paths longer than `max_chars` characters are cut from the left and prefixed
/// with `...`. Truncation is character-aware, so multi-byte paths never split a
/// code point.
pub fn truncate_path(path: &str, max_chars: usize) -> String {
    let len = path.chars().count();
    if len <= max_chars {
        return path.to_string();
    }
    if max_chars <= 3 {
        return ".".repeat(max_chars);
    }
    let keep = max_chars - 3;
    let tail: String = path.chars().skip(len - keep).collect();
    format!("...{tail}")
}
