//! Filesystem helpers for moving generator output around and tidying up.

use anyhow::Context;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively copy `src` into `dest`, overwriting files that exist.
///
/// A missing `src` is not an error; nothing is copied.
pub fn copy_dir_all(src: &Path, dest: &Path) -> anyhow::Result<usize> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry.with_context(|| format!("Failed to walk {}", src.display()))?;
        let relative = entry.path().strip_prefix(src)?;
        let target = dest.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Copy a single file if it exists. Returns whether it was copied.
pub fn copy_file_if_exists(src: &Path, dest: &Path) -> anyhow::Result<bool> {
    if !src.is_file() {
        return Ok(false);
    }
    fs::copy(src, dest)
        .with_context(|| format!("Failed to copy {} to {}", src.display(), dest.display()))?;
    Ok(true)
}

pub fn remove_file_if_exists(path: &Path) -> anyhow::Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    Ok(true)
}

pub fn remove_dir_all_if_exists(path: &Path) -> anyhow::Result<bool> {
    if !path.is_dir() {
        return Ok(false);
    }
    fs::remove_dir_all(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    Ok(true)
}

/// Remove `path` if it is a directory with no entries.
pub fn remove_dir_if_empty(path: &Path) -> anyhow::Result<bool> {
    if !path.is_dir() {
        return Ok(false);
    }
    let is_empty = fs::read_dir(path)
        .with_context(|| format!("Failed to read {}", path.display()))?
        .next()
        .is_none();
    if is_empty {
        fs::remove_dir(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(is_empty)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_copy_dir_all_nested() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("a.ts"), "a").unwrap();
        fs::write(src.join("nested").join("b.ts"), "b").unwrap();

        let dest = dir.path().join("dest");
        assert_eq!(copy_dir_all(&src, &dest).unwrap(), 2);
        assert_eq!(fs::read_to_string(dest.join("a.ts")).unwrap(), "a");
        assert_eq!(fs::read_to_string(dest.join("nested/b.ts")).unwrap(), "b");
    }

    #[test]
    fn test_copy_dir_all_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("dest");
        assert_eq!(copy_dir_all(&dir.path().join("missing"), &dest).unwrap(), 0);
        assert!(!dest.exists());
    }

    #[test]
    fn test_remove_dir_if_empty() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty");
        let full = dir.path().join("full");
        fs::create_dir_all(&empty).unwrap();
        fs::create_dir_all(&full).unwrap();
        fs::write(full.join("keep.ts"), "").unwrap();

        assert!(remove_dir_if_empty(&empty).unwrap());
        assert!(!empty.exists());
        assert!(!remove_dir_if_empty(&full).unwrap());
        assert!(full.exists());
        assert!(!remove_dir_if_empty(&dir.path().join("missing")).unwrap());
    }

    #[test]
    fn test_remove_helpers_ignore_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!remove_file_if_exists(&dir.path().join("x.ts")).unwrap());
        assert!(!remove_dir_all_if_exists(&dir.path().join("dist")).unwrap());
        assert!(!copy_file_if_exists(&dir.path().join("x.ts"), &dir.path().join("y.ts")).unwrap());
    }
}
