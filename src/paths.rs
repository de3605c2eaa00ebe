//! Path validation applied before touching the file system.
//!
//! Every path handed to the indexer, copied into, or removed is checked
//! here first, so a malformed demo directory cannot escape the output tree.
use std::path::{Component, Path};

use crate::types::UtilResult;

/// Validates a path against traversal and system locations.
pub fn validate<P>(path: P) -> UtilResult<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let display = path.to_string_lossy();

    if display.is_empty() {
        return Err("path cannot be empty".into());
    }

    if display.contains('\0') {
        return Err(format!("invalid path {}: contains null bytes", display).into());
    }

    if path.components().any(|c| c == Component::ParentDir) {
        return Err(format!("invalid path {}: contains directory traversal", display).into());
    }

    if display.contains('~') {
        return Err(format!("invalid path {}: contains tilde expansion", display).into());
    }

    if path.starts_with("/proc") || path.starts_with("/sys") {
        return Err(format!("invalid path {}: system directories not allowed", display).into());
    }

    Ok(())
}

/// Validates a directory name which must stay beneath its parent.
///
/// Only plain components are accepted, so absolute paths, drive prefixes,
/// `.` and `..` are all rejected.
pub fn validate_nested<P>(path: P) -> UtilResult<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    validate(path)?;

    if !path.components().all(|c| matches!(c, Component::Normal(_))) {
        let msg = format!("invalid path {}: must be a relative name", path.display());
        return Err(msg.into());
    }

    Ok(())
}
