//! Common file traversal structures for local demo trees.
//!
//! This module doesn't contain anything special beyond a pseudo-iterator
//! to walk over entries in a directory tree in a deterministic order, and
//! a tree copy built on top of it.
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::paths;
use crate::types::UtilResult;

/// Single file system entry yielded by a `FileWalker`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    relative: PathBuf,
    is_dir: bool,
    size: u64,
}

impl Entry {
    /// Retrieves the full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Retrieves the path of this entry relative to the walk root.
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// Determines whether this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Retrieves the size of this entry in bytes (zero for directories).
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Pseudo `Iterator` structure to walk over `Entry` types on disk.
///
/// As this is a fallible iteration, a `for` style loop cannot be used
/// easily. Instead, this pattern must be used:
///
/// ```rust,ignore
/// let mut walker = FileWalker::new("data");
///
/// while let Some(entry) = walker.next()? {
///     // do something...
/// }
/// ```
///
/// Entries are yielded depth first, with siblings in name order. The
/// root itself is never yielded.
pub struct FileWalker {
    root: PathBuf,
    inner: Option<walkdir::IntoIter>,
}

impl FileWalker {
    /// Construct a new `FileWalker` for a root directory.
    pub fn new<P>(root: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            root: root.into(),
            inner: None,
        }
    }

    /// Attempts to fetch the next `Entry` in the tree.
    ///
    /// Reads can fail, which is why a `Result` is returned. A missing
    /// root is reported on the first call rather than on construction.
    pub fn next(&mut self) -> UtilResult<Option<Entry>> {
        if self.inner.is_none() {
            if !self.root.is_dir() {
                return Err(format!("{} is not a directory", self.root.display()).into());
            }
            let walk = WalkDir::new(&self.root)
                .min_depth(1)
                .sort_by_file_name()
                .into_iter();
            self.inner = Some(walk);
        }

        let item = match self.inner.as_mut().and_then(|walk| walk.next()) {
            Some(item) => item?,
            None => return Ok(None),
        };

        let meta = item.metadata()?;
        let relative = item.path().strip_prefix(&self.root)?.to_path_buf();

        Ok(Some(Entry {
            is_dir: meta.is_dir(),
            size: if meta.is_dir() { 0 } else { meta.len() },
            path: item.into_path(),
            relative,
        }))
    }
}

/// Copies a directory tree into a target, returning the bytes copied.
///
/// Directories are created as needed and existing files are overwritten.
pub fn copy_tree<S, T>(source: S, target: T) -> UtilResult<u64>
where
    S: AsRef<Path>,
    T: AsRef<Path>,
{
    let source = source.as_ref();
    let target = target.as_ref();

    paths::validate(source)?;
    paths::validate(target)?;

    fs::create_dir_all(target)?;

    let mut copied = 0;
    let mut walker = FileWalker::new(source);

    while let Some(entry) = walker.next()? {
        let destination = target.join(entry.relative());

        paths::validate(&destination)?;

        if entry.is_dir() {
            fs::create_dir_all(&destination)?;
            continue;
        }

        debug!("Copying {}", entry.relative().display());
        copied += fs::copy(entry.path(), &destination)?;
    }

    Ok(copied)
}
