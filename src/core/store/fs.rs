//! Filesystem record store.
//!
//! Records live in `<cache root>/<directory key>`. Writes go to a sibling
//! temp file that is synced before it is linked (create) or renamed
//! (replace) into place, so a reader never sees a half-written record.
//! Where the filesystem has no hard links, create writes the record in
//! place through an exclusive open instead.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Store;
use crate::core::domain::DirectoryKey;
use crate::error::{Result, StoreError};

/// Path of the record for `key` under `root`.
pub fn record_path(root: &Path, key: &DirectoryKey) -> PathBuf {
    root.join(key.as_str())
}

/// Filesystem-backed store for one directory's record.
#[derive(Debug, Clone)]
pub struct Filesystem {
    root: PathBuf,
    key: DirectoryKey,
}

impl Filesystem {
    /// Store for the record of `dir`, kept under `root`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Canonicalize` if `dir` cannot be resolved.
    pub fn new(root: impl Into<PathBuf>, dir: &Path) -> Result<Self> {
        Ok(Self::with_key(root, DirectoryKey::for_dir(dir)?))
    }

    /// Store for the record of the process working directory.
    pub fn for_current_dir(root: impl Into<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::new(root, &cwd)
    }

    /// Store for an already computed key.
    pub fn with_key(root: impl Into<PathBuf>, key: DirectoryKey) -> Self {
        Self {
            root: root.into(),
            key,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn key(&self) -> &DirectoryKey {
        &self.key
    }

    /// Create the cache root if missing. Idempotent.
    fn ensure_root(&self) -> Result<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o700);
        }
        builder.create(&self.root).map_err(StoreError::WriteFailed)?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        self.root.join(format!(".{}.{}.tmp", self.key, std::process::id()))
    }

    /// Write `bytes` to a fresh temp file, flushed and synced.
    fn write_temp(&self, bytes: &[u8]) -> Result<PathBuf> {
        let tmp = self.temp_path();
        let written = open_private(&tmp, false).and_then(|file| write_synced(file, bytes));

        if let Err(e) = written {
            remove_quietly(&tmp);
            return Err(StoreError::WriteFailed(e).into());
        }
        Ok(tmp)
    }
}

impl Store for Filesystem {
    fn path(&self) -> PathBuf {
        record_path(&self.root, &self.key)
    }

    fn exists(&self) -> bool {
        self.path().is_file()
    }

    fn create(&self, bytes: &[u8]) -> Result<()> {
        self.ensure_root()?;
        let path = self.path();
        debug!(path = %path.display(), len = bytes.len(), "creating record");

        if path.exists() {
            return Err(StoreError::AlreadyExists(path).into());
        }

        let tmp = self.write_temp(bytes)?;
        // hard_link refuses to clobber, so a racing create loses cleanly.
        let linked = fs::hard_link(&tmp, &path);
        remove_quietly(&tmp);

        match linked {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(StoreError::AlreadyExists(path).into());
            }
            Err(e) if link_unsupported(&e) => {
                debug!(error = %e, "hard links unavailable, writing record in place");
                write_exclusive(&path, bytes)?;
            }
            Err(e) => return Err(StoreError::WriteFailed(e).into()),
        }
        sync_dir(&self.root);
        Ok(())
    }

    fn read(&self) -> Result<Vec<u8>> {
        let path = self.path();
        debug!(path = %path.display(), "reading record");

        fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(path).into(),
            _ => StoreError::ReadFailed(e).into(),
        })
    }

    fn delete(&self) -> Result<()> {
        let path = self.path();
        debug!(path = %path.display(), "deleting record");

        fs::remove_file(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(path).into(),
            _ => StoreError::WriteFailed(e).into(),
        })
    }

    fn replace(&self, bytes: &[u8]) -> Result<()> {
        let path = self.path();
        debug!(path = %path.display(), len = bytes.len(), "replacing record");

        if !path.is_file() {
            return Err(StoreError::NotFound(path).into());
        }

        let tmp = self.write_temp(bytes)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            remove_quietly(&tmp);
            return Err(StoreError::WriteFailed(e).into());
        }
        sync_dir(&self.root);
        Ok(())
    }
}

/// Open a file for writing, owner-only on Unix. With `exclusive`, an
/// existing file is an `AlreadyExists` error instead of being truncated.
fn open_private(path: &Path, exclusive: bool) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true);
    if exclusive {
        options.create_new(true);
    } else {
        options.create(true).truncate(true);
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}

fn write_synced(mut file: File, bytes: &[u8]) -> io::Result<()> {
    file.write_all(bytes)?;
    file.flush()?;
    file.sync_all()
}

/// Create `path` with `bytes`, failing if it already exists.
fn write_exclusive(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = open_private(path, true).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => StoreError::AlreadyExists(path.to_path_buf()),
        _ => StoreError::WriteFailed(e),
    })?;

    if let Err(e) = write_synced(file, bytes) {
        remove_quietly(path);
        return Err(StoreError::WriteFailed(e).into());
    }
    Ok(())
}

/// Errors `hard_link` returns on filesystems without link support
/// (FAT and some network mounts report EPERM).
fn link_unsupported(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::Unsupported | io::ErrorKind::PermissionDenied
    )
}

fn remove_quietly(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != io::ErrorKind::NotFound {
            warn!(path = %path.display(), error = %e, "failed to remove temp file");
        }
    }
}

/// Persist directory entries (new link or rename). Best effort.
fn sync_dir(dir: &Path) {
    #[cfg(unix)]
    {
        if let Err(e) = File::open(dir).and_then(|d| d.sync_all()) {
            debug!(dir = %dir.display(), error = %e, "directory sync failed");
        }
    }
    #[cfg(not(unix))]
    let _ = dir;
}
