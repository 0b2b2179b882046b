//! Repository-wide advisory lock
//!
//! Each top-level operation holds an exclusive lock on the repository's lock
//! file for its whole duration, so two processes can never interleave the
//! collect/persist/clear steps of a commit. The lock is released when the
//! returned guard is dropped.
//!
//! File locks are owned by the process, not by the handle that took them, so
//! two handles in one process would both get the file lock. Holders in the
//! same process therefore first claim the lock path in a process-wide table
//! and only then open and lock the file.

use file_guard::{FileGuard, Lock};
use parking_lot::{Condvar, Mutex};
use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::trace;

/// Lock paths currently held by some handle of this process
static HELD_LOCKS: LazyLock<(Mutex<HashSet<PathBuf>>, Condvar)> =
    LazyLock::new(|| (Mutex::new(HashSet::new()), Condvar::new()));

#[derive(Debug)]
pub struct RepositoryLock {
    path: Box<Path>,
}

/// Exclusive hold on the lock file, released on drop
pub struct LockGuard {
    file_guard: Option<FileGuard<Box<File>>>,
    key: PathBuf,
}

impl RepositoryLock {
    pub fn new(path: Box<Path>) -> Self {
        RepositoryLock { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Block until the exclusive lock is held
    pub fn acquire(&self) -> std::io::Result<LockGuard> {
        let key = self.key();
        Self::claim(&key);

        // the claim is released if opening or locking the file fails
        let mut guard = LockGuard {
            file_guard: None,
            key,
        };

        // the file is only opened once claimed: closing any descriptor of a
        // locked file drops the process's lock on it
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;
        guard.file_guard = Some(file_guard::lock(Box::new(file), Lock::Exclusive, 0, 1)?);
        trace!(path = %self.path.display(), "acquired repository lock");

        Ok(guard)
    }

    /// Identify the lock file independently of how its path was spelled
    fn key(&self) -> PathBuf {
        match (self.path.parent(), self.path.file_name()) {
            (Some(parent), Some(name)) => parent
                .canonicalize()
                .map(|parent| parent.join(name))
                .unwrap_or_else(|_| self.path.to_path_buf()),
            _ => self.path.to_path_buf(),
        }
    }

    fn claim(key: &Path) {
        let (held, released) = &*HELD_LOCKS;
        let mut held = held.lock();
        while held.contains(key) {
            released.wait(&mut held);
        }
        held.insert(key.to_path_buf());
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        // unlock the file before another handle of this process may lock it
        drop(self.file_guard.take());

        let (held, released) = &*HELD_LOCKS;
        held.lock().remove(&self.key);
        released.notify_all();
        trace!(path = %self.key.display(), "released repository lock");
    }
}
