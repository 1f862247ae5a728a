//! Session store persisting each key as `<dir>/<key>.json`.
//!
//! The directory is opened through `cap_std` handles so the adapter can only
//! touch files beneath it. It is created on the first write; until then every
//! key reads as absent.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use tracing::debug;

use crate::domain::ports::{SessionStore, SessionStoreError};

const EXTENSION: &str = "json";

/// File-backed [`SessionStore`].
///
/// Writes go to a staging file that is then renamed over the target, so a
/// reader never observes a half-written snapshot.
///
/// File access is synchronous: each operation blocks the calling thread for
/// the duration of the `cap_std` call, even though the trait methods are
/// `async`. Snapshots are a few hundred bytes and the CLI runs a
/// current-thread runtime. On a shared multi-threaded runtime, drive the
/// session service from `tokio::task::spawn_blocking` or a dedicated runtime.
///
/// # Examples
/// ```
/// use teamboard::outbound::FileSessionStore;
///
/// let store = FileSessionStore::new(".teamboard");
/// assert_eq!(store.root(), std::path::Path::new(".teamboard"));
/// ```
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    root: PathBuf,
}

impl FileSessionStore {
    /// Store rooted at `root`. Nothing is touched until the first operation.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the session files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_name(key: &str) -> Result<String, SessionStoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(SessionStoreError::invalid_key(key));
        }
        Ok(format!("{key}.{EXTENSION}"))
    }

    fn io_error(&self, name: &str, error: &io::Error) -> SessionStoreError {
        SessionStoreError::io(format!("{}: {error}", self.root.join(name).display()))
    }

    fn open_existing(&self) -> Result<Option<Dir>, SessionStoreError> {
        match Dir::open_ambient_dir(&self.root, ambient_authority()) {
            Ok(dir) => Ok(Some(dir)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(self.io_error("", &error)),
        }
    }

    fn open_or_create(&self) -> Result<Dir, SessionStoreError> {
        Dir::create_ambient_dir_all(&self.root, ambient_authority())
            .and_then(|()| Dir::open_ambient_dir(&self.root, ambient_authority()))
            .map_err(|error| self.io_error("", &error))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn read(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        let name = Self::file_name(key)?;
        let Some(dir) = self.open_existing()? else {
            return Ok(None);
        };
        match dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(self.io_error(&name, &error)),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        let name = Self::file_name(key)?;
        let staging = format!(".{name}.tmp");
        let dir = self.open_or_create()?;
        dir.write(&staging, value.as_bytes())
            .map_err(|error| self.io_error(&staging, &error))?;
        dir.rename(&staging, &dir, &name)
            .map_err(|error| self.io_error(&name, &error))?;
        debug!(path = %self.root.join(&name).display(), "session file written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SessionStoreError> {
        let name = Self::file_name(key)?;
        let Some(dir) = self.open_existing()? else {
            return Ok(());
        };
        match dir.remove_file(&name) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(self.io_error(&name, &error)),
        }
    }
}
