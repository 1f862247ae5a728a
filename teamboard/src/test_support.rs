//! Test utilities for the teamboard crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled for tests or when the `test-support` feature is enabled.

use std::io;
use std::path::Path;
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use tempfile::TempDir;

use crate::domain::ports::{FixtureCredentialStore, SESSION_KEY};
use crate::domain::{IdentityValidationError, SessionService};
use crate::outbound::FileSessionStore;

/// Session service wired to the demo accounts and a file-backed store.
pub type DemoSessionService = SessionService<FixtureCredentialStore, FileSessionStore>;

/// Temporary session directory standing in for a device's local storage.
///
/// Services built from the same sandbox share persisted state, which models a
/// restart of the front end.
///
/// # Examples
///
/// ```rust
/// use teamboard::test_support::SessionSandbox;
///
/// let sandbox = SessionSandbox::new()?;
/// sandbox.write_snapshot("not json")?;
/// assert_eq!(sandbox.snapshot()?.as_deref(), Some("not json"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct SessionSandbox {
    dir: TempDir,
}

impl SessionSandbox {
    /// Create an empty sandbox.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Directory holding session files.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Fresh file store over the sandbox directory.
    pub fn store(&self) -> FileSessionStore {
        FileSessionStore::new(self.path())
    }

    /// Fresh, pending service over the demo accounts and the sandbox store.
    pub fn service(&self) -> Result<DemoSessionService, IdentityValidationError> {
        Ok(SessionService::new(
            Arc::new(FixtureCredentialStore::demo()?),
            Arc::new(self.store()),
        ))
    }

    /// Overwrite the persisted snapshot with raw text.
    pub fn write_snapshot(&self, raw: &str) -> io::Result<()> {
        self.directory()?.write(snapshot_file(), raw.as_bytes())
    }

    /// Read the persisted snapshot, if any.
    pub fn snapshot(&self) -> io::Result<Option<String>> {
        match self.directory()?.read_to_string(snapshot_file()) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error),
        }
    }

    fn directory(&self) -> io::Result<Dir> {
        Dir::open_ambient_dir(self.path(), ambient_authority())
    }
}

fn snapshot_file() -> String {
    format!("{SESSION_KEY}.json")
}
