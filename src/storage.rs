// Persistence backends for the task list slot

use eyre::{Context, Result};
use fs2::FileExt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A single key-value slot holding the serialized task list.
///
/// `load` returns `Ok(None)` when nothing has been written yet; `save`
/// overwrites unconditionally. The store treats any load failure the same
/// as an absent slot, so implementations do not need their own fallback.
pub trait Storage {
    fn load(&self) -> Result<Option<String>>;
    fn save(&mut self, data: &str) -> Result<()>;
}

/// File-backed slot, the stand-in for the browser's localStorage entry.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path).context("Failed to read task list file")?;
        Ok(Some(data))
    }

    fn save(&mut self, data: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create storage directory")?;
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .open(&self.path)
            .context("Failed to open task list file for writing")?;

        // Acquire exclusive lock before writing
        file.lock_exclusive().context("Failed to acquire file lock")?;

        file.set_len(0)?;
        writeln!(file, "{}", data)?;
        file.sync_all()?;

        debug!(path = ?self.path, bytes = data.len(), "Wrote task list slot");

        // Lock is automatically released when file is dropped
        Ok(())
    }
}

/// In-memory slot for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    slot: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the slot, as if a previous session had written it.
    pub fn with_slot(data: impl Into<String>) -> Self {
        Self {
            slot: Some(data.into()),
        }
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, data: &str) -> Result<()> {
        self.slot = Some(data.to_string());
        Ok(())
    }
}
