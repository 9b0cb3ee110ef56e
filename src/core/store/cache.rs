use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use directories::ProjectDirs;
use tempfile::NamedTempFile;

use super::error::SourceError;

/// Synchronous key/value store backing the fast path.
///
/// Implementations are assumed to answer every call immediately, but any
/// individual operation may fail (storage quota, disabled storage). The store
/// treats those failures as soft and keeps going with the other backend.
pub trait LocalCache: Send {
    fn get(&self, name: &str) -> Result<Option<String>, SourceError>;
    fn set(&mut self, name: &str, value: &str) -> Result<(), SourceError>;
}

/// In-memory cache for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: HashMap<String, String>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalCache for MemoryCache {
    fn get(&self, name: &str) -> Result<Option<String>, SourceError> {
        Ok(self.entries.get(name).cloned())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), SourceError> {
        self.entries.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed cache persisted as a TOML table of strings.
///
/// Each write lands in a temp file in the target directory and replaces the
/// cache with an atomic rename, so a crash mid-write never truncates it.
#[derive(Debug)]
pub struct FileCache {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileCache {
    /// Open the cache at the platform default location.
    pub fn open_default() -> Result<Self, SourceError> {
        let proj_dirs = ProjectDirs::from("org", "causerie", "causerie")
            .ok_or("Failed to determine settings cache directory")?;
        Self::open(proj_dirs.config_dir().join("settings.toml"))
    }

    /// Open (or create) the cache at an explicit path.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let path = path.into();
        let entries = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            toml::from_str(&contents)?
        } else {
            HashMap::new()
        };
        Ok(Self { path, entries })
    }

    /// Path the cache persists to.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn persist(&self) -> Result<(), SourceError> {
        let parent = self.path.parent().filter(|dir| !dir.as_os_str().is_empty());

        if let Some(dir) = parent {
            fs::create_dir_all(dir)?;
        }

        let contents = toml::to_string_pretty(&self.entries)?;
        let mut temp_file = match parent {
            Some(dir) => NamedTempFile::new_in(dir)?,
            None => NamedTempFile::new()?,
        };

        temp_file.write_all(contents.as_bytes())?;
        temp_file.as_file_mut().sync_all()?;
        temp_file
            .persist(&self.path)
            .map_err(|err| Box::new(err.error) as SourceError)?;
        Ok(())
    }
}

impl LocalCache for FileCache {
    fn get(&self, name: &str) -> Result<Option<String>, SourceError> {
        Ok(self.entries.get(name).cloned())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), SourceError> {
        self.entries.insert(name.to_string(), value.to_string());
        self.persist()
    }
}
