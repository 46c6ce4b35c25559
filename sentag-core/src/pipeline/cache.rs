//! Auxiliary per-language token cache
//!
//! Reserved for memoizing expensive per-token work. No step reads or writes
//! it yet, but the pipeline persists it after every run, so an
//! implementation only has to plug in here.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{CacheLoadError, CachePersistError};

/// Languages the cache is initialized with
pub const CACHE_LANGUAGES: [&str; 2] = ["en", "tl"];

/// language code -> token -> cached value
pub type CacheEntries = BTreeMap<String, BTreeMap<String, String>>;

/// Memoization store consulted by steps
pub trait TokenCache: Send + Sync {
    fn get(&self, language: &str, token: &str) -> Option<&str>;

    fn insert(&mut self, language: &str, token: String, value: String);

    /// Write the whole cache to its backing storage
    fn persist(&self) -> Result<(), CachePersistError>;
}

fn empty_entries() -> CacheEntries {
    CACHE_LANGUAGES
        .iter()
        .map(|code| (code.to_string(), BTreeMap::new()))
        .collect()
}

/// Cache kept only in memory
#[derive(Debug, Clone)]
pub struct MemoryTokenCache {
    entries: CacheEntries,
}

impl Default for MemoryTokenCache {
    fn default() -> Self {
        Self {
            entries: empty_entries(),
        }
    }
}

impl MemoryTokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &CacheEntries {
        &self.entries
    }
}

impl TokenCache for MemoryTokenCache {
    fn get(&self, language: &str, token: &str) -> Option<&str> {
        self.entries
            .get(language)
            .and_then(|tokens| tokens.get(token))
            .map(String::as_str)
    }

    fn insert(&mut self, language: &str, token: String, value: String) {
        self.entries
            .entry(language.to_string())
            .or_default()
            .insert(token, value);
    }

    fn persist(&self) -> Result<(), CachePersistError> {
        Ok(())
    }
}

/// Cache backed by a JSON file, rewritten wholesale on every persist
#[derive(Debug, Clone)]
pub struct FileTokenCache {
    path: PathBuf,
    inner: MemoryTokenCache,
}

impl FileTokenCache {
    /// Load the cache at `path`, or start empty if there is none.
    ///
    /// An unreadable or corrupt file is logged and replaced on the next
    /// persist.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read_entries(&path) {
            Ok(Some(mut entries)) => {
                for code in CACHE_LANGUAGES {
                    entries.entry(code.to_string()).or_default();
                }
                log::debug!("Loaded token cache from {}", path.display());
                entries
            }
            Ok(None) => empty_entries(),
            Err(e) => {
                log::warn!("Ignoring unreadable token cache: {e}");
                empty_entries()
            }
        };

        Self {
            path,
            inner: MemoryTokenCache { entries },
        }
    }

    fn read_entries(path: &Path) -> Result<Option<CacheEntries>, CacheLoadError> {
        if !path.is_file() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path).map_err(|source| CacheLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| CacheLoadError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &CacheEntries {
        self.inner.entries()
    }
}

impl TokenCache for FileTokenCache {
    fn get(&self, language: &str, token: &str) -> Option<&str> {
        self.inner.get(language, token)
    }

    fn insert(&mut self, language: &str, token: String, value: String) {
        self.inner.insert(language, token, value);
    }

    fn persist(&self) -> Result<(), CachePersistError> {
        let io_error = |source| CachePersistError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let content = serde_json::to_string(self.inner.entries())?;
        std::fs::write(&self.path, content).map_err(io_error)
    }
}
