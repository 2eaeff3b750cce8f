//! Load cache for the runner's IPC loop.
//!
//! Keyed by input path; an entry is reused only while the file's
//! modification time and length are unchanged. The core never caches —
//! this lives with the presentation side.

use sales_report_core::{
    error::{ReportError, ReportResult},
    loader::OrderLoader,
    OrderTable,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileStamp {
    modified: SystemTime,
    len:      u64,
}

impl FileStamp {
    fn read(path: &Path) -> ReportResult<Self> {
        let meta = std::fs::metadata(path).map_err(|source| ReportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let modified = meta.modified().map_err(|source| ReportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self {
            modified,
            len: meta.len(),
        })
    }
}

struct CachedTable {
    stamp: FileStamp,
    table: OrderTable,
}

#[derive(Default)]
pub struct TableCache {
    entries: HashMap<PathBuf, CachedTable>,
    loads:   u64,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times a file was actually parsed.
    pub fn loads(&self) -> u64 {
        self.loads
    }

    /// Return the cached table for `path`, reloading if the file changed.
    pub fn get_or_load(&mut self, loader: &OrderLoader, path: &Path) -> ReportResult<&OrderTable> {
        let stamp = FileStamp::read(path)?;
        let fresh = self
            .entries
            .get(path)
            .is_some_and(|cached| cached.stamp == stamp);

        if !fresh {
            if self.entries.contains_key(path) {
                log::info!("{} changed on disk, reloading", path.display());
            }
            let table = loader.load_path(path)?;
            self.loads += 1;
            self.entries
                .insert(path.to_path_buf(), CachedTable { stamp, table });
        }

        match self.entries.get(path) {
            Some(cached) => Ok(&cached.table),
            None => Err(ReportError::Config(format!(
                "cache entry for {} vanished",
                path.display()
            ))),
        }
    }

    pub fn invalidate(&mut self, path: &Path) {
        self.entries.remove(path);
    }
}
