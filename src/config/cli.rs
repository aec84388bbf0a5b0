use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: String,
    atomic: bool,
}

impl LocalStorage {
    /// Relative paths resolve against `base_path`; an empty base means the
    /// working directory.
    pub fn new(base_path: String) -> Self {
        Self {
            base_path,
            atomic: false,
        }
    }

    /// Writes go to a temp file next to the destination, then get renamed
    /// over it, so a failed write never leaves a truncated word list behind.
    pub fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }

    fn write_atomic(full_path: &Path, data: &[u8]) -> Result<()> {
        let dir = match full_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(data)?;
        tmp.as_file().sync_all()?;

        if let Ok(metadata) = fs::metadata(full_path) {
            tmp.as_file().set_permissions(metadata.permissions())?;
        }

        tmp.persist(full_path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if self.atomic {
            tracing::debug!("Atomic write to: {}", full_path.display());
            Self::write_atomic(&full_path, data)
        } else {
            fs::write(full_path, data)?;
            Ok(())
        }
    }
}
