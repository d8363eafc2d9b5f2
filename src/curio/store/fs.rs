use super::StorageBackend;
use crate::error::{CurioError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CATALOG_FILENAME: &str = "catalog.json";

/// File-backed storage: the whole catalog lives in one `catalog.json` under
/// the data directory.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join(CATALOG_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(CurioError::Io)?;
            }
        }
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn read_document(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path).map_err(CurioError::Io)?;
        Ok(Some(raw))
    }

    fn write_document(&mut self, raw: &str) -> Result<()> {
        self.ensure_parent()?;
        fs::write(&self.path, raw).map_err(CurioError::Io)
    }

    fn remove_document(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(CurioError::Io)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CatalogStore;

    #[test]
    fn write_read_remove_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path());

        assert!(backend.read_document().unwrap().is_none());
        backend.write_document("{\"a\":1}").unwrap();
        assert_eq!(backend.read_document().unwrap().unwrap(), "{\"a\":1}");
        backend.remove_document().unwrap();
        assert!(backend.read_document().unwrap().is_none());
    }

    #[test]
    fn creates_missing_data_dir_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("data");
        let mut backend = FileBackend::new(&nested);
        backend.write_document("{}").unwrap();
        assert!(nested.join("catalog.json").exists());
    }

    #[test]
    fn catalog_survives_reopening() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = CatalogStore::new(FileBackend::new(dir.path()));
        let mut doc = store.load().unwrap();
        doc.software.clear();
        store.save(&doc).unwrap();

        let mut reopened = CatalogStore::new(FileBackend::new(dir.path()));
        let loaded = reopened.load().unwrap();
        assert!(loaded.software.is_empty());
        assert_eq!(loaded.projects.len(), 2);
    }
}
