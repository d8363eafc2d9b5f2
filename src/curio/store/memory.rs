use super::StorageBackend;
use crate::error::Result;

/// In-memory storage for tests. No persistence.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    document: Option<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read_document(&self) -> Result<Option<String>> {
        Ok(self.document.clone())
    }

    fn write_document(&mut self, raw: &str) -> Result<()> {
        self.document = Some(raw.to_string());
        Ok(())
    }

    fn remove_document(&mut self) -> Result<()> {
        self.document = None;
        Ok(())
    }
}
