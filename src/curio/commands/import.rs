use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CurioError, Result};
use crate::store::{CatalogStore, StorageBackend};

/// Replaces the whole catalog with an uploaded snapshot. Validation failures
/// are user mistakes, not program faults, so they come back as an error
/// message on the result rather than an `Err`.
pub fn run<B: StorageBackend>(store: &mut CatalogStore<B>, bytes: &[u8]) -> Result<CmdResult> {
    match store.import(bytes) {
        Ok(doc) => {
            let mut result = CmdResult::default().with_document(doc);
            result.add_message(CmdMessage::success("Data imported successfully!"));
            Ok(result)
        }
        Err(CurioError::Import(reason)) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::error(format!("Import failed: {}", reason)));
            Ok(result)
        }
        Err(other) => Err(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::MemoryBackend;

    #[test]
    fn valid_snapshot_replaces_catalog() {
        let mut source = CatalogStore::new(MemoryBackend::new());
        let bytes = source.export().unwrap();

        let mut store = CatalogStore::new(MemoryBackend::new());
        let result = run(&mut store, &bytes).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.document.is_some());
    }

    #[test]
    fn invalid_snapshot_is_reported_not_raised() {
        let mut store = CatalogStore::new(MemoryBackend::new());
        let before = store.load().unwrap();

        let result = run(&mut store, br#"{"affiliates": []}"#).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.document.is_none());
        assert_eq!(store.load().unwrap(), before);
    }
}
