use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{CatalogStore, StorageBackend, EXPORT_FILENAME};
use std::path::Path;

/// Produces the downloadable snapshot. The bytes ride on the result so the
/// caller decides where they land (a file, stdout, a deploy step).
pub fn run<B: StorageBackend>(store: &mut CatalogStore<B>) -> Result<CmdResult> {
    let bytes = store.export()?;
    let mut result = CmdResult::default().with_exported(bytes);
    result.add_message(CmdMessage::success(format!(
        "Exported catalog as {}",
        EXPORT_FILENAME
    )));
    Ok(result)
}

/// Convenience wrapper that writes the snapshot to `dir/site-data.json`.
pub fn write_to<B: StorageBackend>(store: &mut CatalogStore<B>, dir: &Path) -> Result<CmdResult> {
    let bytes = store.export()?;
    let path = dir.join(EXPORT_FILENAME);
    std::fs::write(&path, &bytes)?;
    let mut result = CmdResult::default().with_exported(bytes);
    result.add_message(CmdMessage::success(format!(
        "Exported catalog to {}",
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryBackend;
    use tempfile::tempdir;

    #[test]
    fn run_carries_snapshot_bytes() {
        let mut store = CatalogStore::new(MemoryBackend::new());
        let result = run(&mut store).unwrap();
        let bytes = result.exported.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value.get("lastUpdated").is_some());
        assert!(value["projects"].is_array());
    }

    #[test]
    fn write_to_creates_the_snapshot_file() {
        let mut store = CatalogStore::new(MemoryBackend::new());
        let dir = tempdir().unwrap();
        write_to(&mut store, dir.path()).unwrap();
        assert!(dir.path().join(EXPORT_FILENAME).is_file());
    }
}
