//! Source-of-truth selection for public pages. Published pages prefer the
//! static snapshot file when it is present and parses; preview mode and any
//! snapshot failure fall back to the local store. Fallback is silent: a
//! missing or broken snapshot is expected, not an error.

use crate::error::Result;
use crate::model::CatalogDocument;
use crate::store::{CatalogStore, StorageBackend};
use std::path::Path;

/// Resolves the document a public page should render. `preview` skips the
/// snapshot entirely and reads local unpublished edits.
pub fn site_document<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    snapshot: Option<&Path>,
    preview: bool,
) -> Result<CatalogDocument> {
    if !preview {
        if let Some(doc) = snapshot.and_then(read_snapshot) {
            return Ok(doc);
        }
    }
    store.load()
}

fn read_snapshot(path: &Path) -> Option<CatalogDocument> {
    let raw = std::fs::read(path).ok()?;
    serde_json::from_slice(&raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryBackend;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn store() -> CatalogStore<MemoryBackend> {
        CatalogStore::new(MemoryBackend::new())
    }

    #[test]
    fn published_page_prefers_snapshot() {
        let mut store = store();
        let mut file = NamedTempFile::new().unwrap();
        let bytes = store.export().unwrap();
        // A snapshot with a marker rename distinguishes it from local data.
        let mut value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value["projects"][0]["name"] = "Snapshot Copy".into();
        file.write_all(value.to_string().as_bytes()).unwrap();

        let doc = site_document(&mut store, Some(file.path()), false).unwrap();
        assert_eq!(doc.projects[0].name, "Snapshot Copy");
    }

    #[test]
    fn preview_mode_reads_local_edits() {
        let mut store = store();
        let mut file = NamedTempFile::new().unwrap();
        let bytes = store.export().unwrap();
        let mut value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value["projects"][0]["name"] = "Snapshot Copy".into();
        file.write_all(value.to_string().as_bytes()).unwrap();

        let doc = site_document(&mut store, Some(file.path()), true).unwrap();
        assert_ne!(doc.projects[0].name, "Snapshot Copy");
    }

    #[test]
    fn broken_snapshot_falls_back_silently() {
        let mut store = store();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{broken").unwrap();

        let doc = site_document(&mut store, Some(file.path()), false).unwrap();
        assert!(doc.initialized);
    }

    #[test]
    fn missing_snapshot_falls_back_silently() {
        let mut store = store();
        let doc = site_document(&mut store, Some(Path::new("/nonexistent/snap.json")), false).unwrap();
        assert!(doc.initialized);
    }
}
