//! # Storage Layer
//!
//! The catalog persists as one JSON document behind the [`StorageBackend`]
//! trait, which models the original key-value substrate (one logical key).
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage, one `catalog.json` file in the
//!   data directory.
//! - [`memory::MemoryBackend`]: in-memory storage for tests.
//!
//! [`CatalogStore`] is the typed store on top: it owns load/save/seed/clear
//! of the whole document plus export/import of the snapshot file. Every
//! mutation elsewhere in the crate goes load-full-document, mutate, save-full
//! -document, so a future second writer would see last-write-wins, never a
//! partial write.

use crate::error::{CurioError, Result};
use crate::model::CatalogDocument;
use crate::seed;
use chrono::Utc;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Name of the exported snapshot, chosen so the file can be dropped straight
/// into the static site's data folder.
pub const EXPORT_FILENAME: &str = "site-data.json";

/// One opaque document under one logical key. Backends never interpret the
/// payload.
pub trait StorageBackend {
    fn read_document(&self) -> Result<Option<String>>;
    fn write_document(&mut self, raw: &str) -> Result<()>;
    fn remove_document(&mut self) -> Result<()>;
}

pub struct CatalogStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> CatalogStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Reads the persisted document. A missing document, malformed JSON, or a
    /// document that predates the `initialized` marker all resolve the same
    /// way: the default seed content is written and returned. Loading never
    /// fails on bad data.
    pub fn load(&mut self) -> Result<CatalogDocument> {
        if let Some(raw) = self.backend.read_document()? {
            if let Ok(doc) = serde_json::from_str::<CatalogDocument>(&raw) {
                if doc.initialized {
                    return Ok(doc);
                }
            }
        }
        let doc = seed::default_catalog();
        self.save(&doc)?;
        Ok(doc)
    }

    /// Serializes and persists the full document, overwriting any prior value.
    pub fn save(&mut self, doc: &CatalogDocument) -> Result<()> {
        let raw = serde_json::to_string(doc)?;
        self.backend.write_document(&raw)
    }

    /// Deletes the persisted document entirely. The next `load` reseeds.
    pub fn clear(&mut self) -> Result<()> {
        self.backend.remove_document()
    }

    /// Time-based base-36 prefix plus a random suffix. Collision-avoidance is
    /// all that is required for a single-writer catalog.
    pub fn generate_id(&self) -> String {
        let millis = Utc::now().timestamp_millis().max(0) as u64;
        let suffix = Uuid::new_v4().simple().to_string();
        format!("{}{}", to_base36(millis), &suffix[..10])
    }

    /// Current document as pretty-printed snapshot bytes, stamped with a
    /// `lastUpdated` marker for tracking.
    pub fn export(&mut self) -> Result<Vec<u8>> {
        let doc = self.load()?;
        let mut value = serde_json::to_value(&doc)?;
        if let Some(map) = value.as_object_mut() {
            map.insert(
                "lastUpdated".into(),
                serde_json::Value::from(Utc::now().timestamp_millis()),
            );
        }
        let pretty = serde_json::to_string_pretty(&value)?;
        Ok(pretty.into_bytes())
    }

    /// Parses untrusted snapshot bytes. The three top-level collections must
    /// all be present as arrays; anything else is rejected with a descriptive
    /// error and the existing store is left untouched. Only a valid document
    /// is persisted.
    pub fn import(&mut self, bytes: &[u8]) -> Result<CatalogDocument> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| CurioError::Import(format!("invalid JSON: {}", e)))?;
        let object = value
            .as_object()
            .ok_or_else(|| CurioError::Import("expected a JSON object".into()))?;
        for key in ["affiliates", "projects", "software"] {
            if !object.get(key).map(|v| v.is_array()).unwrap_or(false) {
                return Err(CurioError::Import(format!(
                    "missing or invalid `{}` collection",
                    key
                )));
            }
        }
        let mut doc: CatalogDocument = serde_json::from_value(value)
            .map_err(|e| CurioError::Import(format!("malformed record: {}", e)))?;
        // Imported snapshots count as initialized; otherwise the next load
        // would replace them with seed content.
        doc.initialized = true;
        self.save(&doc)?;
        Ok(doc)
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryBackend;
    use super::*;

    fn store() -> CatalogStore<MemoryBackend> {
        CatalogStore::new(MemoryBackend::new())
    }

    #[test]
    fn load_seeds_empty_store_once() {
        let mut store = store();
        let first = store.load().unwrap();
        assert!(first.initialized);
        assert_eq!(first.affiliates.len(), 4);
        assert_eq!(first.projects.len(), 2);
        assert_eq!(first.software.len(), 3);

        // Idempotent read: a second load never reseeds.
        let second = store.load().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn load_recovers_from_malformed_document() {
        let mut store = store();
        store.backend.write_document("{not json").unwrap();
        let doc = store.load().unwrap();
        assert!(doc.initialized);
        assert_eq!(doc.affiliates.len(), 4);
    }

    #[test]
    fn uninitialized_document_is_replaced_by_seed() {
        let mut store = store();
        store
            .backend
            .write_document(r#"{"affiliates":[],"projects":[],"software":[]}"#)
            .unwrap();
        let doc = store.load().unwrap();
        assert!(doc.initialized);
        assert_eq!(doc.projects.len(), 2);
    }

    #[test]
    fn export_import_round_trips() {
        let mut store = store();
        let doc = store.load().unwrap();
        let bytes = store.export().unwrap();

        let mut other = CatalogStore::new(MemoryBackend::new());
        let imported = other.import(&bytes).unwrap();
        assert_eq!(imported, doc);
    }

    #[test]
    fn import_rejects_missing_collections() {
        let mut store = store();
        let before = store.load().unwrap();

        let err = store.import(br#"{"projects": []}"#).unwrap_err();
        assert!(matches!(err, CurioError::Import(_)));

        // Rejected input leaves the store untouched.
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn import_rejects_garbage() {
        let mut store = store();
        assert!(store.import(b"not json at all").is_err());
        assert!(store.import(b"[1,2,3]").is_err());
    }

    #[test]
    fn clear_then_load_reseeds() {
        let mut store = store();
        let mut doc = store.load().unwrap();
        doc.affiliates.clear();
        store.save(&doc).unwrap();

        store.clear().unwrap();
        let fresh = store.load().unwrap();
        assert_eq!(fresh.affiliates.len(), 4);
    }

    #[test]
    fn generated_ids_are_distinct() {
        let store = store();
        let a = store.generate_id();
        let b = store.generate_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn base36_encodes_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
