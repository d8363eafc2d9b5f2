use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{CatalogStore, StorageBackend};

/// Wipes the stored document entirely. Callers are expected to have confirmed
/// twice before reaching here; the command itself asks nothing.
pub fn clear_all<B: StorageBackend>(store: &mut CatalogStore<B>) -> Result<CmdResult> {
    store.clear()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("All data cleared."));
    result.add_message(CmdMessage::info(
        "The default catalog will be recreated on next use.",
    ));
    Ok(result)
}

/// Drops the current catalog and immediately reseeds the defaults.
pub fn reset_to_defaults<B: StorageBackend>(store: &mut CatalogStore<B>) -> Result<CmdResult> {
    store.clear()?;
    let doc = store.load()?;
    let mut result = CmdResult::default().with_document(doc);
    result.add_message(CmdMessage::success("Catalog reset to default content."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{affiliates, AffiliateInput};
    use crate::store::memory::MemoryBackend;

    #[test]
    fn reset_discards_user_entries() {
        let mut store = CatalogStore::new(MemoryBackend::new());
        affiliates::upsert(
            &mut store,
            AffiliateInput {
                name: "Extra".into(),
                icon: "fa-store".into(),
                ..AffiliateInput::default()
            },
            None,
        )
        .unwrap();
        assert_eq!(store.load().unwrap().affiliates.len(), 5);

        let result = reset_to_defaults(&mut store).unwrap();
        assert_eq!(result.document.unwrap().affiliates.len(), 4);
    }

    #[test]
    fn clear_all_reports_and_wipes() {
        let mut store = CatalogStore::new(MemoryBackend::new());
        store.load().unwrap();
        let result = clear_all(&mut store).unwrap();
        assert_eq!(result.messages.len(), 2);
        // The very next load reseeds from scratch.
        assert!(store.load().unwrap().initialized);
    }
}
