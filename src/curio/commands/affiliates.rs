use crate::commands::{derive_icon, AffiliateInput, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Affiliate;
use crate::store::{CatalogStore, StorageBackend};
use chrono::Utc;

/// Create-or-update by optional id. An unknown `existing_id` falls through to
/// create, so stale edits never error. The id and `created_at` of an existing
/// entity are never regenerated.
pub fn upsert<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    input: AffiliateInput,
    existing_id: Option<&str>,
) -> Result<CmdResult> {
    let mut doc = store.load()?;
    let (icon, custom_image) = derive_icon(&input.icon, &input.custom_image);

    let existing = existing_id.and_then(|id| doc.affiliates.iter().position(|a| a.id == id));

    let affiliate = Affiliate {
        id: match existing {
            Some(i) => doc.affiliates[i].id.clone(),
            None => store.generate_id(),
        },
        name: input.name.trim().to_string(),
        description: input.description.trim().to_string(),
        link: input.link.trim().to_string(),
        icon,
        custom_image,
        coming_soon: input.coming_soon,
        created_at: match existing {
            Some(i) => doc.affiliates[i].created_at,
            None => Utc::now().timestamp_millis(),
        },
    };

    let (message, stored) = match existing {
        Some(i) => {
            doc.affiliates[i] = affiliate.clone();
            ("Affiliate updated!", affiliate)
        }
        None => {
            doc.affiliates.push(affiliate.clone());
            ("Affiliate added!", affiliate)
        }
    };
    store.save(&doc)?;

    let mut result = CmdResult::default().with_affiliate(stored);
    result.add_message(CmdMessage::success(message));
    Ok(result)
}

/// Removes the affiliate with the given id. A missing id is a warning, not an
/// error.
pub fn delete<B: StorageBackend>(store: &mut CatalogStore<B>, id: &str) -> Result<CmdResult> {
    let mut doc = store.load()?;
    let before = doc.affiliates.len();
    doc.affiliates.retain(|a| a.id != id);

    let mut result = CmdResult::default();
    if doc.affiliates.len() == before {
        result.add_message(CmdMessage::warning(format!("Affiliate not found: {}", id)));
        return Ok(result);
    }
    store.save(&doc)?;
    result.add_message(CmdMessage::success("Affiliate deleted!"));
    Ok(result)
}
