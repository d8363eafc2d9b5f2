use crate::commands::{derive_icon, CmdMessage, CmdResult, SoftwareInput};
use crate::error::Result;
use crate::model::SoftwareEntry;
use crate::store::{CatalogStore, StorageBackend};
use chrono::Utc;

pub fn upsert<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    input: SoftwareInput,
    existing_id: Option<&str>,
) -> Result<CmdResult> {
    let mut doc = store.load()?;
    let (icon, custom_image) = derive_icon(&input.icon, &input.custom_image);

    let existing = existing_id.and_then(|id| doc.software.iter().position(|s| s.id == id));

    let entry = SoftwareEntry {
        id: match existing {
            Some(i) => doc.software[i].id.clone(),
            None => store.generate_id(),
        },
        name: input.name.trim().to_string(),
        description: input.description.trim().to_string(),
        link: input.link.trim().to_string(),
        icon,
        custom_image,
        under_development: input.under_development,
        created_at: match existing {
            Some(i) => doc.software[i].created_at,
            None => Utc::now().timestamp_millis(),
        },
    };

    let (message, stored) = match existing {
        Some(i) => {
            doc.software[i] = entry.clone();
            ("Software updated!", entry)
        }
        None => {
            doc.software.push(entry.clone());
            ("Software added!", entry)
        }
    };
    store.save(&doc)?;

    let mut result = CmdResult::default().with_software(stored);
    result.add_message(CmdMessage::success(message));
    Ok(result)
}

pub fn delete<B: StorageBackend>(store: &mut CatalogStore<B>, id: &str) -> Result<CmdResult> {
    let mut doc = store.load()?;
    let before = doc.software.len();
    doc.software.retain(|s| s.id != id);

    let mut result = CmdResult::default();
    if doc.software.len() == before {
        result.add_message(CmdMessage::warning(format!("Software not found: {}", id)));
        return Ok(result);
    }
    store.save(&doc)?;
    result.add_message(CmdMessage::success("Software deleted!"));
    Ok(result)
}
