use crate::commands::{derive_icon, CmdMessage, CmdResult, ProjectInput};
use crate::error::Result;
use crate::model::Project;
use crate::store::{CatalogStore, StorageBackend};
use chrono::Utc;

/// Create-or-update by optional id. Editing is a full-record replace, except
/// that `id`, `created_at`, and the owned `sections` carry over from the
/// existing record.
pub fn upsert<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    input: ProjectInput,
    existing_id: Option<&str>,
) -> Result<CmdResult> {
    let mut doc = store.load()?;
    let (icon, custom_image) = derive_icon(&input.icon, &input.custom_image);

    let existing = existing_id.and_then(|id| doc.projects.iter().position(|p| p.id == id));

    let project = Project {
        id: match existing {
            Some(i) => doc.projects[i].id.clone(),
            None => store.generate_id(),
        },
        name: input.name.trim().to_string(),
        description: input.description.trim().to_string(),
        badge: input.badge.trim().to_string(),
        tags: input
            .tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        icon,
        custom_image,
        sections: match existing {
            Some(i) => doc.projects[i].sections.clone(),
            None => Vec::new(),
        },
        theme: input.theme,
        created_at: match existing {
            Some(i) => doc.projects[i].created_at,
            None => Utc::now().timestamp_millis(),
        },
    };

    let (message, stored) = match existing {
        Some(i) => {
            doc.projects[i] = project.clone();
            ("Project updated!", project)
        }
        None => {
            doc.projects.push(project.clone());
            ("Project added!", project)
        }
    };
    store.save(&doc)?;

    let mut result = CmdResult::default().with_project(stored);
    result.add_message(CmdMessage::success(message));
    Ok(result)
}

/// Removes the project and, by ownership, every section it holds.
pub fn delete<B: StorageBackend>(store: &mut CatalogStore<B>, id: &str) -> Result<CmdResult> {
    let mut doc = store.load()?;
    let before = doc.projects.len();
    doc.projects.retain(|p| p.id != id);

    let mut result = CmdResult::default();
    if doc.projects.len() == before {
        result.add_message(CmdMessage::warning(format!("Project not found: {}", id)));
        return Ok(result);
    }
    store.save(&doc)?;
    result.add_message(CmdMessage::success("Project deleted!"));
    Ok(result)
}
