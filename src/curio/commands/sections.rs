use crate::commands::{CmdMessage, CmdResult, SectionInput};
use crate::error::Result;
use crate::model::{ProjectSection, SectionKind};
use crate::store::{CatalogStore, StorageBackend};

/// Create-or-update a documentation section inside its parent project. New
/// sections append to the end (`order` = current count); edits keep their
/// original `order` unless the input sets one explicitly. `code_language` is
/// only meaningful for code sections and is dropped for every other kind.
///
/// A stale project id is a user-visible notice, never a crash.
pub fn upsert<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    project_id: &str,
    input: SectionInput,
    existing_id: Option<&str>,
) -> Result<CmdResult> {
    let mut doc = store.load()?;
    let Some(project) = doc.project_mut(project_id) else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::error(format!(
            "Project not found: {}",
            project_id
        )));
        return Ok(result);
    };

    let existing = existing_id.and_then(|id| project.sections.iter().position(|s| s.id == id));

    let section = ProjectSection {
        id: match existing {
            Some(i) => project.sections[i].id.clone(),
            None => store.generate_id(),
        },
        title: input.title.trim().to_string(),
        kind: input.kind,
        content: input.content,
        order: match (input.order, existing) {
            (Some(order), _) => order,
            (None, Some(i)) => project.sections[i].order,
            (None, None) => project.sections.len() as u32,
        },
        code_language: if input.kind == SectionKind::Code {
            Some(input.code_language.unwrap_or_else(|| "bash".into()))
        } else {
            None
        },
    };

    let (message, stored) = match existing {
        Some(i) => {
            project.sections[i] = section.clone();
            ("Section updated!", section)
        }
        None => {
            project.sections.push(section.clone());
            ("Section added!", section)
        }
    };
    store.save(&doc)?;

    let mut result = CmdResult::default().with_section(stored);
    result.add_message(CmdMessage::success(message));
    Ok(result)
}

pub fn delete<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    project_id: &str,
    section_id: &str,
) -> Result<CmdResult> {
    let mut doc = store.load()?;
    let Some(project) = doc.project_mut(project_id) else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::error(format!(
            "Project not found: {}",
            project_id
        )));
        return Ok(result);
    };

    let before = project.sections.len();
    project.sections.retain(|s| s.id != section_id);

    let mut result = CmdResult::default();
    if project.sections.len() == before {
        result.add_message(CmdMessage::warning(format!(
            "Section not found: {}",
            section_id
        )));
        return Ok(result);
    }
    store.save(&doc)?;
    result.add_message(CmdMessage::success("Section deleted!"));
    Ok(result)
}
