//! Business logic for catalog operations. Command functions operate on the
//! store, return structured [`CmdResult`] values, and never touch stdout or
//! assume a terminal. Confirmation of destructive operations belongs to the
//! caller; the CLI owns the prompts.

use crate::model::{
    Affiliate, CatalogDocument, Project, ProjectSection, ProjectTheme, SectionKind, SoftwareEntry,
    CUSTOM_ICON,
};

pub mod affiliates;
pub mod export;
pub mod import;
pub mod projects;
pub mod reset;
pub mod sections;
pub mod software;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub affiliate: Option<Affiliate>,
    pub project: Option<Project>,
    pub software: Option<SoftwareEntry>,
    pub section: Option<ProjectSection>,
    pub document: Option<CatalogDocument>,
    pub exported: Option<Vec<u8>>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affiliate(mut self, affiliate: Affiliate) -> Self {
        self.affiliate = Some(affiliate);
        self
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.project = Some(project);
        self
    }

    pub fn with_software(mut self, software: SoftwareEntry) -> Self {
        self.software = Some(software);
        self
    }

    pub fn with_section(mut self, section: ProjectSection) -> Self {
        self.section = Some(section);
        self
    }

    pub fn with_document(mut self, document: CatalogDocument) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_exported(mut self, bytes: Vec<u8>) -> Self {
        self.exported = Some(bytes);
        self
    }
}

/// Shared field derivation: a non-empty custom image forces the `custom`
/// sentinel icon; an empty one keeps the chosen glyph and clears the image.
pub(crate) fn derive_icon(icon: &str, custom_image: &str) -> (String, Option<String>) {
    let custom_image = custom_image.trim();
    if custom_image.is_empty() {
        (icon.to_string(), None)
    } else {
        (CUSTOM_ICON.to_string(), Some(custom_image.to_string()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct AffiliateInput {
    pub name: String,
    pub description: String,
    pub link: String,
    pub icon: String,
    pub custom_image: String,
    pub coming_soon: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectInput {
    pub name: String,
    pub description: String,
    pub badge: String,
    /// Comma-separated on the wire; split and trimmed here.
    pub tags: Vec<String>,
    pub icon: String,
    pub custom_image: String,
    pub theme: Option<ProjectTheme>,
}

#[derive(Debug, Clone, Default)]
pub struct SoftwareInput {
    pub name: String,
    pub description: String,
    pub link: String,
    pub icon: String,
    pub custom_image: String,
    pub under_development: bool,
}

#[derive(Debug, Clone)]
pub struct SectionInput {
    pub title: String,
    pub kind: SectionKind,
    pub content: String,
    /// Explicit display position; new sections default to append-to-end.
    pub order: Option<u32>,
    pub code_language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_icon_prefers_custom_image() {
        let (icon, image) = derive_icon("fa-cube", " assets/img/x.png ");
        assert_eq!(icon, CUSTOM_ICON);
        assert_eq!(image.as_deref(), Some("assets/img/x.png"));
    }

    #[test]
    fn derive_icon_clears_image_when_empty() {
        let (icon, image) = derive_icon("fa-cube", "   ");
        assert_eq!(icon, "fa-cube");
        assert!(image.is_none());
    }
}
