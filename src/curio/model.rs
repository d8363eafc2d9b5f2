use serde::{Deserialize, Serialize};

/// Sentinel stored in `icon` whenever a custom image overrides the built-in
/// glyph. The two fields are mutually exclusive in effect: a non-empty
/// `custom_image` always forces `icon` to this value.
pub const CUSTOM_ICON: &str = "custom";

/// The root persisted object. One JSON document holds the entire catalog;
/// every mutation is a full read-modify-write of this document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub affiliates: Vec<Affiliate>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub software: Vec<SoftwareEntry>,
    /// Marks that default seed content has been applied. A document without
    /// this flag is treated as pre-seed and replaced on next load.
    #[serde(default)]
    pub initialized: bool,
}

impl CatalogDocument {
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn project_mut(&mut self, id: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Affiliate {
    pub id: String,
    pub name: String,
    pub description: String,
    /// May be empty while `coming_soon` is set.
    pub link: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_image: Option<String>,
    #[serde(default)]
    pub coming_soon: bool,
    /// Epoch milliseconds, set once at creation and never updated.
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_image: Option<String>,
    /// Owned exclusively by this project; deleting the project discards them.
    #[serde(default)]
    pub sections: Vec<ProjectSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ProjectTheme>,
    pub created_at: i64,
}

impl Project {
    /// Sections in display order: ascending by `order`, stable by insertion
    /// for duplicate values.
    pub fn ordered_sections(&self) -> Vec<&ProjectSection> {
        let mut sections: Vec<&ProjectSection> = self.sections.iter().collect();
        sections.sort_by_key(|s| s.order);
        sections
    }
}

/// A typed block of documentation content owned by exactly one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSection {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    /// Raw text whose grammar depends on `kind`.
    pub content: String,
    /// Display sequence within the parent project. Duplicates are tolerated
    /// and degrade to insertion order.
    pub order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_language: Option<String>,
}

/// Closed set of section content types. Each variant carries its own input
/// grammar and rendering rule; see `render::sections`. `Unknown` absorbs
/// unrecognized type strings from foreign documents so deserialization never
/// fails, and renders as plain escaped paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Text,
    Code,
    CalloutInfo,
    CalloutWarning,
    CalloutDanger,
    CalloutSuccess,
    #[serde(rename = "cards-2")]
    Cards2,
    #[serde(rename = "cards-3")]
    Cards3,
    Steps,
    List,
    Video,
    Image,
    Links,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Default,
    Ocean,
    Forest,
    Sunset,
    Midnight,
    Custom,
}

/// Per-project color theme. The override fields are meaningful only when
/// `preset` is `Custom`; otherwise they are stored but ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTheme {
    #[serde(default)]
    pub preset: ThemePreset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_bg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_bg_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub link: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_image: Option<String>,
    #[serde(default)]
    pub under_development: bool,
    pub created_at: i64,
}
