//! The documentation-section formatter. One pure function per content type,
//! dispatched from [`section_html`]; the full per-project documentation view
//! and its searchable outline are assembled on top.

use crate::model::{Project, ProjectSection, SectionKind, ThemePreset};
use crate::render::inline::{inline_html, rich_text_html};
use crate::render::escape_html;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Renders one section to an HTML fragment from `kind` and `content` alone.
/// Unknown kinds degrade to escaped paragraphs.
pub fn section_html(section: &ProjectSection) -> String {
    let body = match section.kind {
        SectionKind::Text => rich_text_html(&section.content),
        SectionKind::Code => code_block_html(
            &section.content,
            section.code_language.as_deref().unwrap_or("bash"),
        ),
        SectionKind::CalloutInfo => callout_html("info", &section.content),
        SectionKind::CalloutWarning => callout_html("warning", &section.content),
        SectionKind::CalloutDanger => callout_html("danger", &section.content),
        SectionKind::CalloutSuccess => callout_html("success", &section.content),
        SectionKind::Cards2 => cards_html(&section.content, 2),
        SectionKind::Cards3 => cards_html(&section.content, 3),
        SectionKind::Steps => steps_html(&section.content),
        SectionKind::List => list_html(&section.content),
        SectionKind::Video => video_html(&section.content),
        SectionKind::Image => image_html(&section.content),
        SectionKind::Links => links_html(&section.content),
        SectionKind::Unknown => fallback_html(&section.content),
    };
    format!(
        "<section class=\"docs-section\" id=\"section-{}\"><h2 class=\"docs-heading\">{}</h2>{}</section>",
        escape_html(&section.id),
        escape_html(&section.title),
        body
    )
}

fn code_block_html(content: &str, language: &str) -> String {
    format!(
        concat!(
            "<div class=\"docs-code\">",
            "<div class=\"docs-code-header\">",
            "<span class=\"docs-code-lang\">{lang}</span>",
            "<button class=\"copy-btn\" onclick=\"copyCode(this)\">Copy</button>",
            "</div>",
            "<pre><code class=\"language-{lang}\">{code}</code></pre>",
            "</div>"
        ),
        lang = escape_html(language),
        code = escape_html(content)
    )
}

fn callout_html(variant: &str, content: &str) -> String {
    format!(
        "<div class=\"docs-callout callout-{}\">{}</div>",
        variant,
        rich_text_html(content)
    )
}

/// One card per `---`-delimited entry; entry grammar is
/// `Title | Description | OptionalCode`.
fn cards_html(content: &str, columns: u8) -> String {
    let mut out = format!("<div class=\"docs-cards docs-cards-{}\">", columns);
    for entry in split_entries(content) {
        let (title, description, code) = split_card_fields(&entry);
        out.push_str("<div class=\"docs-card\">");
        out.push_str(&format!("<h3>{}</h3>", inline_html(title)));
        if !description.is_empty() {
            out.push_str(&format!("<p>{}</p>", inline_html(description)));
        }
        if let Some(code) = code {
            out.push_str(&format!(
                "<pre class=\"card-code\"><code>{}</code></pre>",
                escape_html(code)
            ));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

fn steps_html(content: &str) -> String {
    let mut out = String::from("<ol class=\"docs-steps\">");
    for step in split_entries(content) {
        out.push_str(&format!(
            "<li class=\"docs-step\">{}</li>",
            rich_text_html(&step)
        ));
    }
    out.push_str("</ol>");
    out
}

fn list_html(content: &str) -> String {
    let mut out = String::from("<ul class=\"docs-list\">");
    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        out.push_str(&format!("<li>{}</li>", inline_html(line.trim())));
    }
    out.push_str("</ul>");
    out
}

fn video_html(content: &str) -> String {
    let url = content.trim();
    match video_embed_url(url) {
        Some(embed) => format!(
            concat!(
                "<div class=\"docs-video\">",
                "<iframe src=\"{}\" frameborder=\"0\" ",
                "allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture\" ",
                "allowfullscreen></iframe>",
                "</div>"
            ),
            escape_html(&embed)
        ),
        None => format!(
            "<p><a href=\"{0}\" target=\"_blank\" rel=\"noopener noreferrer\">{0}</a></p>",
            escape_html(url)
        ),
    }
}

/// Recognizes YouTube (`watch?v=`, `youtu.be/`) and Vimeo URLs.
fn video_embed_url(url: &str) -> Option<String> {
    if let Some(rest) = url.split("youtube.com/watch?v=").nth(1) {
        let id = rest.split(['&', '#']).next()?;
        return Some(format!("https://www.youtube.com/embed/{}", id));
    }
    if let Some(rest) = url.split("youtu.be/").nth(1) {
        let id = rest.split(['?', '#']).next()?;
        return Some(format!("https://www.youtube.com/embed/{}", id));
    }
    if let Some(rest) = url.split("vimeo.com/").nth(1) {
        let id = rest.split(['?', '#']).next()?;
        if id.chars().all(|c| c.is_ascii_digit()) && !id.is_empty() {
            return Some(format!("https://player.vimeo.com/video/{}", id));
        }
    }
    None
}

fn image_html(content: &str) -> String {
    let mut fields = content.splitn(3, '|').map(str::trim);
    let path = fields.next().unwrap_or_default();
    let caption = fields.next().unwrap_or_default();
    let alt = fields.next().unwrap_or(caption);

    let mut out = format!(
        "<figure class=\"docs-image\"><img src=\"{}\" alt=\"{}\">",
        escape_html(path),
        escape_html(alt)
    );
    if !caption.is_empty() {
        out.push_str(&format!("<figcaption>{}</figcaption>", escape_html(caption)));
    }
    out.push_str("</figure>");
    out
}

/// One link card per line; line grammar is `Text | URL | OptionalDescription`.
fn links_html(content: &str) -> String {
    let mut out = String::from("<div class=\"docs-links\">");
    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        let mut fields = line.splitn(3, '|').map(str::trim);
        let text = fields.next().unwrap_or_default();
        let url = fields.next().unwrap_or_default();
        let description = fields.next().unwrap_or_default();

        out.push_str(&format!(
            "<a class=\"docs-link-card\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">",
            escape_html(url)
        ));
        out.push_str(&format!("<span class=\"link-title\">{}</span>", escape_html(text)));
        if !description.is_empty() {
            out.push_str(&format!(
                "<span class=\"link-desc\">{}</span>",
                escape_html(description)
            ));
        }
        out.push_str("</a>");
    }
    out.push_str("</div>");
    out
}

fn fallback_html(content: &str) -> String {
    content
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .map(|p| format!("<p>{}</p>", escape_html(p.trim())))
        .collect()
}

fn split_entries(content: &str) -> Vec<String> {
    content
        .split("\n---\n")
        .flat_map(|chunk| {
            // Tolerate a delimiter without surrounding newlines on one side.
            if chunk.trim() == "---" {
                vec![]
            } else {
                vec![chunk.trim().to_string()]
            }
        })
        .filter(|e| !e.is_empty())
        .collect()
}

fn split_card_fields(entry: &str) -> (&str, &str, Option<&str>) {
    let mut fields = entry.splitn(3, '|');
    let title = fields.next().unwrap_or_default().trim();
    let description = fields.next().unwrap_or_default().trim();
    let code = fields.next().map(str::trim).filter(|c| !c.is_empty());
    (title, description, code)
}

struct Palette {
    primary: &'static str,
    accent: &'static str,
    text: &'static str,
    card_bg: &'static str,
    hero_bg: &'static str,
}

static PRESET_PALETTES: Lazy<HashMap<ThemePreset, Palette>> = Lazy::new(|| {
    HashMap::from([
        (
            ThemePreset::Default,
            Palette {
                primary: "#0ea5e9",
                accent: "#38bdf8",
                text: "#f8fafc",
                card_bg: "#1e293b",
                hero_bg: "#0f172a",
            },
        ),
        (
            ThemePreset::Ocean,
            Palette {
                primary: "#06b6d4",
                accent: "#22d3ee",
                text: "#ecfeff",
                card_bg: "#164e63",
                hero_bg: "#083344",
            },
        ),
        (
            ThemePreset::Forest,
            Palette {
                primary: "#22c55e",
                accent: "#4ade80",
                text: "#f0fdf4",
                card_bg: "#14532d",
                hero_bg: "#052e16",
            },
        ),
        (
            ThemePreset::Sunset,
            Palette {
                primary: "#f97316",
                accent: "#fb923c",
                text: "#fff7ed",
                card_bg: "#7c2d12",
                hero_bg: "#431407",
            },
        ),
        (
            ThemePreset::Midnight,
            Palette {
                primary: "#8b5cf6",
                accent: "#a78bfa",
                text: "#f5f3ff",
                card_bg: "#312e81",
                hero_bg: "#1e1b4b",
            },
        ),
    ])
});

/// CSS custom-property block for a project's theme. `Custom` reads the five
/// override fields, falling back to the default palette per field; every
/// other preset uses its fixed palette and ignores overrides.
pub fn theme_css(project: &Project) -> String {
    let default = &PRESET_PALETTES[&ThemePreset::Default];
    let theme = project.theme.clone().unwrap_or_default();

    let (primary, accent, text, card_bg, hero_bg) = if theme.preset == ThemePreset::Custom {
        (
            theme.primary_color.unwrap_or_else(|| default.primary.into()),
            theme.accent_color.unwrap_or_else(|| default.accent.into()),
            theme.text_color.unwrap_or_else(|| default.text.into()),
            theme.card_bg_color.unwrap_or_else(|| default.card_bg.into()),
            theme.hero_bg_color.unwrap_or_else(|| default.hero_bg.into()),
        )
    } else {
        let palette = PRESET_PALETTES.get(&theme.preset).unwrap_or(default);
        (
            palette.primary.to_string(),
            palette.accent.to_string(),
            palette.text.to_string(),
            palette.card_bg.to_string(),
            palette.hero_bg.to_string(),
        )
    };

    format!(
        concat!(
            "<style>:root{{",
            "--docs-primary:{};",
            "--docs-accent:{};",
            "--docs-text:{};",
            "--docs-card-bg:{};",
            "--docs-hero-bg:{};",
            "}}</style>"
        ),
        escape_html(&primary),
        escape_html(&accent),
        escape_html(&text),
        escape_html(&card_bg),
        escape_html(&hero_bg)
    )
}

/// The full per-project documentation view: theme, hero, then every section
/// sorted ascending by `order`.
pub fn project_docs_html(project: &Project) -> String {
    let mut out = theme_css(project);
    out.push_str("<header class=\"docs-hero\">");
    out.push_str(&format!("<h1>{}</h1>", escape_html(&project.name)));
    if !project.description.is_empty() {
        out.push_str(&format!("<p>{}</p>", escape_html(&project.description)));
    }
    if !project.tags.is_empty() {
        out.push_str("<div class=\"docs-tags\">");
        for tag in &project.tags {
            out.push_str(&format!("<span class=\"docs-tag\">{}</span>", escape_html(tag)));
        }
        out.push_str("</div>");
    }
    out.push_str("</header>");
    for section in project.ordered_sections() {
        out.push_str(&section_html(section));
    }
    out
}

/// A searchable heading from a rendered documentation page: the section
/// headings themselves plus each card title inside card-grid sections.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub title: String,
    /// In-page anchor, `#section-{id}`.
    pub anchor: String,
    pub description: String,
    pub icon: String,
}

/// Structural outline of a project's documentation, in display order. This is
/// what the docs-page search layer indexes in place of scanning rendered
/// markup.
pub fn docs_outline(project: &Project) -> Vec<OutlineEntry> {
    let mut entries = Vec::new();
    for section in project.ordered_sections() {
        let anchor = format!("#section-{}", section.id);
        entries.push(OutlineEntry {
            title: section.title.clone(),
            anchor: anchor.clone(),
            description: truncate_chars(section.content.trim(), 100),
            icon: "fa-bookmark".into(),
        });
        if matches!(section.kind, SectionKind::Cards2 | SectionKind::Cards3) {
            for entry in split_entries(&section.content) {
                let (title, description, _) = split_card_fields(&entry);
                if title.is_empty() {
                    continue;
                }
                entries.push(OutlineEntry {
                    title: title.to_string(),
                    anchor: anchor.clone(),
                    description: truncate_chars(description, 80),
                    icon: "fa-file-lines".into(),
                });
            }
        }
    }
    entries
}

fn truncate_chars(text: &str, max: usize) -> String {
    let text = text.replace('\n', " ");
    if text.chars().count() <= max {
        return text;
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectTheme;

    fn section(kind: SectionKind, content: &str) -> ProjectSection {
        ProjectSection {
            id: "s1".into(),
            title: "Title".into(),
            kind,
            content: content.into(),
            order: 0,
            code_language: None,
        }
    }

    fn project(sections: Vec<ProjectSection>) -> Project {
        Project {
            id: "p1".into(),
            name: "Proj".into(),
            description: "About".into(),
            badge: String::new(),
            tags: vec!["Pi".into()],
            icon: "fa-cube".into(),
            custom_image: None,
            sections,
            theme: None,
            created_at: 0,
        }
    }

    #[test]
    fn cards_two_entries_only_first_has_code() {
        let html = section_html(&section(SectionKind::Cards2, "A|B|echo 1\n---\nC|D"));
        assert_eq!(html.matches("<div class=\"docs-card\">").count(), 2);
        assert_eq!(html.matches("card-code").count(), 1);
        assert!(html.contains("<code>echo 1</code>"));
        assert!(html.contains("<h3>C</h3>"));
    }

    #[test]
    fn code_section_labels_language_and_copy_affordance() {
        let mut sec = section(SectionKind::Code, "sudo apt update && sudo apt upgrade");
        sec.code_language = Some("bash".into());
        let html = section_html(&sec);
        assert!(html.contains("docs-code-lang\">bash"));
        assert!(html.contains("copyCode(this)"));
        assert!(html.contains("sudo apt update &amp;&amp; sudo apt upgrade"));
    }

    #[test]
    fn callout_variant_keys_the_class() {
        let html = section_html(&section(SectionKind::CalloutWarning, "Careful"));
        assert!(html.contains("docs-callout callout-warning"));
        assert!(html.contains("<p>Careful</p>"));
    }

    #[test]
    fn steps_render_as_ordered_panels() {
        let html = section_html(&section(
            SectionKind::Steps,
            "First step\n---\nSecond with\n```bash\nmake\n```",
        ));
        assert!(html.starts_with("<section"));
        assert_eq!(html.matches("docs-step\"").count(), 2);
        assert!(html.contains("<ol class=\"docs-steps\">"));
        assert!(html.contains("language-bash"));
    }

    #[test]
    fn list_renders_one_item_per_line() {
        let html = section_html(&section(SectionKind::List, "one\ntwo\n\nthree"));
        assert_eq!(html.matches("<li>").count(), 3);
    }

    #[test]
    fn video_recognizes_platforms_and_falls_back() {
        let yt = section_html(&section(
            SectionKind::Video,
            "https://www.youtube.com/watch?v=abc123&t=10",
        ));
        assert!(yt.contains("youtube.com/embed/abc123"));

        let short = section_html(&section(SectionKind::Video, "https://youtu.be/xyz789"));
        assert!(short.contains("youtube.com/embed/xyz789"));

        let vimeo = section_html(&section(SectionKind::Video, "https://vimeo.com/12345"));
        assert!(vimeo.contains("player.vimeo.com/video/12345"));

        let other = section_html(&section(SectionKind::Video, "https://example.com/v.mp4"));
        assert!(!other.contains("<iframe"));
        assert!(other.contains("<a href=\"https://example.com/v.mp4\""));
    }

    #[test]
    fn image_renders_caption_and_alt() {
        let html = section_html(&section(
            SectionKind::Image,
            "assets/img/board.png | The board | Annotated photo",
        ));
        assert!(html.contains("src=\"assets/img/board.png\""));
        assert!(html.contains("alt=\"Annotated photo\""));
        assert!(html.contains("<figcaption>The board</figcaption>"));
    }

    #[test]
    fn links_render_as_cards_with_optional_description() {
        let html = section_html(&section(
            SectionKind::Links,
            "Docs|https://example.com/docs|Read first\nRepo|https://example.com/repo",
        ));
        assert_eq!(html.matches("docs-link-card").count(), 2);
        assert_eq!(html.matches("link-desc").count(), 1);
    }

    #[test]
    fn unknown_kind_falls_back_to_escaped_paragraphs() {
        let html = section_html(&section(SectionKind::Unknown, "<b>raw</b>\n\nsecond"));
        assert!(html.contains("<p>&lt;b&gt;raw&lt;/b&gt;</p>"));
        assert!(html.contains("<p>second</p>"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn docs_view_orders_sections_ascending() {
        let mut late = section(SectionKind::Text, "last");
        late.id = "z".into();
        late.title = "Last".into();
        late.order = 5;
        let mut early = section(SectionKind::Text, "first");
        early.id = "a".into();
        early.title = "First".into();
        early.order = 1;

        let html = project_docs_html(&project(vec![late, early]));
        let first = html.find("First").unwrap();
        let last = html.find("Last").unwrap();
        assert!(first < last);
    }

    #[test]
    fn custom_theme_reads_overrides_with_defaults() {
        let mut p = project(vec![]);
        p.theme = Some(ProjectTheme {
            preset: ThemePreset::Custom,
            primary_color: Some("#112233".into()),
            ..ProjectTheme::default()
        });
        let css = theme_css(&p);
        assert!(css.contains("--docs-primary:#112233;"));
        assert!(css.contains("--docs-accent:#38bdf8;"));
    }

    #[test]
    fn preset_theme_ignores_overrides() {
        let mut p = project(vec![]);
        p.theme = Some(ProjectTheme {
            preset: ThemePreset::Forest,
            primary_color: Some("#112233".into()),
            ..ProjectTheme::default()
        });
        let css = theme_css(&p);
        assert!(css.contains("--docs-primary:#22c55e;"));
    }

    #[test]
    fn outline_includes_sections_and_card_titles() {
        let cards = section(SectionKind::Cards2, "GPIO|General purpose pins\n---\nI2C|Bus");
        let outline = docs_outline(&project(vec![cards]));
        assert_eq!(outline.len(), 3);
        assert_eq!(outline[0].title, "Title");
        assert_eq!(outline[1].title, "GPIO");
        assert_eq!(outline[1].anchor, "#section-s1");
        assert_eq!(outline[2].title, "I2C");
    }
}
