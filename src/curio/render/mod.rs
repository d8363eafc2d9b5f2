//! # Rendering Layer
//!
//! Pure functions from catalog entities to HTML fragments. Nothing here reads
//! the store or keeps state: callers load a document and hand entities in,
//! which keeps every renderer testable as plain string functions.
//!
//! - [`inline`]: the constrained inline/rich-text grammar for free text.
//! - [`sections`]: the documentation-section formatter and full docs pages.
//! - [`admin`]: admin list views with edit/delete affordances.
//! - [`site`]: public-facing cards for the non-admin pages.
//!
//! Every free-text field is escaped before interpolation. The only tags that
//! ever reach output from user content are the ones the inline grammar emits.

pub mod admin;
pub mod inline;
pub mod sections;
pub mod site;

pub use sections::{docs_outline, project_docs_html, section_html, OutlineEntry};

/// Escapes text for safe interpolation into HTML body or attribute position.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"A&B"</b>'s"#),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;&#39;s"
        );
    }

    #[test]
    fn escape_passes_plain_text_through() {
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
