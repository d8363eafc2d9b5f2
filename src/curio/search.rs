//! # Search
//!
//! A flat index over the catalog (plus, on documentation pages, the page's
//! own outline) with case-insensitive substring matching. [`LiveSearch`]
//! owns the incremental-query session state: current results, the keyboard
//! cursor, and submit resolution.

use crate::model::{CatalogDocument, CUSTOM_ICON};
use crate::render::{escape_html, site, OutlineEntry};

pub const LIVE_RESULT_CAP: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Project,
    Software,
    Affiliate,
    Section,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Project => "Projects",
            Category::Software => "Software",
            Category::Affiliate => "Affiliates",
            Category::Section => "On This Page",
        }
    }
}

/// Derived, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: Category,
    pub icon: String,
}

/// Flattens the catalog into searchable entries. Order is fixed: page
/// outline first (when on a docs page), then projects, software, and
/// affiliates. Coming-soon affiliates are excluded.
pub fn build_index(doc: &CatalogDocument, outline: Option<&[OutlineEntry]>) -> Vec<SearchResult> {
    let mut index = Vec::new();

    if let Some(outline) = outline {
        for entry in outline {
            index.push(SearchResult {
                title: entry.title.clone(),
                url: entry.anchor.clone(),
                description: entry.description.clone(),
                category: Category::Section,
                icon: entry.icon.clone(),
            });
        }
    }

    for project in &doc.projects {
        index.push(SearchResult {
            title: project.name.clone(),
            url: site::project_url(project),
            description: project.description.clone(),
            category: Category::Project,
            icon: glyph_or(&project.icon, "fa-folder"),
        });
    }
    for entry in &doc.software {
        index.push(SearchResult {
            title: entry.name.clone(),
            url: entry.link.clone(),
            description: entry.description.clone(),
            category: Category::Software,
            icon: glyph_or(&entry.icon, "fa-code"),
        });
    }
    for affiliate in doc.affiliates.iter().filter(|a| !a.coming_soon) {
        index.push(SearchResult {
            title: affiliate.name.clone(),
            url: affiliate.link.clone(),
            description: affiliate.description.clone(),
            category: Category::Affiliate,
            icon: glyph_or(&affiliate.icon, "fa-link"),
        });
    }
    index
}

// Search dropdowns show font glyphs only; a custom image falls back to a
// generic one per category.
fn glyph_or(icon: &str, fallback: &str) -> String {
    if icon == CUSTOM_ICON {
        fallback.to_string()
    } else {
        icon.to_string()
    }
}

/// Case-insensitive substring match against title or description. No ranking
/// beyond index order, no fuzzy matching.
pub fn search<'a>(index: &'a [SearchResult], query: &str) -> Vec<&'a SearchResult> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    index
        .iter()
        .filter(|r| {
            r.title.to_lowercase().contains(&query)
                || r.description.to_lowercase().contains(&query)
        })
        .collect()
}

/// Escapes `text` and wraps the first case-insensitive occurrence of `query`
/// in `<mark>`. The match span keeps its original casing.
pub fn highlight_match(text: &str, query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return escape_html(text);
    }
    match text.to_lowercase().find(&query.to_lowercase()) {
        Some(start) if text.is_char_boundary(start) && text.is_char_boundary(start + query.len()) => {
            let end = start + query.len();
            format!(
                "{}<mark>{}</mark>{}",
                escape_html(&text[..start]),
                escape_html(&text[start..end]),
                escape_html(&text[end..])
            )
        }
        _ => escape_html(text),
    }
}

/// What submitting the search should do with the chosen result.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    /// Absolute external URL, opened in a new context.
    OpenExternal(String),
    /// In-page anchor: scroll there and flash-highlight the target.
    ScrollTo(String),
    /// Relative path, navigated in place.
    Navigate(String),
    NoResults,
}

impl SubmitAction {
    pub fn for_url(url: &str) -> Self {
        if url.starts_with("http://") || url.starts_with("https://") {
            SubmitAction::OpenExternal(url.to_string())
        } else if url.starts_with('#') {
            SubmitAction::ScrollTo(url.to_string())
        } else {
            SubmitAction::Navigate(url.to_string())
        }
    }
}

/// One live-query session over a fixed index: re-matched on every input
/// change, capped at [`LIVE_RESULT_CAP`] displayed results, with an arrow-key
/// cursor clamped to the visible range.
pub struct LiveSearch {
    index: Vec<SearchResult>,
    query: String,
    results: Vec<SearchResult>,
    cursor: Option<usize>,
}

impl LiveSearch {
    pub fn new(index: Vec<SearchResult>) -> Self {
        Self {
            index,
            query: String::new(),
            results: Vec::new(),
            cursor: None,
        }
    }

    /// Re-runs matching for the new input. Any change resets the cursor.
    pub fn update(&mut self, query: &str) {
        self.query = query.trim().to_string();
        self.results = search(&self.index, &self.query)
            .into_iter()
            .take(LIVE_RESULT_CAP)
            .cloned()
            .collect();
        self.cursor = None;
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn move_down(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(i) => (i + 1).min(self.results.len() - 1),
            None => 0,
        });
    }

    pub fn move_up(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(i) => i.saturating_sub(1),
            None => 0,
        });
    }

    /// Escape: close the panel and drop cursor and results.
    pub fn dismiss(&mut self) {
        self.query.clear();
        self.results.clear();
        self.cursor = None;
    }

    /// Resolves Enter: the highlighted result if any, else the first match.
    pub fn submit(&self) -> SubmitAction {
        let chosen = match self.cursor {
            Some(i) => self.results.get(i),
            None => self.results.first(),
        };
        match chosen {
            Some(result) => SubmitAction::for_url(&result.url),
            None => SubmitAction::NoResults,
        }
    }

    /// Results grouped by category in display order, preserving match order
    /// within each group.
    pub fn grouped(&self) -> Vec<(Category, Vec<&SearchResult>)> {
        let mut groups: Vec<(Category, Vec<&SearchResult>)> = Vec::new();
        for result in &self.results {
            match groups.iter_mut().find(|(c, _)| *c == result.category) {
                Some((_, members)) => members.push(result),
                None => groups.push((result.category, vec![result])),
            }
        }
        groups
    }

    /// The dropdown panel fragment: grouped results with the matched span
    /// highlighted, or an explicit no-results state.
    pub fn render_dropdown_html(&self) -> String {
        if self.query.is_empty() {
            return String::new();
        }
        if self.results.is_empty() {
            return format!(
                "<div class=\"search-empty\">No results for \u{201c}{}\u{201d}</div>",
                escape_html(&self.query)
            );
        }
        let mut out = String::from("<div class=\"search-results\">");
        for (category, members) in self.grouped() {
            out.push_str(&format!(
                "<div class=\"search-group\"><span class=\"search-group-label\">{}</span>",
                category.label()
            ));
            for member in members {
                let position = self
                    .results
                    .iter()
                    .position(|r| std::ptr::eq(r, member))
                    .unwrap_or(0);
                let active = self.cursor == Some(position);
                out.push_str(&format!(
                    "<a class=\"search-result{}\" href=\"{}\"><i class=\"fa-solid {}\"></i>\
                     <span class=\"search-result-title\">{}</span>\
                     <span class=\"search-result-desc\">{}</span></a>",
                    if active { " active" } else { "" },
                    escape_html(&member.url),
                    escape_html(&member.icon),
                    highlight_match(&member.title, &self.query),
                    highlight_match(&member.description, &self.query),
                ));
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn index() -> Vec<SearchResult> {
        build_index(&seed::default_catalog(), None)
    }

    #[test]
    fn coming_soon_affiliates_are_excluded() {
        let doc = seed::default_catalog();
        let index = build_index(&doc, None);
        let affiliate_titles: Vec<&str> = index
            .iter()
            .filter(|r| r.category == Category::Affiliate)
            .map(|r| r.title.as_str())
            .collect();
        let visible = doc.affiliates.iter().filter(|a| !a.coming_soon).count();
        assert_eq!(affiliate_titles.len(), visible);
    }

    #[test]
    fn every_name_substring_finds_its_entity() {
        let doc = seed::default_catalog();
        let index = build_index(&doc, None);
        for project in &doc.projects {
            let lowered = project.name.to_lowercase();
            for len in 1..=lowered.chars().count() {
                let q: String = lowered.chars().take(len).collect();
                assert!(
                    search(&index, &q).iter().any(|r| r.title == project.name),
                    "query {:?} missed {:?}",
                    q,
                    project.name
                );
            }
        }
    }

    #[test]
    fn match_is_case_insensitive_over_title_and_description() {
        let index = index();
        assert!(!search(&index, "PINECRAFT").is_empty());
        assert!(!search(&index, "minecraft").is_empty());
        assert!(search(&index, "zzzzz").is_empty());
    }

    #[test]
    fn outline_entries_come_first() {
        let outline = vec![OutlineEntry {
            title: "Wiring".into(),
            anchor: "#section-abc".into(),
            description: "Pin layout".into(),
            icon: "fa-bookmark".into(),
        }];
        let index = build_index(&seed::default_catalog(), Some(&outline));
        assert_eq!(index[0].category, Category::Section);
        assert_eq!(index[0].url, "#section-abc");
    }

    #[test]
    fn custom_icons_fall_back_to_category_glyphs() {
        let index = index();
        assert!(index.iter().all(|r| r.icon != CUSTOM_ICON));
    }

    #[test]
    fn highlight_wraps_first_match_preserving_case() {
        assert_eq!(
            highlight_match("Pinecraft Server", "pine"),
            "<mark>Pine</mark>craft Server"
        );
        assert_eq!(highlight_match("no hit", "xyz"), "no hit");
        // Escapes around and inside the mark.
        assert_eq!(
            highlight_match("a<b pine", "pine"),
            "a&lt;b <mark>pine</mark>"
        );
    }

    #[test]
    fn live_results_cap_at_five() {
        let mut many = Vec::new();
        for i in 0..9 {
            many.push(SearchResult {
                title: format!("Widget {}", i),
                url: format!("widget-{}.html", i),
                description: String::new(),
                category: Category::Project,
                icon: "fa-folder".into(),
            });
        }
        let mut live = LiveSearch::new(many);
        live.update("widget");
        assert_eq!(live.results().len(), LIVE_RESULT_CAP);
    }

    #[test]
    fn cursor_clamps_to_result_range() {
        let mut live = LiveSearch::new(index());
        live.update("pinecraft");
        let count = live.results().len();
        assert!(count >= 1);

        for _ in 0..10 {
            live.move_down();
        }
        assert_eq!(live.cursor(), Some(count - 1));

        for _ in 0..10 {
            live.move_up();
        }
        assert_eq!(live.cursor(), Some(0));
    }

    #[test]
    fn update_resets_cursor() {
        let mut live = LiveSearch::new(index());
        live.update("p");
        live.move_down();
        assert!(live.cursor().is_some());
        live.update("pi");
        assert_eq!(live.cursor(), None);
    }

    #[test]
    fn submit_distinguishes_url_shapes() {
        assert_eq!(
            SubmitAction::for_url("https://example.com"),
            SubmitAction::OpenExternal("https://example.com".into())
        );
        assert_eq!(
            SubmitAction::for_url("#section-x"),
            SubmitAction::ScrollTo("#section-x".into())
        );
        assert_eq!(
            SubmitAction::for_url("projects/docs.html?id=1"),
            SubmitAction::Navigate("projects/docs.html?id=1".into())
        );
    }

    #[test]
    fn submit_without_matches_reports_no_results() {
        let mut live = LiveSearch::new(index());
        live.update("zzzzz");
        assert_eq!(live.submit(), SubmitAction::NoResults);
    }

    #[test]
    fn submit_prefers_highlighted_result() {
        let mut live = LiveSearch::new(index());
        live.update("a");
        assert!(live.results().len() >= 2);
        let second = live.results()[1].url.clone();
        live.move_down();
        live.move_down();
        assert_eq!(live.submit(), SubmitAction::for_url(&second));
    }

    #[test]
    fn dismiss_clears_panel_state() {
        let mut live = LiveSearch::new(index());
        live.update("pi");
        live.move_down();
        live.dismiss();
        assert!(live.results().is_empty());
        assert_eq!(live.cursor(), None);
        assert_eq!(live.render_dropdown_html(), "");
    }

    #[test]
    fn dropdown_groups_by_category_and_shows_empty_state() {
        let mut live = LiveSearch::new(index());
        live.update("a");
        let html = live.render_dropdown_html();
        assert!(html.contains("search-group-label"));
        assert!(html.contains("<mark>"));

        live.update("zzzzz");
        assert!(live.render_dropdown_html().contains("No results"));
    }
}
