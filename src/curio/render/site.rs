//! Public-site cards: the outward projection of the same entities, tolerant
//! of missing optional fields by omitting markup rather than rendering empty
//! shells.

use crate::model::{Affiliate, Project, SoftwareEntry};
use crate::render::escape_html;

/// Relative URL of a project's documentation page.
pub fn project_url(project: &Project) -> String {
    format!("projects/docs.html?id={}", project.id)
}

pub fn affiliate_card_html(affiliate: &Affiliate) -> String {
    let inner = format!(
        "{}<h3>{}</h3><p>{}</p>{}",
        media_html(&affiliate.icon, affiliate.custom_image.as_deref()),
        escape_html(&affiliate.name),
        escape_html(&affiliate.description),
        if affiliate.coming_soon {
            "<span class=\"card-badge\">Coming Soon</span>"
        } else {
            ""
        }
    );
    // A coming-soon card is never a link, even if a URL is stored.
    if affiliate.coming_soon || affiliate.link.is_empty() {
        format!("<div class=\"site-card site-card-static\">{}</div>", inner)
    } else {
        format!(
            "<a class=\"site-card\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_html(&affiliate.link),
            inner
        )
    }
}

pub fn project_card_html(project: &Project) -> String {
    let mut out = format!(
        "<a class=\"site-card\" href=\"{}\">",
        escape_html(&project_url(project))
    );
    out.push_str(&media_html(&project.icon, project.custom_image.as_deref()));
    if !project.badge.is_empty() {
        out.push_str(&format!(
            "<span class=\"card-badge\">{}</span>",
            escape_html(&project.badge)
        ));
    }
    out.push_str(&format!("<h3>{}</h3>", escape_html(&project.name)));
    out.push_str(&format!("<p>{}</p>", escape_html(&project.description)));
    if !project.tags.is_empty() {
        out.push_str("<div class=\"card-tags\">");
        for tag in &project.tags {
            out.push_str(&format!("<span class=\"tag\">{}</span>", escape_html(tag)));
        }
        out.push_str("</div>");
    }
    out.push_str("</a>");
    out
}

pub fn software_card_html(entry: &SoftwareEntry) -> String {
    let inner = format!(
        "{}{}<h3>{}</h3><p>{}</p>",
        media_html(&entry.icon, entry.custom_image.as_deref()),
        if entry.under_development {
            "<span class=\"card-badge\">Under Development</span>"
        } else {
            ""
        },
        escape_html(&entry.name),
        escape_html(&entry.description)
    );
    if entry.link.is_empty() {
        format!("<div class=\"site-card site-card-static\">{}</div>", inner)
    } else {
        format!(
            "<a class=\"site-card\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_html(&entry.link),
            inner
        )
    }
}

fn media_html(icon: &str, custom_image: Option<&str>) -> String {
    match custom_image {
        Some(src) if !src.is_empty() => format!(
            "<img class=\"card-image\" src=\"{}\" alt=\"\">",
            escape_html(src)
        ),
        _ => format!("<i class=\"card-icon fa-solid {}\"></i>", escape_html(icon)),
    }
}
