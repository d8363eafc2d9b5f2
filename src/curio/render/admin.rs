//! Admin list views. Each renderer produces an empty-state fragment when the
//! collection is empty, else one card per entity in collection order. Action
//! buttons carry `data-action`/`data-id` attributes for the controller's
//! dispatch table instead of inline handlers.

use crate::model::{Affiliate, Project, SoftwareEntry};
use crate::render::escape_html;

pub fn affiliate_list_html(affiliates: &[Affiliate]) -> String {
    if affiliates.is_empty() {
        return empty_state_html("fa-handshake", "No Affiliates Yet", "Add your first affiliate link to get started.");
    }
    let mut out = String::new();
    for affiliate in affiliates {
        out.push_str(&format!(
            "<div class=\"admin-item\" data-id=\"{}\">",
            escape_html(&affiliate.id)
        ));
        out.push_str(&icon_html(&affiliate.icon, affiliate.custom_image.as_deref()));
        out.push_str("<div class=\"admin-item-body\">");
        out.push_str(&format!("<h3>{}</h3>", escape_html(&affiliate.name)));
        out.push_str(&format!("<p>{}</p>", escape_html(&affiliate.description)));
        if affiliate.coming_soon {
            out.push_str("<span class=\"badge badge-muted\">Coming Soon</span>");
        }
        out.push_str("</div>");
        out.push_str(&actions_html("affiliate", &affiliate.id, false));
        out.push_str("</div>");
    }
    out
}

pub fn project_list_html(projects: &[Project]) -> String {
    if projects.is_empty() {
        return empty_state_html("fa-diagram-project", "No Projects Yet", "Add your first project to get started.");
    }
    let mut out = String::new();
    for project in projects {
        out.push_str(&format!(
            "<div class=\"admin-item\" data-id=\"{}\">",
            escape_html(&project.id)
        ));
        out.push_str(&icon_html(&project.icon, project.custom_image.as_deref()));
        out.push_str("<div class=\"admin-item-body\">");
        out.push_str(&format!("<h3>{}</h3>", escape_html(&project.name)));
        if !project.badge.is_empty() {
            out.push_str(&format!(
                "<span class=\"badge\">{}</span>",
                escape_html(&project.badge)
            ));
        }
        out.push_str(&format!("<p>{}</p>", escape_html(&project.description)));
        if !project.tags.is_empty() {
            out.push_str("<div class=\"admin-item-tags\">");
            for tag in &project.tags {
                out.push_str(&format!("<span class=\"tag\">{}</span>", escape_html(tag)));
            }
            out.push_str("</div>");
        }
        out.push_str(&format!(
            "<span class=\"admin-item-meta\">{} section{}</span>",
            project.sections.len(),
            if project.sections.len() == 1 { "" } else { "s" }
        ));
        out.push_str("</div>");
        out.push_str(&actions_html("project", &project.id, true));
        out.push_str("</div>");
    }
    out
}

pub fn software_list_html(software: &[SoftwareEntry]) -> String {
    if software.is_empty() {
        return empty_state_html("fa-code", "No Software Yet", "Add your first software entry to get started.");
    }
    let mut out = String::new();
    for entry in software {
        out.push_str(&format!(
            "<div class=\"admin-item\" data-id=\"{}\">",
            escape_html(&entry.id)
        ));
        out.push_str(&icon_html(&entry.icon, entry.custom_image.as_deref()));
        out.push_str("<div class=\"admin-item-body\">");
        out.push_str(&format!("<h3>{}</h3>", escape_html(&entry.name)));
        if entry.under_development {
            out.push_str("<span class=\"badge badge-muted\">Under Development</span>");
        }
        out.push_str(&format!("<p>{}</p>", escape_html(&entry.description)));
        out.push_str("</div>");
        out.push_str(&actions_html("software", &entry.id, false));
        out.push_str("</div>");
    }
    out
}

/// The documentation editor's section list, ordered by `order`. Each row
/// exposes edit/delete for one section.
pub fn section_list_html(project: &Project) -> String {
    if project.sections.is_empty() {
        return empty_state_html("fa-file-lines", "No Sections Yet", "Add a documentation section to this project.");
    }
    let mut out = String::new();
    for section in project.ordered_sections() {
        out.push_str(&format!(
            "<div class=\"admin-item admin-section-item\" data-id=\"{}\">",
            escape_html(&section.id)
        ));
        out.push_str("<div class=\"admin-item-body\">");
        out.push_str(&format!("<h3>{}</h3>", escape_html(&section.title)));
        out.push_str(&format!(
            "<span class=\"admin-item-meta\">{:?} · position {}</span>",
            section.kind, section.order
        ));
        out.push_str("</div>");
        out.push_str(&actions_html("section", &section.id, false));
        out.push_str("</div>");
    }
    out
}

fn empty_state_html(icon: &str, title: &str, hint: &str) -> String {
    format!(
        concat!(
            "<div class=\"empty-state\">",
            "<i class=\"fa-solid {}\"></i>",
            "<h3>{}</h3>",
            "<p>{}</p>",
            "</div>"
        ),
        icon, title, hint
    )
}

fn icon_html(icon: &str, custom_image: Option<&str>) -> String {
    match custom_image {
        Some(src) => format!(
            "<img class=\"admin-item-icon\" src=\"{}\" alt=\"\">",
            escape_html(src)
        ),
        None => format!(
            "<i class=\"admin-item-icon fa-solid {}\"></i>",
            escape_html(icon)
        ),
    }
}

fn actions_html(kind: &str, id: &str, with_docs: bool) -> String {
    let id = escape_html(id);
    let mut out = String::from("<div class=\"admin-item-actions\">");
    if with_docs {
        out.push_str(&format!(
            "<button data-action=\"docs-{kind}\" data-id=\"{id}\">Docs</button>"
        ));
    }
    out.push_str(&format!(
        "<button data-action=\"edit-{kind}\" data-id=\"{id}\">Edit</button>"
    ));
    out.push_str(&format!(
        "<button data-action=\"delete-{kind}\" data-id=\"{id}\">Delete</button>"
    ));
    out.push_str("</div>");
    out
}
