use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use curio::api::CurioApi;
use curio::auth::AdminGate;
use curio::commands::{
    AffiliateInput, CmdMessage, MessageLevel, ProjectInput, SectionInput, SoftwareInput,
};
use curio::error::{CurioError, Result};
use curio::model::{CatalogDocument, ProjectTheme, SectionKind, ThemePreset};
use curio::search::SubmitAction;
use curio::store::fs::FileBackend;
use directories::ProjectDirs;
use std::io::Write;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CurioApi<FileBackend>,
    skip_confirm: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    if mutates(&cli.command) {
        require_admin()?;
    }

    match cli.command {
        Commands::Affiliate {
            id,
            name,
            description,
            link,
            icon,
            image,
            coming_soon,
        } => {
            let input = AffiliateInput {
                name,
                description,
                link,
                icon,
                custom_image: image,
                coming_soon,
            };
            let result = ctx.api.upsert_affiliate(input, id.as_deref())?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Project {
            id,
            name,
            description,
            badge,
            tags,
            icon,
            image,
            theme,
        } => {
            let input = ProjectInput {
                name,
                description,
                badge,
                tags: tags.split(',').map(str::to_string).collect(),
                icon,
                custom_image: image,
                theme: theme.as_deref().map(parse_theme).transpose()?,
            };
            let result = ctx.api.upsert_project(input, id.as_deref())?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Software {
            id,
            name,
            description,
            link,
            icon,
            image,
            under_development,
        } => {
            let input = SoftwareInput {
                name,
                description,
                link,
                icon,
                custom_image: image,
                under_development,
            };
            let result = ctx.api.upsert_software(input, id.as_deref())?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Section {
            project,
            id,
            title,
            kind,
            content,
            order,
            code_language,
        } => {
            let input = SectionInput {
                title,
                kind: parse_kind(&kind),
                content,
                order,
                code_language,
            };
            let result = ctx.api.upsert_section(&project, input, id.as_deref())?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Delete { kind, id, project } => handle_delete(&mut ctx, &kind, &id, project),
        Commands::List { kind } => handle_list(&mut ctx, kind),
        Commands::Export { out } => {
            let dir = out.unwrap_or_else(|| PathBuf::from("."));
            let result = ctx.api.export_to(&dir)?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Import { file } => {
            let bytes = std::fs::read(&file)?;
            let result = ctx.api.import(&bytes)?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Search { query, docs } => handle_search(&mut ctx, &query, docs.as_deref()),
        Commands::Render { project_id, out } => {
            let html = ctx.api.render_project_docs(&project_id)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, html)?;
                    println!("{}", format!("Wrote {}", path.display()).green());
                }
                None => println!("{}", html),
            }
            Ok(())
        }
        Commands::Reset => handle_reset(&mut ctx),
        Commands::Clear => handle_clear(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "curio", "curio")
            .ok_or_else(|| CurioError::Api("Could not determine data dir".into()))?
            .data_dir()
            .to_path_buf(),
    };
    Ok(AppContext {
        api: CurioApi::new(FileBackend::new(data_dir)),
        skip_confirm: cli.yes,
    })
}

fn mutates(command: &Commands) -> bool {
    !matches!(
        command,
        Commands::List { .. } | Commands::Search { .. } | Commands::Render { .. }
    )
}

/// When CURIO_ADMIN_PASSWORD_HASH is set, mutating commands prompt for the
/// admin password and check it against that hash. Unset means no gate, which
/// suits a single-user machine.
fn require_admin() -> Result<()> {
    let hash = match std::env::var("CURIO_ADMIN_PASSWORD_HASH") {
        Ok(hash) if !hash.is_empty() => hash,
        _ => return Ok(()),
    };
    let mut gate = AdminGate::new(hash);
    let password = prompt("Admin password: ")?;
    if gate.authenticate(password.trim_end()) {
        Ok(())
    } else {
        Err(CurioError::Api("Invalid password".into()))
    }
}

fn handle_delete(
    ctx: &mut AppContext,
    kind: &str,
    id: &str,
    project: Option<String>,
) -> Result<()> {
    if !confirm(ctx, &format!("Delete {} {}?", kind, id))? {
        println!("{}", "Cancelled.".dimmed());
        return Ok(());
    }
    let result = match kind {
        "affiliate" => ctx.api.delete_affiliate(id)?,
        "project" => ctx.api.delete_project(id)?,
        "software" => ctx.api.delete_software(id)?,
        "section" => {
            let project = project
                .ok_or_else(|| CurioError::Api("--project is required for sections".into()))?;
            ctx.api.delete_section(&project, id)?
        }
        other => {
            return Err(CurioError::Api(format!("Unknown entity kind: {}", other)));
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, kind: Option<String>) -> Result<()> {
    let doc = ctx.api.document()?;
    let kind = kind.as_deref();

    if kind.is_none() || kind == Some("affiliates") {
        print_heading("Affiliates");
        for a in &doc.affiliates {
            let badge = if a.coming_soon { "coming soon" } else { "" };
            print_row(&a.id, &a.name, &a.description, badge, a.created_at);
        }
    }
    if kind.is_none() || kind == Some("projects") {
        print_heading("Projects");
        for p in &doc.projects {
            let badge = if p.badge.is_empty() {
                format!("{} sections", p.sections.len())
            } else {
                p.badge.to_lowercase()
            };
            print_row(&p.id, &p.name, &p.description, &badge, p.created_at);
        }
    }
    if kind.is_none() || kind == Some("software") {
        print_heading("Software");
        for s in &doc.software {
            let badge = if s.under_development { "under dev" } else { "" };
            print_row(&s.id, &s.name, &s.description, badge, s.created_at);
        }
    }
    if let Some(other) = kind {
        if !["affiliates", "projects", "software"].contains(&other) {
            return Err(CurioError::Api(format!("Unknown list kind: {}", other)));
        }
    }
    print_counts(&doc);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: &str, docs: Option<&str>) -> Result<()> {
    let results = ctx.api.search(query, docs)?;
    if results.is_empty() {
        println!("No results for \u{201c}{}\u{201d}.", query);
        return Ok(());
    }
    for result in &results {
        let action = match SubmitAction::for_url(&result.url) {
            SubmitAction::OpenExternal(_) => "external",
            SubmitAction::ScrollTo(_) => "anchor",
            SubmitAction::Navigate(_) => "page",
            SubmitAction::NoResults => "",
        };
        println!(
            "{:<12} {}  {}  {}",
            result.category.label().dimmed(),
            result.title.bold(),
            result.url.underline(),
            action.dimmed()
        );
    }
    Ok(())
}

fn handle_reset(ctx: &mut AppContext) -> Result<()> {
    if !confirm(ctx, "Reset the catalog to its default content?")? {
        println!("{}", "Cancelled.".dimmed());
        return Ok(());
    }
    let result = ctx.api.reset_to_defaults()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    // Two independent confirmations, the second restating irreversibility.
    if !confirm(ctx, "Delete ALL catalog data?")? {
        println!("{}", "Cancelled.".dimmed());
        return Ok(());
    }
    if !confirm(
        ctx,
        "This permanently deletes every affiliate, project, and software entry and cannot be undone. Continue?",
    )? {
        println!("{}", "Cancelled.".dimmed());
        return Ok(());
    }
    let result = ctx.api.clear_all()?;
    print_messages(&result.messages);
    Ok(())
}

fn confirm(ctx: &AppContext, question: &str) -> Result<bool> {
    if ctx.skip_confirm {
        return Ok(true);
    }
    let answer = prompt(&format!("{} [y/N] ", question))?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(answer)
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_heading(title: &str) {
    println!("\n{}", title.bold());
}

fn print_row(id: &str, name: &str, description: &str, badge: &str, created_at: i64) {
    let preview: String = description
        .chars()
        .take(60)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    let text = format!("{} {}", name, preview);

    let badge_str = if badge.is_empty() {
        "  ".to_string()
    } else {
        format!("[{}] ", badge)
    };
    // Width accounting uses the unstyled text; ANSI codes have no width.
    let fixed = 2 + id.width() + 2 + badge_str.width() + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let shown = truncate_to_width(&text, available);
    let padding = available.saturating_sub(shown.width());

    println!(
        "  {}  {}{}{}{}",
        id.dimmed(),
        shown,
        " ".repeat(padding),
        badge_str.yellow(),
        format_time_ago(created_at).dimmed()
    );
}

fn print_counts(doc: &CatalogDocument) {
    println!(
        "\n{}",
        format!(
            "{} affiliates, {} projects, {} software entries",
            doc.affiliates.len(),
            doc.projects.len(),
            doc.software.len()
        )
        .dimmed()
    );
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(epoch_millis: i64) -> String {
    let created = DateTime::<Utc>::from_timestamp_millis(epoch_millis).unwrap_or_else(Utc::now);
    let duration = Utc::now().signed_duration_since(created);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

fn parse_theme(preset: &str) -> Result<ProjectTheme> {
    let preset: ThemePreset = serde_json::from_value(serde_json::Value::from(preset))
        .map_err(|_| CurioError::Api(format!("Unknown theme preset: {}", preset)))?;
    Ok(ProjectTheme {
        preset,
        ..ProjectTheme::default()
    })
}

fn parse_kind(kind: &str) -> SectionKind {
    // Unrecognized names fall back to Unknown, matching document semantics.
    serde_json::from_value(serde_json::Value::from(kind)).unwrap_or(SectionKind::Unknown)
}
