use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "curio")]
#[command(about = "Catalog manager for a static portfolio site", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory holding catalog.json (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Skip confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add or edit an affiliate
    Affiliate {
        /// Id of an existing affiliate to edit
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "")]
        link: String,

        /// Built-in glyph tag, e.g. fa-store
        #[arg(long, default_value = "fa-link")]
        icon: String,

        /// Image path overriding the glyph
        #[arg(long, default_value = "")]
        image: String,

        #[arg(long)]
        coming_soon: bool,
    },

    /// Add or edit a project
    Project {
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "")]
        badge: String,

        /// Comma-separated tag list
        #[arg(long, default_value = "")]
        tags: String,

        #[arg(long, default_value = "fa-diagram-project")]
        icon: String,

        #[arg(long, default_value = "")]
        image: String,

        /// Theme preset: default, ocean, forest, sunset, midnight, custom
        #[arg(long)]
        theme: Option<String>,
    },

    /// Add or edit a software entry
    Software {
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "")]
        link: String,

        #[arg(long, default_value = "fa-code")]
        icon: String,

        #[arg(long, default_value = "")]
        image: String,

        #[arg(long)]
        under_development: bool,
    },

    /// Add or edit a documentation section
    Section {
        /// Id of the parent project
        #[arg(long)]
        project: String,

        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        title: String,

        /// Section type, e.g. text, code, cards-2, steps, links
        #[arg(long, default_value = "text")]
        kind: String,

        /// Raw section content (grammar depends on the type)
        #[arg(long, default_value = "")]
        content: String,

        /// Display position; defaults to append-to-end
        #[arg(long)]
        order: Option<u32>,

        #[arg(long)]
        code_language: Option<String>,
    },

    /// Delete an affiliate, project, software entry, or section
    #[command(alias = "rm")]
    Delete {
        /// Entity kind: affiliate, project, software, section
        kind: String,

        /// Id of the entity
        id: String,

        /// Parent project id (sections only)
        #[arg(long)]
        project: Option<String>,
    },

    /// List catalog entries
    #[command(alias = "ls")]
    List {
        /// Restrict to one kind: affiliates, projects, software
        kind: Option<String>,
    },

    /// Write the site-data.json snapshot
    Export {
        /// Output directory (defaults to the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Replace the catalog from a snapshot file
    Import {
        /// Path to a previously exported snapshot
        file: PathBuf,
    },

    /// Search the catalog
    Search {
        query: String,

        /// Include a project's documentation outline in the index
        #[arg(long)]
        docs: Option<String>,
    },

    /// Render a project's documentation page to HTML
    Render {
        /// Id of the project
        project_id: String,

        /// Output file (defaults to stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Restore the default catalog content
    Reset,

    /// Delete all catalog data
    Clear,
}
