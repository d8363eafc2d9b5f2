//! # API Facade
//!
//! A **thin facade** over the command layer: the single entry point for all
//! catalog operations regardless of the UI driving them.
//!
//! The facade dispatches to command functions and returns structured
//! `Result<CmdResult>` values. It holds no business logic (that lives in
//! `commands/*.rs`), performs no I/O beyond what the store does, and never
//! formats output.
//!
//! `CurioApi<B: StorageBackend>` is generic over the storage backend:
//! production uses `FileBackend`, tests use `MemoryBackend`, so the whole
//! facade is exercisable without touching the filesystem.

use crate::commands::{
    self, AffiliateInput, CmdResult, ProjectInput, SectionInput, SoftwareInput,
};
use crate::error::{CurioError, Result};
use crate::model::{CatalogDocument, Project};
use crate::render;
use crate::search::{self, SearchResult};
use crate::store::{CatalogStore, StorageBackend};
use std::path::Path;

pub struct CurioApi<B: StorageBackend> {
    store: CatalogStore<B>,
}

impl<B: StorageBackend> CurioApi<B> {
    pub fn new(backend: B) -> Self {
        Self {
            store: CatalogStore::new(backend),
        }
    }

    pub fn document(&mut self) -> Result<CatalogDocument> {
        self.store.load()
    }

    pub fn upsert_affiliate(
        &mut self,
        input: AffiliateInput,
        existing_id: Option<&str>,
    ) -> Result<CmdResult> {
        commands::affiliates::upsert(&mut self.store, input, existing_id)
    }

    pub fn delete_affiliate(&mut self, id: &str) -> Result<CmdResult> {
        commands::affiliates::delete(&mut self.store, id)
    }

    pub fn upsert_project(
        &mut self,
        input: ProjectInput,
        existing_id: Option<&str>,
    ) -> Result<CmdResult> {
        commands::projects::upsert(&mut self.store, input, existing_id)
    }

    pub fn delete_project(&mut self, id: &str) -> Result<CmdResult> {
        commands::projects::delete(&mut self.store, id)
    }

    pub fn upsert_software(
        &mut self,
        input: SoftwareInput,
        existing_id: Option<&str>,
    ) -> Result<CmdResult> {
        commands::software::upsert(&mut self.store, input, existing_id)
    }

    pub fn delete_software(&mut self, id: &str) -> Result<CmdResult> {
        commands::software::delete(&mut self.store, id)
    }

    pub fn upsert_section(
        &mut self,
        project_id: &str,
        input: SectionInput,
        existing_id: Option<&str>,
    ) -> Result<CmdResult> {
        commands::sections::upsert(&mut self.store, project_id, input, existing_id)
    }

    pub fn delete_section(&mut self, project_id: &str, section_id: &str) -> Result<CmdResult> {
        commands::sections::delete(&mut self.store, project_id, section_id)
    }

    pub fn export(&mut self) -> Result<CmdResult> {
        commands::export::run(&mut self.store)
    }

    pub fn export_to(&mut self, dir: &Path) -> Result<CmdResult> {
        commands::export::write_to(&mut self.store, dir)
    }

    pub fn import(&mut self, bytes: &[u8]) -> Result<CmdResult> {
        commands::import::run(&mut self.store, bytes)
    }

    pub fn clear_all(&mut self) -> Result<CmdResult> {
        commands::reset::clear_all(&mut self.store)
    }

    pub fn reset_to_defaults(&mut self) -> Result<CmdResult> {
        commands::reset::reset_to_defaults(&mut self.store)
    }

    /// The full documentation page for one project.
    pub fn render_project_docs(&mut self, project_id: &str) -> Result<String> {
        let project = self.require_project(project_id)?;
        Ok(render::project_docs_html(&project))
    }

    /// Search over the whole catalog; `docs_project_id` adds that project's
    /// outline ahead of the main entries, as a docs page would.
    pub fn search(&mut self, query: &str, docs_project_id: Option<&str>) -> Result<Vec<SearchResult>> {
        let doc = self.store.load()?;
        let outline = match docs_project_id {
            Some(id) => {
                let project = doc
                    .project(id)
                    .ok_or_else(|| CurioError::Api(format!("no such project: {}", id)))?;
                Some(render::docs_outline(project))
            }
            None => None,
        };
        let index = search::build_index(&doc, outline.as_deref());
        Ok(search::search(&index, query).into_iter().cloned().collect())
    }

    fn require_project(&mut self, id: &str) -> Result<Project> {
        let doc = self.store.load()?;
        doc.project(id)
            .cloned()
            .ok_or_else(|| CurioError::Api(format!("no such project: {}", id)))
    }
}
