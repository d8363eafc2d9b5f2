//! # Curio Architecture
//!
//! Curio is a **UI-agnostic catalog library** for a personal portfolio site:
//! affiliates, projects with typed documentation sections, and software
//! listings, rendered to static HTML. The bundled CLI is one client of the
//! library, not the other way around.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, prompts for confirmations, prints      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, render, and search            │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - CRUD business logic per entity kind                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StorageBackend trait over one JSON document     │
//! │  - FileBackend (production), MemoryBackend (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Alongside the vertical stack, three pure side modules read catalog data
//! without mutating it:
//!
//! - `render/`: entity → HTML-fragment functions for the admin lists, the
//!   public cards, and the documentation pages.
//! - `search`: the flat index, substring matching, and the live-query
//!   session with its keyboard cursor.
//! - `snapshot`: source-of-truth selection between the published snapshot
//!   file and local edits (preview mode).
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types (`Result<CmdResult>`, HTML `String`s), never writes to
//! stdout/stderr, and never assumes a terminal. The same core could back a
//! web admin panel or a static-site generator unchanged.

pub mod api;
pub mod auth;
pub mod commands;
pub mod error;
pub mod model;
pub mod render;
pub mod search;
pub mod seed;
pub mod snapshot;
pub mod store;
