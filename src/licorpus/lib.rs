//! # Licorpus Architecture
//!
//! Licorpus maintains a local corpus of license and exception records kept as JSON.
//! It scaffolds plain-text field files for a human to fill in, assembles them into
//! records, overlays them on canonical records, and keeps two index files in step.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints messages, sets exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns store, paths and field tables; dispatches           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, index.rs, fields.rs)         │
//! │  - Scaffolding, assembly, overlay, index merges             │
//! │  - Returns `Result<CmdResult>`, never prints                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Pretty JSON, atomic writes, index locks                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Workflows
//!
//! Custom entries: `init_custom` creates `custom/<id>/<field>` files, a human fills
//! them in, `add_custom` writes `custom/<id>.json` and registers the entry in
//! `custom.json`.
//!
//! Adaptions: `init_adaption` creates field files for the fields to override,
//! `add_adaption` overlays them on `details/<id>.json` (or `exceptions/<id>.json`),
//! writes `adaptions/<id>.json` and appends a note to `adaptions.json`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation, plus [`commands::CorpusPaths`]
//! - [`index`]: Custom and adaption index merges
//! - [`fields`]: Field-file text rules
//! - [`model`]: Entry kinds, field tables, records
//! - [`store`]: File storage
//! - [`config`]: Corpus configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod index;
pub mod model;
pub mod store;
