// src/config/mod.rs

//! Graph document loading and validation.
//!
//! Responsibilities:
//! - Define the serde data model for graph documents (`model.rs`).
//! - Load a document from disk as TOML or JSON (`loader.rs`).
//! - Validate item names and build the [`DepGraph`](crate::dag::DepGraph)
//!   (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_graph_path, load_and_validate, load_from_path, parse_document};
pub use model::{ConfigSection, GraphFile, RawDocument, RawGraphFile};
