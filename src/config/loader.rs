// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{GraphFile, RawDocument, RawGraphFile};
use crate::errors::{PrereqsError, Result};
use crate::types::DocumentFormat;

/// Load a graph document from `path` without semantic validation.
///
/// The format is picked from the file extension (`.toml` or `.json`).
/// Use [`load_and_validate`] to get a [`GraphFile`] you can resolve.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawGraphFile> {
    let path = path.as_ref();
    let format = document_format_of(path)?;
    debug!(?path, ?format, "loading graph document");

    let contents = fs::read_to_string(path)?;
    parse_document(&contents, format)
}

/// Parse an in-memory graph document.
///
/// TOML must use the structured `[config]` / `[prereqs]` layout. JSON may
/// also be a bare `{ "item": ["prereq", ...] }` object.
pub fn parse_document(contents: &str, format: DocumentFormat) -> Result<RawGraphFile> {
    let raw: RawGraphFile = match format {
        DocumentFormat::Toml => toml::from_str(contents)?,
        DocumentFormat::Json => serde_json::from_str::<RawDocument>(contents)?.into(),
    };
    debug!(items = raw.prereqs.len(), roots = raw.config.roots.len(), "parsed graph document");
    Ok(raw)
}

/// Load a graph document and validate it.
///
/// This is the entry point the CLI uses:
///
/// - Reads TOML or JSON.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Rejects empty item names, warns on whitespace-padded ones.
///
/// Cycles are reported later, by the resolver, together with the offending
/// path.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<GraphFile> {
    let raw = load_from_path(&path)?;
    GraphFile::try_from(raw)
}

/// Graph document used when `--graph` is not given.
pub fn default_graph_path() -> PathBuf {
    PathBuf::from("Prereqs.toml")
}

fn document_format_of(path: &Path) -> Result<DocumentFormat> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(DocumentFormat::from_extension)
        .ok_or_else(|| {
            PrereqsError::ConfigError(format!(
                "unsupported graph document {:?}: expected a .toml or .json file",
                path
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_structured_document() {
        let raw = parse_document(
            r#"
[config]
roots = ["calculus"]
format = "json"

[prereqs]
"calculus" = ["linear algebra"]
"#,
            DocumentFormat::Toml,
        )
        .unwrap();

        assert_eq!(raw.config.roots, vec!["calculus"]);
        assert_eq!(raw.config.format, Some(crate::types::OutputFormat::Json));
        assert_eq!(raw.prereqs["calculus"], vec!["linear algebra"]);
    }

    #[test]
    fn json_bare_mapping() {
        let raw = parse_document(
            r#"{ "algorithms": ["data structures"], "data structures": [] }"#,
            DocumentFormat::Json,
        )
        .unwrap();

        assert!(raw.config.roots.is_empty());
        assert_eq!(raw.prereqs.len(), 2);
        assert!(raw.prereqs["data structures"].is_empty());
    }

    #[test]
    fn json_bare_mapping_may_use_section_names_as_items() {
        let raw = parse_document(r#"{ "config": ["prereqs"] }"#, DocumentFormat::Json).unwrap();
        assert_eq!(raw.prereqs["config"], vec!["prereqs"]);
    }

    #[test]
    fn json_bare_item_named_config_with_no_prereqs_is_kept() {
        let raw = parse_document(r#"{ "config": [] }"#, DocumentFormat::Json).unwrap();
        assert!(raw.prereqs["config"].is_empty());

        let file = GraphFile::try_from(raw).unwrap();
        let order = crate::dag::resolve::<&str>(&file.graph, None).unwrap();
        assert_eq!(order, vec!["config"]);
    }

    #[test]
    fn json_config_section_must_be_a_table() {
        let err = parse_document(
            r#"{ "config": [], "prereqs": { "a": ["b"] } }"#,
            DocumentFormat::Json,
        )
        .unwrap_err();
        assert!(matches!(err, PrereqsError::JsonError(_)));
    }

    #[test]
    fn toml_config_section_must_be_a_table() {
        let err = parse_document("config = []
", DocumentFormat::Toml).unwrap_err();
        assert!(matches!(err, PrereqsError::TomlError(_)));
    }

    #[test]
    fn json_structured_document() {
        let raw = parse_document(
            r#"{ "config": { "roots": ["b"] }, "prereqs": { "b": ["a"] } }"#,
            DocumentFormat::Json,
        )
        .unwrap();

        assert_eq!(raw.config.roots, vec!["b"]);
        assert_eq!(raw.prereqs["b"], vec!["a"]);
    }

    #[test]
    fn toml_rejects_unknown_sections() {
        let err = parse_document("[task.A]\ncmd = \"echo\"\n", DocumentFormat::Toml).unwrap_err();
        assert!(matches!(err, PrereqsError::TomlError(_)));
    }

    #[test]
    fn unsupported_extension_is_config_error() {
        let err = load_from_path("graph.yaml").unwrap_err();
        assert!(matches!(err, PrereqsError::ConfigError(msg) if msg.contains(".toml or .json")));
    }
}
