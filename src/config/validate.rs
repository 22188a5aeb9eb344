// src/config/validate.rs

use tracing::warn;

use crate::config::model::{GraphFile, RawGraphFile};
use crate::dag::DepGraph;
use crate::errors::{PrereqsError, Result};

impl TryFrom<RawGraphFile> for GraphFile {
    type Error = crate::errors::PrereqsError;

    fn try_from(raw: RawGraphFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_graph(&raw)?;
        let graph = DepGraph::from_map(raw.prereqs);
        Ok(GraphFile::new_unchecked(raw.config, graph))
    }
}

/// Cycles are not checked here; the resolver reports them with the full path.
fn validate_raw_graph(raw: &RawGraphFile) -> Result<()> {
    validate_item_names(raw)?;
    validate_roots(raw)?;
    warn_on_padded_names(raw);
    Ok(())
}

fn validate_item_names(raw: &RawGraphFile) -> Result<()> {
    for (name, prereqs) in raw.prereqs.iter() {
        if name.is_empty() {
            return Err(PrereqsError::ConfigError(
                "[prereqs] contains an item with an empty name".to_string(),
            ));
        }
        if prereqs.iter().any(|p| p.is_empty()) {
            return Err(PrereqsError::ConfigError(format!(
                "item '{}' lists an empty prerequisite name",
                name
            )));
        }
    }
    Ok(())
}

fn validate_roots(raw: &RawGraphFile) -> Result<()> {
    if raw.config.roots.iter().any(|r| r.is_empty()) {
        return Err(PrereqsError::ConfigError(
            "[config].roots contains an empty name".to_string(),
        ));
    }
    Ok(())
}

/// Names are matched exactly, so `"calculus "` and `"calculus"` are different
/// items. That is almost never intended; say so, but keep the name as written.
fn warn_on_padded_names(raw: &RawGraphFile) {
    let names = raw
        .prereqs
        .iter()
        .flat_map(|(name, prereqs)| std::iter::once(name).chain(prereqs.iter()))
        .chain(raw.config.roots.iter());

    for name in names {
        if name.trim() != name.as_str() {
            warn!(
                item = ?name,
                "item name has leading or trailing whitespace; names are matched exactly"
            );
        }
    }
}
