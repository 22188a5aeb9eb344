// src/config/model.rs

use std::collections::BTreeMap;

use std::fmt;

use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::dag::DepGraph;
use crate::types::OutputFormat;

/// Structured graph document as read from TOML or JSON.
///
/// ```toml
/// [config]
/// roots = ["algorithms"]
/// format = "text"
///
/// [prereqs]
/// "algorithms" = ["data structures"]
/// "data structures" = ["discrete math"]
/// ```
///
/// Both sections are optional. Unknown top-level keys are rejected so that a
/// bare `name -> [prereqs]` mapping is never mistaken for an empty
/// structured document (see [`RawDocument`]).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawGraphFile {
    /// Options from `[config]`. Only a table is accepted here; `"config": []`
    /// in JSON is a bare item named `config`.
    #[serde(default, deserialize_with = "config_section_from_table")]
    pub config: ConfigSection,

    /// The dependency relation from `[prereqs]`.
    ///
    /// Keys are item names, values the items each one directly requires, in
    /// declaration order.
    #[serde(default)]
    pub prereqs: BTreeMap<String, Vec<String>>,
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSection {
    /// Items to start resolution from. Empty means "every declared item".
    #[serde(default)]
    pub roots: Vec<String>,

    /// Default output format; `--format` on the command line wins.
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

fn config_section_from_table<'de, D>(deserializer: D) -> Result<ConfigSection, D::Error>
where
    D: Deserializer<'de>,
{
    struct TableOnly;

    impl<'de> Visitor<'de> for TableOnly {
        type Value = ConfigSection;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a [config] table")
        }

        fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            ConfigSection::deserialize(MapAccessDeserializer::new(map))
        }
    }

    deserializer.deserialize_map(TableOnly)
}

/// Any accepted JSON document shape: the structured form above, or just the
/// `name -> [prereqs]` mapping on its own.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDocument {
    Structured(RawGraphFile),
    Bare(BTreeMap<String, Vec<String>>),
}

impl From<RawDocument> for RawGraphFile {
    fn from(doc: RawDocument) -> Self {
        match doc {
            RawDocument::Structured(file) => file,
            RawDocument::Bare(prereqs) => RawGraphFile {
                config: ConfigSection::default(),
                prereqs,
            },
        }
    }
}

/// A validated graph document, ready to resolve.
///
/// Only obtainable through `TryFrom<RawGraphFile>` (see `config::validate`).
#[derive(Debug, Clone)]
pub struct GraphFile {
    pub config: ConfigSection,
    pub graph: DepGraph,
}

impl GraphFile {
    pub(crate) fn new_unchecked(config: ConfigSection, graph: DepGraph) -> Self {
        Self { config, graph }
    }

    /// Roots from `[config].roots`, or `None` to resolve every item.
    pub fn default_roots(&self) -> Option<&[String]> {
        if self.config.roots.is_empty() {
            None
        } else {
            Some(&self.config.roots)
        }
    }
}
