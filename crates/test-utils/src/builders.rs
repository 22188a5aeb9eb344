#![allow(dead_code)]

use prereqs::config::{ConfigSection, GraphFile, RawGraphFile};
use prereqs::dag::DepGraph;
use prereqs::types::OutputFormat;

/// Builder for `GraphFile` to simplify test setup.
pub struct GraphFileBuilder {
    raw: RawGraphFile,
}

impl GraphFileBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawGraphFile {
                config: ConfigSection::default(),
                prereqs: Default::default(),
            },
        }
    }

    /// Declare `name` with the given prerequisites (replacing any earlier list).
    pub fn with_item(mut self, name: &str, prereqs: &[&str]) -> Self {
        self.raw.prereqs.insert(
            name.to_string(),
            prereqs.iter().map(|p| p.to_string()).collect(),
        );
        self
    }

    pub fn with_root(mut self, name: &str) -> Self {
        self.raw.config.roots.push(name.to_string());
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.raw.config.format = Some(format);
        self
    }

    pub fn build_raw(self) -> RawGraphFile {
        self.raw
    }

    pub fn build(self) -> GraphFile {
        GraphFile::try_from(self.raw).expect("Failed to build valid graph file from builder")
    }
}

impl Default for GraphFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `n{len-1} -> n{len-2} -> ... -> n0`: each item requires the previous one.
pub fn chain_graph(len: usize) -> DepGraph {
    let mut graph = DepGraph::new();
    for i in 1..len {
        graph.add_edge(format!("n{i}"), format!("n{}", i - 1));
    }
    graph
}

/// Four courses in two independent chains; the usual worked example.
pub fn courses_graph() -> DepGraph {
    GraphFileBuilder::new()
        .with_item("algorithms", &["data structures"])
        .with_item("data structures", &["discrete math"])
        .with_item("discrete math", &["intro to programming"])
        .with_item("calculus", &["linear algebra"])
        .build()
        .graph
}
