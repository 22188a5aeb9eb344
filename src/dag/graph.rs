// src/dag/graph.rs

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::dag::resolver::resolve;

/// In-memory dependency relation keyed by item name.
///
/// Each key maps to the prerequisites it directly requires, in declaration
/// order. Items that only ever appear as a prerequisite are implicit leaves:
/// they are not keys, and [`DepGraph::prerequisites_of`] returns an empty
/// slice for them.
///
/// Keys live in a `BTreeMap`, so [`DepGraph::keys`] always yields them in
/// lexicographic order. Names are compared byte-for-byte; nothing is trimmed
/// or case-folded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepGraph {
    nodes: BTreeMap<String, Vec<String>>,
}

impl DepGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a `name -> [prerequisite, ...]` mapping.
    ///
    /// Lists are kept verbatim, duplicates included; the resolver never
    /// emits an item twice regardless.
    pub fn from_map<I, K, V, P>(map: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let nodes = map
            .into_iter()
            .map(|(name, prereqs)| {
                (name.into(), prereqs.into_iter().map(Into::into).collect())
            })
            .collect();
        Self { nodes }
    }

    /// Record that `item` requires `prerequisite`.
    ///
    /// Adding the same pair twice leaves the list unchanged.
    pub fn add_edge(&mut self, item: impl Into<String>, prerequisite: impl Into<String>) {
        let prerequisite = prerequisite.into();
        let deps = self.nodes.entry(item.into()).or_default();
        if !deps.contains(&prerequisite) {
            deps.push(prerequisite);
        }
    }

    /// Declare `item` as a key without adding any prerequisites.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.nodes.entry(item.into()).or_default();
    }

    /// All items with an explicit prerequisite list (possibly empty), sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    /// Direct prerequisites of `item`; empty for implicit leaves and unknown names.
    pub fn prerequisites_of(&self, item: &str) -> &[String] {
        self.nodes
            .get(item)
            .map(|deps| deps.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `item` is a key (implicit leaves are not).
    pub fn contains(&self, item: &str) -> bool {
        self.nodes.contains_key(item)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every name mentioned anywhere in the graph, keys and implicit leaves
    /// alike, sorted and de-duplicated.
    pub fn nodes(&self) -> Vec<&str> {
        let mut all: BTreeSet<&str> = BTreeSet::new();
        for (name, deps) in self.nodes.iter() {
            all.insert(name.as_str());
            all.extend(deps.iter().map(|d| d.as_str()));
        }
        all.into_iter().collect()
    }

    /// Names that appear only as prerequisites, sorted.
    pub fn implicit_leaves(&self) -> Vec<&str> {
        self.nodes()
            .into_iter()
            .filter(|name| !self.nodes.contains_key(*name))
            .collect()
    }

    /// Length, in items, of the longest prerequisite chain in the graph.
    ///
    /// Returns `Some(0)` for an empty graph and `None` if the graph contains
    /// a cycle (the chain would be unbounded).
    pub fn max_depth(&self) -> Option<usize> {
        let order = resolve::<&str>(self, None).ok()?;
        Some(self.longest_chain_in(&order))
    }

    /// Longest prerequisite chain among the items of `order`, which must be a
    /// resolved order of this graph (every prerequisite before its dependent).
    pub fn longest_chain_in<S: AsRef<str>>(&self, order: &[S]) -> usize {
        // One forward pass sees each prerequisite's depth before it is needed.
        let mut depth: HashMap<&str, usize> = HashMap::with_capacity(order.len());
        let mut longest = 0;
        for name in order.iter().map(|n| n.as_ref()) {
            let below = self
                .prerequisites_of(name)
                .iter()
                .filter_map(|p| depth.get(p.as_str()).copied())
                .max()
                .unwrap_or(0);
            depth.insert(name, below + 1);
            longest = longest.max(below + 1);
        }
        longest
    }
}
