// src/catalog.rs

//! Built-in example graph: a computer-science course catalog where each
//! course lists the courses that must be taken first.
//!
//! Used by `prereqs --builtin` and handy as a fixture.

use crate::dag::DepGraph;

/// `(course, prerequisites)` pairs of the built-in catalog.
pub const COURSES: &[(&str, &[&str])] = &[
    ("algorithms", &["data structures"]),
    ("calculus", &["linear algebra"]),
    (
        "compiler",
        &["data structures", "formal languages", "computer organization"],
    ),
    ("data structures", &["discrete math"]),
    ("database", &["data structures"]),
    ("discrete math", &["intro to programming"]),
    ("formal languages", &["discrete math"]),
    ("network", &["operating systems"]),
    ("operating systems", &["data structures", "computer organization"]),
    (
        "programming languages",
        &["data structures", "computer organization"],
    ),
];

/// The course catalog as a [`DepGraph`].
pub fn course_catalog() -> DepGraph {
    DepGraph::from_map(COURSES.iter().map(|(course, prereqs)| (*course, prereqs.iter().copied())))
}
