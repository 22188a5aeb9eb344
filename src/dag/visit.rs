// src/dag/visit.rs

//! Per-run traversal bookkeeping for the resolver.

use std::collections::HashMap;

/// Visitation state of a single item during one resolve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitState {
    /// Not reached yet in this run.
    #[default]
    Unvisited,
    /// Entered but its prerequisites are not all emitted; it is on the stack.
    InProgress,
    /// Emitted to the order.
    Done,
}

/// Visitation states for one resolve call. Items absent from the map are
/// [`VisitState::Unvisited`].
#[derive(Debug, Default)]
pub struct VisitMap<'a> {
    states: HashMap<&'a str, VisitState>,
}

impl<'a> VisitMap<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state_of(&self, item: &str) -> VisitState {
        self.states.get(item).copied().unwrap_or_default()
    }

    pub fn enter(&mut self, item: &'a str) {
        self.states.insert(item, VisitState::InProgress);
    }

    pub fn finish(&mut self, item: &'a str) {
        self.states.insert(item, VisitState::Done);
    }
}

/// One level of the explicit traversal stack: the item being expanded and
/// the index of the next prerequisite to look at.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub item: &'a str,
    pub prereqs: &'a [String],
    pub next: usize,
}

impl<'a> Frame<'a> {
    pub fn new(item: &'a str, prereqs: &'a [String]) -> Self {
        Self {
            item,
            prereqs,
            next: 0,
        }
    }

    /// Advance past the next prerequisite, returning it.
    pub fn next_prereq(&mut self) -> Option<&'a str> {
        let prereq = self.prereqs.get(self.next)?;
        self.next += 1;
        Some(prereq.as_str())
    }
}
