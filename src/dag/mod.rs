// src/dag/mod.rs

//! Dependency graph and ordering.
//!
//! - [`graph`] holds the item -> prerequisites relation.
//! - [`resolver`] turns a graph into a prerequisite-first order, or reports
//!   the cycle that makes one impossible.
//! - [`visit`] is the per-run traversal state the resolver works with.
//! - [`emitter`] renders an order for display.

pub mod emitter;
pub mod graph;
pub mod resolver;
pub mod visit;

pub use emitter::{OrderEntry, format, render_json, render_text, write_order};
pub use graph::DepGraph;
pub use resolver::{CycleError, Order, Resolver, resolve};
pub use visit::VisitState;
