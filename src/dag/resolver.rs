// src/dag/resolver.rs

use thiserror::Error;
use tracing::{debug, trace};

use crate::dag::graph::DepGraph;
use crate::dag::visit::{Frame, VisitMap, VisitState};

/// A resolved order: every prerequisite appears before its dependents.
pub type Order = Vec<String>;

/// Resolution hit an item that was still being expanded.
///
/// `path` starts at the first entry of the repeated item and ends with the
/// repeat itself, e.g. `["a", "b", "a"]` for `a -> b -> a`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cycle detected in dependency graph: {}", .path.join(" -> "))]
pub struct CycleError {
    path: Vec<String>,
}

impl CycleError {
    /// The items forming the cycle, first and last being the same item.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Cut the cycle out of the traversal stack: everything from the frame
    /// that first entered `repeated` up to the top, plus `repeated` again.
    fn from_stack(stack: &[Frame<'_>], repeated: &str) -> Self {
        let start = stack
            .iter()
            .position(|frame| frame.item == repeated)
            .unwrap_or(0);
        let mut path: Vec<String> = stack[start..]
            .iter()
            .map(|frame| frame.item.to_string())
            .collect();
        path.push(repeated.to_string());
        Self { path }
    }
}

/// Compute a dependency-respecting order over `graph`.
///
/// With `roots = None` traversal is seeded from [`DepGraph::keys`], which is
/// lexicographic, so the result is the same on every run. Explicit roots are
/// visited in the order given; a root that is not a key is a leaf and is
/// emitted on its own.
///
/// Traversal is depth-first with post-order append and runs on an explicit
/// frame stack, so chain length is limited by memory rather than by the
/// thread's call stack.
///
/// On a cycle the whole call fails with [`CycleError`]; nothing of the
/// partially built order is returned.
pub fn resolve<'a, S>(graph: &'a DepGraph, roots: Option<&'a [S]>) -> Result<Order, CycleError>
where
    S: AsRef<str>,
{
    let roots: Vec<&'a str> = match roots {
        Some(roots) => roots.iter().map(|r| r.as_ref()).collect(),
        None => graph.keys().collect(),
    };
    debug!(roots = roots.len(), items = graph.len(), "resolver: starting");

    let mut visits = VisitMap::new();
    let mut order = Order::new();

    for root in roots {
        if let Err(err) = visit_from(graph, root, &mut visits, &mut order) {
            debug!(cycle = ?err.path(), "resolver: cycle detected, discarding partial order");
            return Err(err);
        }
    }

    debug!(resolved = order.len(), "resolver: done");
    Ok(order)
}

/// Depth-first expansion of a single root.
///
/// Nothing is `InProgress` between roots, so a root is either `Done`
/// (skipped) or `Unvisited`.
fn visit_from<'a>(
    graph: &'a DepGraph,
    root: &'a str,
    visits: &mut VisitMap<'a>,
    order: &mut Order,
) -> Result<(), CycleError> {
    if visits.state_of(root) == VisitState::Done {
        return Ok(());
    }

    let mut stack: Vec<Frame<'a>> = vec![Frame::new(root, graph.prerequisites_of(root))];
    visits.enter(root);

    while let Some(frame) = stack.last_mut() {
        match frame.next_prereq() {
            Some(prereq) => match visits.state_of(prereq) {
                VisitState::Done => {}
                VisitState::InProgress => {
                    return Err(CycleError::from_stack(&stack, prereq));
                }
                VisitState::Unvisited => {
                    visits.enter(prereq);
                    stack.push(Frame::new(prereq, graph.prerequisites_of(prereq)));
                }
            },
            None => {
                let item = frame.item;
                stack.pop();
                visits.finish(item);
                trace!(item, position = order.len() + 1, "resolver: emitted");
                order.push(item.to_string());
            }
        }
    }

    Ok(())
}

/// Borrowing wrapper around [`resolve`] for callers that resolve the same
/// graph repeatedly. Holds no traversal state of its own.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'g> {
    graph: &'g DepGraph,
}

impl<'g> Resolver<'g> {
    pub fn new(graph: &'g DepGraph) -> Self {
        Self { graph }
    }

    /// Resolve every key, in lexicographic root order.
    pub fn resolve_all(&self) -> Result<Order, CycleError> {
        resolve::<&str>(self.graph, None)
    }

    /// Resolve only what is reachable from `roots`.
    pub fn resolve_from<S: AsRef<str>>(&self, roots: &[S]) -> Result<Order, CycleError> {
        resolve(self.graph, Some(roots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courses() -> DepGraph {
        DepGraph::from_map([
            ("algorithms", vec!["data structures"]),
            ("data structures", vec!["discrete math"]),
            ("discrete math", vec!["intro to programming"]),
            ("calculus", vec!["linear algebra"]),
        ])
    }

    #[test]
    fn canonical_example_resolves_in_fixed_order() {
        let order = resolve::<&str>(&courses(), None).unwrap();
        assert_eq!(
            order,
            vec![
                "intro to programming",
                "discrete math",
                "data structures",
                "algorithms",
                "linear algebra",
                "calculus",
            ]
        );
    }

    #[test]
    fn two_node_cycle_reports_path() {
        let graph = DepGraph::from_map([("a", vec!["b"]), ("b", vec!["a"])]);
        let err = resolve::<&str>(&graph, None).unwrap_err();
        assert_eq!(err.path(), ["a", "b", "a"]);
        assert_eq!(
            err.to_string(),
            "cycle detected in dependency graph: a -> b -> a"
        );
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let graph = DepGraph::from_map([("a", vec!["a"])]);
        let err = resolve::<&str>(&graph, None).unwrap_err();
        assert_eq!(err.path(), ["a", "a"]);
    }

    #[test]
    fn cycle_path_excludes_the_lead_in() {
        // entry -> x -> y -> z -> x
        let graph = DepGraph::from_map([
            ("entry", vec!["x"]),
            ("x", vec!["y"]),
            ("y", vec!["z"]),
            ("z", vec!["x"]),
        ]);
        let err = resolve(&graph, Some(&["entry"][..])).unwrap_err();
        assert_eq!(err.path(), ["x", "y", "z", "x"]);
    }

    #[test]
    fn empty_graph_resolves_to_empty_order() {
        let order = resolve::<&str>(&DepGraph::new(), None).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn duplicate_prereqs_are_emitted_once() {
        let graph = DepGraph::from_map([("x", vec!["y", "y", "z", "y"])]);
        let order = resolve::<&str>(&graph, None).unwrap();
        assert_eq!(order, vec!["y", "z", "x"]);
    }

    #[test]
    fn diamond_shares_common_prerequisite() {
        let graph = DepGraph::from_map([
            ("top", vec!["left", "right"]),
            ("left", vec!["base"]),
            ("right", vec!["base"]),
        ]);
        let order = resolve::<&str>(&graph, None).unwrap();
        assert_eq!(order, vec!["base", "left", "right", "top"]);
    }

    #[test]
    fn explicit_roots_limit_output_to_reachable_items() {
        let graph = courses();
        let order = Resolver::new(&graph).resolve_from(&["calculus"]).unwrap();
        assert_eq!(order, vec!["linear algebra", "calculus"]);
    }

    #[test]
    fn unknown_root_is_emitted_as_leaf() {
        let graph = courses();
        let order = Resolver::new(&graph).resolve_from(&["astronomy"]).unwrap();
        assert_eq!(order, vec!["astronomy"]);
    }

    #[test]
    fn cycle_outside_requested_roots_is_not_reached() {
        let graph = DepGraph::from_map([
            ("a", vec!["b"]),
            ("b", vec!["a"]),
            ("c", vec!["d"]),
        ]);
        let order = Resolver::new(&graph).resolve_from(&["c"]).unwrap();
        assert_eq!(order, vec!["d", "c"]);
    }

    #[test]
    fn resolver_can_be_reused() {
        let graph = courses();
        let resolver = Resolver::new(&graph);
        let first = resolver.resolve_all().unwrap();
        let second = resolver.resolve_all().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn deep_chain_does_not_overflow_the_stack() {
        let depth = 200_000;
        let mut graph = DepGraph::new();
        for i in 1..depth {
            graph.add_edge(format!("n{i}"), format!("n{}", i - 1));
        }
        let order = resolve(&graph, Some(&[format!("n{}", depth - 1)][..])).unwrap();
        assert_eq!(order.len(), depth);
        assert_eq!(order.first().map(String::as_str), Some("n0"));
    }
}
