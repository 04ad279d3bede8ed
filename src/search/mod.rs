mod depth;
mod enumerate;
mod finder;
mod path;

pub use depth::MaxDepth;
pub use finder::{CancelToken, PathFinder};
pub use path::Path;

use crate::graph::Graph;

/// Enumerates all simple paths from `start_id` to `end_id` with at most `max_depth` hops.
///
/// Never fails: an unknown endpoint or an unreachable destination yields an
/// empty vector, and `start_id == end_id` yields the single path `[start_id]`
/// whatever the depth. The search is exponential in the worst case; use
/// [`PathFinder`] to add a node budget or cancellation.
pub fn enumerate(graph: &Graph, start_id: &str, end_id: &str, max_depth: MaxDepth) -> Vec<Path> {
    enumerate::enumerate_all(graph, start_id, end_id, max_depth)
}
