use super::{MaxDepth, Path};
use crate::graph::Graph;
use std::convert::Infallible;
use tracing::debug;

/// Checked once per node expansion; returning an error aborts the search.
pub(crate) trait SearchGuard {
    type Error;

    fn on_expand(&mut self, expanded: usize, found: usize) -> Result<(), Self::Error>;
}

/// A guard that never interrupts.
pub(crate) struct Unguarded;

impl SearchGuard for Unguarded {
    type Error = Infallible;

    fn on_expand(&mut self, _expanded: usize, _found: usize) -> Result<(), Infallible> {
        Ok(())
    }
}

#[derive(Debug, Default)]
pub(crate) struct Enumeration {
    pub paths: Vec<Path>,
    pub expanded: usize,
}

/// One level of the explicit DFS stack: a block on the current trail and the
/// index of the next successor to try.
struct Frame {
    node: usize,
    cursor: usize,
}

/// Enumerates every simple path from `start` to `end` within `max_depth` hops.
///
/// Iterative depth-first search over the graph's traversable adjacency. A
/// block already on the current trail is never re-entered, which both avoids
/// cycles and bounds the stack by the number of blocks. Arriving at `end`
/// completes a path: the walk does not continue past it, but sibling
/// branches are still explored. Paths come out in adjacency order.
pub(crate) fn enumerate_with<G: SearchGuard>(
    graph: &Graph,
    start: &str,
    end: &str,
    max_depth: MaxDepth,
    guard: &mut G,
) -> Result<Enumeration, G::Error> {
    let (Some(start_pos), Some(end_pos)) = (graph.index_of(start), graph.index_of(end)) else {
        debug!(start, end, "endpoint not in graph, nothing to enumerate");
        return Ok(Enumeration::default());
    };

    if start_pos == end_pos {
        return Ok(Enumeration {
            paths: vec![Path::new(vec![start.to_string()])],
            expanded: 0,
        });
    }

    let mut paths = Vec::new();
    let mut expanded = 0usize;
    let mut trail: Vec<usize> = vec![start_pos];
    let mut on_trail = vec![false; graph.len()];
    on_trail[start_pos] = true;
    let mut stack = vec![Frame {
        node: start_pos,
        cursor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let hops = trail.len() - 1;
        let successors = graph.adjacent(frame.node);

        if frame.cursor >= successors.len() || !max_depth.allows_step_from(hops) {
            on_trail[frame.node] = false;
            trail.pop();
            stack.pop();
            continue;
        }

        let next = successors[frame.cursor];
        frame.cursor += 1;
        if on_trail[next] {
            continue;
        }

        expanded += 1;
        guard.on_expand(expanded, paths.len())?;

        if next == end_pos {
            paths.push(trail_to_path(graph, &trail, next));
            continue;
        }

        // A block that cannot take another step can never lead to `end`.
        if max_depth.allows_step_from(hops + 1) {
            on_trail[next] = true;
            trail.push(next);
            stack.push(Frame {
                node: next,
                cursor: 0,
            });
        }
    }

    if paths.is_empty() {
        debug!(start, end, %max_depth, expanded, "no route found");
    } else {
        debug!(start, end, %max_depth, expanded, paths = paths.len(), "paths enumerated");
    }

    Ok(Enumeration { paths, expanded })
}

/// Runs an unguarded enumeration, which cannot fail.
pub(crate) fn enumerate_all(graph: &Graph, start: &str, end: &str, max_depth: MaxDepth) -> Vec<Path> {
    match enumerate_with(graph, start, end, max_depth, &mut Unguarded) {
        Ok(enumeration) => enumeration.paths,
        Err(never) => match never {},
    }
}

fn trail_to_path(graph: &Graph, trail: &[usize], last: usize) -> Path {
    trail
        .iter()
        .chain(std::iter::once(&last))
        .map(|&position| graph.block_at(position).id.clone())
        .collect::<Vec<_>>()
        .into()
}
