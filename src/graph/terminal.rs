use super::{Block, Graph};

/// Graph sources and sinks, used to seed default start and end selections.
#[derive(Debug, Clone, Default)]
pub struct Terminals<'g> {
    /// Blocks no other block transitions into.
    pub starts: Vec<&'g Block>,
    /// Blocks with no traversable outgoing transition.
    pub ends: Vec<&'g Block>,
}

/// Finds the source and sink blocks of `graph`, in graph insertion order.
///
/// Dangling forward connections count towards neither degree. An isolated
/// block is both a start and an end.
pub fn find_terminal(graph: &Graph) -> Terminals<'_> {
    let mut has_incoming = vec![false; graph.len()];
    for position in 0..graph.len() {
        for &next in graph.adjacent(position) {
            if next != position {
                has_incoming[next] = true;
            }
        }
    }

    let mut terminals = Terminals::default();
    for (position, block) in graph.blocks().iter().enumerate() {
        if !has_incoming[position] {
            terminals.starts.push(block);
        }
        if graph.adjacent(position).is_empty() {
            terminals.ends.push(block);
        }
    }
    terminals
}
