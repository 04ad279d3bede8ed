//! Common test fixtures for building roadmap graphs.
use roadmap::prelude::*;

/// Shorthand for a block whose title is its upper-cased id.
#[allow(dead_code)]
pub fn block(id: &str, months: f64, cost: f64) -> BlockRecord {
    BlockRecord::new(id, &id.to_uppercase(), "Core", months, cost)
}

/// Builds a graph from `(from, to)` pairs, creating a zero-estimate block for every id mentioned.
#[allow(dead_code)]
pub fn graph_from_edges(edges: &[(&str, &str)]) -> Graph {
    let mut ids: Vec<&str> = Vec::new();
    for &(from, to) in edges {
        for id in [from, to] {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    roadmap::graph::build(
        ids.into_iter().map(|id| block(id, 0.0, 0.0)),
        edges.iter().map(|&(from, to)| ConnectionRecord::new(from, to)),
    )
}

/// `A -> B -> D` and `A -> C -> D`.
#[allow(dead_code)]
pub fn diamond() -> Graph {
    graph_from_edges(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")])
}

/// `A -> B`, `B -> A`, `B -> C`.
#[allow(dead_code)]
pub fn cycle() -> Graph {
    graph_from_edges(&[("A", "B"), ("B", "A"), ("B", "C")])
}

/// `X -> Y -> Z` with estimates `(1, 10)`, `(2, 20)`, `(3, 30)`.
#[allow(dead_code)]
pub fn weighted_chain() -> Graph {
    roadmap::graph::build(
        vec![
            BlockRecord::new("X", "X", "Status", 1.0, 10.0),
            BlockRecord::new("Y", "Y", "Core", 2.0, 20.0),
            BlockRecord::new("Z", "Z", "Status", 3.0, 30.0),
        ],
        vec![ConnectionRecord::new("X", "Y"), ConnectionRecord::new("Y", "Z")],
    )
}

/// Roadmap JSON in the row-store shape: integer ids, a missing estimate, a
/// null id list and a connection carrying ignored edge estimates.
#[allow(dead_code)]
pub const ROW_STORE_JSON: &str = r#"{
    "blocks": [
        { "id": 1, "title": "Visitor", "category": "Entry", "average_time": 0.5, "cost": 100 },
        { "id": 2, "title": "Study", "category": "Core", "average_time": 12, "cost": 15000,
          "prerequisites": null },
        { "id": "3", "title": "Work Permit Open", "category": "Core", "average_time": 2 }
    ],
    "connections": [
        { "from_id": 1, "to_id": 2 },
        { "from_id": 2, "to_id": "3", "average_time": 99, "cost": 99 },
        { "from_id": 1, "to_id": 3 }
    ]
}"#;
