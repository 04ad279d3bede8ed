//! Path enumeration: hop limits, cycles, endpoints and guarded searches.
mod common;
use common::*;
use roadmap::prelude::*;

fn paths(expected: &[&[&str]]) -> Vec<Path> {
    expected.iter().map(|ids| Path::from(ids.to_vec())).collect()
}

#[cfg(test)]
mod enumerate_tests {
    use super::*;

    #[test]
    fn test_diamond_unbounded_finds_both_branches() {
        let graph = diamond();
        let found = enumerate(&graph, "A", "D", MaxDepth::Unbounded);
        assert_eq!(found, paths(&[&["A", "B", "D"], &["A", "C", "D"]]));
    }

    #[test]
    fn test_diamond_with_one_hop_finds_nothing() {
        let graph = diamond();
        assert!(enumerate(&graph, "A", "D", MaxDepth::Hops(1)).is_empty());
        assert_eq!(enumerate(&graph, "A", "D", MaxDepth::Hops(2)).len(), 2);
    }

    #[test]
    fn test_cycle_is_not_followed() {
        let graph = cycle();
        let found = enumerate(&graph, "A", "C", MaxDepth::Unbounded);
        assert_eq!(found, paths(&[&["A", "B", "C"]]));
    }

    #[test]
    fn test_start_equals_end_is_the_trivial_path() {
        let graph = cycle();
        for depth in [MaxDepth::Unbounded, MaxDepth::Hops(0), MaxDepth::Hops(3)] {
            assert_eq!(enumerate(&graph, "A", "A", depth), paths(&[&["A"]]));
        }
    }

    #[test]
    fn test_zero_hops_between_distinct_blocks_finds_nothing() {
        let graph = graph_from_edges(&[("A", "B")]);
        assert!(enumerate(&graph, "A", "B", MaxDepth::Hops(0)).is_empty());
        assert_eq!(enumerate(&graph, "A", "B", MaxDepth::Hops(1)).len(), 1);
    }

    #[test]
    fn test_unknown_endpoint_yields_empty_result() {
        let graph = diamond();
        assert!(enumerate(&graph, "nope", "D", MaxDepth::Unbounded).is_empty());
        assert!(enumerate(&graph, "A", "nope", MaxDepth::Unbounded).is_empty());
        assert!(enumerate(&graph, "nope", "nope", MaxDepth::Unbounded).is_empty());
    }

    #[test]
    fn test_unreachable_end_yields_empty_result() {
        let graph = diamond();
        assert!(enumerate(&graph, "D", "A", MaxDepth::Unbounded).is_empty());
    }

    #[test]
    fn test_path_stops_at_first_arrival_at_end() {
        // D has an outgoing edge back into the graph, which must not be walked.
        let graph = graph_from_edges(&[("A", "D"), ("D", "E"), ("E", "F")]);
        let found = enumerate(&graph, "A", "D", MaxDepth::Unbounded);
        assert_eq!(found, paths(&[&["A", "D"]]));
    }

    #[test]
    fn test_dangling_reference_is_never_expanded() {
        let mut a = block("a", 0.0, 0.0);
        a.forward_connections = vec!["missing".to_string(), "b".to_string()];
        let graph = roadmap::graph::build(vec![a, block("b", 0.0, 0.0)], vec![]);

        assert_eq!(
            enumerate(&graph, "a", "b", MaxDepth::Unbounded),
            paths(&[&["a", "b"]])
        );
        assert!(enumerate(&graph, "a", "missing", MaxDepth::Unbounded).is_empty());
    }

    #[test]
    fn test_paths_follow_adjacency_order() {
        let graph = graph_from_edges(&[
            ("S", "X"),
            ("S", "Y"),
            ("X", "Y"),
            ("X", "T"),
            ("Y", "T"),
        ]);
        let found = enumerate(&graph, "S", "T", MaxDepth::Unbounded);
        assert_eq!(
            found,
            paths(&[&["S", "X", "Y", "T"], &["S", "X", "T"], &["S", "Y", "T"]])
        );
    }

    #[test]
    fn test_sample_roadmap_route_within_three_hops() {
        let graph = GraphBuilder::from_definition(roadmap::data::sample_roadmap())
            .unwrap()
            .build();

        let short = enumerate(&graph, "prospective", "temp_resident", MaxDepth::Hops(3));
        assert_eq!(
            short,
            paths(&[&["prospective", "study", "permit_open", "temp_resident"]])
        );

        let all = enumerate(&graph, "prospective", "temp_resident", MaxDepth::Unbounded);
        assert!(all.len() > short.len());
        for path in &all {
            assert_eq!(path.first(), Some("prospective"));
            assert_eq!(path.last(), Some("temp_resident"));
            assert!(path.is_simple(), "{} repeats a block", path);
        }
    }
}

#[cfg(test)]
mod finder_tests {
    use super::*;

    #[test]
    fn test_finder_without_limits_matches_enumerate() {
        let graph = diamond();
        let found = PathFinder::new(&graph).find("A", "D").unwrap();
        assert_eq!(found, enumerate(&graph, "A", "D", MaxDepth::Unbounded));
    }

    #[test]
    fn test_node_budget_aborts_search() {
        // The diamond needs four expansions: B, D, C, D.
        let graph = diamond();

        let err = PathFinder::new(&graph)
            .node_budget(2)
            .find("A", "D")
            .unwrap_err();
        assert_eq!(err, SearchError::BudgetExhausted { expanded: 3, found: 1 });

        let ok = PathFinder::new(&graph).node_budget(4).find("A", "D");
        assert_eq!(ok.map(|p| p.len()), Ok(2));
    }

    #[test]
    fn test_budget_equal_to_expansions_is_enough() {
        // A -> B -> C -> D expands exactly three blocks.
        let graph = graph_from_edges(&[("A", "B"), ("B", "C"), ("C", "D")]);

        let found = PathFinder::new(&graph).node_budget(3).find("A", "D");
        assert_eq!(found, Ok(paths(&[&["A", "B", "C", "D"]])));

        assert_eq!(
            PathFinder::new(&graph).node_budget(2).find("A", "D"),
            Err(SearchError::BudgetExhausted { expanded: 3, found: 0 })
        );
    }

    #[test]
    fn test_cancelled_token_stops_search() {
        let graph = diamond();
        let token = CancelToken::new();
        let finder = PathFinder::new(&graph).cancel_token(token.clone());

        assert!(finder.find("A", "D").is_ok());
        token.cancel();
        assert!(token.is_cancelled());
        assert_eq!(
            finder.find("A", "D"),
            Err(SearchError::Cancelled { expanded: 1, found: 0 })
        );
    }

    #[test]
    fn test_trivial_path_needs_no_expansion() {
        let graph = diamond();
        let token = CancelToken::new();
        token.cancel();
        let found = PathFinder::new(&graph)
            .node_budget(0)
            .cancel_token(token)
            .find("A", "A");
        assert_eq!(found, Ok(paths(&[&["A"]])));
    }

    #[test]
    fn test_finder_respects_max_depth() {
        let graph = diamond();
        let found = PathFinder::new(&graph)
            .max_depth(MaxDepth::Hops(1))
            .find("A", "D")
            .unwrap();
        assert!(found.is_empty());
    }
}

#[cfg(test)]
mod depth_tests {
    use super::*;

    #[test]
    fn test_depth_from_wire_integers() {
        assert_eq!(MaxDepth::try_from(-1_i64), Ok(MaxDepth::Unbounded));
        assert_eq!(MaxDepth::try_from(0_i64), Ok(MaxDepth::Hops(0)));
        assert_eq!(MaxDepth::try_from(7_i64), Ok(MaxDepth::Hops(7)));
        assert_eq!(MaxDepth::try_from(-2_i64), Err(QueryError::DepthOutOfRange(-2)));
    }

    #[test]
    fn test_depth_from_strings() {
        assert_eq!(" 5 ".parse::<MaxDepth>(), Ok(MaxDepth::Hops(5)));
        assert_eq!("-1".parse::<MaxDepth>(), Ok(MaxDepth::Unbounded));
        assert_eq!(
            "deep".parse::<MaxDepth>(),
            Err(QueryError::InvalidDepth("deep".to_string()))
        );
    }

    #[test]
    fn test_depth_wire_shape() {
        assert_eq!(serde_json::to_string(&MaxDepth::Unbounded).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&MaxDepth::Hops(4)).unwrap(), "4");
        assert_eq!(serde_json::from_str::<MaxDepth>("\"3\"").unwrap(), MaxDepth::Hops(3));
        assert_eq!(serde_json::from_str::<MaxDepth>("-1").unwrap(), MaxDepth::Unbounded);
        assert!(serde_json::from_str::<MaxDepth>("-5").is_err());
        assert_eq!(MaxDepth::default(), MaxDepth::Unbounded);
        assert_eq!(MaxDepth::Unbounded.to_string(), "unbounded");
    }
}
