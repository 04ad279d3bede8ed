//! Path metrics, labels and ranking.
mod common;
use common::*;
use roadmap::prelude::*;
use roadmap::report::{format, metrics};

#[cfg(test)]
mod metrics_tests {
    use super::*;

    #[test]
    fn test_two_block_path_metrics_and_label() {
        let graph = roadmap::graph::build(
            vec![
                BlockRecord::new("a", "A", "Core", 2.0, 100.0),
                BlockRecord::new("b", "B", "Core", 3.0, 50.0),
            ],
            vec![ConnectionRecord::new("a", "b")],
        );
        let path = Path::from(vec!["a", "b"]);

        assert_eq!(
            metrics(&graph, &path),
            Ok(PathMetrics {
                total_time: 5.0,
                total_cost: 150.0
            })
        );
        assert_eq!(format(&graph, &path).unwrap(), "A → B");
    }

    #[test]
    fn test_metrics_include_both_endpoints() {
        let graph = weighted_chain();
        let result = PathResult::from_path(&graph, Path::from(vec!["X", "Y", "Z"])).unwrap();

        assert_eq!(result.total_time, 6.0);
        assert_eq!(result.total_cost, 60.0);
        assert_eq!(result.formatted, "X → Y → Z");
        assert_eq!(result.steps(), 3);
    }

    #[test]
    fn test_blank_title_is_shown_by_id() {
        let graph = roadmap::graph::build(
            vec![
                BlockRecord::new("visitor", "Visitor", "Entry", 0.5, 100.0),
                BlockRecord::new("q7", "", "Core", 1.0, 0.0),
            ],
            vec![ConnectionRecord::new("visitor", "q7")],
        );
        let label = format(&graph, &Path::from(vec!["visitor", "q7"])).unwrap();
        assert_eq!(label, "Visitor → q7");
    }

    #[test]
    fn test_unknown_block_is_an_internal_fault() {
        let graph = weighted_chain();
        let corrupt = Path::from(vec!["X", "ghost", "Z"]);

        let expected = PathError::UnknownBlock {
            block_id: "ghost".to_string(),
            position: 1,
        };
        assert_eq!(metrics(&graph, &corrupt), Err(expected.clone()));
        assert_eq!(format(&graph, &corrupt), Err(expected.clone()));
        assert_eq!(
            describe_paths(&graph, vec![Path::from(vec!["X"]), corrupt]),
            Err(expected)
        );
    }

    #[test]
    fn test_metrics_do_not_touch_the_graph() {
        let graph = weighted_chain();
        let before = graph.blocks().to_vec();
        let _ = describe_paths(&graph, enumerate(&graph, "X", "Z", MaxDepth::Unbounded));
        assert_eq!(graph.blocks(), before.as_slice());
    }

    #[test]
    fn test_path_result_serialises_in_camel_case() {
        let graph = weighted_chain();
        let result = PathResult::from_path(&graph, Path::from(vec!["X", "Y"])).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["path"], serde_json::json!(["X", "Y"]));
        assert_eq!(json["totalTime"], 3.0);
        assert_eq!(json["totalCost"], 30.0);
        assert_eq!(json["formatted"], "X → Y");
    }
}

#[cfg(test)]
mod ranking_tests {
    use super::*;

    fn results() -> Vec<PathResult> {
        // fast:  a -> b -> z        time 1 + 1 + 1,  cost 0 + 500 + 0
        // cheap: a -> c -> d -> z   time 1 + 4 + 4 + 1, cost 0 + 10 + 10 + 0
        let graph = roadmap::graph::build(
            vec![
                BlockRecord::new("a", "Start", "Status", 1.0, 0.0),
                BlockRecord::new("b", "Fast", "Core", 1.0, 500.0),
                BlockRecord::new("c", "Cheap", "Core", 4.0, 10.0),
                BlockRecord::new("d", "Cheaper", "Core", 4.0, 10.0),
                BlockRecord::new("z", "End", "Status", 1.0, 0.0),
            ],
            vec![
                ConnectionRecord::new("a", "c"),
                ConnectionRecord::new("c", "d"),
                ConnectionRecord::new("d", "z"),
                ConnectionRecord::new("a", "b"),
                ConnectionRecord::new("b", "z"),
            ],
        );
        describe_paths(&graph, enumerate(&graph, "a", "z", MaxDepth::Unbounded)).unwrap()
    }

    #[test]
    fn test_rank_by_time_steps_and_cost() {
        let mut ranked = results();
        assert_eq!(ranked[0].formatted, "Start → Cheap → Cheaper → End");

        rank(&mut ranked, SortCriteria::Time);
        assert_eq!(ranked[0].formatted, "Start → Fast → End");
        assert_eq!(ranked[0].total_time, 3.0);

        rank(&mut ranked, SortCriteria::Cost);
        assert_eq!(ranked[0].total_cost, 20.0);

        rank(&mut ranked, SortCriteria::Steps);
        assert_eq!(ranked[0].steps(), 3);
        assert_eq!(ranked[1].steps(), 4);
    }

    #[test]
    fn test_rank_keeps_ties_in_order() {
        let graph = diamond();
        let mut ranked =
            describe_paths(&graph, enumerate(&graph, "A", "D", MaxDepth::Unbounded)).unwrap();
        rank(&mut ranked, SortCriteria::Cost);
        let labels: Vec<_> = ranked.iter().map(|r| r.formatted.as_str()).collect();
        assert_eq!(labels, vec!["A → B → D", "A → C → D"]);
    }

    #[test]
    fn test_sort_criteria_parsing() {
        assert_eq!("Cost".parse::<SortCriteria>(), Ok(SortCriteria::Cost));
        assert_eq!(" steps ".parse::<SortCriteria>(), Ok(SortCriteria::Steps));
        assert_eq!(
            "speed".parse::<SortCriteria>(),
            Err(QueryError::InvalidSort("speed".to_string()))
        );
        assert_eq!(SortCriteria::default().to_string(), "time");
    }
}

#[cfg(test)]
mod formatter_tests {
    use super::*;

    #[test]
    fn test_quantities_drop_trailing_zero() {
        assert_eq!(PathFormatter::format_quantity(6.0), "6");
        assert_eq!(PathFormatter::format_quantity(0.5), "0.5");
        assert_eq!(PathFormatter::format_months(12.0), "12 months");
        assert_eq!(PathFormatter::format_cost(1325.0), "$1325");
        assert_eq!(PathFormatter::format_cost(99.5), "$99.5");
    }
}
