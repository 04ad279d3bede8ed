//! Unit tests for small public types
use roadmap::category::{DEFAULT_STYLE, known_categories};
use roadmap::prelude::*;

#[test]
fn test_category_lookup_ignores_case_and_whitespace() {
    let study = category_style("Study");
    assert_eq!(study.icon, IconKey::School);
    assert_eq!(category_style("  study "), study);
    assert_eq!(category_style("EDUCATION").icon, IconKey::School);
    assert_eq!(category_style("Employment").icon, IconKey::Work);
}

#[test]
fn test_unknown_category_gets_default_style() {
    assert_eq!(category_style("Space Travel"), DEFAULT_STYLE);
    assert_eq!(category_style(""), DEFAULT_STYLE);
    assert_eq!(DEFAULT_STYLE.icon.to_string(), "help");
}

#[test]
fn test_every_known_category_has_a_real_style() {
    let names: Vec<_> = known_categories().collect();
    assert!(names.contains(&"Status"));
    assert!(names.contains(&"Economics"));
    for name in names {
        let style = category_style(name);
        assert_ne!(style.icon, IconKey::Help, "{} has no icon", name);
        assert!(style.color.starts_with('#'));
    }
}

#[test]
fn test_category_style_serialises_icon_in_snake_case() {
    let json = serde_json::to_value(category_style("Entry")).unwrap();
    assert_eq!(json["icon"], "flight_takeoff");
}

#[test]
fn test_path_helpers() {
    let path = Path::from(vec!["a", "b", "c"]);
    assert_eq!(path.len(), 3);
    assert_eq!(path.hops(), 2);
    assert_eq!(path.first(), Some("a"));
    assert_eq!(path.last(), Some("c"));
    assert!(path.contains("b"));
    assert!(path.is_simple());
    assert!(!Path::from(vec!["a", "b", "a"]).is_simple());
    assert_eq!(path.to_string(), "a -> b -> c");
    assert_eq!(Path::from(vec!["a"]).hops(), 0);
}

#[test]
fn test_path_response_is_a_bare_array() {
    let response = PathResponse(vec![Path::from(vec!["prospective", "study"])]);
    assert_eq!(response.to_json().unwrap(), r#"[["prospective","study"]]"#);

    let parsed: PathResponse = serde_json::from_str(r#"[["x"],[]]"#).unwrap();
    assert_eq!(parsed.paths().len(), 2);
    assert!(parsed.paths()[1].is_empty());
}

#[test]
fn test_error_display() {
    let err = QueryError::DepthOutOfRange(-4);
    assert_eq!(
        err.to_string(),
        "Depth -4 is out of range: use -1 for unbounded or a non-negative hop count"
    );

    let err = PathError::UnknownBlock {
        block_id: "x".to_string(),
        position: 2,
    };
    assert!(err.to_string().contains("Internal fault"));

    let err = SearchError::BudgetExhausted {
        expanded: 11,
        found: 3,
    };
    assert_eq!(
        err.to_string(),
        "Search aborted after 11 node expansions (budget exhausted, 3 paths found so far)"
    );

    let err = ArtifactError::Version {
        found: 2,
        expected: 1,
    };
    assert_eq!(err.to_string(), "Unsupported artifact version 2 (expected 1)");
}

#[test]
fn test_load_error_keeps_io_source() {
    use std::error::Error;

    let err = RoadmapDefinition::from_file("/no/such/roadmap.json").unwrap_err();
    assert!(err.to_string().starts_with("Could not read roadmap data from '/no/such/roadmap.json'"));
    assert!(err.source().is_some());
}
