use shortpath::{Cost, Distance, GraphError, Session};

fn session_with(edges: &[(&str, &str, &str)]) -> Session {
    let mut session = Session::new();
    for (a, b, w) in edges {
        session.add_edge(a, b, w).unwrap();
    }
    session
}

#[test]
fn test_cheaper_detour_through_c() {
    let session = session_with(&[("A", "B", "4"), ("A", "C", "1"), ("C", "B", "1")]);
    let result = session.query("A").unwrap();

    assert_eq!(result.distance("A"), Some(Distance::Finite(0)));
    assert_eq!(result.distance("B"), Some(Distance::Finite(2)));
    assert_eq!(result.distance("C"), Some(Distance::Finite(1)));
    assert_eq!(result.path("B").unwrap(), ["A", "C", "B"]);
    assert_eq!(result.distances().len(), 3);
}

#[test]
fn test_lone_node() {
    let mut session = Session::new();
    session.add_node("A");
    let result = session.query("A").unwrap();

    assert_eq!(result.distances().len(), 1);
    assert_eq!(result.distance("A"), Some(Distance::Finite(0)));
    assert_eq!(result.path("A").unwrap(), ["A"]);
}

#[test]
fn test_disconnected_components() {
    let session = session_with(&[("A", "B", "1"), ("C", "D", "1")]);
    let result = session.query("A").unwrap();

    assert_eq!(result.distance("A"), Some(Distance::Finite(0)));
    assert_eq!(result.distance("B"), Some(Distance::Finite(1)));
    assert_eq!(result.distance("C"), Some(Distance::Infinite));
    assert_eq!(result.distance("D"), Some(Distance::Infinite));
    assert!(result.path("C").unwrap().is_empty());
    assert!(result.path("D").unwrap().is_empty());
}

#[test]
fn test_unknown_start_node() {
    let session = session_with(&[("A", "B", "1")]);
    assert_eq!(session.query("Q").unwrap_err(), GraphError::UnknownStartNode("Q".to_string()));

    let empty = Session::new();
    assert_eq!(empty.query("A").unwrap_err(), GraphError::UnknownStartNode("A".to_string()));
}

#[test]
fn test_query_from_the_other_side() {
    let session = session_with(&[("A", "B", "4"), ("A", "C", "1"), ("C", "B", "1")]);
    let result = session.query("B").unwrap();

    assert_eq!(result.distance("A"), Some(Distance::Finite(2)));
    assert_eq!(result.path("A").unwrap(), ["B", "C", "A"]);
}

#[test]
fn test_longer_chain_beats_heavy_direct_edge() {
    let session = session_with(&[
        ("A", "B", "4"),
        ("A", "C", "2"),
        ("B", "C", "1"),
        ("B", "D", "5"),
        ("C", "D", "8"),
        ("C", "E", "10"),
        ("D", "E", "2"),
        ("D", "F", "6"),
        ("E", "F", "3"),
    ]);
    let result = session.query("A").unwrap();

    assert_eq!(result.distance("B"), Some(Distance::Finite(3)));
    assert_eq!(result.distance("D"), Some(Distance::Finite(8)));
    assert_eq!(result.distance("E"), Some(Distance::Finite(10)));
    assert_eq!(result.distance("F"), Some(Distance::Finite(13)));
    assert_eq!(result.path("F").unwrap(), ["A", "C", "B", "D", "E", "F"]);
}

#[test]
fn test_duplicate_edge_adds_parallel_edge() {
    let mut session = session_with(&[("A", "B", "10")]);
    session.add_edge("A", "B", "3").unwrap();

    let result = session.query("A").unwrap();
    assert_eq!(result.distance("B"), Some(Distance::Finite(3)));
    assert_eq!(session.graph().neighbors("A").unwrap().len(), 2);

    // re-adding the heavier weight does not replace the lighter edge
    session.add_edge("A", "B", "10").unwrap();
    assert_eq!(session.query("A").unwrap().distance("B"), Some(Distance::Finite(3)));
}

#[test]
fn test_equal_cost_paths_prefer_lower_label() {
    let session = session_with(&[("A", "C", "1"), ("A", "B", "1"), ("C", "D", "1"), ("B", "D", "1")]);
    let result = session.query("A").unwrap();

    assert_eq!(result.distance("D"), Some(Distance::Finite(2)));
    assert_eq!(result.path("D").unwrap(), ["A", "B", "D"]);
}

#[test]
fn test_distance_past_largest_weight() {
    let max = u64::MAX.to_string();
    let session = session_with(&[("A", "B", max.as_str()), ("B", "C", "5"), ("A", "Z", "-0")]);
    let result = session.query("A").unwrap();

    assert_eq!(result.distance("C"), Some(Distance::Finite(Cost::from(u64::MAX) + 5)));
    assert_eq!(result.distance("Z"), Some(Distance::Finite(0)));
}
