mod common;

use std::collections::HashSet;
use std::io::Write;

use roadnet_lib::{
    find_path_astar, find_path_bfs, haversine_distance, load_network_from_path,
    load_network_from_reader, load_network_from_str, load_network_with_summary, parse_dataset,
    Error, LoaderOptions, NodeKind,
};

use common::{edge_pairs, fixture_graph, fixtures_dir};

#[test]
fn fixture_keeps_every_point_as_a_node() {
    let graph = fixture_graph();
    assert_eq!(graph.node_ids().collect::<Vec<_>>(), (1..=9).collect::<Vec<_>>());
    assert!(graph.nodes().all(|node| node.kind == NodeKind::Transit));
}

#[test]
fn fixture_edges_come_from_road_ways_only() {
    let graph = fixture_graph();
    assert_eq!(
        edge_pairs(&graph),
        vec![(1, 2), (1, 5), (2, 3), (3, 4), (4, 7), (5, 7)]
    );
    assert!(graph.neighbours(8).is_empty(), "railway is not a road");
    assert!(graph.neighbours(6).is_empty(), "stream and untagged ways are ignored");
    assert!(graph.neighbours(9).is_empty());
}

#[test]
fn edge_endpoints_exist_and_pairs_are_unique() {
    let graph = fixture_graph();
    let mut seen = HashSet::new();
    for (a, b, _) in graph.edges() {
        assert!(graph.contains_node(a) && graph.contains_node(b));
        assert_ne!(a, b, "no self-loops");
        assert!(seen.insert((a.min(b), a.max(b))), "duplicate edge {a}-{b}");
    }
}

#[test]
fn edge_lengths_match_the_distance_metric() {
    let graph = fixture_graph();
    for (a, b, length) in graph.edges() {
        let expected = haversine_distance(graph.position(a).unwrap(), graph.position(b).unwrap());
        assert_eq!(length, expected);
        assert_eq!(graph.edge_length(b, a), Some(length));
    }
}

#[test]
fn summary_counts_fixture_contents() {
    let raw = std::fs::read_to_string(fixtures_dir().join("small_export.json")).unwrap();
    let dataset = parse_dataset(&raw).unwrap();
    let (_, summary) = load_network_with_summary(&dataset, &LoaderOptions::default());
    assert_eq!(summary.points, 9);
    assert_eq!(summary.ways, 9);
    assert_eq!(summary.road_ways, 6);
    assert_eq!(summary.skipped_elements, 1);
    assert_eq!(summary.edges, 6);
}

#[test]
fn non_road_way_leaves_destination_isolated() {
    let graph = load_network_from_str(
        r#"{"elements": [
            {"type": "point", "id": 1, "lat": 0.0, "lon": 0.000},
            {"type": "point", "id": 2, "lat": 0.0, "lon": 0.001},
            {"type": "point", "id": 3, "lat": 0.0, "lon": 0.002},
            {"type": "point", "id": 4, "lat": 0.0, "lon": 0.003},
            {"type": "way", "nodes": [1, 2, 3], "tags": {"highway": "residential"}},
            {"type": "way", "nodes": [3, 4], "tags": {"footway": "sidewalk"}}
        ]}"#,
    )
    .expect("valid dataset");

    assert_eq!(edge_pairs(&graph), vec![(1, 2), (2, 3)]);
    assert!(matches!(
        find_path_bfs(&graph, 1, 4),
        Err(Error::NoPathFound {
            origin: 1,
            destination: 4
        })
    ));
    assert!(matches!(
        find_path_astar(&graph, 1, 4),
        Err(Error::NoPathFound { .. })
    ));
}

#[test]
fn malformed_datasets_are_rejected() {
    let cases = [
        ("not json", "this is not json"),
        ("missing elements", r#"{"version": 0.6}"#),
        ("top-level array", r#"[{"type": "node", "id": 1, "lat": 0, "lon": 0}]"#),
        ("point without lat", r#"{"elements": [{"type": "node", "id": 1, "lon": 0.0}]}"#),
        ("point without id", r#"{"elements": [{"type": "node", "lat": 0.0, "lon": 0.0}]}"#),
        ("string id", r#"{"elements": [{"type": "node", "id": "1", "lat": 0, "lon": 0}]}"#),
        ("way without nodes", r#"{"elements": [{"type": "way", "tags": {"highway": "x"}}]}"#),
        ("element without type", r#"{"elements": [{"id": 1, "lat": 0.0, "lon": 0.0}]}"#),
    ];

    for (label, raw) in cases {
        let error = load_network_from_str(raw).expect_err(label);
        assert!(
            matches!(error, Error::MalformedInput { .. }),
            "{label}: unexpected error {error:?}"
        );
    }
}

#[test]
fn reader_and_path_loaders_agree() {
    let raw = std::fs::read_to_string(fixtures_dir().join("small_export.json")).unwrap();
    let from_reader = load_network_from_reader(raw.as_bytes()).expect("reader loads");

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(raw.as_bytes()).expect("write dataset");
    let from_path = load_network_from_path(file.path()).expect("path loads");

    assert_eq!(edge_pairs(&from_reader), edge_pairs(&from_path));
    assert_eq!(from_reader.node_count(), from_path.node_count());
}

#[test]
fn invalid_utf8_dataset_file_is_malformed_input() {
    let raw: &[u8] = b"{\"elements\":[{\"type\":\"way\",\"nodes\":[1],\"tags\":{\"highway\":\"\xff\"}}]}";

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(raw).expect("write dataset");

    let from_path = load_network_from_path(file.path()).expect_err("invalid utf-8");
    assert!(
        matches!(from_path, Error::MalformedInput { .. }),
        "unexpected error {from_path:?}"
    );
    let from_reader = load_network_from_reader(raw).expect_err("invalid utf-8");
    assert!(matches!(from_reader, Error::MalformedInput { .. }));
}
