//! Raw dataset parsing and road graph construction.
//!
//! The dataset is an OpenStreetMap-style JSON export: a top-level object with
//! an `elements` array whose entries are discriminated by `type`. Points
//! (`"point"`, or `"node"` as written by OSM exports) become graph nodes;
//! ways tagged with the road classification key contribute one edge per
//! consecutive pair of point identifiers. Other element kinds are skipped.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphBuilder, Node, NodeId};

/// Tag key marking a way as part of the road network.
pub const DEFAULT_ROAD_TAG: &str = "highway";

/// Top-level shape of the raw dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDataset {
    pub elements: Vec<RawElement>,
}

/// One record of the raw dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawElement {
    #[serde(alias = "node")]
    Point(RawPoint),
    Way(RawWay),
    /// Relations, areas and any other record kind.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPoint {
    pub id: NodeId,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawWay {
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
}

impl RawWay {
    /// Whether the way carries the given classification key.
    pub fn has_tag(&self, key: &str) -> bool {
        self.tags
            .as_ref()
            .map(|tags| tags.contains_key(key))
            .unwrap_or(false)
    }
}

/// Options controlling how ways are turned into edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Tag key a way must carry to be treated as a road.
    pub road_tag: String,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            road_tag: DEFAULT_ROAD_TAG.to_string(),
        }
    }
}

impl LoaderOptions {
    pub fn with_road_tag(mut self, tag: impl Into<String>) -> Self {
        self.road_tag = tag.into();
        self
    }
}

/// Counters collected while building a graph from a raw dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub points: usize,
    pub ways: usize,
    pub road_ways: usize,
    pub skipped_elements: usize,
    pub edges: usize,
}

/// Parse the raw JSON dataset without building a graph.
pub fn parse_dataset(raw: &str) -> Result<RawDataset> {
    Ok(serde_json::from_str(raw)?)
}

/// Build the road graph using the default `highway` road tag.
pub fn load_network(dataset: &RawDataset) -> Graph {
    load_network_with(dataset, &LoaderOptions::default())
}

/// Build the road graph with explicit loader options.
pub fn load_network_with(dataset: &RawDataset, options: &LoaderOptions) -> Graph {
    load_network_with_summary(dataset, options).0
}

/// Build the road graph and report what was consumed from the dataset.
pub fn load_network_with_summary(
    dataset: &RawDataset,
    options: &LoaderOptions,
) -> (Graph, LoadSummary) {
    let mut summary = LoadSummary::default();
    let mut builder = GraphBuilder::new();

    for element in &dataset.elements {
        if let RawElement::Point(point) = element {
            summary.points += 1;
            builder.add_node(Node::transit(point.id, point.lat, point.lon));
        }
    }

    for element in &dataset.elements {
        match element {
            RawElement::Point(_) => {}
            RawElement::Way(way) => {
                summary.ways += 1;
                if !way.has_tag(&options.road_tag) {
                    continue;
                }
                summary.road_ways += 1;
                for pair in way.nodes.windows(2) {
                    if builder.add_edge(pair[0], pair[1]) {
                        summary.edges += 1;
                    }
                }
            }
            RawElement::Other => summary.skipped_elements += 1,
        }
    }

    debug!(
        points = summary.points,
        ways = summary.ways,
        road_ways = summary.road_ways,
        skipped = summary.skipped_elements,
        edges = summary.edges,
        "built road graph"
    );

    (builder.build(), summary)
}

/// Parse a JSON dataset held in memory and build the road graph.
pub fn load_network_from_str(raw: &str) -> Result<Graph> {
    let dataset = parse_dataset(raw)?;
    Ok(load_network(&dataset))
}

/// Parse a JSON dataset from a reader and build the road graph.
pub fn load_network_from_reader<R: Read>(reader: R) -> Result<Graph> {
    let dataset: RawDataset = serde_json::from_reader(reader)?;
    Ok(load_network(&dataset))
}

/// Read a JSON dataset from disk and build the road graph.
pub fn load_network_from_path(path: &Path) -> Result<Graph> {
    let dataset = read_dataset(path)?;
    Ok(load_network(&dataset))
}

/// Read and parse a JSON dataset from disk.
pub fn read_dataset(path: &Path) -> Result<RawDataset> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!("reading dataset from {}", path.display());
    // Raw bytes so invalid UTF-8 surfaces as a parse error, not an IO one.
    let raw = fs::read(path)?;
    Ok(serde_json::from_slice(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_type_is_accepted_as_point() {
        let dataset = parse_dataset(
            r#"{"elements": [
                {"type": "node", "id": 1, "lat": 0.0, "lon": 0.0},
                {"type": "point", "id": 2, "lat": 0.0, "lon": 0.001}
            ]}"#,
        )
        .expect("parses");
        assert!(dataset
            .elements
            .iter()
            .all(|element| matches!(element, RawElement::Point(_))));
    }

    #[test]
    fn missing_tags_count_as_empty() {
        let dataset = parse_dataset(r#"{"elements": [{"type": "way", "nodes": [1, 2]}]}"#)
            .expect("tags are optional");
        let RawElement::Way(way) = &dataset.elements[0] else {
            panic!("expected a way");
        };
        assert!(!way.has_tag(DEFAULT_ROAD_TAG));
    }

    #[test]
    fn unknown_element_kinds_are_skipped() {
        let dataset = parse_dataset(
            r#"{"elements": [
                {"type": "relation", "id": 7, "members": []},
                {"type": "node", "id": 1, "lat": 1.0, "lon": 2.0}
            ]}"#,
        )
        .expect("parses");
        let (graph, summary) = load_network_with_summary(&dataset, &LoaderOptions::default());
        assert_eq!(summary.skipped_elements, 1);
        assert_eq!(summary.points, 1);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn custom_road_tag_selects_other_ways() {
        let dataset = parse_dataset(
            r#"{"elements": [
                {"type": "node", "id": 1, "lat": 0.0, "lon": 0.0},
                {"type": "node", "id": 2, "lat": 0.0, "lon": 0.001},
                {"type": "way", "nodes": [1, 2], "tags": {"railway": "rail"}}
            ]}"#,
        )
        .expect("parses");
        assert_eq!(load_network(&dataset).edge_count(), 0);
        let options = LoaderOptions::default().with_road_tag("railway");
        assert_eq!(load_network_with(&dataset, &options).edge_count(), 1);
    }

    #[test]
    fn missing_dataset_file_is_reported() {
        let error = load_network_from_path(Path::new("/definitely/not/here.json"))
            .expect_err("missing file");
        assert!(matches!(error, Error::DatasetNotFound { .. }));
    }
}
