//! Lineage graph construction and export.
//!
//! The graph mirrors what a rendered lineage view shows: one node per
//! display name, edges from each dataset into the dashboards that use
//! it. Datasets no dashboard uses never appear; the orphan report
//! covers those.

use crate::index::LineageIndex;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{EdgeRef, IntoNodeReferences};
use serde::Serialize;
use sightline_snapshot::Dashboard;
use std::collections::HashMap;

/// Fill color for dashboard nodes in the rendered view.
pub const DASHBOARD_NODE_COLOR: &str = "#FF9900";
/// Fill color for dataset nodes in the rendered view.
pub const DATASET_NODE_COLOR: &str = "#00BFFF";
/// Edge color in the rendered view.
pub const EDGE_COLOR: &str = "#bdc3c7";

const DASHBOARD_NODE_SIZE: u32 = 25;
const DATASET_NODE_SIZE: u32 = 15;
const NODE_SHAPE: &str = "dot";

/// What a graph node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A dashboard from the snapshot.
    Dashboard,
    /// A dataset referenced by at least one dashboard.
    Dataset,
}

/// One node in the lineage graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineageNode {
    /// Display name shown on the node.
    pub label: String,
    /// Whether the node is a dashboard or a dataset.
    pub kind: NodeKind,
}

/// Directed usage graph over one snapshot.
///
/// Edges point from the dataset to the dashboard referencing it, so
/// arrows read as data flowing into the dashboard. A dashboard listing
/// the same dataset twice gets two parallel edges, matching the
/// reference list rather than deduplicating it.
///
/// # Graph Representation
///
/// Nodes are keyed by display name. The first record to claim a name
/// owns the node; later records with the same name (duplicate dataset
/// names, or a dataset named like a dashboard) reuse it. Every node in
/// `graph` must have a corresponding entry in `node_map`.
#[derive(Debug)]
pub struct LineageGraph {
    graph: DiGraph<LineageNode, ()>,

    /// Mapping from display name to graph NodeIndex.
    node_map: HashMap<String, NodeIndex>,
}

impl LineageGraph {
    /// Builds the graph in two passes: every dashboard gets a node
    /// first, then datasets are added in the order dashboards first
    /// reference them, one edge per reference.
    #[must_use]
    pub fn build(dashboards: &[Dashboard], index: &LineageIndex) -> Self {
        let mut lineage = Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        };

        for dashboard in dashboards {
            lineage.ensure_node(&dashboard.name, NodeKind::Dashboard);
        }
        for dashboard in dashboards {
            let target = lineage.ensure_node(&dashboard.name, NodeKind::Dashboard);
            for arn in &dashboard.used_datasets {
                let source = lineage.ensure_node(index.display_name(arn), NodeKind::Dataset);
                lineage.graph.add_edge(source, target, ());
            }
        }

        tracing::debug!(
            nodes = lineage.graph.node_count(),
            edges = lineage.graph.edge_count(),
            "built lineage graph"
        );
        lineage
    }

    fn ensure_node(&mut self, label: &str, kind: NodeKind) -> NodeIndex {
        if let Some(&node) = self.node_map.get(label) {
            return node;
        }
        let node = self.graph.add_node(LineageNode {
            label: label.to_owned(),
            kind,
        });
        self.node_map.insert(label.to_owned(), node);
        node
    }

    /// Total nodes, dashboards and datasets together.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Total edges, counting parallel references separately.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes of a given kind.
    #[must_use]
    pub fn count_of(&self, kind: NodeKind) -> usize {
        self.graph
            .node_weights()
            .filter(|node| node.kind == kind)
            .count()
    }

    /// The node owning `label`, if any record claimed it.
    #[must_use]
    pub fn node(&self, label: &str) -> Option<&LineageNode> {
        self.node_map
            .get(label)
            .map(|&node| &self.graph[node])
    }

    /// Renderer-ready description of the graph.
    ///
    /// Nodes come out in insertion order (dashboards first, then
    /// datasets by first reference) and edges in reference order, so
    /// the same snapshot always serializes identically.
    #[must_use]
    pub fn description(&self) -> GraphDescription {
        let nodes = self
            .graph
            .node_references()
            .map(|(_, node)| {
                let (size, color) = match node.kind {
                    NodeKind::Dashboard => (DASHBOARD_NODE_SIZE, DASHBOARD_NODE_COLOR),
                    NodeKind::Dataset => (DATASET_NODE_SIZE, DATASET_NODE_COLOR),
                };
                VisNode {
                    id: node.label.clone(),
                    label: node.label.clone(),
                    kind: node.kind,
                    size,
                    shape: NODE_SHAPE,
                    color,
                }
            })
            .collect();

        let edges = self
            .graph
            .edge_references()
            .map(|edge| VisEdge {
                source: self.graph[edge.source()].label.clone(),
                target: self.graph[edge.target()].label.clone(),
                color: EDGE_COLOR,
            })
            .collect();

        GraphDescription {
            nodes,
            edges,
            config: VisConfig::default(),
        }
    }

    /// Graphviz DOT rendering of the graph.
    ///
    /// Dashboards render as filled boxes, datasets as filled ellipses,
    /// in the same colors the interactive view uses.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph lineage {\n    rankdir=LR;\n");
        for (index, node) in self.graph.node_references() {
            let (shape, color) = match node.kind {
                NodeKind::Dashboard => ("box", DASHBOARD_NODE_COLOR),
                NodeKind::Dataset => ("ellipse", DATASET_NODE_COLOR),
            };
            out.push_str(&format!(
                "    n{} [label=\"{}\" shape={shape} style=filled fillcolor=\"{color}\"];\n",
                index.index(),
                escape_label(&node.label),
            ));
        }
        for edge in self.graph.edge_references() {
            out.push_str(&format!(
                "    n{} -> n{} [color=\"{EDGE_COLOR}\"];\n",
                edge.source().index(),
                edge.target().index(),
            ));
        }
        out.push_str("}\n");
        out
    }
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Serialized form of the graph for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphDescription {
    /// Nodes in insertion order.
    pub nodes: Vec<VisNode>,
    /// Edges in reference order.
    pub edges: Vec<VisEdge>,
    /// Viewport settings for the renderer.
    pub config: VisConfig,
}

/// One serialized node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisNode {
    /// Stable node identifier, the display name.
    pub id: String,
    /// Text shown on the node.
    pub label: String,
    /// Node classification.
    pub kind: NodeKind,
    /// Rendered node size.
    pub size: u32,
    /// Rendered node shape.
    pub shape: &'static str,
    /// Fill color.
    pub color: &'static str,
}

/// One serialized edge, dataset to dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisEdge {
    /// Display name of the dataset node.
    pub source: String,
    /// Display name of the dashboard node.
    pub target: String,
    /// Edge color.
    pub color: &'static str,
}

/// Viewport settings for the interactive renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Whether edges render with arrowheads.
    pub directed: bool,
    /// Whether the physics simulation runs.
    pub physics: bool,
    /// Whether nodes lay out hierarchically.
    pub hierarchical: bool,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            directed: true,
            physics: true,
            hierarchical: false,
        }
    }
}
