//! Directed component graph.
//!
//! Vertices are components, edges are outgoing component dependencies. Each
//! edge is classified by comparing the instability of its ends: an edge from
//! a lower-instability component into a higher-instability one is a
//! [`EdgeClassification::FlowWarning`].
//!
//! The graph is gathered into local buffers first and then frozen into a
//! petgraph `DiGraph`; it is never mutated after [`ComponentGraph::build`].

use super::diagnostics::Diagnostic;
use crate::core::ComponentId;
use crate::metrics::ComponentInstability;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Edge expansions one warning path search may perform.
pub const MAX_PATH_EXPANSIONS: usize = 100_000;

/// Direction quality of one dependency edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeClassification {
    /// Dependency flows towards stability (or between equally stable ends).
    Compliant,
    /// Dependency flows from a more stable into a less stable component.
    FlowWarning,
}

impl EdgeClassification {
    pub fn classify(source_instability: f64, target_instability: f64) -> Self {
        if source_instability < target_instability {
            EdgeClassification::FlowWarning
        } else {
            EdgeClassification::Compliant
        }
    }

    pub fn is_warning(self) -> bool {
        self == EdgeClassification::FlowWarning
    }

    pub fn label(self) -> &'static str {
        match self {
            EdgeClassification::Compliant => "✓",
            EdgeClassification::FlowWarning => "⚠ dep flow",
        }
    }
}

#[derive(Debug, Clone)]
struct Vertex {
    component: ComponentId,
    instability: Option<f64>,
}

/// One classified edge of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub source: ComponentId,
    pub target: ComponentId,
    pub classification: EdgeClassification,
}

/// A simple path through the graph that crosses at least one warning edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyPath {
    pub components: Vec<ComponentId>,
    pub warning_edges: usize,
}

#[derive(Debug, Clone)]
pub struct ComponentGraph {
    graph: DiGraph<Vertex, EdgeClassification>,
    index: HashMap<ComponentId, NodeIndex>,
}

impl ComponentGraph {
    /// Build the graph from the fan-out peers of every instability record.
    ///
    /// Vertices appear in first-seen order. Parallel edges and self-loops are
    /// dropped. An edge touching a component without an instability record is
    /// classified as compliant.
    pub fn build(instabilities: &[ComponentInstability]) -> Self {
        let values: HashMap<&ComponentId, f64> = instabilities
            .iter()
            .map(|inst| (inst.component(), inst.value()))
            .collect();

        let mut vertices: Vec<ComponentId> = Vec::new();
        let mut seen_vertices: HashSet<&ComponentId> = HashSet::new();
        let mut edges: Vec<(&ComponentId, &ComponentId)> = Vec::new();
        let mut seen_edges: HashSet<(&ComponentId, &ComponentId)> = HashSet::new();

        for inst in instabilities {
            let source = inst.component();
            if seen_vertices.insert(source) {
                vertices.push(source.clone());
            }
            for target in inst.out_components() {
                if target == source {
                    continue;
                }
                if seen_vertices.insert(target) {
                    vertices.push(target.clone());
                }
                if seen_edges.insert((source, target)) {
                    edges.push((source, target));
                }
            }
        }

        let mut graph = DiGraph::with_capacity(vertices.len(), edges.len());
        let mut index = HashMap::with_capacity(vertices.len());
        for component in vertices {
            let instability = values.get(&component).copied();
            let node = graph.add_node(Vertex {
                component: component.clone(),
                instability,
            });
            index.insert(component, node);
        }
        for (source, target) in edges {
            let (s, t) = (index[source], index[target]);
            let classification = match (graph[s].instability, graph[t].instability) {
                (Some(a), Some(b)) => EdgeClassification::classify(a, b),
                _ => EdgeClassification::Compliant,
            };
            graph.add_edge(s, t, classification);
        }

        Self { graph, index }
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Components in vertex order.
    pub fn vertices(&self) -> impl Iterator<Item = &ComponentId> {
        self.graph.node_weights().map(|v| &v.component)
    }

    pub fn contains_vertex(&self, component: &ComponentId) -> bool {
        self.index.contains_key(component)
    }

    pub fn instability(&self, component: &ComponentId) -> Option<f64> {
        self.index
            .get(component)
            .and_then(|&node| self.graph[node].instability)
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> Vec<GraphEdge> {
        self.graph
            .edge_references()
            .map(|edge| self.to_graph_edge(edge.source(), edge.target(), *edge.weight()))
            .collect()
    }

    pub fn warning_edges(&self) -> Vec<GraphEdge> {
        self.edges()
            .into_iter()
            .filter(|edge| edge.classification.is_warning())
            .collect()
    }

    pub fn contains_edge(&self, source: &ComponentId, target: &ComponentId) -> bool {
        self.classification(source, target).is_some()
    }

    pub fn classification(
        &self,
        source: &ComponentId,
        target: &ComponentId,
    ) -> Option<EdgeClassification> {
        let (s, t) = (*self.index.get(source)?, *self.index.get(target)?);
        self.graph.find_edge(s, t).map(|edge| self.graph[edge])
    }

    /// Direct dependencies of `component`, in vertex order.
    pub fn successors(&self, component: &ComponentId) -> Vec<&ComponentId> {
        let Some(&node) = self.index.get(component) else {
            return Vec::new();
        };
        self.sorted_successors(node)
            .into_iter()
            .map(|n| &self.graph[n].component)
            .collect()
    }

    /// Strongly connected groups of more than one component.
    pub fn cycles(&self) -> Vec<Diagnostic> {
        let mut groups: Vec<Vec<NodeIndex>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|mut scc| {
                scc.sort();
                scc
            })
            .collect();
        groups.sort();

        groups
            .into_iter()
            .map(|scc| Diagnostic::DependencyCycle {
                components: scc
                    .into_iter()
                    .map(|n| self.graph[n].component.clone())
                    .collect(),
            })
            .collect()
    }

    /// Simple paths from every vertex with successors to every sink that cross
    /// at least one warning edge, up to `limit` paths.
    ///
    /// Branches that can no longer reach a warning edge are skipped, and the
    /// search stops after [`MAX_PATH_EXPANSIONS`] edge expansions.
    pub fn warning_paths(&self, limit: usize) -> Vec<DependencyPath> {
        self.warning_paths_within(limit, MAX_PATH_EXPANSIONS)
    }

    fn warning_paths_within(&self, limit: usize, max_expansions: usize) -> Vec<DependencyPath> {
        let mut search = PathSearch {
            graph: self,
            reaches_warning: self.reaches_warning(),
            on_path: vec![false; self.graph.node_count()],
            path: Vec::new(),
            limit,
            budget: max_expansions,
            out: Vec::new(),
        };

        for start in self.graph.node_indices() {
            if search.is_done() {
                break;
            }
            if self.is_sink(start) || !search.reaches_warning[start.index()] {
                continue;
            }
            search.path.push(start);
            search.on_path[start.index()] = true;
            search.visit(start, 0);
            search.on_path[start.index()] = false;
            search.path.pop();
        }

        if search.budget == 0 {
            warn!(
                "Warning path search stopped after {} expansions with {} paths",
                max_expansions,
                search.out.len()
            );
        }
        search.out
    }

    /// Per vertex: whether any warning edge starts at it or downstream of it.
    fn reaches_warning(&self) -> Vec<bool> {
        let mut reaches = vec![false; self.graph.node_count()];
        let mut pending: Vec<NodeIndex> = self
            .graph
            .edge_references()
            .filter(|edge| edge.weight().is_warning())
            .map(|edge| edge.source())
            .collect();

        while let Some(node) = pending.pop() {
            if reaches[node.index()] {
                continue;
            }
            reaches[node.index()] = true;
            pending.extend(
                self.graph
                    .neighbors_directed(node, Direction::Incoming)
                    .filter(|n| !reaches[n.index()]),
            );
        }
        reaches
    }

    fn is_sink(&self, node: NodeIndex) -> bool {
        self.graph
            .neighbors_directed(node, Direction::Outgoing)
            .next()
            .is_none()
    }

    fn sorted_successors(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut successors: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(node, Direction::Outgoing)
            .collect();
        successors.sort();
        successors
    }

    fn to_graph_edge(
        &self,
        source: NodeIndex,
        target: NodeIndex,
        classification: EdgeClassification,
    ) -> GraphEdge {
        GraphEdge {
            source: self.graph[source].component.clone(),
            target: self.graph[target].component.clone(),
            classification,
        }
    }

    /// Renderer-neutral description of the graph.
    ///
    /// Vertex ids are 1-based in vertex order; labels are the component name
    /// and its instability with at most `precision` decimal places.
    pub fn describe(&self, title: &str, precision: usize) -> GraphDescription {
        let vertex_id = |node: NodeIndex| node.index() + 1;

        let vertices = self
            .graph
            .node_indices()
            .map(|node| {
                let vertex = &self.graph[node];
                let label = match vertex.instability {
                    Some(value) => format!(
                        "{}\nI = {}",
                        vertex.component,
                        format_decimal(value, precision)
                    ),
                    None => vertex.component.to_string(),
                };
                VertexDescription {
                    id: vertex_id(node),
                    name: vertex.component.to_string(),
                    label,
                    instability: vertex.instability,
                }
            })
            .collect();

        let edges = self
            .graph
            .edge_references()
            .map(|edge| EdgeDescription {
                source_id: vertex_id(edge.source()),
                target_id: vertex_id(edge.target()),
                classification: *edge.weight(),
                label: edge.weight().label().to_string(),
            })
            .collect();

        GraphDescription {
            title: title.to_string(),
            vertices,
            edges,
        }
    }
}

/// Depth-first state of one [`ComponentGraph::warning_paths`] run.
struct PathSearch<'g> {
    graph: &'g ComponentGraph,
    reaches_warning: Vec<bool>,
    on_path: Vec<bool>,
    path: Vec<NodeIndex>,
    limit: usize,
    budget: usize,
    out: Vec<DependencyPath>,
}

impl PathSearch<'_> {
    fn is_done(&self) -> bool {
        self.out.len() >= self.limit || self.budget == 0
    }

    fn visit(&mut self, node: NodeIndex, warnings: usize) {
        if self.out.len() >= self.limit {
            return;
        }
        let owner: &ComponentGraph = self.graph;
        let graph = &owner.graph;
        if owner.is_sink(node) {
            if warnings > 0 {
                self.out.push(DependencyPath {
                    components: self
                        .path
                        .iter()
                        .map(|&n| graph[n].component.clone())
                        .collect(),
                    warning_edges: warnings,
                });
            }
            return;
        }

        for next in owner.sorted_successors(node) {
            if self.is_done() {
                return;
            }
            if self.on_path[next.index()] {
                continue;
            }
            let is_warning = graph
                .find_edge(node, next)
                .is_some_and(|edge| graph[edge].is_warning());
            if warnings == 0 && !is_warning && !self.reaches_warning[next.index()] {
                continue;
            }

            self.budget -= 1;
            self.path.push(next);
            self.on_path[next.index()] = true;
            self.visit(next, warnings + usize::from(is_warning));
            self.on_path[next.index()] = false;
            self.path.pop();
        }
    }
}

/// Vertex- and edge-labelled description ready for any graph serializer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphDescription {
    pub title: String,
    pub vertices: Vec<VertexDescription>,
    pub edges: Vec<EdgeDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexDescription {
    pub id: usize,
    pub name: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instability: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeDescription {
    pub source_id: usize,
    pub target_id: usize,
    pub classification: EdgeClassification,
    pub label: String,
}

/// Format with at most `precision` decimals, dropping trailing zeros.
pub fn format_decimal(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}
