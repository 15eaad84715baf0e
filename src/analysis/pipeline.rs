//! One full analysis run over a component universe.

use super::diagnostics::Diagnostic;
use super::graph::{ComponentGraph, DependencyPath};
use super::universe::ComponentUniverse;
use super::violations::{StabilityDirectionViolation, ViolationDetector};
use crate::core::ComponentId;
use crate::metrics::{ComponentInstability, ComponentMetrics, DependencyCalculator};
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Upper bound on warning paths kept in a report.
pub const DEFAULT_PATH_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Components whose violations carry class-level detail.
    pub detail_components: Vec<ComponentId>,
    pub parallel: bool,
    pub path_limit: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            detail_components: Vec::new(),
            parallel: true,
            path_limit: DEFAULT_PATH_LIMIT,
        }
    }
}

/// Everything derived from one universe. All per-component vectors follow
/// universe order.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub metrics: Vec<ComponentMetrics>,
    pub instabilities: Vec<ComponentInstability>,
    pub violations: Vec<StabilityDirectionViolation>,
    pub diagnostics: Vec<Diagnostic>,
    pub graph: ComponentGraph,
    pub warning_paths: Vec<DependencyPath>,
}

impl AnalysisReport {
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    pub fn metrics_for(&self, component: &str) -> Option<&ComponentMetrics> {
        self.metrics.iter().find(|m| m.name == component)
    }

    pub fn instability_for(&self, component: &str) -> Option<&ComponentInstability> {
        self.instabilities
            .iter()
            .find(|i| i.component().as_str() == component)
    }
}

/// Fan-in, fan-out and instability of every component, in universe order.
pub fn compute_instabilities(
    universe: &ComponentUniverse,
    parallel: bool,
) -> Vec<ComponentInstability> {
    let calc = DependencyCalculator::new(universe.components());
    if parallel {
        universe
            .components()
            .par_iter()
            .map(|c| calc.instability_of(c))
            .collect()
    } else {
        universe.iter().map(|c| calc.instability_of(c)).collect()
    }
}

/// Names in `requested` that match no component of `universe`, in request order.
pub fn unknown_components<'a>(
    universe: &ComponentUniverse,
    requested: &'a [ComponentId],
) -> Vec<&'a ComponentId> {
    requested
        .iter()
        .filter(|id| universe.get(id).is_none())
        .collect()
}

pub fn analyze(universe: &ComponentUniverse, options: &AnalysisOptions) -> AnalysisReport {
    info!("Analyzing {} components", universe.len());
    for id in unknown_components(universe, &options.detail_components) {
        warn!("Detail requested for unknown component {}", id);
    }

    let instabilities = compute_instabilities(universe, options.parallel);

    let metrics: Vec<ComponentMetrics> = universe
        .iter()
        .zip(&instabilities)
        .map(|(component, instability)| ComponentMetrics::new(component, instability))
        .collect();
    for m in &metrics {
        info!(
            "Component {} (fanIn={}, fanOut={}) instability = {}, abstractness = {}, distance = {}",
            m.name, m.fan_in, m.fan_out, m.instability, m.abstractness, m.distance
        );
    }

    let violations = ViolationDetector::new(universe)
        .with_detail_components(options.detail_components.iter().cloned())
        .with_parallel(options.parallel)
        .detect(&instabilities);

    let graph = ComponentGraph::build(&instabilities);
    debug!(
        "Component graph has {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let warning_paths = graph.warning_paths(options.path_limit);
    debug!("Found {} warning paths", warning_paths.len());

    let mut diagnostics = universe.ambiguous_identities();
    diagnostics.extend(graph.cycles());

    info!(
        "Analysis complete: {} violations, {} diagnostics",
        violations.len(),
        diagnostics.len()
    );

    AnalysisReport {
        metrics,
        instabilities,
        violations,
        diagnostics,
        graph,
        warning_paths,
    }
}
