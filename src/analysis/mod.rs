//! Analyses over a whole component universe: stability-direction violations,
//! the component graph and set-level diagnostics.

pub mod diagnostics;
pub mod graph;
pub mod pipeline;
pub mod universe;
pub mod violations;

pub use diagnostics::Diagnostic;
pub use graph::{
    format_decimal, ComponentGraph, DependencyPath, EdgeClassification, EdgeDescription,
    GraphDescription, GraphEdge, VertexDescription, MAX_PATH_EXPANSIONS,
};
pub use pipeline::{
    analyze, compute_instabilities, AnalysisOptions, AnalysisReport,
    unknown_components, DEFAULT_PATH_LIMIT,
};
pub use universe::ComponentUniverse;
pub use violations::{StabilityDirectionViolation, ViolationDetail, ViolationDetector};
