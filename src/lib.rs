//! Component-level coupling metrics for Java code bases.
//!
//! Given components (named groups of classes with their imports), stabilitymap
//! computes fan-in, fan-out, instability, abstractness and distance from the
//! main sequence, flags dependencies that run from stable into less stable
//! components, and exports the component graph with every edge classified.
//!
//! ```rust,ignore
//! use stabilitymap::analysis::{analyze, AnalysisOptions, ComponentUniverse};
//! use stabilitymap::core::{ClassFact, ModuleSource};
//!
//! let universe = ComponentUniverse::from_sources(vec![
//!     ModuleSource::new("app", vec![ClassFact::new("app.Main", ["core.Api"], false)]),
//!     ModuleSource::new("core", vec![ClassFact::new("core.Api", Vec::<String>::new(), true)]),
//! ])?;
//! let report = analyze(&universe, &AnalysisOptions::default());
//! assert!(report.violations.is_empty());
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod extraction;
pub mod io;
pub mod metrics;

pub use crate::analysis::{
    analyze, AnalysisOptions, AnalysisReport, ComponentGraph, ComponentUniverse, Diagnostic,
    EdgeClassification, StabilityDirectionViolation,
};
pub use crate::core::{ClassFact, Component, ComponentId, Error, ModuleSource, Result};
pub use crate::metrics::{ComponentInstability, ComponentMetrics, DependencyCalculator};
