//! Stability-direction checks.
//!
//! Dependencies should flow towards stability: an unstable component may
//! depend on a stable one, not the other way round. Every edge running from a
//! strictly more stable (lower instability) component into a less stable one
//! is reported as a [`StabilityDirectionViolation`].

use super::universe::ComponentUniverse;
use crate::core::{Component, ComponentId, DependentClasses};
use crate::metrics::ComponentInstability;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// A dependency from a more stable component onto a less stable one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StabilityDirectionViolation {
    pub source: ComponentId,
    pub outside: ComponentId,
    pub source_instability: f64,
    pub outside_instability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ViolationDetail>,
}

/// Class-level explanation of a violation, collected for detail components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolationDetail {
    /// For each class of the outside component, the source classes importing it.
    pub dependents: Vec<DependentClasses>,
    /// The source component's outgoing fan-out edges (one entry per edge).
    pub fan_out_classes: Vec<String>,
}

/// Scans every ordered pair of components for stability-direction violations.
#[derive(Debug, Clone)]
pub struct ViolationDetector<'a> {
    universe: &'a ComponentUniverse,
    detail_components: HashSet<ComponentId>,
    parallel: bool,
}

impl<'a> ViolationDetector<'a> {
    pub fn new(universe: &'a ComponentUniverse) -> Self {
        Self {
            universe,
            detail_components: HashSet::new(),
            parallel: true,
        }
    }

    /// Components whose violations carry class-level detail.
    pub fn with_detail_components<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ComponentId>,
    {
        self.detail_components = components.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// All violations, ordered by source then outside component in the order
    /// of `instabilities`.
    pub fn detect(&self, instabilities: &[ComponentInstability]) -> Vec<StabilityDirectionViolation> {
        let per_source: Vec<Vec<StabilityDirectionViolation>> = if self.parallel {
            instabilities
                .par_iter()
                .map(|source| self.check_source(source, instabilities))
                .collect()
        } else {
            instabilities
                .iter()
                .map(|source| self.check_source(source, instabilities))
                .collect()
        };
        per_source.into_iter().flatten().collect()
    }

    fn check_source(
        &self,
        source: &ComponentInstability,
        instabilities: &[ComponentInstability],
    ) -> Vec<StabilityDirectionViolation> {
        let Some(source_comp) = self.universe.get(source.component()) else {
            warn!(
                "Skipping stability check for unknown component {}",
                source.component()
            );
            return Vec::new();
        };

        instabilities
            .iter()
            .filter_map(|outside| {
                let outside_comp = self.universe.get(outside.component())?;
                self.check_pair(source_comp, source, outside_comp, outside)
            })
            .collect()
    }

    /// Check one dependency direction, `source` onto `outside`.
    pub fn check_pair(
        &self,
        source_comp: &Component,
        source: &ComponentInstability,
        outside_comp: &Component,
        outside: &ComponentInstability,
    ) -> Option<StabilityDirectionViolation> {
        if !source_comp.depends_upon(outside_comp) {
            debug!(
                "Bypassing stability check as {} does not depend upon {}",
                source_comp.name(),
                outside_comp.name()
            );
            return None;
        }

        debug!(
            "Checking stability as {} depends upon {}",
            source_comp.name(),
            outside_comp.name()
        );
        let wants_detail = self.detail_components.contains(source_comp.id());
        if wants_detail {
            log_dependents(source_comp, outside_comp);
        }

        if !source.is_more_stable_than(outside) {
            debug!(
                "Stability ok {} ({}) -> {} ({})",
                source_comp.name(),
                source.value(),
                outside_comp.name(),
                outside.value()
            );
            return None;
        }

        warn!(
            "More stable {}({}) depends upon less stable component {}({})",
            source_comp.name(),
            source.value(),
            outside_comp.name(),
            outside.value()
        );

        let detail = wants_detail.then(|| {
            let fan_out_classes: Vec<String> = source
                .fan_out()
                .class_edges()
                .iter()
                .map(|c| c.qualified_name().to_string())
                .collect();
            for class in &fan_out_classes {
                info!("{} fan-out: {}", source_comp.name(), class);
            }
            ViolationDetail {
                dependents: source_comp.dependents(outside_comp),
                fan_out_classes,
            }
        });

        Some(StabilityDirectionViolation {
            source: source_comp.id().clone(),
            outside: outside_comp.id().clone(),
            source_instability: source.value(),
            outside_instability: outside.value(),
            detail,
        })
    }
}

fn log_dependents(source: &Component, outside: &Component) {
    info!("Details for {} -> {}", source.name(), outside.name());
    for entry in source.dependents(outside) {
        for importer in &entry.importing_classes {
            info!("{} imports {}", importer, entry.imported_class);
        }
    }
}
