//! Martin's instability metric and the stability ordering built on it.

use super::dependencies::ComponentDependencies;
use crate::core::ComponentId;
use serde::Serialize;
use std::cmp::Ordering;

/// Instability of a component with no edges in either direction.
pub const ISOLATED_INSTABILITY: f64 = 0.5;

/// `fan_out / (fan_in + fan_out)`, or [`ISOLATED_INSTABILITY`] when both are 0.
pub fn calculate_instability(fan_in: usize, fan_out: usize) -> f64 {
    let total = fan_in + fan_out;
    if total == 0 {
        return ISOLATED_INSTABILITY;
    }
    fan_out as f64 / total as f64
}

/// Distance from the main sequence: `|A + I - 1|`.
pub fn main_sequence_distance(abstractness: f64, instability: f64) -> f64 {
    (abstractness + instability - 1.0).abs()
}

/// Orders by stability: the lower the instability, the greater.
///
/// `Ordering::Greater` means `a` is strictly more stable than `b`. This is the
/// reverse of numeric order and is kept as a named function so it is never
/// mistaken for a plain comparison of values.
pub fn stability_order(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Fan-in, fan-out and instability of one component.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentInstability {
    component: ComponentId,
    fan_in: ComponentDependencies,
    fan_out: ComponentDependencies,
    instability: f64,
}

impl ComponentInstability {
    pub fn new(
        component: ComponentId,
        fan_in: ComponentDependencies,
        fan_out: ComponentDependencies,
    ) -> Self {
        let instability = calculate_instability(fan_in.count(), fan_out.count());
        Self {
            component,
            fan_in,
            fan_out,
            instability,
        }
    }

    pub fn component(&self) -> &ComponentId {
        &self.component
    }

    pub fn fan_in(&self) -> &ComponentDependencies {
        &self.fan_in
    }

    pub fn fan_out(&self) -> &ComponentDependencies {
        &self.fan_out
    }

    pub fn fan_in_count(&self) -> usize {
        self.fan_in.count()
    }

    pub fn fan_out_count(&self) -> usize {
        self.fan_out.count()
    }

    /// Components depending on this one.
    pub fn in_components(&self) -> &[ComponentId] {
        self.fan_in.peer_components()
    }

    /// Components this one depends on.
    pub fn out_components(&self) -> &[ComponentId] {
        self.fan_out.peer_components()
    }

    pub fn value(&self) -> f64 {
        self.instability
    }

    pub fn is_isolated(&self) -> bool {
        self.fan_in_count() + self.fan_out_count() == 0
    }

    /// Compare by stability; see [`stability_order`].
    pub fn stability_cmp(&self, other: &ComponentInstability) -> Ordering {
        stability_order(self.instability, other.instability)
    }

    /// Strictly lower instability than `other`.
    pub fn is_more_stable_than(&self, other: &ComponentInstability) -> bool {
        self.stability_cmp(other) == Ordering::Greater
    }

    /// Equal instability values, regardless of which components they belong to.
    pub fn has_same_instability(&self, other: &ComponentInstability) -> bool {
        self.stability_cmp(other) == Ordering::Equal
    }
}
