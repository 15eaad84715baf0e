use super::instability::{main_sequence_distance, ComponentInstability};
use crate::core::Component;
use serde::{Deserialize, Serialize};

/// Flat per-component record of the main sequence metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMetrics {
    pub name: String,
    pub num_classes: usize,
    pub num_abstract_classes: usize,
    pub fan_in: usize,
    pub fan_out: usize,
    /// Instability (0.0 = stable, 1.0 = unstable)
    pub instability: f64,
    /// Abstract classes and interfaces / all classes
    pub abstractness: f64,
    /// Distance from the main sequence: |A + I - 1|
    pub distance: f64,
}

impl ComponentMetrics {
    pub fn new(component: &Component, instability: &ComponentInstability) -> Self {
        let abstractness = component.abstractness();
        Self {
            name: component.name().to_string(),
            num_classes: component.num_classes(),
            num_abstract_classes: component.num_abstract_classes(),
            fan_in: instability.fan_in_count(),
            fan_out: instability.fan_out_count(),
            instability: instability.value(),
            abstractness,
            distance: main_sequence_distance(abstractness, instability.value()),
        }
    }

    /// The (I, A) coordinates of the component on the main sequence chart.
    pub fn main_sequence_position(&self) -> (f64, f64) {
        (self.instability, self.abstractness)
    }
}
