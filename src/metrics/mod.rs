//! Component coupling metrics (Robert C. Martin).
//!
//! - Fan-in / fan-out: import edges entering / leaving a component
//! - Instability: `fan_out / (fan_in + fan_out)`
//! - Abstractness: abstract types / all types
//! - Distance from the main sequence: `|A + I - 1|`

pub mod dependencies;
pub mod instability;
pub mod summary;

pub use dependencies::{ComponentDependencies, DependencyCalculator};
pub use instability::{
    calculate_instability, main_sequence_distance, stability_order, ComponentInstability,
    ISOLATED_INSTABILITY,
};
pub use summary::ComponentMetrics;
