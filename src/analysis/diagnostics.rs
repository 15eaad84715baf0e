use crate::core::ComponentId;
use serde::Serialize;
use std::fmt;

/// Non-fatal findings about the component set as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Differently named components hold value-equal class lists. They are
    /// analyzed as distinct components; nothing is merged or renamed.
    AmbiguousComponentIdentity { components: Vec<ComponentId> },
    /// Components that reach each other through dependency edges. Cycles are
    /// reported, never broken.
    DependencyCycle { components: Vec<ComponentId> },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::AmbiguousComponentIdentity { components } => write!(
                f,
                "Components {} contain identical classes; identity is ambiguous",
                join(components)
            ),
            Diagnostic::DependencyCycle { components } => {
                write!(f, "Dependency cycle between {}", join(components))
            }
        }
    }
}

fn join(components: &[ComponentId]) -> String {
    components
        .iter()
        .map(ComponentId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
