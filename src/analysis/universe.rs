//! The fixed set of components one analysis run works against.

use super::diagnostics::Diagnostic;
use crate::core::{Component, ComponentId, Error, ModuleSource, Result};
use std::collections::HashMap;
use tracing::warn;

/// Validated, ordered component set.
///
/// Names are unique and every component has at least one class. Order is the
/// input order and is kept by every report derived from the universe.
#[derive(Debug, Clone)]
pub struct ComponentUniverse {
    components: Vec<Component>,
    index: HashMap<ComponentId, usize>,
}

impl ComponentUniverse {
    pub fn new(components: Vec<Component>) -> Result<Self> {
        let mut index = HashMap::with_capacity(components.len());
        for (position, component) in components.iter().enumerate() {
            if index.insert(component.id().clone(), position).is_some() {
                return Err(Error::DuplicateComponentName {
                    component: component.name().to_string(),
                });
            }
        }
        Ok(Self { components, index })
    }

    /// Build a universe with one component per module, named after the module.
    ///
    /// Fails on the first module without classes; callers filter those out
    /// beforehand.
    pub fn from_sources(sources: Vec<ModuleSource>) -> Result<Self> {
        let components = sources
            .into_iter()
            .map(Component::from_source)
            .collect::<Result<Vec<_>>>()?;
        Self::new(components)
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, id: &ComponentId) -> Option<&Component> {
        self.index.get(id).map(|&i| &self.components[i])
    }

    pub fn position(&self, id: &ComponentId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Groups of differently named components holding identical classes.
    pub fn ambiguous_identities(&self) -> Vec<Diagnostic> {
        let mut claimed = vec![false; self.components.len()];
        let mut diagnostics = Vec::new();

        for (i, component) in self.components.iter().enumerate() {
            if claimed[i] {
                continue;
            }
            let mut group = vec![component.id().clone()];
            for (j, other) in self.components.iter().enumerate().skip(i + 1) {
                if !claimed[j] && component.has_same_content(other) {
                    claimed[j] = true;
                    group.push(other.id().clone());
                }
            }
            if group.len() > 1 {
                let diagnostic = Diagnostic::AmbiguousComponentIdentity { components: group };
                warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
            }
        }

        diagnostics
    }
}

impl<'a> IntoIterator for &'a ComponentUniverse {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClassFact;

    fn source(name: &str, classes: &[&str]) -> ModuleSource {
        ModuleSource::new(
            name,
            classes
                .iter()
                .map(|c| ClassFact::new(*c, Vec::<String>::new(), false))
                .collect(),
        )
    }

    #[test]
    fn test_from_sources_keeps_order() {
        let universe =
            ComponentUniverse::from_sources(vec![source("b", &["b.B"]), source("a", &["a.A"])])
                .unwrap();

        let names: Vec<&str> = universe.iter().map(Component::name).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(universe.position(&"a".into()), Some(1));
        assert_eq!(universe.get(&"b".into()).map(Component::name), Some("b"));
        assert!(universe.get(&"zzz".into()).is_none());
    }

    #[test]
    fn test_empty_module_is_rejected() {
        let result = ComponentUniverse::from_sources(vec![source("a", &["a.A"]), source("e", &[])]);

        assert!(matches!(
            result,
            Err(Error::InvalidComponentInput { component }) if component == "e"
        ));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let result =
            ComponentUniverse::from_sources(vec![source("a", &["a.A"]), source("a", &["a.B"])]);

        assert!(matches!(
            result,
            Err(Error::DuplicateComponentName { component }) if component == "a"
        ));
    }

    #[test]
    fn test_ambiguous_identities_are_grouped() {
        let shared = source("shared", &["x.X", "x.Y"]);
        let components = vec![
            Component::new("first", shared.clone()).unwrap(),
            Component::new("other", source("other", &["o.O"])).unwrap(),
            Component::new("second", shared.clone()).unwrap(),
            Component::new("third", shared).unwrap(),
        ];
        let universe = ComponentUniverse::new(components).unwrap();

        let diagnostics = universe.ambiguous_identities();

        assert_eq!(
            diagnostics,
            vec![Diagnostic::AmbiguousComponentIdentity {
                components: vec!["first".into(), "second".into(), "third".into()],
            }]
        );
    }

    #[test]
    fn test_no_ambiguity_for_distinct_content() {
        let universe =
            ComponentUniverse::from_sources(vec![source("a", &["a.A"]), source("b", &["b.B"])])
                .unwrap();

        assert!(universe.ambiguous_identities().is_empty());
    }
}
