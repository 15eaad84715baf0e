//! Architectural components.
//!
//! A component is one build module: a name plus the [`ModuleSource`] holding
//! its class facts. Identity is the component name ([`ComponentId`]); two
//! components wrapping identical class lists under different names are still
//! distinct components (see `ComponentUniverse::ambiguous_identities`).

use super::errors::{Error, Result};
use super::{ClassFact, ModuleSource};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a component within one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ComponentId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// For one class of another component, the classes of this component that
/// import it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentClasses {
    pub imported_class: String,
    pub importing_classes: Vec<String>,
}

/// A named component wrapping its module source.
#[derive(Debug, Clone, Serialize)]
pub struct Component {
    id: ComponentId,
    source: ModuleSource,
    num_abstract: usize,
}

impl Component {
    /// Create a component.
    ///
    /// A component with no classes has undefined abstractness and is rejected
    /// with [`Error::InvalidComponentInput`].
    pub fn new(name: impl Into<String>, source: ModuleSource) -> Result<Self> {
        let id = ComponentId::new(name);
        if source.is_empty() {
            return Err(Error::InvalidComponentInput {
                component: id.to_string(),
            });
        }
        let num_abstract = source.num_abstract_classes();
        Ok(Self {
            id,
            source,
            num_abstract,
        })
    }

    /// Create a component named after its module source.
    pub fn from_source(source: ModuleSource) -> Result<Self> {
        let name = source.name().to_string();
        Self::new(name, source)
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.id.as_str()
    }

    pub fn source(&self) -> &ModuleSource {
        &self.source
    }

    pub fn classes(&self) -> &[ClassFact] {
        self.source.classes()
    }

    pub fn num_classes(&self) -> usize {
        self.source.num_classes()
    }

    pub fn num_abstract_classes(&self) -> usize {
        self.num_abstract
    }

    /// Ratio of abstract classes and interfaces to all classes, in `[0, 1]`.
    pub fn abstractness(&self) -> f64 {
        self.num_abstract as f64 / self.num_classes() as f64
    }

    /// True iff some class of `self` imports some class of `other`.
    ///
    /// A component never depends upon itself.
    pub fn depends_upon(&self, other: &Component) -> bool {
        if self.id == other.id {
            return false;
        }
        other
            .source
            .iter()
            .any(|outside| self.source.any_imports(outside.qualified_name()))
    }

    /// For every class of `other`, the classes of `self` that import it.
    ///
    /// Empty when `self` does not depend upon `other`. Entries follow the class
    /// order of `other`; classes nobody imports are listed with no importers.
    pub fn dependents(&self, other: &Component) -> Vec<DependentClasses> {
        if !self.depends_upon(other) {
            return Vec::new();
        }
        other
            .source
            .iter()
            .map(|imported| DependentClasses {
                imported_class: imported.qualified_name().to_string(),
                importing_classes: self
                    .source
                    .classes_that_import(imported.qualified_name())
                    .into_iter()
                    .map(|c| c.qualified_name().to_string())
                    .collect(),
            })
            .collect()
    }

    /// Whether both components hold value-equal class lists.
    pub fn has_same_content(&self, other: &Component) -> bool {
        self.source.classes() == other.source.classes()
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Component {}

impl std::hash::Hash for Component {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(name: &str, classes: Vec<ClassFact>) -> Component {
        Component::new(name, ModuleSource::new(name, classes)).unwrap()
    }

    fn class(name: &str, imports: &[&str]) -> ClassFact {
        ClassFact::new(name, imports.iter().copied(), false)
    }

    #[test]
    fn test_empty_component_is_rejected() {
        let result = Component::new("empty", ModuleSource::new("empty", vec![]));

        match result {
            Err(Error::InvalidComponentInput { component }) => assert_eq!(component, "empty"),
            other => panic!("expected InvalidComponentInput, got {other:?}"),
        }
    }

    #[test]
    fn test_abstractness() {
        let comp = component(
            "a",
            vec![
                ClassFact::new("a.I", Vec::<String>::new(), true),
                class("a.Impl", &["a.I"]),
                class("a.Other", &[]),
                ClassFact::new("a.Base", Vec::<String>::new(), true),
            ],
        );

        assert_eq!(comp.num_classes(), 4);
        assert_eq!(comp.num_abstract_classes(), 2);
        assert!((comp.abstractness() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_depends_upon_is_irreflexive() {
        let comp = component("a", vec![class("a.A", &["a.A"])]);

        assert!(!comp.depends_upon(&comp));
    }

    #[test]
    fn test_depends_upon_direction() {
        let core = component("core", vec![class("core.Repo", &[])]);
        let app = component("app", vec![class("app.Service", &["core.Repo"])]);

        assert!(app.depends_upon(&core));
        assert!(!core.depends_upon(&app));
    }

    #[test]
    fn test_dependents_lists_every_outside_class() {
        let core = component(
            "core",
            vec![class("core.Repo", &[]), class("core.Unused", &[])],
        );
        let app = component(
            "app",
            vec![
                class("app.Service", &["core.Repo"]),
                class("app.Job", &["core.Repo"]),
            ],
        );

        let dependents = app.dependents(&core);

        assert_eq!(
            dependents,
            vec![
                DependentClasses {
                    imported_class: "core.Repo".into(),
                    importing_classes: vec!["app.Service".into(), "app.Job".into()],
                },
                DependentClasses {
                    imported_class: "core.Unused".into(),
                    importing_classes: vec![],
                },
            ]
        );
        assert!(core.dependents(&app).is_empty());
    }

    #[test]
    fn test_identity_is_the_name() {
        let classes = vec![class("x.X", &[])];
        let left = component("left", classes.clone());
        let right = component("right", classes);

        assert_ne!(left, right);
        assert!(left.has_same_content(&right));
    }
}
