use super::ClassFact;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Ordered set of the class facts extracted from one build module.
///
/// Insertion order is preserved and drives the order in which dependent
/// classes are reported. Repeated identical facts are kept once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawModuleSource")]
pub struct ModuleSource {
    name: String,
    classes: Vec<ClassFact>,
}

#[derive(Deserialize)]
struct RawModuleSource {
    name: String,
    #[serde(default)]
    classes: Vec<ClassFact>,
}

impl From<RawModuleSource> for ModuleSource {
    fn from(raw: RawModuleSource) -> Self {
        ModuleSource::new(raw.name, raw.classes)
    }
}

impl ModuleSource {
    pub fn new(name: impl Into<String>, mut classes: Vec<ClassFact>) -> Self {
        let name = name.into();
        let before = classes.len();
        let mut seen = HashSet::with_capacity(before);
        classes.retain(|class| seen.insert(class.clone()));
        if classes.len() < before {
            debug!(
                "Dropped {} duplicate class facts in module {}",
                before - classes.len(),
                name
            );
        }
        Self { name, classes }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> &[ClassFact] {
        &self.classes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassFact> {
        self.classes.iter()
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn num_abstract_classes(&self) -> usize {
        self.classes.iter().filter(|c| c.is_abstract()).count()
    }

    pub fn contains_class(&self, qualified_name: &str) -> bool {
        self.classes
            .iter()
            .any(|c| c.qualified_name() == qualified_name)
    }

    /// Whether any class in this module imports the given class.
    pub fn any_imports(&self, qualified_name: &str) -> bool {
        self.classes.iter().any(|c| c.imports_class(qualified_name))
    }

    /// Classes of this module whose import set contains `qualified_name`, in
    /// module order.
    pub fn classes_that_import(&self, qualified_name: &str) -> Vec<&ClassFact> {
        self.classes
            .iter()
            .filter(|c| c.imports_class(qualified_name))
            .collect()
    }

    pub fn num_classes_that_import(&self, qualified_name: &str) -> usize {
        self.classes
            .iter()
            .filter(|c| c.imports_class(qualified_name))
            .count()
    }
}

impl<'a> IntoIterator for &'a ModuleSource {
    type Item = &'a ClassFact;
    type IntoIter = std::slice::Iter<'a, ClassFact>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_module() -> ModuleSource {
        ModuleSource::new(
            "app",
            vec![
                ClassFact::new("app.Service", ["core.Repo", "core.Entity"], true),
                ClassFact::new("app.Controller", ["app.Service", "core.Repo"], false),
                ClassFact::new("app.Main", Vec::<String>::new(), false),
            ],
        )
    }

    #[test]
    fn test_counts() {
        let module = sample_module();

        assert_eq!(module.num_classes(), 3);
        assert_eq!(module.num_abstract_classes(), 1);
        assert!(!module.is_empty());
    }

    #[test]
    fn test_contains_class() {
        let module = sample_module();

        assert!(module.contains_class("app.Main"));
        assert!(!module.contains_class("core.Repo"));
    }

    #[test]
    fn test_classes_that_import_preserves_order() {
        let module = sample_module();

        let importers: Vec<&str> = module
            .classes_that_import("core.Repo")
            .into_iter()
            .map(|c| c.qualified_name())
            .collect();

        assert_eq!(importers, vec!["app.Service", "app.Controller"]);
        assert_eq!(module.num_classes_that_import("core.Repo"), 2);
    }

    #[test]
    fn test_lookups_on_unknown_names_are_empty() {
        let module = sample_module();

        assert!(!module.any_imports("nope.Nothing"));
        assert!(module.classes_that_import("nope.Nothing").is_empty());
        assert_eq!(module.num_classes_that_import("nope.Nothing"), 0);
    }

    #[test]
    fn test_identical_class_facts_are_kept_once() {
        let service = ClassFact::new("app.Service", ["core.Repo"], false);
        let module = ModuleSource::new(
            "app",
            vec![
                service.clone(),
                ClassFact::new("app.Main", ["core.Repo"], false),
                service,
            ],
        );

        assert_eq!(module.num_classes(), 2);
        assert_eq!(module.num_classes_that_import("core.Repo"), 2);
        let names: Vec<&str> = module.iter().map(|c| c.qualified_name()).collect();
        assert_eq!(names, vec!["app.Service", "app.Main"]);
    }

    #[test]
    fn test_deserialized_module_drops_duplicates() {
        let json = r#"{"name": "m", "classes": [
            {"qualified_name": "m.A", "imports": ["x.X"]},
            {"qualified_name": "m.A", "imports": ["x.X"]}
        ]}"#;

        let module: ModuleSource = serde_json::from_str(json).unwrap();

        assert_eq!(module.num_classes(), 1);
    }

    #[test]
    fn test_equality_includes_name_and_classes() {
        let classes = vec![ClassFact::new("a.A", Vec::<String>::new(), false)];

        assert_eq!(
            ModuleSource::new("m", classes.clone()),
            ModuleSource::new("m", classes.clone())
        );
        assert_ne!(
            ModuleSource::new("m", classes.clone()),
            ModuleSource::new("n", classes)
        );
    }
}
