#![allow(dead_code)]

use stabilitymap::analysis::ComponentUniverse;
use stabilitymap::core::{ClassFact, ModuleSource};
use stabilitymap::metrics::{ComponentDependencies, ComponentInstability};
use stabilitymap::ComponentId;

pub fn class(name: &str, imports: &[&str]) -> ClassFact {
    ClassFact::new(name, imports.iter().copied(), false)
}

pub fn abstract_class(name: &str, imports: &[&str]) -> ClassFact {
    ClassFact::new(name, imports.iter().copied(), true)
}

pub fn module(name: &str, classes: Vec<ClassFact>) -> ModuleSource {
    ModuleSource::new(name, classes)
}

pub fn universe(modules: Vec<ModuleSource>) -> ComponentUniverse {
    ComponentUniverse::from_sources(modules).expect("valid universe")
}

/// A <- B <- C, B <- D, C -> D, one class per component:
/// classA (abstract), classB imports classA, classC imports classB and classD,
/// classD imports classB.
pub fn chain_universe() -> ComponentUniverse {
    universe(vec![
        module("A", vec![abstract_class("classA", &[])]),
        module("B", vec![class("classB", &["classA"])]),
        module("C", vec![class("classC", &["classB", "classD"])]),
        module("D", vec![class("classD", &["classB"])]),
    ])
}

/// Instability record with exactly `fan_in` incoming and `fan_out` outgoing
/// edges, independent of any universe.
pub fn fixed_instability(name: &str, fan_in: usize, fan_out: usize) -> ComponentInstability {
    let edges = |prefix: &str, n: usize| -> Vec<ClassFact> {
        (0..n)
            .map(|i| ClassFact::new(format!("{prefix}.E{i}"), Vec::<String>::new(), false))
            .collect()
    };
    ComponentInstability::new(
        ComponentId::from(name),
        ComponentDependencies::new(ComponentId::from(name), edges("in", fan_in), vec![]),
        ComponentDependencies::new(ComponentId::from(name), edges("out", fan_out), vec![]),
    )
}

pub fn ids(names: &[&str]) -> Vec<ComponentId> {
    names.iter().map(|n| ComponentId::from(*n)).collect()
}
