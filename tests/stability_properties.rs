//! Property-based tests for the component metrics
//!
//! These tests verify invariants that should hold for all inputs:
//! - Abstractness and instability stay within [0, 1]
//! - Instability is 0.5 for components without edges
//! - A component never depends upon itself
//! - Total fan-out equals total fan-in across a universe
//! - Graph warning edges and stability violations describe the same pairs

use proptest::prelude::*;
use stabilitymap::analysis::{analyze, AnalysisOptions, ComponentUniverse};
use stabilitymap::core::{ClassFact, ModuleSource};
use stabilitymap::metrics::{main_sequence_distance, stability_order, DependencyCalculator};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// (is_abstract, import selectors) per class, classes per component.
type UniverseShape = Vec<Vec<(bool, Vec<usize>)>>;

fn universe_shape() -> impl Strategy<Value = UniverseShape> {
    prop::collection::vec(
        prop::collection::vec(
            (any::<bool>(), prop::collection::vec(0usize..64, 0..4)),
            1..4,
        ),
        1..6,
    )
}

/// Selectors pick one of the declared classes or an external name.
fn build_universe(shape: &UniverseShape) -> ComponentUniverse {
    let names: Vec<Vec<String>> = shape
        .iter()
        .enumerate()
        .map(|(i, classes)| (0..classes.len()).map(|j| format!("c{i}.K{j}")).collect())
        .collect();
    let all: Vec<&String> = names.iter().flatten().collect();
    let slots = all.len() + 3;

    let sources = shape
        .iter()
        .enumerate()
        .map(|(i, classes)| {
            let facts = classes
                .iter()
                .enumerate()
                .map(|(j, (is_abstract, selectors))| {
                    let imports: Vec<String> = selectors
                        .iter()
                        .map(|s| {
                            let slot = s % slots;
                            all.get(slot)
                                .map(|n| n.to_string())
                                .unwrap_or_else(|| format!("ext.E{slot}"))
                        })
                        .collect();
                    ClassFact::new(names[i][j].clone(), imports, *is_abstract)
                })
                .collect();
            ModuleSource::new(format!("c{i}"), facts)
        })
        .collect();

    ComponentUniverse::from_sources(sources).expect("generated universe is valid")
}

proptest! {
    #[test]
    fn prop_metrics_are_bounded(shape in universe_shape()) {
        let universe = build_universe(&shape);
        let calc = DependencyCalculator::new(universe.components());

        for component in universe.iter() {
            let abstractness = component.abstractness();
            prop_assert!((0.0..=1.0).contains(&abstractness));

            let inst = calc.instability_of(component);
            prop_assert!((0.0..=1.0).contains(&inst.value()));
            if inst.fan_in_count() + inst.fan_out_count() == 0 {
                prop_assert_eq!(inst.value(), 0.5);
            }
        }
    }

    #[test]
    fn prop_depends_upon_is_irreflexive(shape in universe_shape()) {
        let universe = build_universe(&shape);

        for component in universe.iter() {
            prop_assert!(!component.depends_upon(component));
        }
    }

    #[test]
    fn prop_fan_out_and_fan_in_are_dual(shape in universe_shape()) {
        let universe = build_universe(&shape);
        let calc = DependencyCalculator::new(universe.components());

        let total_out: usize = universe.iter().map(|c| calc.fan_out(c).count()).sum();
        let total_in: usize = universe.iter().map(|c| calc.fan_in(c).count()).sum();
        prop_assert_eq!(total_out, total_in);

        for b in universe.iter() {
            let from_pairs: usize = universe
                .iter()
                .filter(|a| *a != b)
                .map(|a| {
                    b.classes()
                        .iter()
                        .map(|cb| a.source().num_classes_that_import(cb.qualified_name()))
                        .sum::<usize>()
                })
                .sum();
            prop_assert_eq!(calc.fan_in(b).count(), from_pairs);
        }
    }

    #[test]
    fn prop_peers_match_depends_upon(shape in universe_shape()) {
        let universe = build_universe(&shape);
        let calc = DependencyCalculator::new(universe.components());

        for a in universe.iter() {
            let fan_out = calc.fan_out(a);
            for b in universe.iter() {
                prop_assert_eq!(fan_out.has_peer(b.id()), a.depends_upon(b));
            }
        }
    }

    #[test]
    fn prop_warning_edges_are_violations(shape in universe_shape()) {
        let universe = build_universe(&shape);
        let report = analyze(&universe, &AnalysisOptions { parallel: false, ..AnalysisOptions::default() });

        let warnings: BTreeSet<(String, String)> = report
            .graph
            .warning_edges()
            .into_iter()
            .map(|e| (e.source.to_string(), e.target.to_string()))
            .collect();
        let violations: BTreeSet<(String, String)> = report
            .violations
            .iter()
            .map(|v| (v.source.to_string(), v.outside.to_string()))
            .collect();
        prop_assert_eq!(warnings, violations);
    }

    #[test]
    fn prop_distance_is_pure(abstractness in 0.0f64..=1.0, instability in 0.0f64..=1.0) {
        let first = main_sequence_distance(abstractness, instability);
        let second = main_sequence_distance(abstractness, instability);
        prop_assert_eq!(first, second);
        prop_assert!((0.0..=1.0).contains(&first));
    }

    #[test]
    fn prop_stability_order_is_reversed_numeric_order(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        prop_assert_eq!(stability_order(a, b), b.total_cmp(&a));
        if a < b {
            prop_assert_eq!(stability_order(a, b), Ordering::Greater);
        }
    }
}
