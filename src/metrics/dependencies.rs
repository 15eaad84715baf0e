//! Fan-in and fan-out of a component against a universe of components.
//!
//! Both directions count import edges, one per (importing class, imported
//! class) pair crossing the component boundary. Edges are never deduplicated
//! by target: a class importing two classes of another component contributes
//! two edges.

use crate::core::{ClassFact, Component, ComponentId};
use serde::Serialize;

use super::instability::ComponentInstability;

/// Import edges crossing the boundary of one component in one direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentDependencies {
    owner: ComponentId,
    class_edges: Vec<ClassFact>,
    peer_components: Vec<ComponentId>,
}

impl ComponentDependencies {
    /// `peer_components` is treated as an ordered set; duplicates are dropped.
    pub fn new(
        owner: ComponentId,
        class_edges: Vec<ClassFact>,
        peer_components: Vec<ComponentId>,
    ) -> Self {
        let mut peers = Vec::with_capacity(peer_components.len());
        for peer in peer_components {
            push_unique(&mut peers, peer);
        }
        Self {
            owner,
            class_edges,
            peer_components: peers,
        }
    }

    pub fn owner(&self) -> &ComponentId {
        &self.owner
    }

    /// Number of import edges (the multiset size).
    pub fn count(&self) -> usize {
        self.class_edges.len()
    }

    /// The classes on the far side of each edge, one entry per edge.
    pub fn class_edges(&self) -> &[ClassFact] {
        &self.class_edges
    }

    /// Components on the other end of at least one edge, in universe order.
    pub fn peer_components(&self) -> &[ComponentId] {
        &self.peer_components
    }

    pub fn has_peer(&self, component: &ComponentId) -> bool {
        self.peer_components.contains(component)
    }
}

fn push_unique(peers: &mut Vec<ComponentId>, peer: ComponentId) {
    if !peers.contains(&peer) {
        peers.push(peer);
    }
}

/// Computes dependency sets for components of a fixed universe.
#[derive(Debug, Clone, Copy)]
pub struct DependencyCalculator<'u> {
    universe: &'u [Component],
}

impl<'u> DependencyCalculator<'u> {
    pub fn new(universe: &'u [Component]) -> Self {
        Self { universe }
    }

    pub fn universe(&self) -> &'u [Component] {
        self.universe
    }

    /// Outgoing dependencies: for every class of every other component, the
    /// classes of `component` that import it.
    pub fn fan_out(&self, component: &Component) -> ComponentDependencies {
        let mut edges = Vec::new();
        let mut peers = Vec::new();

        for outside in self.others(component) {
            for outside_class in outside.source() {
                let importers = component
                    .source()
                    .classes_that_import(outside_class.qualified_name());
                if !importers.is_empty() {
                    push_unique(&mut peers, outside.id().clone());
                }
                edges.extend(importers.into_iter().cloned());
            }
        }

        ComponentDependencies {
            owner: component.id().clone(),
            class_edges: edges,
            peer_components: peers,
        }
    }

    /// Incoming dependencies: for every class of `component`, the classes of
    /// every other component that import it.
    pub fn fan_in(&self, component: &Component) -> ComponentDependencies {
        let mut edges = Vec::new();
        let mut peers = Vec::new();

        for src_class in component.source() {
            for outside in self.others(component) {
                let dependents = outside
                    .source()
                    .classes_that_import(src_class.qualified_name());
                if !dependents.is_empty() {
                    push_unique(&mut peers, outside.id().clone());
                }
                edges.extend(dependents.into_iter().cloned());
            }
        }

        // Peers are discovered class by class; report them in universe order.
        peers.sort_by_key(|peer| self.position(peer));

        ComponentDependencies {
            owner: component.id().clone(),
            class_edges: edges,
            peer_components: peers,
        }
    }

    /// Fan-in, fan-out and the resulting instability of `component`.
    pub fn instability_of(&self, component: &Component) -> ComponentInstability {
        ComponentInstability::new(
            component.id().clone(),
            self.fan_in(component),
            self.fan_out(component),
        )
    }

    fn others<'a>(&'a self, component: &'a Component) -> impl Iterator<Item = &'u Component> + 'a {
        self.universe.iter().filter(move |c| c.id() != component.id())
    }

    fn position(&self, id: &ComponentId) -> usize {
        self.universe
            .iter()
            .position(|c| c.id() == id)
            .unwrap_or(usize::MAX)
    }
}
