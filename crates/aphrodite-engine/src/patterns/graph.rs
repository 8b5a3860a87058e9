//! Aspect adjacency, one undirected graph per aspect type.

use crate::aspects::{Aspect, AspectKind};
use crate::western::Body;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default)]
pub struct AspectGraph {
    adjacency: BTreeMap<AspectKind, BTreeMap<Body, BTreeSet<Body>>>,
}

impl AspectGraph {
    pub fn from_aspects(aspects: &[Aspect]) -> Self {
        let mut graph = Self::default();
        for aspect in aspects {
            graph.add_edge(aspect.kind, aspect.body_a, aspect.body_b);
        }
        graph
    }

    pub fn add_edge(&mut self, kind: AspectKind, a: Body, b: Body) {
        if a == b {
            return;
        }
        let nodes = self.adjacency.entry(kind).or_default();
        nodes.entry(a).or_default().insert(b);
        nodes.entry(b).or_default().insert(a);
    }

    pub fn has_edge(&self, kind: AspectKind, a: Body, b: Body) -> bool {
        self.neighbors(kind, a).any(|n| n == b)
    }

    /// Bodies joined to `body` by `kind`, in body order
    pub fn neighbors(&self, kind: AspectKind, body: Body) -> impl Iterator<Item = Body> + '_ {
        self.adjacency
            .get(&kind)
            .and_then(|nodes| nodes.get(&body))
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Edges of `kind` as `(a, b)` with `a < b`, in body order
    pub fn edges(&self, kind: AspectKind) -> impl Iterator<Item = (Body, Body)> + '_ {
        self.adjacency
            .get(&kind)
            .into_iter()
            .flat_map(|nodes| nodes.iter())
            .flat_map(|(&a, set)| set.iter().filter(move |&&b| a < b).map(move |&b| (a, b)))
    }

    /// Bodies that have at least one edge of `kind`, in body order
    pub fn nodes(&self, kind: AspectKind) -> impl Iterator<Item = Body> + '_ {
        self.adjacency
            .get(&kind)
            .into_iter()
            .flat_map(|nodes| nodes.keys().copied())
    }
}
