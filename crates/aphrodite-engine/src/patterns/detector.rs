use crate::aspects::{Aspect, AspectKind};
use crate::ephemeris::types::BodyPosition;
use crate::patterns::graph::AspectGraph;
use crate::patterns::types::{ChartPattern, StelliumKey};
use crate::western::{Body, Sign};
use log::debug;
use std::collections::BTreeMap;

/// Default number of bodies that make a stellium
pub const DEFAULT_STELLIUM_MIN: usize = 3;

/// Finds stelliums, T-squares and grand trines
#[derive(Debug, Clone)]
pub struct PatternDetector {
    stellium_min: usize,
}

impl PatternDetector {
    pub fn new(stellium_min: usize) -> Self {
        Self { stellium_min }
    }

    /// All patterns, in a stable order: stelliums by key, then T-squares by
    /// apex, then grand trines by smallest member.
    pub fn detect(&self, positions: &[BodyPosition], aspects: &[Aspect]) -> Vec<ChartPattern> {
        let graph = AspectGraph::from_aspects(aspects);

        let mut patterns = self.stelliums(positions);
        let stellium_count = patterns.len();
        patterns.extend(t_squares(&graph));
        let t_square_count = patterns.len() - stellium_count;
        patterns.extend(grand_trines(&graph));

        debug!(
            "patterns: {} stellium, {} t-square, {} grand trine",
            stellium_count,
            t_square_count,
            patterns.len() - stellium_count - t_square_count
        );
        patterns
    }

    /// Stelliums by sign and by house. A chart can have both for the same
    /// bodies; they are reported separately.
    pub fn stelliums(&self, positions: &[BodyPosition]) -> Vec<ChartPattern> {
        let mut by_sign: BTreeMap<Sign, Vec<Body>> = BTreeMap::new();
        let mut by_house: BTreeMap<u8, Vec<Body>> = BTreeMap::new();
        for pos in positions {
            by_sign.entry(pos.sign).or_default().push(pos.body);
            by_house.entry(pos.house).or_default().push(pos.body);
        }

        let sign_groups = by_sign
            .into_iter()
            .map(|(sign, members)| (StelliumKey::Sign(sign), members));
        let house_groups = by_house
            .into_iter()
            .map(|(house, members)| (StelliumKey::House(house), members));

        // BTreeMap iteration keeps keys ascending, signs before houses
        sign_groups
            .chain(house_groups)
            .filter(|(_, members)| members.len() >= self.stellium_min)
            .map(|(key, mut members)| {
                members.sort();
                ChartPattern::Stellium { key, members }
            })
            .collect()
    }
}

impl Default for PatternDetector {
    fn default() -> Self {
        Self::new(DEFAULT_STELLIUM_MIN)
    }
}

/// Every body square to both ends of an opposition.
///
/// One opposition can anchor several T-squares.
pub fn t_squares(graph: &AspectGraph) -> Vec<ChartPattern> {
    let mut found: Vec<(Body, (Body, Body))> = Vec::new();
    for (a, b) in graph.edges(AspectKind::Opposition) {
        for apex in graph.neighbors(AspectKind::Square, a) {
            if graph.has_edge(AspectKind::Square, b, apex) {
                found.push((apex, (a, b)));
            }
        }
    }
    found.sort();

    found
        .into_iter()
        .map(|(apex, (a, b))| {
            let mut members = vec![a, b, apex];
            members.sort();
            ChartPattern::TSquare {
                apex,
                opposition: (a, b),
                members,
            }
        })
        .collect()
}

/// Every triangle in the trine subgraph.
pub fn grand_trines(graph: &AspectGraph) -> Vec<ChartPattern> {
    let mut found = Vec::new();
    for a in graph.nodes(AspectKind::Trine) {
        for b in graph.neighbors(AspectKind::Trine, a).filter(|&b| b > a) {
            for c in graph.neighbors(AspectKind::Trine, b).filter(|&c| c > b) {
                if graph.has_edge(AspectKind::Trine, a, c) {
                    found.push(ChartPattern::GrandTrine {
                        members: vec![a, b, c],
                    });
                }
            }
        }
    }
    found
}
