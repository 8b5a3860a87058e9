//! Weighted element and modality scores.

use crate::ephemeris::types::BodyPosition;
use crate::error::{ChartError, Result};
use crate::western::{Body, Element, Modality};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Significance of each body in the dominance tally
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyWeights {
    pub sun: f64,
    pub moon: f64,
    pub mercury: f64,
    pub venus: f64,
    pub mars: f64,
    pub jupiter: f64,
    pub saturn: f64,
    pub uranus: f64,
    pub neptune: f64,
    pub pluto: f64,
    pub north_node: f64,
}

impl BodyWeights {
    pub fn get(&self, body: Body) -> f64 {
        match body {
            Body::Sun => self.sun,
            Body::Moon => self.moon,
            Body::Mercury => self.mercury,
            Body::Venus => self.venus,
            Body::Mars => self.mars,
            Body::Jupiter => self.jupiter,
            Body::Saturn => self.saturn,
            Body::Uranus => self.uranus,
            Body::Neptune => self.neptune,
            Body::Pluto => self.pluto,
            Body::NorthNode => self.north_node,
        }
    }
}

impl Default for BodyWeights {
    fn default() -> Self {
        Self {
            sun: 4.0,
            moon: 4.0,
            mercury: 2.0,
            venus: 2.0,
            mars: 2.0,
            jupiter: 1.0,
            saturn: 1.0,
            uranus: 0.5,
            neptune: 0.5,
            pluto: 0.5,
            north_node: 1.0,
        }
    }
}

/// Element and modality histograms, each normalized to `total`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominanceProfile {
    pub elements: BTreeMap<Element, f64>,
    pub modalities: BTreeMap<Modality, f64>,
    /// Summed weights before normalization
    #[serde(rename = "rawElements")]
    pub raw_elements: BTreeMap<Element, f64>,
    #[serde(rename = "rawModalities")]
    pub raw_modalities: BTreeMap<Modality, f64>,
    pub total: f64,
}

impl DominanceProfile {
    pub fn element(&self, element: Element) -> f64 {
        self.elements.get(&element).copied().unwrap_or(0.0)
    }

    pub fn modality(&self, modality: Modality) -> f64 {
        self.modalities.get(&modality).copied().unwrap_or(0.0)
    }

    /// Highest-scoring element; ties go to the earlier element (Fire first)
    pub fn dominant_element(&self) -> Element {
        Element::ALL
            .into_iter()
            .fold(Element::Fire, |best, e| {
                if self.element(e) > self.element(best) {
                    e
                } else {
                    best
                }
            })
    }

    /// Highest-scoring modality; ties go to the earlier modality
    pub fn dominant_modality(&self) -> Modality {
        Modality::ALL
            .into_iter()
            .fold(Modality::Cardinal, |best, m| {
                if self.modality(m) > self.modality(best) {
                    m
                } else {
                    best
                }
            })
    }

    /// Copy with normalized scores rounded for display
    pub fn rounded(&self, decimals: u32) -> DominanceProfile {
        let factor = 10f64.powi(decimals as i32);
        let round = |v: f64| (v * factor).round() / factor;
        DominanceProfile {
            elements: self.elements.iter().map(|(k, v)| (*k, round(*v))).collect(),
            modalities: self.modalities.iter().map(|(k, v)| (*k, round(*v))).collect(),
            raw_elements: self.raw_elements.clone(),
            raw_modalities: self.raw_modalities.clone(),
            total: self.total,
        }
    }
}

/// Tally body weights by the element and modality of each body's sign.
pub fn compute_dominance(
    positions: &[BodyPosition],
    weights: &BodyWeights,
    total: f64,
) -> Result<DominanceProfile> {
    if positions.is_empty() {
        return Err(ChartError::EmptyChart);
    }

    let mut raw_elements: BTreeMap<Element, f64> = Element::ALL.iter().map(|e| (*e, 0.0)).collect();
    let mut raw_modalities: BTreeMap<Modality, f64> =
        Modality::ALL.iter().map(|m| (*m, 0.0)).collect();

    for pos in positions {
        let weight = weights.get(pos.body);
        *raw_elements.entry(pos.sign.element()).or_insert(0.0) += weight;
        *raw_modalities.entry(pos.sign.modality()).or_insert(0.0) += weight;
    }

    Ok(DominanceProfile {
        elements: normalize_buckets(&raw_elements, total)?,
        modalities: normalize_buckets(&raw_modalities, total)?,
        raw_elements,
        raw_modalities,
        total,
    })
}

/// Scale one bucket set so it sums to `total`, independently of any other set.
fn normalize_buckets<K: Ord + Copy>(
    raw: &BTreeMap<K, f64>,
    total: f64,
) -> Result<BTreeMap<K, f64>> {
    let weight_sum: f64 = raw.values().sum();
    if weight_sum <= 0.0 {
        return Err(ChartError::ZeroWeight);
    }
    Ok(raw
        .iter()
        .map(|(k, v)| (*k, v / weight_sum * total))
        .collect())
}
