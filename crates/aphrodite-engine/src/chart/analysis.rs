use crate::aspects::{Aspect, AspectCalculator};
use crate::chart::settings::EngineSettings;
use crate::dominance::{compute_dominance, DominanceProfile};
use crate::ephemeris::{BodyPosition, PositionProvider, RawPosition};
use crate::error::{ChartError, Result};
use crate::houses::{assign_houses, HouseCusps};
use crate::patterns::{ChartPattern, PatternDetector};
use crate::phases::{map_phases, PhaseMapping};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Raw inputs for one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    pub positions: Vec<RawPosition>,
    pub cusps: HouseCusps,
}

impl ChartInput {
    pub fn new(positions: Vec<RawPosition>, cusps: HouseCusps) -> Self {
        Self { positions, cusps }
    }

    /// Reject empty, duplicated, or out-of-domain positions.
    pub fn validate(&self) -> Result<()> {
        if self.positions.is_empty() {
            return Err(ChartError::EmptyChart);
        }
        let mut seen = BTreeSet::new();
        for pos in &self.positions {
            pos.validate()?;
            if !seen.insert(pos.body) {
                return Err(ChartError::DuplicateBody { body: pos.body });
            }
        }
        Ok(())
    }
}

/// Everything derived from one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAnalysis {
    pub positions: Vec<BodyPosition>,
    pub aspects: Vec<Aspect>,
    pub patterns: Vec<ChartPattern>,
    pub dominance: DominanceProfile,
    pub phases: PhaseMapping,
}

/// Runs houses, aspects, patterns, dominance and phases over one chart.
///
/// The engine holds only its settings; every call is a pure function of its
/// input, so one engine can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct ChartEngine {
    settings: EngineSettings,
    aspects: AspectCalculator,
    patterns: PatternDetector,
}

impl ChartEngine {
    pub fn new(settings: EngineSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            aspects: AspectCalculator::new(settings.aspect_settings()),
            patterns: PatternDetector::new(settings.stellium_min_members),
        })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn analyze(&self, input: &ChartInput) -> Result<ChartAnalysis> {
        input.validate()?;

        let mut raw = input.positions.clone();
        raw.sort_by_key(|p| p.body);

        let positions = assign_houses(&raw, &input.cusps)?;
        debug!("assigned houses for {} bodies", positions.len());

        let aspects = self.aspects.compute_aspects(&positions);
        let patterns = self.patterns.detect(&positions, &aspects);
        let dominance = compute_dominance(
            &positions,
            &self.settings.weights,
            self.settings.normalization_total,
        )?;
        let phases = map_phases(&positions);

        Ok(ChartAnalysis {
            positions,
            aspects,
            patterns,
            dominance,
            phases,
        })
    }

    /// Pull positions and cusps from a provider, then analyze.
    pub fn analyze_from<P: PositionProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> Result<ChartAnalysis> {
        let positions = provider.body_positions()?;
        let cusps = HouseCusps::new(provider.house_cusps()?)?;
        self.analyze(&ChartInput::new(positions, cusps))
    }

    /// Aspects between two already-analyzed charts, e.g. natal and transit.
    pub fn inter_chart_aspects(
        &self,
        chart_a: &[BodyPosition],
        chart_b: &[BodyPosition],
    ) -> Vec<Aspect> {
        self.aspects.inter_chart(chart_a, chart_b)
    }
}
