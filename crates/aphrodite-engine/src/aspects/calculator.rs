use crate::aspects::types::{Aspect, AspectKind, AspectSettings};
use crate::ephemeris::types::BodyPosition;
use crate::geometry;
use log::{debug, trace};

/// Aspect calculator
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    settings: AspectSettings,
}

impl AspectCalculator {
    pub fn new(settings: AspectSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AspectSettings {
        &self.settings
    }

    /// Compute aspects between every unordered pair of bodies in one chart.
    ///
    /// Output follows body order: `body_a < body_b`, pairs sorted by
    /// `(body_a, body_b)`.
    pub fn compute_aspects(&self, positions: &[BodyPosition]) -> Vec<Aspect> {
        let mut sorted: Vec<&BodyPosition> = positions.iter().collect();
        sorted.sort_by_key(|p| p.body);

        let mut aspects = Vec::new();
        for i in 0..sorted.len() {
            for j in (i + 1)..sorted.len() {
                if let Some(aspect) = self.calculate_aspect(sorted[i], sorted[j]) {
                    aspects.push(aspect);
                }
            }
        }

        debug!(
            "{} aspects across {} bodies",
            aspects.len(),
            positions.len()
        );
        aspects
    }

    /// Compute aspects between the bodies of two charts (transits, synastry).
    ///
    /// `body_a` always comes from `chart_a`. A body is never aspected to
    /// itself across charts.
    pub fn inter_chart(&self, chart_a: &[BodyPosition], chart_b: &[BodyPosition]) -> Vec<Aspect> {
        let mut sorted_a: Vec<&BodyPosition> = chart_a.iter().collect();
        let mut sorted_b: Vec<&BodyPosition> = chart_b.iter().collect();
        sorted_a.sort_by_key(|p| p.body);
        sorted_b.sort_by_key(|p| p.body);

        let mut aspects = Vec::new();
        for a in &sorted_a {
            for b in &sorted_b {
                if a.body == b.body {
                    continue;
                }
                if let Some(aspect) = self.calculate_aspect(a, b) {
                    aspects.push(aspect);
                }
            }
        }

        debug!("{} inter-chart aspects", aspects.len());
        aspects
    }

    /// Classify the relationship between two positions.
    ///
    /// Aspect types are tried in [`AspectKind::PRIORITY`] order and the first
    /// match wins, so a pair never carries two aspect types.
    pub fn calculate_aspect(&self, a: &BodyPosition, b: &BodyPosition) -> Option<Aspect> {
        let separation = geometry::circular_distance(a.longitude, b.longitude);

        for kind in AspectKind::PRIORITY {
            let orb = (separation - kind.angle()).abs();
            if orb > self.settings.orbs.get(kind) {
                continue;
            }

            let applying = is_applying(
                a.longitude,
                b.longitude,
                a.speed,
                b.speed,
                kind.angle(),
                separation,
            );
            trace!(
                "{} {} {} (orb {:.3}, {})",
                a.body,
                kind,
                b.body,
                orb,
                if applying { "applying" } else { "separating" }
            );

            return Some(Aspect {
                body_a: a.body,
                body_b: b.body,
                kind,
                separation,
                orb,
                exact: orb < self.settings.exact_threshold,
                applying,
                retrograde: a.retrograde || b.retrograde,
            });
        }

        None
    }
}

/// Determine if an aspect is applying (approaching exact) or separating.
///
/// The rate of change of the separation follows from the signed delta between
/// the bodies and their relative speed. The aspect applies when that rate has
/// the same sign as `aspect_angle - separation`.
pub fn is_applying(
    lon1: f64,
    lon2: f64,
    speed1: f64,
    speed2: f64,
    aspect_angle: f64,
    separation: f64,
) -> bool {
    let relative_speed = speed1 - speed2;
    let gap = aspect_angle - separation;
    if relative_speed == 0.0 || gap == 0.0 {
        return false;
    }

    let delta = geometry::signed_delta(lon1, lon2);
    let separation_rate = if delta == 0.0 {
        // any motion pulls a perfect conjunction apart
        relative_speed.abs()
    } else if delta >= 180.0 {
        // any motion pulls a perfect opposition closer
        -relative_speed.abs()
    } else {
        delta.signum() * relative_speed
    };

    separation_rate.signum() == gap.signum()
}
