use aphrodite_engine::aspects::{AspectCalculator, AspectKind, AspectSettings, OrbSettings};
use aphrodite_engine::ephemeris::{BodyPosition, RawPosition};
use aphrodite_engine::Body;
use std::collections::HashSet;

fn pos(body: Body, longitude: f64, speed: f64) -> BodyPosition {
    BodyPosition::annotate(&RawPosition::new(body, longitude, speed), 1)
}

#[test]
fn test_calculate_aspect_conjunction() {
    let calculator = AspectCalculator::default();

    let aspect = calculator
        .calculate_aspect(&pos(Body::Sun, 100.0, 1.0), &pos(Body::Moon, 102.0, 13.0))
        .unwrap();

    assert_eq!(aspect.kind, AspectKind::Conjunction);
    assert!((aspect.orb - 2.0).abs() < 1e-9);
    assert!(!aspect.exact);
    // Moon is ahead and faster
    assert!(!aspect.applying);
}

#[test]
fn test_calculate_aspect_opposition() {
    let calculator = AspectCalculator::default();

    // 178 degrees apart
    let aspect = calculator
        .calculate_aspect(&pos(Body::Sun, 100.0, 1.0), &pos(Body::Saturn, 278.0, 0.1))
        .unwrap();

    assert_eq!(aspect.kind, AspectKind::Opposition);
    assert!((aspect.separation - 178.0).abs() < 1e-9);
    // Sun moves along the short arc toward Saturn, away from 180
    assert!(!aspect.applying);

    let reversed = calculator
        .calculate_aspect(&pos(Body::Sun, 100.0, -1.0), &pos(Body::Saturn, 278.0, 0.1))
        .unwrap();
    assert!(reversed.applying);
}

#[test]
fn test_boundary_wraparound_conjunction() {
    let calculator = AspectCalculator::default();
    let aspect = calculator
        .calculate_aspect(&pos(Body::Venus, 359.0, 1.2), &pos(Body::Mars, 2.0, 0.7))
        .unwrap();

    assert_eq!(aspect.kind, AspectKind::Conjunction);
    assert!((aspect.separation - 3.0).abs() < 1e-9);
    // Venus is behind and faster
    assert!(aspect.applying);
}

#[test]
fn test_orb_limits_are_inclusive() {
    let calculator = AspectCalculator::default();
    // sextile max orb is 6
    let at_limit =
        calculator.calculate_aspect(&pos(Body::Sun, 0.0, 1.0), &pos(Body::Mars, 66.0, 0.5));
    assert_eq!(at_limit.map(|a| a.kind), Some(AspectKind::Sextile));

    let past_limit =
        calculator.calculate_aspect(&pos(Body::Sun, 0.0, 1.0), &pos(Body::Mars, 66.5, 0.5));
    assert!(past_limit.is_none());
}

#[test]
fn test_custom_orbs_and_exact_threshold() {
    let calculator = AspectCalculator::new(AspectSettings {
        orbs: OrbSettings {
            trine: 2.0,
            ..OrbSettings::default()
        },
        exact_threshold: 0.1,
    });

    let loose =
        calculator.calculate_aspect(&pos(Body::Sun, 0.0, 1.0), &pos(Body::Jupiter, 124.0, 0.1));
    assert!(loose.is_none());

    let tight = calculator
        .calculate_aspect(&pos(Body::Sun, 0.0, 1.0), &pos(Body::Jupiter, 120.5, 0.1))
        .unwrap();
    assert_eq!(tight.kind, AspectKind::Trine);
    assert!(!tight.exact);
}

#[test]
fn test_retrograde_flag() {
    let calculator = AspectCalculator::default();
    let aspect = calculator
        .calculate_aspect(&pos(Body::Mercury, 10.0, -0.6), &pos(Body::Venus, 70.0, 1.1))
        .unwrap();
    assert_eq!(aspect.kind, AspectKind::Sextile);
    assert!(aspect.retrograde);
}

#[test]
fn test_compute_aspects_at_most_one_per_pair() {
    let calculator = AspectCalculator::default();
    let positions: Vec<BodyPosition> = Body::ALL
        .iter()
        .enumerate()
        .map(|(i, body)| pos(*body, (i as f64 * 29.0 + 3.0) % 360.0, 1.0 - i as f64 * 0.2))
        .collect();

    let aspects = calculator.compute_aspects(&positions);
    assert!(!aspects.is_empty());

    let mut pairs = HashSet::new();
    for aspect in &aspects {
        assert!(aspect.body_a < aspect.body_b);
        assert!(pairs.insert(aspect.pair()), "duplicate pair {:?}", aspect.pair());
        assert!(aspect.orb <= OrbSettings::default().get(aspect.kind));
    }

    let mut sorted = aspects.clone();
    sorted.sort_by_key(|a| (a.body_a, a.body_b));
    assert_eq!(sorted, aspects);
}

#[test]
fn test_compute_aspects_is_independent_of_input_order() {
    let calculator = AspectCalculator::default();
    let mut positions = vec![
        pos(Body::Sun, 10.0, 1.0),
        pos(Body::Moon, 130.0, 13.0),
        pos(Body::Mars, 100.0, 0.5),
        pos(Body::Saturn, 190.0, 0.05),
    ];
    let forward = calculator.compute_aspects(&positions);
    positions.reverse();
    let backward = calculator.compute_aspects(&positions);
    assert_eq!(forward, backward);
}
