//! House cusps and house assignment.
//!
//! House `i` spans `[cusp[i-1], cusp[i mod 12])` walked in increasing
//! zodiacal order. Spans may cross 0°.

use crate::ephemeris::types::{BodyPosition, RawPosition};
use crate::error::{ChartError, Result};
use crate::geometry;
use crate::western::Body;
use serde::{Deserialize, Serialize};

pub const HOUSE_COUNT: usize = 12;

const ARC_SUM_TOLERANCE: f64 = 1e-6;

/// Twelve validated house cusps. `cusps()[0]` is the Ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct HouseCusps([f64; HOUSE_COUNT]);

impl HouseCusps {
    /// Validate and wrap a cusp list.
    ///
    /// Cusps must be finite, inside [0, 360), strictly increasing around the
    /// circle, and wrap exactly once.
    pub fn new(cusps: Vec<f64>) -> Result<Self> {
        let cusps: [f64; HOUSE_COUNT] = cusps
            .try_into()
            .map_err(|v: Vec<f64>| ChartError::CuspCount { found: v.len() })?;

        for (i, &cusp) in cusps.iter().enumerate() {
            if !cusp.is_finite() || !(0.0..360.0).contains(&cusp) {
                return Err(ChartError::InvalidCusp {
                    house: i as u8 + 1,
                    value: cusp,
                });
            }
        }

        let mut total = 0.0;
        for i in 0..HOUSE_COUNT {
            let arc = geometry::forward_arc(cusps[i], cusps[(i + 1) % HOUSE_COUNT]);
            if arc <= 0.0 {
                return Err(ChartError::CuspOrder { house: i as u8 + 1 });
            }
            total += arc;
        }
        if (total - geometry::FULL_CIRCLE).abs() > ARC_SUM_TOLERANCE {
            return Err(ChartError::CuspOrder { house: 1 });
        }

        Ok(Self(cusps))
    }

    /// Equal houses of 30° starting at the Ascendant.
    pub fn equal(ascendant: f64) -> Result<Self> {
        let asc = geometry::normalize(ascendant);
        let cusps = (0..HOUSE_COUNT)
            .map(|i| geometry::normalize(asc + 30.0 * i as f64))
            .collect();
        Self::new(cusps)
    }

    pub fn cusps(&self) -> &[f64; HOUSE_COUNT] {
        &self.0
    }

    pub fn ascendant(&self) -> f64 {
        self.0[0]
    }

    /// Start and end longitude of house `house` (1-12).
    pub fn span(&self, house: u8) -> Option<(f64, f64)> {
        if !(1..=HOUSE_COUNT as u8).contains(&house) {
            return None;
        }
        let i = house as usize - 1;
        Some((self.0[i], self.0[(i + 1) % HOUSE_COUNT]))
    }

    /// House number (1-12) containing `longitude`, if any span matches.
    pub fn house_of(&self, longitude: f64) -> Option<u8> {
        (1..=HOUSE_COUNT as u8).find(|&house| {
            let i = house as usize - 1;
            geometry::in_arc(longitude, self.0[i], self.0[(i + 1) % HOUSE_COUNT])
        })
    }
}

impl TryFrom<Vec<f64>> for HouseCusps {
    type Error = ChartError;

    fn try_from(cusps: Vec<f64>) -> Result<Self> {
        Self::new(cusps)
    }
}

impl From<HouseCusps> for Vec<f64> {
    fn from(cusps: HouseCusps) -> Self {
        cusps.0.to_vec()
    }
}

/// House number for one body. A miss means the cusp data is inconsistent.
pub fn assign_house(body: Body, longitude: f64, cusps: &HouseCusps) -> Result<u8> {
    cusps
        .house_of(longitude)
        .ok_or(ChartError::HouseNotFound { body, longitude })
}

/// Annotate every position with its sign and house.
pub fn assign_houses(positions: &[RawPosition], cusps: &HouseCusps) -> Result<Vec<BodyPosition>> {
    positions
        .iter()
        .map(|raw| {
            let house = assign_house(raw.body, raw.longitude, cusps)?;
            Ok(BodyPosition::annotate(raw, house))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placidus_like() -> Vec<f64> {
        // Unequal houses with the 12th house crossing 0°
        vec![
            15.0, 42.0, 71.0, 103.0, 138.0, 168.0, 195.0, 222.0, 251.0, 283.0, 318.0, 348.0,
        ]
    }

    #[test]
    fn test_rejects_wrong_count() {
        assert!(matches!(
            HouseCusps::new(vec![0.0; 11]),
            Err(ChartError::CuspCount { found: 11 })
        ));
        assert!(matches!(
            HouseCusps::new(vec![]),
            Err(ChartError::CuspCount { found: 0 })
        ));
    }

    #[test]
    fn test_rejects_bad_values_and_order() {
        let mut cusps = placidus_like();
        cusps[4] = f64::NAN;
        assert!(matches!(
            HouseCusps::new(cusps),
            Err(ChartError::InvalidCusp { house: 5, .. })
        ));

        let mut cusps = placidus_like();
        cusps[3] = 360.0;
        assert!(HouseCusps::new(cusps).is_err());

        let mut cusps = placidus_like();
        cusps.swap(2, 3);
        assert!(matches!(HouseCusps::new(cusps), Err(ChartError::CuspOrder { .. })));

        let mut cusps = placidus_like();
        cusps[6] = cusps[5];
        assert!(matches!(HouseCusps::new(cusps), Err(ChartError::CuspOrder { house: 6 })));
    }

    #[test]
    fn test_house_of_with_wrapping_span() {
        let cusps = HouseCusps::new(placidus_like()).unwrap();
        assert_eq!(cusps.house_of(15.0), Some(1));
        assert_eq!(cusps.house_of(41.99), Some(1));
        assert_eq!(cusps.house_of(42.0), Some(2));
        assert_eq!(cusps.house_of(350.0), Some(12));
        assert_eq!(cusps.house_of(0.0), Some(12));
        assert_eq!(cusps.house_of(14.99), Some(12));
    }

    #[test]
    fn test_every_longitude_maps_to_exactly_one_house() {
        let cusps = HouseCusps::new(placidus_like()).unwrap();
        let mut lon = 0.0;
        while lon < 360.0 {
            let matching = (1..=12u8)
                .filter(|&h| {
                    let (start, end) = cusps.span(h).unwrap();
                    geometry::in_arc(lon, start, end)
                })
                .count();
            assert_eq!(matching, 1, "longitude {lon}");
            lon += 0.25;
        }
    }

    #[test]
    fn test_equal_houses() {
        let cusps = HouseCusps::equal(350.0).unwrap();
        assert_eq!(cusps.ascendant(), 350.0);
        assert_eq!(cusps.house_of(355.0), Some(1));
        assert_eq!(cusps.house_of(20.0), Some(2));
        assert_eq!(cusps.house_of(349.0), Some(12));
    }

    #[test]
    fn test_assign_houses_annotates_positions() {
        let cusps = HouseCusps::equal(0.0).unwrap();
        let raw = vec![
            RawPosition::new(Body::Sun, 5.0, 1.0),
            RawPosition::new(Body::Moon, 200.0, 13.0),
        ];
        let positions = assign_houses(&raw, &cusps).unwrap();
        assert_eq!(positions[0].house, 1);
        assert_eq!(positions[1].house, 7);
    }

    #[test]
    fn test_inconsistent_cusps_surface_house_not_found() {
        // every span is empty, so no house can match
        let cusps = HouseCusps([10.0; HOUSE_COUNT]);
        match assign_house(Body::Sun, 5.0, &cusps) {
            Err(ChartError::HouseNotFound { body, longitude }) => {
                assert_eq!(body, Body::Sun);
                assert_eq!(longitude, 5.0);
            }
            other => panic!("expected HouseNotFound, got {other:?}"),
        }

        let raw = vec![
            RawPosition::new(Body::Sun, 5.0, 1.0),
            RawPosition::new(Body::Moon, 200.0, 13.0),
        ];
        assert!(matches!(
            assign_houses(&raw, &cusps),
            Err(ChartError::HouseNotFound {
                body: Body::Sun,
                ..
            })
        ));
    }

    #[test]
    fn test_cusps_deserialize_through_validation() {
        let ok: HouseCusps = serde_json::from_str(
            "[0, 30, 60, 90, 120, 150, 180, 210, 240, 270, 300, 330]",
        )
        .unwrap();
        assert_eq!(ok.ascendant(), 0.0);
        assert!(serde_json::from_str::<HouseCusps>("[0, 30, 60]").is_err());
    }
}
