use crate::ephemeris::types::RawPosition;
use crate::error::Result;

/// Source of body positions and house cusps.
///
/// Ephemeris math lives outside the engine; implementors wrap whatever
/// astronomical library the calling service uses.
pub trait PositionProvider {
    /// One position per body, longitudes in [0, 360), speeds in degrees/day
    fn body_positions(&self) -> Result<Vec<RawPosition>>;

    /// Twelve cusp longitudes, house 1 first
    fn house_cusps(&self) -> Result<Vec<f64>>;
}

/// Provider backed by positions computed elsewhere
#[derive(Debug, Clone, Default)]
pub struct StaticPositions {
    pub positions: Vec<RawPosition>,
    pub cusps: Vec<f64>,
}

impl StaticPositions {
    pub fn new(positions: Vec<RawPosition>, cusps: Vec<f64>) -> Self {
        Self { positions, cusps }
    }
}

impl PositionProvider for StaticPositions {
    fn body_positions(&self) -> Result<Vec<RawPosition>> {
        Ok(self.positions.clone())
    }

    fn house_cusps(&self) -> Result<Vec<f64>> {
        Ok(self.cusps.clone())
    }
}
