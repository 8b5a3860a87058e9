use crate::error::{ChartError, Result};
use crate::geometry;
use crate::western::{Body, Sign};
use serde::{Deserialize, Serialize};

/// Position of a body as reported by an ephemeris provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    pub body: Body,
    /// Longitude in degrees (0-360)
    pub longitude: f64,
    /// Speed in longitude (degrees per day); negative when retrograde
    pub speed: f64,
}

impl RawPosition {
    pub fn new(body: Body, longitude: f64, speed: f64) -> Self {
        Self {
            body,
            longitude,
            speed,
        }
    }

    pub fn is_retrograde(&self) -> bool {
        self.speed < 0.0
    }

    /// Reject non-finite values and longitudes outside [0, 360).
    pub fn validate(&self) -> Result<()> {
        if !self.longitude.is_finite() || !(0.0..360.0).contains(&self.longitude) {
            return Err(ChartError::InvalidLongitude {
                body: self.body,
                value: self.longitude,
            });
        }
        if !self.speed.is_finite() {
            return Err(ChartError::InvalidSpeed {
                body: self.body,
                value: self.speed,
            });
        }
        Ok(())
    }
}

/// A body position annotated with its sign and house
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: Body,
    pub longitude: f64,
    pub speed: f64,
    pub retrograde: bool,
    pub sign: Sign,
    #[serde(rename = "degreeInSign")]
    pub degree_in_sign: f64,
    /// House number (1-12)
    pub house: u8,
}

impl BodyPosition {
    /// Annotate a raw position with its derived sign and the given house.
    pub fn annotate(raw: &RawPosition, house: u8) -> Self {
        let longitude = geometry::normalize(raw.longitude);
        Self {
            body: raw.body,
            longitude,
            speed: raw.speed,
            retrograde: raw.is_retrograde(),
            sign: Sign::from_longitude(longitude),
            degree_in_sign: geometry::degree_in_sign(longitude),
            house,
        }
    }
}
