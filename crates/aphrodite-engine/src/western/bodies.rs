//! The closed set of chart bodies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Celestial bodies tracked by the engine, in canonical order.
///
/// Declaration order is the ordering used for every output list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
}

impl Body {
    pub const ALL: [Body; 11] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::NorthNode,
    ];

    /// Snake-case identifier, e.g. `"north_node"`
    pub fn id(self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
            Body::Pluto => "pluto",
            Body::NorthNode => "north_node",
        }
    }

    pub fn is_luminary(self) -> bool {
        matches!(self, Body::Sun | Body::Moon)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown body: {0}")]
pub struct UnknownBody(pub String);

impl FromStr for Body {
    type Err = UnknownBody;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let id = match lower.as_str() {
            "northnode" | "north node" | "true_node" | "mean_node" => "north_node",
            other => other,
        };
        Body::ALL
            .iter()
            .copied()
            .find(|b| b.id() == id)
            .ok_or_else(|| UnknownBody(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_ids_round_trip_through_from_str() {
        for body in Body::ALL {
            assert_eq!(body.id().parse::<Body>().unwrap(), body);
        }
        assert_eq!("North Node".parse::<Body>().unwrap(), Body::NorthNode);
        assert_eq!("SUN".parse::<Body>().unwrap(), Body::Sun);
        let err = "chiron".parse::<Body>().unwrap_err();
        assert_eq!(err, UnknownBody("chiron".to_string()));
        assert_eq!(err.to_string(), "Unknown body: chiron");
    }

    #[test]
    fn test_canonical_order() {
        assert!(Body::Sun < Body::Moon);
        assert!(Body::Pluto < Body::NorthNode);
        let mut sorted = Body::ALL;
        sorted.sort();
        assert_eq!(sorted, Body::ALL);
    }
}
