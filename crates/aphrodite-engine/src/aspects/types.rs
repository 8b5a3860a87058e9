use crate::western::Body;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Major aspect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    /// Matching order: tightest / most significant first
    pub const PRIORITY: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Opposition,
        AspectKind::Trine,
        AspectKind::Square,
        AspectKind::Sextile,
    ];

    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub fn angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maximum orb per aspect type, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbSettings {
    pub conjunction: f64,
    pub sextile: f64,
    pub square: f64,
    pub trine: f64,
    pub opposition: f64,
}

impl OrbSettings {
    pub fn get(&self, kind: AspectKind) -> f64 {
        match kind {
            AspectKind::Conjunction => self.conjunction,
            AspectKind::Sextile => self.sextile,
            AspectKind::Square => self.square,
            AspectKind::Trine => self.trine,
            AspectKind::Opposition => self.opposition,
        }
    }
}

impl Default for OrbSettings {
    fn default() -> Self {
        Self {
            conjunction: 8.0,
            sextile: 6.0,
            square: 8.0,
            trine: 8.0,
            opposition: 8.0,
        }
    }
}

/// Settings for aspect calculations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectSettings {
    pub orbs: OrbSettings,
    /// An aspect is exact when its orb is strictly below this many degrees
    pub exact_threshold: f64,
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self {
            orbs: OrbSettings::default(),
            exact_threshold: 1.0,
        }
    }
}

/// An aspect between two bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    #[serde(rename = "bodyA")]
    pub body_a: Body,
    #[serde(rename = "bodyB")]
    pub body_b: Body,
    #[serde(rename = "type")]
    pub kind: AspectKind,
    /// Circular distance between the two longitudes (0-180)
    pub separation: f64,
    /// Deviation from the exact angle
    pub orb: f64,
    pub exact: bool,
    /// Whether the bodies are moving toward the exact angle
    pub applying: bool,
    /// Whether either body is retrograde
    pub retrograde: bool,
}

impl Aspect {
    pub fn involves(&self, body: Body) -> bool {
        self.body_a == body || self.body_b == body
    }

    /// The other end of the aspect, if `body` is one of its ends
    pub fn other(&self, body: Body) -> Option<Body> {
        if self.body_a == body {
            Some(self.body_b)
        } else if self.body_b == body {
            Some(self.body_a)
        } else {
            None
        }
    }

    /// Order-independent identity of the pair
    pub fn pair(&self) -> (Body, Body) {
        if self.body_a <= self.body_b {
            (self.body_a, self.body_b)
        } else {
            (self.body_b, self.body_a)
        }
    }

    pub fn exact_angle(&self) -> f64 {
        self.kind.angle()
    }
}
