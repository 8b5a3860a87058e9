use crate::western::{Body, Sign};
use serde::{Deserialize, Serialize};

/// What a stellium's members share
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StelliumKey {
    Sign(Sign),
    House(u8),
}

/// A multi-body configuration found in a chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartPattern {
    /// Three or more bodies in one sign or one house
    Stellium { key: StelliumKey, members: Vec<Body> },
    /// A body square to both ends of an opposition
    TSquare {
        apex: Body,
        opposition: (Body, Body),
        members: Vec<Body>,
    },
    /// Three bodies mutually in trine
    GrandTrine { members: Vec<Body> },
}

impl ChartPattern {
    pub fn name(&self) -> &'static str {
        match self {
            ChartPattern::Stellium { .. } => "stellium",
            ChartPattern::TSquare { .. } => "t_square",
            ChartPattern::GrandTrine { .. } => "grand_trine",
        }
    }

    /// Members in body order
    pub fn members(&self) -> &[Body] {
        match self {
            ChartPattern::Stellium { members, .. }
            | ChartPattern::TSquare { members, .. }
            | ChartPattern::GrandTrine { members } => members,
        }
    }

    pub fn contains(&self, body: Body) -> bool {
        self.members().contains(&body)
    }
}
