//! Zodiac signs and their element / modality classification.

use crate::geometry;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];

    pub fn name(self) -> &'static str {
        match self {
            Modality::Cardinal => "cardinal",
            Modality::Fixed => "fixed",
            Modality::Mutable => "mutable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

// (sign, slug, element, modality) in zodiacal order
const SIGN_TABLE: [(Sign, &str, Element, Modality); 12] = [
    (Sign::Aries, "aries", Element::Fire, Modality::Cardinal),
    (Sign::Taurus, "taurus", Element::Earth, Modality::Fixed),
    (Sign::Gemini, "gemini", Element::Air, Modality::Mutable),
    (Sign::Cancer, "cancer", Element::Water, Modality::Cardinal),
    (Sign::Leo, "leo", Element::Fire, Modality::Fixed),
    (Sign::Virgo, "virgo", Element::Earth, Modality::Mutable),
    (Sign::Libra, "libra", Element::Air, Modality::Cardinal),
    (Sign::Scorpio, "scorpio", Element::Water, Modality::Fixed),
    (Sign::Sagittarius, "sagittarius", Element::Fire, Modality::Mutable),
    (Sign::Capricorn, "capricorn", Element::Earth, Modality::Cardinal),
    (Sign::Aquarius, "aquarius", Element::Air, Modality::Fixed),
    (Sign::Pisces, "pisces", Element::Water, Modality::Mutable),
];

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Sign from its index (0 = Aries). Indices wrap modulo 12.
    pub fn from_index(index: u8) -> Sign {
        SIGN_TABLE[(index % 12) as usize].0
    }

    /// Sign containing the given longitude
    pub fn from_longitude(longitude: f64) -> Sign {
        Sign::from_index(geometry::sign_index(longitude))
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        SIGN_TABLE[self as usize].1
    }

    pub fn element(self) -> Element {
        SIGN_TABLE[self as usize].2
    }

    pub fn modality(self) -> Modality {
        SIGN_TABLE[self as usize].3
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
