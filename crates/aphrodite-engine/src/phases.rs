//! Bodies grouped by the element of their house triad.
//!
//! Fire = 1, 5, 9; Earth = 2, 6, 10; Air = 3, 7, 11; Water = 4, 8, 12.

use crate::ephemeris::types::BodyPosition;
use crate::western::{Body, Element};
use serde::{Deserialize, Serialize};

/// Phase order used when iterating groups
pub const PHASE_ORDER: [Element; 4] = [Element::Fire, Element::Water, Element::Earth, Element::Air];

/// Element of the house triad containing `house` (1-12)
pub fn phase_of_house(house: u8) -> Option<Element> {
    match house {
        1 | 5 | 9 => Some(Element::Fire),
        2 | 6 | 10 => Some(Element::Earth),
        3 | 7 | 11 => Some(Element::Air),
        4 | 8 | 12 => Some(Element::Water),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseMapping {
    pub fire: Vec<Body>,
    pub water: Vec<Body>,
    pub earth: Vec<Body>,
    pub air: Vec<Body>,
}

impl PhaseMapping {
    pub fn group(&self, element: Element) -> &[Body] {
        match element {
            Element::Fire => &self.fire,
            Element::Water => &self.water,
            Element::Earth => &self.earth,
            Element::Air => &self.air,
        }
    }

    fn group_mut(&mut self, element: Element) -> &mut Vec<Body> {
        match element {
            Element::Fire => &mut self.fire,
            Element::Water => &mut self.water,
            Element::Earth => &mut self.earth,
            Element::Air => &mut self.air,
        }
    }

    /// `(element, bodies)` in Fire, Water, Earth, Air order
    pub fn iter(&self) -> impl Iterator<Item = (Element, &[Body])> {
        PHASE_ORDER.into_iter().map(move |e| (e, self.group(e)))
    }
}

/// Group positions by house triad. Members keep body order.
///
/// Houses come from house assignment and are always 1-12.
pub fn map_phases(positions: &[BodyPosition]) -> PhaseMapping {
    let mut sorted: Vec<&BodyPosition> = positions.iter().collect();
    sorted.sort_by_key(|p| p.body);

    let mut mapping = PhaseMapping::default();
    for pos in sorted {
        if let Some(element) = phase_of_house(pos.house) {
            mapping.group_mut(element).push(pos.body);
        }
    }
    mapping
}
