use super::*;
use crate::data::UNITS;
use crate::stats::Tally;

/// Row behind one unit card on the menu.
pub struct UnitCard {
    pub id: u32,
    pub title: &'static str,
    pub badge: &'static str,
    pub tally: Tally,
}

impl QuizApp {
    pub fn unit_cards(&self) -> Vec<UnitCard> {
        UNITS
            .iter()
            .map(|u| UnitCard {
                id: u.id,
                title: u.title,
                badge: u.badge,
                tally: self.stats.unit_tally(u.id),
            })
            .collect()
    }
}
