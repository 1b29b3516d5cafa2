use bevy_reflect::Reflect;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::constants::{DEFAULT_CONTAINER_HEIGHT, DEFAULT_CONTAINER_WIDTH, DEFAULT_PLAYERS};
use crate::decks::deck;
use crate::layout::{deal_layout, start_layout};
use crate::positions::PositionMap;
use crate::projection::{to_pixels, PixelPosition};

/// Overall state of the table: cards still stacked at the center, or dealt
/// out to the seats.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Reflect)]
pub enum GamePhase {
    #[default]
    Start,
    Deal,
}

/// Owns the deck and the current layout parameters and keeps the derived
/// [PositionMap] in sync with them.
///
/// Every parameter change recomputes the whole map from the pure layout
/// functions, so the map never depends on the order of earlier changes,
/// only on the current parameter values.  Callers hold one `CardTable` per
/// rendered table and re-read [CardTable::positions] after each change.
pub struct CardTable {
    deck: Vec<Card>,
    phase: GamePhase,
    num_players: usize,
    overlap: bool,
    container_width: f32,
    container_height: f32,
    positions: PositionMap,
}

impl CardTable {
    pub fn new() -> Self {
        let mut table = Self {
            deck: deck(),
            phase: GamePhase::default(),
            num_players: DEFAULT_PLAYERS,
            overlap: false,
            container_width: DEFAULT_CONTAINER_WIDTH,
            container_height: DEFAULT_CONTAINER_HEIGHT,
            positions: PositionMap::new(),
        };
        table.recompute();
        table
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn num_players(&self) -> usize {
        self.num_players
    }

    pub fn overlap(&self) -> bool {
        self.overlap
    }

    pub fn container(&self) -> (f32, f32) {
        (self.container_width, self.container_height)
    }

    /// Current position map, one entry per card of the deck.
    pub fn positions(&self) -> &PositionMap {
        &self.positions
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            self.phase = phase;
            self.recompute();
        }
    }

    /// Switches between the start and deal phases.
    pub fn toggle_phase(&mut self) {
        self.set_phase(match self.phase {
            GamePhase::Start => GamePhase::Deal,
            GamePhase::Deal => GamePhase::Start,
        });
    }

    pub fn set_num_players(&mut self, num_players: usize) {
        if self.num_players != num_players {
            self.num_players = num_players;
            self.recompute();
        }
    }

    pub fn set_overlap(&mut self, overlap: bool) {
        if self.overlap != overlap {
            self.overlap = overlap;
            self.recompute();
        }
    }

    /// Updates the live container size.  Deal phase spacing depends on the
    /// container, so the map is recomputed in addition to affecting later
    /// projections.
    pub fn resize(&mut self, width: f32, height: f32) {
        if (self.container_width, self.container_height) != (width, height) {
            self.container_width = width;
            self.container_height = height;
            self.recompute();
        }
    }

    /// Projects a card into pixel space using the live container size.
    /// Returns `None` only for ids that do not belong to the deck.
    pub fn pixel_position(&self, card_id: &str) -> Option<PixelPosition> {
        self.positions
            .get(card_id)
            .map(|position| to_pixels(position, self.container_width, self.container_height))
    }

    fn recompute(&mut self) {
        self.positions = match self.phase {
            GamePhase::Start => start_layout(&self.deck),
            GamePhase::Deal => deal_layout(
                &self.deck,
                self.num_players,
                self.container_width,
                self.container_height,
                self.overlap,
            ),
        };
    }
}

impl Default for CardTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{CardTable, GamePhase};
    use crate::constants::{DRAW_PILE_Z_BASE, SHOWN_Z_BASE};

    #[test]
    fn test_new_table_defaults() {
        let table = CardTable::new();
        assert_eq!(table.phase(), GamePhase::Start);
        assert_eq!(table.num_players(), 4);
        assert!(!table.overlap());
        assert_eq!(table.container(), (800., 600.));
        assert_eq!(table.positions().len(), 52);
    }

    #[test]
    fn test_toggle_phase_deals_and_collects() {
        let mut table = CardTable::new();
        table.toggle_phase();
        assert_eq!(table.phase(), GamePhase::Deal);
        let shown_band = SHOWN_Z_BASE..DRAW_PILE_Z_BASE;
        assert!(table
            .positions()
            .values()
            .any(|position| shown_band.contains(&position.z_order)));

        table.toggle_phase();
        assert_eq!(table.phase(), GamePhase::Start);
        assert!(table
            .positions()
            .values()
            .all(|position| position.z_order < SHOWN_Z_BASE && !position.face_up));
    }

    #[test]
    fn test_unchanged_parameters_keep_the_map() {
        let mut table = CardTable::new();
        table.set_phase(GamePhase::Deal);
        let before = table.positions().clone();

        table.set_phase(GamePhase::Deal);
        table.set_num_players(4);
        table.set_overlap(false);
        table.resize(800., 600.);
        assert_eq!(*table.positions(), before);
    }

    #[test]
    fn test_resize_respaces_dealt_cards() {
        let mut table = CardTable::new();
        table.set_phase(GamePhase::Deal);
        let before = table.positions().clone();

        table.resize(1600., 1200.);
        assert_eq!(table.positions().len(), 52);
        assert_ne!(*table.positions(), before);
    }

    #[test]
    fn test_pixel_position_lookup() {
        let table = CardTable::new();
        let id = table.deck()[0].id();

        let pixels = table.pixel_position(&id).unwrap();
        assert!((pixels.left - 360.).abs() < 1e-3);
        assert!((pixels.top - 236.).abs() < 1e-3);

        assert!(table.pixel_position("jokers-1").is_none());
    }
}
