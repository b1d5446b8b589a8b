use serde::{Deserialize, Serialize};

use crate::*;

/// What a player may see of one card. `face` is only present while it is showing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub index: CardIndex,
    pub state: CardState,
    pub face: Option<ImageId>,
}

/// Player-visible snapshot of a game, safe to hand to a renderer or serialize.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub size: BoardSize,
    pub cards: Vec<CardView>,
    pub status: GameStatus,
    pub accepting_input: bool,
    pub attempts: u32,
    pub matched_pairs: CellCount,
    pub total_pairs: CellCount,
    pub elapsed_secs: u32,
}

impl Observation {
    pub fn new(board: &Board, session: &GameSession, elapsed_secs: u32) -> Self {
        let cards = board
            .iter()
            .map(|card| CardView {
                index: card.index(),
                state: card.state(),
                face: card.visible_face().cloned(),
            })
            .collect();

        Self {
            size: board.size(),
            cards,
            status: session.status(),
            accepting_input: session.accepting_input(),
            attempts: session.attempts(),
            matched_pairs: session.matched_pairs(),
            total_pairs: session.total_pairs(),
            elapsed_secs,
        }
    }

    pub fn card_at(&self, coords: Coord2) -> Option<&CardView> {
        let index = self.size.index_of(coords)?;
        self.cards.get(usize::from(index))
    }

    /// Cards grouped by board row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CardView]> {
        self.cards.chunks(usize::from(self.size.width()))
    }
}
