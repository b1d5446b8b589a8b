use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    /// Two cards are showing and their comparison is pending.
    Resolving,
    Complete,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Complete)
    }

    /// A new board can be dealt from this state.
    pub const fn can_start(self) -> bool {
        matches!(self, Self::NotStarted | Self::Complete)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Counters and turn state of one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) attempts: u32,
    pub(crate) matched_pairs: CellCount,
    pub(crate) total_pairs: CellCount,
    pub(crate) revealed: SmallVec<[CardIndex; 2]>,
    pub(crate) accepting_input: bool,
    pub(crate) status: GameStatus,
}

impl GameSession {
    pub(crate) fn started(total_pairs: CellCount) -> Self {
        Self {
            total_pairs,
            accepting_input: true,
            status: GameStatus::InProgress,
            ..Self::default()
        }
    }

    /// Completed two-card comparisons, matched or not.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn matched_pairs(&self) -> CellCount {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> CellCount {
        self.total_pairs
    }

    pub fn pairs_left(&self) -> CellCount {
        self.total_pairs - self.matched_pairs
    }

    /// Cards currently face up and waiting to be compared, in reveal order.
    pub fn revealed(&self) -> &[CardIndex] {
        &self.revealed
    }

    pub fn accepting_input(&self) -> bool {
        self.accepting_input
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub(crate) fn is_cleared(&self) -> bool {
        self.total_pairs > 0 && self.matched_pairs == self.total_pairs
    }
}
