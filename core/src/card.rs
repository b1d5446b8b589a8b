use serde::{Deserialize, Serialize};

use crate::*;

/// Flip state of a single card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    FaceDown,
    Revealed,
    Matched,
    /// Face down and temporarily refusing input while a pair is resolved.
    Locked,
}

impl CardState {
    pub const fn shows_face(self) -> bool {
        matches!(self, Self::Revealed | Self::Matched)
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::FaceDown
    }
}

/// Notification produced by every card transition.
///
/// `face` is only filled in when the new state shows the card face.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStateChanged {
    pub index: CardIndex,
    pub state: CardState,
    pub face: Option<ImageId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    index: CardIndex,
    face: ImageId,
    state: CardState,
}

impl Card {
    pub fn new(index: CardIndex, face: ImageId) -> Self {
        Self {
            index,
            face,
            state: CardState::default(),
        }
    }

    pub fn index(&self) -> CardIndex {
        self.index
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn is_matched(&self) -> bool {
        matches!(self.state, CardState::Matched)
    }

    /// The face image, but only while it is showing.
    pub fn visible_face(&self) -> Option<&ImageId> {
        self.state.shows_face().then_some(&self.face)
    }

    pub(crate) fn face(&self) -> &ImageId {
        &self.face
    }

    pub(crate) fn reveal(&mut self) -> Option<CardStateChanged> {
        self.transition(CardState::FaceDown, CardState::Revealed)
    }

    pub(crate) fn hide(&mut self) -> Option<CardStateChanged> {
        self.transition(CardState::Revealed, CardState::FaceDown)
    }

    pub(crate) fn mark_matched(&mut self) -> Option<CardStateChanged> {
        self.transition(CardState::Revealed, CardState::Matched)
    }

    pub(crate) fn lock(&mut self) -> Option<CardStateChanged> {
        self.transition(CardState::FaceDown, CardState::Locked)
    }

    pub(crate) fn unlock(&mut self) -> Option<CardStateChanged> {
        self.transition(CardState::Locked, CardState::FaceDown)
    }

    fn transition(&mut self, from: CardState, to: CardState) -> Option<CardStateChanged> {
        if self.state != from {
            return None;
        }
        self.state = to;
        Some(CardStateChanged {
            index: self.index,
            state: to,
            face: self.visible_face().cloned(),
        })
    }
}
