use futures_channel::mpsc::UnboundedSender;
use serde::{Deserialize, Serialize};

use crate::*;

/// Notifications for the rendering surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted {
        size: BoardSize,
    },
    CardStateChanged(CardStateChanged),
    MatchFound {
        cards: [CardIndex; 2],
    },
    NoMatch {
        cards: [CardIndex; 2],
    },
    GameOver {
        attempts: u32,
        elapsed_secs: u32,
    },
}

impl From<CardStateChanged> for GameEvent {
    fn from(change: CardStateChanged) -> Self {
        Self::CardStateChanged(change)
    }
}

pub trait GameObserver {
    fn notify(&mut self, event: GameEvent);
}

/// Discards everything.
impl GameObserver for () {
    fn notify(&mut self, _event: GameEvent) {}
}

/// Records events in order.
impl GameObserver for Vec<GameEvent> {
    fn notify(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl GameObserver for UnboundedSender<GameEvent> {
    fn notify(&mut self, event: GameEvent) {
        if let Err(err) = self.unbounded_send(event) {
            log::debug!("observer channel closed, dropping {:?}", err.into_inner());
        }
    }
}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn notify(&mut self, event: GameEvent) {
        (**self).notify(event);
    }
}
