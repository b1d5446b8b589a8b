//! Memory matching card game engine: a grid of face-down cards hiding pairs of images, revealed two at a time.

use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use assets::*;
pub use board::*;
pub use card::*;
pub use clock::*;
pub use engine::*;
pub use error::*;
pub use events::*;
pub use generator::*;
pub use matcher::*;
pub use observation::*;
pub use scheduler::*;
pub use session::*;
pub use types::*;

mod assets;
mod board;
mod card;
mod clock;
mod engine;
mod error;
mod events;
mod generator;
mod matcher;
mod observation;
mod scheduler;
mod session;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: BoardSize,
    /// How long a pair stays face up before it is compared.
    pub resolve_delay_ms: u32,
}

impl GameConfig {
    pub const DEFAULT_RESOLVE_DELAY_MS: u32 = 500;

    pub const fn new(size: BoardSize, resolve_delay_ms: u32) -> Self {
        Self {
            size,
            resolve_delay_ms,
        }
    }

    pub const fn resolve_delay(&self) -> Duration {
        Duration::from_millis(self.resolve_delay_ms as u64)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(BoardSize::MEDIUM, Self::DEFAULT_RESOLVE_DELAY_MS)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// First card of the turn is showing.
    Revealed,
    /// Second card is showing, input is closed until `handle` resolves.
    Scheduled(ResolutionHandle),
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Not the pending resolution, nothing happened.
    Stale,
    Mismatched,
    Matched,
    /// The last pair was matched.
    Completed,
}

impl ResolveOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Stale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_reads_partial_documents() {
        let config: GameConfig = serde_json::from_str(r#"{"resolve_delay_ms":250}"#).unwrap();

        assert_eq!(config.size, BoardSize::MEDIUM);
        assert_eq!(config.resolve_delay(), Duration::from_millis(250));
        assert_eq!(
            GameConfig::default().resolve_delay(),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn outcomes_report_updates() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::Revealed.has_update());
        assert!(!ResolveOutcome::Stale.has_update());
        assert!(ResolveOutcome::Completed.has_update());
    }
}
