use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::*;

/// Runs one memory game at a time over the collaborators it owns.
///
/// All state changes go through `&mut self`: [`request_reveal`](Self::request_reveal) from player input,
/// [`resolve`](Self::resolve) from the scheduler, and the lifecycle calls. The second reveal of a turn closes input
/// and schedules a resolution, and input opens again only once that resolution has run.
#[derive(Debug)]
pub struct GameController<A, C, S, O> {
    config: GameConfig,
    assets: A,
    clock: C,
    scheduler: S,
    observer: O,
    rng: SmallRng,
    board: Option<Board>,
    session: GameSession,
    generation: u32,
    pending: Option<ResolutionHandle>,
}

impl<A, C, S, O> GameController<A, C, S, O>
where
    A: AssetSource,
    C: Clock,
    S: Scheduler,
    O: GameObserver,
{
    pub fn new(config: GameConfig, seed: u64, assets: A, clock: C, scheduler: S, observer: O) -> Self {
        Self {
            config,
            assets,
            clock,
            scheduler,
            observer,
            rng: SmallRng::seed_from_u64(seed),
            board: None,
            session: GameSession::default(),
            generation: 0,
            pending: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.session.status
    }

    pub fn is_finished(&self) -> bool {
        self.session.status.is_finished()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn pending_resolution(&self) -> Option<ResolutionHandle> {
        self.pending
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.clock.elapsed_secs()
    }

    pub fn observe(&self) -> Option<Observation> {
        self.board
            .as_ref()
            .map(|board| Observation::new(board, &self.session, self.clock.elapsed_secs()))
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Deals a freshly shuffled board of `size` from the asset source.
    pub fn start_game(&mut self, size: BoardSize) -> Result<()> {
        let generator = RandomDeckGenerator::new(self.rng.random());
        self.start_game_with(size, generator)
    }

    /// Deals a board of `size` laid out by `generator`. Nothing changes if any step fails.
    pub fn start_game_with<G: DeckGenerator>(&mut self, size: BoardSize, generator: G) -> Result<()> {
        if !self.session.status.can_start() {
            return Err(GameError::GameInProgress);
        }

        let pool = self.assets.image_pool()?;
        let deck = generator.generate(size, &pool)?;
        let board = Board::from_faces(size, deck)?;

        self.reset();
        self.session = GameSession::started(board.pair_count());
        self.board = Some(board);
        self.clock.start();

        log::debug!("game {} started on a {} board", self.generation, size);
        self.observer.notify(GameEvent::GameStarted { size });
        Ok(())
    }

    /// Turns a card face up. Requests that cannot be honoured right now are ignored.
    pub fn request_reveal(&mut self, index: CardIndex) -> RevealOutcome {
        let session = &mut self.session;
        if !matches!(session.status, GameStatus::InProgress) || !session.accepting_input {
            log::trace!("ignoring reveal of {} while {:?}", index, session.status);
            return RevealOutcome::NoChange;
        }

        let Some(board) = self.board.as_mut() else {
            return RevealOutcome::NoChange;
        };
        let Some(card) = board.get_mut(index) else {
            log::warn!("ignoring reveal of {}, board has {} cards", index, board.len());
            return RevealOutcome::NoChange;
        };
        let Some(change) = card.reveal() else {
            log::trace!("ignoring reveal of {}, card is {:?}", index, card.state());
            return RevealOutcome::NoChange;
        };

        self.observer.notify(change.into());
        session.revealed.push(index);
        if session.revealed.len() < 2 {
            return RevealOutcome::Revealed;
        }

        session.accepting_input = false;
        session.status = GameStatus::Resolving;
        session.attempts += 1;
        for card in board.iter_mut() {
            if let Some(change) = card.lock() {
                self.observer.notify(change.into());
            }
        }

        let handle = ResolutionHandle::new(self.generation, session.attempts);
        self.pending = Some(handle);
        self.scheduler.schedule(handle, self.config.resolve_delay());
        log::debug!("attempt {} pending as {:?}", session.attempts, session.revealed);

        RevealOutcome::Scheduled(handle)
    }

    /// Compares the two revealed cards. Handles that are not the pending one are ignored.
    pub fn resolve(&mut self, handle: ResolutionHandle) -> ResolveOutcome {
        if self.pending != Some(handle) {
            log::debug!("ignoring stale resolution {:?}", handle);
            return ResolveOutcome::Stale;
        }
        let (Some(board), &[first, second]) = (self.board.as_mut(), self.session.revealed.as_slice())
        else {
            return ResolveOutcome::Stale;
        };
        self.pending = None;

        let cards = [first, second];
        let is_match = match (board.get(first), board.get(second)) {
            (Some(a), Some(b)) => evaluate(a, b).is_match,
            _ => false,
        };

        let session = &mut self.session;
        for index in cards {
            let change = board.get_mut(index).and_then(|card| {
                if is_match {
                    card.mark_matched()
                } else {
                    card.hide()
                }
            });
            if let Some(change) = change {
                self.observer.notify(change.into());
            }
        }
        if is_match {
            session.matched_pairs += 1;
            self.observer.notify(GameEvent::MatchFound { cards });
        } else {
            self.observer.notify(GameEvent::NoMatch { cards });
        }
        session.revealed.clear();

        if session.is_cleared() {
            session.status = GameStatus::Complete;
            let elapsed_secs = self.clock.stop();
            log::debug!(
                "game {} complete after {} attempts in {}s",
                self.generation,
                session.attempts,
                elapsed_secs
            );
            self.observer.notify(GameEvent::GameOver {
                attempts: session.attempts,
                elapsed_secs,
            });
            return ResolveOutcome::Completed;
        }

        for card in board.iter_mut() {
            if let Some(change) = card.unlock() {
                self.observer.notify(change.into());
            }
        }
        session.accepting_input = true;
        session.status = GameStatus::InProgress;

        if is_match {
            ResolveOutcome::Matched
        } else {
            ResolveOutcome::Mismatched
        }
    }

    /// Clears a finished game so a new one can be started.
    pub fn restart(&mut self) -> Result<()> {
        match self.session.status {
            GameStatus::NotStarted => Ok(()),
            GameStatus::Complete => {
                log::debug!("game {} cleared", self.generation);
                self.reset();
                Ok(())
            }
            GameStatus::InProgress | GameStatus::Resolving => Err(GameError::GameInProgress),
        }
    }

    /// Throws away the current game whatever its state. Returns whether there was one.
    pub fn abandon(&mut self) -> bool {
        let had_game = self.board.is_some();
        if had_game {
            log::debug!("game {} abandoned while {:?}", self.generation, self.session.status);
        }
        self.reset();
        had_game
    }

    fn reset(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        if self.clock.is_running() {
            self.clock.stop();
        }
        self.generation = self.generation.wrapping_add(1);
        self.board = None;
        self.session = GameSession::default();
    }
}
