use std::fmt::Write;

use memorama_core::{CardState, CardView, GameEvent, GameObserver, GameStatus, Observation};

/// Prints the headline events of a game as they happen.
#[derive(Debug, Default)]
pub struct EventPrinter;

impl GameObserver for EventPrinter {
    fn notify(&mut self, event: GameEvent) {
        match event {
            GameEvent::GameStarted { size } => println!("New {size} game, {} pairs to find.", size.pair_count()),
            GameEvent::MatchFound { cards: [a, b] } => println!("Cards {a} and {b} match!"),
            GameEvent::NoMatch { cards: [a, b] } => println!("Cards {a} and {b} do not match."),
            GameEvent::GameOver {
                attempts,
                elapsed_secs,
            } => println!("Board cleared in {attempts} attempts and {elapsed_secs}s."),
            GameEvent::CardStateChanged(change) => log::trace!("{change:?}"),
        }
    }
}

fn label(card: &CardView) -> String {
    match (card.state, &card.face) {
        (CardState::Matched, Some(face)) => format!("({face})"),
        (_, Some(face)) => face.to_string(),
        (CardState::Locked, None) => format!("#{}", card.index),
        (_, None) => card.index.to_string(),
    }
}

/// Draws the grid followed by a status line.
pub fn render(obs: &Observation) -> String {
    let labels: Vec<String> = obs.cards.iter().map(label).collect();
    let width = labels.iter().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for row in labels.chunks(usize::from(obs.size.width())) {
        let cells: Vec<String> = row.iter().map(|label| format!("[{label:^width$}]")).collect();
        let _ = writeln!(out, "{}", cells.join(" "));
    }

    let state = match obs.status {
        GameStatus::NotStarted => "not started",
        GameStatus::InProgress => "your turn",
        GameStatus::Resolving => "checking",
        GameStatus::Complete => "complete",
    };
    let _ = write!(
        out,
        "{state} | attempts {} | pairs {}/{} | {}s",
        obs.attempts, obs.matched_pairs, obs.total_pairs, obs.elapsed_secs
    );
    out
}
