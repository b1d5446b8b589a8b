use core::time::Duration;

use memorama_core::*;

type Controller = GameController<ImagePool, ManualClock, TimerQueue, Vec<GameEvent>>;

fn controller(config: GameConfig) -> Controller {
    GameController::new(
        config,
        7,
        ImagePool::default(),
        ManualClock::new(),
        TimerQueue::new(),
        Vec::new(),
    )
}

/// Lets virtual time run until every due resolution has fired.
fn settle(ctrl: &mut Controller) -> Vec<ResolveOutcome> {
    let mut outcomes = Vec::new();
    while let Some(wait) = ctrl.scheduler().next_due_in() {
        for handle in ctrl.scheduler_mut().advance(wait) {
            outcomes.push(ctrl.resolve(handle));
        }
    }
    outcomes
}

fn card_states(ctrl: &Controller) -> Vec<CardState> {
    ctrl.board().unwrap().iter().map(Card::state).collect()
}

#[test]
fn two_by_two_game_plays_to_completion() {
    use CardState::*;

    let mut ctrl = controller(GameConfig::default());
    ctrl.start_game_with(BoardSize::SMALL, FixedDeck::new(["A", "A", "B", "B"]))
        .unwrap();

    assert_eq!(ctrl.request_reveal(0), RevealOutcome::Revealed);
    assert!(matches!(ctrl.request_reveal(1), RevealOutcome::Scheduled(_)));
    assert_eq!(card_states(&ctrl), [Revealed, Revealed, Locked, Locked]);

    assert_eq!(settle(&mut ctrl), [ResolveOutcome::Matched]);
    assert_eq!(card_states(&ctrl), [Matched, Matched, FaceDown, FaceDown]);
    assert_eq!(ctrl.session().matched_pairs(), 1);

    ctrl.clock_mut().advance(3);
    ctrl.request_reveal(2);
    ctrl.request_reveal(3);
    assert_eq!(settle(&mut ctrl), [ResolveOutcome::Completed]);

    assert_eq!(ctrl.status(), GameStatus::Complete);
    assert_eq!(ctrl.session().attempts(), 2);
    assert_eq!(card_states(&ctrl), [Matched; 4]);
    assert_eq!(
        ctrl.observer().last(),
        Some(&GameEvent::GameOver {
            attempts: 2,
            elapsed_secs: 3
        })
    );
}

#[test]
fn mismatch_hides_both_cards_after_the_delay() {
    let mut ctrl = controller(GameConfig::new(BoardSize::SMALL, 1000));
    ctrl.start_game_with(BoardSize::SMALL, FixedDeck::new(["A", "B", "A", "B"]))
        .unwrap();

    ctrl.request_reveal(0);
    ctrl.request_reveal(1);

    assert!(ctrl.scheduler_mut().advance(Duration::from_millis(999)).is_empty());
    assert_eq!(ctrl.status(), GameStatus::Resolving);

    let due = ctrl.scheduler_mut().advance(Duration::from_millis(1));
    assert_eq!(due.len(), 1);
    assert_eq!(ctrl.resolve(due[0]), ResolveOutcome::Mismatched);

    assert_eq!(card_states(&ctrl), [CardState::FaceDown; 4]);
    assert_eq!(ctrl.session().attempts(), 1);
    assert_eq!(ctrl.status(), GameStatus::InProgress);
    assert!(ctrl.observer().contains(&GameEvent::NoMatch { cards: [0, 1] }));
}

#[test]
fn reveal_sequence_emits_card_events_in_order() {
    let mut ctrl = controller(GameConfig::default());
    ctrl.start_game_with(BoardSize::SMALL, FixedDeck::new(["A", "B", "A", "B"]))
        .unwrap();
    ctrl.observer_mut().clear();

    ctrl.request_reveal(3);
    ctrl.request_reveal(1);
    settle(&mut ctrl);

    let changes: Vec<(CardIndex, CardState)> = ctrl
        .observer()
        .iter()
        .filter_map(|event| match event {
            GameEvent::CardStateChanged(change) => Some((change.index, change.state)),
            _ => None,
        })
        .collect();

    assert_eq!(
        changes,
        [
            (3, CardState::Revealed),
            (1, CardState::Revealed),
            (0, CardState::Locked),
            (2, CardState::Locked),
            (3, CardState::Matched),
            (1, CardState::Matched),
            (0, CardState::FaceDown),
            (2, CardState::FaceDown),
        ]
    );
}

#[test]
fn abandoned_game_ignores_its_late_resolution() {
    let mut ctrl = controller(GameConfig::default());
    ctrl.start_game_with(BoardSize::SMALL, FixedDeck::new(["A", "A", "B", "B"]))
        .unwrap();
    ctrl.request_reveal(0);
    let RevealOutcome::Scheduled(late) = ctrl.request_reveal(1) else {
        panic!("expected a scheduled resolution");
    };

    ctrl.abandon();
    ctrl.start_game_with(BoardSize::SMALL, FixedDeck::new(["A", "A", "B", "B"]))
        .unwrap();
    ctrl.request_reveal(0);
    let RevealOutcome::Scheduled(current) = ctrl.request_reveal(1) else {
        panic!("expected a scheduled resolution");
    };

    assert_ne!(late, current);
    assert_eq!(ctrl.resolve(late), ResolveOutcome::Stale);
    assert_eq!(ctrl.status(), GameStatus::Resolving);
    assert_eq!(ctrl.resolve(current), ResolveOutcome::Matched);
    assert_eq!(ctrl.resolve(current), ResolveOutcome::Stale);
    assert_eq!(ctrl.session().matched_pairs(), 1);
}

#[test]
fn finished_game_ignores_input_until_restarted() {
    let mut ctrl = controller(GameConfig::default());
    ctrl.start_game_with(BoardSize::SMALL, FixedDeck::new(["A", "A", "B", "B"]))
        .unwrap();
    for index in 0..4 {
        ctrl.request_reveal(index);
        settle(&mut ctrl);
    }
    assert!(ctrl.is_finished());
    let events = ctrl.observer().len();

    assert_eq!(ctrl.request_reveal(0), RevealOutcome::NoChange);
    assert_eq!(ctrl.observer().len(), events);

    ctrl.start_game(BoardSize::MEDIUM).unwrap();
    assert_eq!(ctrl.status(), GameStatus::InProgress);
    assert_eq!(ctrl.session().attempts(), 0);
    assert_eq!(ctrl.board().unwrap().len(), 8);
}

#[test]
fn rejected_decks_leave_no_trace() {
    let mut ctrl = controller(GameConfig::default());

    assert_eq!(
        ctrl.start_game_with(BoardSize::SMALL, FixedDeck::new(["A", "A", "A", "B"])),
        Err(GameError::InvalidDeck)
    );
    assert_eq!(
        ctrl.start_game_with(BoardSize::MEDIUM, FixedDeck::new(["A", "A", "B", "B"])),
        Err(GameError::InvalidDeck)
    );

    assert_eq!(ctrl.status(), GameStatus::NotStarted);
    assert!(ctrl.board().is_none());
    assert!(ctrl.observer().is_empty());
}

#[test]
fn seeded_controllers_deal_identical_boards() {
    let faces = |seed| {
        let mut ctrl = GameController::new(
            GameConfig::default(),
            seed,
            ImagePool::default(),
            ManualClock::new(),
            TimerQueue::new(),
            (),
        );
        ctrl.start_game(BoardSize::LARGE).unwrap();
        ctrl.request_reveal(0);
        ctrl.observe().unwrap().cards[0].face.clone()
    };

    assert_eq!(faces(99), faces(99));
}

#[test]
fn observation_tracks_the_session() {
    let mut ctrl = controller(GameConfig::default());
    ctrl.start_game_with(BoardSize::SMALL, FixedDeck::new(["A", "B", "B", "A"]))
        .unwrap();
    ctrl.request_reveal(1);
    ctrl.request_reveal(2);

    let obs = ctrl.observe().unwrap();
    assert_eq!(obs.status, GameStatus::Resolving);
    assert!(!obs.accepting_input);
    assert_eq!(obs.attempts, 1);
    assert_eq!(obs.card_at((0, 1)).unwrap().face, Some(ImageId::from("B")));
    assert_eq!(obs.card_at((0, 0)).unwrap().face, None);
}

#[test]
fn serialized_view_hides_face_down_cards() {
    let mut ctrl = controller(GameConfig::default());
    ctrl.start_game_with(
        BoardSize::SMALL,
        FixedDeck::new(["hidden_a", "hidden_a", "hidden_b", "hidden_b"]),
    )
    .unwrap();
    ctrl.request_reveal(2);

    let json = serde_json::to_string(&ctrl.observe().unwrap()).unwrap();

    assert!(!json.contains("hidden_a"), "{json}");
    assert_eq!(json.matches("hidden_b").count(), 1, "{json}");
}
