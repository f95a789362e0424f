//! Turn controller behavior against recording collaborators.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strictly_versus::{
    Cue, Event, Mark, MemoryScoreStore, Outcome, Position, RecordingFrontend, RoundPhase,
    RoundSettings, ScheduledTask, Score, Severity, TimerCommand, TimerKind, TurnController,
    VirtualClock, drive, random_empty_cell,
};

type Controller = TurnController<RecordingFrontend, MemoryScoreStore>;

fn controller(seed: u64, frontend: RecordingFrontend, score: Score) -> Controller {
    TurnController::new(
        frontend,
        MemoryScoreStore::new(score),
        RoundSettings::default(),
        ChaCha8Rng::seed_from_u64(seed),
    )
}

/// First seed whose opening coin flip lands on `player_opens`.
fn seed_where(player_opens: bool) -> u64 {
    (0..)
        .find(|seed| {
            let mut probe = controller(*seed, RecordingFrontend::new(), Score::default());
            probe.start();
            probe.state().is_player_turn() == player_opens
        })
        .unwrap()
}

/// Started controller waiting on the player's first click.
fn player_opens(frontend: RecordingFrontend) -> Controller {
    let mut controller = controller(seed_where(true), frontend, Score::default());
    let commands = controller.start();
    assert!(commands.is_empty());
    controller
}

fn scheduled(commands: &[TimerCommand]) -> Vec<ScheduledTask> {
    commands
        .iter()
        .filter_map(|command| match command {
            TimerCommand::Schedule(task) => Some(*task),
            TimerCommand::CancelAll => None,
        })
        .collect()
}

#[test]
fn test_opening_exchange_leaves_two_marks() {
    let mut controller = player_opens(RecordingFrontend::new());
    assert_eq!(
        controller.frontend().last_message().unwrap().text,
        "You begin this round."
    );

    let commands = controller.dispatch(Event::CellClicked(Position::TopLeft));
    assert_eq!(controller.state().phase(), RoundPhase::ComputerThinking);
    let tasks = scheduled(&commands);
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].kind, TimerKind::ComputerMove);

    let commands = controller.dispatch(Event::Timer(tasks[0].fired()));
    assert!(commands.is_empty());
    assert_eq!(controller.frontend().mark_count(), 2);
    assert_eq!(controller.state().board().count(Mark::Player), 1);
    assert_eq!(controller.state().board().count(Mark::Computer), 1);
    assert!(controller.state().outcome().is_none());
    assert!(controller.state().is_player_turn());
    assert_eq!(controller.frontend().marks()[0], Some(Mark::Player));
    assert_eq!(controller.frontend().active_side(), Some(Mark::Player));

    let taunt = controller.frontend().last_message().unwrap();
    assert_eq!(taunt.severity, Severity::Flavor);
    assert!(taunt.text.starts_with("🖥️ Computer: "));
    assert_eq!(
        controller.frontend().cues(),
        &[Cue::Click, Cue::PlayerTurnStart]
    );
}

#[test]
fn test_computer_opening_waits_for_timer() {
    let mut controller = controller(seed_where(false), RecordingFrontend::new(), Score::default());
    let tasks = scheduled(&controller.start());
    assert_eq!(tasks.len(), 1);
    assert_eq!(
        controller.frontend().last_message().unwrap().text,
        "The computer begins this round."
    );

    let before = controller.state().clone();
    controller.dispatch(Event::CellClicked(Position::Center));
    assert_eq!(controller.state(), &before);
    assert_eq!(controller.frontend().cues(), &[Cue::InvalidAction]);
    let warning = controller.frontend().last_message().unwrap();
    assert_eq!(warning.text, "⛔ It's not your turn yet.");
    assert_eq!(warning.severity, Severity::Warning);

    controller.dispatch(Event::Timer(tasks[0].fired()));
    assert_eq!(controller.frontend().mark_count(), 1);
    assert!(controller.state().is_player_turn());
}

#[test]
fn test_occupied_cell_rejected() {
    let mut controller = player_opens(RecordingFrontend::new());
    let tasks = scheduled(&controller.dispatch(Event::CellClicked(Position::Center)));
    controller.dispatch(Event::Timer(tasks[0].fired()));
    controller.frontend_mut().clear_log();

    let before = controller.state().clone();
    let commands = controller.dispatch(Event::CellClicked(Position::Center));
    assert!(commands.is_empty());
    assert_eq!(controller.state(), &before);
    assert_eq!(controller.frontend().cues(), &[Cue::InvalidAction]);
    assert_eq!(
        controller.frontend().last_message().unwrap().text,
        "⛔ Someone (or something!!?) played this cell already."
    );
}

#[test]
fn test_stale_timer_after_hard_reset_ignored() {
    let mut controller = player_opens(RecordingFrontend::new());
    let old_round = controller.state().round();
    let tasks = scheduled(&controller.dispatch(Event::CellClicked(Position::Center)));

    let commands = controller.dispatch(Event::HardReset);
    assert_eq!(commands.first(), Some(&TimerCommand::CancelAll));
    assert_eq!(controller.state().round(), old_round + 1);
    assert_eq!(controller.frontend().mark_count(), 0);

    let before = controller.state().clone();
    controller.frontend_mut().clear_log();
    let commands = controller.dispatch(Event::Timer(tasks[0].fired()));
    assert!(commands.is_empty());
    assert_eq!(controller.state(), &before);
    assert!(controller.frontend().cues().is_empty());
    assert!(controller.frontend().messages().is_empty());
}

#[test]
fn test_hard_reset_zeroes_score() {
    let mut controller = controller(5, RecordingFrontend::new(), Score::new(3, 4, 1));
    controller.start();
    assert_eq!(controller.frontend().score(), Some(Score::new(3, 4, 1)));
    controller.dispatch(Event::ToggleMode);

    controller.dispatch(Event::HardReset);
    assert_eq!(controller.state().score(), Score::default());
    assert_eq!(controller.frontend().score(), Some(Score::default()));
    assert_eq!(controller.persistence().score(), Score::default());
    assert!(controller.state().computer_smart());
}

#[test]
fn test_toggle_mode() {
    let mut controller = player_opens(RecordingFrontend::new());
    assert!(controller.state().computer_smart());

    controller.dispatch(Event::ToggleMode);
    assert!(!controller.state().computer_smart());
    assert_eq!(
        controller.frontend().last_message().unwrap().text,
        "🎲 The computer will now play randomly."
    );

    controller.dispatch(Event::ToggleMode);
    assert!(controller.state().computer_smart());
    assert_eq!(
        controller.frontend().last_message().unwrap().text,
        "☢️ The computer will now use high-tech algorithms."
    );
    assert_eq!(
        controller.frontend().cues(),
        &[Cue::ModeToggle, Cue::ModeToggle]
    );
}

#[test]
fn test_audio_failure_does_not_stop_play() {
    let mut controller = player_opens(RecordingFrontend::with_failing_audio());
    let tasks = scheduled(&controller.dispatch(Event::CellClicked(Position::TopLeft)));
    assert_eq!(tasks.len(), 1);
    controller.dispatch(Event::Timer(tasks[0].fired()));
    assert_eq!(controller.frontend().mark_count(), 2);
    assert_eq!(controller.frontend().cues().len(), 2);
}

#[test]
fn test_finished_round_is_scored_and_saved() {
    let mut controller = controller(11, RecordingFrontend::new(), Score::default());
    let mut clock = VirtualClock::new();
    let mut bot = ChaCha8Rng::seed_from_u64(12);
    drive(&mut controller, &mut clock, 1, |board| {
        random_empty_cell(board, &mut bot)
    })
    .unwrap();

    let state = controller.state();
    assert_eq!(state.phase(), RoundPhase::RoundEnded);
    assert_eq!(state.score().rounds(), 1);
    assert!(state.outcome().is_some());
    assert_eq!(controller.persistence().score(), state.score());
    assert_eq!(controller.persistence().saves(), 1);
    assert_eq!(controller.frontend().score(), Some(state.score()));

    let expected = match state.outcome().unwrap().winner() {
        Some(Mark::Player) => Cue::Win,
        Some(Mark::Computer) => Cue::Lose,
        None => Cue::Tie,
    };
    assert!(controller.frontend().cues().contains(&expected));
}

#[test]
fn test_clicks_ignored_after_round_end_until_reset() {
    let mut controller = controller(21, RecordingFrontend::new(), Score::default());
    let mut clock = VirtualClock::new();
    let mut bot = ChaCha8Rng::seed_from_u64(22);
    drive(&mut controller, &mut clock, 1, |board| {
        random_empty_cell(board, &mut bot)
    })
    .unwrap();
    let round = controller.state().round();

    let empty = controller.state().board().empty_positions();
    if let Some(pos) = empty.first() {
        let before = controller.state().clone();
        controller.dispatch(Event::CellClicked(*pos));
        assert_eq!(controller.state(), &before);
    }

    let fired = clock.advance().unwrap();
    assert_eq!(fired.kind, TimerKind::ResetRound);
    let commands = controller.dispatch(Event::Timer(fired));
    clock.apply(commands);
    assert_eq!(controller.state().round(), round + 1);
    assert_eq!(controller.state().board().empty_positions().len(), 9);
    assert_eq!(controller.frontend().mark_count(), 0);
    assert!(controller.frontend().highlighted().is_empty());
}

#[test]
fn test_toggled_mode_and_score_survive_round_reset() {
    let mut controller = controller(31, RecordingFrontend::new(), Score::default());
    let mut clock = VirtualClock::new();
    clock.apply(controller.start());
    controller.dispatch(Event::ToggleMode);
    let mut bot = ChaCha8Rng::seed_from_u64(32);
    let mut wins = 0;

    for played in 1..=20u64 {
        drive(&mut controller, &mut clock, 1, |board| {
            random_empty_cell(board, &mut bot)
        })
        .unwrap();
        let ended = controller.state().clone();
        assert_eq!(ended.score().rounds(), played);

        let frontend = controller.frontend();
        for pos in Position::ALL {
            assert_eq!(
                frontend.marks()[pos.to_index()],
                ended.board().get_cell(pos).mark()
            );
        }
        let occupied = ended.board().cells().iter().filter(|cell| cell.mark().is_some());
        assert_eq!(occupied.count(), frontend.mark_count());
        match ended.outcome().unwrap() {
            Outcome::Won { pattern, .. } => {
                assert_eq!(frontend.highlighted(), pattern.positions().as_slice());
                wins += 1;
            }
            outcome => assert!(outcome.is_tie()),
        }

        let fired = clock.advance().unwrap();
        assert_eq!(fired.kind, TimerKind::ResetRound);
        clock.apply(controller.dispatch(Event::Timer(fired)));
        assert!(!controller.state().computer_smart());
        assert_eq!(controller.state().score(), ended.score());
        assert_eq!(controller.state().round(), ended.round() + 1);
    }
    assert!(wins > 0);
}

#[test]
fn test_stored_score_loaded_on_start() {
    let mut controller = controller(1, RecordingFrontend::new(), Score::new(2, 1, 0));
    controller.start();
    assert_eq!(controller.state().score(), Score::new(2, 1, 0));
    assert_eq!(controller.frontend().score(), Some(Score::new(2, 1, 0)));
}
