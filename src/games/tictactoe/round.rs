//! Round transitions.
//!
//! Each transition takes the current [`GameState`] by value plus one
//! [`Event`] and returns the next state along with the [`Effect`]s the
//! outside world should see. Nothing here draws, sleeps, or stores; timers
//! are requested as [`ScheduledTask`]s and come back later as
//! [`Event::Timer`].

use super::heuristic::select_computer_move;
use super::phases::{Outcome, RoundPhase};
use super::rules::{detect_tie, detect_winner};
use super::taunts::pick_taunt;
use super::{Board, Mark, Position, Score};
use crate::collaborators::{Cue, Severity};
use crate::{GameError, RoundSettings};
use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Round counter; timers carry it so stale firings can be told apart.
pub type RoundId = u64;

/// What a timer does when it fires.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum TimerKind {
    /// The computer finishes thinking and moves.
    ComputerMove,
    /// The finished board is cleared and a new round starts.
    ResetRound,
}

/// A timer the driver should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ScheduledTask {
    /// Round that requested the timer.
    pub round: RoundId,
    /// How long to wait.
    pub delay: Duration,
    /// What happens on firing.
    pub kind: TimerKind,
}

impl ScheduledTask {
    /// The event to deliver once the delay has elapsed.
    pub fn fired(&self) -> TimerFired {
        TimerFired {
            round: self.round,
            kind: self.kind,
        }
    }
}

/// A timer that elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerFired {
    /// Round that requested the timer.
    pub round: RoundId,
    /// What to do.
    pub kind: TimerKind,
}

/// Inputs to the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The player clicked a cell.
    CellClicked(Position),
    /// The player flipped smart mode.
    ToggleMode,
    /// The player asked to wipe everything and start over.
    HardReset,
    /// A scheduled timer elapsed.
    Timer(TimerFired),
}

/// Outputs of a transition, in the order they should be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Remove all marks and highlights.
    ClearBoard,
    /// Draw a mark.
    RenderMark {
        /// Where.
        position: Position,
        /// Whose.
        mark: Mark,
    },
    /// Highlight these cells, clearing older highlights.
    Highlight(Vec<Position>),
    /// Show whose turn it is.
    ActiveSide(Mark),
    /// Show a transient message.
    Message {
        /// Message text.
        text: String,
        /// Presentation severity.
        severity: Severity,
    },
    /// Play an audio cue.
    Cue(Cue),
    /// The score changed; render and persist it.
    ScoreChanged(Score),
    /// Start a timer.
    Schedule(ScheduledTask),
    /// Drop every pending timer.
    CancelTimers,
}

impl Effect {
    fn message(text: impl Into<String>, severity: Severity) -> Self {
        Effect::Message {
            text: text.into(),
            severity,
        }
    }
}

/// State of the game for the current round.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current phase.
    #[getter(copy)]
    phase: RoundPhase,
    /// Running score.
    #[getter(copy)]
    score: Score,
    /// Whether the computer uses the win/block heuristic.
    #[getter(copy)]
    computer_smart: bool,
    /// Current round counter.
    #[getter(copy)]
    round: RoundId,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::new(),
            phase: RoundPhase::default(),
            score: Score::default(),
            computer_smart: true,
            round: 0,
        }
    }
}

impl GameState {
    /// Returns true while the player may click.
    pub fn is_player_turn(&self) -> bool {
        self.phase == RoundPhase::AwaitingPlayerMove
    }

    /// Outcome of the board as it stands, if the round is decided.
    pub fn outcome(&self) -> Option<Outcome> {
        terminal_outcome(&self.board)
    }
}

/// Result of one transition.
#[derive(Debug, Clone)]
pub struct Step {
    /// State after the transition.
    pub state: GameState,
    /// Effects to apply, in order.
    pub effects: Vec<Effect>,
}

impl Step {
    fn unchanged(state: GameState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

/// Starts round `round` with a fresh board and a coin flip for the opener.
#[instrument(skip(settings, rng))]
pub fn start_round<R: Rng + ?Sized>(
    score: Score,
    computer_smart: bool,
    round: RoundId,
    settings: &RoundSettings,
    rng: &mut R,
) -> Step {
    let player_opens = rng.gen_bool(0.5);
    let phase = if player_opens {
        RoundPhase::AwaitingPlayerMove
    } else {
        RoundPhase::ComputerThinking
    };
    info!(round, %phase, "Round started");

    let mut effects = vec![Effect::ClearBoard, Effect::Highlight(Vec::new())];
    if player_opens {
        effects.push(Effect::ActiveSide(Mark::Player));
        effects.push(Effect::message("You begin this round.", Severity::Info));
    } else {
        effects.push(Effect::ActiveSide(Mark::Computer));
        effects.push(Effect::message(
            "The computer begins this round.",
            Severity::Info,
        ));
        let delay = settings.opening_delay() + think_delay(settings, rng);
        effects.push(Effect::Schedule(ScheduledTask::new(
            round,
            delay,
            TimerKind::ComputerMove,
        )));
    }

    Step {
        state: GameState {
            board: Board::new(),
            phase,
            score,
            computer_smart,
            round,
        },
        effects,
    }
}

/// Applies one event to the state.
///
/// Rejected input and stale timers leave the state unchanged; rejections
/// come back as a warning message and cue, never as an error.
#[instrument(skip(state, settings, rng), fields(round = state.round, phase = %state.phase))]
pub fn step<R: Rng + ?Sized>(
    state: GameState,
    event: Event,
    settings: &RoundSettings,
    rng: &mut R,
) -> Step {
    match event {
        Event::CellClicked(pos) => player_move(state, pos, settings, rng),
        Event::ToggleMode => toggle_mode(state),
        Event::HardReset => hard_reset(state, settings, rng),
        Event::Timer(fired) if fired.round != state.round => {
            debug!(timer_round = fired.round, kind = %fired.kind, "Ignoring stale timer");
            Step::unchanged(state)
        }
        Event::Timer(TimerFired {
            kind: TimerKind::ComputerMove,
            ..
        }) => computer_move(state, settings, rng),
        Event::Timer(TimerFired {
            kind: TimerKind::ResetRound,
            ..
        }) => reset_round(state, settings, rng),
    }
}

fn player_move<R: Rng + ?Sized>(
    mut state: GameState,
    pos: Position,
    settings: &RoundSettings,
    rng: &mut R,
) -> Step {
    if !state.is_player_turn() {
        return reject(state, GameError::OutOfTurnAction);
    }
    if let Err(err) = state.board.set_cell(pos, Mark::Player) {
        return reject(state, err);
    }
    debug!(position = %pos, "Player moved");

    let mut effects = vec![
        Effect::RenderMark {
            position: pos,
            mark: Mark::Player,
        },
        Effect::Highlight(vec![pos]),
        Effect::Cue(Cue::Click),
    ];

    if let Some(outcome) = terminal_outcome(&state.board) {
        return end_round(state, outcome, effects, settings);
    }

    state.phase = RoundPhase::ComputerThinking;
    effects.push(Effect::ActiveSide(Mark::Computer));
    effects.push(Effect::Schedule(ScheduledTask::new(
        state.round,
        think_delay(settings, rng),
        TimerKind::ComputerMove,
    )));
    Step { state, effects }
}

fn computer_move<R: Rng + ?Sized>(
    mut state: GameState,
    settings: &RoundSettings,
    rng: &mut R,
) -> Step {
    if state.phase != RoundPhase::ComputerThinking {
        debug!("Computer timer outside thinking phase, ignoring");
        return Step::unchanged(state);
    }
    let Some(pos) = select_computer_move(&state.board, state.computer_smart, rng) else {
        warn!("Computer has no move on a full board");
        return Step::unchanged(state);
    };
    if let Err(err) = state.board.set_cell(pos, Mark::Computer) {
        warn!(error = %err, "Computer picked an occupied cell");
        return Step::unchanged(state);
    }
    debug!(position = %pos, smart = state.computer_smart, "Computer moved");

    let mut effects = vec![
        Effect::RenderMark {
            position: pos,
            mark: Mark::Computer,
        },
        Effect::Highlight(vec![pos]),
        Effect::Cue(Cue::PlayerTurnStart),
    ];

    if let Some(outcome) = terminal_outcome(&state.board) {
        return end_round(state, outcome, effects, settings);
    }

    state.phase = RoundPhase::AwaitingPlayerMove;
    effects.push(Effect::ActiveSide(Mark::Player));
    effects.push(Effect::message(
        format!("🖥️ Computer: {}", pick_taunt(rng)),
        Severity::Flavor,
    ));
    Step { state, effects }
}

fn reset_round<R: Rng + ?Sized>(state: GameState, settings: &RoundSettings, rng: &mut R) -> Step {
    if state.phase != RoundPhase::RoundEnded {
        debug!("Reset timer before round end, ignoring");
        return Step::unchanged(state);
    }
    start_round(
        state.score,
        state.computer_smart,
        state.round + 1,
        settings,
        rng,
    )
}

fn toggle_mode(mut state: GameState) -> Step {
    state.computer_smart = !state.computer_smart;
    info!(smart = state.computer_smart, "Computer smart mode toggled");
    let text = if state.computer_smart {
        "☢️ The computer will now use high-tech algorithms."
    } else {
        "🎲 The computer will now play randomly."
    };
    Step {
        state,
        effects: vec![
            Effect::Cue(Cue::ModeToggle),
            Effect::message(text, Severity::Info),
        ],
    }
}

fn hard_reset<R: Rng + ?Sized>(state: GameState, settings: &RoundSettings, rng: &mut R) -> Step {
    info!("Hard reset");
    let score = Score::default();
    let mut next = start_round(
        score,
        settings.smart_by_default(),
        state.round + 1,
        settings,
        rng,
    );
    let mut effects = vec![Effect::CancelTimers, Effect::ScoreChanged(score)];
    effects.append(&mut next.effects);
    next.effects = effects;
    next
}

fn end_round(
    mut state: GameState,
    outcome: Outcome,
    mut effects: Vec<Effect>,
    settings: &RoundSettings,
) -> Step {
    info!(%outcome, round = state.round, "Round ended");
    state.phase = RoundPhase::RoundEnded;
    state.score = state.score.record(&outcome);

    match outcome {
        Outcome::Won { winner, pattern } => {
            effects.push(Effect::Highlight(pattern.positions().to_vec()));
            let (cue, text) = match winner {
                Mark::Player => (Cue::Win, "🥇 Congratulations, you won this round!"),
                Mark::Computer => (Cue::Lose, "😥 The computer wins."),
            };
            effects.push(Effect::Cue(cue));
            effects.push(Effect::message(text, Severity::Info));
        }
        Outcome::Tie => {
            effects.push(Effect::Cue(Cue::Tie));
            effects.push(Effect::message("🪢 It's a tie.", Severity::Info));
        }
    }

    effects.push(Effect::ScoreChanged(state.score));
    effects.push(Effect::Schedule(ScheduledTask::new(
        state.round,
        settings.round_end_delay(),
        TimerKind::ResetRound,
    )));
    Step { state, effects }
}

fn reject(state: GameState, err: GameError) -> Step {
    debug!(error = %err, "Rejected player action");
    let text = match err {
        GameError::OutOfTurnAction => "⛔ It's not your turn yet.".to_string(),
        GameError::CellOccupied(_) => {
            "⛔ Someone (or something!!?) played this cell already.".to_string()
        }
        other => format!("⛔ {}", other),
    };
    Step {
        state,
        effects: vec![
            Effect::Cue(Cue::InvalidAction),
            Effect::message(text, Severity::Warning),
        ],
    }
}

fn terminal_outcome(board: &Board) -> Option<Outcome> {
    if let Some(pattern) = detect_winner(board) {
        let winner = pattern.owner(board)?;
        return Some(Outcome::Won { winner, pattern });
    }
    detect_tie(board).then_some(Outcome::Tie)
}

fn think_delay<R: Rng + ?Sized>(settings: &RoundSettings, rng: &mut R) -> Duration {
    let min = settings.think_delay_min().as_millis() as u64;
    let max = settings.think_delay_max().as_millis() as u64;
    if min >= max {
        return settings.think_delay_min();
    }
    Duration::from_millis(rng.gen_range(min..max))
}
