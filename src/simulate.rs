//! Headless rounds on a virtual clock.
//!
//! Timers go into a min-heap keyed by due time; popping the heap advances
//! the clock instantly. A bot stands in for the player and clicks a random
//! empty cell whenever it is its turn.

use crate::GameConfig;
use crate::collaborators::{Frontend, ScorePersistence, TracingFrontend};
use crate::controller::{TimerCommand, TurnController};
use crate::games::tictactoe::{Event, Position, RoundPhase, Score, TimerFired, heuristic};
use crate::persistence::MemoryScoreStore;
use derive_getters::Getters;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Timer queue over simulated time.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    seq: u64,
    queue: BinaryHeap<Reverse<(Duration, u64, TimerFired)>>,
}

impl VirtualClock {
    /// Creates a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending timers.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Applies timer commands from a dispatch.
    pub fn apply(&mut self, commands: Vec<TimerCommand>) {
        for command in commands {
            match command {
                TimerCommand::Schedule(task) => {
                    self.seq += 1;
                    self.queue
                        .push(Reverse((self.now + task.delay, self.seq, task.fired())));
                }
                TimerCommand::CancelAll => self.queue.clear(),
            }
        }
    }

    /// Advances to the earliest pending timer and returns it.
    pub fn advance(&mut self) -> Option<TimerFired> {
        let Reverse((due, _, fired)) = self.queue.pop()?;
        self.now = self.now.max(due);
        Some(fired)
    }
}

/// Result of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct SimulationReport {
    /// Final score.
    #[getter(copy)]
    score: Score,
    /// Rounds played.
    #[getter(copy)]
    rounds: u32,
    /// Simulated time elapsed.
    #[getter(copy)]
    elapsed: Duration,
}

/// Error from a stuck simulation.
#[derive(Debug, Clone, derive_more::Display)]
#[display("Simulation stalled in {} after {} rounds", phase, rounds)]
pub struct SimulationError {
    /// Phase the round was stuck in.
    pub phase: RoundPhase,
    /// Rounds finished before stalling.
    pub rounds: u32,
}

impl std::error::Error for SimulationError {}

/// Plays `rounds` rounds headlessly with a random-clicking player.
#[instrument(skip(config))]
pub fn run_simulation(
    config: &GameConfig,
    rounds: u32,
    seed: u64,
) -> Result<SimulationReport, SimulationError> {
    let mut controller = TurnController::new(
        TracingFrontend,
        MemoryScoreStore::default(),
        config.round_settings(),
        ChaCha8Rng::seed_from_u64(seed),
    );
    let mut bot = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    let mut clock = VirtualClock::new();
    drive(&mut controller, &mut clock, rounds, |board| {
        heuristic::random_empty_cell(board, &mut bot)
    })?;

    let score = controller.state().score();
    let played = u32::try_from(score.rounds()).unwrap_or(u32::MAX);
    info!(
        %score,
        rounds = played,
        elapsed_ms = clock.now().as_millis() as u64,
        "Simulation finished"
    );
    Ok(SimulationReport {
        score,
        rounds: played,
        elapsed: clock.now(),
    })
}

/// Runs a started or fresh controller until `rounds` more rounds finish.
///
/// `pick` chooses the player's cell whenever it is the player's turn.
#[instrument(skip(controller, clock, pick))]
pub fn drive<F, P, M>(
    controller: &mut TurnController<F, P>,
    clock: &mut VirtualClock,
    rounds: u32,
    mut pick: M,
) -> Result<(), SimulationError>
where
    F: Frontend,
    P: ScorePersistence,
    M: FnMut(&crate::Board) -> Option<Position>,
{
    if controller.state().round() == 0 {
        let commands = controller.start();
        clock.apply(commands);
    }
    let target = controller.state().score().rounds() + u64::from(rounds);

    while controller.state().score().rounds() < target {
        let state = controller.state();
        if state.is_player_turn() {
            let Some(pos) = pick(state.board()) else {
                return Err(stalled(controller, target, rounds));
            };
            debug!(position = %pos, "Bot clicks");
            let commands = controller.dispatch(Event::CellClicked(pos));
            clock.apply(commands);
            continue;
        }

        let Some(fired) = clock.advance() else {
            return Err(stalled(controller, target, rounds));
        };
        let commands = controller.dispatch(Event::Timer(fired));
        clock.apply(commands);
    }
    Ok(())
}

fn stalled<F: Frontend, P: ScorePersistence>(
    controller: &TurnController<F, P>,
    target: u64,
    rounds: u32,
) -> SimulationError {
    let remaining = target.saturating_sub(controller.state().score().rounds());
    SimulationError {
        phase: controller.state().phase(),
        rounds: rounds.saturating_sub(u32::try_from(remaining).unwrap_or(u32::MAX)),
    }
}
