//! Turn controller: the single owner of the game state.

use crate::collaborators::{Cue, Frontend, ScorePersistence};
use crate::games::tictactoe::{Effect, Event, GameState, ScheduledTask, start_round, step};
use crate::{GameConfig, RoundSettings};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument, warn};

/// Timer work the event loop must carry out after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Start a timer and feed its firing back as an event.
    Schedule(ScheduledTask),
    /// Abandon every pending timer.
    CancelAll,
}

/// Drives rounds, dispatching effects to the frontend and persistence.
///
/// Every mutation goes through [`TurnController::dispatch`], which runs one
/// round transition and applies its effects in order. Timer work is handed
/// back to the caller, which owns the clock.
#[derive(Debug)]
pub struct TurnController<F, P> {
    state: GameState,
    frontend: F,
    persistence: P,
    settings: RoundSettings,
    rng: ChaCha8Rng,
}

impl<F: Frontend, P: ScorePersistence> TurnController<F, P> {
    /// Creates a controller. Call [`TurnController::start`] before dispatching.
    #[instrument(skip(frontend, persistence, rng))]
    pub fn new(frontend: F, persistence: P, settings: RoundSettings, rng: ChaCha8Rng) -> Self {
        Self {
            state: GameState::default(),
            frontend,
            persistence,
            settings,
            rng,
        }
    }

    /// Creates a controller from a config, seeding from it or from entropy.
    #[instrument(skip(frontend, persistence, config))]
    pub fn from_config(frontend: F, persistence: P, config: &GameConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => {
                info!(seed, "Using fixed seed");
                ChaCha8Rng::seed_from_u64(*seed)
            }
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(frontend, persistence, config.round_settings(), rng)
    }

    /// Loads the stored score and starts the first round.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Vec<TimerCommand> {
        let score = self.persistence.load().unwrap_or_else(|err| {
            warn!(error = %err, "Could not load score, starting from zero");
            Default::default()
        });
        info!(%score, "Starting session");
        self.frontend.render_score(score);

        let round = self.state.round() + 1;
        let smart = self.settings.smart_by_default();
        let next = start_round(score, smart, round, &self.settings, &mut self.rng);
        self.state = next.state;
        self.apply(next.effects)
    }

    /// Runs one event through the round state machine.
    ///
    /// Never fails: rejected input is reported through the frontend.
    #[instrument(skip(self), fields(round = self.state.round(), phase = %self.state.phase()))]
    pub fn dispatch(&mut self, event: Event) -> Vec<TimerCommand> {
        let state = std::mem::take(&mut self.state);
        let next = step(state, event, &self.settings, &mut self.rng);
        self.state = next.state;
        self.apply(next.effects)
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The frontend.
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// The frontend, mutably.
    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    /// The score store.
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Round settings in use.
    pub fn settings(&self) -> &RoundSettings {
        &self.settings
    }

    fn apply(&mut self, effects: Vec<Effect>) -> Vec<TimerCommand> {
        let mut commands = Vec::new();
        for effect in effects {
            match effect {
                Effect::ClearBoard => self.frontend.clear_board(),
                Effect::RenderMark { position, mark } => {
                    self.frontend.render_cell_mark(position, mark)
                }
                Effect::Highlight(positions) => self.frontend.highlight_cells(&positions),
                Effect::ActiveSide(side) => self.frontend.set_active_side(side),
                Effect::Message { text, severity } => self.frontend.show_message(&text, severity),
                Effect::Cue(cue) => self.play(cue),
                Effect::ScoreChanged(score) => {
                    self.frontend.render_score(score);
                    if let Err(err) = self.persistence.save(score) {
                        warn!(error = %err, "Could not save score");
                    }
                }
                Effect::Schedule(task) => {
                    debug!(
                        kind = %task.kind,
                        delay_ms = task.delay.as_millis() as u64,
                        "Scheduling timer"
                    );
                    commands.push(TimerCommand::Schedule(task));
                }
                Effect::CancelTimers => commands.push(TimerCommand::CancelAll),
            }
        }
        commands
    }

    fn play(&mut self, cue: Cue) {
        if let Err(err) = self.frontend.play(cue) {
            warn!(error = %err, "Audio cue failed");
        }
    }
}
