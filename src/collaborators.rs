//! Collaborator contracts between the turn controller and the outside world.
//!
//! The controller never draws, plays sound, or touches storage itself. It
//! calls into these traits, which a frontend (the terminal UI, the headless
//! simulator, or a test double) implements.

use crate::games::tictactoe::{Mark, Position};
use crate::{GameError, Score, ScoreError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// How a transient message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Severity {
    /// Neutral game information.
    Info,
    /// A rejected action.
    Warning,
    /// Computer chatter with no effect on the game.
    Flavor,
}

/// Audio cues the controller asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Cue {
    /// The player placed a mark.
    Click,
    /// The player tried something that is not allowed.
    InvalidAction,
    /// The computer won the round.
    Lose,
    /// The computer moved and it is the player's turn.
    PlayerTurnStart,
    /// The player won the round.
    Win,
    /// The round ended in a tie.
    Tie,
    /// Smart mode was toggled.
    ModeToggle,
}

/// Draws the board.
pub trait Renderer {
    /// Draws `mark` at `position`.
    fn render_cell_mark(&mut self, position: Position, mark: Mark);

    /// Highlights `positions`, clearing any previous highlight.
    fn highlight_cells(&mut self, positions: &[Position]);

    /// Removes every mark and highlight.
    fn clear_board(&mut self);

    /// Shows whose turn it is.
    fn set_active_side(&mut self, side: Mark);

    /// Shows the running score.
    fn render_score(&mut self, score: Score);
}

/// Shows transient user-facing messages.
pub trait Notifier {
    /// Shows `text`, replacing any message still on screen.
    fn show_message(&mut self, text: &str, severity: Severity);
}

/// Plays audio cues. Best effort.
pub trait AudioCue {
    /// Plays `cue`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlaybackFailure`] when the cue cannot be played.
    /// The controller logs and ignores it.
    fn play(&mut self, cue: Cue) -> Result<(), GameError>;
}

/// Everything the controller draws, says, or plays through.
pub trait Frontend: Renderer + Notifier + AudioCue {}

impl<T: Renderer + Notifier + AudioCue> Frontend for T {}

/// Loads and stores the running score.
pub trait ScorePersistence {
    /// Reads the stored score.
    fn load(&mut self) -> Result<Score, ScoreError>;

    /// Stores `score`.
    fn save(&mut self, score: Score) -> Result<(), ScoreError>;
}

/// A message captured by [`RecordingFrontend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Message text.
    pub text: String,
    /// Presentation severity.
    pub severity: Severity,
}

/// Frontend that keeps everything it is told, for tests and inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingFrontend {
    marks: [Option<Mark>; 9],
    highlighted: Vec<Position>,
    active_side: Option<Mark>,
    score: Option<Score>,
    messages: Vec<Message>,
    cues: Vec<Cue>,
    fail_audio: bool,
}

impl RecordingFrontend {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder whose audio always fails.
    pub fn with_failing_audio() -> Self {
        Self {
            fail_audio: true,
            ..Self::default()
        }
    }

    /// Marks drawn so far, by board index.
    pub fn marks(&self) -> &[Option<Mark>; 9] {
        &self.marks
    }

    /// Number of marks currently drawn.
    pub fn mark_count(&self) -> usize {
        self.marks.iter().flatten().count()
    }

    /// Currently highlighted positions.
    pub fn highlighted(&self) -> &[Position] {
        &self.highlighted
    }

    /// Side last shown as active.
    pub fn active_side(&self) -> Option<Mark> {
        self.active_side
    }

    /// Score last rendered.
    pub fn score(&self) -> Option<Score> {
        self.score
    }

    /// Every message shown, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Most recent message.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Every cue requested, oldest first. Includes cues that failed.
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Forgets recorded messages and cues.
    pub fn clear_log(&mut self) {
        self.messages.clear();
        self.cues.clear();
    }
}

impl Renderer for RecordingFrontend {
    fn render_cell_mark(&mut self, position: Position, mark: Mark) {
        self.marks[position.to_index()] = Some(mark);
    }

    fn highlight_cells(&mut self, positions: &[Position]) {
        self.highlighted = positions.to_vec();
    }

    fn clear_board(&mut self) {
        self.marks = [None; 9];
        self.highlighted.clear();
    }

    fn set_active_side(&mut self, side: Mark) {
        self.active_side = Some(side);
    }

    fn render_score(&mut self, score: Score) {
        self.score = Some(score);
    }
}

impl Notifier for RecordingFrontend {
    fn show_message(&mut self, text: &str, severity: Severity) {
        self.messages.push(Message {
            text: text.to_string(),
            severity,
        });
    }
}

impl AudioCue for RecordingFrontend {
    fn play(&mut self, cue: Cue) -> Result<(), GameError> {
        self.cues.push(cue);
        if self.fail_audio {
            return Err(GameError::PlaybackFailure {
                cue,
                reason: "audio disabled".to_string(),
            });
        }
        Ok(())
    }
}

/// Frontend that only logs, for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFrontend;

impl Renderer for TracingFrontend {
    #[instrument(skip(self))]
    fn render_cell_mark(&mut self, position: Position, mark: Mark) {
        trace!("Cell marked");
    }

    fn highlight_cells(&mut self, positions: &[Position]) {
        trace!(?positions, "Cells highlighted");
    }

    fn clear_board(&mut self) {
        trace!("Board cleared");
    }

    fn set_active_side(&mut self, side: Mark) {
        trace!(%side, "Active side");
    }

    fn render_score(&mut self, score: Score) {
        debug!(%score, "Score");
    }
}

impl Notifier for TracingFrontend {
    fn show_message(&mut self, text: &str, severity: Severity) {
        debug!(%severity, text, "Message");
    }
}

impl AudioCue for TracingFrontend {
    fn play(&mut self, cue: Cue) -> Result<(), GameError> {
        trace!(%cue, "Cue");
        Ok(())
    }
}
