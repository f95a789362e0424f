//! Terminal frontend state.
//!
//! `App` is what the controller draws into. It mirrors the board the way a
//! screen would, keeps the current message with its expiry, and rings the
//! terminal bell for loud cues.

use std::io::Write;
use std::time::{Duration, Instant};

use strictly_versus::{
    AudioCue, Cue, GameError, Mark, Notifier, Position, Renderer, Score, Severity,
};
use tracing::{debug, instrument};

/// A message on screen and when it goes away.
#[derive(Debug, Clone)]
pub struct Banner {
    /// Message text.
    pub text: String,
    /// Presentation severity.
    pub severity: Severity,
    expires_at: Instant,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    marks: [Option<Mark>; 9],
    highlighted: Vec<Position>,
    active_side: Mark,
    score: Score,
    banner: Option<Banner>,
    message_ttl: Duration,
    bell: bool,
    cursor: Position,
}

impl App {
    /// Creates a new application.
    pub fn new(message_ttl: Duration, bell: bool) -> Self {
        Self {
            marks: [None; 9],
            highlighted: Vec::new(),
            active_side: Mark::Player,
            score: Score::default(),
            banner: None,
            message_ttl,
            bell,
            cursor: Position::Center,
        }
    }

    /// Mark drawn at `pos`.
    pub fn mark_at(&self, pos: Position) -> Option<Mark> {
        self.marks[pos.to_index()]
    }

    /// Whether `pos` is highlighted.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlighted.contains(&pos)
    }

    /// Side shown as active.
    pub fn active_side(&self) -> Mark {
        self.active_side
    }

    /// Score shown.
    pub fn score(&self) -> Score {
        self.score
    }

    /// The message on screen, if it has not expired.
    pub fn banner(&self) -> Option<&Banner> {
        self.banner
            .as_ref()
            .filter(|banner| banner.expires_at > Instant::now())
    }

    /// Cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the cursor.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    fn ring(&self, cue: Cue) -> Result<(), GameError> {
        let mut stdout = std::io::stdout();
        stdout
            .write_all(b"\x07")
            .and_then(|_| stdout.flush())
            .map_err(|e| GameError::PlaybackFailure {
                cue,
                reason: e.to_string(),
            })
    }
}

impl Renderer for App {
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
        self.active_side = side;
    }

    fn render_score(&mut self, score: Score) {
        self.score = score;
    }
}

impl Notifier for App {
    #[instrument(skip(self))]
    fn show_message(&mut self, text: &str, severity: Severity) {
        self.banner = Some(Banner {
            text: text.to_string(),
            severity,
            expires_at: Instant::now() + self.message_ttl,
        });
    }
}

impl AudioCue for App {
    fn play(&mut self, cue: Cue) -> Result<(), GameError> {
        match cue {
            Cue::InvalidAction | Cue::Win | Cue::Lose if self.bell => self.ring(cue),
            _ => {
                debug!(%cue, "Silent cue");
                Ok(())
            }
        }
    }
}
