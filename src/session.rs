//! Real-time event loop for a play session.
//!
//! All events (player input and timer firings) pass through one unbounded
//! channel and are handled one at a time, so the controller is the only
//! writer of the game state. Timers are tokio tasks that sleep and then send
//! their firing into the same channel; a hard reset aborts them.

use crate::collaborators::{Frontend, ScorePersistence};
use crate::controller::{TimerCommand, TurnController};
use crate::games::tictactoe::{Event, ScheduledTask};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

/// A play session on the tokio clock.
pub struct Session<F, P> {
    controller: TurnController<F, P>,
    event_tx: mpsc::UnboundedSender<Event>,
    event_rx: mpsc::UnboundedReceiver<Event>,
    timers: Vec<JoinHandle<()>>,
}

impl<F: Frontend, P: ScorePersistence> Session<F, P> {
    /// Wraps a controller in a session.
    pub fn new(controller: TurnController<F, P>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            controller,
            event_tx,
            event_rx,
            timers: Vec::new(),
        }
    }

    /// Starts the first round. Must run inside a tokio runtime.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        info!("Starting session");
        let commands = self.controller.start();
        self.run_commands(commands);
    }

    /// Sender for feeding input events from elsewhere.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.event_tx.clone()
    }

    /// Waits for the next queued event.
    ///
    /// Never returns `None` while the session is alive, since it holds a
    /// sender itself.
    pub async fn recv(&mut self) -> Option<Event> {
        self.event_rx.recv().await
    }

    /// Handles one event and starts or cancels timers as asked.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: Event) {
        let commands = self.controller.dispatch(event);
        self.run_commands(commands);
    }

    /// Waits for the next event and handles it.
    pub async fn process_next(&mut self) -> Option<Event> {
        let event = self.recv().await?;
        self.handle(event);
        Some(event)
    }

    /// The controller.
    pub fn controller(&self) -> &TurnController<F, P> {
        &self.controller
    }

    /// The controller, mutably.
    pub fn controller_mut(&mut self) -> &mut TurnController<F, P> {
        &mut self.controller
    }

    /// Number of timers still pending.
    pub fn pending_timers(&self) -> usize {
        self.timers.iter().filter(|timer| !timer.is_finished()).count()
    }

    fn run_commands(&mut self, commands: Vec<TimerCommand>) {
        for command in commands {
            match command {
                TimerCommand::Schedule(task) => self.schedule(task),
                TimerCommand::CancelAll => self.cancel_all(),
            }
        }
    }

    fn schedule(&mut self, task: ScheduledTask) {
        self.timers.retain(|timer| !timer.is_finished());
        let tx = self.event_tx.clone();
        self.timers.push(tokio::spawn(async move {
            tokio::time::sleep(task.delay).await;
            // The receiver only goes away with the session.
            let _ = tx.send(Event::Timer(task.fired()));
        }));
    }

    fn cancel_all(&mut self) {
        debug!(count = self.timers.len(), "Cancelling timers");
        for timer in self.timers.drain(..) {
            timer.abort();
        }
    }
}

impl<F, P> Drop for Session<F, P> {
    fn drop(&mut self) {
        for timer in self.timers.drain(..) {
            timer.abort();
        }
    }
}
