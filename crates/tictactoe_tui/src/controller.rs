//! Drives a [`GameSession`] from user actions and timer events.

use crate::config::{AppConfig, TimingConfig};
use crate::scheduler::{ControlEvent, OpponentScheduler};
use tictactoe_core::{
    Choice, Followup, GameSession, Mode, MoveResult, OpponentError, RandomSource, RenderState,
    SeededRandom,
};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select the cell at this index.
    Select(usize),
    /// Start a new round, keeping the score.
    NewRound,
    /// Zero the score and start over with X.
    ResetAll,
    /// Switch to a mode.
    SetMode(Mode),
    /// Leave the application.
    Quit,
}

/// Whether the UI loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Exit the loop.
    Quit,
}

/// Owns the session, the opponent's randomness and its timer.
pub struct Controller {
    session: GameSession,
    rng: Box<dyn RandomSource + Send>,
    timing: TimingConfig,
    scheduler: OpponentScheduler,
}

impl Controller {
    /// Creates a controller from configuration.
    ///
    /// Uses the configured seed when present, OS entropy otherwise.
    pub fn new(config: &AppConfig, tx: mpsc::UnboundedSender<ControlEvent>) -> Self {
        let rng: Box<dyn RandomSource + Send> = match config.seed() {
            Some(seed) => Box::new(SeededRandom::with_seed(*seed)),
            None => Box::new(SeededRandom::new()),
        };
        Self::with_random(config, rng, tx)
    }

    /// Creates a controller with an explicit random source.
    #[instrument(skip_all, fields(mode = %config.default_mode()))]
    pub fn with_random(
        config: &AppConfig,
        rng: Box<dyn RandomSource + Send>,
        tx: mpsc::UnboundedSender<ControlEvent>,
    ) -> Self {
        let mut controller = Self {
            session: GameSession::new(),
            rng,
            timing: *config.timing(),
            scheduler: OpponentScheduler::new(tx),
        };
        let followup = controller.session.set_mode(*config.default_mode());
        controller.follow(followup);
        info!("Controller ready");
        controller
    }

    /// The live session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Projection for the presenter.
    pub fn render_state(&self) -> RenderState {
        self.session.render_state()
    }

    /// Whether an opponent move is counting down.
    pub fn opponent_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) -> Flow {
        match action {
            Action::Select(index) => {
                let (result, followup) = self.session.select_cell(index);
                if let MoveResult::Rejected(reason) = result {
                    debug!(index, %reason, "Selection rejected");
                }
                self.follow(followup);
            }
            Action::NewRound => {
                self.scheduler.cancel();
                let followup = self.session.start_new_round(false);
                self.follow(followup);
            }
            Action::ResetAll => {
                self.scheduler.cancel();
                let followup = self.session.reset_all();
                self.follow(followup);
            }
            Action::SetMode(mode) => {
                self.scheduler.cancel();
                let followup = self.session.set_mode(mode);
                self.follow(followup);
            }
            Action::Quit => {
                self.scheduler.cancel();
                info!("Quit requested");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Handles an event posted by the scheduler.
    ///
    /// # Errors
    ///
    /// Propagates [`OpponentError`] when the session asks the opponent to
    /// move on a full board.
    #[instrument(skip(self))]
    pub fn on_event(&mut self, event: ControlEvent) -> Result<Option<Choice>, OpponentError> {
        match event {
            ControlEvent::OpponentDue(_) => self.session.play_opponent(&mut *self.rng),
        }
    }

    fn follow(&mut self, followup: Followup) {
        if let Followup::Opponent(trigger) = followup {
            self.scheduler.schedule(trigger, self.timing.delay_for(trigger));
        }
    }
}
