//! Terminal front end for two-mode tic-tac-toe.
//!
//! [`controller::Controller`] owns the game session and turns key presses
//! into engine calls. Opponent moves are deferred through
//! [`scheduler::OpponentScheduler`] and drawn by [`ui::TerminalPresenter`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod input;
pub mod scheduler;
pub mod ui;

pub use config::{AppConfig, ConfigError, TimingConfig};
pub use controller::{Action, Controller, Flow};
pub use scheduler::{ControlEvent, OpponentScheduler};
pub use ui::TerminalPresenter;
