//! `othello-arena` runs Othello matches between pluggable agents.
//!
//!  - [`Agent`] is the contract for anything that picks moves: built-in
//!    heuristic bots, externally driven players, or async [`connectors`].
//!  - [`Match`] is the turn orchestrator. It owns the position, asks the side
//!    to move for a decision with a bounded wait, handles forced passes, and
//!    scores the game once neither side can move.

pub mod connectors;
pub mod heuristics;

mod agent;
mod config;
mod external;
mod observer;
mod orchestrator;
mod stats;

pub use agent::{Agent, MoveReply};
pub use config::MatchConfig;
pub use external::{ExternalAgent, ExternalHandle, SubmitError};
pub use heuristics::{BotAgent, Strategy};
pub use observer::{MoveApplied, MoveObservers, ObserverId};
pub use orchestrator::{Match, MatchState, MatchSummary, TurnEvent};
pub use stats::MatchStats;
