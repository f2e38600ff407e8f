//! The contract between a match and whatever decides one side's moves.

use async_std::channel::Sender;
use othello_engine::{Action, MatchResult, Player, Position};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::trace;

/// A decision source for one side of a match.
pub trait Agent: Send {
    /// Called once at match start with the side this agent plays.
    fn configure(&mut self, player: Player, position: &Position);

    /// Called when it is this agent's turn. The agent answers through `reply`,
    /// either before returning or later from another task. An answer that
    /// arrives after the turn has timed out is discarded by the match.
    fn request_move(&mut self, position: &Position, reply: MoveReply);

    /// Called when the match ends, with scores from this agent's point of view.
    fn on_match_end(&mut self, _own_score: usize, _opponent_score: usize, _result: MatchResult) {}

    /// Short label used in logs.
    fn name(&self) -> &str {
        "agent"
    }
}

/// What an agent answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Answer {
    Act(Action),
    /// An index that is neither a cell nor the pass marker.
    OutOfRange(i32),
}

impl Answer {
    pub(crate) fn index(self) -> i32 {
        match self {
            Answer::Act(action) => action.to_index(),
            Answer::OutOfRange(index) => index,
        }
    }
}

/// An answer tagged with the turn it was requested for.
#[derive(Debug)]
pub(crate) struct Decision {
    pub generation: u64,
    pub answer: Answer,
}

/// Generation of the turn the match is waiting on; 0 while no turn is open.
pub(crate) type OpenTurn = Arc<AtomicU64>;

/// The one-shot callback for a single move request.
///
/// Each request carries the generation of the turn it belongs to, so a reply
/// that outlives its turn can be recognized and dropped.
#[derive(Debug)]
pub struct MoveReply {
    generation: u64,
    sender: Sender<Decision>,
    open: OpenTurn,
}

impl MoveReply {
    pub(crate) fn new(generation: u64, sender: Sender<Decision>, open: OpenTurn) -> Self {
        Self {
            generation,
            sender,
            open,
        }
    }

    /// A reply whose turn stays open until dropped.
    #[cfg(test)]
    pub(crate) fn open(generation: u64, sender: Sender<Decision>) -> Self {
        Self::new(generation, sender, Arc::new(AtomicU64::new(generation)))
    }

    /// The turn this reply answers.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the match is still waiting on this turn. Once it has timed out
    /// or ended, anything sent here is discarded.
    pub fn is_current(&self) -> bool {
        self.open.load(Ordering::Acquire) == self.generation
    }

    /// Answer with an action.
    pub fn send(self, action: Action) {
        self.deliver(Answer::Act(action));
    }

    /// Answer with a raw index: -1 passes, 0..64 places a stone.
    pub fn send_index(self, index: i32) {
        let answer = match Action::from_index(index) {
            Some(action) => Answer::Act(action),
            None => Answer::OutOfRange(index),
        };
        self.deliver(answer);
    }

    pub fn pass(self) {
        self.send(Action::Pass);
    }

    fn deliver(self, answer: Answer) {
        let decision = Decision {
            generation: self.generation,
            answer,
        };
        if self.sender.try_send(decision).is_err() {
            trace!(generation = self.generation, "match closed before reply arrived");
        }
    }
}
