//! Match tunables.

use std::time::Duration;

/// Tunables for running matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    /// How long to wait for an agent's decision before treating the turn as a pass.
    pub move_timeout: Duration,
    /// Pause after every agent turn, for watching play.
    pub move_delay: Duration,
    /// End the match by current score after this many agent turns.
    pub max_turns: Option<usize>,
    /// Log running statistics every this many games; 0 disables.
    pub log_every: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            move_timeout: Duration::from_secs(2),
            move_delay: Duration::ZERO,
            max_turns: None,
            log_every: 10,
        }
    }
}

impl MatchConfig {
    pub fn with_move_timeout(mut self, move_timeout: Duration) -> Self {
        self.move_timeout = move_timeout;
        self
    }

    pub fn with_move_delay(mut self, move_delay: Duration) -> Self {
        self.move_delay = move_delay;
        self
    }

    pub fn with_max_turns(mut self, max_turns: Option<usize>) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }
}
