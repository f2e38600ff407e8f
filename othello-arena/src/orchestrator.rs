//! The match state machine.
//!
//! A [`Match`] owns the position and drives turns strictly one at a time.
//! Each turn has exactly one suspension point, waiting for the side to move to
//! answer its [`MoveReply`]. Replies carry the generation of the turn they were
//! issued for; once a turn has moved on, anything tagged with an older
//! generation is discarded, so a late answer can never touch the board.

use crate::agent::{Agent, Answer, Decision, MoveReply, OpenTurn};
use crate::observer::{MoveApplied, MoveObservers, ObserverId};
use crate::{MatchConfig, MatchStats};
use async_std::channel::{unbounded, Receiver, Sender};
use async_std::{future, task};
use othello_engine::{Action, Location, Outcome, Player, Position};
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

/// How a finished match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSummary {
    pub black_count: usize,
    pub white_count: usize,
    pub outcome: Outcome,
    /// Ended by the turn limit rather than by both sides running out of moves.
    pub forced: bool,
    /// Agent turns taken. Forced passes are not counted.
    pub turns: usize,
    pub violations: usize,
    pub timeouts: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchState {
    NotStarted,
    Running,
    Finished(MatchSummary),
}

/// What a single call to [`Match::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    /// The match is not running.
    Idle,
    Moved {
        player: Player,
        location: Location,
        flipped: usize,
    },
    /// `player` had no legal move and was skipped without being asked.
    Passed(Player),
    /// The agent passed while holding a legal move, or named an illegal index.
    Violation { player: Player, index: i32 },
    TimedOut(Player),
    Finished(MatchSummary),
}

#[derive(Clone, Copy, Debug, Default)]
struct Session {
    to_move: Player,
    last_move: Option<(Location, Player)>,
    turns: usize,
    violations: usize,
    timeouts: usize,
}

/// A series of Othello matches between two agents.
pub struct Match {
    agents: [Box<dyn Agent>; 2],
    config: MatchConfig,
    position: Position,
    state: MatchState,
    session: Session,
    generation: u64,
    open_turn: OpenTurn,
    sender: Sender<Decision>,
    decisions: Receiver<Decision>,
    observers: MoveObservers,
    stats: MatchStats,
}

fn seat(player: Player) -> usize {
    match player {
        Player::Black => 0,
        Player::White => 1,
    }
}

impl Match {
    pub fn new(black: Box<dyn Agent>, white: Box<dyn Agent>, config: MatchConfig) -> Self {
        let (sender, decisions) = unbounded();
        Self {
            agents: [black, white],
            config,
            position: Position::starting(),
            state: MatchState::NotStarted,
            session: Session::default(),
            generation: 0,
            open_turn: OpenTurn::default(),
            sender,
            decisions,
            observers: MoveObservers::default(),
            stats: MatchStats::default(),
        }
    }

    /// Reset to the opening position with Black to move.
    pub fn start_new_match(&mut self) {
        self.start_from(Position::starting(), Player::Black);
    }

    /// Start a match from an arbitrary position.
    pub fn start_from(&mut self, position: Position, to_move: Player) {
        self.position = position;
        self.position.refresh();
        self.session = Session {
            to_move,
            ..Session::default()
        };

        // Answers to turns of a previous match are all stale now.
        self.open_turn.store(0, Ordering::Release);
        while self.decisions.try_recv().is_ok() {}

        for player in Player::BOTH {
            self.agents[seat(player)].configure(player, &self.position);
        }
        self.state = MatchState::Running;
        debug!(
            black = self.agents[0].name(),
            white = self.agents[1].name(),
            %to_move,
            "match started"
        );
    }

    /// Whether the board has been seeded and a match is underway or done.
    pub fn is_ready(&self) -> bool {
        self.state != MatchState::NotStarted
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn to_move(&self) -> Player {
        self.session.to_move
    }

    /// The most recent move applied in this match, and who played it.
    pub fn last_move(&self) -> Option<(Location, Player)> {
        self.session.last_move
    }

    pub fn stats(&self) -> MatchStats {
        self.stats
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&MoveApplied) + Send + 'static,
    {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Run one iteration of the turn cycle.
    pub async fn step(&mut self) -> TurnEvent {
        if self.state != MatchState::Running {
            return TurnEvent::Idle;
        }

        self.position.refresh();
        if self.position.is_finished() {
            return TurnEvent::Finished(self.finish(false));
        }
        if let Some(max_turns) = self.config.max_turns {
            if self.session.turns >= max_turns {
                return TurnEvent::Finished(self.finish(true));
            }
        }

        let player = self.session.to_move;
        if !self.position.has_any_legal_move(player) {
            trace!(%player, "no legal move, skipping turn");
            self.session.to_move = !player;
            return TurnEvent::Passed(player);
        }

        let event = self.take_turn(player).await;
        self.session.to_move = !player;
        self.session.turns += 1;
        if !self.config.move_delay.is_zero() {
            task::sleep(self.config.move_delay).await;
        }
        event
    }

    /// Play the current match to the end, starting a new one first if none is running.
    pub async fn run(&mut self) -> MatchSummary {
        if self.state != MatchState::Running {
            self.start_new_match();
        }
        loop {
            if let TurnEvent::Finished(summary) = self.step().await {
                return summary;
            }
        }
    }

    /// Play `games` fresh matches back to back, calling `on_finished` after each.
    pub async fn run_series<F>(&mut self, games: usize, mut on_finished: F) -> MatchStats
    where
        F: FnMut(&MatchSummary),
    {
        for _ in 0..games {
            self.start_new_match();
            let summary = self.run().await;
            on_finished(&summary);
        }
        self.stats
    }

    async fn take_turn(&mut self, player: Player) -> TurnEvent {
        self.generation += 1;
        let generation = self.generation;
        let snapshot = self.position;
        self.open_turn.store(generation, Ordering::Release);
        let reply = MoveReply::new(generation, self.sender.clone(), self.open_turn.clone());
        self.agents[seat(player)].request_move(&snapshot, reply);

        let answer = await_decision(&self.decisions, generation, self.config.move_timeout).await;
        self.open_turn.store(0, Ordering::Release);
        match answer {
            Some(Answer::Act(Action::MakeMove(location)))
                if self.position.cache().is_legal(player, location) =>
            {
                let flipped = self.position.play(player, location);
                self.session.last_move = Some((location, player));
                self.observers.notify(&MoveApplied {
                    location,
                    player,
                    flipped,
                });
                debug!(%player, %location, flipped, "move applied");
                TurnEvent::Moved {
                    player,
                    location,
                    flipped,
                }
            }
            Some(answer) => {
                self.session.violations += 1;
                let index = answer.index();
                warn!(%player, index, agent = self.agents[seat(player)].name(), "policy violation");
                TurnEvent::Violation { player, index }
            }
            None => {
                self.session.timeouts += 1;
                warn!(
                    %player,
                    agent = self.agents[seat(player)].name(),
                    timeout = ?self.config.move_timeout,
                    "agent timed out"
                );
                TurnEvent::TimedOut(player)
            }
        }
    }

    fn finish(&mut self, forced: bool) -> MatchSummary {
        let (black_count, white_count) = self.position.count_pieces();
        let outcome = Outcome::from_counts(black_count, white_count);
        let summary = MatchSummary {
            black_count,
            white_count,
            outcome,
            forced,
            turns: self.session.turns,
            violations: self.session.violations,
            timeouts: self.session.timeouts,
        };

        for player in Player::BOTH {
            let (own, opponent) = match player {
                Player::Black => (black_count, white_count),
                Player::White => (white_count, black_count),
            };
            self.agents[seat(player)].on_match_end(own, opponent, outcome.result_for(player));
        }

        self.stats.record(outcome);
        info!(
            black = black_count,
            white = white_count,
            %outcome,
            forced,
            turns = summary.turns,
            "match finished"
        );
        let log_every = self.config.log_every;
        if log_every > 0 && self.stats.games_played % log_every == 0 {
            info!("{}", self.stats);
        }

        self.state = MatchState::Finished(summary);
        summary
    }
}

/// Wait for the answer to turn `generation`, dropping stale ones, until `timeout` elapses.
async fn await_decision(
    decisions: &Receiver<Decision>,
    generation: u64,
    timeout: Duration,
) -> Option<Answer> {
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.checked_duration_since(Instant::now())?;
        match future::timeout(remaining, decisions.recv()).await {
            Ok(Ok(decision)) if decision.generation == generation => return Some(decision.answer),
            Ok(Ok(stale)) => {
                trace!(stale = stale.generation, current = generation, "dropping stale reply");
            }
            Ok(Err(_)) | Err(_) => return None,
        }
    }
}
