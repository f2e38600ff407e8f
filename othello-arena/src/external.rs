//! An agent whose moves come from outside the match, such as a UI or a test
//! harness holding an [`ExternalHandle`].

use crate::agent::{Agent, MoveReply};
use async_std::channel::{bounded, Receiver, Sender};
use derive_more::{Display, Error};
use othello_engine::{Action, MatchResult, Player, Position};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

#[derive(Debug, Default)]
struct Pending {
    player: Player,
    request: Option<(Position, MoveReply)>,
}

impl Pending {
    /// The request still awaiting an answer. One whose turn has already ended
    /// is discarded here.
    fn open_request(&mut self) -> Result<&(Position, MoveReply), SubmitError> {
        let expired = self
            .request
            .as_ref()
            .map_or(false, |(_, reply)| !reply.is_current());
        if expired {
            self.request = None;
            return Err(SubmitError::Expired);
        }
        self.request.as_ref().ok_or(SubmitError::NoPendingRequest)
    }
}

type Shared = Arc<Mutex<Pending>>;

fn lock(shared: &Shared) -> MutexGuard<'_, Pending> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds the current move request until the outside world answers it.
#[derive(Debug)]
pub struct ExternalAgent {
    shared: Shared,
    requests: Sender<Position>,
    /// Same channel as `requests`, used to drop an announcement nobody read.
    unread: Receiver<Position>,
}

/// The outside end of an [`ExternalAgent`].
#[derive(Clone, Debug)]
pub struct ExternalHandle {
    shared: Shared,
    requests: Receiver<Position>,
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[display(fmt = "no move has been requested")]
    NoPendingRequest,
    #[display(fmt = "the requested turn has already ended")]
    Expired,
    #[display(fmt = "{} is not a board index", _0)]
    InvalidIndex(#[error(not(source))] i32),
    #[display(fmt = "index {} is not a legal move", _0)]
    IllegalMove(#[error(not(source))] i32),
}

impl ExternalAgent {
    pub fn new() -> (Self, ExternalHandle) {
        let shared = Shared::default();
        let (sender, receiver) = bounded(1);
        let agent = Self {
            shared: shared.clone(),
            requests: sender,
            unread: receiver.clone(),
        };
        let handle = ExternalHandle {
            shared,
            requests: receiver,
        };
        (agent, handle)
    }
}

impl Agent for ExternalAgent {
    fn configure(&mut self, player: Player, _position: &Position) {
        let mut pending = lock(&self.shared);
        pending.player = player;
        pending.request = None;
    }

    fn request_move(&mut self, position: &Position, reply: MoveReply) {
        let replaced = lock(&self.shared).request.replace((*position, reply));
        if let Some((_, stale)) = replaced {
            debug!(generation = stale.generation(), "dropping unanswered request");
        }
        // Only the newest request is worth announcing. Nobody listening is
        // fine; the handle can still poll.
        while self.unread.try_recv().is_ok() {}
        let _ = self.requests.try_send(*position);
    }

    fn on_match_end(&mut self, _own_score: usize, _opponent_score: usize, _result: MatchResult) {
        lock(&self.shared).request = None;
    }

    fn name(&self) -> &str {
        "external"
    }
}

impl ExternalHandle {
    /// Wait until the agent is asked for a move and return the position it was
    /// asked about. Returns None once the agent is gone.
    pub async fn next_request(&self) -> Option<Position> {
        loop {
            let position = self.requests.recv().await.ok()?;
            if self.pending() == Some(position) {
                return Some(position);
            }
            trace!("skipping announcement for a turn that has ended");
        }
    }

    /// The position of the request currently awaiting an answer, if any.
    /// A request whose turn timed out or whose match ended is not pending.
    pub fn pending(&self) -> Option<Position> {
        lock(&self.shared)
            .request
            .as_ref()
            .filter(|(_, reply)| reply.is_current())
            .map(|(position, _)| *position)
    }

    /// The side this agent plays.
    pub fn player(&self) -> Player {
        lock(&self.shared).player
    }

    /// Answer the pending request with `index`, but only if it is a legal move
    /// in the position the request was made for. A rejected index leaves the
    /// request pending.
    pub fn submit(&self, index: i32) -> Result<(), SubmitError> {
        let mut pending = lock(&self.shared);
        let player = pending.player;
        let (position, _) = pending.open_request()?;

        match Action::from_index(index) {
            Some(Action::MakeMove(loc)) if position.cache().is_legal(player, loc) => {}
            Some(_) => return Err(SubmitError::IllegalMove(index)),
            None => return Err(SubmitError::InvalidIndex(index)),
        }

        if let Some((_, reply)) = pending.request.take() {
            reply.send_index(index);
        }
        Ok(())
    }

    /// Answer the pending request with any index, legal or not.
    pub fn submit_unchecked(&self, index: i32) -> Result<(), SubmitError> {
        let mut pending = lock(&self.shared);
        pending.open_request()?;
        if let Some((_, reply)) = pending.request.take() {
            reply.send_index(index);
        }
        Ok(())
    }

    /// Answer the pending request with a pass.
    pub fn pass(&self) -> Result<(), SubmitError> {
        self.submit_unchecked(Action::Pass.to_index())
    }
}
