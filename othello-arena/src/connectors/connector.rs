//! The async [`Connector`] seam and its adapter to the [`Agent`] contract.

use crate::agent::{Agent, MoveReply};
use async_std::sync::Mutex;
use async_std::task::{self, JoinHandle};
use async_trait::async_trait;
use othello_engine::{Action, MatchResult, Player, Position};
use std::sync::Arc;
use tracing::trace;

/// An asynchronous way of getting moves from "the outside world."
#[async_trait]
pub trait Connector: Send + 'static {
    /// Get `player`'s action in `position`. May take arbitrarily long; the
    /// match stops waiting once its move timeout runs out.
    async fn next_action(&mut self, position: Position, player: Player) -> Action;

    /// Report the end of a match.
    async fn match_over(&mut self, _own_score: usize, _opponent_score: usize, _result: MatchResult) {}
}

/// Adapts a [`Connector`] to the [`Agent`] contract by answering each request
/// from a spawned task.
///
/// At most one request is in flight: a new request or the end of the match
/// cancels the previous task, and a task whose turn has ended before it gets
/// the connector never asks it.
pub struct ConnectorAgent<C: Connector> {
    connector: Arc<Mutex<C>>,
    player: Player,
    in_flight: Option<JoinHandle<()>>,
}

impl<C: Connector> ConnectorAgent<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector: Arc::new(Mutex::new(connector)),
            player: Player::default(),
            in_flight: None,
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(previous) = self.in_flight.take() {
            task::spawn(previous.cancel());
        }
    }
}

impl<C: Connector> Agent for ConnectorAgent<C> {
    fn configure(&mut self, player: Player, _position: &Position) {
        self.player = player;
    }

    fn request_move(&mut self, position: &Position, reply: MoveReply) {
        self.cancel_in_flight();
        let connector = self.connector.clone();
        let position = *position;
        let player = self.player;
        self.in_flight = Some(task::spawn(async move {
            let mut connector = connector.lock().await;
            if !reply.is_current() {
                trace!(generation = reply.generation(), "turn ended before the connector was free");
                return;
            }
            let action = connector.next_action(position, player).await;
            reply.send(action);
        }));
    }

    fn on_match_end(&mut self, own_score: usize, opponent_score: usize, result: MatchResult) {
        self.cancel_in_flight();
        let connector = self.connector.clone();
        task::spawn(async move {
            connector
                .lock()
                .await
                .match_over(own_score, opponent_score, result)
                .await;
        });
    }

    fn name(&self) -> &str {
        "connector"
    }
}
