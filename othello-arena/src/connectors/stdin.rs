//! [`Connector`] for a human typing moves on the terminal.

use super::Connector;
use async_std::io;
use async_trait::async_trait;
use othello_engine::{Action, Location, MatchResult, Player, Position};
use tracing::warn;

/// Reads moves from standard input, one per line: cell notation ("D3"),
/// zero-based "row col", or "pass".
#[derive(Debug, Default)]
pub struct StdinConnector;

impl StdinConnector {
    pub fn new() -> Self {
        Self
    }
}

/// Parse a typed move.
pub(crate) fn parse_action(line: &str) -> Option<Action> {
    let line = line.trim();
    if let Ok(action) = line.parse() {
        return Some(action);
    }

    let mut segments = line.split_whitespace();
    let row: usize = segments.next()?.parse().ok()?;
    let col: usize = segments.next()?.parse().ok()?;
    if segments.next().is_some() {
        return None;
    }
    Location::from_coords(row, col).map(Action::MakeMove)
}

#[async_trait]
impl Connector for StdinConnector {
    async fn next_action(&mut self, position: Position, player: Player) -> Action {
        let legal = position.legal_moves(player);

        loop {
            println!("\n{}\n", position);
            println!("{} to move. Legal moves: {}", player, legal);
            println!("Enter a move: ");

            let mut buffer = String::new();
            match io::stdin().read_line(&mut buffer).await {
                Ok(0) => {
                    warn!("stdin closed; passing");
                    return Action::Pass;
                }
                Ok(_) => {}
                Err(error) => {
                    warn!(%error, "cannot read stdin; passing");
                    return Action::Pass;
                }
            }

            match parse_action(&buffer) {
                None => println!("Cannot parse move."),
                Some(Action::MakeMove(loc)) if !legal.contains(loc) => {
                    println!("Invalid move. Legal moves: {}", legal)
                }
                Some(Action::Pass) if !legal.is_empty() => {
                    println!("You have legal moves: {}", legal)
                }
                Some(action) => return action,
            }
        }
    }

    async fn match_over(&mut self, own_score: usize, opponent_score: usize, result: MatchResult) {
        let verdict = match result {
            MatchResult::Win => "You win",
            MatchResult::Draw => "Draw",
            MatchResult::Loss => "You lose",
        };
        println!("{}: {} to {}.", verdict, own_score, opponent_score);
    }
}
