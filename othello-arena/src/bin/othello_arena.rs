//! Run Othello matches between built-in bots or a human on the terminal.

use anyhow::{ensure, Result};
use async_std::task;
use clap::{Parser, ValueEnum};
use indicatif::ProgressBar;
use othello_arena::connectors::{ConnectorAgent, StdinConnector};
use othello_arena::{Agent, BotAgent, Match, MatchConfig, Strategy};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// How long a human gets per move unless `--timeout-ms` says otherwise.
const HUMAN_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AgentKind {
    Random,
    Greedy,
    CornerEdge,
    Human,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Who plays Black (moves first)
    #[arg(long, value_enum, default_value = "corner-edge")]
    black: AgentKind,

    /// Who plays White
    #[arg(long, value_enum, default_value = "random")]
    white: AgentKind,

    /// Number of matches to play
    #[arg(short, long, default_value_t = 1)]
    games: usize,

    /// Seed for the bots; omit for fresh randomness
    #[arg(long)]
    seed: Option<u64>,

    /// Per-move timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Pause after each move in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// End a match by score after this many agent turns
    #[arg(long)]
    max_turns: Option<usize>,

    /// Log running statistics every N games (0 disables)
    #[arg(long, default_value_t = 10)]
    log_every: usize,
}

fn build_agent(kind: AgentKind, seed: Option<u64>) -> Box<dyn Agent> {
    let strategy = match kind {
        AgentKind::Random => Strategy::RandomLegal,
        AgentKind::Greedy => Strategy::GreedyFlips,
        AgentKind::CornerEdge => Strategy::CornerEdge,
        AgentKind::Human => return Box::new(ConnectorAgent::new(StdinConnector::new())),
    };
    match seed {
        Some(seed) => Box::new(BotAgent::seeded(strategy, seed)),
        None => Box::new(BotAgent::new(strategy)),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    ensure!(args.games > 0, "--games must be at least 1");
    if let Some(max_turns) = args.max_turns {
        ensure!(max_turns > 0, "--max-turns must be at least 1");
    }

    let has_human = args.black == AgentKind::Human || args.white == AgentKind::Human;
    let move_timeout = match args.timeout_ms {
        Some(ms) => Duration::from_millis(ms),
        None if has_human => HUMAN_TIMEOUT,
        None => MatchConfig::default().move_timeout,
    };
    let config = MatchConfig::default()
        .with_move_timeout(move_timeout)
        .with_move_delay(Duration::from_millis(args.delay_ms))
        .with_max_turns(args.max_turns)
        .with_log_every(args.log_every);

    let black = build_agent(args.black, args.seed);
    let white = build_agent(args.white, args.seed.map(|seed| seed.wrapping_add(1)));
    let mut arena = Match::new(black, white, config);

    // A progress bar would garble the board printed for a human.
    let progress = if has_human || args.games == 1 {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(args.games as u64)
    };

    let stats = task::block_on(arena.run_series(args.games, |_| progress.inc(1)));
    progress.finish_and_clear();

    info!(black = ?args.black, white = ?args.white, "series finished");
    println!("{}", stats);
    Ok(())
}
