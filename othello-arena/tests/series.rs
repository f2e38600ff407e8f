use async_std::task::block_on;
use othello_arena::{BotAgent, Match, MatchConfig, MatchSummary, Strategy};
use othello_engine::{Player, Position};
use std::sync::{Arc, Mutex};

fn arena(black: Strategy, white: Strategy, seed: u64) -> Match {
    Match::new(
        Box::new(BotAgent::seeded(black, seed)),
        Box::new(BotAgent::seeded(white, seed + 1)),
        MatchConfig::default(),
    )
}

fn play(black: Strategy, white: Strategy, seed: u64, games: usize) -> Vec<MatchSummary> {
    let mut arena = arena(black, white, seed);
    let mut summaries = Vec::new();
    block_on(arena.run_series(games, |summary| summaries.push(*summary)));
    summaries
}

#[test]
fn every_strategy_pairing_completes() {
    let strategies = [Strategy::RandomLegal, Strategy::GreedyFlips, Strategy::CornerEdge];
    for black in strategies {
        for white in strategies {
            for summary in play(black, white, 21, 2) {
                assert!(!summary.forced);
                assert_eq!(summary.violations, 0);
                assert_eq!(summary.timeouts, 0);
                assert!(summary.black_count + summary.white_count <= 64);
                // Every agent turn by a bot places exactly one stone.
                assert_eq!(summary.black_count + summary.white_count, 4 + summary.turns);
            }
        }
    }
}

#[test]
fn seeded_series_are_reproducible() {
    let first = play(Strategy::CornerEdge, Strategy::RandomLegal, 5, 4);
    let second = play(Strategy::CornerEdge, Strategy::RandomLegal, 5, 4);
    assert_eq!(first, second);
}

#[test]
fn replayed_moves_follow_the_rules() {
    let mut arena = arena(Strategy::GreedyFlips, Strategy::RandomLegal, 8);
    let moves = Arc::new(Mutex::new(Vec::new()));
    let log = moves.clone();
    arena.subscribe(move |applied| log.lock().unwrap().push(*applied));
    let summary = block_on(arena.run());

    let mut replay = Position::starting();
    let mut to_move = Player::Black;
    for applied in moves.lock().unwrap().iter() {
        if applied.player != to_move {
            // The side to move was skipped because it had nothing to play.
            assert!(!replay.has_any_legal_move(to_move));
            to_move = !to_move;
        }
        assert!(replay.cache().is_legal(applied.player, applied.location));
        assert_eq!(replay.play(applied.player, applied.location), applied.flipped);
        to_move = !to_move;
    }

    assert!(replay.is_finished());
    assert_eq!(&replay, arena.position());
    assert_eq!(replay.count_pieces(), (summary.black_count, summary.white_count));
}
