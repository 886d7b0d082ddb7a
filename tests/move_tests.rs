//! Swap move integration tests.
//!
//! These tests play seeded match-3 sessions end to end: seed a board with
//! no matches, apply hinted moves, and reshuffle when the board is stuck.

use match_cascade::core::{Grid, GridRng, Position, ResolverConfig};
use match_cascade::refill::{NoRefill, RandomRefill};
use match_cascade::resolve::MatchResolver;

fn match3() -> MatchResolver {
    MatchResolver::new(ResolverConfig::match3()).unwrap()
}

// =============================================================================
// Session Tests
// =============================================================================

/// Test a seeded session where every hinted move is accepted.
#[test]
fn test_seeded_session_plays_hints() {
    let resolver = match3();
    let mut rng = GridRng::new(42);
    let mut refill = RandomRefill::from_rng(rng.fork(), 6);
    let mut grid = resolver.seed_without_matches(8, 8, 6, &mut rng).unwrap();

    for turn in 0..20 {
        let moves = resolver.valid_moves(&grid);
        if moves.is_empty() {
            match resolver.reshuffle(&grid, &mut rng) {
                Some(shuffled) => grid = shuffled,
                None => break,
            }
            continue;
        }
        let (from, to) = moves[turn % moves.len()];
        let outcome = resolver.apply_move(&grid, from, to, &mut refill);

        assert!(outcome.valid);
        assert!(outcome.total_cleared() >= 3);
        let cascade = outcome.cascade.unwrap();
        assert!(cascade.is_stable());
        assert_eq!(outcome.grid.occupied_count(), 64);
        assert!(resolver.find_groups(&outcome.grid).is_empty());
        grid = outcome.grid;
    }
}

/// Test that the same seeds replay the same session.
#[test]
fn test_session_replays_from_seed() {
    let play = |seed: u64| {
        let resolver = match3();
        let mut rng = GridRng::new(seed);
        let mut refill = RandomRefill::new(seed ^ 0xABCD, 5);
        let mut grid = resolver.seed_without_matches(6, 6, 5, &mut rng).unwrap();
        let mut cleared = 0;
        for _ in 0..10 {
            let Some(&(from, to)) = resolver.valid_moves(&grid).first() else {
                break;
            };
            let outcome = resolver.apply_move(&grid, from, to, &mut refill);
            cleared += outcome.total_cleared();
            grid = outcome.grid;
        }
        (grid, cleared)
    };

    assert_eq!(play(11), play(11));
}

// =============================================================================
// Rejection Tests
// =============================================================================

/// Test that every rejected swap leaves the board untouched.
#[test]
fn test_rejected_swaps_leave_board() {
    let resolver = match3();
    let grid = resolver.seed_without_matches(5, 5, 5, &mut GridRng::new(3)).unwrap();
    let accepted = resolver.valid_moves(&grid);

    for from in grid.positions() {
        for to in [Position::new(from.row, from.col + 1), Position::new(from.row + 1, from.col)] {
            if !grid.contains(to) {
                continue;
            }
            let outcome = resolver.apply_move(&grid, from, to, &mut NoRefill);
            assert_eq!(outcome.valid, accepted.contains(&(from, to)));
            if !outcome.valid {
                assert_eq!(outcome.grid, grid);
            }
        }
    }
}

/// Test that a board without moves has no hints.
#[test]
fn test_stuck_board_has_no_hints() {
    let grid = Grid::from_ascii(4, "
        0123
        1230
        2301
        3012
    ");
    let resolver = match3();
    assert!(resolver.find_groups(&grid).is_empty());
    assert!(resolver.valid_moves(&grid).is_empty());
}

/// Test that a Puyo-style connected variant accepts swaps that complete a group.
#[test]
fn test_connected_variant_swap() {
    let grid = Grid::from_ascii(3, "
        001
        010
        122
    ");
    let resolver = MatchResolver::new(ResolverConfig::puyo()).unwrap();
    assert!(!resolver.apply_move(&grid, Position::new(2, 0), Position::new(2, 1), &mut NoRefill).valid);

    // Moving the 0 at (1, 2) into the middle completes a square of four.
    let outcome = resolver.apply_move(&grid, Position::new(1, 1), Position::new(1, 2), &mut NoRefill);
    assert!(outcome.valid);
    assert_eq!(outcome.total_cleared(), 4);
    assert_eq!(outcome.grid.to_string(), "..1\n..1\n122\n");
}
