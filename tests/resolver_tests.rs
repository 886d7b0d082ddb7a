//! Cascade resolution integration tests.
//!
//! These tests drive `MatchResolver` through each preset variant and the
//! reference scenarios: a single run, a no-match board, and a two-step chain.

use match_cascade::core::{Adjacency, Cell, Gravity, Grid, Position, ResolverConfig, Tile};
use match_cascade::refill::{NoRefill, RandomRefill, SequenceRefill};
use match_cascade::resolve::{MatchResolver, ResolutionStatus};

/// 8x8 board with no two equal neighbors, using kinds 1..=7.
fn checkerless_board() -> Grid {
    let mut grid = Grid::new(8, 8, 8);
    for pos in grid.positions().collect::<Vec<_>>() {
        let kind = 1 + ((pos.row * 3 + pos.col) % 7) as u8;
        grid.set(pos, Cell::kind(kind));
    }
    grid
}

/// The same board with a horizontal run of kind 0 at row 4, columns 2-4.
fn board_with_run() -> Grid {
    let mut grid = checkerless_board();
    for col in 2..=4 {
        grid.set(Position::new(4, col), Cell::kind(0));
    }
    grid
}

// =============================================================================
// Single Pass Tests
// =============================================================================

/// Test that a run of three clears exactly three cells.
#[test]
fn test_run_of_three_clears_three() {
    let grid = board_with_run();
    for config in [ResolverConfig::match3(), ResolverConfig::new(3)] {
        let resolver = MatchResolver::new(config).unwrap();
        let outcome = resolver.resolve_once(&grid, &mut NoRefill);
        assert_eq!(outcome.cleared, 3);
        assert_eq!(outcome.report.groups.len(), 1);
        assert_eq!(outcome.report.groups[0].tile, Tile::new(0));
    }
}

/// Test that cleared positions are empty before compaction.
#[test]
fn test_cleared_positions_become_empty() {
    let grid = board_with_run();
    let resolver = MatchResolver::new(ResolverConfig::match3().with_gravity(Gravity::None)).unwrap();
    let outcome = resolver.resolve_once(&grid, &mut NoRefill);

    for pos in grid.positions() {
        if pos.row == 4 && (2..=4).contains(&pos.col) {
            assert!(outcome.grid.get(pos).is_empty());
        } else {
            assert_eq!(outcome.grid.get(pos), grid.get(pos));
        }
    }
}

/// Test that cells above the run fall one row.
#[test]
fn test_cells_above_run_fall() {
    let grid = board_with_run();
    let resolver = MatchResolver::new(ResolverConfig::match3()).unwrap();
    let outcome = resolver.resolve_once(&grid, &mut NoRefill);

    for col in 2..=4 {
        assert!(outcome.grid.get(Position::new(0, col)).is_empty());
        for row in 0..4 {
            assert_eq!(
                outcome.grid.get(Position::new(row + 1, col)),
                grid.get(Position::new(row, col))
            );
        }
    }
    assert_eq!(outcome.grid.occupied_count(), 61);
}

/// Test that a board without equal neighbors is a fixed point.
#[test]
fn test_no_match_grid_unchanged() {
    let grid = checkerless_board();
    for config in [
        ResolverConfig::match3(),
        ResolverConfig::puyo(),
        ResolverConfig::columns(),
        ResolverConfig::same_game(),
        ResolverConfig::new(2).with_adjacency(Adjacency::Diagonal),
    ] {
        let resolver = MatchResolver::new(config).unwrap();
        let outcome = resolver.resolve_once(&grid, &mut RandomRefill::new(1, 8));
        assert_eq!(outcome.cleared, 0);
        assert_eq!(outcome.grid, grid);
    }
}

// =============================================================================
// Cascade Tests
// =============================================================================

/// Test that a chain reports the clears of every pass.
#[test]
fn test_cascade_counts_every_pass() {
    let grid = Grid::from_ascii(2, "
        1..
        0..
        0..
        011
    ");
    let resolver = MatchResolver::new(ResolverConfig::new(3)).unwrap();

    let first = resolver.resolve_once(&grid, &mut NoRefill);
    assert_eq!(first.cleared, 3);
    let second = resolver.resolve_once(&first.grid, &mut NoRefill);
    assert_eq!(second.cleared, 3);

    let cascade = resolver.resolve_until_stable(&grid, &mut NoRefill);
    assert_eq!(cascade.status, ResolutionStatus::Stable);
    assert_eq!(cascade.chain(), 2);
    assert!(cascade.total_cleared >= first.cleared + second.cleared);
    assert_eq!(cascade.total_cleared, 6);
    assert_eq!(cascade.grid.occupied_count(), 0);
}

/// Test that a stable result stays stable.
#[test]
fn test_resolved_grid_is_stable() {
    let resolver = MatchResolver::new(ResolverConfig::match3()).unwrap();
    let mut rng = match_cascade::core::GridRng::new(2024);
    let grid = Grid::random(8, 8, 4, &mut rng);

    let cascade = resolver.resolve_until_stable(&grid, &mut RandomRefill::new(5, 4));
    assert!(cascade.is_stable());
    assert!(resolver.resolve_once(&cascade.grid, &mut NoRefill).is_stable());
    assert!(resolver.find_groups(&cascade.grid).is_empty());
    assert_eq!(cascade.grid.occupied_count(), 64);
}

/// Test that fixed refill sequences give identical cascades.
#[test]
fn test_cascade_deterministic_with_sequence_refill() {
    let resolver = MatchResolver::new(ResolverConfig::puyo()).unwrap();
    let grid = Grid::random(12, 6, 4, &mut match_cascade::core::GridRng::new(9));
    let sequence = vec![Cell::kind(0), Cell::kind(1), Cell::kind(2), Cell::kind(3), Cell::kind(1)];

    let a = resolver.resolve_until_stable(&grid, &mut SequenceRefill::new(sequence.clone()));
    let b = resolver.resolve_until_stable(&grid, &mut SequenceRefill::new(sequence));
    assert_eq!(a, b);
}

/// Test that a refill which recreates matches hits the cap, not a hang.
#[test]
fn test_runaway_refill_is_capped() {
    let grid = Grid::from_ascii(1, "
        000
        000
    ");
    let resolver = MatchResolver::new(ResolverConfig::match3()).unwrap();
    let cascade = resolver.resolve_until_stable(&grid, &mut SequenceRefill::new(vec![Cell::kind(0)]));

    // 6 cells, min 3: at most 2 passes.
    assert_eq!(cascade.status, ResolutionStatus::Capped { passes: 2 });
    assert_eq!(cascade.chain(), 2);
    assert_eq!(cascade.total_refilled(), 12);
}

// =============================================================================
// Variant Tests
// =============================================================================

/// Test that Columns clears diagonal runs.
#[test]
fn test_columns_diagonal_run() {
    let grid = Grid::from_ascii(3, "
        0..
        10.
        210
    ");
    let resolver = MatchResolver::new(ResolverConfig::columns()).unwrap();
    let cascade = resolver.resolve_until_stable(&grid, &mut NoRefill);
    assert_eq!(cascade.total_cleared, 3);
    assert_eq!(cascade.grid.to_string(), "...\n1..\n21.\n");
}

/// Test that Bubble Shooter drops bubbles hanging from a popped group.
#[test]
fn test_bubble_shooter_drops_hanging() {
    let grid = Grid::from_ascii(2, "
        0011
        ....
        1...
    ");
    let resolver = MatchResolver::new(ResolverConfig::bubble_shooter()).unwrap();
    let cascade = resolver.insert_and_resolve(&grid, Position::new(1, 0), Tile::new(0), &mut NoRefill);

    assert_eq!(cascade.chain(), 1);
    assert_eq!(cascade.passes[0].dropped, 1);
    assert_eq!(cascade.total_cleared, 4);
    assert_eq!(cascade.grid.to_string(), "..11\n....\n....\n");
}

/// Test that a shot that forms no group just sticks.
#[test]
fn test_bubble_shooter_sticks() {
    let grid = Grid::from_ascii(2, "
        0011
        ....
    ");
    let resolver = MatchResolver::new(ResolverConfig::bubble_shooter()).unwrap();
    let cascade = resolver.insert_and_resolve(&grid, Position::new(1, 0), Tile::new(1), &mut NoRefill);
    assert_eq!(cascade.chain(), 0);
    assert_eq!(cascade.grid.get(Position::new(1, 0)), Cell::kind(1));
}

/// Test that a shot leaves clusters it does not touch in place.
#[test]
fn test_bubble_shooter_ignores_untouched_cluster() {
    let grid = Grid::from_ascii(3, "
        0001
        ....
    ");
    let resolver = MatchResolver::new(ResolverConfig::bubble_shooter()).unwrap();
    let cascade = resolver.insert_and_resolve(&grid, Position::new(1, 3), Tile::new(2), &mut NoRefill);

    assert!(cascade.is_stable());
    assert_eq!(cascade.chain(), 0);
    assert_eq!(cascade.total_cleared, 0);
    assert_eq!(cascade.grid.to_string(), "0001\n...2\n");
}

/// Test that a shot pops only the cluster it joins.
#[test]
fn test_bubble_shooter_pops_own_cluster_only() {
    let grid = Grid::from_ascii(2, "
        00011
        .....
    ");
    let resolver = MatchResolver::new(ResolverConfig::bubble_shooter()).unwrap();
    let cascade = resolver.insert_and_resolve(&grid, Position::new(1, 3), Tile::new(1), &mut NoRefill);

    assert_eq!(cascade.chain(), 1);
    assert_eq!(cascade.passes[0].groups.len(), 1);
    assert_eq!(cascade.passes[0].dropped, 0);
    assert_eq!(cascade.total_cleared, 3);
    assert_eq!(cascade.grid.to_string(), "000..\n.....\n");
}

/// Test that Puyo drops a piece and chains.
#[test]
fn test_puyo_insert_chains() {
    let grid = Grid::from_ascii(2, "
        ....
        1...
        000.
        1110
    ");
    let resolver = MatchResolver::new(ResolverConfig::puyo()).unwrap();
    let cascade = resolver.insert_and_resolve(&grid, Position::new(0, 3), Tile::new(0), &mut NoRefill);
    assert_eq!(cascade.chain(), 2);
    assert_eq!(cascade.total_cleared, 9);
}

/// Test SameGame taps until only singles remain.
#[test]
fn test_same_game_taps() {
    let grid = Grid::from_ascii(3, "
        012
        002
        112
    ");
    let resolver = MatchResolver::new(ResolverConfig::same_game()).unwrap();

    let tap = resolver.clear_group_at(&grid, Position::new(0, 2), &mut NoRefill);
    assert_eq!(tap.cleared, 3);
    assert_eq!(tap.grid.to_string(), "01.\n00.\n11.\n");

    let tap = resolver.clear_group_at(&tap.grid, Position::new(1, 0), &mut NoRefill);
    assert_eq!(tap.cleared, 3);
    assert_eq!(tap.grid.to_string(), "...\n.1.\n11.\n");
}
