//! Compaction after removal.
//!
//! Gravity walks each line from its leading edge (the side cells fall
//! toward) outward, packs occupied cells against that edge in their
//! original order, then refills as many slots as the line lost this pass,
//! nearest the packed cells first. A refill that returns `Empty` ends the
//! line, so refilled cells never float.

use crate::core::{Adjacency, Cell, Edge, Gravity, Grid, Position};
use crate::refill::Refill;

use super::groups::index;

/// Positions of every line along `gravity`, each ordered from the leading edge.
fn lines(rows: usize, cols: usize, gravity: Gravity) -> Vec<Vec<Position>> {
    match gravity {
        Gravity::Down => (0..cols)
            .map(|col| (0..rows).rev().map(|row| Position::new(row, col)).collect())
            .collect(),
        Gravity::Up => (0..cols)
            .map(|col| (0..rows).map(|row| Position::new(row, col)).collect())
            .collect(),
        Gravity::Left => (0..rows)
            .map(|row| (0..cols).map(|col| Position::new(row, col)).collect())
            .collect(),
        Gravity::Right => (0..rows)
            .map(|row| (0..cols).rev().map(|col| Position::new(row, col)).collect())
            .collect(),
        Gravity::None => Vec::new(),
    }
}

/// Pack occupied cells toward `gravity` and refill vacated slots.
///
/// `vacated` marks cells removed this pass (row-major). Returns the number
/// of occupied cells the refill produced.
pub(crate) fn compact(
    grid: &mut Grid,
    gravity: Gravity,
    vacated: &[bool],
    refill: &mut dyn Refill,
) -> usize {
    let mut refilled = 0;

    for line in lines(grid.rows(), grid.cols(), gravity) {
        let lost = line.iter().filter(|&&p| vacated[index(grid, p)]).count();
        let packed: Vec<Cell> = line
            .iter()
            .map(|&p| grid.get(p))
            .filter(Cell::is_occupied)
            .collect();

        let mut slots = line.iter().copied();
        for (&cell, pos) in packed.iter().zip(slots.by_ref()) {
            grid.set(pos, cell);
        }

        let mut budget = lost;
        for pos in slots {
            let cell = if budget > 0 {
                budget -= 1;
                refill.refill(pos)
            } else {
                Cell::Empty
            };
            if cell.is_empty() {
                budget = 0;
            } else {
                refilled += 1;
            }
            grid.set(pos, cell);
        }
    }
    refilled
}

/// Remove fully empty columns, shifting the rest toward column 0.
pub(crate) fn collapse_empty_columns(grid: &mut Grid) {
    let kept: Vec<Vec<Cell>> = (0..grid.cols())
        .map(|col| grid.column(col))
        .filter(|column| column.iter().any(Cell::is_occupied))
        .collect();
    if kept.len() == grid.cols() {
        return;
    }

    let blank = vec![Cell::Empty; grid.rows()];
    for col in 0..grid.cols() {
        grid.set_column(col, kept.get(col).unwrap_or(&blank));
    }
}

/// Clear occupied cells with no occupied path to `edge`.
///
/// Returns the dropped positions, row-major.
pub(crate) fn drop_unanchored(grid: &mut Grid, adjacency: Adjacency, edge: Edge) -> Vec<Position> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut anchored = vec![false; grid.len()];
    let mut stack: Vec<Position> = grid
        .positions()
        .filter(|&p| edge.contains(p, rows, cols) && grid.get(p).is_occupied())
        .collect();
    for &p in &stack {
        anchored[index(grid, p)] = true;
    }

    while let Some(pos) = stack.pop() {
        for next in adjacency.neighbors(pos, rows, cols) {
            let i = index(grid, next);
            if !anchored[i] && grid.get(next).is_occupied() {
                anchored[i] = true;
                stack.push(next);
            }
        }
    }

    let dropped: Vec<Position> = grid
        .positions()
        .filter(|&p| grid.get(p).is_occupied() && !anchored[index(grid, p)])
        .collect();
    for &p in &dropped {
        grid.set(p, Cell::Empty);
    }
    dropped
}
