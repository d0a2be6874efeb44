use crate::*;

/// Applies a mutating rule to every cell in row-major order, over and over, until a full pass
/// records zero changes. Returns the number of passes, counting the final confirming one.
///
/// Termination holds because each mutating rule only moves cells toward a more resolved state
/// (open to wall, or open to labeled) and the grid is finite.
pub fn relax_to_fixed_point(grid: &mut Grid2D<Cell>, rule: Rule) -> usize {
    debug_assert!(!rule.is_pure());

    let mut passes: usize = 0_usize;

    loop {
        let mut changes: usize = 0_usize;

        for pos in grid.iter_positions() {
            changes += rule.apply(grid, pos).changed as usize;
        }

        passes += 1_usize;

        if changes == 0_usize {
            return passes;
        }
    }
}

/// The maximum value a pure rule produces over all cells, folded from zero as a floor. One pass
/// suffices: a pure rule never records a change, so repeating the scan could not alter the result.
pub fn scan_for_max(grid: &mut Grid2D<Cell>, rule: Rule) -> i32 {
    debug_assert!(rule.is_pure());

    grid.iter_positions()
        .fold(0_i32, |max, pos| max.max(rule.apply(grid, pos).value))
}
