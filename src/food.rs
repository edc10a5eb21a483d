use rand::Rng;

use crate::grid::GridSize;
use crate::snake::{Cell, Snake};

/// Picks a uniformly random unoccupied cell for the next food.
///
/// Uses rejection sampling: draw coordinates until one misses the snake.
/// Returns `None` when the snake covers every in-bounds cell, in which case
/// no placement exists and the caller should treat the board as complete
/// rather than let the loop spin forever.
#[must_use]
pub fn place<R: Rng + ?Sized>(rng: &mut R, grid: GridSize, snake: &Snake) -> Option<Cell> {
    // Segments can sit outside the grid after a shrink; only in-bounds
    // segments block placement candidates.
    let blocked = snake
        .segments()
        .filter(|segment| segment.is_within(grid))
        .count();
    if blocked >= grid.total_cells() {
        return None;
    }

    loop {
        let candidate = Cell {
            row: rng.gen_range(0..i32::from(grid.rows)),
            col: rng.gen_range(0..i32::from(grid.cols)),
        };

        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::grid::GridSize;
    use crate::snake::{Cell, Snake};

    use super::place;

    #[test]
    fn food_never_lands_on_the_snake_or_outside_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = GridSize { rows: 6, cols: 8 };
        let snake = Snake::from_segments(vec![
            Cell { row: 0, col: 0 },
            Cell { row: 0, col: 1 },
            Cell { row: 0, col: 2 },
        ]);

        for _ in 0..100 {
            let food = place(&mut rng, grid, &snake).expect("board has free cells");
            assert!(food.is_within(grid));
            assert!(!snake.occupies(food));
        }
    }

    #[test]
    fn full_board_short_circuits_instead_of_looping() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = GridSize { rows: 1, cols: 2 };
        let snake = Snake::from_segments(vec![
            Cell { row: 0, col: 0 },
            Cell { row: 0, col: 1 },
        ]);

        assert_eq!(place(&mut rng, grid, &snake), None);
    }

    #[test]
    fn out_of_bounds_segments_do_not_block_placement() {
        // After a shrink the snake may lie entirely outside the grid; the
        // single remaining cell is still a valid placement.
        let mut rng = StdRng::seed_from_u64(13);
        let grid = GridSize { rows: 1, cols: 1 };
        let snake = Snake::from_segments(vec![
            Cell { row: 3, col: 5 },
            Cell { row: 4, col: 5 },
            Cell { row: 5, col: 5 },
        ]);

        assert_eq!(place(&mut rng, grid, &snake), Some(Cell { row: 0, col: 0 }));
    }
}
