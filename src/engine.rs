use crate::grid::GridSize;
use crate::input::Direction;
use crate::snake::{Cell, Snake};

/// Result of one movement tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickOutcome {
    pub ate_food: bool,
    pub collided: bool,
}

impl TickOutcome {
    const COLLIDED: Self = Self {
        ate_food: false,
        collided: true,
    };
}

/// Advances the snake by exactly one tick in `direction`.
///
/// A new head outside the grid or on an occupied cell reports a collision
/// and leaves the snake untouched. Otherwise the head is prepended and the
/// tail retained (head landed on `food`) or dropped.
///
/// The self-collision check runs against the pre-move body, tail included:
/// moving into the cell the tail is about to vacate still collides. The
/// reversal guard is the input layer's job and is not re-checked here.
pub fn step(snake: &mut Snake, direction: Direction, grid: GridSize, food: Cell) -> TickOutcome {
    let new_head = snake.head().step(direction);

    if !new_head.is_within(grid) {
        return TickOutcome::COLLIDED;
    }

    if snake.occupies(new_head) {
        return TickOutcome::COLLIDED;
    }

    let ate_food = new_head == food;
    snake.advance(new_head, ate_food);

    TickOutcome {
        ate_food,
        collided: false,
    }
}
